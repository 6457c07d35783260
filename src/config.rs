//! Storefront Configuration
//!
//! Defaults match the shop's live page. A page can override any field with
//! an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="storefront-config">
//!   { "whatsapp_number": "628123456789" }
//! </script>
//! ```

use serde::Deserialize;

use crate::error::Result;
use crate::surface::Surface;

/// Selector of the inline config block
pub const CONFIG_SELECTOR: &str = "#storefront-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Number used in the `wa.me` order link
    pub whatsapp_number: String,
    pub currency_prefix: String,
    /// Nav target treated as home when the path ends with "/"
    pub home_href: String,
    /// Header shrinks above this scroll offset (px)
    pub shrink_threshold: f64,
    /// Minimum scroll delta (px) that hides or reveals the header
    pub hide_threshold: f64,
    /// Name shown when a product card has no `data-name`
    pub fallback_product_name: String,
    /// First line of the order message
    pub order_greeting: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "6285779025769".to_string(),
            currency_prefix: "Rp".to_string(),
            home_href: "index.html".to_string(),
            shrink_threshold: 20.0,
            hide_threshold: 12.0,
            fallback_product_name: "Produk".to_string(),
            order_greeting: "Halo, saya mau pesan:".to_string(),
        }
    }
}

impl StorefrontConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read the inline config block. Missing or invalid blocks yield defaults.
    pub fn load<S: Surface>(surface: &S) -> Self {
        let Some(node) = surface.query(CONFIG_SELECTOR) else {
            return Self::default();
        };
        let text = surface.text(&node);
        if text.trim().is_empty() {
            return Self::default();
        }
        match Self::from_json(&text) {
            Ok(config) => {
                log::debug!("[CONFIG] Loaded page overrides");
                config
            }
            Err(e) => {
                log::warn!("[CONFIG] {}, using defaults", e);
                Self::default()
            }
        }
    }
}
