//! Order Pricing and Links
//!
//! Package sizes, price tables, rupiah formatting and the WhatsApp order link.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::StorefrontConfig;

/// Characters left alone by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Package size in grams
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SizeKey {
    #[default]
    G50,
    G100,
    G200,
}

impl SizeKey {
    pub const ALL: [SizeKey; 3] = [SizeKey::G50, SizeKey::G100, SizeKey::G200];

    /// Value used in `data-size` and `data-price-*` attributes
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeKey::G50 => "50",
            SizeKey::G100 => "100",
            SizeKey::G200 => "200",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        SizeKey::ALL.into_iter().find(|size| size.as_str() == key.trim())
    }
}

impl fmt::Display for SizeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit price per package size
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PriceTable {
    pub g50: u64,
    pub g100: u64,
    pub g200: u64,
}

impl PriceTable {
    /// Build from raw attribute values; missing or unparseable prices are 0
    pub fn from_raw(g50: Option<&str>, g100: Option<&str>, g200: Option<&str>) -> Self {
        Self {
            g50: parse_price(g50),
            g100: parse_price(g100),
            g200: parse_price(g200),
        }
    }

    pub fn unit_price(&self, size: SizeKey) -> u64 {
        match size {
            SizeKey::G50 => self.g50,
            SizeKey::G100 => self.g100,
            SizeKey::G200 => self.g200,
        }
    }
}

fn parse_price(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

/// `prefix` + amount with "." thousands separators, e.g. `Rp54.000`
pub fn format_currency(prefix: &str, amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("{}{}", prefix, grouped)
}

/// Everything the order message needs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderSummary<'a> {
    pub product: &'a str,
    pub size: SizeKey,
    pub quantity: u32,
    pub total: u64,
}

impl OrderSummary<'_> {
    pub fn message(&self, config: &StorefrontConfig) -> String {
        format!(
            "{}\nProduk: {}\nUkuran: {}g\nJumlah: {}\nTotal: {}",
            config.order_greeting,
            self.product,
            self.size,
            self.quantity,
            format_currency(&config.currency_prefix, self.total)
        )
    }

    pub fn link(&self, config: &StorefrontConfig) -> String {
        let text = utf8_percent_encode(&self.message(config), URI_COMPONENT).to_string();
        format!("https://wa.me/{}?text={}", config.whatsapp_number, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency("Rp", 0), "Rp0");
        assert_eq!(format_currency("Rp", 999), "Rp999");
        assert_eq!(format_currency("Rp", 54000), "Rp54.000");
        assert_eq!(format_currency("Rp", 1234567), "Rp1.234.567");
    }

    #[test]
    fn test_price_table_defaults_bad_values_to_zero() {
        let prices = PriceTable::from_raw(Some("10000"), None, Some("abc"));
        assert_eq!(prices.unit_price(SizeKey::G50), 10000);
        assert_eq!(prices.unit_price(SizeKey::G100), 0);
        assert_eq!(prices.unit_price(SizeKey::G200), 0);
    }

    #[test]
    fn test_size_key_parsing() {
        assert_eq!(SizeKey::from_key("100"), Some(SizeKey::G100));
        assert_eq!(SizeKey::from_key("75"), None);
        assert_eq!(SizeKey::default(), SizeKey::G50);
    }

    #[test]
    fn test_order_link_encodes_message() {
        let config = StorefrontConfig::default();
        let summary = OrderSummary {
            product: "Kopi Gayo",
            size: SizeKey::G100,
            quantity: 3,
            total: 54000,
        };
        let link = summary.link(&config);
        assert!(link.starts_with("https://wa.me/6285779025769?text=Halo%2C%20saya%20mau%20pesan%3A%0A"));
        assert!(link.contains("Produk%3A%20Kopi%20Gayo"));
        assert!(link.contains("Ukuran%3A%20100g"));
        assert!(link.contains("Jumlah%3A%203"));
        assert!(link.ends_with("Total%3A%20Rp54.000"));
    }
}
