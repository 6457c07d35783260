//! Storefront Errors
//!
//! Setup-time failures only. Event handlers fall back to safe defaults
//! instead of returning errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("invalid storefront config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
