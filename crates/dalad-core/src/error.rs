use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    #[error("unsupported language code: {0:?}")]
    UnsupportedLanguage(String),
    #[error("unknown translation key: {0:?}")]
    UnknownTextKey(String),
    #[error("unknown product: {0:?}")]
    UnknownProduct(String),
}
