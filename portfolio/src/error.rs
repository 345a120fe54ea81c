//! Error type shared by the host bindings, config loader and logger.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong while wiring the page to its host.
///
/// None of these reach the user: handlers log them and fall back to a no-op.
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("no global `window` available")]
    NoWindow,

    #[error("window has no `document`")]
    NoDocument,

    #[error("javascript error: {0}")]
    Js(String),

    #[error("invalid site config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("invalid log level `{0}`")]
    InvalidLogLevel(String),

    #[error("logger init failed: {0}")]
    Logging(String),

    #[error("unknown section `{0}`")]
    UnknownSection(String),
}

impl From<JsValue> for PortfolioError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub type Result<T, E = PortfolioError> = std::result::Result<T, E>;
