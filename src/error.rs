//! Error kinds surfaced by the demo.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DemoError {
    /// Rejected at startup: bad block length, period, opacity or a viewport too
    /// small to hold a single block.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// No two placed blocks share a width, so there is nothing to animate.
    #[error("no two blocks share a width")]
    NoEligiblePair,
    /// A browser API (window, document, 2d context) was unavailable.
    #[error("host unavailable: {0}")]
    Host(String),
}

impl DemoError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        DemoError::InvalidConfiguration(msg.into())
    }
}

impl From<DemoError> for JsValue {
    fn from(err: DemoError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
