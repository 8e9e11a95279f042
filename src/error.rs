//! Error types
//!
//! Nothing here reaches the user. Browser bindings propagate these with `?`
//! and the entry points log them and carry on.

use thiserror::Error;

/// Failures inside the page bindings and configuration loading
#[derive(Error, Debug)]
pub enum Error {
    /// `window`, `document` or `body` is not available
    #[error("Missing browser global: {0}")]
    MissingGlobal(&'static str),

    /// A DOM or JS call threw
    #[error("DOM error: {0}")]
    Dom(String),

    /// An element had an unexpected type
    #[error("Element {0} has an unexpected type")]
    ElementType(String),

    /// The page configuration block is not valid JSON
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Error::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Result alias for this crate
pub type Result<T> = std::result::Result<T, Error>;
