use wasm_bindgen::JsValue;

/// A poll that produced no usable status. Every variant renders the same
/// error badge.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PollError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Server responded with HTTP {0}")]
    Status(u16),
    #[error("Invalid status payload: {0}")]
    Decode(String),
}

impl PollError {
    pub(crate) fn network(err: JsValue) -> Self {
        PollError::Network(describe(&err))
    }

    pub(crate) fn decode(err: impl ToString) -> Self {
        PollError::Decode(err.to_string())
    }

    pub(crate) fn decode_js(err: JsValue) -> Self {
        PollError::Decode(describe(&err))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
    #[error("Polling interval must be greater than zero")]
    ZeroInterval,
    #[error("Browser environment unavailable: {0}")]
    NoBrowser(&'static str),
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
