use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::PollError;
use crate::status::SendingStatus;

/// Where a poll gets its status from.
#[allow(async_fn_in_trait)]
pub trait StatusSource {
    async fn fetch_status(&self) -> Result<SendingStatus, PollError>;
}

/// Fetches the status from the server with the browser `fetch()` API.
#[derive(Debug, Clone)]
pub struct HttpStatusSource {
    endpoint: String,
}

impl HttpStatusSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl StatusSource for HttpStatusSource {
    async fn fetch_status(&self) -> Result<SendingStatus, PollError> {
        let window =
            web_sys::window().ok_or_else(|| PollError::Network("window unavailable".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_str(&self.endpoint))
            .await
            .map_err(PollError::network)?;
        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| PollError::Network("fetch did not yield a Response".to_string()))?;

        if !resp.ok() {
            return Err(PollError::Status(resp.status()));
        }

        let body = JsFuture::from(resp.json().map_err(PollError::decode_js)?)
            .await
            .map_err(PollError::decode_js)?;
        serde_wasm_bindgen::from_value(body).map_err(PollError::decode)
    }
}
