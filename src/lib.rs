//! Sending-status badge for the outbox pages.
//!
//! Pages that render their own `#sending-status` element call
//! `startSendingStatus()` from JavaScript; yew apps mount [`SendingStatusBadge`]
//! instead. Both poll `/status/sending` every two seconds by default.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Document;

pub mod app;
pub mod badge;
pub mod config;
pub mod error;
pub mod logging;
pub mod poller;
pub mod sink;
pub mod source;
pub mod status;

pub use badge::SendingStatusBadge;
pub use config::PollerConfig;
pub use error::{ConfigError, PollError};
pub use poller::{PollHandle, StatusPoller};
pub use sink::{BadgeSink, ElementSink};
pub use source::{HttpStatusSource, StatusSource};
pub use status::{BadgeStyle, BadgeView, SendingStatus};

/// Starts polling once the document has loaded and keeps going for the
/// lifetime of the page. `options` may be omitted; see [`PollerConfig`].
#[wasm_bindgen(js_name = startSendingStatus)]
pub fn start_sending_status(options: JsValue) -> Result<(), JsValue> {
    let config = PollerConfig::from_js(options)?;
    logging::setup_logging(config.log_level.into());

    let window = web_sys::window().ok_or(ConfigError::NoBrowser("window"))?;
    let document = window
        .document()
        .ok_or(ConfigError::NoBrowser("document"))?;

    if is_loading(&document.ready_state()) {
        let target = document.clone();
        let on_loaded = Closure::once_into_js(move || start_polling(target, &config));
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_loaded.unchecked_ref::<js_sys::Function>(),
        )?;
    } else {
        start_polling(document, &config);
    }

    Ok(())
}

fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn start_polling(document: Document, config: &PollerConfig) {
    let source = HttpStatusSource::new(config.endpoint.as_str());
    log::info!(
        "Polling {} into #{} every {}ms",
        source.endpoint(),
        config.element_id,
        config.interval_ms
    );

    let sink = ElementSink::by_id(document, config.element_id.as_str());
    let poller = StatusPoller::new(source, sink).with_interval(config.interval_ms);
    Rc::new(poller).start().detach();
}
