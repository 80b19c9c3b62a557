use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;

use crate::config::DEFAULT_INTERVAL_MS;
use crate::sink::BadgeSink;
use crate::source::StatusSource;
use crate::status::BadgeView;

/// Polls a [`StatusSource`] and renders each answer into a [`BadgeSink`].
pub struct StatusPoller<S, K> {
    source: S,
    sink: K,
    interval_ms: u32,
}

impl<S, K> StatusPoller<S, K>
where
    S: StatusSource,
    K: BadgeSink,
{
    pub fn new(source: S, sink: K) -> Self {
        Self {
            source,
            sink,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }

    /// A zero interval would fire back to back, so it falls back to the default.
    pub fn with_interval(mut self, interval_ms: u32) -> Self {
        if interval_ms == 0 {
            log::warn!(
                "Ignoring zero polling interval, using {}ms",
                DEFAULT_INTERVAL_MS
            );
            self.interval_ms = DEFAULT_INTERVAL_MS;
        } else {
            self.interval_ms = interval_ms;
        }
        self
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Runs a single poll. Failures never escape: they turn into the error badge
    /// and the next tick tries again.
    pub async fn update_sending_status(&self) {
        let view = match self.source.fetch_status().await {
            Ok(status) => {
                log::trace!("Sending status: {:?}", status);
                BadgeView::from_status(&status)
            }
            Err(e) => {
                log::debug!("Sending status poll failed: {}", e);
                BadgeView::error()
            }
        };
        self.sink.show(&view);
    }
}

impl<S, K> StatusPoller<S, K>
where
    S: StatusSource + 'static,
    K: BadgeSink + 'static,
{
    /// Polls every `interval_ms` until the returned handle is stopped or dropped.
    /// The first poll fires one interval after the call. Ticks do not wait for
    /// the previous request, so a slow server can have several in flight.
    pub fn start(self: Rc<Self>) -> PollHandle {
        let interval_ms = self.interval_ms;
        log::debug!("Polling sending status every {}ms", interval_ms);

        let interval = Interval::new(interval_ms, move || {
            let poller = Rc::clone(&self);
            spawn_local(async move {
                poller.update_sending_status().await;
            });
        });

        PollHandle { interval }
    }
}

#[must_use = "polling stops as soon as the handle is dropped"]
pub struct PollHandle {
    interval: Interval,
}

impl PollHandle {
    pub fn stop(self) {
        drop(self.interval.cancel());
        log::debug!("Sending status polling stopped");
    }

    /// Keeps polling for the rest of the page's lifetime.
    pub fn detach(self) {
        let _ = self.interval.forget();
    }
}
