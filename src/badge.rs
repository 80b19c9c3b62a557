use std::rc::Rc;

use yew::prelude::*;

use crate::config::{DEFAULT_ELEMENT_ID, DEFAULT_ENDPOINT, DEFAULT_INTERVAL_MS};
use crate::poller::StatusPoller;
use crate::sink::BadgeSink;
use crate::source::HttpStatusSource;
use crate::status::BadgeView;

impl BadgeSink for UseStateSetter<BadgeView> {
    fn show(&self, view: &BadgeView) {
        self.set(view.clone());
    }
}

#[derive(Properties, PartialEq)]
pub struct SendingStatusBadgeProps {
    #[prop_or(AttrValue::Static(DEFAULT_ENDPOINT))]
    pub endpoint: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_ELEMENT_ID))]
    pub id: AttrValue,
    #[prop_or(DEFAULT_INTERVAL_MS)]
    pub interval_ms: u32,
}

#[function_component(SendingStatusBadge)]
pub fn sending_status_badge(props: &SendingStatusBadgeProps) -> Html {
    let view = use_state(BadgeView::default);

    {
        let setter = view.setter();
        use_effect_with(
            (props.endpoint.clone(), props.interval_ms),
            move |(endpoint, interval_ms)| {
                let poller = StatusPoller::new(HttpStatusSource::new(endpoint.as_str()), setter)
                    .with_interval(*interval_ms);
                let handle = Rc::new(poller).start();
                move || handle.stop()
            },
        );
    }

    html! {
        <span id={props.id.clone()} class={view.class_name()}>{ view.text.clone() }</span>
    }
}
