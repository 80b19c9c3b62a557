use yew::prelude::*;

use crate::badge::SendingStatusBadge;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="status-bar">
            <span class="status-text">{"Outbox"}</span>
            <SendingStatusBadge />
        </div>
    }
}
