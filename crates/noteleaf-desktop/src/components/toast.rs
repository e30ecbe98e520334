//! Transient status message overlay

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme;

/// Auto-dismissing toast fed by `AppState::show_toast`
#[component]
pub fn Toast() -> Element {
    let state = use_context::<AppState>();
    let colors = theme::palette();

    let Some(message) = (state.status_message)() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "toast",
            style: "
                position: fixed;
                bottom: 16px;
                left: 50%;
                transform: translateX(-50%);
                z-index: 9999;
                background: {colors.text_primary};
                color: {colors.bg_surface};
                border-radius: 999px;
                padding: 8px 18px;
                font-size: 13px;
                pointer-events: none;
            ",
            "{message}"
        }
    }
}
