//! Modal failure dialog

use dioxus::prelude::*;

use crate::theme;

/// Blocking dialog showing an operation failure message.
/// Requires explicit dismissal.
#[component]
pub fn FailureDialog(message: String, on_dismiss: EventHandler<()>) -> Element {
    let colors = theme::palette();

    rsx! {
        div {
            class: "failure-dialog-overlay",
            style: "
                position: fixed;
                inset: 0;
                background: rgba(17, 24, 39, 0.55);
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 16px;
                z-index: 9998;
            ",
            div {
                class: "failure-dialog",
                style: "
                    width: 100%;
                    max-width: 360px;
                    background: {colors.bg_surface};
                    border: 1px solid {colors.border};
                    border-radius: 12px;
                    padding: 16px;
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                ",

                p {
                    style: "margin: 0; font-size: 14px; font-weight: 600; color: {colors.text_danger};",
                    "Something went wrong"
                }
                p {
                    style: "margin: 0; font-size: 14px; color: {colors.text_primary};",
                    "{message}"
                }
                button {
                    style: "
                        align-self: flex-end;
                        border: 1px solid {colors.border};
                        border-radius: 8px;
                        background: {colors.bg_surface};
                        cursor: pointer;
                        padding: 6px 14px;
                        font-size: 14px;
                    ",
                    onclick: move |_| on_dismiss.call(()),
                    "OK"
                }
            }
        }
    }
}
