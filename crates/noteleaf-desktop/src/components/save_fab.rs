//! Floating save control

use dioxus::prelude::*;

use crate::theme;

/// Shown in the save slot while the draft fails validation
pub const INVALID_DRAFT_MESSAGE: &str = "Note title or note text are not valid!";

/// Floating save slot: the save button while the draft validates, the
/// "not valid" hint in its place otherwise.
#[component]
pub fn SaveFab(valid: bool, on_save: EventHandler<()>) -> Element {
    let colors = theme::palette();

    rsx! {
        div {
            class: "save-slot",
            style: "position: fixed; right: 24px; bottom: 24px; z-index: 30;",

            if valid {
                button {
                    class: "save-fab",
                    style: "
                        border: none;
                        border-radius: 999px;
                        background: {colors.accent};
                        color: #ffffff;
                        cursor: pointer;
                        padding: 12px 20px;
                        font-size: 14px;
                        font-weight: 600;
                        box-shadow: 0 4px 12px rgba(17, 24, 39, 0.2);
                    ",
                    onclick: move |_| on_save.call(()),
                    "\u{2713} Save"
                }
            } else {
                p {
                    style: "
                        margin: 0;
                        background: {colors.bg_surface};
                        border: 1px solid {colors.border};
                        border-radius: 999px;
                        padding: 8px 16px;
                        font-size: 13px;
                        color: {colors.text_muted};
                    ",
                    "{INVALID_DRAFT_MESSAGE}"
                }
            }
        }
    }
}
