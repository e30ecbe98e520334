//! Editable title and body fields for a note draft

use dioxus::prelude::*;

use crate::theme;

/// Single-line note title input
#[component]
pub fn NoteTitleField(value: String, on_change: EventHandler<String>) -> Element {
    let colors = theme::palette();

    rsx! {
        input {
            class: "note-title-field",
            r#type: "text",
            style: "
                width: 100%;
                border: none;
                outline: none;
                background: transparent;
                font-size: 22px;
                font-weight: 600;
                color: {colors.text_primary};
            ",
            value: "{value}",
            placeholder: "Title",
            oninput: move |event: Event<FormData>| on_change.call(event.value()),
        }
    }
}

/// Multi-line note body editor
#[component]
pub fn NoteBodyField(value: String, on_change: EventHandler<String>) -> Element {
    let colors = theme::palette();

    rsx! {
        textarea {
            class: "note-body-field",
            style: "
                flex: 1;
                width: 100%;
                margin-top: 8px;
                border: none;
                outline: none;
                resize: none;
                background: transparent;
                font-family: inherit;
                font-size: inherit;
                line-height: 1.6;
                color: {colors.text_primary};
            ",
            value: "{value}",
            placeholder: "Write your note...",
            oninput: move |event: Event<FormData>| on_change.call(event.value()),
        }
    }
}
