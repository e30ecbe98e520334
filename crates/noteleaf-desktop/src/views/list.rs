//! Note list screen
//!
//! Entry point of the app: lists stored notes newest first, opens the
//! details screen on click and offers a small inline capture card for
//! creating new notes.

use dioxus::prelude::*;

use noteleaf_core::validator::is_valid_note;
use noteleaf_core::Note;

use crate::state::AppState;
use crate::theme;
use crate::viewmodel::trimmed_draft;

#[component]
pub fn NoteListScreen() -> Element {
    let mut state = use_context::<AppState>();
    let mut notes = use_signal(Vec::<Note>::new);
    let mut new_title = use_signal(String::new);
    let mut new_body = use_signal(String::new);
    let mut refresh_version = use_signal(|| 0u64);

    // Load notes once storage is ready; reload after every create.
    use_effect(move || {
        let _ = refresh_version();
        let Some(repo) = (state.repository)() else {
            return;
        };
        match repo.list() {
            Ok(loaded) => notes.set(loaded),
            Err(error) => {
                tracing::error!("Failed to list notes: {error}");
            }
        }
    });

    let can_create = is_valid_note(&new_title(), &new_body());

    let on_create = move |_| {
        let Some(repo) = (state.repository)() else {
            return;
        };
        let (title, body) = trimmed_draft(&new_title(), &new_body());
        match repo.create(&title, &body) {
            Ok(_) => {
                new_title.set(String::new());
                new_body.set(String::new());
                refresh_version.set(refresh_version() + 1);
                state.show_toast("Note created");
            }
            Err(error) => {
                tracing::error!("Failed to create note: {error}");
                state.show_toast("Could not create the note");
            }
        }
    };

    let colors = theme::palette();

    rsx! {
        div {
            class: "note-list",
            style: "
                max-width: 640px;
                margin: 0 auto;
                padding: 16px;
                display: flex;
                flex-direction: column;
                gap: 12px;
            ",

            p {
                style: "margin: 0; font-size: 20px; font-weight: 700; color: {colors.text_primary};",
                "Noteleaf"
            }

            // Inline capture card for new notes
            div {
                style: "
                    background: {colors.bg_surface};
                    border: 1px solid {colors.border};
                    border-radius: 12px;
                    padding: 12px;
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                ",

                input {
                    r#type: "text",
                    style: "border: none; outline: none; font-size: 15px; font-weight: 600; background: transparent;",
                    value: "{new_title}",
                    placeholder: "Title",
                    oninput: move |event: Event<FormData>| new_title.set(event.value()),
                }
                textarea {
                    style: "border: none; outline: none; resize: none; font-family: inherit; font-size: 14px; background: transparent;",
                    rows: "2",
                    value: "{new_body}",
                    placeholder: "Write your note...",
                    oninput: move |event: Event<FormData>| new_body.set(event.value()),
                }
                button {
                    style: "
                        align-self: flex-end;
                        border: none;
                        border-radius: 8px;
                        background: {colors.accent};
                        color: #ffffff;
                        cursor: pointer;
                        padding: 6px 14px;
                        font-size: 13px;
                    ",
                    disabled: !can_create,
                    onclick: on_create,
                    "Add note"
                }
            }

            if notes().is_empty() {
                p {
                    style: "margin: 24px 0; text-align: center; color: {colors.text_muted};",
                    "No notes yet. Capture your first one above."
                }
            } else {
                for note in notes() {
                    div {
                        key: "{note.id}",
                        style: "
                            background: {colors.bg_surface};
                            border: 1px solid {colors.border};
                            border-radius: 12px;
                            padding: 12px;
                            cursor: pointer;
                        ",
                        onclick: move |_| state.open_note(note.id),

                        p {
                            style: "margin: 0; font-size: 15px; font-weight: 600; color: {colors.text_primary};",
                            "{note.title}"
                        }
                        p {
                            style: "
                                margin: 4px 0 0 0;
                                font-size: 13px;
                                color: {colors.text_muted};
                                overflow: hidden;
                                text-overflow: ellipsis;
                                white-space: nowrap;
                            ",
                            "{note.body}"
                        }
                        p {
                            style: "margin: 6px 0 0 0; font-size: 11px; color: {colors.text_muted};",
                            "{format_timestamp(note.updated_at)}"
                        }
                    }
                }
            }
        }
    }
}

/// Format a Unix-ms timestamp for list display
fn format_timestamp(timestamp_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(timestamp_ms)
        .map(|moment| moment.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn format_timestamp_renders_utc_minute_precision() {
        // 2021-01-01 00:00:00 UTC
        assert_eq!(format_timestamp(1_609_459_200_000), "2021-01-01 00:00");
    }

    #[test]
    fn format_timestamp_tolerates_out_of_range_values() {
        assert_eq!(format_timestamp(i64::MAX), "");
    }
}
