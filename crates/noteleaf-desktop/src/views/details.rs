//! Note details screen
//!
//! Displays one note with editable title/body drafts, a top bar with
//! back/delete/share actions and a floating save control gated by
//! validation. Update/delete outcomes are consumed as one-shot events:
//! success navigates back, failure shows a modal dialog.

use dioxus::prelude::*;

use noteleaf_core::validator::is_valid_note;
use noteleaf_core::NoteId;

use crate::components::{
    FailureDialog, NoteBodyField, NoteTitleField, SaveFab, ShareActionItem, TopBar,
};
use crate::services::share;
use crate::state::AppState;
use crate::theme;
use crate::viewmodel::{outcome_action, trimmed_draft, use_note_detail_view_model, ScreenAction};

#[component]
pub fn NoteDetailsScreen(note_id: NoteId) -> Element {
    let mut state = use_context::<AppState>();
    let mut viewmodel = use_note_detail_view_model(note_id);

    let mut draft_title = use_signal(String::new);
    let mut draft_body = use_signal(String::new);
    let mut draft_seeded = use_signal(|| false);
    let mut failure_message = use_signal(|| None::<String>);

    // Seed the draft once from the first loaded note. Later upstream
    // emissions never overwrite local edits.
    use_effect(move || {
        if draft_seeded() {
            return;
        }
        let Some(note) = (viewmodel.note)() else {
            return;
        };
        draft_title.set(note.title);
        draft_body.set(note.body);
        draft_seeded.set(true);
    });

    // Consume update/delete outcomes independently, one-shot each.
    use_effect(move || {
        let actions = [
            outcome_action(viewmodel.take_update_result()),
            outcome_action(viewmodel.take_delete_result()),
        ];
        for action in actions.into_iter().flatten() {
            match action {
                ScreenAction::NavigateBack => state.navigate_back(),
                ScreenAction::ShowFailure(message) => failure_message.set(Some(message)),
            }
        }
    });

    // Nothing to show until the note stream emits.
    if (viewmodel.note)().is_none() {
        return rsx! {};
    }

    let colors = theme::palette();
    let is_valid = is_valid_note(&draft_title(), &draft_body());

    // Share descriptors are rebuilt on every render; nothing persists.
    let share_actions = vec![
        ShareActionItem {
            label: "Text".to_string(),
            on_select: EventHandler::new(move |()| {
                share::share_note_as_text(state, &draft_title(), &draft_body());
            }),
        },
        ShareActionItem {
            label: "Image".to_string(),
            on_select: EventHandler::new(move |()| {
                let title = draft_title();
                let body = draft_body();
                spawn(async move {
                    share::share_note_as_image(state, title, body).await;
                });
            }),
        },
    ];

    rsx! {
        div {
            class: "note-details",
            style: "display: flex; flex-direction: column; height: 100vh;",

            TopBar {
                title: "Noteleaf",
                on_back: move |()| state.navigate_back(),
                on_delete: move |()| viewmodel.delete_note(),
                share_actions,
            }

            // Capture region: the share card renders from the same draft
            // contents shown here.
            div {
                class: "note-capture-region",
                style: "
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    padding: 16px;
                    overflow-y: auto;
                    background: {colors.bg_primary};
                ",

                NoteTitleField {
                    value: draft_title(),
                    on_change: move |value| draft_title.set(value),
                }
                NoteBodyField {
                    value: draft_body(),
                    on_change: move |value| draft_body.set(value),
                }
            }

            SaveFab {
                valid: is_valid,
                on_save: move |()| {
                    let (title, body) = trimmed_draft(&draft_title(), &draft_body());
                    viewmodel.update_note(title, body);
                },
            }

            if let Some(message) = failure_message() {
                FailureDialog {
                    message,
                    on_dismiss: move |()| failure_message.set(None),
                }
            }
        }
    }
}
