//! Note details view-model
//!
//! Owns the three streams the details screen subscribes to: the note
//! itself and the one-shot outcomes of the update and delete commands.
//! Outcomes are consumed with `take_*` so a re-render can never re-trigger
//! navigation or re-show a dialog for a stale result.

use std::sync::Arc;

use dioxus::prelude::*;

use noteleaf_core::db::NoteRepository;
use noteleaf_core::{Note, NoteId};

use crate::state::AppState;

/// Terminal outcome of an update or delete command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpOutcome {
    Success,
    Failure(String),
}

/// What the screen should do in reaction to a consumed outcome
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenAction {
    NavigateBack,
    ShowFailure(String),
}

/// Map an (optional) operation outcome to the screen reaction.
#[must_use]
pub fn outcome_action(outcome: Option<OpOutcome>) -> Option<ScreenAction> {
    match outcome {
        None => None,
        Some(OpOutcome::Success) => Some(ScreenAction::NavigateBack),
        Some(OpOutcome::Failure(message)) => Some(ScreenAction::ShowFailure(message)),
    }
}

/// Trim a draft the way the save action submits it.
#[must_use]
pub fn trimmed_draft(title: &str, body: &str) -> (String, String) {
    (title.trim().to_string(), body.trim().to_string())
}

/// View-model for the note details screen
#[derive(Clone, Copy)]
pub struct NoteDetailViewModel {
    /// The note under edit, absent until loaded
    pub note: Signal<Option<Note>>,
    update_result: Signal<Option<OpOutcome>>,
    delete_result: Signal<Option<OpOutcome>>,
    repository: Signal<Option<Arc<dyn NoteRepository>>>,
    note_id: NoteId,
}

/// Hook constructor: build a view-model bound to one note
pub fn use_note_detail_view_model(note_id: NoteId) -> NoteDetailViewModel {
    let state = use_context::<AppState>();
    let mut note = use_signal(|| None);
    let update_result = use_signal(|| None);
    let delete_result = use_signal(|| None);
    let repository = state.repository;
    let mut loaded = use_signal(|| false);

    // Load the note once storage is ready.
    use_effect(move || {
        let Some(repo) = repository() else {
            return;
        };
        if loaded() {
            return;
        }
        loaded.set(true);

        match repo.get(&note_id) {
            Ok(found) => {
                if found.is_none() {
                    tracing::warn!("Note {note_id} no longer exists");
                }
                note.set(found);
            }
            Err(error) => {
                tracing::error!("Failed to load note {note_id}: {error}");
            }
        }
    });

    NoteDetailViewModel {
        note,
        update_result,
        delete_result,
        repository,
        note_id,
    }
}

impl NoteDetailViewModel {
    /// Persist new title/body for the note; outcome lands in the update stream
    pub fn update_note(&self, title: String, body: String) {
        let repo = (self.repository)();
        let note_id = self.note_id;
        let mut update_result = self.update_result;

        spawn(async move {
            let Some(repo) = repo else {
                update_result.set(Some(OpOutcome::Failure(
                    "Notes storage is still initializing".to_string(),
                )));
                return;
            };
            match repo.update(&note_id, &title, &body) {
                Ok(_) => update_result.set(Some(OpOutcome::Success)),
                Err(error) => {
                    tracing::error!("Failed to update note {note_id}: {error}");
                    update_result.set(Some(OpOutcome::Failure(error.to_string())));
                }
            }
        });
    }

    /// Delete the note unconditionally; outcome lands in the delete stream
    pub fn delete_note(&self) {
        let repo = (self.repository)();
        let note_id = self.note_id;
        let mut delete_result = self.delete_result;

        spawn(async move {
            let Some(repo) = repo else {
                delete_result.set(Some(OpOutcome::Failure(
                    "Notes storage is still initializing".to_string(),
                )));
                return;
            };
            match repo.delete(&note_id) {
                Ok(()) => delete_result.set(Some(OpOutcome::Success)),
                Err(error) => {
                    tracing::error!("Failed to delete note {note_id}: {error}");
                    delete_result.set(Some(OpOutcome::Failure(error.to_string())));
                }
            }
        });
    }

    /// Consume the pending update outcome, if any (one-shot)
    pub fn take_update_result(&mut self) -> Option<OpOutcome> {
        consume(&mut self.update_result)
    }

    /// Consume the pending delete outcome, if any (one-shot)
    pub fn take_delete_result(&mut self) -> Option<OpOutcome> {
        consume(&mut self.delete_result)
    }
}

/// Take an outcome out of its slot, clearing the slot only when it held a
/// value. A consumed outcome is gone: the next take yields `None`, so
/// navigation or a dialog can never replay for a stale result.
fn take_outcome(slot: &mut Option<OpOutcome>) -> Option<OpOutcome> {
    slot.take()
}

/// Signal-backed variant of [`take_outcome`]. Writes back only on an actual
/// consume; a plain `None` read must not mark the signal dirty or the
/// reactive scope doing the consuming would re-run on its own writes.
fn consume(signal: &mut Signal<Option<OpOutcome>>) -> Option<OpOutcome> {
    let mut pending = (*signal)();
    let outcome = take_outcome(&mut pending);
    if outcome.is_some() {
        signal.set(pending);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_outcome_means_no_action() {
        assert_eq!(outcome_action(None), None);
    }

    #[test]
    fn success_navigates_back() {
        assert_eq!(
            outcome_action(Some(OpOutcome::Success)),
            Some(ScreenAction::NavigateBack)
        );
    }

    #[test]
    fn failure_shows_dialog_with_exact_message() {
        assert_eq!(
            outcome_action(Some(OpOutcome::Failure("boom".to_string()))),
            Some(ScreenAction::ShowFailure("boom".to_string()))
        );
    }

    #[test]
    fn success_outcome_is_consumed_exactly_once() {
        let mut slot = Some(OpOutcome::Success);

        assert_eq!(take_outcome(&mut slot), Some(OpOutcome::Success));
        assert_eq!(take_outcome(&mut slot), None);
        assert_eq!(slot, None);
    }

    #[test]
    fn failure_outcome_is_consumed_exactly_once_with_message_intact() {
        let mut slot = Some(OpOutcome::Failure("boom".to_string()));

        assert_eq!(
            take_outcome(&mut slot),
            Some(OpOutcome::Failure("boom".to_string()))
        );
        assert_eq!(take_outcome(&mut slot), None);
    }

    #[test]
    fn empty_slot_yields_nothing_and_stays_empty() {
        let mut slot = None;

        assert_eq!(take_outcome(&mut slot), None);
        assert_eq!(slot, None);
    }

    #[test]
    fn trimmed_draft_strips_surrounding_whitespace() {
        assert_eq!(
            trimmed_draft("  Groceries ", "\nMilk, eggs\t"),
            ("Groceries".to_string(), "Milk, eggs".to_string())
        );
    }

    #[test]
    fn trimmed_draft_keeps_inner_whitespace() {
        assert_eq!(
            trimmed_draft("a b", "c\nd"),
            ("a b".to_string(), "c\nd".to_string())
        );
    }
}
