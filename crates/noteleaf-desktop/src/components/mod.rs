//! Reusable UI components

mod failure_dialog;
mod note_fields;
mod save_fab;
mod toast;
mod top_bar;

pub use failure_dialog::FailureDialog;
pub use note_fields::{NoteBodyField, NoteTitleField};
pub use save_fab::SaveFab;
pub use toast::Toast;
pub use top_bar::{ShareActionItem, TopBar};
