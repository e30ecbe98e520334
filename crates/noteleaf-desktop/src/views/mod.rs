//! Application views

mod details;
mod list;

pub use details::NoteDetailsScreen;
pub use list::NoteListScreen;
