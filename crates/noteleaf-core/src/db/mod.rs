//! Database layer for Noteleaf

mod repository;

pub use repository::{NoteRepository, SqliteNoteRepository};
