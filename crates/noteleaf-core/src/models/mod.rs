//! Data models for Noteleaf

mod note;

pub use note::{Note, NoteId};
