//! noteleaf-core - Core library for Noteleaf
//!
//! This crate contains the shared models, validation, storage layer and
//! note-card rendering used by the Noteleaf interfaces.

pub mod capture;
pub mod db;
pub mod error;
pub mod models;
pub mod share;
pub mod validator;

pub use error::{Error, Result};
pub use models::{Note, NoteId};
