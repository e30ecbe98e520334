//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;

use noteleaf_core::db::{NoteRepository, SqliteNoteRepository};
use noteleaf_core::{Error, Result};

use crate::components::Toast;
use crate::state::{AppState, Screen};
use crate::theme;
use crate::views::{NoteDetailsScreen, NoteListScreen};

/// Root application component
#[component]
pub fn App() -> Element {
    let mut state = AppState::use_provider();
    let mut storage_initialized = use_signal(|| false);

    // Initialize storage (only once)
    use_effect(move || {
        if storage_initialized() {
            return;
        }
        storage_initialized.set(true); // Mark immediately to prevent double init

        spawn(async move {
            match open_repository() {
                Ok(repo) => {
                    tracing::info!("Note storage ready");
                    state
                        .repository
                        .set(Some(Arc::new(repo) as Arc<dyn NoteRepository>));
                }
                Err(error) => {
                    tracing::error!("Failed to initialize note storage: {error}");
                    state.show_toast("Could not open note storage");
                }
            }
        });
    });

    let colors = theme::palette();

    let screen = match (state.screen)() {
        Screen::NoteList => rsx! { NoteListScreen {} },
        Screen::NoteDetails(note_id) => rsx! { NoteDetailsScreen { note_id } },
    };

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 15px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",

            {screen}

            Toast {}
        }
    }
}

/// Open the on-disk note database under the user data directory.
fn open_repository() -> Result<SqliteNoteRepository> {
    let dir = dirs::data_dir()
        .ok_or_else(|| Error::InvalidInput("No user data directory available".to_string()))?
        .join("noteleaf");
    std::fs::create_dir_all(&dir)?;
    SqliteNoteRepository::open(dir.join("notes.db3"))
}
