//! Application state management
//!
//! Global state accessible via Dioxus context providers. Navigation and the
//! transient status message live here so any component can reach them
//! through explicit context rather than ambient globals.

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;

use noteleaf_core::db::NoteRepository;
use noteleaf_core::NoteId;

/// How long a transient status message stays visible
const TOAST_VISIBLE_MS: u64 = 3000;

/// The screen currently shown by the app
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    NoteList,
    NoteDetails(NoteId),
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Note repository (set once storage finishes initializing)
    pub repository: Signal<Option<Arc<dyn NoteRepository>>>,
    /// Current screen; doubles as the navigation handle
    pub screen: Signal<Screen>,
    /// Transient status message (auto-dismissing toast)
    pub status_message: Signal<Option<String>>,
    /// Monotonic toast version so a stale dismiss never clears a newer toast
    toast_version: Signal<u64>,
}

impl AppState {
    /// Build the state signals inside a component
    pub fn use_provider() -> Self {
        let repository = use_signal(|| None);
        let screen = use_signal(|| Screen::NoteList);
        let status_message = use_signal(|| None);
        let toast_version = use_signal(|| 0u64);

        use_context_provider(|| Self {
            repository,
            screen,
            status_message,
            toast_version,
        })
    }

    /// Navigate back to the note list
    pub fn navigate_back(&mut self) {
        self.screen.set(Screen::NoteList);
    }

    /// Open the details screen for a note
    pub fn open_note(&mut self, id: NoteId) {
        self.screen.set(Screen::NoteDetails(id));
    }

    /// Show a transient status message that dismisses itself
    pub fn show_toast(&mut self, message: impl Into<String>) {
        let version = (self.toast_version)() + 1;
        self.toast_version.set(version);
        self.status_message.set(Some(message.into()));

        let mut status_message = self.status_message;
        let toast_version = self.toast_version;
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(TOAST_VISIBLE_MS)).await;
            if toast_version() == version {
                status_message.set(None);
            }
        });
    }
}
