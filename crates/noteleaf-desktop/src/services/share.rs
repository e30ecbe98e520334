//! Note sharing services
//!
//! Desktop equivalents of the platform share surfaces: plain text goes to
//! the system clipboard, images are persisted as PNG and handed to the
//! system opener. All failures are user-visible and non-crashing; nothing
//! here retries.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use noteleaf_core::capture::{encode_png, load_system_font, NoteCard};
use noteleaf_core::share::share_message;

use crate::state::AppState;

/// Shown when the note card could not be captured
pub const CAPTURE_FAILED_MESSAGE: &str = "Something went wrong!";
/// Shown when the captured image could not be persisted
pub const SAVE_FAILED_MESSAGE: &str = "Could not save the note image";

/// Share a note as plain text via the system clipboard.
pub fn share_note_as_text(mut state: AppState, title: &str, body: &str) {
    let message = share_message(title, body);

    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(message)) {
        Ok(()) => state.show_toast("Note copied to clipboard"),
        Err(error) => {
            // No usable clipboard on this host; nothing for the user to act on.
            tracing::warn!("Clipboard share failed: {error}");
        }
    }
}

/// Share a note as an image: capture, persist, then open with the system
/// handler. Aborts with a transient message when capture or persistence
/// fails; an already-persisted file is not cleaned up on a later failure.
pub async fn share_note_as_image(mut state: AppState, title: String, body: String) {
    let Some(bitmap) = capture_note_card(&title, &body) else {
        state.show_toast(CAPTURE_FAILED_MESSAGE);
        return;
    };

    let Some(path) = persist_share_image(&bitmap) else {
        state.show_toast(SAVE_FAILED_MESSAGE);
        return;
    };

    if let Err(error) = open::that(&path) {
        tracing::warn!("No handler opened shared image {}: {error}", path.display());
    }
}

/// Capture the note card; `None` when rendering is not possible on this host.
fn capture_note_card(title: &str, body: &str) -> Option<RgbaImage> {
    let font = load_system_font()?;
    let card = NoteCard {
        title: title.to_string(),
        body: body.to_string(),
    };
    Some(card.render(&font))
}

/// Deterministic file name for a persisted note image
#[must_use]
pub fn share_image_file_name(timestamp_ms: i64) -> String {
    format!("noteleaf-note-{timestamp_ms}.png")
}

fn share_directory() -> Option<PathBuf> {
    dirs::picture_dir()
        .or_else(dirs::cache_dir)
        .map(|dir| dir.join("noteleaf"))
}

fn persist_share_image(bitmap: &RgbaImage) -> Option<PathBuf> {
    let dir = share_directory()?;
    persist_share_image_into(&dir, bitmap)
}

fn persist_share_image_into(dir: &Path, bitmap: &RgbaImage) -> Option<PathBuf> {
    let bytes = match encode_png(bitmap) {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Failed to encode note image: {error}");
            return None;
        }
    };

    if let Err(error) = std::fs::create_dir_all(dir) {
        tracing::error!("Failed to create share directory {}: {error}", dir.display());
        return None;
    }

    let path = dir.join(share_image_file_name(chrono::Utc::now().timestamp_millis()));
    match std::fs::write(&path, bytes) {
        Ok(()) => Some(path),
        Err(error) => {
            tracing::error!("Failed to write note image {}: {error}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn share_image_file_name_is_deterministic() {
        assert_eq!(share_image_file_name(123), "noteleaf-note-123.png");
    }

    #[test]
    fn persist_share_image_into_writes_decodable_png() {
        let dir = tempfile::tempdir().unwrap();
        let bitmap = RgbaImage::from_pixel(4, 4, image::Rgba([255, 255, 255, 255]));

        let path = persist_share_image_into(dir.path(), &bitmap).unwrap();
        assert!(path.exists());

        let bytes = std::fs::read(&path).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 4);
    }

    #[test]
    fn persist_share_image_into_reports_unusable_location_as_none() {
        // A file in place of the target directory makes create_dir_all fail.
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();

        let bitmap = RgbaImage::from_pixel(4, 4, image::Rgba([255, 255, 255, 255]));
        assert!(persist_share_image_into(&blocker, &bitmap).is_none());
    }
}
