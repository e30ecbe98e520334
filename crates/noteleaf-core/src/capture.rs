//! Note card rendering
//!
//! Turns a note's current draft contents into a shareable bitmap. The card
//! is rendered with a system font discovered at runtime; when no usable
//! font exists, capture is reported as not possible and callers fall back
//! to a transient error message.

use std::io::Cursor;

use ab_glyph::{FontVec, PxScale};
use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;

use crate::error::{Error, Result};

/// Fixed card width in pixels
pub const CARD_WIDTH: u32 = 720;

const MARGIN: u32 = 32;
const ACCENT_BAR_HEIGHT: u32 = 10;
const TITLE_BODY_GAP: u32 = 16;
const TITLE_SCALE: f32 = 30.0;
const BODY_SCALE: f32 = 19.0;
const TITLE_LINE_HEIGHT: u32 = 40;
const BODY_LINE_HEIGHT: u32 = 27;
const TITLE_WRAP_CHARS: usize = 40;
const BODY_WRAP_CHARS: usize = 64;
// Caps keep the card allocation bounded for pathological inputs.
const TITLE_MAX_LINES: usize = 4;
const BODY_MAX_LINES: usize = 60;

const CARD_BG: Rgba<u8> = Rgba([255, 255, 255, 255]);
const ACCENT: Rgba<u8> = Rgba([67, 125, 232, 255]);
const TITLE_COLOR: Rgba<u8> = Rgba([17, 24, 39, 255]);
const BODY_COLOR: Rgba<u8> = Rgba([55, 65, 81, 255]);

/// A note's contents laid out as a shareable card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub title: String,
    pub body: String,
}

impl NoteCard {
    /// Render the card into a bitmap using the given font
    #[must_use]
    pub fn render(&self, font: &FontVec) -> RgbaImage {
        let title_lines = clamp_lines(wrap_text(&self.title, TITLE_WRAP_CHARS), TITLE_MAX_LINES);
        let body_lines = clamp_lines(wrap_text(&self.body, BODY_WRAP_CHARS), BODY_MAX_LINES);

        let text_height = title_lines.len() as u32 * TITLE_LINE_HEIGHT
            + TITLE_BODY_GAP
            + body_lines.len() as u32 * BODY_LINE_HEIGHT;
        let height = ACCENT_BAR_HEIGHT + MARGIN + text_height + MARGIN;

        let mut image = RgbaImage::from_pixel(CARD_WIDTH, height, CARD_BG);
        draw_filled_rect_mut(
            &mut image,
            Rect::at(0, 0).of_size(CARD_WIDTH, ACCENT_BAR_HEIGHT),
            ACCENT,
        );

        let mut cursor = (ACCENT_BAR_HEIGHT + MARGIN) as i32;
        for line in &title_lines {
            draw_text_mut(
                &mut image,
                TITLE_COLOR,
                MARGIN as i32,
                cursor,
                PxScale::from(TITLE_SCALE),
                font,
                line,
            );
            cursor += TITLE_LINE_HEIGHT as i32;
        }

        cursor += TITLE_BODY_GAP as i32;
        for line in &body_lines {
            draw_text_mut(
                &mut image,
                BODY_COLOR,
                MARGIN as i32,
                cursor,
                PxScale::from(BODY_SCALE),
                font,
                line,
            );
            cursor += BODY_LINE_HEIGHT as i32;
        }

        image
    }
}

/// Wrap text to lines of at most `max_chars` characters, preserving words
/// where possible and keeping explicit line breaks.
#[must_use]
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for raw_line in text.lines() {
        if raw_line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            push_word(&mut lines, &mut current, word, max_chars);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Truncate wrapped lines to `max_lines`, marking overflow with an ellipsis.
fn clamp_lines(mut lines: Vec<String>, max_lines: usize) -> Vec<String> {
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            last.push('\u{2026}');
        }
    }
    lines
}

fn push_word(lines: &mut Vec<String>, current: &mut String, word: &str, max_chars: usize) {
    let word_len = word.chars().count();
    let current_len = current.chars().count();

    if !current.is_empty() && current_len + 1 + word_len <= max_chars {
        current.push(' ');
        current.push_str(word);
        return;
    }

    if !current.is_empty() {
        lines.push(std::mem::take(current));
    }

    if word_len <= max_chars {
        current.push_str(word);
        return;
    }

    // A single word longer than the budget gets hard-split.
    let mut chunk = String::new();
    for ch in word.chars() {
        chunk.push(ch);
        if chunk.chars().count() == max_chars {
            lines.push(std::mem::take(&mut chunk));
        }
    }
    *current = chunk;
}

/// Encode a rendered card as PNG bytes
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|error| Error::Image(format!("Failed to encode note card: {error}")))?;
    Ok(cursor.into_inner())
}

#[cfg(target_os = "linux")]
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

#[cfg(target_os = "macos")]
const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Verdana.ttf",
    "/Library/Fonts/Arial.ttf",
];

#[cfg(target_os = "windows")]
const FONT_CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\calibri.ttf",
];

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
const FONT_CANDIDATES: &[&str] = &[];

/// Load a usable system font for card rendering.
///
/// Returns `None` when no candidate exists on this host, in which case
/// capture is not possible.
#[must_use]
pub fn load_system_font() -> Option<FontVec> {
    for path in FONT_CANDIDATES {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        match FontVec::try_from_vec(bytes) {
            Ok(font) => {
                tracing::debug!("Loaded card font from {path}");
                return Some(font);
            }
            Err(error) => {
                tracing::debug!("Skipping font {path}: {error}");
            }
        }
    }

    tracing::warn!("No usable system font found for note card rendering");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wrap_text_keeps_short_lines() {
        assert_eq!(wrap_text("Milk, eggs", 64), vec!["Milk, eggs".to_string()]);
    }

    #[test]
    fn wrap_text_splits_on_word_boundaries() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(
            lines,
            vec!["one two".to_string(), "three".to_string(), "four".to_string()]
        );
    }

    #[test]
    fn wrap_text_preserves_explicit_breaks() {
        let lines = wrap_text("first\n\nsecond", 64);
        assert_eq!(
            lines,
            vec!["first".to_string(), String::new(), "second".to_string()]
        );
    }

    #[test]
    fn wrap_text_hard_splits_long_words() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(
            lines,
            vec!["abcd".to_string(), "efgh".to_string(), "ij".to_string()]
        );
    }

    #[test]
    fn wrap_text_empty_input_yields_one_empty_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn clamp_lines_truncates_and_marks_overflow() {
        let lines: Vec<String> = (0..10).map(|i| i.to_string()).collect();

        let clamped = clamp_lines(lines, 3);
        assert_eq!(clamped.len(), 3);
        assert_eq!(clamped[2], "2\u{2026}");
    }

    #[test]
    fn clamp_lines_keeps_input_within_budget() {
        let lines = vec!["one".to_string(), "two".to_string()];
        assert_eq!(clamp_lines(lines.clone(), 3), lines);
    }

    #[test]
    fn render_height_is_bounded_for_huge_bodies() {
        // Skipped on hosts without any of the candidate fonts.
        let Some(font) = load_system_font() else {
            return;
        };

        let card = NoteCard {
            title: "t".repeat(10_000),
            body: "word ".repeat(200_000),
        };
        let image = card.render(&font);

        let max_height = ACCENT_BAR_HEIGHT
            + 2 * MARGIN
            + TITLE_MAX_LINES as u32 * TITLE_LINE_HEIGHT
            + TITLE_BODY_GAP
            + BODY_MAX_LINES as u32 * BODY_LINE_HEIGHT;
        assert!(image.height() <= max_height);
    }

    #[test]
    fn encode_png_roundtrips() {
        let image = RgbaImage::from_pixel(8, 8, CARD_BG);
        let bytes = encode_png(&image).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 8);
        assert_eq!(decoded.height(), 8);
    }

    #[test]
    fn render_produces_card_when_a_font_is_available() {
        // Skipped on hosts without any of the candidate fonts.
        let Some(font) = load_system_font() else {
            return;
        };

        let card = NoteCard {
            title: "Groceries".to_string(),
            body: "Milk, eggs".to_string(),
        };
        let image = card.render(&font);
        assert_eq!(image.width(), CARD_WIDTH);
        assert!(image.height() > ACCENT_BAR_HEIGHT + 2 * MARGIN);
    }
}
