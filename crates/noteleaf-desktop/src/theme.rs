//! Theme configuration for the desktop app

/// Color palette used by the UI
pub struct Palette {
    pub bg_primary: &'static str,
    pub bg_surface: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub text_danger: &'static str,
    pub accent: &'static str,
    pub border: &'static str,
}

const LIGHT: Palette = Palette {
    bg_primary: "#f9fafb",
    bg_surface: "#ffffff",
    text_primary: "#111827",
    text_muted: "#6b7280",
    text_danger: "#b91c1c",
    accent: "#437de8",
    border: "#e5e7eb",
};

/// The active palette
#[must_use]
pub const fn palette() -> &'static Palette {
    &LIGHT
}
