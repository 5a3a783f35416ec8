//! Colour palette shared by all renderers.

/// Colours used for every rendered figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub bar: &'static str,
    pub bar_edge: &'static str,
    pub text: &'static str,
    pub title: &'static str,
    pub axis: &'static str,
    pub grid: &'static str,
}

/// Dark theme matching the web frontend.
pub const DARK: Palette = Palette {
    background: "#0a0a0b",
    bar: "#06b6d4",
    bar_edge: "#22d3ee",
    text: "#e5e7eb",
    title: "#f9fafb",
    axis: "#374151",
    grid: "#4b5563",
};

pub(crate) const FONT: &str = "ui-sans-serif, system-ui, sans-serif";

impl Default for Palette {
    fn default() -> Self {
        DARK
    }
}
