use egui::Color32;

use crate::error::{MarkupError, MarkupResult};

/// The colors offered for annotation classes
pub const DEFAULT_PALETTE: [&str; 12] = [
    "#00FF00", "#FFFFFF", "#FF0000", "#0000FF", "#FFFF00", "#00FFFF", "#FF00FF", "#800000",
    "#808000", "#008000", "#800080", "#000080",
];

pub const DEFAULT_COLOR: &str = "#00FF00";

/// Parse a `#RRGGBB` or `#RRGGBBAA` string
pub fn parse_color(hex: &str) -> MarkupResult<Color32> {
    Color32::from_hex(hex.trim()).map_err(|_| MarkupError::InvalidColor(hex.to_owned()))
}

/// A fixed set of selectable colors, exactly one of which is selected
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Color32>,
    selected: usize,
}

impl Palette {
    /// Build a palette from hex strings, skipping (and logging) entries that do not parse.
    ///
    /// `default` is selected if present, otherwise the first color.
    pub fn from_hex<S: AsRef<str>>(colors: &[S], default: &str) -> Self {
        let mut parsed = Vec::with_capacity(colors.len());
        for hex in colors {
            match parse_color(hex.as_ref()) {
                Ok(color) => parsed.push(color),
                Err(err) => log::warn!("Skipping palette entry: {}", err),
            }
        }
        if parsed.is_empty() {
            parsed.push(Color32::GREEN);
        }

        let selected = parse_color(default)
            .ok()
            .and_then(|color| parsed.iter().position(|c| *c == color))
            .unwrap_or(0);

        Self {
            colors: parsed,
            selected,
        }
    }

    pub fn colors(&self) -> &[Color32] {
        &self.colors
    }

    pub fn selected(&self) -> Color32 {
        self.colors[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Select a color by index. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> Option<Color32> {
        if index < self.colors.len() {
            self.selected = index;
            Some(self.colors[index])
        } else {
            None
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_hex(&DEFAULT_PALETTE, DEFAULT_COLOR)
    }
}
