use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::config::UiConfig;

/// Parsed color palette for one theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub accent: Color,
    pub done: Color,
    pub selection_bg: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Theme {
    /// Built-in dark palette.
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x1E, 0x1E, 0x1E),
            surface: Color::Rgb(0x2C, 0x2C, 0x2C),
            border: Color::Rgb(0x4A, 0x4A, 0x4A),
            text: Color::Rgb(0xD4, 0xD4, 0xD4),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x8A, 0x8A, 0x8A),
            accent: Color::Rgb(0x7C, 0x5C, 0xFC),
            done: Color::Rgb(0x5C, 0xC8, 0x8A),
            selection_bg: Color::Rgb(0x38, 0x2E, 0x5C),
            search_match_bg: Color::Rgb(0xFF, 0xD7, 0x00),
            search_match_fg: Color::Rgb(0x1E, 0x1E, 0x1E),
        }
    }

    /// Built-in light palette.
    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xFF, 0xFF, 0xFF),
            surface: Color::Rgb(0xF2, 0xF2, 0xF2),
            border: Color::Rgb(0xC8, 0xC8, 0xC8),
            text: Color::Rgb(0x2A, 0x2A, 0x2A),
            text_bright: Color::Rgb(0x00, 0x00, 0x00),
            dim: Color::Rgb(0x7A, 0x7A, 0x7A),
            accent: Color::Rgb(0x7C, 0x5C, 0xFC),
            done: Color::Rgb(0x2E, 0x8A, 0x4E),
            selection_bg: Color::Rgb(0xE8, 0xE1, 0xFF),
            search_match_bg: Color::Rgb(0xFF, 0xE8, 0x6B),
            search_match_fg: Color::Rgb(0x2A, 0x2A, 0x2A),
        }
    }

    /// Build both palettes from UI config, falling back to the built-ins.
    pub fn from_config(ui: &UiConfig) -> (Theme, Theme) {
        let mut dark = Theme::dark();
        dark.apply_overrides(&ui.colors);
        let mut light = Theme::light();
        light.apply_overrides(&ui.light_colors);
        (dark, light)
    }

    fn apply_overrides(&mut self, colors: &HashMap<String, String>) {
        for (key, value) in colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => self.background = color,
                    "surface" => self.surface = color,
                    "border" => self.border = color,
                    "text" => self.text = color,
                    "text_bright" => self.text_bright = color,
                    "dim" => self.dim = color,
                    "accent" => self.accent = color,
                    "done" => self.done = color,
                    "selection_bg" => self.selection_bg = color,
                    "search_match_bg" => self.search_match_bg = color,
                    "search_match_fg" => self.search_match_fg = color,
                    _ => {}
                }
            }
        }
    }
}

/// Parse a hex color string like "#7C5CFC" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let v = u32::from_str_radix(hex, 16).ok()?;
    Some(Color::Rgb((v >> 16) as u8, (v >> 8) as u8, v as u8))
}
