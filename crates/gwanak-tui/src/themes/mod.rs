//! Theme registry and loader

mod gruvbox;
mod snu;

use gwanak_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;
use tracing::warn;

use crate::theme::Theme;

pub use snu::{dark as snu_dark, light as snu_light};

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load a theme by name and apply color overrides
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let mut theme = match config.name.to_lowercase().as_str() {
        "snu-dark" | "snu" => snu::dark(),
        "snu-light" => snu::light(),
        "gruvbox-dark" | "gruvbox" => gruvbox::dark(),
        other => {
            warn!("Unknown theme '{}', falling back to snu-dark", other);
            snu::dark()
        }
    };
    apply_overrides(&mut theme, &config.colors);
    theme
}

fn apply_overrides(theme: &mut Theme, overrides: &ThemeColorOverrides) {
    let slots = [
        (&overrides.background, &mut theme.background),
        (&overrides.surface, &mut theme.surface),
        (&overrides.text, &mut theme.text),
        (&overrides.muted, &mut theme.muted),
        (&overrides.accent, &mut theme.accent),
        (&overrides.selection, &mut theme.selection),
        (&overrides.border, &mut theme.border),
    ];
    for (value, slot) in slots {
        if let Some(hex) = value {
            match parse_hex_color(hex) {
                Some(color) => *slot = color,
                None => warn!("Invalid color override '{}', ignoring", hex),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#c9a227"), Some(Color::Rgb(0xc9, 0xa2, 0x27)));
        assert_eq!(parse_hex_color("ffffff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("#fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("zzzzzz"), None);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = ThemeConfig {
            name: "does-not-exist".to_string(),
            ..Default::default()
        };
        assert_eq!(load_theme(&config).accent, snu::dark().accent);
    }

    #[test]
    fn test_overrides_applied() {
        let config = ThemeConfig {
            name: "snu-light".to_string(),
            colors: ThemeColorOverrides {
                accent: Some("#ff0000".to_string()),
                text: Some("not-a-color".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert_eq!(theme.accent, Color::Rgb(255, 0, 0));
        assert_eq!(theme.text, snu::light().text);
    }
}
