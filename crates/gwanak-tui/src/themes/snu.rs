use ratatui::style::Color;

use crate::theme::Theme;

/// Black and gold, the homepage's own palette
pub fn dark() -> Theme {
    Theme {
        background: Color::Rgb(0x0a, 0x0a, 0x0a),
        surface: Color::Rgb(0x1a, 0x1a, 0x1a),
        text: Color::Rgb(0xf5, 0xf5, 0xf5),
        muted: Color::Rgb(0x8a, 0x8a, 0x8a),
        accent: Color::Rgb(0xc9, 0xa2, 0x27),
        accent_dim: Color::Rgb(0x7a, 0x63, 0x1a),
        selection: Color::Rgb(0x2e, 0x2a, 0x1e),
        border: Color::Rgb(0x3a, 0x3a, 0x3a),
        success: Color::Rgb(0x8f, 0xbf, 0x6a),
        warning: Color::Rgb(0xe0, 0x9b, 0x4a),
        info: Color::Rgb(0x6a, 0xa8, 0xd8),
        error: Color::Rgb(0xe0, 0x5a, 0x4f),
    }
}

pub fn light() -> Theme {
    Theme {
        background: Color::Rgb(0xfa, 0xf8, 0xf2),
        surface: Color::Rgb(0xee, 0xea, 0xdf),
        text: Color::Rgb(0x1a, 0x1a, 0x1a),
        muted: Color::Rgb(0x6b, 0x66, 0x5c),
        accent: Color::Rgb(0x9c, 0x7a, 0x12),
        accent_dim: Color::Rgb(0xc9, 0xb2, 0x6e),
        selection: Color::Rgb(0xe6, 0xdc, 0xbd),
        border: Color::Rgb(0xc8, 0xc2, 0xb4),
        success: Color::Rgb(0x4c, 0x8a, 0x3a),
        warning: Color::Rgb(0xb8, 0x6a, 0x1c),
        info: Color::Rgb(0x2f, 0x6e, 0xa8),
        error: Color::Rgb(0xb8, 0x3a, 0x30),
    }
}
