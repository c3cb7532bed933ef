use ratatui::style::Color;

use crate::theme::Theme;

pub fn dark() -> Theme {
    Theme {
        background: Color::Rgb(0x28, 0x28, 0x28),
        surface: Color::Rgb(0x32, 0x30, 0x2f),
        text: Color::Rgb(0xd4, 0xbe, 0x98),
        muted: Color::Rgb(0x92, 0x83, 0x74),
        accent: Color::Rgb(0xd8, 0xa6, 0x57),
        accent_dim: Color::Rgb(0x7c, 0x6f, 0x64),
        selection: Color::Rgb(0x45, 0x40, 0x3d),
        border: Color::Rgb(0x50, 0x49, 0x45),
        success: Color::Rgb(0xa9, 0xb6, 0x65),
        warning: Color::Rgb(0xe7, 0x8a, 0x4e),
        info: Color::Rgb(0x7d, 0xae, 0xa3),
        error: Color::Rgb(0xea, 0x69, 0x62),
    }
}
