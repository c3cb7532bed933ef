use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    /// Page background
    pub background: Color,
    /// Cards and alternating sections
    pub surface: Color,
    pub text: Color,
    /// Secondary text (dates, sublabels)
    pub muted: Color,
    /// Brand accent, used for highlights and the active slide
    pub accent: Color,
    pub accent_dim: Color,
    pub selection: Color,
    pub border: Color,

    pub success: Color,
    pub warning: Color,
    pub info: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::snu_dark()
    }
}

impl Theme {
    /// Color at reveal progress `t`: the background at 0, `color` at 1
    pub fn fade(&self, color: Color, t: f64) -> Color {
        blend(self.background, color, t)
    }
}

/// Linear blend between two RGB colors. Non-RGB colors switch at the midpoint.
pub fn blend(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| -> u8 {
                (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => {
            if t < 0.5 {
                from
            } else {
                to
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let from = Color::Rgb(0, 0, 0);
        let to = Color::Rgb(200, 100, 50);
        assert_eq!(blend(from, to, 0.0), from);
        assert_eq!(blend(from, to, 1.0), to);
        assert_eq!(blend(from, to, 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn test_blend_named_colors_switch() {
        assert_eq!(blend(Color::Black, Color::Yellow, 0.2), Color::Black);
        assert_eq!(blend(Color::Black, Color::Yellow, 0.7), Color::Yellow);
    }
}
