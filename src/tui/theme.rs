//! Color palettes for the light and dark themes

use ratatui::style::Color;

use crate::config::Theme;

/// Colors used by every view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight: Color,
    pub amount: Color,
}

/// Chart line color shared by both themes
const CHART_PURPLE: Color = Color::Rgb(0x9b, 0x87, 0xf5);

impl Palette {
    /// Palette for a theme
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                foreground: Color::Black,
                muted: Color::DarkGray,
                accent: CHART_PURPLE,
                border: Color::Gray,
                highlight: Color::Rgb(0xe5, 0xde, 0xff),
                amount: Color::Rgb(0x1a, 0x7f, 0x37),
            },
            Theme::Dark => Self {
                background: Color::Black,
                foreground: Color::White,
                muted: Color::Gray,
                accent: CHART_PURPLE,
                border: Color::DarkGray,
                highlight: Color::Rgb(0x3b, 0x32, 0x66),
                amount: Color::LightGreen,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_ne!(light.background, dark.background);
        assert_eq!(light.accent, dark.accent);
    }
}
