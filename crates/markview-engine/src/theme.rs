//! # Themes
//!
//! Visual settings consumed outside the pure transforms: the preview
//! stylesheet (`PreviewTheme`) and the editor decoration attributes
//! (`EditorTheme`). Neither affects the HTML fragment or the highlight spans;
//! they only describe how a host should paint them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::highlight::HighlightStyle;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid color {input:?}: expected #rrggbb")]
pub struct ParseColorError {
    pub input: String,
}

/// An sRGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let err = || ParseColorError {
            input: s.to_string(),
        };
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

/// Colors used by the standalone preview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewTheme {
    pub code_background: Color,
    pub code_text: Color,
    pub link: Color,
    /// Heading colors for levels 1 to 6.
    pub headings: [Color; 6],
}

impl PreviewTheme {
    pub const HEADING_FONT_PX: [u8; 6] = [24, 20, 16, 14, 13, 12];

    pub fn set_code_theme(&mut self, background: Color, text: Color) {
        self.code_background = background;
        self.code_text = text;
    }

    pub fn set_link_color(&mut self, color: Color) {
        self.link = color;
    }

    /// Levels outside 1..=6 are ignored.
    pub fn set_heading_color(&mut self, level: u8, color: Color) {
        match level {
            1..=6 => self.headings[usize::from(level - 1)] = color,
            _ => log::debug!("ignoring heading color for level {level}"),
        }
    }

    pub fn heading_color(&self, level: u8) -> Option<Color> {
        let idx = usize::from(level.checked_sub(1)?);
        self.headings.get(idx).copied()
    }
}

impl Default for PreviewTheme {
    fn default() -> Self {
        let heading = Color::rgb(0x24, 0x29, 0x2e);
        Self {
            code_background: Color::rgb(0xf6, 0xf8, 0xfa),
            code_text: Color::rgb(0xd7, 0x3a, 0x49),
            link: Color::rgb(0x03, 0x66, 0xd6),
            headings: [
                heading,
                heading,
                heading,
                heading,
                heading,
                Color::rgb(0x58, 0x60, 0x69),
            ],
        }
    }
}

/// How one highlight style is painted in an editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub monospace: bool,
}

impl TextAttributes {
    fn fg(color: Color) -> Self {
        Self {
            foreground: Some(color),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorTheme {
    pub header: TextAttributes,
    pub bold: TextAttributes,
    pub italic: TextAttributes,
    pub code: TextAttributes,
    pub link: TextAttributes,
    pub list: TextAttributes,
}

impl EditorTheme {
    pub fn attributes_for(&self, style: HighlightStyle) -> TextAttributes {
        match style {
            HighlightStyle::Header => self.header,
            HighlightStyle::Bold => self.bold,
            HighlightStyle::Italic => self.italic,
            HighlightStyle::Code => self.code,
            HighlightStyle::Link => self.link,
            HighlightStyle::List => self.list,
        }
    }
}

impl Default for EditorTheme {
    fn default() -> Self {
        Self {
            header: TextAttributes {
                bold: true,
                ..TextAttributes::fg(Color::rgb(43, 145, 175))
            },
            bold: TextAttributes {
                bold: true,
                ..TextAttributes::fg(Color::rgb(203, 75, 22))
            },
            italic: TextAttributes {
                italic: true,
                ..TextAttributes::fg(Color::rgb(211, 54, 130))
            },
            code: TextAttributes {
                background: Some(Color::rgb(235, 237, 240)),
                monospace: true,
                ..TextAttributes::fg(Color::rgb(133, 153, 0))
            },
            link: TextAttributes {
                underline: true,
                ..TextAttributes::fg(Color::rgb(66, 133, 244))
            },
            list: TextAttributes::fg(Color::rgb(88, 110, 117)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("#f6f8fa", Color::rgb(0xf6, 0xf8, 0xfa))]
    #[case("D73A49", Color::rgb(0xd7, 0x3a, 0x49))]
    #[case(" #000000 ", Color::rgb(0, 0, 0))]
    fn parses_hex_colors(#[case] input: &str, #[case] expected: Color) {
        assert_eq!(Color::from_hex(input), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("#fff")]
    #[case("#gggggg")]
    #[case("#1234567")]
    #[case("#ééé")]
    fn rejects_bad_colors(#[case] input: &str) {
        assert!(Color::from_hex(input).is_err());
    }

    #[test]
    fn color_displays_lowercase_hex() {
        assert_eq!(Color::rgb(3, 102, 214).to_string(), "#0366d6");
    }

    #[test]
    fn preview_defaults() {
        let theme = PreviewTheme::default();
        assert_eq!(theme.code_background.to_string(), "#f6f8fa");
        assert_eq!(theme.code_text.to_string(), "#d73a49");
        assert_eq!(theme.link.to_string(), "#0366d6");
        for level in 1..=5 {
            assert_eq!(theme.heading_color(level), Some(Color::rgb(0x24, 0x29, 0x2e)));
        }
        assert_eq!(theme.heading_color(6), Some(Color::rgb(0x58, 0x60, 0x69)));
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(255)]
    fn out_of_range_heading_level_is_ignored(#[case] level: u8) {
        let mut theme = PreviewTheme::default();
        theme.set_heading_color(level, Color::rgb(1, 2, 3));
        assert_eq!(theme, PreviewTheme::default());
        assert_eq!(theme.heading_color(level), None);
    }

    #[test]
    fn setters_update_theme() {
        let mut theme = PreviewTheme::default();
        theme.set_heading_color(3, Color::rgb(1, 2, 3));
        theme.set_link_color(Color::rgb(4, 5, 6));
        theme.set_code_theme(Color::rgb(0, 0, 0), Color::rgb(255, 255, 255));
        assert_eq!(theme.heading_color(3), Some(Color::rgb(1, 2, 3)));
        assert_eq!(theme.heading_color(2), Some(Color::rgb(0x24, 0x29, 0x2e)));
        assert_eq!(theme.link, Color::rgb(4, 5, 6));
        assert_eq!(theme.code_background, Color::rgb(0, 0, 0));
        assert_eq!(theme.code_text, Color::rgb(255, 255, 255));
    }

    #[test]
    fn editor_defaults_per_style() {
        let theme = EditorTheme::default();
        let header = theme.attributes_for(HighlightStyle::Header);
        assert_eq!(header.foreground, Some(Color::rgb(43, 145, 175)));
        assert!(header.bold);

        let code = theme.attributes_for(HighlightStyle::Code);
        assert!(code.monospace);
        assert_eq!(code.background, Some(Color::rgb(235, 237, 240)));

        assert!(theme.attributes_for(HighlightStyle::Link).underline);
        assert!(theme.attributes_for(HighlightStyle::Italic).italic);
        assert_eq!(
            theme.attributes_for(HighlightStyle::List),
            TextAttributes::fg(Color::rgb(88, 110, 117))
        );
    }
}
