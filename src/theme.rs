//! Deck theme: the palette, font and canvas every slide draws against.

use crate::common::unit::{Emu, inches_to_emu};
use crate::common::{Error, Rect, Result, RgbColor};

/// A named role in the theme palette.
///
/// Composition code asks for roles, not hex values; the theme resolves
/// them. `Custom` escapes the palette for one-off colors a deck needs
/// in isolated spots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    /// Text or fill shown on dark chrome
    Page,
    /// Dark brand color for headers, bars and the cover background
    Primary,
    /// Lighter companion to `Primary`
    PrimarySoft,
    /// Highlight color for accent lines and emphasis
    Accent,
    AccentBlue,
    AccentRed,
    AccentOrange,
    /// Default body text
    Text,
    /// De-emphasized text such as page numbers
    Muted,
    /// Neutral panel background
    Surface,
    /// Table header row fill
    TableHeader,
    /// Odd data row fill
    RowPlain,
    /// Even data row fill
    RowAlt,
    Custom(RgbColor),
}

/// An injected bundle of palette, font and canvas dimensions.
#[derive(Debug, Clone)]
pub struct Theme {
    pub page: RgbColor,
    pub primary: RgbColor,
    pub primary_soft: RgbColor,
    pub accent: RgbColor,
    pub accent_blue: RgbColor,
    pub accent_red: RgbColor,
    pub accent_orange: RgbColor,
    pub text: RgbColor,
    pub muted: RgbColor,
    pub surface: RgbColor,
    pub table_header: RgbColor,
    pub row_plain: RgbColor,
    pub row_alt: RgbColor,
    /// Font family for every run, latin and east-asian alike
    pub font: String,
    pub canvas_width: Emu,
    pub canvas_height: Emu,
}

impl Theme {
    /// The navy-and-green business theme shared by all built-in decks,
    /// on a 13.333 x 7.5 inch widescreen canvas.
    pub fn business() -> Self {
        Self {
            page: RgbColor::new(0xFF, 0xFF, 0xFF),
            primary: RgbColor::new(0x1B, 0x3A, 0x5C),
            primary_soft: RgbColor::new(0x2C, 0x5F, 0x8A),
            accent: RgbColor::new(0x2E, 0xCC, 0x71),
            accent_blue: RgbColor::new(0x34, 0x98, 0xDB),
            accent_red: RgbColor::new(0xE7, 0x4C, 0x3C),
            accent_orange: RgbColor::new(0xF3, 0x9C, 0x12),
            text: RgbColor::new(0x33, 0x33, 0x33),
            muted: RgbColor::new(0x66, 0x66, 0x66),
            surface: RgbColor::new(0xF0, 0xF0, 0xF0),
            table_header: RgbColor::new(0x1B, 0x3A, 0x5C),
            row_plain: RgbColor::new(0xFF, 0xFF, 0xFF),
            row_alt: RgbColor::new(0xE8, 0xF0, 0xF8),
            font: "맑은 고딕".to_string(),
            canvas_width: inches_to_emu(13.333),
            canvas_height: inches_to_emu(7.5),
        }
    }

    /// Resolve a palette role to its concrete color.
    pub fn resolve(&self, token: ColorToken) -> RgbColor {
        match token {
            ColorToken::Page => self.page,
            ColorToken::Primary => self.primary,
            ColorToken::PrimarySoft => self.primary_soft,
            ColorToken::Accent => self.accent,
            ColorToken::AccentBlue => self.accent_blue,
            ColorToken::AccentRed => self.accent_red,
            ColorToken::AccentOrange => self.accent_orange,
            ColorToken::Text => self.text,
            ColorToken::Muted => self.muted,
            ColorToken::Surface => self.surface,
            ColorToken::TableHeader => self.table_header,
            ColorToken::RowPlain => self.row_plain,
            ColorToken::RowAlt => self.row_alt,
            ColorToken::Custom(color) => color,
        }
    }

    /// Reject rectangles that would fall outside the slide canvas.
    pub fn ensure_on_canvas(&self, rect: &Rect) -> Result<()> {
        if rect.fits_within(self.canvas_width, self.canvas_height) {
            Ok(())
        } else {
            Err(Error::OutOfBounds { rect: *rect })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_canvas_size() {
        let theme = Theme::business();
        assert_eq!(theme.canvas_width, 12_191_695);
        assert_eq!(theme.canvas_height, 6_858_000);
    }

    #[test]
    fn test_resolve_tokens() {
        let theme = Theme::business();
        assert_eq!(theme.resolve(ColorToken::Primary).to_hex(), "1B3A5C");
        assert_eq!(theme.resolve(ColorToken::RowAlt).to_hex(), "E8F0F8");
        let custom = RgbColor::new(0xBB, 0xD5, 0xED);
        assert_eq!(theme.resolve(ColorToken::Custom(custom)), custom);
    }

    #[test]
    fn test_ensure_on_canvas() {
        let theme = Theme::business();
        assert!(theme
            .ensure_on_canvas(&Rect::from_inches(0.0, 0.0, 13.333, 1.2))
            .is_ok());
        let err = theme
            .ensure_on_canvas(&Rect::from_inches(13.0, 0.0, 1.0, 1.0))
            .unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { .. }));
    }
}
