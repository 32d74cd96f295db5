use std::fmt;

/// RGB color representation.
///
/// Colors end up serialized as six-digit hex in `a:srgbClr` elements, so the
/// hex round-trip here is the canonical form.
///
/// # Examples
///
/// ```rust
/// use deckforge::common::RgbColor;
///
/// let navy = RgbColor::new(0x1B, 0x3A, 0x5C);
/// assert_eq!(navy.to_hex(), "1B3A5C");
///
/// let green = RgbColor::from_hex("#2ECC71").unwrap();
/// assert_eq!(green, RgbColor::new(0x2E, 0xCC, 0x71));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string (with or without `#` prefix).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to an uppercase hex string without `#` prefix, as used in
    /// `srgbClr val="..."` attributes.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color = RgbColor::new(0xE8, 0xF0, 0xF8);
        assert_eq!(RgbColor::from_hex(&color.to_hex()), Some(color));
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert_eq!(RgbColor::from_hex("12345"), None);
        assert_eq!(RgbColor::from_hex("GG0000"), None);
        assert_eq!(RgbColor::from_hex(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(RgbColor::new(255, 0, 0).to_string(), "#FF0000");
    }
}
