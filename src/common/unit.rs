//! Length unit conversions.
//!
//! All geometry in the document model is carried in EMUs (English Metric
//! Units, 914,400 per inch), the native unit of DrawingML. Layout code and
//! deck data speak in inches and points; these helpers convert at the edges.

/// English Metric Units.
pub type Emu = i64;

pub const EMUS_PER_INCH: Emu = 914_400;
pub const EMUS_PER_CM: Emu = 360_000;
pub const EMUS_PER_PT: Emu = 12_700;

/// Convert inches to EMUs, rounding to the nearest unit.
#[inline]
pub fn inches_to_emu(inches: f64) -> Emu {
    (inches * EMUS_PER_INCH as f64).round() as Emu
}

/// Convert typographic points to EMUs.
#[inline]
pub fn pt_to_emu(pt: f64) -> Emu {
    (pt * EMUS_PER_PT as f64).round() as Emu
}

/// Convert EMUs back to inches.
#[inline]
pub fn emu_to_inches(emu: Emu) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

/// Convert points to the hundredths-of-a-point integers used by `sz` and
/// `spcPts val` attributes.
#[inline]
pub fn pt_to_hundredths(pt: f64) -> i64 {
    (pt * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_to_emu() {
        assert_eq!(inches_to_emu(1.0), 914_400);
        assert_eq!(inches_to_emu(13.333), 12_191_695);
        assert_eq!(inches_to_emu(7.5), 6_858_000);
    }

    #[test]
    fn test_pt_to_emu() {
        assert_eq!(pt_to_emu(72.0), 914_400);
        assert_eq!(pt_to_emu(1.0), 12_700);
    }

    #[test]
    fn test_emu_to_inches() {
        assert!((emu_to_inches(914_400) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pt_to_hundredths() {
        assert_eq!(pt_to_hundredths(34.0), 3400);
        assert_eq!(pt_to_hundredths(12.5), 1250);
    }
}
