//! Shared foundation: colors, units, geometry, errors, XML escaping.

pub mod color;
pub mod error;
pub mod geom;
pub mod unit;
pub mod xml;

pub use color::RgbColor;
pub use error::{Error, Result};
pub use geom::Rect;
pub use unit::Emu;
