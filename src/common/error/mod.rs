//! Unified error types for deck generation.

mod conversions;
mod types;

pub use types::{Error, Result};
