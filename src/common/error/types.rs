//! Error type covering document assembly and persistence.
//!
//! Generation is a one-shot batch transform: every variant here is either a
//! caller contract violation or an I/O-level failure, and any of them aborts
//! the run. There is no recoverable category.
use crate::common::geom::Rect;
use thiserror::Error;

/// Main error type for deck generation.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while persisting the document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML serialization error
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// A table row does not match the header width
    #[error("table row has {got} cells, expected {expected}")]
    TableShape { expected: usize, got: usize },

    /// A shape rectangle does not lie within the slide canvas
    #[error("shape rectangle {rect} lies outside the canvas")]
    OutOfBounds { rect: Rect },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for deck generation.
pub type Result<T> = std::result::Result<T, Error>;
