//! Minimal write-only PresentationML backend.
//!
//! The model is deliberately small: a [`Presentation`] owns [`Slide`]s, a
//! slide owns shapes, and serialization walks that tree into a fixed set of
//! package parts. There is no reading, no placeholder inheritance and no
//! incremental editing of an existing file.

mod package;
mod prs;
mod shape;
mod slide;
mod table;
mod template;
mod text;

pub use prs::Presentation;
pub use shape::{AutoShape, Geometry, Shape, TextBoxShape};
pub use slide::Slide;
pub use table::{Cell, Table, cell, default_cell_margins};
pub use text::{Align, Anchor, Margins, Paragraph, Run, TextFrame};
