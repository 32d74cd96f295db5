//! Composition layer: primitives, themed tables, slide templates and the
//! declarative spec renderer that ties them together.

pub mod primitives;
pub mod spec;
pub mod table;
pub mod template;

pub use primitives::{BulletStyle, TextBlockBuilder};
pub use spec::{Block, Layout, ParaSpec, RunSpec, SlideSpec, render};
pub use table::StyledTable;
pub use template::{ClosingContent, ClosingMessage, CoverContent, CoverLine};
