//! Deckforge - A Rust library for composing themed PowerPoint decks
//!
//! This library builds presentation decks from declarative slide
//! descriptions and writes them as OOXML (Office Open XML) .pptx
//! packages. It is write-only: there is no parsing of existing files.
//!
//! # Features
//!
//! - **PPTX Writer**: Serialize a presentation tree into a valid .pptx package
//! - **Theming**: Named color tokens resolved through an injected [`theme::Theme`]
//! - **Composition**: Text blocks, colored shapes, styled tables and slide templates
//! - **Declarative slides**: Decks are plain data ([`compose::SlideSpec`] values)
//! - **Deterministic output**: Identical input produces byte-identical packages
//!
//! # Example - Building a deck
//!
//! ```no_run
//! use deckforge::compose::{Block, ParaSpec, RunSpec, SlideSpec};
//! use deckforge::common::Rect;
//! use deckforge::deck::Deck;
//! use deckforge::theme::{ColorToken, Theme};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut deck = Deck::new("demo", "demo.pptx", Theme::business());
//! deck.push(SlideSpec::content("개요").block(Block::Text {
//!     rect: Rect::from_inches(0.8, 1.5, 11.7, 5.2),
//!     paras: vec![ParaSpec {
//!         runs: vec![RunSpec {
//!             text: "첫 슬라이드".to_string(),
//!             size: 18.0,
//!             bold: false,
//!             color: ColorToken::Text,
//!         }],
//!         ..Default::default()
//!     }],
//! }));
//! let path = deck.write_to(std::path::Path::new("."))?;
//! println!("wrote {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod compose;
pub mod deck;
pub mod pptx;
pub mod theme;

pub use common::{Error, Result};
pub use deck::Deck;
pub use theme::Theme;
