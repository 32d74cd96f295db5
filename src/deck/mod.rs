//! Deck assembly: named slide-spec sequences rendered into a presentation.
//!
//! The built-in decks live in the submodules as pure data; this module
//! holds the [`Deck`] container plus the small constructors the data
//! modules share.

use crate::common::unit::{Emu, inches_to_emu};
use crate::common::{Rect, Result};
use crate::compose::{Block, ParaSpec, RunSpec, SlideSpec, render};
use crate::pptx::{Align, Geometry, Presentation};
use crate::theme::{ColorToken, Theme};
use std::path::{Path, PathBuf};

pub mod fuelcell;
pub mod hydrogen;
pub mod hydrogen_car;

/// An ordered set of slide specs plus the theme they render against.
#[derive(Debug, Clone)]
pub struct Deck {
    name: String,
    output_file: String,
    theme: Theme,
    slides: Vec<SlideSpec>,
}

impl Deck {
    pub fn new(name: &str, output_file: &str, theme: Theme) -> Self {
        Self {
            name: name.to_string(),
            output_file: output_file.to_string(),
            theme,
            slides: Vec::new(),
        }
    }

    pub fn push(&mut self, spec: SlideSpec) {
        self.slides.push(spec);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn output_file(&self) -> &str {
        &self.output_file
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Render every slide into a fresh presentation.
    pub fn build(&self) -> Result<Presentation> {
        let mut prs = Presentation::new(self.theme.canvas_width, self.theme.canvas_height);
        let total = self.slides.len();
        for (index, spec) in self.slides.iter().enumerate() {
            render(spec, &mut prs, &self.theme, index + 1, total)?;
            log::debug!("deck {}: rendered slide {}/{}", self.name, index + 1, total);
        }
        Ok(prs)
    }

    /// Build and save the deck under `dir`, returning the written path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let prs = self.build()?;
        let path = dir.join(&self.output_file);
        prs.save(&path)?;
        log::info!("deck {}: wrote {} slides to {}", self.name, self.len(), path.display());
        Ok(path)
    }
}

// Constructors shared by the deck data modules.

pub(crate) fn widths_in(inches: &[f64]) -> Vec<Emu> {
    inches.iter().copied().map(inches_to_emu).collect()
}

pub(crate) fn run(text: &str, size: f64, bold: bool, color: ColorToken) -> RunSpec {
    RunSpec {
        text: text.to_string(),
        size,
        bold,
        color,
    }
}

/// Left-aligned single-run paragraph with the standard 6pt gap after.
pub(crate) fn line(text: &str, size: f64, bold: bool, color: ColorToken) -> ParaSpec {
    ParaSpec {
        space_after: Some(6.0),
        runs: vec![run(text, size, bold, color)],
        ..Default::default()
    }
}

/// Section heading inside a body block.
pub(crate) fn heading(text: &str, size: f64) -> ParaSpec {
    line(text, size, true, ColorToken::Primary)
}

/// Indented detail line under a heading.
pub(crate) fn sub(text: &str, size: f64) -> ParaSpec {
    ParaSpec {
        level: 1,
        space_after: Some(6.0),
        runs: vec![run(text, size, false, ColorToken::Text)],
        ..Default::default()
    }
}

/// Empty spacer paragraph.
pub(crate) fn gap() -> ParaSpec {
    ParaSpec {
        space_after: Some(6.0),
        ..Default::default()
    }
}

/// Centered single-run paragraph.
pub(crate) fn centered(text: &str, size: f64, bold: bool, color: ColorToken) -> ParaSpec {
    ParaSpec {
        align: Align::Center,
        runs: vec![run(text, size, bold, color)],
        ..Default::default()
    }
}

pub(crate) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn string_rows(values: &[&[&str]]) -> Vec<Vec<String>> {
    values.iter().map(|row| strings(row)).collect()
}

/// Rounded box carrying one centered bold label, white on the fill color.
/// Multi-line labels keep their newlines inside the single run.
pub(crate) fn chip_block(rect: Rect, fill: ColorToken, text: &str, size: f64) -> Block {
    Block::Chip {
        rect,
        shape: Geometry::RoundedRectangle,
        fill,
        paras: vec![centered(text, size, true, ColorToken::Page)],
    }
}

/// Rounded box with regular-weight centered text, for longer panel copy.
pub(crate) fn panel_block(rect: Rect, fill: ColorToken, text: &str, size: f64) -> Block {
    Block::Chip {
        rect,
        shape: Geometry::RoundedRectangle,
        fill,
        paras: vec![centered(text, size, false, ColorToken::Page)],
    }
}

/// Short bold label above a table or list.
pub(crate) fn caption(rect: Rect, text: &str, size: f64, color: ColorToken) -> Block {
    Block::Text {
        rect,
        paras: vec![ParaSpec {
            runs: vec![run(text, size, true, color)],
            ..Default::default()
        }],
    }
}

/// Five-part table of contents used by the industry decks: a colored
/// part chip on the left, title and description on the right.
pub(crate) fn part_toc(sections: &[(&str, &str, &str)]) -> Vec<Block> {
    const PART_COLORS: [ColorToken; 5] = [
        ColorToken::Primary,
        ColorToken::PrimarySoft,
        ColorToken::AccentBlue,
        ColorToken::AccentOrange,
        ColorToken::Accent,
    ];
    let mut blocks = Vec::new();
    for (index, (part, title, desc)) in sections.iter().enumerate() {
        let top = 1.6 + index as f64 * 1.05;
        blocks.push(chip_block(
            Rect::from_inches(0.8, top, 1.5, 0.8),
            PART_COLORS[index % PART_COLORS.len()],
            part,
            16.0,
        ));
        blocks.push(Block::Text {
            rect: Rect::from_inches(2.6, top, 9.5, 0.8),
            paras: vec![
                ParaSpec {
                    runs: vec![run(title, 20.0, true, ColorToken::Text)],
                    ..Default::default()
                },
                ParaSpec {
                    runs: vec![run(desc, 14.0, false, ColorToken::Muted)],
                    ..Default::default()
                },
            ],
        });
    }
    blocks
}

/// Standard themed table block.
pub(crate) fn table_block(
    rect: crate::common::Rect,
    headers: &[&str],
    rows: &[&[&str]],
    col_widths: Option<Vec<Emu>>,
    header_size: f64,
    body_size: f64,
) -> Block {
    Block::Table {
        rect,
        headers: strings(headers),
        rows: string_rows(rows),
        col_widths,
        header_size,
        body_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::Shape;

    #[test]
    fn test_page_numbers_follow_slide_positions() {
        for deck in [hydrogen::deck(), fuelcell::deck(), hydrogen_car::deck()] {
            let prs = deck.build().unwrap();
            let total = deck.len();
            for (index, slide) in prs.slides().iter().enumerate() {
                let expected = format!("{} / {}", index + 1, total);
                let markers = slide
                    .shapes()
                    .iter()
                    .filter(|shape| {
                        matches!(shape, Shape::TextBox(text_box) if text_box.frame.text() == expected)
                    })
                    .count();
                if index == 0 {
                    // covers carry no page number
                    assert_eq!(markers, 0, "deck {} cover", deck.name());
                } else {
                    assert_eq!(markers, 1, "deck {} slide {}", deck.name(), index + 1);
                }
            }
        }
    }

    #[test]
    fn test_builtin_decks_build() {
        for deck in [hydrogen::deck(), fuelcell::deck(), hydrogen_car::deck()] {
            let prs = deck.build().unwrap();
            assert_eq!(prs.slide_count(), deck.len());
            assert!(!deck.is_empty());
        }
    }

    #[test]
    fn test_builtin_deck_sizes() {
        assert_eq!(hydrogen::deck().len(), 18);
        assert_eq!(fuelcell::deck().len(), 25);
        assert_eq!(hydrogen_car::deck().len(), 28);
    }

    #[test]
    fn test_output_filenames() {
        assert_eq!(hydrogen::deck().output_file(), "수소에너지_발표자료.pptx");
        assert_eq!(fuelcell::deck().output_file(), "연료전지_발표자료.pptx");
        assert_eq!(
            hydrogen_car::deck().output_file(),
            "수소자동차_시장분석_발표자료.pptx"
        );
    }
}
