//! Declarative slide descriptions and their renderer.
//!
//! Deck data is expressed as [`SlideSpec`] values: a layout choice plus a
//! list of positioned blocks. [`render`] walks a spec and drives the
//! templates and primitives, so deck modules hold no drawing code at all.

use super::primitives::{add_body, add_page_number, draw_bar, draw_chip};
use super::table::StyledTable;
use super::template::{
    ClosingContent, CoverContent, closing_slide, content_slide, cover_slide,
};
use crate::common::unit::Emu;
use crate::common::{Rect, Result};
use crate::pptx::{Align, Geometry, Presentation, Slide, TextFrame};
use crate::theme::{ColorToken, Theme};

/// One styled run inside a paragraph spec.
#[derive(Debug, Clone)]
pub struct RunSpec {
    pub text: String,
    pub size: f64,
    pub bold: bool,
    pub color: ColorToken,
}

/// One paragraph: layout attributes plus runs. An empty run list renders
/// as a spacer paragraph.
#[derive(Debug, Clone)]
pub struct ParaSpec {
    pub align: Align,
    pub level: u8,
    pub space_before: Option<f64>,
    pub space_after: Option<f64>,
    pub runs: Vec<RunSpec>,
}

impl Default for ParaSpec {
    fn default() -> Self {
        Self {
            align: Align::Left,
            level: 0,
            space_before: None,
            space_after: None,
            runs: Vec::new(),
        }
    }
}

/// A positioned element of a slide body.
#[derive(Debug, Clone)]
pub enum Block {
    /// Plain filled rectangle
    Bar { rect: Rect, color: ColorToken },
    /// Filled shape with centered text
    Chip {
        rect: Rect,
        shape: Geometry,
        fill: ColorToken,
        paras: Vec<ParaSpec>,
    },
    /// Borderless text box
    Text { rect: Rect, paras: Vec<ParaSpec> },
    /// Themed table
    Table {
        rect: Rect,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        col_widths: Option<Vec<Emu>>,
        header_size: f64,
        body_size: f64,
    },
}

/// The base chrome of a slide.
#[derive(Debug, Clone)]
pub enum Layout {
    /// Title band plus empty body area
    Content { title: String },
    Cover(CoverContent),
    Closing(ClosingContent),
}

/// A complete slide: chrome plus body blocks in paint order.
#[derive(Debug, Clone)]
pub struct SlideSpec {
    pub layout: Layout,
    pub blocks: Vec<Block>,
}

impl SlideSpec {
    pub fn content(title: &str) -> Self {
        Self {
            layout: Layout::Content {
                title: title.to_string(),
            },
            blocks: Vec::new(),
        }
    }

    pub fn cover(content: CoverContent) -> Self {
        Self {
            layout: Layout::Cover(content),
            blocks: Vec::new(),
        }
    }

    pub fn closing(content: ClosingContent) -> Self {
        Self {
            layout: Layout::Closing(content),
            blocks: Vec::new(),
        }
    }

    pub fn block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks.extend(blocks);
        self
    }
}

fn write_paras(frame: &mut TextFrame, theme: &Theme, paras: &[ParaSpec]) {
    for spec in paras {
        let para = frame.add_paragraph();
        para.align = spec.align;
        para.level = spec.level;
        para.space_before = spec.space_before;
        para.space_after = spec.space_after;
        for run in &spec.runs {
            para.add_run(
                &run.text,
                run.size,
                run.bold,
                theme.resolve(run.color),
                &theme.font,
            );
        }
    }
}

fn render_block(slide: &mut Slide, theme: &Theme, block: &Block) -> Result<()> {
    match block {
        Block::Bar { rect, color } => draw_bar(slide, theme, *rect, *color),
        Block::Chip {
            rect,
            shape,
            fill,
            paras,
        } => {
            let frame = draw_chip(slide, theme, *rect, *shape, *fill)?;
            write_paras(frame, theme, paras);
            Ok(())
        }
        Block::Text { rect, paras } => {
            let frame = add_body(slide, theme, *rect)?;
            write_paras(frame, theme, paras);
            Ok(())
        }
        Block::Table {
            rect,
            headers,
            rows,
            col_widths,
            header_size,
            body_size,
        } => {
            let mut table = StyledTable::new(headers.clone())
                .rows(rows.clone())
                .header_size(*header_size)
                .body_size(*body_size);
            if let Some(widths) = col_widths {
                table = table.col_widths(widths.clone());
            }
            table.build(slide, theme, *rect)?;
            Ok(())
        }
    }
}

/// Render one spec as slide `index` of `total` (both 1-based).
pub fn render(
    spec: &SlideSpec,
    prs: &mut Presentation,
    theme: &Theme,
    index: usize,
    total: usize,
) -> Result<()> {
    let slide = match &spec.layout {
        Layout::Content { title } => content_slide(prs, theme, title, index, total)?,
        Layout::Cover(content) => cover_slide(prs, theme, content)?,
        Layout::Closing(content) => {
            let slide = closing_slide(prs, theme, content)?;
            add_page_number(slide, theme, index, total);
            slide
        }
    };
    for block in &spec.blocks {
        render_block(slide, theme, block)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::Shape;

    fn para(text: &str) -> ParaSpec {
        ParaSpec {
            runs: vec![RunSpec {
                text: text.to_string(),
                size: 16.0,
                bold: false,
                color: ColorToken::Text,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_render_content_slide_with_blocks() {
        let theme = Theme::business();
        let mut prs = Presentation::new(theme.canvas_width, theme.canvas_height);
        let spec = SlideSpec::content("개요")
            .block(Block::Text {
                rect: Rect::from_inches(0.6, 1.6, 12.0, 4.0),
                paras: vec![para("첫 줄"), para("둘째 줄")],
            })
            .block(Block::Table {
                rect: Rect::from_inches(0.6, 5.0, 12.0, 1.5),
                headers: vec!["a".into(), "b".into()],
                rows: vec![vec!["1".into(), "2".into()]],
                col_widths: None,
                header_size: 16.0,
                body_size: 14.0,
            });
        render(&spec, &mut prs, &theme, 2, 18).unwrap();
        assert_eq!(prs.slide_count(), 1);
        let slide = prs.slide(0).unwrap();
        // chrome (5 shapes) + text block + table
        assert_eq!(slide.shape_count(), 7);
        match &slide.shapes()[5] {
            Shape::TextBox(text_box) => assert_eq!(text_box.frame.text(), "첫 줄\n둘째 줄"),
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn test_closing_layout_gets_page_number() {
        let theme = Theme::business();
        let mut prs = Presentation::new(theme.canvas_width, theme.canvas_height);
        let spec = SlideSpec::closing(ClosingContent {
            title: "결론".to_string(),
            messages: Vec::new(),
            thanks: "감사합니다".to_string(),
        });
        render(&spec, &mut prs, &theme, 18, 18).unwrap();
        let slide = prs.slide(0).unwrap();
        let last = slide.shapes().last().unwrap();
        match last {
            Shape::TextBox(text_box) => assert_eq!(text_box.frame.text(), "18 / 18"),
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn test_render_fails_on_bad_block() {
        let theme = Theme::business();
        let mut prs = Presentation::new(theme.canvas_width, theme.canvas_height);
        let spec = SlideSpec::content("x").block(Block::Bar {
            rect: Rect::from_inches(13.0, 0.0, 1.0, 1.0),
            color: ColorToken::Primary,
        });
        assert!(render(&spec, &mut prs, &theme, 1, 1).is_err());
    }
}
