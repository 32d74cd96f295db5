//! Low-level drawing primitives: backgrounds, bars, chips, titles, text
//! blocks and page numbers. Everything here takes the theme explicitly and
//! validates placement before touching the slide.

use crate::common::{Rect, Result};
use crate::pptx::{Align, Anchor, Geometry, Margins, Slide, TextFrame};
use crate::theme::{ColorToken, Theme};

/// Fill the whole slide background with a palette color.
pub fn fill_background(slide: &mut Slide, theme: &Theme, token: ColorToken) {
    slide.set_background(theme.resolve(token));
}

/// Draw a plain filled rectangle with no outline and no text.
pub fn draw_bar(slide: &mut Slide, theme: &Theme, rect: Rect, token: ColorToken) -> Result<()> {
    theme.ensure_on_canvas(&rect)?;
    slide.add_auto_shape(Geometry::Rectangle, rect, Some(theme.resolve(token)));
    Ok(())
}

/// Draw a filled shape that carries centered text, and return its frame.
///
/// Chips keep tight insets so short labels fit small rectangles.
pub fn draw_chip<'a>(
    slide: &'a mut Slide,
    theme: &Theme,
    rect: Rect,
    geometry: Geometry,
    fill: ColorToken,
) -> Result<&'a mut TextFrame> {
    theme.ensure_on_canvas(&rect)?;
    let shape = slide.add_auto_shape(geometry, rect, Some(theme.resolve(fill)));
    let mut frame = TextFrame::new();
    frame.word_wrap = true;
    frame.anchor = Anchor::Middle;
    frame.margins = Some(Margins::from_inches(0.1, 0.05));
    Ok(shape.text.insert(frame))
}

/// Single-paragraph bold heading, left-aligned.
pub fn add_title<'a>(
    slide: &'a mut Slide,
    theme: &Theme,
    text: &str,
    rect: Rect,
    size: f64,
    color: ColorToken,
) -> Result<&'a mut TextFrame> {
    theme.ensure_on_canvas(&rect)?;
    let resolved = theme.resolve(color);
    let frame = slide.add_text_box(rect);
    frame
        .add_paragraph()
        .add_run(text, size, true, resolved, &theme.font);
    Ok(frame)
}

/// Empty wrapped text box for multi-paragraph body content.
pub fn add_body<'a>(slide: &'a mut Slide, theme: &Theme, rect: Rect) -> Result<&'a mut TextFrame> {
    theme.ensure_on_canvas(&rect)?;
    Ok(slide.add_text_box(rect))
}

/// Right-aligned `index / total` marker in the lower-right corner.
pub fn add_page_number(slide: &mut Slide, theme: &Theme, index: usize, total: usize) {
    let rect = Rect::from_inches(12.0, 7.0, 1.2, 0.4);
    let frame = slide.add_text_box(rect);
    let para = frame.add_paragraph();
    para.align = Align::Right;
    para.add_run(
        &format!("{index} / {total}"),
        12.0,
        false,
        theme.resolve(ColorToken::Muted),
        &theme.font,
    );
}

/// Style applied to one paragraph appended by [`TextBlockBuilder`].
#[derive(Debug, Clone)]
pub struct BulletStyle {
    pub level: u8,
    pub size: f64,
    pub bold: bool,
    pub color: ColorToken,
    pub space_before: Option<f64>,
    pub space_after: Option<f64>,
    pub align: Align,
}

impl Default for BulletStyle {
    fn default() -> Self {
        Self {
            level: 0,
            size: 16.0,
            bold: false,
            color: ColorToken::Text,
            space_before: None,
            space_after: Some(6.0),
            align: Align::Left,
        }
    }
}

/// Appends styled paragraphs to a frame, one call per paragraph.
///
/// Every call appends; the first paragraph is not special.
pub struct TextBlockBuilder<'a> {
    frame: &'a mut TextFrame,
    theme: &'a Theme,
}

impl<'a> TextBlockBuilder<'a> {
    pub fn new(frame: &'a mut TextFrame, theme: &'a Theme) -> Self {
        Self { frame, theme }
    }

    /// Append one paragraph holding a single styled run.
    pub fn para(&mut self, text: &str, style: &BulletStyle) -> &mut Self {
        let para = self.frame.add_paragraph();
        para.align = style.align;
        para.level = style.level;
        para.space_before = style.space_before;
        para.space_after = style.space_after;
        para.add_run(
            text,
            style.size,
            style.bold,
            self.theme.resolve(style.color),
            &self.theme.font,
        );
        self
    }

    /// Append an empty spacer paragraph.
    pub fn blank(&mut self) -> &mut Self {
        self.frame.add_paragraph();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::Shape;

    fn slide() -> Slide {
        Slide::new()
    }

    #[test]
    fn test_draw_bar_rejects_offcanvas() {
        let theme = Theme::business();
        let mut slide = slide();
        let err = draw_bar(
            &mut slide,
            &theme,
            Rect::from_inches(13.0, 0.0, 1.0, 0.5),
            ColorToken::Primary,
        )
        .unwrap_err();
        assert!(matches!(err, crate::common::Error::OutOfBounds { .. }));
        assert_eq!(slide.shape_count(), 0);
    }

    #[test]
    fn test_draw_chip_sets_insets() {
        let theme = Theme::business();
        let mut slide = slide();
        let frame = draw_chip(
            &mut slide,
            &theme,
            Rect::from_inches(1.0, 1.0, 2.0, 0.5),
            Geometry::RoundedRectangle,
            ColorToken::Accent,
        )
        .unwrap();
        assert_eq!(frame.anchor, Anchor::Middle);
        assert_eq!(frame.margins, Some(Margins::from_inches(0.1, 0.05)));
        // the returned borrow is the frame attached to the shape
        frame
            .add_paragraph()
            .add_run("라벨", 14.0, true, theme.resolve(ColorToken::Page), &theme.font);
        match &slide.shapes()[0] {
            Shape::Auto(auto) => {
                assert_eq!(auto.text.as_ref().unwrap().text(), "라벨");
            }
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn test_text_block_builder_appends() {
        let theme = Theme::business();
        let mut slide = slide();
        let frame = add_body(&mut slide, &theme, Rect::from_inches(1.0, 2.0, 10.0, 4.0)).unwrap();
        TextBlockBuilder::new(frame, &theme)
            .para("첫 번째", &BulletStyle::default())
            .para(
                "들여쓰기",
                &BulletStyle {
                    level: 1,
                    size: 14.0,
                    ..Default::default()
                },
            )
            .blank();
        assert_eq!(frame.paragraphs.len(), 3);
        assert_eq!(frame.paragraphs[1].level, 1);
        assert!(frame.paragraphs[2].runs.is_empty());
    }

    #[test]
    fn test_page_number_text() {
        let theme = Theme::business();
        let mut slide = slide();
        add_page_number(&mut slide, &theme, 3, 18);
        match &slide.shapes()[0] {
            Shape::TextBox(text_box) => assert_eq!(text_box.frame.text(), "3 / 18"),
            other => panic!("unexpected shape {other:?}"),
        }
    }
}
