//! A single slide: optional background fill plus an ordered shape tree.

use super::shape::{AutoShape, Geometry, Shape, TextBoxShape};
use super::table::Table;
use super::text::TextFrame;
use crate::common::{Rect, Result, RgbColor};
use std::fmt::Write as FmtWrite;

/// Mutable slide model. Shapes render in insertion order, so later shapes
/// paint over earlier ones.
#[derive(Debug, Clone, Default)]
pub struct Slide {
    background: Option<RgbColor>,
    shapes: Vec<Shape>,
}

impl Slide {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Solid background fill, replacing the inherited layout background.
    pub fn set_background(&mut self, color: RgbColor) {
        self.background = Some(color);
    }

    pub fn background(&self) -> Option<RgbColor> {
        self.background
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Add a filled auto shape with no text.
    pub fn add_auto_shape(
        &mut self,
        geometry: Geometry,
        rect: Rect,
        fill: Option<RgbColor>,
    ) -> &mut AutoShape {
        self.shapes.push(Shape::Auto(AutoShape {
            geometry,
            rect,
            fill,
            text: None,
        }));
        match self.shapes.last_mut() {
            Some(Shape::Auto(shape)) => shape,
            _ => unreachable!(),
        }
    }

    /// Add an empty text box and return its frame.
    pub fn add_text_box(&mut self, rect: Rect) -> &mut TextFrame {
        self.shapes.push(Shape::TextBox(TextBoxShape {
            rect,
            frame: TextFrame::new(),
        }));
        match self.shapes.last_mut() {
            Some(Shape::TextBox(shape)) => &mut shape.frame,
            _ => unreachable!(),
        }
    }

    /// Add an empty table grid.
    pub fn add_table(&mut self, rows: usize, cols: usize, rect: Rect) -> &mut Table {
        self.shapes.push(Shape::Table(Table::new(rows, cols, rect)));
        match self.shapes.last_mut() {
            Some(Shape::Table(table)) => table,
            _ => unreachable!(),
        }
    }

    /// Serialize the slide part.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
        );
        xml.push_str("<p:cSld>");

        // Background must precede the shape tree
        if let Some(color) = self.background {
            write!(
                xml,
                r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
                color.to_hex()
            )?;
        }

        xml.push_str("<p:spTree>");
        xml.push_str(
            r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
        );
        xml.push_str(
            r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
        );

        // Id 1 names the group shape, so drawn shapes start at 2
        for (index, shape) in self.shapes.iter().enumerate() {
            shape.write_xml(&mut xml, index as u32 + 2)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slide_xml() {
        let slide = Slide::new();
        let xml = slide.to_xml().unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0""#));
        assert!(xml.contains("<p:spTree>"));
        assert!(!xml.contains("<p:bg>"));
        assert!(xml.ends_with("</p:sld>"));
    }

    #[test]
    fn test_background_precedes_shape_tree() {
        let mut slide = Slide::new();
        slide.set_background(RgbColor::new(0x1B, 0x3A, 0x5C));
        let xml = slide.to_xml().unwrap();
        let bg = xml.find("<p:bg>").unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
        assert!(xml.contains(r#"<a:srgbClr val="1B3A5C"/>"#));
    }

    #[test]
    fn test_shape_ids_follow_insertion_order() {
        let mut slide = Slide::new();
        slide.add_auto_shape(Geometry::Rectangle, Rect::new(0, 0, 10, 10), None);
        slide.add_text_box(Rect::new(0, 0, 10, 10));
        slide.add_table(1, 1, Rect::new(0, 0, 10, 10));
        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"id="2" name="Shape 2""#));
        assert!(xml.contains(r#"id="3" name="TextBox 3""#));
        assert!(xml.contains(r#"id="4" name="Table 4""#));
        assert_eq!(slide.shape_count(), 3);
    }
}
