//! Slide shapes and their serialization.

use super::table::Table;
use super::text::TextFrame;
use crate::common::{Rect, Result, RgbColor};
use std::fmt::Write as FmtWrite;

/// Preset geometry of an auto shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Rectangle,
    RoundedRectangle,
    Oval,
}

impl Geometry {
    fn prst(self) -> &'static str {
        match self {
            Geometry::Rectangle => "rect",
            Geometry::RoundedRectangle => "roundRect",
            Geometry::Oval => "ellipse",
        }
    }
}

/// A positioned visual element on a slide.
///
/// Z-order equals insertion order; shape ids are assigned at serialization
/// time from that order.
#[derive(Debug, Clone)]
pub enum Shape {
    Auto(AutoShape),
    TextBox(TextBoxShape),
    Table(Table),
}

/// A filled auto shape (bar, chip, oval), line always suppressed,
/// optionally carrying centered text.
#[derive(Debug, Clone)]
pub struct AutoShape {
    pub geometry: Geometry,
    pub rect: Rect,
    pub fill: Option<RgbColor>,
    pub text: Option<TextFrame>,
}

/// A borderless, unfilled text box.
#[derive(Debug, Clone)]
pub struct TextBoxShape {
    pub rect: Rect,
    pub frame: TextFrame,
}

impl Shape {
    /// Bounding rectangle of the shape.
    pub fn rect(&self) -> Rect {
        match self {
            Shape::Auto(s) => s.rect,
            Shape::TextBox(s) => s.rect,
            Shape::Table(t) => t.rect,
        }
    }

    pub(crate) fn write_xml(&self, xml: &mut String, shape_id: u32) -> Result<()> {
        match self {
            Shape::Auto(shape) => shape.write_xml(xml, shape_id),
            Shape::TextBox(shape) => shape.write_xml(xml, shape_id),
            Shape::Table(table) => table.write_xml(xml, shape_id),
        }
    }
}

fn write_xfrm(xml: &mut String, rect: Rect) -> Result<()> {
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, rect.left, rect.top)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, rect.width, rect.height)?;
    xml.push_str("</a:xfrm>");
    Ok(())
}

impl AutoShape {
    fn write_xml(&self, xml: &mut String, shape_id: u32) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(xml, r#"<p:cNvPr id="{shape_id}" name="Shape {shape_id}"/>"#)?;
        xml.push_str("<p:cNvSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr>");
        write_xfrm(xml, self.rect)?;
        write!(
            xml,
            r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
            self.geometry.prst()
        )?;
        if let Some(color) = self.fill {
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )?;
        }
        // Drawn shapes never carry an outline
        xml.push_str("<a:ln><a:noFill/></a:ln>");
        xml.push_str("</p:spPr>");

        if let Some(frame) = &self.text {
            frame.write_xml(xml)?;
        }
        xml.push_str("</p:sp>");
        Ok(())
    }
}

impl TextBoxShape {
    fn write_xml(&self, xml: &mut String, shape_id: u32) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{shape_id}" name="TextBox {shape_id}"/>"#
        )?;
        xml.push_str("<p:cNvSpPr txBox=\"1\"/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr>");
        write_xfrm(xml, self.rect)?;
        xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
        xml.push_str("<a:noFill/>");
        xml.push_str("</p:spPr>");

        self.frame.write_xml(xml)?;
        xml.push_str("</p:sp>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_shape_xml() {
        let shape = AutoShape {
            geometry: Geometry::Rectangle,
            rect: Rect::new(0, 0, 12_191_695, 1_097_280),
            fill: Some(RgbColor::new(0x1B, 0x3A, 0x5C)),
            text: None,
        };
        let mut xml = String::new();
        shape.write_xml(&mut xml, 2).unwrap();
        assert!(xml.contains(r#"<a:prstGeom prst="rect">"#));
        assert!(xml.contains(r#"<a:srgbClr val="1B3A5C"/>"#));
        assert!(xml.contains("<a:ln><a:noFill/></a:ln>"));
        assert!(xml.contains(r#"<a:ext cx="12191695" cy="1097280"/>"#));
    }

    #[test]
    fn test_oval_geometry() {
        let shape = AutoShape {
            geometry: Geometry::Oval,
            rect: Rect::new(0, 0, 548_640, 548_640),
            fill: Some(RgbColor::new(0x2E, 0xCC, 0x71)),
            text: None,
        };
        let mut xml = String::new();
        shape.write_xml(&mut xml, 3).unwrap();
        assert!(xml.contains(r#"prst="ellipse""#));
    }

    #[test]
    fn test_text_box_has_no_fill() {
        let shape = TextBoxShape {
            rect: Rect::new(0, 0, 100, 100),
            frame: TextFrame::new(),
        };
        let mut xml = String::new();
        shape.write_xml(&mut xml, 4).unwrap();
        assert!(xml.contains("txBox=\"1\""));
        assert!(xml.contains("<a:noFill/></p:spPr>"));
    }
}
