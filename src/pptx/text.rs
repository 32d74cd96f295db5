//! Text frames, paragraphs and runs.
//!
//! The model mirrors DrawingML's txBody structure: a frame holds ordered
//! paragraphs, a paragraph holds ordered runs, and every run carries its
//! resolved style (size, weight, color, font). Styles are baked in at
//! creation time; there is no late theme lookup during serialization.

use crate::common::unit::{Emu, inches_to_emu, pt_to_hundredths};
use crate::common::xml::escape_xml;
use crate::common::{Result, RgbColor};
use std::fmt::Write as FmtWrite;

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub(crate) fn attr(self) -> &'static str {
        match self {
            Align::Left => "l",
            Align::Center => "ctr",
            Align::Right => "r",
        }
    }
}

/// Vertical anchoring of text within its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Top,
    Middle,
}

impl Anchor {
    pub(crate) fn attr(self) -> &'static str {
        match self {
            Anchor::Top => "t",
            Anchor::Middle => "ctr",
        }
    }
}

/// Inset margins of a text container, in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub left: Emu,
    pub right: Emu,
    pub top: Emu,
    pub bottom: Emu,
}

impl Margins {
    pub const fn new(left: Emu, right: Emu, top: Emu, bottom: Emu) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Symmetric margins from inch measurements.
    pub fn from_inches(horizontal: f64, vertical: f64) -> Self {
        let h = inches_to_emu(horizontal);
        let v = inches_to_emu(vertical);
        Self::new(h, h, v, v)
    }
}

/// A styled run of literal text.
#[derive(Debug, Clone)]
pub struct Run {
    pub text: String,
    /// Font size in points
    pub size: f64,
    pub bold: bool,
    pub color: RgbColor,
    /// Font family applied to both latin and east-asian scripts
    pub font: String,
}

impl Run {
    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:r>");
        write!(
            xml,
            r#"<a:rPr lang="ko-KR" dirty="0" sz="{}""#,
            pt_to_hundredths(self.size)
        )?;
        if self.bold {
            xml.push_str(" b=\"1\"");
        }
        xml.push('>');
        write!(
            xml,
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
            self.color.to_hex()
        )?;
        let font = escape_xml(&self.font);
        write!(xml, r#"<a:latin typeface="{font}"/><a:ea typeface="{font}"/>"#)?;
        xml.push_str("</a:rPr>");
        write!(xml, "<a:t>{}</a:t>", escape_xml(&self.text))?;
        xml.push_str("</a:r>");
        Ok(())
    }
}

/// One paragraph: alignment, indent level, inter-paragraph spacing, runs.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    pub align: Align,
    /// Indent level, 0-based as in `a:pPr lvl`
    pub level: u8,
    /// Space before the paragraph, in points
    pub space_before: Option<f64>,
    /// Space after the paragraph, in points
    pub space_after: Option<f64>,
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Append a styled run.
    pub fn add_run(&mut self, text: &str, size: f64, bold: bool, color: RgbColor, font: &str) {
        self.runs.push(Run {
            text: text.to_string(),
            size,
            bold,
            color,
            font: font.to_string(),
        });
    }

    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");
        write!(xml, r#"<a:pPr algn="{}""#, self.align.attr())?;
        if self.level > 0 {
            write!(xml, r#" lvl="{}""#, self.level)?;
        }
        if self.space_before.is_none() && self.space_after.is_none() {
            xml.push_str("/>");
        } else {
            xml.push('>');
            if let Some(pt) = self.space_before {
                write!(
                    xml,
                    r#"<a:spcBef><a:spcPts val="{}"/></a:spcBef>"#,
                    pt_to_hundredths(pt)
                )?;
            }
            if let Some(pt) = self.space_after {
                write!(
                    xml,
                    r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
                    pt_to_hundredths(pt)
                )?;
            }
            xml.push_str("</a:pPr>");
        }
        for run in &self.runs {
            run.write_xml(xml)?;
        }
        xml.push_str("</a:p>");
        Ok(())
    }
}

/// A text frame: the ordered paragraphs of a text box or shape.
///
/// Frames start empty. [`TextFrame::add_paragraph`] always appends; there is
/// no implicit first-paragraph that callers must remember to reuse. A frame
/// with no paragraphs still serializes one empty `a:p`, since a DrawingML
/// text body must contain at least one paragraph.
#[derive(Debug, Clone)]
pub struct TextFrame {
    /// Word wrap; always on for body text, overflow is allowed to spill
    pub word_wrap: bool,
    pub anchor: Anchor,
    pub margins: Option<Margins>,
    pub paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    pub(crate) fn new() -> Self {
        Self {
            word_wrap: true,
            anchor: Anchor::Top,
            margins: None,
            paragraphs: Vec::new(),
        }
    }

    /// Append an empty paragraph and return it for styling.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::default());
        self.paragraphs
            .last_mut()
            .expect("paragraph was just pushed")
    }

    /// Concatenated text of all runs, paragraphs joined by newlines.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, para) in self.paragraphs.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for run in &para.runs {
                out.push_str(&run.text);
            }
        }
        out
    }

    /// Serialize as `<p:txBody>` (shape-level text body).
    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:txBody>");
        self.write_body_pr(xml)?;
        xml.push_str("<a:lstStyle/>");
        if self.paragraphs.is_empty() {
            xml.push_str("<a:p/>");
        }
        for para in &self.paragraphs {
            para.write_xml(xml)?;
        }
        xml.push_str("</p:txBody>");
        Ok(())
    }

    fn write_body_pr(&self, xml: &mut String) -> Result<()> {
        write!(
            xml,
            r#"<a:bodyPr wrap="{}" rtlCol="0""#,
            if self.word_wrap { "square" } else { "none" }
        )?;
        if let Some(m) = self.margins {
            write!(
                xml,
                r#" lIns="{}" tIns="{}" rIns="{}" bIns="{}""#,
                m.left, m.top, m.right, m.bottom
            )?;
        }
        if self.anchor != Anchor::Top {
            write!(xml, r#" anchor="{}""#, self.anchor.attr())?;
        }
        xml.push_str("/>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Run {
        Run {
            text: text.to_string(),
            size: 18.0,
            bold: false,
            color: RgbColor::new(0x33, 0x33, 0x33),
            font: "맑은 고딕".to_string(),
        }
    }

    #[test]
    fn test_add_paragraph_always_appends() {
        let mut frame = TextFrame::new();
        assert!(frame.paragraphs.is_empty());
        frame.add_paragraph().runs.push(run("first"));
        frame.add_paragraph().runs.push(run("second"));
        assert_eq!(frame.paragraphs.len(), 2);
        assert_eq!(frame.text(), "first\nsecond");
    }

    #[test]
    fn test_empty_frame_serializes_one_paragraph() {
        let frame = TextFrame::new();
        let mut xml = String::new();
        frame.write_xml(&mut xml).unwrap();
        assert!(xml.contains("<a:p/>"));
    }

    #[test]
    fn test_run_xml_escapes_text() {
        let mut xml = String::new();
        run("R&D <투자>").write_xml(&mut xml).unwrap();
        assert!(xml.contains("R&amp;D &lt;투자&gt;"));
        assert!(xml.contains(r#"sz="1800""#));
        assert!(xml.contains(r#"val="333333""#));
    }

    #[test]
    fn test_paragraph_spacing_and_level() {
        let mut para = Paragraph {
            level: 1,
            space_after: Some(6.0),
            ..Default::default()
        };
        para.runs.push(run("x"));
        let mut xml = String::new();
        para.write_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"lvl="1""#));
        assert!(xml.contains(r#"<a:spcAft><a:spcPts val="600"/></a:spcAft>"#));
    }

    #[test]
    fn test_body_pr_anchor_and_margins() {
        let mut frame = TextFrame::new();
        frame.anchor = Anchor::Middle;
        frame.margins = Some(Margins::from_inches(0.1, 0.05));
        let mut xml = String::new();
        frame.write_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"anchor="ctr""#));
        assert!(xml.contains(r#"lIns="91440""#));
        assert!(xml.contains(r#"tIns="45720""#));
    }
}
