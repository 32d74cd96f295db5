//! The presentation model and its top-level part.

use super::package;
use super::slide::Slide;
use crate::common::Result;
use crate::common::unit::Emu;
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// An in-memory presentation: slide dimensions plus ordered slides.
///
/// Slides are appended with [`Presentation::add_slide`] and serialized into
/// a complete OPC package by [`Presentation::to_bytes`].
#[derive(Debug, Clone)]
pub struct Presentation {
    slide_width: Emu,
    slide_height: Emu,
    slides: Vec<Slide>,
}

impl Presentation {
    pub fn new(slide_width: Emu, slide_height: Emu) -> Self {
        Self {
            slide_width,
            slide_height,
            slides: Vec::new(),
        }
    }

    /// Append an empty slide and return it for population.
    pub fn add_slide(&mut self) -> &mut Slide {
        self.slides.push(Slide::new());
        self.slides.last_mut().expect("slide was just pushed")
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slide_width(&self) -> Emu {
        self.slide_width
    }

    pub fn slide_height(&self) -> Emu {
        self.slide_height
    }

    /// Serialize `ppt/presentation.xml`.
    pub(crate) fn presentation_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
        );
        xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);
        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for index in 0..self.slides.len() {
                // Slide ids start at 256; rId1 is the master
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="rId{}"/>"#,
                    256 + index,
                    index + 2
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }
        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");
        Ok(xml)
    }

    /// Serialize the whole package into `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        package::write_package(self)
    }

    /// Serialize and write the package to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_xml_lists_slides() {
        let mut prs = Presentation::new(12_191_695, 6_858_000);
        prs.add_slide();
        prs.add_slide();
        let xml = prs.presentation_xml().unwrap();
        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12191695" cy="6858000"/>"#));
    }

    #[test]
    fn test_empty_presentation_omits_slide_list() {
        let prs = Presentation::new(12_191_695, 6_858_000);
        let xml = prs.presentation_xml().unwrap();
        assert!(!xml.contains("<p:sldIdLst>"));
    }

    #[test]
    fn test_to_bytes_produces_zip() {
        let mut prs = Presentation::new(12_191_695, 6_858_000);
        prs.add_slide();
        let bytes = prs.to_bytes().unwrap();
        // Local file header magic
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }
}
