//! OPC packaging: content types, relationships and the zip container.
//!
//! Output is deterministic. Parts are written in a fixed order and every
//! zip entry carries the same (epoch) timestamp, so identical models
//! serialize to identical bytes.

use super::prs::Presentation;
use super::template;
use crate::common::Result;
use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

const CT_PRESENTATION: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
const CT_SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
const CT_SLIDE_MASTER: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
const CT_SLIDE_LAYOUT: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
const CT_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
const CT_RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
const CT_XML: &str = "application/xml";

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_THEME: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

/// The `[Content_Types].xml` part, accumulated as sorted maps so that
/// emission order never depends on insertion order.
#[derive(Debug, Default)]
struct ContentTypes {
    /// extension -> content type
    defaults: BTreeMap<String, String>,
    /// part name (with leading slash) -> content type
    overrides: BTreeMap<String, String>,
}

impl ContentTypes {
    fn add_default(&mut self, extension: &str, content_type: &str) {
        self.defaults
            .insert(extension.to_string(), content_type.to_string());
    }

    fn add_override(&mut self, part_name: &str, content_type: &str) {
        self.overrides
            .insert(part_name.to_string(), content_type.to_string());
    }

    fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        for (extension, content_type) in &self.defaults {
            write!(
                xml,
                r#"<Default Extension="{extension}" ContentType="{content_type}"/>"#
            )?;
        }
        for (part_name, content_type) in &self.overrides {
            write!(
                xml,
                r#"<Override PartName="{part_name}" ContentType="{content_type}"/>"#
            )?;
        }
        xml.push_str("</Types>");
        Ok(xml)
    }
}

/// Serialize a `.rels` part from `(id, type, target)` triples.
fn relationships_xml(rels: &[(String, &str, String)]) -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for (id, rel_type, target) in rels {
        write!(
            xml,
            r#"<Relationship Id="{id}" Type="{rel_type}" Target="{target}"/>"#
        )?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

/// Deflate writer over an in-memory buffer.
struct PkgWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
}

impl PkgWriter {
    fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    fn write(&mut self, name: &str, data: &[u8]) -> Result<()> {
        // Fixed timestamp keeps output byte-stable across runs
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());
        self.zip.start_file(name, options)?;
        self.zip.write_all(data)?;
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.zip.finish()?;
        Ok(cursor.into_inner())
    }
}

/// Write a complete package for the presentation and return its bytes.
pub(crate) fn write_package(prs: &Presentation) -> Result<Vec<u8>> {
    let slide_count = prs.slide_count();

    let mut content_types = ContentTypes::default();
    content_types.add_default("rels", CT_RELATIONSHIPS);
    content_types.add_default("xml", CT_XML);
    content_types.add_override("/ppt/presentation.xml", CT_PRESENTATION);
    content_types.add_override("/ppt/slideMasters/slideMaster1.xml", CT_SLIDE_MASTER);
    content_types.add_override("/ppt/slideLayouts/slideLayout1.xml", CT_SLIDE_LAYOUT);
    content_types.add_override("/ppt/theme/theme1.xml", CT_THEME);
    for index in 0..slide_count {
        content_types.add_override(&format!("/ppt/slides/slide{}.xml", index + 1), CT_SLIDE);
    }

    let mut writer = PkgWriter::new();
    writer.write("[Content_Types].xml", content_types.to_xml()?.as_bytes())?;

    let root_rels = relationships_xml(&[(
        "rId1".to_string(),
        REL_OFFICE_DOCUMENT,
        "ppt/presentation.xml".to_string(),
    )])?;
    writer.write("_rels/.rels", root_rels.as_bytes())?;

    writer.write("ppt/presentation.xml", prs.presentation_xml()?.as_bytes())?;

    let mut pres_rels = vec![(
        "rId1".to_string(),
        REL_SLIDE_MASTER,
        "slideMasters/slideMaster1.xml".to_string(),
    )];
    for index in 0..slide_count {
        pres_rels.push((
            format!("rId{}", index + 2),
            REL_SLIDE,
            format!("slides/slide{}.xml", index + 1),
        ));
    }
    writer.write(
        "ppt/_rels/presentation.xml.rels",
        relationships_xml(&pres_rels)?.as_bytes(),
    )?;

    writer.write(
        "ppt/slideMasters/slideMaster1.xml",
        template::SLIDE_MASTER_XML.as_bytes(),
    )?;
    let master_rels = relationships_xml(&[
        (
            "rId1".to_string(),
            REL_SLIDE_LAYOUT,
            "../slideLayouts/slideLayout1.xml".to_string(),
        ),
        (
            "rId2".to_string(),
            REL_THEME,
            "../theme/theme1.xml".to_string(),
        ),
    ])?;
    writer.write(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        master_rels.as_bytes(),
    )?;

    writer.write(
        "ppt/slideLayouts/slideLayout1.xml",
        template::SLIDE_LAYOUT_XML.as_bytes(),
    )?;
    let layout_rels = relationships_xml(&[(
        "rId1".to_string(),
        REL_SLIDE_MASTER,
        "../slideMasters/slideMaster1.xml".to_string(),
    )])?;
    writer.write(
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        layout_rels.as_bytes(),
    )?;

    writer.write("ppt/theme/theme1.xml", template::THEME_XML.as_bytes())?;

    let slide_rels = relationships_xml(&[(
        "rId1".to_string(),
        REL_SLIDE_LAYOUT,
        "../slideLayouts/slideLayout1.xml".to_string(),
    )])?;
    for (index, slide) in prs.slides().iter().enumerate() {
        writer.write(
            &format!("ppt/slides/slide{}.xml", index + 1),
            slide.to_xml()?.as_bytes(),
        )?;
        writer.write(
            &format!("ppt/slides/_rels/slide{}.xml.rels", index + 1),
            slide_rels.as_bytes(),
        )?;
    }

    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types_sorted_emission() {
        let mut ct = ContentTypes::default();
        ct.add_override("/ppt/slides/slide2.xml", CT_SLIDE);
        ct.add_override("/ppt/presentation.xml", CT_PRESENTATION);
        ct.add_default("xml", CT_XML);
        ct.add_default("rels", CT_RELATIONSHIPS);
        let xml = ct.to_xml().unwrap();
        let rels = xml.find(r#"Extension="rels""#).unwrap();
        let plain = xml.find(r#"Extension="xml""#).unwrap();
        assert!(rels < plain);
        let pres = xml.find("/ppt/presentation.xml").unwrap();
        let slide = xml.find("/ppt/slides/slide2.xml").unwrap();
        assert!(pres < slide);
    }

    #[test]
    fn test_relationships_xml() {
        let xml = relationships_xml(&[(
            "rId1".to_string(),
            REL_OFFICE_DOCUMENT,
            "ppt/presentation.xml".to_string(),
        )])
        .unwrap();
        assert!(xml.contains(r#"Id="rId1""#));
        assert!(xml.contains("officeDocument"));
    }

    #[test]
    fn test_package_is_deterministic() {
        let mut prs = Presentation::new(12_191_695, 6_858_000);
        prs.add_slide();
        let first = write_package(&prs).unwrap();
        let second = write_package(&prs).unwrap();
        assert_eq!(first, second);
    }
}
