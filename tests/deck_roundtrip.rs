//! End-to-end checks on the built-in decks: the written packages must be
//! valid ZIP archives with the expected part inventory, and building the
//! same deck twice must produce identical bytes.

use std::collections::BTreeSet;
use std::io::{Cursor, Read};

use deckforge::deck::{Deck, fuelcell, hydrogen, hydrogen_car};

fn archive_names(bytes: &[u8]) -> BTreeSet<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    (0..archive.len())
        .map(|index| archive.by_index(index).unwrap().name().to_string())
        .collect()
}

#[test]
fn test_package_part_inventory() {
    for deck in [hydrogen::deck(), fuelcell::deck(), hydrogen_car::deck()] {
        let bytes = deck.build().unwrap().to_bytes().unwrap();
        let names = archive_names(&bytes);

        for fixed in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            "ppt/theme/theme1.xml",
        ] {
            assert!(names.contains(fixed), "{}: missing {fixed}", deck.name());
        }
        for index in 1..=deck.len() {
            assert!(
                names.contains(&format!("ppt/slides/slide{index}.xml")),
                "{}: missing slide {index}",
                deck.name()
            );
            assert!(
                names.contains(&format!("ppt/slides/_rels/slide{index}.xml.rels")),
                "{}: missing slide rels {index}",
                deck.name()
            );
        }
        // nothing beyond the fixed parts and the per-slide pairs
        assert_eq!(names.len(), 9 + deck.len() * 2, "{}", deck.name());
    }
}

#[test]
fn test_slide_xml_mentions_titles() {
    let bytes = hydrogen::deck().build().unwrap().to_bytes().unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive
        .by_name("ppt/slides/slide2.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    assert!(xml.contains("목차"));
}

#[test]
fn test_build_is_deterministic() {
    for deck in [hydrogen::deck(), fuelcell::deck(), hydrogen_car::deck()] {
        let first = deck.build().unwrap().to_bytes().unwrap();
        let second = deck.build().unwrap().to_bytes().unwrap();
        assert_eq!(first, second, "{}", deck.name());
    }
}

#[test]
fn test_write_to_creates_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let deck = hydrogen::deck();
    let path = deck.write_to(dir.path()).unwrap();
    assert_eq!(path, dir.path().join("수소에너지_발표자료.pptx"));
    let bytes = std::fs::read(&path).unwrap();
    // local file header signature
    assert_eq!(&bytes[..4], b"PK\x03\x04");
    assert_eq!(bytes, deck.build().unwrap().to_bytes().unwrap());
}

#[test]
fn test_empty_deck_still_packages() {
    let deck = Deck::new("empty", "empty.pptx", deckforge::Theme::business());
    let bytes = deck.build().unwrap().to_bytes().unwrap();
    let names = archive_names(&bytes);
    assert_eq!(names.len(), 9);
    assert!(!names.iter().any(|name| name.starts_with("ppt/slides/")));
}
