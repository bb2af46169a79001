//! End-to-end tests: build the fixed deck, save it, and inspect the
//! resulting package.

use deckforge::pptx::PptxWriter;
use std::fs;
use std::io::{Cursor, Read};

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
    let mut out = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut out)
        .unwrap();
    out
}

#[test]
fn full_deck_package_structure() {
    let deck = deckforge::build_pitch_deck();
    assert_eq!(deck.len(), 10);

    let bytes = PptxWriter::new(&deck).write_to_bytes().unwrap();
    let archive = zip::ZipArchive::new(Cursor::new(bytes.clone())).unwrap();
    let names: Vec<String> = archive.file_names().map(String::from).collect();

    for required in [
        "[Content_Types].xml",
        "_rels/.rels",
        "ppt/presentation.xml",
        "ppt/_rels/presentation.xml.rels",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/slideLayouts/slideLayout1.xml",
        "ppt/theme/theme1.xml",
        "docProps/core.xml",
        "docProps/app.xml",
    ] {
        assert!(names.contains(&required.to_string()), "missing {required}");
    }

    for n in 1..=10 {
        assert!(names.contains(&format!("ppt/slides/slide{n}.xml")));
        assert!(names.contains(&format!("ppt/slides/_rels/slide{n}.xml.rels")));
    }
    assert!(!names.contains(&"ppt/slides/slide11.xml".to_string()));
}

#[test]
fn slide_content_survives_serialization() {
    let deck = deckforge::build_pitch_deck();
    let bytes = PptxWriter::new(&deck).write_to_bytes().unwrap();

    let slide1 = read_part(&bytes, "ppt/slides/slide1.xml");
    assert!(slide1.contains("402FC: Pay-Per-Watch Football"));
    assert!(slide1.contains("Origin: Built from real fan pain in Indonesia"));
    // Background fill and accent bar colors
    assert!(slide1.contains("val=\"09090B\""));
    assert!(slide1.contains("val=\"FC6432\""));

    let slide4 = read_part(&bytes, "ppt/slides/slide4.xml");
    assert!(slide4.contains("0.02-0.08 STX"));
    assert!(slide4.contains("Entry Price"));

    let slide10 = read_part(&bytes, "ppt/slides/slide10.xml");
    assert!(slide10.contains("Thank you | 402FC"));
    assert!(slide10.contains("Contact: 402FC project team"));
}

#[test]
fn every_slide_part_carries_the_theme() {
    let deck = deckforge::build_pitch_deck();
    let bytes = PptxWriter::new(&deck).write_to_bytes().unwrap();

    for n in 1..=10 {
        let xml = read_part(&bytes, &format!("ppt/slides/slide{n}.xml"));
        assert!(xml.contains("<p:bg>"), "slide {n} lacks background");
        assert!(xml.contains("val=\"FC6432\""), "slide {n} lacks accent bar");
    }
}

#[test]
fn repeated_saves_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("402FC_Pitch_Deck.pptx");

    deckforge::generate(&target).unwrap();
    let first = fs::read(&target).unwrap();

    deckforge::generate(&target).unwrap();
    let second = fs::read(&target).unwrap();

    assert_eq!(first, second);
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested").join("deeper").join("deck.pptx");

    let deck = deckforge::build_pitch_deck();
    PptxWriter::new(&deck).save(&target).unwrap();

    assert!(target.exists());
    let bytes = fs::read(&target).unwrap();
    // ZIP local file header magic
    assert_eq!(&bytes[..4], b"PK\x03\x04");
}
