//! Package assembly: a deck model to a saved .pptx file.

use super::parts::*;
use super::slide_xml::slide_xml;
use crate::container::{OoxmlPackage, Relationships};
use crate::error::Result;
use crate::geometry::emu;
use crate::model::Deck;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::fs;
use std::path::Path;

/// Serializer for a [`Deck`] into an OOXML presentation package.
///
/// The writer is the only component that touches the filesystem; the deck
/// model itself is purely in-memory. Saving overwrites any existing file at
/// the target path.
pub struct PptxWriter<'a> {
    deck: &'a Deck,
}

impl<'a> PptxWriter<'a> {
    /// Create a writer for the given deck.
    pub fn new(deck: &'a Deck) -> Self {
        Self { deck }
    }

    /// Serialize the deck to .pptx bytes.
    pub fn write_to_bytes(&self) -> Result<Vec<u8>> {
        let mut pkg = OoxmlPackage::new();

        // Package-level relationships
        let mut root_rels = Relationships::new();
        root_rels.add(REL_OFFICE_DOCUMENT, "ppt/presentation.xml");
        root_rels.add(REL_CORE_PROPS, "docProps/core.xml");
        root_rels.add(REL_EXT_PROPS, "docProps/app.xml");
        pkg.add_relationships("", &root_rels);

        // Presentation part and its relationships; the master takes rId1,
        // slides take rId2..rId(n+1)
        let mut pres_rels = Relationships::new();
        let master_rid = pres_rels.add(REL_SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        let slide_rids: Vec<String> = (1..=self.deck.len())
            .map(|n| pres_rels.add(REL_SLIDE, format!("slides/slide{n}.xml")))
            .collect();
        pkg.add_part_with_type(
            "ppt/presentation.xml",
            CT_PRESENTATION,
            presentation_xml(self.deck, &master_rid, &slide_rids)?,
        );
        pkg.add_relationships("ppt/presentation.xml", &pres_rels);

        // Static scaffolding: master, layout, theme
        pkg.add_part_with_type(
            "ppt/slideMasters/slideMaster1.xml",
            CT_SLIDE_MASTER,
            SLIDE_MASTER_XML,
        );
        let mut master_rels = Relationships::new();
        master_rels.add(REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        master_rels.add(REL_THEME, "../theme/theme1.xml");
        pkg.add_relationships("ppt/slideMasters/slideMaster1.xml", &master_rels);

        pkg.add_part_with_type(
            "ppt/slideLayouts/slideLayout1.xml",
            CT_SLIDE_LAYOUT,
            SLIDE_LAYOUT_XML,
        );
        let mut layout_rels = Relationships::new();
        layout_rels.add(REL_SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
        pkg.add_relationships("ppt/slideLayouts/slideLayout1.xml", &layout_rels);

        pkg.add_part_with_type("ppt/theme/theme1.xml", CT_THEME, THEME_XML);

        // One part per slide, in deck order
        for (i, slide) in self.deck.slides.iter().enumerate() {
            let path = format!("ppt/slides/slide{}.xml", i + 1);
            pkg.add_part_with_type(path.clone(), CT_SLIDE, slide_xml(slide)?);

            let mut slide_rels = Relationships::new();
            slide_rels.add(REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
            pkg.add_relationships(&path, &slide_rels);
        }

        pkg.add_part_with_type("docProps/core.xml", CT_CORE_PROPS, CORE_PROPS_XML);
        pkg.add_part_with_type("docProps/app.xml", CT_EXT_PROPS, APP_PROPS_XML);

        pkg.into_zip_bytes()
    }

    /// Serialize and write the deck to `path`.
    ///
    /// Parent directories are created if absent; an existing file at the
    /// target is overwritten unconditionally.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let bytes = self.write_to_bytes()?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

/// `ppt/presentation.xml`: slide size plus master and slide id lists.
fn presentation_xml(deck: &Deck, master_rid: &str, slide_rids: &[String]) -> Result<Vec<u8>> {
    let mut w = Writer::new(Vec::new());
    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    let mut pres = BytesStart::new("p:presentation");
    pres.push_attribute(("xmlns:a", NS_DRAWING));
    pres.push_attribute(("xmlns:r", NS_RELATIONSHIPS));
    pres.push_attribute(("xmlns:p", NS_PRESENTATION));
    w.write_event(Event::Start(pres))?;

    w.write_event(Event::Start(BytesStart::new("p:sldMasterIdLst")))?;
    let mut master = BytesStart::new("p:sldMasterId");
    master.push_attribute(("id", "2147483648"));
    master.push_attribute(("r:id", master_rid));
    w.write_event(Event::Empty(master))?;
    w.write_event(Event::End(BytesEnd::new("p:sldMasterIdLst")))?;

    w.write_event(Event::Start(BytesStart::new("p:sldIdLst")))?;
    for (i, rid) in slide_rids.iter().enumerate() {
        let mut sld = BytesStart::new("p:sldId");
        // Slide ids are arbitrary but must be unique and >= 256
        sld.push_attribute(("id", (256 + i as u32).to_string().as_str()));
        sld.push_attribute(("r:id", rid.as_str()));
        w.write_event(Event::Empty(sld))?;
    }
    w.write_event(Event::End(BytesEnd::new("p:sldIdLst")))?;

    let mut size = BytesStart::new("p:sldSz");
    size.push_attribute(("cx", emu(deck.page_width).to_string().as_str()));
    size.push_attribute(("cy", emu(deck.page_height).to_string().as_str()));
    w.write_event(Event::Empty(size))?;

    let mut notes = BytesStart::new("p:notesSz");
    notes.push_attribute(("cx", "6858000"));
    notes.push_attribute(("cy", "9144000"));
    w.write_event(Event::Empty(notes))?;

    w.write_event(Event::End(BytesEnd::new("p:presentation")))?;
    Ok(w.into_inner())
}
