//! ZIP container assembly for OOXML packages.
//!
//! An OOXML package is a ZIP archive of XML parts plus relationship files
//! tying them together. [`OoxmlPackage`] collects parts in insertion order
//! and writes them with fixed entry metadata, so the same input parts always
//! produce byte-identical archives.

use crate::error::Result;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A relationship entry for a .rels part.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path, relative to the source part
    pub target: String,
}

/// An ordered collection of relationships, serialized to a .rels part.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create an empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a relationship, returning its assigned ID ("rId1", "rId2", …).
    pub fn add(&mut self, rel_type: impl Into<String>, target: impl Into<String>) -> String {
        let id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            id: id.clone(),
            rel_type: rel_type.into(),
            target: target.into(),
        });
        id
    }

    /// Number of relationships.
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to relationships XML.
    pub fn to_xml(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
             <Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">",
        );
        for rel in &self.rels {
            xml.push_str(&format!(
                "<Relationship Id=\"{}\" Type=\"{}\" Target=\"{}\"/>",
                rel.id, rel.rel_type, rel.target
            ));
        }
        xml.push_str("</Relationships>");
        xml
    }
}

/// A content-type entry for `[Content_Types].xml`.
#[derive(Debug, Clone)]
enum ContentType {
    /// Applies to every part with the extension
    Default { extension: String, mime: String },
    /// Applies to one named part
    Override { part_name: String, mime: String },
}

/// An OOXML package under construction.
///
/// Parts are written to the archive in insertion order with deflate
/// compression and a fixed timestamp.
#[derive(Debug, Default)]
pub struct OoxmlPackage {
    parts: Vec<(String, Vec<u8>)>,
    content_types: Vec<ContentType>,
}

impl OoxmlPackage {
    /// Create an empty package with the standard default content types.
    pub fn new() -> Self {
        let mut pkg = Self {
            parts: Vec::new(),
            content_types: Vec::new(),
        };
        pkg.add_default_content_type(
            "rels",
            "application/vnd.openxmlformats-package.relationships+xml",
        );
        pkg.add_default_content_type("xml", "application/xml");
        pkg
    }

    /// Add a part at the given archive path.
    pub fn add_part(&mut self, path: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.parts.push((path.into(), data.into()));
    }

    /// Add a part and register its content-type override.
    pub fn add_part_with_type(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        let path = path.into();
        self.content_types.push(ContentType::Override {
            part_name: format!("/{path}"),
            mime: mime.into(),
        });
        self.parts.push((path, data.into()));
    }

    /// Register an extension-wide default content type.
    pub fn add_default_content_type(&mut self, extension: impl Into<String>, mime: impl Into<String>) {
        self.content_types.push(ContentType::Default {
            extension: extension.into(),
            mime: mime.into(),
        });
    }

    /// Add a .rels part for the package root or a given part.
    ///
    /// `part_path` is the part the relationships belong to; an empty path
    /// means the package-level `_rels/.rels`.
    pub fn add_relationships(&mut self, part_path: &str, rels: &Relationships) {
        let rels_path = if part_path.is_empty() {
            "_rels/.rels".to_string()
        } else {
            match part_path.rsplit_once('/') {
                Some((dir, file)) => format!("{dir}/_rels/{file}.rels"),
                None => format!("_rels/{part_path}.rels"),
            }
        };
        self.add_part(rels_path, rels.to_xml().into_bytes());
    }

    /// Serialize `[Content_Types].xml`.
    fn content_types_xml(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
             <Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">",
        );
        for ct in &self.content_types {
            match ct {
                ContentType::Default { extension, mime } => {
                    xml.push_str(&format!(
                        "<Default Extension=\"{extension}\" ContentType=\"{mime}\"/>"
                    ));
                }
                ContentType::Override { part_name, mime } => {
                    xml.push_str(&format!(
                        "<Override PartName=\"{part_name}\" ContentType=\"{mime}\"/>"
                    ));
                }
            }
        }
        xml.push_str("</Types>");
        xml
    }

    /// Write the package to an in-memory ZIP archive.
    pub fn into_zip_bytes(self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        // Fixed timestamp keeps repeated builds byte-identical
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(self.content_types_xml().as_bytes())?;

        for (path, data) in &self.parts {
            zip.start_file(path.as_str(), options)?;
            zip.write_all(data)?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}
