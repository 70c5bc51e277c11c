//! Package writer for OPC packages.
//!
//! Serializes an [`OpcPackage`] into a ZIP archive, writing the
//! `[Content_Types].xml` stream, the package relationships, and every part
//! followed by its own `.rels` part.

use crate::common::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::package::OpcPackage;
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Package writer that serializes an OPC package to a ZIP file.
///
/// ```no_run
/// use voltic_guide::ooxml::opc::{OpcPackage, PackageWriter};
///
/// let pkg = OpcPackage::new();
/// // ... add parts to package ...
/// PackageWriter::write("output.docx", &pkg)?;
/// # Ok::<(), voltic_guide::ooxml::OoxmlError>(())
/// ```
pub struct PackageWriter;

impl PackageWriter {
    /// Write an OPC package to a file, replacing any existing file.
    pub fn write<P: AsRef<Path>>(path: P, package: &OpcPackage) -> Result<()> {
        let bytes = Self::to_bytes(package)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Serialize an OPC package to bytes.
    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::with_capacity(package.content_len() / 2));
        Self::write_to_stream(&mut cursor, package)?;
        Ok(cursor.into_inner())
    }

    /// Write an OPC package to a seekable stream.
    pub fn write_to_stream<W: Write + Seek>(writer: W, package: &OpcPackage) -> Result<()> {
        let mut zip = ZipWriter::new(writer);

        // [Content_Types].xml must be present; by convention it comes first
        let content_types = ContentTypesItem::from_package(package).to_xml()?;
        Self::write_member(&mut zip, &pack_uri(CONTENT_TYPES_URI)?, content_types.as_bytes())?;

        // Package-level relationships (_rels/.rels)
        let pkg_rels_uri = pack_uri(PACKAGE_URI)?
            .rels_uri()
            .map_err(OoxmlError::InvalidPackUri)?;
        Self::write_member(&mut zip, &pkg_rels_uri, package.rels().to_xml()?.as_bytes())?;

        // All parts and their relationships
        for part in package.iter_parts() {
            Self::write_member(&mut zip, part.partname(), part.blob())?;

            if !part.rels().is_empty() {
                let rels_uri = part
                    .partname()
                    .rels_uri()
                    .map_err(OoxmlError::InvalidPackUri)?;
                Self::write_member(&mut zip, &rels_uri, part.rels().to_xml()?.as_bytes())?;
            }
        }

        zip.finish()?;
        Ok(())
    }

    fn write_member<W: Write + Seek>(
        zip: &mut ZipWriter<W>,
        uri: &PackURI,
        blob: &[u8],
    ) -> Result<()> {
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        zip.start_file(uri.membername(), options)?;
        zip.write_all(blob)?;
        Ok(())
    }
}

fn pack_uri(uri: &str) -> Result<PackURI> {
    PackURI::new(uri).map_err(OoxmlError::InvalidPackUri)
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default (by extension) and Override (by partname) elements. Sorted
/// maps keep the output stable between runs.
struct ContentTypesItem {
    defaults: BTreeMap<String, String>,
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn from_package(package: &OpcPackage) -> Self {
        let mut cti = Self::new();
        for part in package.iter_parts() {
            cti.add_content_type(part.partname(), part.content_type());
        }
        cti
    }

    /// Use the extension default when it already matches, otherwise an override.
    fn add_content_type(&mut self, partname: &PackURI, content_type: &str) {
        let ext = partname.ext();
        if self.defaults.get(ext).is_some_and(|ct| ct == content_type) {
            return;
        }
        self.overrides
            .insert(partname.to_string(), content_type.to_string());
    }

    fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(xml, r#"<Types xmlns="{}">"#, namespace::CONTENT_TYPES)?;

        for (ext, content_type) in &self.defaults {
            write!(
                xml,
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            )?;
        }

        for (partname, content_type) in &self.overrides {
            write!(
                xml,
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            )?;
        }

        xml.push_str("</Types>");
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;
    use crate::ooxml::opc::package::Part;
    use std::io::Read;

    #[test]
    fn test_content_types_xml() {
        let mut cti = ContentTypesItem::new();
        cti.add_content_type(
            &PackURI::new("/word/document.xml").unwrap(),
            ct::WML_DOCUMENT_MAIN,
        );
        cti.add_content_type(&PackURI::new("/custom/data.xml").unwrap(), ct::XML);

        let xml = cti.to_xml().unwrap();
        assert!(xml.contains(r#"<Default Extension="rels""#));
        assert!(xml.contains(r#"<Override PartName="/word/document.xml""#));
        assert!(!xml.contains("/custom/data.xml"));
    }

    #[test]
    fn test_zip_layout() {
        let mut pkg = OpcPackage::new();
        let doc_uri = PackURI::new("/word/document.xml").unwrap();
        let mut rels = crate::ooxml::opc::Relationships::new();
        rels.get_or_add(rt::STYLES, "styles.xml");
        pkg.add_part(
            Part::new(doc_uri.clone(), ct::WML_DOCUMENT_MAIN, b"<w:document/>".to_vec())
                .with_rels(rels),
        );
        pkg.relate_to(&doc_uri, rt::OFFICE_DOCUMENT);

        let bytes = PackageWriter::to_bytes(&pkg).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = archive.file_names().map(str::to_string).collect();
        assert!(names.contains(&"[Content_Types].xml".to_string()));
        assert!(names.contains(&"_rels/.rels".to_string()));
        assert!(names.contains(&"word/_rels/document.xml.rels".to_string()));

        let mut document = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut document)
            .unwrap();
        assert_eq!(document, "<w:document/>");
    }
}
