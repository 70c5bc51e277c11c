/// Document writer implementation for DOCX.
use crate::ooxml::common::{DocumentProperties, ExtendedProperties};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part, Relationships};
use chrono::Utc;
use log::info;
use std::path::Path;

use super::hyperlink::MutableHyperlink;
use super::numbering::generate_numbering_xml;
use super::paragraph::MutableParagraph;
use super::relmap::RelationshipMapper;
use super::settings::DocumentSettings;
use super::style::{MutableStyle, StyleSheet};
use super::table::MutableTable;

const DOCUMENT_PART: &str = "/word/document.xml";
const STYLES_PART: &str = "/word/styles.xml";
const NUMBERING_PART: &str = "/word/numbering.xml";
const SETTINGS_PART: &str = "/word/settings.xml";
const CORE_PROPS_PART: &str = "/docProps/core.xml";
const APP_PROPS_PART: &str = "/docProps/app.xml";

/// A mutable Word document for writing.
///
/// Content is appended in order (paragraphs, headings, tables, page breaks)
/// and the whole package is produced by [`to_bytes`](Self::to_bytes) or
/// [`save`](Self::save).
///
/// ```no_run
/// use voltic_guide::ooxml::docx::writer::MutableDocument;
///
/// let mut doc = MutableDocument::new();
/// doc.add_heading("Getting Started", 1)?;
/// doc.add_paragraph_with_text("Sign up at your-domain.com.");
/// doc.save("guide.docx")?;
/// # Ok::<(), voltic_guide::ooxml::OoxmlError>(())
/// ```
#[derive(Debug, Default)]
pub struct MutableDocument {
    /// Document body content (paragraphs, tables) in order
    body: DocumentBody,
    properties: DocumentProperties,
    styles: StyleSheet,
    settings: DocumentSettings,
}

impl MutableDocument {
    /// Create a new empty document with the built-in styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Core properties written to `docProps/core.xml`.
    pub fn properties_mut(&mut self) -> &mut DocumentProperties {
        &mut self.properties
    }

    #[inline]
    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    pub fn styles_mut(&mut self) -> &mut StyleSheet {
        &mut self.styles
    }

    #[inline]
    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    /// Add a new empty paragraph to the end of the document.
    pub fn add_paragraph(&mut self) -> &mut MutableParagraph {
        self.body.add_paragraph()
    }

    /// Add a paragraph with text.
    pub fn add_paragraph_with_text(&mut self, text: &str) -> &mut MutableParagraph {
        let para = self.add_paragraph();
        para.add_run_with_text(text);
        para
    }

    /// Add a paragraph with text and a paragraph style.
    pub fn add_styled_paragraph(&mut self, text: &str, style_id: &str) -> &mut MutableParagraph {
        let para = self.add_paragraph_with_text(text);
        para.set_style(style_id);
        para
    }

    /// Add a heading paragraph.
    ///
    /// Level 0 uses the `Title` style, levels 1-9 `Heading1`..`Heading9`.
    pub fn add_heading(&mut self, text: &str, level: u8) -> Result<&mut MutableParagraph> {
        if level > 9 {
            return Err(OoxmlError::InvalidFormat(format!(
                "heading level must be 0-9, got {}",
                level
            )));
        }
        let style = if level == 0 {
            "Title".to_string()
        } else {
            format!("Heading{}", level)
        };
        if !self.styles.contains(&style) {
            self.styles.add(if level == 0 {
                MutableStyle::title()
            } else {
                MutableStyle::heading(level)
            });
        }
        Ok(self.add_styled_paragraph(text, &style))
    }

    /// Add a table with specified rows and columns.
    pub fn add_table(&mut self, rows: usize, cols: usize) -> &mut MutableTable {
        self.body.add_table(rows, cols)
    }

    /// Add a paragraph holding only a page break.
    pub fn add_page_break(&mut self) -> &mut MutableParagraph {
        let para = self.add_paragraph();
        para.add_run().add_page_break();
        para
    }

    /// Get the number of body paragraphs (table cells excluded).
    pub fn paragraph_count(&self) -> usize {
        self.body.paragraph_count()
    }

    /// Get the number of tables in the document.
    pub fn table_count(&self) -> usize {
        self.body.table_count()
    }

    /// Number of hyperlinks, including those inside table cells.
    pub fn hyperlink_count(&self) -> usize {
        self.body.hyperlinks().count()
    }

    /// Concatenated text, one line per paragraph; table cells included.
    pub fn text(&self) -> String {
        self.body
            .all_paragraphs()
            .map(MutableParagraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Serialize the document as a ZIP package.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(&self.to_package()?)
    }

    /// Save the document to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let package = self.to_package()?;
        let bytes = PackageWriter::to_bytes(&package)?;
        std::fs::write(path, &bytes)?;
        info!(
            "wrote {} ({} bytes, {} parts)",
            path.display(),
            bytes.len(),
            package.part_count()
        );
        Ok(())
    }

    /// Assemble the OPC package: main document, styles, numbering, settings
    /// and the two property parts.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let document_uri = part_uri(DOCUMENT_PART)?;
        let base = document_uri.base_uri().to_string();

        let mut doc_rels = Relationships::new();
        let mut parts = Vec::with_capacity(5);
        for (uri, content_type, reltype, blob) in [
            (STYLES_PART, ct::WML_STYLES, rt::STYLES, self.styles.to_xml()?),
            (NUMBERING_PART, ct::WML_NUMBERING, rt::NUMBERING, generate_numbering_xml()?),
            (SETTINGS_PART, ct::WML_SETTINGS, rt::SETTINGS, self.settings.to_xml()?),
        ] {
            let uri = part_uri(uri)?;
            doc_rels.get_or_add(reltype, &uri.relative_ref(&base));
            parts.push(Part::new(uri, content_type, blob.into_bytes()));
        }

        // Hyperlink relationships follow the part relationships, in document order
        let mut rel_mapper = RelationshipMapper::new();
        for (index, link) in self.body.hyperlinks().enumerate() {
            let r_id = doc_rels.get_or_add_ext_rel(rt::HYPERLINK, link.url())?;
            rel_mapper.add_hyperlink(index, r_id);
        }

        let document_xml = self.to_xml_with_rels(&rel_mapper)?;

        let mut package = OpcPackage::new();
        package.add_part(
            Part::new(
                document_uri.clone(),
                ct::WML_DOCUMENT_MAIN,
                document_xml.into_bytes(),
            )
            .with_rels(doc_rels),
        );
        for part in parts {
            package.add_part(part);
        }
        package.relate_to(&document_uri, rt::OFFICE_DOCUMENT);

        let core_uri = part_uri(CORE_PROPS_PART)?;
        package.add_part(Part::new(
            core_uri.clone(),
            ct::OPC_CORE_PROPERTIES,
            self.core_properties().to_xml().into_bytes(),
        ));
        package.relate_to(&core_uri, rt::CORE_PROPERTIES);

        let app_uri = part_uri(APP_PROPS_PART)?;
        package.add_part(Part::new(
            app_uri.clone(),
            ct::OFC_EXTENDED_PROPERTIES,
            self.extended_properties().to_xml().into_bytes(),
        ));
        package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        Ok(package)
    }

    /// Core properties as saved: unset timestamps are filled with the
    /// current time and the revision defaults to 1.
    fn core_properties(&self) -> DocumentProperties {
        let mut props = self.properties.clone();
        let now = Utc::now();
        props.created.get_or_insert(now);
        props.modified.get_or_insert(now);
        props.revision.get_or_insert(1);
        props
    }

    fn extended_properties(&self) -> ExtendedProperties {
        let mut stats = ExtendedProperties::default();
        for para in self.body.all_paragraphs() {
            let text = para.text();
            stats.paragraphs += 1;
            stats.words += text.split_whitespace().count();
            stats.characters += text.chars().filter(|c| !c.is_whitespace()).count();
        }
        stats
    }

    /// Generate `document.xml` with actual relationship IDs from the mapper.
    pub(crate) fn to_xml_with_rels(&self, rel_mapper: &RelationshipMapper) -> Result<String> {
        let mut xml = String::with_capacity(16 * 1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<w:document xmlns:w=""#);
        xml.push_str(namespace::WML_MAIN);
        xml.push_str(r#"" xmlns:r=""#);
        xml.push_str(namespace::OFC_RELATIONSHIPS);
        xml.push_str(r#"">"#);

        self.body.to_xml_with_rels(&mut xml, rel_mapper)?;

        xml.push_str("</w:document>");
        Ok(xml)
    }
}

fn part_uri(uri: &str) -> Result<PackURI> {
    PackURI::new(uri).map_err(OoxmlError::InvalidPackUri)
}

/// The document body containing all content elements.
#[derive(Debug, Default)]
pub(crate) struct DocumentBody {
    /// Content elements (paragraphs, tables) in document order
    pub(crate) elements: Vec<BodyElement>,
}

impl DocumentBody {
    fn add_paragraph(&mut self) -> &mut MutableParagraph {
        self.elements
            .push(BodyElement::Paragraph(MutableParagraph::new()));
        match self.elements.last_mut() {
            Some(BodyElement::Paragraph(p)) => p,
            _ => unreachable!(),
        }
    }

    fn add_table(&mut self, rows: usize, cols: usize) -> &mut MutableTable {
        self.elements
            .push(BodyElement::Table(MutableTable::new(rows, cols)));
        match self.elements.last_mut() {
            Some(BodyElement::Table(t)) => t,
            _ => unreachable!(),
        }
    }

    fn paragraph_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, BodyElement::Paragraph(_)))
            .count()
    }

    fn table_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, BodyElement::Table(_)))
            .count()
    }

    /// Body paragraphs and table-cell paragraphs in document order.
    fn all_paragraphs(&self) -> impl Iterator<Item = &MutableParagraph> {
        self.elements.iter().flat_map(|element| {
            let (para, table) = match element {
                BodyElement::Paragraph(p) => (Some(p), None),
                BodyElement::Table(t) => (None, Some(t.paragraphs())),
            };
            para.into_iter().chain(table.into_iter().flatten())
        })
    }

    /// Hyperlinks in the order they are serialized.
    fn hyperlinks(&self) -> impl Iterator<Item = &MutableHyperlink> {
        self.all_paragraphs().flat_map(MutableParagraph::hyperlinks)
    }

    fn to_xml_with_rels(&self, xml: &mut String, rel_mapper: &RelationshipMapper) -> Result<()> {
        xml.push_str("<w:body>");

        // Global hyperlink index across paragraphs and table cells
        let mut hyperlink_counter = 0;

        for element in &self.elements {
            match element {
                BodyElement::Paragraph(p) => {
                    p.to_xml_with_rels(xml, rel_mapper, &mut hyperlink_counter)?
                },
                BodyElement::Table(t) => {
                    t.to_xml_with_rels(xml, rel_mapper, &mut hyperlink_counter)?
                },
            }
        }

        // Letter page, one-inch margins; sectPr must be the last body element
        xml.push_str(r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/>"#);
        xml.push_str(
            r#"<w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/>"#,
        );
        xml.push_str(r#"<w:cols w:space="720"/></w:sectPr>"#);

        xml.push_str("</w:body>");
        Ok(())
    }
}

/// A body element (paragraph or table).
#[derive(Debug)]
pub(crate) enum BodyElement {
    Paragraph(MutableParagraph),
    Table(MutableTable),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use std::io::{Cursor, Read};

    fn document_xml(doc: &MutableDocument) -> String {
        let bytes = doc.to_bytes().unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        xml
    }

    #[test]
    fn test_create_empty_document() {
        let doc = MutableDocument::new();
        assert_eq!(doc.paragraph_count(), 0);
        assert_eq!(doc.table_count(), 0);
        assert_eq!(doc.hyperlink_count(), 0);
    }

    #[test]
    fn test_add_table() {
        let mut doc = MutableDocument::new();
        let table = doc.add_table(2, 3);
        assert_eq!(table.row_count(), 2);
        table.cell(0, 0).unwrap().set_text("Cell 1");
        assert_eq!(doc.table_count(), 1);
        assert_eq!(doc.paragraph_count(), 0);
    }

    #[test]
    fn test_heading_levels() {
        let mut doc = MutableDocument::new();
        assert_eq!(doc.add_heading("VOLTIC", 0).unwrap().style(), Some("Title"));
        assert_eq!(doc.add_heading("Intro", 1).unwrap().style(), Some("Heading1"));
        assert_eq!(doc.add_heading("Deep", 5).unwrap().style(), Some("Heading5"));
        assert!(doc.styles().contains("Heading5"));
        assert!(matches!(
            doc.add_heading("Too deep", 10),
            Err(OoxmlError::InvalidFormat(_))
        ));
        assert_eq!(doc.paragraph_count(), 3);
    }

    #[test]
    fn test_run_formatting() {
        let mut doc = MutableDocument::new();
        let para = doc.add_paragraph();
        para.add_run_with_text("Bold text").bold(true);
        para.add_run_with_text("Italic text").italic(true);

        let xml = document_xml(&doc);
        assert!(xml.contains("<w:b/>"));
        assert!(xml.contains("<w:i/>"));
        assert!(xml.ends_with("</w:sectPr></w:body></w:document>"));
    }

    #[test]
    fn test_page_break() {
        let mut doc = MutableDocument::new();
        doc.add_page_break();
        assert!(document_xml(&doc).contains(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#));
    }

    #[test]
    fn test_hyperlink_relationships() {
        let mut doc = MutableDocument::new();
        doc.add_paragraph()
            .add_hyperlink("mailto:support@voltic.app", "support@voltic.app");
        doc.add_table(1, 1)
            .cell(0, 0)
            .unwrap()
            .add_paragraph()
            .add_hyperlink("https://status.voltic.app", "status.voltic.app");
        doc.add_paragraph()
            .add_hyperlink("mailto:support@voltic.app", "Email us");
        assert_eq!(doc.hyperlink_count(), 3);

        let package = doc.to_package().unwrap();
        let document = package.iter_parts().next().unwrap();
        let rels: Vec<_> = document
            .rels()
            .iter()
            .filter(|r| r.is_external())
            .collect();
        assert_eq!(rels.len(), 2);
        assert_eq!(rels[0].r_id(), "rId4");
        assert_eq!(rels[0].target_ref(), "mailto:support@voltic.app");
        assert_eq!(rels[1].r_id(), "rId5");

        let xml = String::from_utf8(document.blob().to_vec()).unwrap();
        assert_eq!(xml.matches(r#"<w:hyperlink r:id="rId4""#).count(), 2);
        assert_eq!(xml.matches(r#"<w:hyperlink r:id="rId5""#).count(), 1);
    }

    #[test]
    fn test_invalid_hyperlink_fails_save() {
        let mut doc = MutableDocument::new();
        doc.add_paragraph().add_hyperlink("", "nowhere");
        assert!(matches!(
            doc.to_bytes(),
            Err(OoxmlError::InvalidRelationship(_))
        ));
    }

    #[test]
    fn test_package_parts() {
        let mut doc = MutableDocument::new();
        doc.properties_mut().title = Some("Voltic User Guide".to_string());
        doc.styles_mut()
            .get_mut("Title")
            .unwrap()
            .set_color(RGBColor::new(0, 51, 102));

        let bytes = doc.to_bytes().unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut names: Vec<&str> = archive.file_names().collect();
        names.sort_unstable();
        assert_eq!(
            names,
            [
                "[Content_Types].xml",
                "_rels/.rels",
                "docProps/app.xml",
                "docProps/core.xml",
                "word/_rels/document.xml.rels",
                "word/document.xml",
                "word/numbering.xml",
                "word/settings.xml",
                "word/styles.xml",
            ]
        );
    }

    #[test]
    fn test_text_and_statistics() {
        let mut doc = MutableDocument::new();
        doc.add_paragraph_with_text("Two words");
        doc.add_table(1, 1).cell(0, 0).unwrap().set_text("Cell");
        assert_eq!(doc.text(), "Two words\nCell");

        let stats = doc.extended_properties();
        assert_eq!(stats.paragraphs, 2);
        assert_eq!(stats.words, 3);
        assert_eq!(stats.characters, 12);
    }
}
