//! Document properties for OOXML packages.
//!
//! Core properties live in `docProps/core.xml` (Dublin Core metadata), extended
//! properties in `docProps/app.xml` (producing application and statistics).

use crate::common::escape_xml;
use crate::ooxml::opc::constants::namespace;
use chrono::{DateTime, SecondsFormat, Utc};

/// Document core properties (metadata).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentProperties {
    /// Document title
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document creator/author
    pub creator: Option<String>,
    /// Document keywords (comma-separated)
    pub keywords: Option<String>,
    /// Free-form comments, stored as `dc:description`
    pub comments: Option<String>,
    /// Last modified by
    pub last_modified_by: Option<String>,
    /// Document category
    pub category: Option<String>,
    /// Revision number
    pub revision: Option<u32>,
    /// Creation date
    pub created: Option<DateTime<Utc>>,
    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl DocumentProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn creator(mut self, creator: &str) -> Self {
        self.creator = Some(creator.to_string());
        self
    }

    pub fn keywords(mut self, keywords: &str) -> Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    pub fn comments(mut self, comments: &str) -> Self {
        self.comments = Some(comments.to_string());
        self
    }

    pub fn last_modified_by(mut self, name: &str) -> Self {
        self.last_modified_by = Some(name.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Stamp both `created` and `modified` with the same instant.
    pub fn timestamped(mut self, at: DateTime<Utc>) -> Self {
        self.created = Some(at);
        self.modified = Some(at);
        self
    }

    /// Generate core.xml content for this properties set.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
        );

        push_element(&mut xml, "dc:title", self.title.as_deref());
        push_element(&mut xml, "dc:subject", self.subject.as_deref());
        push_element(&mut xml, "dc:creator", self.creator.as_deref());
        push_element(&mut xml, "cp:keywords", self.keywords.as_deref());
        push_element(&mut xml, "dc:description", self.comments.as_deref());
        push_element(&mut xml, "cp:lastModifiedBy", self.last_modified_by.as_deref());
        push_element(&mut xml, "cp:category", self.category.as_deref());

        if let Some(revision) = self.revision {
            push_element(&mut xml, "cp:revision", Some(&revision.to_string()));
        }

        // W3CDTF requires whole seconds with a trailing Z
        if let Some(ref created) = self.created {
            xml.push_str(r#"<dcterms:created xsi:type="dcterms:W3CDTF">"#);
            xml.push_str(&created.to_rfc3339_opts(SecondsFormat::Secs, true));
            xml.push_str("</dcterms:created>");
        }
        if let Some(ref modified) = self.modified {
            xml.push_str(r#"<dcterms:modified xsi:type="dcterms:W3CDTF">"#);
            xml.push_str(&modified.to_rfc3339_opts(SecondsFormat::Secs, true));
            xml.push_str("</dcterms:modified>");
        }

        xml.push_str("</cp:coreProperties>");
        xml
    }
}

fn push_element(xml: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        xml.push('<');
        xml.push_str(name);
        xml.push('>');
        xml.push_str(&escape_xml(value));
        xml.push_str("</");
        xml.push_str(name);
        xml.push('>');
    }
}

/// Extended (application) properties written to `docProps/app.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedProperties {
    /// Producing application name
    pub application: String,
    /// Application version in "major.minor" form
    pub app_version: String,
    /// Number of paragraphs in the document body
    pub paragraphs: usize,
    /// Number of words in the document body
    pub words: usize,
    /// Number of characters (excluding spaces)
    pub characters: usize,
}

impl Default for ExtendedProperties {
    fn default() -> Self {
        Self {
            application: env!("CARGO_PKG_NAME").to_string(),
            app_version: format!(
                "{}.{}",
                env!("CARGO_PKG_VERSION_MAJOR"),
                env!("CARGO_PKG_VERSION_MINOR")
            ),
            paragraphs: 0,
            words: 0,
            characters: 0,
        }
    }
}

impl ExtendedProperties {
    pub fn to_xml(&self) -> String {
        format!(
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
                r#"<Properties xmlns="{ns}">"#,
                "<Application>{app}</Application>",
                "<AppVersion>{ver}</AppVersion>",
                "<Paragraphs>{paras}</Paragraphs>",
                "<Words>{words}</Words>",
                "<Characters>{chars}</Characters>",
                "</Properties>"
            ),
            ns = namespace::EXTENDED_PROPERTIES,
            app = escape_xml(&self.application),
            ver = escape_xml(&self.app_version),
            paras = self.paragraphs,
            words = self.words,
            chars = self.characters,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_document_properties_builder() {
        let props = DocumentProperties::new()
            .title("Voltic User Guide")
            .keywords("Voltic, Meta Ads")
            .comments("Comprehensive user guide");

        assert_eq!(props.title.as_deref(), Some("Voltic User Guide"));
        assert_eq!(props.keywords.as_deref(), Some("Voltic, Meta Ads"));
        assert_eq!(props.comments.as_deref(), Some("Comprehensive user guide"));
        assert!(props.created.is_none());
    }

    #[test]
    fn test_xml_generation() {
        let at = Utc.with_ymd_and_hms(2026, 2, 1, 9, 30, 0).unwrap();
        let props = DocumentProperties::new()
            .title("My Document")
            .comments("Notes")
            .timestamped(at);

        let xml = props.to_xml();
        assert!(xml.contains("<dc:title>My Document</dc:title>"));
        assert!(xml.contains("<dc:description>Notes</dc:description>"));
        assert!(xml.contains(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">2026-02-01T09:30:00Z</dcterms:created>"#
        ));
        assert!(!xml.contains("dc:creator"));
    }

    #[test]
    fn test_xml_escaping() {
        let props = DocumentProperties::new().subject("Ads & <Creatives>");
        assert!(props.to_xml().contains("Ads &amp; &lt;Creatives&gt;"));
    }

    #[test]
    fn test_extended_properties() {
        let app = ExtendedProperties {
            paragraphs: 3,
            ..Default::default()
        };
        let xml = app.to_xml();
        assert!(xml.contains("<Application>voltic-guide</Application>"));
        assert!(xml.contains("<Paragraphs>3</Paragraphs>"));
    }
}
