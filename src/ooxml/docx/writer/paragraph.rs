/// Paragraph types and implementation for DOCX documents.
use crate::common::escape_xml;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

// Import shared format types
pub use super::super::format::ParagraphAlignment;
// Import other writer types
use super::hyperlink::MutableHyperlink;
use super::numbering::{BULLET_NUM_ID, DECIMAL_NUM_ID};
use super::relmap::RelationshipMapper;
use super::run::MutableRun;

/// Elements that can appear in a paragraph.
#[derive(Debug, Clone)]
pub(crate) enum ParagraphElement {
    Run(MutableRun),
    Hyperlink(MutableHyperlink),
}

/// A mutable paragraph in a document.
#[derive(Debug, Clone, Default)]
pub struct MutableParagraph {
    /// Elements (runs and hyperlinks) in this paragraph
    pub(crate) elements: Vec<ParagraphElement>,
    /// Paragraph style ID
    pub(crate) style: Option<String>,
    /// Paragraph properties
    pub(crate) properties: ParagraphProperties,
}

impl MutableParagraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a new run to the paragraph.
    pub fn add_run(&mut self) -> &mut MutableRun {
        self.elements.push(ParagraphElement::Run(MutableRun::new()));
        let Some(ParagraphElement::Run(run)) = self.elements.last_mut() else {
            unreachable!()
        };
        run
    }

    /// Add a run with text.
    pub fn add_run_with_text(&mut self, text: &str) -> &mut MutableRun {
        let run = self.add_run();
        run.set_text(text);
        run
    }

    /// Add a hyperlink to `url` displaying `text`.
    pub fn add_hyperlink(&mut self, url: &str, text: &str) -> &mut MutableHyperlink {
        self.elements
            .push(ParagraphElement::Hyperlink(MutableHyperlink::new(url, text)));
        let Some(ParagraphElement::Hyperlink(link)) = self.elements.last_mut() else {
            unreachable!()
        };
        link
    }

    /// Set the paragraph style.
    pub fn set_style(&mut self, style_id: &str) -> &mut Self {
        self.style = Some(style_id.to_string());
        self
    }

    /// Get the paragraph style ID.
    #[inline]
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Set paragraph alignment.
    pub fn set_alignment(&mut self, alignment: ParagraphAlignment) -> &mut Self {
        self.properties.alignment = Some(alignment);
        self
    }

    /// Set this paragraph as a list item.
    ///
    /// Paragraphs styled `ListBullet` / `ListNumber` are numbered through their
    /// style and do not need this.
    pub fn set_list(&mut self, list_type: ListType, level: u32) -> &mut Self {
        let num_id = match list_type {
            ListType::Bullet => BULLET_NUM_ID,
            ListType::Decimal => DECIMAL_NUM_ID,
        };

        self.properties.numbering = Some(NumberingProperties {
            num_id,
            ilvl: level,
        });
        self
    }

    /// Get the number of elements (runs and hyperlinks).
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Concatenated text of all runs and hyperlinks.
    pub fn text(&self) -> String {
        self.elements
            .iter()
            .map(|element| match element {
                ParagraphElement::Run(run) => run.text(),
                ParagraphElement::Hyperlink(link) => link.text(),
            })
            .collect()
    }

    /// Iterate over the hyperlinks of this paragraph in order.
    pub fn hyperlinks(&self) -> impl Iterator<Item = &MutableHyperlink> {
        self.elements.iter().filter_map(|element| match element {
            ParagraphElement::Hyperlink(link) => Some(link),
            ParagraphElement::Run(_) => None,
        })
    }

    /// Generate XML with actual relationship IDs from the mapper.
    ///
    /// `hyperlink_counter` tracks the global hyperlink index across the whole
    /// document and is advanced for every hyperlink written.
    pub(crate) fn to_xml_with_rels(
        &self,
        xml: &mut String,
        rel_mapper: &RelationshipMapper,
        hyperlink_counter: &mut usize,
    ) -> Result<()> {
        xml.push_str("<w:p>");
        self.write_properties(xml)?;

        for element in &self.elements {
            match element {
                ParagraphElement::Run(run) => run.to_xml(xml)?,
                ParagraphElement::Hyperlink(hyperlink) => {
                    let rel_id = rel_mapper.require_hyperlink_id(*hyperlink_counter)?;
                    hyperlink.to_xml(xml, rel_id)?;
                    *hyperlink_counter += 1;
                },
            }
        }

        xml.push_str("</w:p>");
        Ok(())
    }

    fn write_properties(&self, xml: &mut String) -> Result<()> {
        if self.style.is_none() && !self.properties.has_properties() {
            return Ok(());
        }

        xml.push_str("<w:pPr>");

        if let Some(ref style) = self.style {
            write!(xml, r#"<w:pStyle w:val="{}"/>"#, escape_xml(style))?;
        }

        if let Some(ref numbering) = self.properties.numbering {
            write!(
                xml,
                r#"<w:numPr><w:ilvl w:val="{}"/><w:numId w:val="{}"/></w:numPr>"#,
                numbering.ilvl, numbering.num_id
            )?;
        }

        if let Some(alignment) = self.properties.alignment {
            write!(xml, r#"<w:jc w:val="{}"/>"#, alignment.as_str())?;
        }

        xml.push_str("</w:pPr>");
        Ok(())
    }
}

/// Paragraph properties.
#[derive(Debug, Clone, Default)]
pub(crate) struct ParagraphProperties {
    pub(crate) alignment: Option<ParagraphAlignment>,
    pub(crate) numbering: Option<NumberingProperties>,
}

impl ParagraphProperties {
    pub(crate) fn has_properties(&self) -> bool {
        self.alignment.is_some() || self.numbering.is_some()
    }
}

/// Numbering properties for lists.
#[derive(Debug, Clone)]
pub(crate) struct NumberingProperties {
    pub(crate) num_id: u32,
    pub(crate) ilvl: u32,
}

/// List types for paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListType {
    Bullet,
    Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn para_xml(para: &MutableParagraph, mapper: &RelationshipMapper) -> Result<String> {
        let mut xml = String::new();
        let mut counter = 0;
        para.to_xml_with_rels(&mut xml, mapper, &mut counter)?;
        Ok(xml)
    }

    #[test]
    fn test_empty_paragraph() {
        let para = MutableParagraph::new();
        assert_eq!(
            para_xml(&para, &RelationshipMapper::new()).unwrap(),
            "<w:p></w:p>"
        );
    }

    #[test]
    fn test_properties_order() {
        let mut para = MutableParagraph::new();
        para.set_style("ListNumber")
            .set_alignment(ParagraphAlignment::Center)
            .set_list(ListType::Decimal, 0)
            .add_run_with_text("Intro");

        let xml = para_xml(&para, &RelationshipMapper::new()).unwrap();
        assert!(xml.starts_with(
            r#"<w:p><w:pPr><w:pStyle w:val="ListNumber"/><w:numPr><w:ilvl w:val="0"/><w:numId w:val="2"/></w:numPr><w:jc w:val="center"/></w:pPr>"#
        ));
    }

    #[test]
    fn test_hyperlink_ids_follow_counter() {
        let mut para = MutableParagraph::new();
        para.add_run_with_text("Email: ");
        para.add_hyperlink("mailto:support@voltic.app", "support@voltic.app");

        let mut mapper = RelationshipMapper::new();
        mapper.add_hyperlink(3, "rId9".to_string());

        let mut xml = String::new();
        let mut counter = 3;
        para.to_xml_with_rels(&mut xml, &mapper, &mut counter)
            .unwrap();
        assert!(xml.contains(r#"<w:hyperlink r:id="rId9""#));
        assert_eq!(counter, 4);
    }

    #[test]
    fn test_missing_hyperlink_id_is_error() {
        let mut para = MutableParagraph::new();
        para.add_hyperlink("https://status.voltic.app", "status.voltic.app");
        assert!(para_xml(&para, &RelationshipMapper::new()).is_err());
    }

    #[test]
    fn test_text_and_hyperlinks() {
        let mut para = MutableParagraph::new();
        para.add_run_with_text("Status Page: ").bold(true);
        para.add_hyperlink("https://status.voltic.app", "status.voltic.app");
        assert_eq!(para.text(), "Status Page: status.voltic.app");
        assert_eq!(para.hyperlinks().count(), 1);
        assert_eq!(para.element_count(), 2);
    }
}
