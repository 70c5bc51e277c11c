//! Small building blocks shared by the guide sections.
use crate::common::RGBColor;
use crate::ooxml::docx::writer::{MutableDocument, MutableHyperlink, MutableParagraph};
use log::warn;

pub(crate) const LIST_BULLET: &str = "ListBullet";
pub(crate) const LIST_NUMBER: &str = "ListNumber";
pub(crate) const INTENSE_QUOTE: &str = "IntenseQuote";
pub(crate) const HEADING_3: &str = "Heading3";

/// Table style ids.
pub(crate) const LIGHT_GRID: &str = "LightGridAccent1";
pub(crate) const LIGHT_LIST: &str = "LightListAccent1";
pub(crate) const MEDIUM_SHADING: &str = "MediumShading1Accent1";

pub(crate) fn add_page_break(doc: &mut MutableDocument) {
    doc.add_page_break();
}

/// Append a clickable link to `paragraph`.
///
/// The link is validated when the document is packaged.
pub fn add_hyperlink<'a>(
    paragraph: &'a mut MutableParagraph,
    url: &str,
    text: &str,
) -> &'a mut MutableHyperlink {
    paragraph.add_hyperlink(url, text)
}

/// `label` in bold followed by `text` in the same paragraph.
pub(crate) fn labeled<'a>(
    paragraph: &'a mut MutableParagraph,
    label: &str,
    text: &str,
) -> &'a mut MutableParagraph {
    paragraph.add_run_with_text(label).bold(true);
    paragraph.add_run_with_text(text);
    paragraph
}

pub(crate) fn labeled_paragraph(doc: &mut MutableDocument, label: &str, text: &str) {
    labeled(doc.add_paragraph(), label, text);
}

pub(crate) fn labeled_bullet<'a>(
    doc: &'a mut MutableDocument,
    label: &str,
    text: &str,
) -> &'a mut MutableParagraph {
    let paragraph = doc.add_paragraph();
    paragraph.set_style(LIST_BULLET);
    labeled(paragraph, label, text)
}

pub(crate) fn bullets(doc: &mut MutableDocument, items: &[&str]) {
    for item in items {
        doc.add_styled_paragraph(item, LIST_BULLET);
    }
}

pub(crate) fn numbered(doc: &mut MutableDocument, items: &[&str]) {
    for item in items {
        doc.add_styled_paragraph(item, LIST_NUMBER);
    }
}

/// Emit a two-column table: a bold header row then one row per pair.
///
/// `header_color` recolors the header text; shaded header styles need white.
pub(crate) fn key_value_table(
    doc: &mut MutableDocument,
    style_id: &str,
    header: (&str, &str),
    rows: &[(&str, &str)],
    header_color: Option<RGBColor>,
) {
    if rows.is_empty() {
        warn!("skipping table '{} / {}': no rows", header.0, header.1);
        return;
    }

    let table = doc.add_table(1, 2);
    table.set_style(style_id);

    if let Some(header_row) = table.header_row_mut() {
        for (cell, text) in header_row.cells_mut().zip([header.0, header.1]) {
            cell.set_text(text);
            for run in cell.runs_mut() {
                run.bold(true);
                if let Some(color) = header_color {
                    run.color(color);
                }
            }
        }
    }

    for (key, value) in rows {
        let row = table.add_row();
        for (cell, text) in row.cells_mut().zip([*key, *value]) {
            cell.set_text(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value_table_bolds_header() {
        let mut doc = MutableDocument::new();
        key_value_table(
            &mut doc,
            MEDIUM_SHADING,
            ("Option", "Choices"),
            &[("Angle", "Front"), ("Light", "Studio")],
            Some(RGBColor::WHITE),
        );
        assert_eq!(doc.table_count(), 1);

        let package = doc.to_package().unwrap();
        let part = package
            .iter_parts()
            .find(|part| part.partname().as_str() == "/word/document.xml")
            .unwrap();
        let xml = std::str::from_utf8(part.blob()).unwrap();
        assert!(xml.contains(r#"<w:tblStyle w:val="MediumShading1Accent1"/>"#));
        assert!(xml.contains(
            r#"<w:r><w:rPr><w:b/><w:color w:val="FFFFFF"/></w:rPr><w:t xml:space="preserve">Option</w:t></w:r>"#
        ));
        assert!(xml.contains(r#"<w:r><w:t xml:space="preserve">Studio</w:t></w:r>"#));
    }

    #[test]
    fn test_empty_table_is_skipped() {
        let mut doc = MutableDocument::new();
        key_value_table(&mut doc, LIGHT_GRID, ("A", "B"), &[], None);
        assert_eq!(doc.table_count(), 0);
    }

    #[test]
    fn test_labeled_bullet() {
        let mut doc = MutableDocument::new();
        let paragraph = labeled_bullet(&mut doc, "Home: ", "Dashboard");
        assert_eq!(paragraph.style(), Some(LIST_BULLET));
        assert_eq!(paragraph.text(), "Home: Dashboard");
        assert_eq!(paragraph.element_count(), 2);
    }

    #[test]
    fn test_add_hyperlink() {
        let mut doc = MutableDocument::new();
        let paragraph = doc.add_paragraph();
        add_hyperlink(paragraph, "https://status.voltic.app", "status.voltic.app");
        assert_eq!(doc.hyperlink_count(), 1);
    }
}
