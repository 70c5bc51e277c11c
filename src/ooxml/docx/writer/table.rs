/// Table types and implementation for DOCX documents.
use crate::common::{RGBColor, Twips, escape_xml};
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

// Import shared format types
pub use super::super::format::TableBorderStyle;
// Import other writer types
use super::hyperlink::MutableHyperlink;
use super::paragraph::{MutableParagraph, ParagraphElement};
use super::relmap::RelationshipMapper;
use super::run::MutableRun;

/// Text width of a Letter page with one-inch margins.
pub(crate) const TEXT_WIDTH: Twips = Twips(9360);

/// Border definition for table or cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBorder {
    /// Border style
    pub style: TableBorderStyle,
    /// Border width in eighths of a point (e.g., 8 = 1pt, 24 = 3pt)
    pub size: u32,
    /// Border color
    pub color: RGBColor,
}

impl Default for TableBorder {
    fn default() -> Self {
        Self {
            style: TableBorderStyle::Single,
            size: 4,
            color: RGBColor::new(0, 0, 0),
        }
    }
}

impl TableBorder {
    pub(crate) fn write_xml(&self, xml: &mut String, name: &str) -> Result<()> {
        write!(
            xml,
            r#"<w:{} w:val="{}" w:sz="{}" w:space="0" w:color="{}"/>"#,
            name,
            self.style.as_str(),
            self.size,
            self.color.to_hex()
        )?;
        Ok(())
    }
}

/// Table borders (all sides).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableBorders {
    pub top: Option<TableBorder>,
    pub left: Option<TableBorder>,
    pub bottom: Option<TableBorder>,
    pub right: Option<TableBorder>,
    pub inside_h: Option<TableBorder>,
    pub inside_v: Option<TableBorder>,
}

impl TableBorders {
    /// The same border on every edge.
    pub fn all(border: TableBorder) -> Self {
        Self {
            top: Some(border.clone()),
            left: Some(border.clone()),
            bottom: Some(border.clone()),
            right: Some(border.clone()),
            inside_h: Some(border.clone()),
            inside_v: Some(border),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
            && self.left.is_none()
            && self.bottom.is_none()
            && self.right.is_none()
            && self.inside_h.is_none()
            && self.inside_v.is_none()
    }

    /// Write `<w:tblBorders>` (or `<w:tcBorders>` via `element`).
    pub(crate) fn write_xml(&self, xml: &mut String, element: &str) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        write!(xml, "<w:{}>", element)?;
        let edges = [
            ("top", &self.top),
            ("left", &self.left),
            ("bottom", &self.bottom),
            ("right", &self.right),
            ("insideH", &self.inside_h),
            ("insideV", &self.inside_v),
        ];
        for (name, border) in edges {
            if let Some(border) = border {
                border.write_xml(xml, name)?;
            }
        }
        write!(xml, "</w:{}>", element)?;
        Ok(())
    }
}

/// Table properties.
#[derive(Debug, Clone, Default)]
pub(crate) struct TableProperties {
    pub(crate) style: Option<String>,
    pub(crate) borders: TableBorders,
}

/// A mutable table.
#[derive(Debug, Clone)]
pub struct MutableTable {
    /// Table rows
    pub(crate) rows: Vec<MutableRow>,
    /// Column count of the grid
    pub(crate) cols: usize,
    /// Table properties
    pub(crate) properties: TableProperties,
}

impl MutableTable {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        let mut table = Self {
            rows: Vec::with_capacity(rows),
            cols,
            properties: TableProperties::default(),
        };
        for _ in 0..rows {
            table.add_row();
        }
        table
    }

    /// Apply a table style by ID (e.g. `LightGridAccent1`).
    pub fn set_style(&mut self, style_id: &str) -> &mut Self {
        self.properties.style = Some(style_id.to_string());
        self
    }

    /// Get the table style ID.
    #[inline]
    pub fn style(&self) -> Option<&str> {
        self.properties.style.as_deref()
    }

    /// Append a row spanning the table grid.
    pub fn add_row(&mut self) -> &mut MutableRow {
        self.rows.push(MutableRow::new(self.cols));
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    /// Set all table borders at once.
    pub fn set_borders(&mut self, border: TableBorder) {
        self.properties.borders = TableBorders::all(border);
    }

    /// Get a cell by row and column index.
    pub fn cell(&mut self, row: usize, col: usize) -> Option<&mut MutableCell> {
        self.rows.get_mut(row)?.cell(col)
    }

    /// Get a row by index.
    pub fn row(&mut self, index: usize) -> Option<&mut MutableRow> {
        self.rows.get_mut(index)
    }

    /// The first row, which `w:tblLook/@w:firstRow` formats as a header.
    pub fn header_row_mut(&mut self) -> Option<&mut MutableRow> {
        self.rows.first_mut()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of grid columns.
    pub fn column_count(&self) -> usize {
        self.cols
    }

    /// Iterate over all cell paragraphs, row by row.
    pub(crate) fn paragraphs(&self) -> impl Iterator<Item = &MutableParagraph> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .flat_map(|cell| cell.paragraphs.iter())
    }

    /// Iterate over hyperlinks in cells, in document order.
    pub fn hyperlinks(&self) -> impl Iterator<Item = &MutableHyperlink> {
        self.paragraphs().flat_map(|p| p.hyperlinks())
    }

    pub(crate) fn to_xml_with_rels(
        &self,
        xml: &mut String,
        rel_mapper: &RelationshipMapper,
        hyperlink_counter: &mut usize,
    ) -> Result<()> {
        xml.push_str("<w:tbl>");

        xml.push_str("<w:tblPr>");
        if let Some(ref style) = self.properties.style {
            write!(xml, r#"<w:tblStyle w:val="{}"/>"#, escape_xml(style))?;
        }
        xml.push_str(r#"<w:tblW w:w="0" w:type="auto"/>"#);
        self.properties.borders.write_xml(xml, "tblBorders")?;
        xml.push_str(
            r#"<w:tblLook w:val="04A0" w:firstRow="1" w:lastRow="0" w:firstColumn="1" w:lastColumn="0" w:noHBand="0" w:noVBand="1"/>"#,
        );
        xml.push_str("</w:tblPr>");

        let col_width = self.column_width();
        xml.push_str("<w:tblGrid>");
        for _ in 0..self.cols {
            write!(xml, r#"<w:gridCol w:w="{}"/>"#, col_width.0)?;
        }
        xml.push_str("</w:tblGrid>");

        for row in &self.rows {
            row.to_xml_with_rels(xml, col_width, rel_mapper, hyperlink_counter)?;
        }

        xml.push_str("</w:tbl>");
        Ok(())
    }

    /// Columns share the text width evenly.
    fn column_width(&self) -> Twips {
        if self.cols == 0 {
            return TEXT_WIDTH;
        }
        Twips(TEXT_WIDTH.0 / self.cols as i32)
    }
}

/// A mutable table row.
#[derive(Debug, Clone)]
pub struct MutableRow {
    /// Table cells in this row
    pub(crate) cells: Vec<MutableCell>,
}

impl MutableRow {
    pub(crate) fn new(cols: usize) -> Self {
        Self {
            cells: (0..cols).map(|_| MutableCell::new()).collect(),
        }
    }

    /// Get a cell by index.
    pub fn cell(&mut self, index: usize) -> Option<&mut MutableCell> {
        self.cells.get_mut(index)
    }

    /// Iterate over the cells of this row.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut MutableCell> {
        self.cells.iter_mut()
    }

    fn to_xml_with_rels(
        &self,
        xml: &mut String,
        col_width: Twips,
        rel_mapper: &RelationshipMapper,
        hyperlink_counter: &mut usize,
    ) -> Result<()> {
        xml.push_str("<w:tr>");
        for cell in &self.cells {
            cell.to_xml_with_rels(xml, col_width, rel_mapper, hyperlink_counter)?;
        }
        xml.push_str("</w:tr>");
        Ok(())
    }
}

/// A mutable table cell.
#[derive(Debug, Clone)]
pub struct MutableCell {
    /// Paragraphs in this cell; a cell always holds at least one
    pub(crate) paragraphs: Vec<MutableParagraph>,
    /// Cell background color
    pub(crate) shading: Option<RGBColor>,
}

impl MutableCell {
    pub(crate) fn new() -> Self {
        Self {
            paragraphs: vec![MutableParagraph::new()],
            shading: None,
        }
    }

    /// Add a new paragraph to the cell.
    pub fn add_paragraph(&mut self) -> &mut MutableParagraph {
        self.paragraphs.push(MutableParagraph::new());
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    /// Replace the cell content with a single paragraph holding `text`.
    pub fn set_text(&mut self, text: &str) -> &mut MutableRun {
        self.paragraphs.clear();
        self.add_paragraph().add_run_with_text(text)
    }

    /// Text of the cell, paragraphs joined by `\n`.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(MutableParagraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Iterate over every run in the cell, in order.
    pub fn runs_mut(&mut self) -> impl Iterator<Item = &mut MutableRun> {
        self.paragraphs
            .iter_mut()
            .flat_map(|p| p.elements.iter_mut())
            .filter_map(|element| match element {
                ParagraphElement::Run(run) => Some(run),
                ParagraphElement::Hyperlink(_) => None,
            })
    }

    /// Set cell background color.
    pub fn set_shading(&mut self, color: RGBColor) {
        self.shading = Some(color);
    }

    fn to_xml_with_rels(
        &self,
        xml: &mut String,
        width: Twips,
        rel_mapper: &RelationshipMapper,
        hyperlink_counter: &mut usize,
    ) -> Result<()> {
        xml.push_str("<w:tc><w:tcPr>");
        write!(xml, r#"<w:tcW w:w="{}" w:type="dxa"/>"#, width.0)?;
        if let Some(fill) = self.shading {
            write!(
                xml,
                r#"<w:shd w:val="clear" w:color="auto" w:fill="{}"/>"#,
                fill.to_hex()
            )?;
        }
        xml.push_str("</w:tcPr>");

        for para in &self.paragraphs {
            para.to_xml_with_rels(xml, rel_mapper, hyperlink_counter)?;
        }
        // A cell must end with a paragraph
        if self.paragraphs.is_empty() {
            xml.push_str("<w:p/>");
        }

        xml.push_str("</w:tc>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_xml(table: &MutableTable) -> String {
        let mut xml = String::new();
        let mut counter = 0;
        table
            .to_xml_with_rels(&mut xml, &RelationshipMapper::new(), &mut counter)
            .unwrap();
        xml
    }

    #[test]
    fn test_table_shape() {
        let mut table = MutableTable::new(1, 2);
        table.add_row();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert!(table.cell(1, 1).is_some());
        assert!(table.cell(0, 2).is_none());

        table.row(1).unwrap().cell(0).unwrap().set_text("Credits");
        assert_eq!(table.cell(1, 0).unwrap().text(), "Credits");
        assert!(table.row(2).is_none());
    }

    #[test]
    fn test_table_style_and_grid() {
        let mut table = MutableTable::new(1, 2);
        table.set_style("LightGridAccent1");
        table.cell(0, 0).unwrap().set_text("Feature");
        table.cell(0, 1).unwrap().set_text("Cost");

        let xml = table_xml(&table);
        assert!(xml.starts_with(r#"<w:tbl><w:tblPr><w:tblStyle w:val="LightGridAccent1"/>"#));
        assert!(xml.contains(r#"<w:tblLook w:val="04A0" w:firstRow="1""#));
        assert_eq!(xml.matches(r#"<w:gridCol w:w="4680"/>"#).count(), 2);
        assert!(!xml.contains("<w:tblBorders>"));
        assert!(xml.contains("Feature</w:t>"));
    }

    #[test]
    fn test_header_row_bold() {
        let mut table = MutableTable::new(2, 2);
        table.cell(0, 0).unwrap().set_text("Option");
        table.cell(0, 1).unwrap().set_text("Choices");
        table.cell(1, 0).unwrap().set_text("Style");

        for cell in table.header_row_mut().unwrap().cells_mut() {
            for run in cell.runs_mut() {
                run.bold(true).color(RGBColor::WHITE);
            }
        }

        let xml = table_xml(&table);
        assert_eq!(xml.matches("<w:b/>").count(), 2);
        assert_eq!(xml.matches(r#"<w:color w:val="FFFFFF"/>"#).count(), 2);
    }

    #[test]
    fn test_borders() {
        let mut table = MutableTable::new(1, 1);
        table.set_borders(TableBorder::default());
        let xml = table_xml(&table);
        assert!(xml.contains(
            r#"<w:tblBorders><w:top w:val="single" w:sz="4" w:space="0" w:color="000000"/>"#
        ));
        assert!(xml.contains(r#"<w:insideV w:val="single""#));
    }

    #[test]
    fn test_cell_text_and_shading() {
        let mut cell = MutableCell::new();
        cell.set_text("Ad Generator");
        cell.add_paragraph().add_run_with_text("7 steps");
        cell.set_shading(RGBColor::new(0xD9, 0xE2, 0xF3));
        assert_eq!(cell.text(), "Ad Generator\n7 steps");

        let mut xml = String::new();
        let mut counter = 0;
        cell.to_xml_with_rels(&mut xml, Twips(4680), &RelationshipMapper::new(), &mut counter)
            .unwrap();
        assert!(xml.contains(r#"w:fill="D9E2F3""#));
    }
}
