/// Style writer support for DOCX documents.
///
/// This module provides the style definitions written to `word/styles.xml`:
/// a set of built-in paragraph, character and table styles that callers can
/// adjust before the document is saved.
use crate::common::{HalfPoints, RGBColor, Twips, escape_xml};
use crate::ooxml::docx::enums::WdStyleType;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

use super::numbering::{BULLET_NUM_ID, DECIMAL_NUM_ID};
use super::paragraph::ParagraphAlignment;
use super::run::RunProperties;
use super::table::{TableBorder, TableBorderStyle, TableBorders};

/// Office theme "Accent 1" blue.
pub const ACCENT_1: RGBColor = RGBColor::new(0x4F, 0x81, 0xBD);

/// Paragraph-level formatting a style may carry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleParagraphProperties {
    pub keep_next: bool,
    /// `w:numId` linking the style to a numbering definition
    pub num_id: Option<u32>,
    pub bottom_border: Option<TableBorder>,
    pub space_before: Option<Twips>,
    pub space_after: Option<Twips>,
    pub contextual_spacing: bool,
    pub indent_left: Option<Twips>,
    pub indent_right: Option<Twips>,
    pub hanging: Option<Twips>,
    pub alignment: Option<ParagraphAlignment>,
}

impl StyleParagraphProperties {
    fn has_properties(&self) -> bool {
        self.keep_next
            || self.num_id.is_some()
            || self.bottom_border.is_some()
            || self.space_before.is_some()
            || self.space_after.is_some()
            || self.contextual_spacing
            || self.indent_left.is_some()
            || self.indent_right.is_some()
            || self.hanging.is_some()
            || self.alignment.is_some()
    }

    fn write_xml(&self, xml: &mut String) -> Result<()> {
        if !self.has_properties() {
            return Ok(());
        }

        xml.push_str("<w:pPr>");
        if self.keep_next {
            xml.push_str("<w:keepNext/>");
        }
        if let Some(num_id) = self.num_id {
            write!(xml, r#"<w:numPr><w:numId w:val="{}"/></w:numPr>"#, num_id)?;
        }
        if let Some(ref border) = self.bottom_border {
            xml.push_str("<w:pBdr>");
            border.write_xml(xml, "bottom")?;
            xml.push_str("</w:pBdr>");
        }
        if self.space_before.is_some() || self.space_after.is_some() {
            xml.push_str("<w:spacing");
            if let Some(before) = self.space_before {
                write!(xml, r#" w:before="{}""#, before.0)?;
            }
            if let Some(after) = self.space_after {
                write!(xml, r#" w:after="{}""#, after.0)?;
            }
            xml.push_str("/>");
        }
        if self.indent_left.is_some() || self.indent_right.is_some() || self.hanging.is_some() {
            xml.push_str("<w:ind");
            if let Some(left) = self.indent_left {
                write!(xml, r#" w:left="{}""#, left.0)?;
            }
            if let Some(right) = self.indent_right {
                write!(xml, r#" w:right="{}""#, right.0)?;
            }
            if let Some(hanging) = self.hanging {
                write!(xml, r#" w:hanging="{}""#, hanging.0)?;
            }
            xml.push_str("/>");
        }
        if self.contextual_spacing {
            xml.push_str("<w:contextualSpacing/>");
        }
        if let Some(alignment) = self.alignment {
            write!(xml, r#"<w:jc w:val="{}"/>"#, alignment.as_str())?;
        }
        xml.push_str("</w:pPr>");
        Ok(())
    }
}

/// Table regions a table style can format separately (`w:tblStylePr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRegion {
    FirstRow,
    LastRow,
    FirstColumn,
    Band1Horz,
}

impl TableRegion {
    fn as_str(self) -> &'static str {
        match self {
            Self::FirstRow => "firstRow",
            Self::LastRow => "lastRow",
            Self::FirstColumn => "firstCol",
            Self::Band1Horz => "band1Horz",
        }
    }
}

/// Formatting applied to one table region.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalFormat {
    pub region: TableRegion,
    pub run: RunProperties,
    pub shading: Option<RGBColor>,
    pub borders: TableBorders,
}

impl ConditionalFormat {
    pub fn new(region: TableRegion) -> Self {
        Self {
            region,
            run: RunProperties::default(),
            shading: None,
            borders: TableBorders::default(),
        }
    }

    fn write_xml(&self, xml: &mut String) -> Result<()> {
        write!(xml, r#"<w:tblStylePr w:type="{}">"#, self.region.as_str())?;
        self.run.write_xml(xml)?;
        if self.shading.is_some() || !self.borders.is_empty() {
            xml.push_str("<w:tcPr>");
            self.borders.write_xml(xml, "tcBorders")?;
            if let Some(fill) = self.shading {
                write!(
                    xml,
                    r#"<w:shd w:val="clear" w:color="auto" w:fill="{}"/>"#,
                    fill.to_hex()
                )?;
            }
            xml.push_str("</w:tcPr>");
        }
        xml.push_str("</w:tblStylePr>");
        Ok(())
    }
}

/// Table-level formatting a table style carries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableStyleProperties {
    pub borders: TableBorders,
    /// Left/right cell margin
    pub cell_margin: Option<Twips>,
    pub conditional: Vec<ConditionalFormat>,
}

impl TableStyleProperties {
    fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:tblPr>");
        xml.push_str(r#"<w:tblStyleRowBandSize w:val="1"/><w:tblStyleColBandSize w:val="1"/>"#);
        if self.cell_margin.is_some() {
            xml.push_str(r#"<w:tblInd w:w="0" w:type="dxa"/>"#);
        }
        self.borders.write_xml(xml, "tblBorders")?;
        if let Some(margin) = self.cell_margin {
            write!(
                xml,
                r#"<w:tblCellMar><w:top w:w="0" w:type="dxa"/><w:left w:w="{0}" w:type="dxa"/><w:bottom w:w="0" w:type="dxa"/><w:right w:w="{0}" w:type="dxa"/></w:tblCellMar>"#,
                margin.0
            )?;
        }
        xml.push_str("</w:tblPr>");
        for format in &self.conditional {
            format.write_xml(xml)?;
        }
        Ok(())
    }
}

/// A mutable style definition for writing.
///
/// Styles define reusable formatting that can be applied to paragraphs,
/// characters and tables.
///
/// # Examples
///
/// ```rust
/// use voltic_guide::common::RGBColor;
/// use voltic_guide::ooxml::docx::enums::WdStyleType;
/// use voltic_guide::ooxml::docx::writer::MutableStyle;
///
/// let mut style = MutableStyle::new("Callout", "Callout", WdStyleType::Paragraph);
/// style
///     .set_based_on("Normal")
///     .set_font_size_pt(12.0)
///     .set_bold(true)
///     .set_color(RGBColor::new(0, 112, 192));
/// assert!(style.to_xml().unwrap().contains(r#"<w:sz w:val="24"/>"#));
/// ```
#[derive(Debug, Clone)]
pub struct MutableStyle {
    /// Style identifier (e.g., "Heading1")
    style_id: String,
    /// UI-visible name (e.g., "heading 1")
    name: String,
    style_type: WdStyleType,
    /// Whether this is the default style for its type
    is_default: bool,
    based_on: Option<String>,
    next: Option<String>,
    /// UI priority for display ordering (lower = higher priority)
    priority: Option<u32>,
    is_quick_style: bool,
    is_semi_hidden: bool,
    paragraph: StyleParagraphProperties,
    run: RunProperties,
    table: Option<TableStyleProperties>,
}

impl MutableStyle {
    /// Create a new style with the given ID, name, and type.
    pub fn new(
        style_id: impl Into<String>,
        name: impl Into<String>,
        style_type: WdStyleType,
    ) -> Self {
        Self {
            style_id: style_id.into(),
            name: name.into(),
            style_type,
            is_default: false,
            based_on: None,
            next: None,
            priority: None,
            is_quick_style: false,
            is_semi_hidden: false,
            paragraph: StyleParagraphProperties::default(),
            run: RunProperties::default(),
            table: (style_type == WdStyleType::Table).then(TableStyleProperties::default),
        }
    }

    #[inline]
    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn style_type(&self) -> WdStyleType {
        self.style_type
    }

    #[inline]
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    #[inline]
    pub fn based_on(&self) -> Option<&str> {
        self.based_on.as_deref()
    }

    /// Character formatting of the style.
    #[inline]
    pub fn font(&self) -> &RunProperties {
        &self.run
    }

    pub fn set_default(&mut self, is_default: bool) -> &mut Self {
        self.is_default = is_default;
        self
    }

    /// Set the base style ID. The style inherits formatting from it.
    pub fn set_based_on(&mut self, style_id: &str) -> &mut Self {
        self.based_on = Some(style_id.to_string());
        self
    }

    /// Style applied to the paragraph that follows this one.
    pub fn set_next(&mut self, style_id: &str) -> &mut Self {
        self.next = Some(style_id.to_string());
        self
    }

    pub fn set_priority(&mut self, priority: u32) -> &mut Self {
        self.priority = Some(priority);
        self
    }

    pub fn set_quick_style(&mut self, is_quick_style: bool) -> &mut Self {
        self.is_quick_style = is_quick_style;
        self
    }

    pub fn set_semi_hidden(&mut self, is_semi_hidden: bool) -> &mut Self {
        self.is_semi_hidden = is_semi_hidden;
        self
    }

    pub fn set_font_name(&mut self, name: &str) -> &mut Self {
        self.run.font_name = Some(name.to_string());
        self
    }

    pub fn set_font_size_pt(&mut self, pt: f32) -> &mut Self {
        self.run.font_size = Some(HalfPoints::from_pt(pt));
        self
    }

    pub fn set_bold(&mut self, bold: bool) -> &mut Self {
        self.run.bold = Some(bold);
        self
    }

    pub fn set_italic(&mut self, italic: bool) -> &mut Self {
        self.run.italic = Some(italic);
        self
    }

    pub fn set_color(&mut self, color: RGBColor) -> &mut Self {
        self.run.color = Some(color);
        self
    }

    /// Serialize this style as a `<w:style>` element.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512);

        write!(
            xml,
            r#"<w:style w:type="{}" "#,
            self.style_type.to_xml()
        )?;
        if self.is_default {
            xml.push_str(r#"w:default="1" "#);
        }
        write!(xml, r#"w:styleId="{}">"#, escape_xml(&self.style_id))?;

        write!(xml, r#"<w:name w:val="{}"/>"#, escape_xml(&self.name))?;
        if let Some(ref based_on) = self.based_on {
            write!(xml, r#"<w:basedOn w:val="{}"/>"#, escape_xml(based_on))?;
        }
        if let Some(ref next) = self.next {
            write!(xml, r#"<w:next w:val="{}"/>"#, escape_xml(next))?;
        }
        if let Some(priority) = self.priority {
            write!(xml, r#"<w:uiPriority w:val="{}"/>"#, priority)?;
        }
        if self.is_semi_hidden {
            xml.push_str("<w:semiHidden/><w:unhideWhenUsed/>");
        }
        if self.is_quick_style {
            xml.push_str("<w:qFormat/>");
        }

        if self.style_type != WdStyleType::Character {
            self.paragraph.write_xml(&mut xml)?;
        }
        self.run.write_xml(&mut xml)?;
        if let Some(ref table) = self.table {
            table.write_xml(&mut xml)?;
        }

        xml.push_str("</w:style>");
        Ok(xml)
    }

    // Factory methods for the built-in styles

    /// "Normal", the default paragraph style.
    pub fn normal() -> Self {
        let mut style = Self::new("Normal", "Normal", WdStyleType::Paragraph);
        style.set_default(true).set_quick_style(true);
        style
    }

    /// "Title" (heading level 0).
    pub fn title() -> Self {
        let mut style = Self::new("Title", "Title", WdStyleType::Paragraph);
        style
            .set_based_on("Normal")
            .set_next("Normal")
            .set_priority(10)
            .set_quick_style(true)
            .set_font_name("Calibri Light")
            .set_font_size_pt(26.0)
            .set_color(RGBColor::new(0x17, 0x36, 0x5D));
        style.paragraph = StyleParagraphProperties {
            bottom_border: Some(TableBorder {
                style: TableBorderStyle::Single,
                size: 8,
                color: ACCENT_1,
            }),
            space_after: Some(Twips::from_pt(15.0)),
            contextual_spacing: true,
            ..Default::default()
        };
        style
    }

    /// "heading 1" through "heading 9".
    pub fn heading(level: u8) -> Self {
        let (size, color, before) = match level {
            1 => (14.0, RGBColor::new(0x36, 0x5F, 0x91), 24.0),
            2 => (13.0, ACCENT_1, 10.0),
            _ => (11.0, ACCENT_1, 10.0),
        };
        let mut style = Self::new(
            format!("Heading{}", level),
            format!("heading {}", level),
            WdStyleType::Paragraph,
        );
        style
            .set_based_on("Normal")
            .set_next("Normal")
            .set_priority(9)
            .set_quick_style(true)
            .set_font_name("Calibri Light")
            .set_font_size_pt(size)
            .set_bold(true)
            .set_color(color);
        style.paragraph = StyleParagraphProperties {
            keep_next: true,
            space_before: Some(Twips::from_pt(before)),
            space_after: Some(Twips(0)),
            ..Default::default()
        };
        style
    }

    /// "List Bullet", numbered by the bullet list.
    pub fn list_bullet() -> Self {
        Self::list("ListBullet", "List Bullet", BULLET_NUM_ID)
    }

    /// "List Number", numbered by the decimal list.
    pub fn list_number() -> Self {
        Self::list("ListNumber", "List Number", DECIMAL_NUM_ID)
    }

    fn list(style_id: &str, name: &str, num_id: u32) -> Self {
        let mut style = Self::new(style_id, name, WdStyleType::Paragraph);
        style.set_based_on("Normal").set_priority(99);
        style.paragraph = StyleParagraphProperties {
            num_id: Some(num_id),
            contextual_spacing: true,
            ..Default::default()
        };
        style
    }

    /// "Intense Quote".
    pub fn intense_quote() -> Self {
        let mut style = Self::new("IntenseQuote", "Intense Quote", WdStyleType::Paragraph);
        style
            .set_based_on("Normal")
            .set_next("Normal")
            .set_priority(30)
            .set_quick_style(true)
            .set_bold(true)
            .set_italic(true)
            .set_color(ACCENT_1);
        style.paragraph = StyleParagraphProperties {
            bottom_border: Some(TableBorder {
                style: TableBorderStyle::Single,
                size: 4,
                color: ACCENT_1,
            }),
            space_before: Some(Twips::from_pt(10.0)),
            space_after: Some(Twips::from_pt(14.0)),
            indent_left: Some(Twips(936)),
            indent_right: Some(Twips(936)),
            ..Default::default()
        };
        style
    }

    /// "Default Paragraph Font", the default character style.
    pub fn default_paragraph_font() -> Self {
        let mut style = Self::new(
            "DefaultParagraphFont",
            "Default Paragraph Font",
            WdStyleType::Character,
        );
        style.set_default(true).set_priority(1).set_semi_hidden(true);
        style
    }

    /// "Hyperlink" character style.
    pub fn hyperlink() -> Self {
        let mut style = Self::new("Hyperlink", "Hyperlink", WdStyleType::Character);
        style
            .set_based_on("DefaultParagraphFont")
            .set_priority(99)
            .set_color(RGBColor::HYPERLINK);
        style.run.underline = Some(super::run::UnderlineStyle::Single);
        style
    }

    /// "Normal Table", the default table style.
    pub fn table_normal() -> Self {
        let mut style = Self::new("TableNormal", "Normal Table", WdStyleType::Table);
        style
            .set_default(true)
            .set_priority(99)
            .set_semi_hidden(true);
        style.table = Some(TableStyleProperties {
            cell_margin: Some(Twips(108)),
            ..Default::default()
        });
        style
    }

    /// "Light Grid Accent 1": full grid, bold header above a heavy rule.
    pub fn light_grid_accent_1() -> Self {
        let grid = TableBorder {
            style: TableBorderStyle::Single,
            size: 8,
            color: ACCENT_1,
        };
        let mut header = ConditionalFormat::new(TableRegion::FirstRow);
        header.run.bold = Some(true);
        header.run.font_name = Some("Calibri Light".to_string());
        header.borders.bottom = Some(TableBorder {
            size: 18,
            ..grid.clone()
        });
        let mut band = ConditionalFormat::new(TableRegion::Band1Horz);
        band.shading = Some(RGBColor::new(0xD3, 0xDF, 0xEE));

        Self::accent_table(
            "LightGridAccent1",
            "Light Grid Accent 1",
            62,
            TableBorders::all(grid),
            vec![header, band],
        )
    }

    /// "Light List Accent 1": outline only, solid accent header.
    pub fn light_list_accent_1() -> Self {
        let outline = TableBorder {
            style: TableBorderStyle::Single,
            size: 8,
            color: ACCENT_1,
        };
        let borders = TableBorders {
            top: Some(outline.clone()),
            left: Some(outline.clone()),
            bottom: Some(outline.clone()),
            right: Some(outline),
            ..Default::default()
        };
        let mut header = ConditionalFormat::new(TableRegion::FirstRow);
        header.run.bold = Some(true);
        header.run.color = Some(RGBColor::WHITE);
        header.shading = Some(ACCENT_1);

        Self::accent_table(
            "LightListAccent1",
            "Light List Accent 1",
            61,
            borders,
            vec![header],
        )
    }

    /// "Medium Shading 1 Accent 1": accent header, banded rows.
    pub fn medium_shading_1_accent_1() -> Self {
        let line = TableBorder {
            style: TableBorderStyle::Single,
            size: 8,
            color: RGBColor::new(0x7B, 0xA0, 0xCD),
        };
        let borders = TableBorders {
            inside_v: None,
            ..TableBorders::all(line)
        };
        let mut header = ConditionalFormat::new(TableRegion::FirstRow);
        header.run.bold = Some(true);
        header.run.color = Some(RGBColor::WHITE);
        header.shading = Some(ACCENT_1);
        let mut band = ConditionalFormat::new(TableRegion::Band1Horz);
        band.shading = Some(RGBColor::new(0xD3, 0xDF, 0xEE));

        Self::accent_table(
            "MediumShading1Accent1",
            "Medium Shading 1 Accent 1",
            63,
            borders,
            vec![header, band],
        )
    }

    fn accent_table(
        style_id: &str,
        name: &str,
        priority: u32,
        borders: TableBorders,
        conditional: Vec<ConditionalFormat>,
    ) -> Self {
        let mut style = Self::new(style_id, name, WdStyleType::Table);
        style.set_based_on("TableNormal").set_priority(priority);
        style.paragraph.space_after = Some(Twips(0));
        style.table = Some(TableStyleProperties {
            borders,
            cell_margin: None,
            conditional,
        });
        style
    }
}

/// The styles part of a document.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    styles: Vec<MutableStyle>,
    /// Document default font
    default_font: String,
    /// Document default size
    default_size: HalfPoints,
}

impl Default for StyleSheet {
    fn default() -> Self {
        let styles = vec![
            MutableStyle::normal(),
            MutableStyle::title(),
            MutableStyle::heading(1),
            MutableStyle::heading(2),
            MutableStyle::heading(3),
            MutableStyle::list_bullet(),
            MutableStyle::list_number(),
            MutableStyle::intense_quote(),
            MutableStyle::default_paragraph_font(),
            MutableStyle::hyperlink(),
            MutableStyle::table_normal(),
            MutableStyle::light_grid_accent_1(),
            MutableStyle::light_list_accent_1(),
            MutableStyle::medium_shading_1_accent_1(),
        ];
        Self {
            styles,
            default_font: "Calibri".to_string(),
            default_size: HalfPoints(22),
        }
    }
}

impl StyleSheet {
    /// A style sheet holding the built-in styles.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, style_id: &str) -> Option<&MutableStyle> {
        self.styles.iter().find(|s| s.style_id == style_id)
    }

    /// Get a style for modification.
    pub fn get_mut(&mut self, style_id: &str) -> Option<&mut MutableStyle> {
        self.styles.iter_mut().find(|s| s.style_id == style_id)
    }

    /// Look a style up by its UI name ("Light Grid Accent 1").
    pub fn by_name(&self, name: &str) -> Option<&MutableStyle> {
        self.styles.iter().find(|s| s.name == name)
    }

    pub fn contains(&self, style_id: &str) -> bool {
        self.get(style_id).is_some()
    }

    /// Add a style, replacing any style with the same ID.
    pub fn add(&mut self, style: MutableStyle) {
        match self.get_mut(&style.style_id) {
            Some(existing) => *existing = style,
            None => self.styles.push(style),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &MutableStyle> {
        self.styles.iter()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Generate the complete styles.xml content.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048 + self.styles.len() * 512);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
        );

        let font = escape_xml(&self.default_font);
        xml.push_str("<w:docDefaults><w:rPrDefault><w:rPr>");
        write!(
            xml,
            r#"<w:rFonts w:ascii="{0}" w:eastAsia="{0}" w:hAnsi="{0}" w:cs="{0}"/>"#,
            font
        )?;
        write!(
            xml,
            r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/><w:lang w:val="en-US"/>"#,
            self.default_size.0
        )?;
        xml.push_str("</w:rPr></w:rPrDefault>");
        xml.push_str(
            r#"<w:pPrDefault><w:pPr><w:spacing w:after="200" w:line="276" w:lineRule="auto"/></w:pPr></w:pPrDefault>"#,
        );
        xml.push_str("</w:docDefaults>");

        for style in &self.styles {
            xml.push_str(&style.to_xml()?);
        }

        xml.push_str("</w:styles>");
        Ok(xml)
    }
}
