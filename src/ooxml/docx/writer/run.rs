/// Run types and implementation for DOCX documents.
use crate::common::{HalfPoints, RGBColor, escape_xml};
use crate::ooxml::docx::enums::WdBreakType;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

// Import shared format types
pub use super::super::format::UnderlineStyle;

/// One piece of run content, written in order.
#[derive(Debug, Clone, PartialEq)]
pub enum RunContent {
    /// Text; `\n` and `\r` become `<w:br/>`, `\t` becomes `<w:tab/>`
    Text(String),
    /// Explicit break
    Break(WdBreakType),
}

/// A mutable run.
///
/// Runs contain text and character formatting.
#[derive(Debug, Clone, Default)]
pub struct MutableRun {
    /// Run content
    pub(crate) content: Vec<RunContent>,
    /// Run properties
    pub(crate) properties: RunProperties,
}

impl MutableRun {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Replace the run content with `text`.
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.content.clear();
        self.content.push(RunContent::Text(text.to_string()));
        self
    }

    /// Append text after the current content.
    pub fn add_text(&mut self, text: &str) -> &mut Self {
        self.content.push(RunContent::Text(text.to_string()));
        self
    }

    /// Append a break.
    pub fn add_break(&mut self, break_type: WdBreakType) -> &mut Self {
        self.content.push(RunContent::Break(break_type));
        self
    }

    /// Append a page break.
    pub fn add_page_break(&mut self) -> &mut Self {
        self.add_break(WdBreakType::Page)
    }

    /// Text of the run as a reader sees it: line breaks as `\n`, page and
    /// column breaks dropped.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for item in &self.content {
            match item {
                RunContent::Text(s) => text.push_str(s),
                RunContent::Break(WdBreakType::Line) => text.push('\n'),
                RunContent::Break(_) => {},
            }
        }
        text
    }

    /// Make the text bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.properties.bold = Some(bold);
        self
    }

    /// Make the text italic.
    pub fn italic(&mut self, italic: bool) -> &mut Self {
        self.properties.italic = Some(italic);
        self
    }

    /// Set underline style.
    pub fn underline(&mut self, style: UnderlineStyle) -> &mut Self {
        self.properties.underline = Some(style);
        self
    }

    /// Set font size in points.
    pub fn font_size_pt(&mut self, pt: f32) -> &mut Self {
        self.properties.font_size = Some(HalfPoints::from_pt(pt));
        self
    }

    /// Set font name.
    pub fn font_name(&mut self, name: &str) -> &mut Self {
        self.properties.font_name = Some(name.to_string());
        self
    }

    /// Set text color.
    pub fn color(&mut self, color: RGBColor) -> &mut Self {
        self.properties.color = Some(color);
        self
    }

    /// Apply a character style by ID.
    pub fn style(&mut self, style_id: &str) -> &mut Self {
        self.properties.style = Some(style_id.to_string());
        self
    }

    #[inline]
    pub fn properties(&self) -> &RunProperties {
        &self.properties
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:r>");
        self.properties.write_xml(xml)?;

        for item in &self.content {
            match item {
                RunContent::Text(text) => write_text(xml, text),
                RunContent::Break(break_type) => match break_type.to_xml() {
                    Some(kind) => write!(xml, r#"<w:br w:type="{}"/>"#, kind)?,
                    None => xml.push_str("<w:br/>"),
                },
            }
        }

        xml.push_str("</w:r>");
        Ok(())
    }
}

/// Write text, turning line feeds and tabs into their run-level elements.
fn write_text(xml: &mut String, text: &str) {
    if memchr::memchr3(b'\n', b'\r', b'\t', text.as_bytes()).is_none() {
        push_t(xml, text);
        return;
    }

    let mut start = 0;
    for (i, c) in text.char_indices() {
        let element = match c {
            '\n' | '\r' => "<w:br/>",
            '\t' => "<w:tab/>",
            _ => continue,
        };
        push_t(xml, &text[start..i]);
        xml.push_str(element);
        start = i + c.len_utf8();
    }
    push_t(xml, &text[start..]);
}

fn push_t(xml: &mut String, segment: &str) {
    if segment.is_empty() {
        return;
    }
    xml.push_str(r#"<w:t xml:space="preserve">"#);
    xml.push_str(&escape_xml(segment));
    xml.push_str("</w:t>");
}

/// Character formatting shared by runs and styles (`w:rPr`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunProperties {
    pub style: Option<String>,
    pub font_name: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub color: Option<RGBColor>,
    pub font_size: Option<HalfPoints>,
    pub underline: Option<UnderlineStyle>,
}

impl RunProperties {
    pub fn has_properties(&self) -> bool {
        self.style.is_some()
            || self.font_name.is_some()
            || self.bold.is_some()
            || self.italic.is_some()
            || self.color.is_some()
            || self.font_size.is_some()
            || self.underline.is_some()
    }

    /// Write `<w:rPr>` in schema order; nothing when no property is set.
    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        if !self.has_properties() {
            return Ok(());
        }

        xml.push_str("<w:rPr>");

        if let Some(ref style) = self.style {
            write!(xml, r#"<w:rStyle w:val="{}"/>"#, escape_xml(style))?;
        }

        if let Some(ref font_name) = self.font_name {
            let font_name = escape_xml(font_name);
            write!(
                xml,
                r#"<w:rFonts w:ascii="{}" w:hAnsi="{}" w:cs="{}"/>"#,
                font_name, font_name, font_name
            )?;
        }

        write_toggle(xml, "b", self.bold);
        write_toggle(xml, "i", self.italic);

        if let Some(color) = self.color {
            write!(xml, r#"<w:color w:val="{}"/>"#, color.to_hex())?;
        }

        if let Some(size) = self.font_size {
            write!(xml, r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#, size.0)?;
        }

        if let Some(underline) = self.underline {
            write!(xml, r#"<w:u w:val="{}"/>"#, underline.as_str())?;
        }

        xml.push_str("</w:rPr>");
        Ok(())
    }
}

/// On/off properties: `<w:b/>` when set, `<w:b w:val="0"/>` when cleared.
fn write_toggle(xml: &mut String, name: &str, value: Option<bool>) {
    match value {
        Some(true) => {
            xml.push_str("<w:");
            xml.push_str(name);
            xml.push_str("/>");
        },
        Some(false) => {
            xml.push_str("<w:");
            xml.push_str(name);
            xml.push_str(r#" w:val="0"/>"#);
        },
        None => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_xml(run: &MutableRun) -> String {
        let mut xml = String::new();
        run.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_plain_run() {
        let mut run = MutableRun::new();
        run.set_text("Hello");
        assert_eq!(
            run_xml(&run),
            r#"<w:r><w:t xml:space="preserve">Hello</w:t></w:r>"#
        );
    }

    #[test]
    fn test_formatting_order() {
        let mut run = MutableRun::new();
        run.set_text("VOLTIC")
            .bold(true)
            .font_size_pt(44.0)
            .color(RGBColor::new(0, 51, 102))
            .font_name("Calibri");

        let xml = run_xml(&run);
        assert!(xml.contains(
            r#"<w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/><w:b/><w:color w:val="003366"/><w:sz w:val="88"/><w:szCs w:val="88"/></w:rPr>"#
        ));
    }

    #[test]
    fn test_cleared_toggle() {
        let mut run = MutableRun::new();
        run.set_text("x").italic(false);
        assert!(run_xml(&run).contains(r#"<w:i w:val="0"/>"#));
    }

    #[test]
    fn test_breaks_and_tabs() {
        let mut run = MutableRun::new();
        run.set_text("Title\n   desc\tend");
        let xml = run_xml(&run);
        assert!(xml.contains(
            r#"<w:t xml:space="preserve">Title</w:t><w:br/><w:t xml:space="preserve">   desc</w:t><w:tab/><w:t xml:space="preserve">end</w:t>"#
        ));
    }

    #[test]
    fn test_only_line_breaks() {
        let mut run = MutableRun::new();
        run.set_text("\n\n\n");
        assert_eq!(run_xml(&run), "<w:r><w:br/><w:br/><w:br/></w:r>");
    }

    #[test]
    fn test_page_break() {
        let mut run = MutableRun::new();
        run.add_page_break();
        assert_eq!(run_xml(&run), r#"<w:r><w:br w:type="page"/></w:r>"#);
        assert_eq!(run.text(), "");
    }

    #[test]
    fn test_escaping() {
        let mut run = MutableRun::new();
        run.set_text("Ads & <Creatives>");
        assert!(run_xml(&run).contains("Ads &amp; &lt;Creatives&gt;"));
    }

    #[test]
    fn test_text_accessor() {
        let mut run = MutableRun::new();
        run.set_text("a").add_break(WdBreakType::Line).add_text("b");
        assert_eq!(run.text(), "a\nb");
    }
}
