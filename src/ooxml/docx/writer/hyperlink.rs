/// Hyperlink support for DOCX documents.
use crate::common::{RGBColor, escape_xml};
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

use super::run::{MutableRun, UnderlineStyle};

/// A mutable hyperlink in a document.
///
/// The URL is kept on the element; its relationship ID is only assigned when
/// the document is packaged. The display run carries the `Hyperlink`
/// character style plus direct blue colour and single underline.
#[derive(Debug, Clone)]
pub struct MutableHyperlink {
    /// Hyperlink URL
    pub(crate) url: String,
    /// Display run
    pub(crate) run: MutableRun,
    /// Optional tooltip text
    pub(crate) tooltip: Option<String>,
}

impl MutableHyperlink {
    /// Create a new hyperlink.
    pub fn new(url: impl Into<String>, text: &str) -> Self {
        let mut run = MutableRun::new();
        run.set_text(text)
            .style("Hyperlink")
            .color(RGBColor::HYPERLINK)
            .underline(UnderlineStyle::Single);
        Self {
            url: url.into(),
            run,
            tooltip: None,
        }
    }

    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Display text.
    pub fn text(&self) -> String {
        self.run.text()
    }

    /// Set the tooltip text.
    pub fn set_tooltip(&mut self, tooltip: impl Into<String>) -> &mut Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Serialize the hyperlink to XML.
    pub(crate) fn to_xml(&self, xml: &mut String, r_id: &str) -> Result<()> {
        write!(xml, r#"<w:hyperlink r:id="{}""#, escape_xml(r_id))?;
        if let Some(ref tooltip) = self.tooltip {
            write!(xml, r#" w:tooltip="{}""#, escape_xml(tooltip))?;
        }
        xml.push_str(r#" w:history="1">"#);
        self.run.to_xml(xml)?;
        xml.push_str("</w:hyperlink>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyperlink_xml() {
        let link = MutableHyperlink::new("https://status.voltic.app", "status.voltic.app");
        let mut xml = String::new();
        link.to_xml(&mut xml, "rId7").unwrap();

        assert!(xml.starts_with(r#"<w:hyperlink r:id="rId7" w:history="1"><w:r>"#));
        assert!(xml.contains(r#"<w:rStyle w:val="Hyperlink"/>"#));
        assert!(xml.contains(r#"<w:color w:val="0563C1"/>"#));
        assert!(xml.contains(r#"<w:u w:val="single"/>"#));
        assert!(xml.contains("status.voltic.app</w:t>"));
        assert!(xml.ends_with("</w:r></w:hyperlink>"));
    }

    #[test]
    fn test_tooltip() {
        let mut link = MutableHyperlink::new("mailto:support@voltic.app", "support@voltic.app");
        link.set_tooltip("Email \"support\"");
        let mut xml = String::new();
        link.to_xml(&mut xml, "rId1").unwrap();
        assert!(xml.contains(r#"w:tooltip="Email &quot;support&quot;""#));
        assert_eq!(link.text(), "support@voltic.app");
    }
}
