//! Document settings (`word/settings.xml`).
use crate::common::Twips;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// Word compatibility mode written to `w:compatSetting` (15 = Word 2013+).
const COMPATIBILITY_MODE: u32 = 15;

/// The subset of document settings the writer emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSettings {
    /// Zoom percentage shown when the document opens
    pub zoom_percent: u32,
    /// Distance between default tab stops
    pub default_tab_stop: Twips,
    /// Show the document with even and odd headers
    pub even_and_odd_headers: bool,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            zoom_percent: 100,
            default_tab_stop: Twips(720),
            even_and_odd_headers: false,
        }
    }
}

impl DocumentSettings {
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<w:settings xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
        );
        write!(xml, r#"<w:zoom w:percent="{}"/>"#, self.zoom_percent)?;
        write!(xml, r#"<w:defaultTabStop w:val="{}"/>"#, self.default_tab_stop.0)?;
        if self.even_and_odd_headers {
            xml.push_str("<w:evenAndOddHeaders/>");
        }
        xml.push_str(r#"<w:characterSpacingControl w:val="doNotCompress"/>"#);
        write!(
            xml,
            r#"<w:compat><w:compatSetting w:name="compatibilityMode" w:uri="http://schemas.microsoft.com/office/word" w:val="{}"/></w:compat>"#,
            COMPATIBILITY_MODE
        )?;
        xml.push_str("</w:settings>");
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_xml() {
        let xml = DocumentSettings::default().to_xml().unwrap();
        assert!(xml.contains(r#"<w:zoom w:percent="100"/><w:defaultTabStop w:val="720"/>"#));
        assert!(xml.contains(r#"w:name="compatibilityMode""#));
        assert!(!xml.contains("evenAndOddHeaders"));
    }
}
