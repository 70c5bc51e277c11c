//! Numbering definitions (`word/numbering.xml`).
//!
//! Two lists are defined: a bullet list and a decimal list. The `ListBullet`
//! and `ListNumber` paragraph styles reference them through their own
//! `w:numPr`, the way Word's default template links list styles. Every
//! paragraph using one numbering instance continues the same sequence.
use crate::common::{Twips, escape_xml};
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// `w:numId` of the bullet list.
pub const BULLET_NUM_ID: u32 = 1;
/// `w:numId` of the decimal list.
pub const DECIMAL_NUM_ID: u32 = 2;

const LEVELS: u32 = 9;
const INDENT_STEP: Twips = Twips(360);
const HANGING: Twips = Twips(360);

/// Number format of a list level (`w:numFmt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberFormat {
    Bullet,
    Decimal,
    LowerLetter,
    LowerRoman,
}

impl NumberFormat {
    fn as_str(self) -> &'static str {
        match self {
            Self::Bullet => "bullet",
            Self::Decimal => "decimal",
            Self::LowerLetter => "lowerLetter",
            Self::LowerRoman => "lowerRoman",
        }
    }
}

/// One abstract numbering definition and the `w:num` instance pointing at it.
struct ListDefinition {
    num_id: u32,
    abstract_id: u32,
}

const DEFINITIONS: [ListDefinition; 2] = [
    ListDefinition {
        num_id: BULLET_NUM_ID,
        abstract_id: 0,
    },
    ListDefinition {
        num_id: DECIMAL_NUM_ID,
        abstract_id: 1,
    },
];

fn level_format(num_id: u32, ilvl: u32) -> (NumberFormat, String) {
    if num_id == BULLET_NUM_ID {
        let glyph = match ilvl % 3 {
            0 => "\u{2022}",
            1 => "o",
            _ => "\u{25AA}",
        };
        return (NumberFormat::Bullet, glyph.to_string());
    }

    let format = match ilvl % 3 {
        0 => NumberFormat::Decimal,
        1 => NumberFormat::LowerLetter,
        _ => NumberFormat::LowerRoman,
    };
    (format, format!("%{}.", ilvl + 1))
}

/// Generate the complete numbering.xml content.
pub fn generate_numbering_xml() -> Result<String> {
    let mut xml = String::with_capacity(8192);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    );

    for def in &DEFINITIONS {
        write!(
            xml,
            r#"<w:abstractNum w:abstractNumId="{}"><w:multiLevelType w:val="hybridMultilevel"/>"#,
            def.abstract_id
        )?;

        for ilvl in 0..LEVELS {
            let (format, text) = level_format(def.num_id, ilvl);
            let left = INDENT_STEP.0 * (ilvl as i32 + 2);
            write!(
                xml,
                r#"<w:lvl w:ilvl="{}"><w:start w:val="1"/><w:numFmt w:val="{}"/><w:lvlText w:val="{}"/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="{}" w:hanging="{}"/></w:pPr>"#,
                ilvl,
                format.as_str(),
                escape_xml(&text),
                left,
                HANGING.0
            )?;
            if format == NumberFormat::Bullet && ilvl % 3 == 1 {
                xml.push_str(
                    r#"<w:rPr><w:rFonts w:ascii="Courier New" w:hAnsi="Courier New" w:cs="Courier New"/></w:rPr>"#,
                );
            }
            xml.push_str("</w:lvl>");
        }

        xml.push_str("</w:abstractNum>");
    }

    for def in &DEFINITIONS {
        write!(
            xml,
            r#"<w:num w:numId="{}"><w:abstractNumId w:val="{}"/></w:num>"#,
            def.num_id, def.abstract_id
        )?;
    }

    xml.push_str("</w:numbering>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering_xml() {
        let xml = generate_numbering_xml().unwrap();
        assert!(xml.contains(r#"<w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>"#));
        assert!(xml.contains(r#"<w:num w:numId="2"><w:abstractNumId w:val="1"/></w:num>"#));
        assert!(xml.contains(r#"<w:numFmt w:val="bullet"/><w:lvlText w:val="•"/>"#));
        assert!(xml.contains(r#"<w:numFmt w:val="decimal"/><w:lvlText w:val="%1."/>"#));
        assert_eq!(xml.matches("<w:lvl ").count(), 18);
    }

    #[test]
    fn test_abstract_definitions_precede_instances() {
        let xml = generate_numbering_xml().unwrap();
        let last_abstract = xml.rfind("</w:abstractNum>").unwrap();
        let first_num = xml.find("<w:num ").unwrap();
        assert!(last_abstract < first_num);
    }
}
