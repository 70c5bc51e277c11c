//! Enumerations for Word document elements.
//!
//! Names follow the VBA `Wd*` enumerations.
use std::fmt;

/// Specifies the type of a style.
///
/// Corresponds to the VBA `WdStyleType` enumeration.
///
/// # Examples
///
/// ```rust
/// use voltic_guide::ooxml::docx::enums::WdStyleType;
///
/// let style_type = WdStyleType::Table;
/// assert_eq!(style_type.to_xml(), "table");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum WdStyleType {
    /// Paragraph style. A style without `w:type` is a paragraph style.
    #[default]
    Paragraph = 1,
    /// Character style.
    Character = 2,
    /// Table style.
    Table = 3,
}

impl WdStyleType {
    /// Convert the style type to its XML attribute value.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Character => "character",
            Self::Table => "table",
        }
    }

    /// Parse style type from XML attribute value.
    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "paragraph" => Some(Self::Paragraph),
            "character" => Some(Self::Character),
            "table" => Some(Self::Table),
            _ => None,
        }
    }
}

impl fmt::Display for WdStyleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paragraph => write!(f, "Paragraph"),
            Self::Character => write!(f, "Character"),
            Self::Table => write!(f, "Table"),
        }
    }
}

/// Specifies the kind of break a run carries (`w:br/@w:type`).
///
/// Corresponds to the VBA `WdBreakType` enumeration, restricted to the
/// breaks a run can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WdBreakType {
    /// Line break (`textWrapping`, the default when `w:type` is absent).
    #[default]
    Line,
    /// Page break.
    Page,
    /// Column break.
    Column,
}

impl WdBreakType {
    /// XML attribute value, or `None` for the implied default.
    #[inline]
    pub const fn to_xml(self) -> Option<&'static str> {
        match self {
            Self::Line => None,
            Self::Page => Some("page"),
            Self::Column => Some("column"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_type_round_trip() {
        for style_type in [WdStyleType::Paragraph, WdStyleType::Character, WdStyleType::Table] {
            assert_eq!(WdStyleType::from_xml(style_type.to_xml()), Some(style_type));
        }
        assert_eq!(WdStyleType::from_xml("numbering"), None);
        assert_eq!(WdStyleType::default(), WdStyleType::Paragraph);
    }

    #[test]
    fn test_break_type() {
        assert_eq!(WdBreakType::Page.to_xml(), Some("page"));
        assert_eq!(WdBreakType::Line.to_xml(), None);
    }
}
