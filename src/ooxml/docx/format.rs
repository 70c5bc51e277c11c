//! Formatting value types shared by the writer and the reader.

/// Paragraph alignment options (`w:jc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphAlignment {
    Left,
    Center,
    Right,
    Justify,
}

impl ParagraphAlignment {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "both",
        }
    }
}

/// Underline styles for text (`w:u`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnderlineStyle {
    Single,
    Double,
    Thick,
    Dotted,
    Dashed,
    Wave,
}

impl UnderlineStyle {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Thick => "thick",
            Self::Dotted => "dotted",
            Self::Dashed => "dash",
            Self::Wave => "wave",
        }
    }
}

/// Border line styles for tables and table styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBorderStyle {
    None,
    Single,
    Double,
    Dotted,
}

impl TableBorderStyle {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::None => "nil",
            Self::Single => "single",
            Self::Double => "double",
            Self::Dotted => "dotted",
        }
    }
}
