//! Mutable document writer components for DOCX.
//!
//! This module provides the writer API for creating Word documents.

pub mod doc;
pub mod hyperlink;
pub mod numbering;
pub mod paragraph;
pub(crate) mod relmap;
pub mod run;
pub mod settings;
pub mod style;
pub mod table;

// Re-export main document type
pub use doc::MutableDocument;

// Re-export hyperlink types
pub use hyperlink::MutableHyperlink;

// Re-export paragraph types
pub use paragraph::{ListType, MutableParagraph, ParagraphAlignment};

// Re-export run types
pub use run::{MutableRun, RunContent, RunProperties, UnderlineStyle};

// Re-export table types
pub use table::{MutableCell, MutableRow, MutableTable, TableBorder, TableBorderStyle, TableBorders};

// Re-export style types
pub use style::{ConditionalFormat, MutableStyle, StyleSheet, TableRegion};

pub use settings::DocumentSettings;
