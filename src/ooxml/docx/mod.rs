//! Word document (`.docx`) support.
//!
//! [`MutableDocument`] builds a WordprocessingML package from paragraphs,
//! tables and styles; [`DocumentText`] reads the text of a saved package back.
//!
//! # Example
//!
//! ```rust,no_run
//! use voltic_guide::ooxml::docx::{DocumentText, MutableDocument};
//!
//! let mut doc = MutableDocument::new();
//! doc.add_heading("Introduction", 1)?;
//! doc.add_paragraph_with_text("Hello from Voltic.");
//! doc.save("hello.docx")?;
//!
//! let text = DocumentText::from_path("hello.docx")?;
//! assert!(text.contains("Hello from Voltic."));
//! # Ok::<(), voltic_guide::ooxml::OoxmlError>(())
//! ```

pub mod enums;
pub mod format;
pub mod reader;
pub mod writer;

pub use enums::{WdBreakType, WdStyleType};
pub use format::{ParagraphAlignment, TableBorderStyle, UnderlineStyle};
pub use reader::{DocumentText, HyperlinkText};
pub use writer::{
    ListType, MutableCell, MutableDocument, MutableHyperlink, MutableParagraph, MutableRow,
    MutableRun, MutableStyle, MutableTable, StyleSheet,
};
