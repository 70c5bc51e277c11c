//! voltic-guide - builds the formatted Voltic user guide as a Word document
//!
//! The crate has two layers:
//!
//! - **`ooxml`**: a small Office Open XML writer (OPC packaging, relationships,
//!   styles, numbering, paragraphs, runs, tables and hyperlinks) plus a text
//!   extractor for reading a saved `.docx` back
//! - **`guide`**: the fixed content of the Voltic user guide and the builder
//!   that lays it out section by section
//!
//! # Example - Writing the guide
//!
//! ```no_run
//! use voltic_guide::guide::{GuideConfig, write_user_guide};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GuideConfig::default().with_output("VOLTIC_USER_GUIDE_FORMATTED.docx");
//! let path = write_user_guide(&config)?;
//! println!("wrote {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Building a custom document
//!
//! ```
//! use voltic_guide::common::RGBColor;
//! use voltic_guide::ooxml::docx::MutableDocument;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = MutableDocument::new();
//! doc.add_heading("Quick Start", 1)?;
//! let para = doc.add_paragraph();
//! para.add_run_with_text("Important: ").bold(true);
//! para.add_run_with_text("read this first.").color(RGBColor::new(0x44, 0x44, 0x44));
//!
//! let table = doc.add_table(1, 2);
//! table.set_style("LightGridAccent1");
//!
//! let bytes = doc.to_bytes()?;
//! assert!(bytes.starts_with(b"PK"));
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod guide;
pub mod ooxml;
