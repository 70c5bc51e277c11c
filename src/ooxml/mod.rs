//! Office Open XML (OOXML) writing and read-back.
//!
//! The module is organized in layers:
//!
//! 1. **OPC layer** (`opc`): parts, relationships, content types and the ZIP container
//! 2. **Shared parts** (`common`): core and extended document properties
//! 3. **WordprocessingML** (`docx`): the document model, its XML serialization
//!    and a small text extractor used to check generated packages
//!
//! # Example
//!
//! ```rust,no_run
//! use voltic_guide::ooxml::docx::MutableDocument;
//!
//! let mut doc = MutableDocument::new();
//! doc.properties_mut().title = Some("Release notes".to_string());
//! doc.add_heading("Release notes", 0)?;
//! let bytes = doc.to_bytes()?;
//! assert!(!bytes.is_empty());
//! # Ok::<(), voltic_guide::ooxml::OoxmlError>(())
//! ```

pub mod common;
pub mod docx;
pub mod error;
pub mod opc;

pub use error::{OoxmlError, Result};
pub use opc::{OpcPackage, PackURI};
