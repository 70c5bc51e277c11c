//! Open Packaging Conventions (OPC) support for writing packages.
//!
//! This module covers the pieces a generated Office document needs:
//!
//! - Part naming (`PackURI`)
//! - Relationships between parts and to external targets
//! - Content type mapping
//! - ZIP-based physical packaging
pub mod constants;
pub mod package;
pub mod packuri;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::{OpcPackage, Part};
pub use packuri::PackURI;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
