//! In-memory OPC package assembled before it is written out.

use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

/// A single part of an OPC package: its name, content type, serialized bytes
/// and outgoing relationships.
#[derive(Debug)]
pub struct Part {
    partname: PackURI,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    pub fn new(partname: PackURI, content_type: impl Into<String>, blob: Vec<u8>) -> Self {
        Self {
            partname,
            content_type: content_type.into(),
            blob,
            rels: Relationships::new(),
        }
    }

    /// Attach the relationships this part owns.
    pub fn with_rels(mut self, rels: Relationships) -> Self {
        self.rels = rels;
        self
    }

    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }
}

/// An OPC package: package-level relationships plus its parts in write order.
#[derive(Debug, Default)]
pub struct OpcPackage {
    rels: Relationships,
    parts: Vec<Part>,
}

impl OpcPackage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part and return a reference to it.
    pub fn add_part(&mut self, part: Part) -> &Part {
        self.parts.push(part);
        &self.parts[self.parts.len() - 1]
    }

    /// Relate the package itself to one of its parts (e.g. the main document).
    pub fn relate_to(&mut self, partname: &PackURI, reltype: &str) -> String {
        self.rels
            .get_or_add(reltype, &partname.relative_ref(super::packuri::PACKAGE_URI))
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Total number of bytes across all part blobs (before compression).
    pub fn content_len(&self) -> usize {
        self.parts.iter().map(|p| p.blob.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};

    #[test]
    fn test_relate_to_uses_member_name() {
        let mut pkg = OpcPackage::new();
        let uri = PackURI::new("/word/document.xml").unwrap();
        pkg.add_part(Part::new(uri.clone(), ct::WML_DOCUMENT_MAIN, b"<w:document/>".to_vec()));
        let r_id = pkg.relate_to(&uri, rt::OFFICE_DOCUMENT);

        let rel = pkg.rels().get(&r_id).unwrap();
        assert_eq!(rel.target_ref(), "word/document.xml");
        assert_eq!(pkg.part_count(), 1);
        assert_eq!(pkg.content_len(), 13);
    }
}
