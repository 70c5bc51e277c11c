/// Relationship ID mapper for tracking relationships during document generation.
///
/// Relationships are created before `document.xml` is serialized, so the XML
/// is written with final IDs instead of placeholders.
use crate::ooxml::error::{OoxmlError, Result};
use std::collections::HashMap;

/// Maps document elements to their relationship IDs.
///
/// Hyperlinks are keyed by their index in document order (body paragraphs and
/// table cells alike).
#[derive(Debug, Default)]
pub struct RelationshipMapper {
    /// Maps hyperlink index to relationship ID
    hyperlink_ids: HashMap<usize, String>,
}

impl RelationshipMapper {
    /// Create a new empty relationship mapper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hyperlink relationship mapping.
    pub fn add_hyperlink(&mut self, index: usize, rel_id: String) {
        self.hyperlink_ids.insert(index, rel_id);
    }

    /// Get the relationship ID for a hyperlink by index.
    pub fn get_hyperlink_id(&self, index: usize) -> Option<&str> {
        self.hyperlink_ids.get(&index).map(|s| s.as_str())
    }

    /// Like [`get_hyperlink_id`](Self::get_hyperlink_id), but a missing entry
    /// is an error.
    pub fn require_hyperlink_id(&self, index: usize) -> Result<&str> {
        self.get_hyperlink_id(index).ok_or_else(|| {
            OoxmlError::InvalidRelationship(format!("no relationship for hyperlink #{}", index))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let mut mapper = RelationshipMapper::new();
        mapper.add_hyperlink(0, "rId4".to_string());
        assert_eq!(mapper.get_hyperlink_id(0), Some("rId4"));
        assert!(mapper.require_hyperlink_id(1).is_err());
    }
}
