/// Relationship-related objects for OPC packages.
///
/// A part's relationships are serialized to its `.rels` part. Internal
/// relationships point at other parts by relative reference; external ones
/// (hyperlinks) carry an absolute URL and `TargetMode="External"`.
use crate::common::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{namespace, target_mode};
use std::fmt::Write as FmtWrite;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,
    /// Relationship type URI
    reltype: String,
    /// Target reference - either a relative part reference or an external URL
    target_ref: String,
    /// Whether this is an external relationship
    is_external: bool,
}

impl Relationship {
    pub fn new(r_id: String, reltype: String, target_ref: String, is_external: bool) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
            is_external,
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        self.is_external
    }
}

/// Collection of relationships from a single source part, in insertion order.
#[derive(Debug, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of relationships in the collection.
    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    /// Get a relationship by its ID.
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// Get or add an internal relationship to a target part, returning its rId.
    pub fn get_or_add(&mut self, reltype: &str, target_ref: &str) -> String {
        if let Some(rel) = self
            .rels
            .iter()
            .find(|rel| !rel.is_external && rel.reltype == reltype && rel.target_ref == target_ref)
        {
            return rel.r_id.clone();
        }

        let r_id = self.next_r_id();
        self.rels.push(Relationship::new(
            r_id.clone(),
            reltype.to_string(),
            target_ref.to_string(),
            false,
        ));
        r_id
    }

    /// Get or add an external relationship, returning its rId.
    ///
    /// Two hyperlinks to the same URL share one relationship.
    pub fn get_or_add_ext_rel(&mut self, reltype: &str, target_ref: &str) -> Result<String> {
        validate_external_target(target_ref)?;

        if let Some(rel) = self
            .rels
            .iter()
            .find(|rel| rel.is_external && rel.reltype == reltype && rel.target_ref == target_ref)
        {
            return Ok(rel.r_id.clone());
        }

        let r_id = self.next_r_id();
        self.rels.push(Relationship::new(
            r_id.clone(),
            reltype.to_string(),
            target_ref.to_string(),
            true,
        ));
        Ok(r_id)
    }

    /// Generate the next free ID in the "rId1", "rId2", ... sequence.
    fn next_r_id(&self) -> String {
        let mut used: Vec<u32> = self
            .rels
            .iter()
            .filter_map(|rel| rel.r_id.strip_prefix("rId")?.parse().ok())
            .collect();
        used.sort_unstable();

        let mut next_num = 1u32;
        for num in used {
            if num == next_num {
                next_num += 1;
            } else if num > next_num {
                break;
            }
        }

        format!("rId{}", next_num)
    }

    /// Serialize the collection as a `.rels` part.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(xml, r#"<Relationships xmlns="{}">"#, namespace::RELATIONSHIPS)?;

        for rel in &self.rels {
            write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}""#,
                rel.r_id,
                rel.reltype,
                escape_xml(&rel.target_ref)
            )?;
            if rel.is_external {
                write!(xml, r#" TargetMode="{}""#, target_mode::EXTERNAL)?;
            }
            xml.push_str("/>");
        }

        xml.push_str("</Relationships>");
        Ok(xml)
    }
}

/// Reject targets that cannot be stored as an external relationship.
fn validate_external_target(target: &str) -> Result<()> {
    if target.is_empty() {
        return Err(OoxmlError::InvalidRelationship(
            "external target must not be empty".to_string(),
        ));
    }
    if let Some(c) = target.chars().find(|c| c.is_whitespace() || c.is_control()) {
        return Err(OoxmlError::InvalidRelationship(format!(
            "external target '{}' contains invalid character {:?}",
            target, c
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_sequential_ids() {
        let mut rels = Relationships::new();
        assert_eq!(rels.get_or_add(rt::STYLES, "styles.xml"), "rId1");
        assert_eq!(rels.get_or_add(rt::NUMBERING, "numbering.xml"), "rId2");
        assert_eq!(rels.get_or_add(rt::STYLES, "styles.xml"), "rId1");
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_external_relationships_are_shared_per_url() {
        let mut rels = Relationships::new();
        let a = rels
            .get_or_add_ext_rel(rt::HYPERLINK, "mailto:support@voltic.app")
            .unwrap();
        let b = rels
            .get_or_add_ext_rel(rt::HYPERLINK, "https://status.voltic.app")
            .unwrap();
        let c = rels
            .get_or_add_ext_rel(rt::HYPERLINK, "mailto:support@voltic.app")
            .unwrap();
        assert_eq!(a, c);
        assert_ne!(a, b);
        assert!(rels.get(&b).unwrap().is_external());
    }

    #[test]
    fn test_invalid_external_target() {
        let mut rels = Relationships::new();
        assert!(rels.get_or_add_ext_rel(rt::HYPERLINK, "").is_err());
        assert!(
            rels.get_or_add_ext_rel(rt::HYPERLINK, "https://example.com/a b")
                .is_err()
        );
        assert!(rels.is_empty());
    }

    #[test]
    fn test_rels_xml() {
        let mut rels = Relationships::new();
        rels.get_or_add(rt::STYLES, "styles.xml");
        rels.get_or_add_ext_rel(rt::HYPERLINK, "https://example.com/?a=1&b=2")
            .unwrap();

        let xml = rels.to_xml().unwrap();
        assert!(xml.contains(r#"Id="rId1""#));
        assert!(xml.contains(r#"Target="styles.xml"/>"#));
        assert!(
            xml.contains(r#"Target="https://example.com/?a=1&amp;b=2" TargetMode="External"/>"#)
        );
    }
}
