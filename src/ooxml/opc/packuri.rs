/// Provides the PackURI value type for naming parts inside an OPC package.
///
/// PackURIs always begin with a forward slash and use forward slashes as path
/// separators. The ZIP member name is the URI without its leading slash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackURI {
    /// The full pack URI string (e.g., "/word/document.xml")
    uri: String,
}

/// The package pseudo-partname.
pub const PACKAGE_URI: &str = "/";

/// The content types stream.
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";

impl PackURI {
    /// Create a new PackURI; the string must begin with a forward slash.
    pub fn new<S: Into<String>>(uri: S) -> Result<Self, String> {
        let uri = uri.into();
        if !uri.starts_with('/') {
            return Err(format!("PackURI must begin with slash, got '{}'", uri));
        }
        Ok(PackURI { uri })
    }

    /// Get the base URI (directory portion) of this PackURI.
    ///
    /// For example, "/word" for "/word/document.xml" and "/" for "/[Content_Types].xml".
    pub fn base_uri(&self) -> &str {
        match self.uri.rfind('/') {
            Some(0) | None => "/",
            Some(pos) => &self.uri[..pos],
        }
    }

    /// Get the filename portion, e.g. "document.xml".
    pub fn filename(&self) -> &str {
        match self.uri.rfind('/') {
            Some(pos) => &self.uri[pos + 1..],
            None => &self.uri,
        }
    }

    /// Get the extension without the dot, e.g. "xml".
    pub fn ext(&self) -> &str {
        let filename = self.filename();
        match filename.rfind('.') {
            Some(pos) => &filename[pos + 1..],
            None => "",
        }
    }

    /// Get the membername (URI with leading slash stripped).
    ///
    /// Returns an empty string for the package pseudo-partname "/".
    pub fn membername(&self) -> &str {
        &self.uri[1..]
    }

    /// Get the reference to this part relative to `base_uri`, the form used in
    /// a `Target` attribute when both parts share a directory.
    ///
    /// For example "styles.xml" for "/word/styles.xml" from base "/word".
    pub fn relative_ref(&self, base_uri: &str) -> String {
        if base_uri == "/" {
            return self.membername().to_string();
        }

        let from_parts: Vec<&str> = base_uri.split('/').filter(|s| !s.is_empty()).collect();
        let to_parts: Vec<&str> = self.uri.split('/').filter(|s| !s.is_empty()).collect();

        let common = from_parts
            .iter()
            .zip(to_parts.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let mut result = "../".repeat(from_parts.len() - common);
        result.push_str(&to_parts[common..].join("/"));
        result
    }

    /// Get the PackURI of the .rels part corresponding to this PackURI.
    ///
    /// For example, "/word/_rels/document.xml.rels" for "/word/document.xml",
    /// and "/_rels/.rels" for the package itself.
    pub fn rels_uri(&self) -> Result<PackURI, String> {
        let base_uri = self.base_uri();
        let rels_filename = format!("{}.rels", self.filename());
        let rels_uri_str = if base_uri == "/" {
            format!("/_rels/{}", rels_filename)
        } else {
            format!("{}/_rels/{}", base_uri, rels_filename)
        };

        Self::new(rels_uri_str)
    }

    /// Get the full URI string.
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

impl std::fmt::Display for PackURI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_leading_slash() {
        assert!(PackURI::new("word/document.xml").is_err());
    }

    #[test]
    fn test_components() {
        let uri = PackURI::new("/word/document.xml").unwrap();
        assert_eq!(uri.base_uri(), "/word");
        assert_eq!(uri.filename(), "document.xml");
        assert_eq!(uri.ext(), "xml");
        assert_eq!(uri.membername(), "word/document.xml");
    }

    #[test]
    fn test_rels_uri() {
        let doc = PackURI::new("/word/document.xml").unwrap();
        assert_eq!(doc.rels_uri().unwrap().as_str(), "/word/_rels/document.xml.rels");

        let pkg = PackURI::new(PACKAGE_URI).unwrap();
        assert_eq!(pkg.rels_uri().unwrap().as_str(), "/_rels/.rels");
    }

    #[test]
    fn test_relative_ref() {
        let styles = PackURI::new("/word/styles.xml").unwrap();
        assert_eq!(styles.relative_ref("/word"), "styles.xml");
        assert_eq!(styles.relative_ref("/"), "word/styles.xml");

        let core = PackURI::new("/docProps/core.xml").unwrap();
        assert_eq!(core.relative_ref("/word"), "../docProps/core.xml");
    }
}
