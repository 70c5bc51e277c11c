use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Returns true if `s` contains none of the five XML special characters.
#[inline]
fn is_plain(s: &str) -> bool {
    let bytes = s.as_bytes();
    memchr::memchr3(b'&', b'<', b'>', bytes).is_none()
        && memchr::memchr2(b'"', b'\'', bytes).is_none()
}

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use voltic_guide::common::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    if is_plain(s) {
        return s.to_owned();
    }
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(escape_xml("Voltic User Guide"), "Voltic User Guide");
        assert_eq!(
            escape_xml("5 backgrounds × 10 text variants"),
            "5 backgrounds × 10 text variants"
        );
    }

    #[test]
    fn test_escape_all_specials() {
        assert_eq!(
            escape_xml(r#"Don't use "generic" <instructions> & tips"#),
            "Don&apos;t use &quot;generic&quot; &lt;instructions&gt; &amp; tips"
        );
    }
}
