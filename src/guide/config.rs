use std::path::{Path, PathBuf};

/// File name the guide is written to when no output path is given.
pub const DEFAULT_OUTPUT: &str = "VOLTIC_USER_GUIDE_FORMATTED.docx";

pub const DEFAULT_VERSION_LABEL: &str = "Version 1.0 | February 2026";

pub const DEFAULT_AUTHOR: &str = "Voltic";

/// Settings for one run of the guide builder.
///
/// # Example
///
/// ```rust
/// use voltic_guide::guide::GuideConfig;
///
/// let config = GuideConfig::default()
///     .with_output("out/guide.docx")
///     .with_author("Docs Team");
/// assert_eq!(config.author(), "Docs Team");
/// assert_eq!(config.version_label(), "Version 1.0 | February 2026");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideConfig {
    output: PathBuf,
    version_label: String,
    author: String,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            version_label: DEFAULT_VERSION_LABEL.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

impl GuideConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Label shown on the cover page and in the closing line.
    pub fn with_version_label(mut self, label: impl Into<String>) -> Self {
        self.version_label = label.into();
        self
    }

    /// Written to the `dc:creator` core property.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn version_label(&self) -> &str {
        &self.version_label
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GuideConfig::new();
        assert_eq!(config.output(), Path::new(DEFAULT_OUTPUT));
        assert_eq!(config.version_label(), DEFAULT_VERSION_LABEL);
        assert_eq!(config.author(), DEFAULT_AUTHOR);
    }

    #[test]
    fn test_builder_overrides() {
        let config = GuideConfig::new()
            .with_output("/tmp/x.docx")
            .with_version_label("Version 2.0");
        assert_eq!(config.output(), Path::new("/tmp/x.docx"));
        assert_eq!(config.version_label(), "Version 2.0");
        assert_eq!(config.author(), DEFAULT_AUTHOR);
    }
}
