//! The Voltic user guide.
//!
//! [`build_user_guide`] assembles the whole document in memory, section by
//! section, and [`write_user_guide`] saves it to the configured path.
//!
//! # Example
//!
//! ```rust,no_run
//! use voltic_guide::guide::{GuideConfig, status_lines, write_user_guide};
//!
//! let config = GuideConfig::default().with_output("guide.docx");
//! let path = write_user_guide(&config)?;
//! for line in status_lines(&path) {
//!     println!("{}", line);
//! }
//! # Ok::<(), voltic_guide::ooxml::OoxmlError>(())
//! ```

mod config;
pub mod content;
mod helpers;
mod sections;

pub use config::{DEFAULT_AUTHOR, DEFAULT_OUTPUT, DEFAULT_VERSION_LABEL, GuideConfig};
pub use helpers::add_hyperlink;

use crate::common::RGBColor;
use crate::ooxml::common::DocumentProperties;
use crate::ooxml::docx::writer::MutableDocument;
use crate::ooxml::error::{OoxmlError, Result};
use helpers::add_page_break;
use log::debug;
use std::path::{Path, PathBuf};

const HEADING_BLUE: RGBColor = RGBColor::new(0, 112, 192);

/// `(style id, size in points, color)` of the overridden heading styles.
const STYLE_OVERRIDES: &[(&str, f32, RGBColor)] = &[
    ("Title", 28.0, sections::cover::NAVY),
    ("Heading1", 20.0, HEADING_BLUE),
    ("Heading2", 16.0, HEADING_BLUE),
    ("Heading3", 14.0, sections::cover::CHARCOAL),
];

/// Build the complete guide document.
pub fn build_user_guide(config: &GuideConfig) -> Result<MutableDocument> {
    let mut doc = MutableDocument::new();

    *doc.properties_mut() = DocumentProperties::default()
        .title("Voltic User Guide")
        .subject("Complete Documentation for Meta Advertising Intelligence Platform")
        .keywords("Voltic, Meta Ads, Facebook Ads, Advertising, AI, Documentation")
        .comments("Comprehensive user guide for the Voltic platform")
        .creator(config.author())
        .last_modified_by(config.author());

    for &(style_id, size, color) in STYLE_OVERRIDES {
        let style = doc.styles_mut().get_mut(style_id).ok_or_else(|| {
            OoxmlError::InvalidFormat(format!("built-in style '{}' is missing", style_id))
        })?;
        style
            .set_font_name("Calibri")
            .set_font_size_pt(size)
            .set_bold(true)
            .set_color(color);
    }

    debug!("emitting cover page");
    sections::cover::emit(&mut doc, config);
    add_page_break(&mut doc);

    debug!("emitting table of contents");
    sections::contents::emit(&mut doc)?;
    add_page_break(&mut doc);

    debug!("emitting section: Introduction");
    sections::introduction::emit(&mut doc)?;
    add_page_break(&mut doc);

    debug!("emitting section: Getting Started");
    sections::getting_started::emit(&mut doc)?;
    add_page_break(&mut doc);

    debug!("emitting section: Core Features");
    sections::core_features::emit(&mut doc)?;
    add_page_break(&mut doc);

    debug!("emitting section: AI-Powered Variations");
    sections::variations::emit(&mut doc)?;
    add_page_break(&mut doc);

    debug!("emitting section: Ad Generator");
    sections::ad_generator::emit(&mut doc)?;
    add_page_break(&mut doc);

    debug!("emitting section: Gemini Image Editing");
    sections::gemini::emit(&mut doc)?;
    add_page_break(&mut doc);

    debug!("emitting section: Discover");
    sections::discover::emit(&mut doc)?;
    add_page_break(&mut doc);

    debug!("emitting section: Best Practices");
    sections::best_practices::emit(&mut doc)?;
    add_page_break(&mut doc);

    debug!("emitting section: Troubleshooting");
    sections::troubleshooting::emit(&mut doc)?;
    add_page_break(&mut doc);

    debug!("emitting section: Support & Contact");
    sections::support::emit(&mut doc, config)?;

    debug!(
        "guide built: {} paragraphs, {} tables, {} hyperlinks",
        doc.paragraph_count(),
        doc.table_count(),
        doc.hyperlink_count()
    );
    Ok(doc)
}

/// Build the guide and save it to `config.output()`.
///
/// Returns the path written.
pub fn write_user_guide(config: &GuideConfig) -> Result<PathBuf> {
    let doc = build_user_guide(config)?;
    let path = config.output().to_path_buf();
    doc.save(&path)?;
    Ok(path)
}

/// Lines printed after a successful save.
pub fn status_lines(path: &Path) -> [String; 4] {
    [
        format!("✅ Document created successfully: {}", path.display()),
        "📄 Total sections: 20+".to_string(),
        "📊 Includes: Tables, styled headings, bullet points, numbered lists".to_string(),
        "🎨 Professional formatting with colors and emphasis".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_sets_properties() {
        let doc = build_user_guide(&GuideConfig::default()).unwrap();
        let props = doc.properties();
        assert_eq!(props.title.as_deref(), Some("Voltic User Guide"));
        assert_eq!(props.creator.as_deref(), Some(DEFAULT_AUTHOR));
        assert_eq!(
            props.comments.as_deref(),
            Some("Comprehensive user guide for the Voltic platform")
        );
    }

    #[test]
    fn test_style_overrides() {
        let doc = build_user_guide(&GuideConfig::default()).unwrap();
        let title = doc.styles().get("Title").unwrap().font();
        assert_eq!(title.font_name.as_deref(), Some("Calibri"));
        assert_eq!(title.bold, Some(true));
        assert_eq!(title.color, Some(RGBColor::new(0x00, 0x33, 0x66)));

        let h3 = doc.styles().get("Heading3").unwrap().font();
        assert_eq!(h3.font_size.map(|s| s.0), Some(28));
        assert_eq!(h3.color, Some(RGBColor::new(0x44, 0x44, 0x44)));
    }

    #[test]
    fn test_tables_and_links() {
        let doc = build_user_guide(&GuideConfig::default()).unwrap();
        // credits, channels, styling controls, creative options
        assert_eq!(doc.table_count(), 4);
        assert_eq!(doc.hyperlink_count(), 2);
    }

    #[test]
    fn test_version_label_flows_through() {
        let config = GuideConfig::default().with_version_label("Version 9.9");
        let text = build_user_guide(&config).unwrap().text();
        assert!(text.contains("Version 9.9\n"));
        assert!(text.contains("Version 9.9 | © Voltic Platform"));
        assert!(!text.contains(DEFAULT_VERSION_LABEL));
    }

    #[test]
    fn test_status_lines() {
        let lines = status_lines(Path::new("out.docx"));
        assert_eq!(lines[0], "✅ Document created successfully: out.docx");
        assert_eq!(lines[3], "🎨 Professional formatting with colors and emphasis");
    }
}
