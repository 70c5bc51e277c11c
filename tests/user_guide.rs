use std::io::Read;

use proptest::prelude::*;
use tempfile::TempDir;
use voltic_guide::guide::content::{
    ASSET_VARIATION_STEPS, AUDIENCES, BACKGROUND_STEP, BEST_PRACTICES, CAPABILITIES, CHANNELS,
    CREATE_BOARD_STEPS, CREDIT_COSTS, CREDIT_SOURCES, GEMINI_OPTIONS, GEMINI_PIPELINE,
    GENERATOR_BEST_FOR, GENERATOR_INPUTS, GENERATOR_NOT_FOR, GENERATOR_TIPS, GUIDELINE_STEP,
    ISSUES, META_STEPS, NAVIGATION_ITEMS, PREVIEW_STEP, REVIEW_STEP, SAVE_COMPETITOR_STEPS,
    SAVE_STEP, SIGNUP_STEPS, STRATEGIES, STYLING_CONTROLS, SUPPORT_CONTACTS, TEXT_EXAMPLES,
    TEXT_STEP, TOC_ENTRIES, WORKSPACE_STEPS,
};
use voltic_guide::guide::{GuideConfig, build_user_guide, write_user_guide};
use voltic_guide::ooxml::docx::{DocumentText, MutableDocument};

const SECTION_HEADINGS: &[&str] = &[
    "Table of Contents",
    "1. Introduction",
    "What is Voltic?",
    "Key Capabilities",
    "Who is Voltic For?",
    "2. Getting Started",
    "Account Setup",
    "Navigation Overview",
    "3. Core Features",
    "Credit System",
    "6. AI-Powered Variations",
    "Asset-Based Variations (NEW FEATURE)",
    "Channel Selection (NEW FEATURE)",
    "Strategy Descriptions",
    "7. Ad Generator (NEW FEATURE)",
    "7-Step Workflow",
    "Tips for Best Results",
    "Gemini Image Editing (NEW TECHNOLOGY)",
    "Creative Options",
    "Why Gemini Matters",
    "Discover Page — New Features",
    "Save as Competitor (NEW)",
    "Create Board from Discover (NEW)",
    "18. Best Practices",
    "Do's ✅",
    "Don'ts ❌",
    "19. Troubleshooting",
    "Support & Contact",
];

/// Level-1 headings in document order.
const TOP_LEVEL_HEADINGS: &[&str] = &[
    "Table of Contents",
    "1. Introduction",
    "2. Getting Started",
    "3. Core Features",
    "6. AI-Powered Variations",
    "7. Ad Generator (NEW FEATURE)",
    "Gemini Image Editing (NEW TECHNOLOGY)",
    "Discover Page — New Features",
    "18. Best Practices",
    "19. Troubleshooting",
    "Support & Contact",
];

const SUBSECTION_HEADINGS: &[&str] = &[
    "1. Sign Up",
    "2. Create Your Workspace",
    "3. Connect Meta Ad Accounts",
    "How It Works:",
    "Use Case:",
    "Best For:",
    "Not Ideal For:",
    "Step 4: Styling Controls",
    "What It Does:",
    "How to Use:",
    "Fix:",
];

fn write_guide() -> (TempDir, DocumentText) {
    let dir = tempfile::tempdir().unwrap();
    let config = GuideConfig::default().with_output(dir.path().join("guide.docx"));
    let path = write_user_guide(&config).unwrap();
    let text = DocumentText::from_path(&path).unwrap();
    (dir, text)
}

fn read_member(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut xml = String::new();
    file.read_to_string(&mut xml).unwrap();
    xml
}

#[test]
fn test_writes_non_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("VOLTIC_USER_GUIDE_FORMATTED.docx");
    let config = GuideConfig::default().with_output(&output);

    let path = write_user_guide(&config).unwrap();
    assert_eq!(path, output);

    let metadata = std::fs::metadata(&output).unwrap();
    assert!(metadata.is_file());
    assert!(metadata.len() > 0);
}

#[test]
fn test_every_heading_present() {
    let (_dir, text) = write_guide();
    for heading in SECTION_HEADINGS {
        assert!(
            text.paragraphs().iter().any(|p| p == heading),
            "missing heading {:?}",
            heading
        );
    }
    for (strategy, _) in STRATEGIES {
        assert!(text.paragraphs().iter().any(|p| p == strategy));
    }
    for issue in ISSUES {
        assert!(text.paragraphs().iter().any(|p| p == issue.title));
    }
    for practices in BEST_PRACTICES {
        assert!(text.paragraphs().iter().any(|p| p == practices.feature));
    }
}

#[test]
fn test_every_subsection_present() {
    let (_dir, text) = write_guide();
    let has = |expected: &str| text.paragraphs().iter().any(|p| p == expected);

    for heading in SUBSECTION_HEADINGS {
        assert!(has(heading), "missing heading {:?}", heading);
    }

    let steps = [
        &GUIDELINE_STEP,
        &BACKGROUND_STEP,
        &TEXT_STEP,
        &PREVIEW_STEP,
        &REVIEW_STEP,
        &SAVE_STEP,
    ];
    for step in steps {
        assert!(has(step.title), "missing step {:?}", step.title);
        if let Some(summary) = step.summary {
            assert!(has(summary), "missing summary {:?}", summary);
        }
        for action in step.actions {
            assert!(has(action), "missing action {:?}", action);
        }
    }

    for (category, tips) in GENERATOR_TIPS {
        assert!(has(category), "missing tips category {:?}", category);
        for tip in *tips {
            assert!(has(tip), "missing tip {:?}", tip);
        }
    }

    for (i, (title, description)) in GEMINI_PIPELINE.iter().enumerate() {
        let heading = format!("{}. {}", i + 1, title);
        assert!(has(&heading), "missing pipeline stage {:?}", heading);
        assert!(has(description));
    }
}

#[test]
fn test_step_lists_verbatim() {
    let (_dir, text) = write_guide();
    let has = |expected: &str| text.paragraphs().iter().any(|p| p == expected);

    let lists: [&[&str]; 11] = [
        SIGNUP_STEPS,
        WORKSPACE_STEPS,
        META_STEPS,
        CREDIT_SOURCES,
        ASSET_VARIATION_STEPS,
        GENERATOR_INPUTS,
        GENERATOR_BEST_FOR,
        GENERATOR_NOT_FOR,
        TEXT_EXAMPLES,
        SAVE_COMPETITOR_STEPS,
        CREATE_BOARD_STEPS,
    ];
    for item in lists.into_iter().flatten() {
        assert!(has(item), "missing list item {:?}", item);
    }
    for issue in ISSUES {
        for fix in issue.fixes {
            assert!(has(fix), "missing fix {:?}", fix);
        }
    }
    for practices in BEST_PRACTICES {
        for item in practices.dos.iter().chain(practices.donts) {
            assert!(has(item), "missing practice {:?}", item);
        }
    }
}

#[test]
fn test_sections_in_order() {
    let (_dir, text) = write_guide();
    let positions: Vec<usize> = TOP_LEVEL_HEADINGS
        .iter()
        .map(|heading| {
            text.paragraphs()
                .iter()
                .position(|p| p == heading)
                .unwrap_or_else(|| panic!("missing heading {:?}", heading))
        })
        .collect();
    for pair in positions.windows(2) {
        assert!(pair[0] < pair[1], "sections out of order: {:?}", positions);
    }
}

#[test]
fn test_table_entries_verbatim() {
    let (_dir, text) = write_guide();
    let cells = text.table_cells();

    let tables: [(&[(&str, &str)], (&str, &str)); 4] = [
        (CREDIT_COSTS, ("Feature", "Cost")),
        (CHANNELS, ("Channel", "Copy Style")),
        (STYLING_CONTROLS, ("Control", "Options")),
        (GEMINI_OPTIONS, ("Option", "Choices")),
    ];
    for (rows, (key_header, value_header)) in tables {
        assert!(cells.iter().any(|c| c == key_header));
        assert!(cells.iter().any(|c| c == value_header));
        for (key, value) in rows {
            assert!(cells.iter().any(|c| c == key), "missing cell {:?}", key);
            assert!(cells.iter().any(|c| c == value), "missing cell {:?}", value);
        }
    }
}

#[test]
fn test_list_entries_verbatim() {
    let (_dir, text) = write_guide();

    for (title, description) in TOC_ENTRIES {
        let entry = format!("{}\n   {}", title, description);
        assert!(text.paragraphs().contains(&entry), "missing entry {:?}", entry);
    }
    for (label, description) in CAPABILITIES.iter().chain(AUDIENCES) {
        assert!(text.contains(&format!("{}: {}", label, description)));
    }
    for (item, description) in NAVIGATION_ITEMS {
        assert!(text.contains(&format!("{} — {}", item, description)));
    }
    for (label, contact) in SUPPORT_CONTACTS {
        assert!(text.contains(&format!("{}: {}", label, contact.text())));
    }
    assert!(text.contains("Text: Long-form copy, storytelling, detailed explanation"));
    assert!(text.contains(
        "Cause: Possible Causes: Bot not invited, channel renamed, integration disconnected"
    ));
    assert!(text.contains("• Credits never expire"));
    assert!(text.contains("Version 1.0 | February 2026 | © Voltic Platform"));
}

#[test]
fn test_core_properties() {
    let doc = build_user_guide(&GuideConfig::default().with_author("Docs Team")).unwrap();
    let bytes = doc.to_bytes().unwrap();

    let text = DocumentText::from_bytes(&bytes).unwrap();
    assert_eq!(text.title(), Some("Voltic User Guide"));

    let core = read_member(&bytes, "docProps/core.xml");
    assert!(core.contains(
        "<dc:subject>Complete Documentation for Meta Advertising Intelligence Platform</dc:subject>"
    ));
    assert!(core.contains(
        "<cp:keywords>Voltic, Meta Ads, Facebook Ads, Advertising, AI, Documentation</cp:keywords>"
    ));
    assert!(core.contains("<dc:creator>Docs Team</dc:creator>"));
}

#[test]
fn test_hyperlinks_are_external_relationships() {
    let doc = build_user_guide(&GuideConfig::default()).unwrap();
    let bytes = doc.to_bytes().unwrap();

    let text = DocumentText::from_bytes(&bytes).unwrap();
    let targets: Vec<_> = text
        .hyperlinks()
        .iter()
        .map(|link| (link.text.as_str(), link.target.as_str()))
        .collect();
    assert_eq!(
        targets,
        [
            ("support@voltic.app", "mailto:support@voltic.app"),
            ("status.voltic.app", "https://status.voltic.app"),
        ]
    );

    let rels = read_member(&bytes, "word/_rels/document.xml.rels");
    assert!(rels.contains(r#"Id="rId4""#));
    assert!(rels.contains(r#"Target="mailto:support@voltic.app" TargetMode="External""#));
    assert!(rels.contains(r#"Target="https://status.voltic.app" TargetMode="External""#));

    let document = read_member(&bytes, "word/document.xml");
    assert!(document.contains(r#"<w:hyperlink r:id="rId4""#));
    assert!(document.contains(r#"<w:rStyle w:val="Hyperlink"/>"#));
    assert!(document.contains(r#"<w:color w:val="0563C1"/>"#));
    assert!(document.contains(r#"<w:u w:val="single"/>"#));
}

#[test]
fn test_heading_styles_overridden() {
    let bytes = build_user_guide(&GuideConfig::default())
        .unwrap()
        .to_bytes()
        .unwrap();
    let styles = read_member(&bytes, "word/styles.xml");
    assert!(styles.contains(r#"<w:color w:val="003366"/><w:sz w:val="56"/>"#));
    assert!(styles.contains(r#"<w:color w:val="0070C0"/><w:sz w:val="40"/>"#));
    assert!(styles.contains(r#"<w:color w:val="0070C0"/><w:sz w:val="32"/>"#));
    assert!(styles.contains(r#"<w:color w:val="444444"/><w:sz w:val="28"/>"#));
}

#[test]
fn test_save_fails_for_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config = GuideConfig::default().with_output(dir.path().join("missing/guide.docx"));
    assert!(write_user_guide(&config).is_err());
}

/// Any text XML 1.0 can carry, minus carriage returns (written as line breaks).
const XML_TEXT: &str = r"[^\r\x00-\x08\x0B\x0C\x0E-\x1F\x{FFFE}\x{FFFF}]{0,60}";

proptest! {
    #[test]
    fn test_run_text_survives_extraction(text in XML_TEXT) {
        let mut doc = MutableDocument::new();
        doc.add_paragraph_with_text(&text);
        let bytes = doc.to_bytes().unwrap();

        let extracted = DocumentText::from_bytes(&bytes).unwrap();
        prop_assert_eq!(&extracted.paragraphs()[0], &text);
    }
}
