use crate::guide::content::{ASSET_VARIATION_STEPS, CHANNELS, STRATEGIES};
use crate::guide::helpers::{
    INTENSE_QUOTE, LIGHT_LIST, LIST_NUMBER, key_value_table, labeled_paragraph, numbered,
};
use crate::ooxml::docx::writer::MutableDocument;
use crate::ooxml::error::Result;

pub(crate) fn emit(doc: &mut MutableDocument) -> Result<()> {
    doc.add_heading("6. AI-Powered Variations", 1)?;
    doc.add_styled_paragraph("Location: /variations", INTENSE_QUOTE);

    doc.add_heading("Overview", 2)?;
    doc.add_paragraph_with_text(
        "The Variations page is a dedicated workspace for generating AI-powered ad variations at scale. \
         It supports two sources:",
    );
    doc.add_styled_paragraph(
        "1. Competitor Ads — Generate variations inspired by competitor creatives",
        LIST_NUMBER,
    );
    doc.add_styled_paragraph(
        "2. Your Products — Generate variations starting from your product images (NEW)",
        LIST_NUMBER,
    );

    doc.add_heading("Asset-Based Variations (NEW FEATURE)", 2)?;
    labeled_paragraph(
        doc,
        "✨ NEW FEATURE",
        " — Upload your product images and generate variations with AI-powered editing while preserving product labels exactly.",
    );

    doc.add_paragraph();
    doc.add_heading("How It Works:", 3)?;
    numbered(doc, ASSET_VARIATION_STEPS);

    doc.add_heading("Use Case:", 3)?;
    labeled_paragraph(
        doc,
        "Example: ",
        "\"Here's my vitamin bottle — create 6 variations with different backgrounds and lighting styles.\"",
    );

    doc.add_paragraph();
    labeled_paragraph(
        doc,
        "Perfect for: ",
        "E-commerce product photography transformation",
    );

    doc.add_heading("Channel Selection (NEW FEATURE)", 2)?;
    doc.add_paragraph_with_text("Choose the advertising platform to optimize copy for:");
    key_value_table(doc, LIGHT_LIST, ("Channel", "Copy Style"), CHANNELS, None);

    doc.add_paragraph();
    labeled_paragraph(doc, "Default: ", "Facebook (most versatile)");

    doc.add_heading("Strategy Descriptions", 2)?;
    for (strategy, details) in STRATEGIES {
        doc.add_heading(strategy, 3)?;
        for line in details.lines().filter(|line| !line.trim().is_empty()) {
            match line.split_once(':') {
                Some((label, value)) => {
                    labeled_paragraph(doc, &format!("{}: ", label), value.trim());
                },
                None => {
                    doc.add_paragraph_with_text(line.trim());
                },
            }
        }
    }

    doc.add_heading("Cost", 2)?;
    labeled_paragraph(doc, "10 credits per strategy", " (unchanged)");

    doc.add_paragraph();
    let example = doc.add_paragraph();
    example.add_run_with_text("Example: ").italic(true);
    example.add_run_with_text("Generate 3 strategies = 30 credits");
    Ok(())
}
