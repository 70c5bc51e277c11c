use crate::guide::content::{CREATE_BOARD_STEPS, SAVE_COMPETITOR_STEPS};
use crate::guide::helpers::{labeled_paragraph, numbered};
use crate::ooxml::docx::writer::MutableDocument;
use crate::ooxml::error::Result;

pub(crate) fn emit(doc: &mut MutableDocument) -> Result<()> {
    doc.add_heading("Discover Page — New Features", 1)?;

    doc.add_heading("Save as Competitor (NEW)", 2)?;
    labeled_paragraph(
        doc,
        "✨ ONE-CLICK TRACKING",
        " — Save competitor brands instantly without decomposition",
    );

    doc.add_paragraph();
    doc.add_heading("What It Does:", 3)?;
    doc.add_paragraph_with_text(
        "Saves ad metadata to your Competitors list in one click. No need to manually decompose first. \
         Automatically extracts: brand name, headline, platform, format.",
    );

    doc.add_heading("How to Use:", 3)?;
    numbered(doc, SAVE_COMPETITOR_STEPS);

    doc.add_heading("Create Board from Discover (NEW)", 2)?;

    doc.add_heading("What It Does:", 3)?;
    doc.add_paragraph_with_text(
        "Create a new swipe file board directly from search results. \
         Pre-populate with selected ads. Streamlines inspiration collection workflow.",
    );

    doc.add_heading("How to Use:", 3)?;
    numbered(doc, CREATE_BOARD_STEPS);
    Ok(())
}
