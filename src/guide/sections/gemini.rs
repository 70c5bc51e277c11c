use crate::common::RGBColor;
use crate::guide::content::{GEMINI_BENEFITS, GEMINI_OPTIONS, GEMINI_PIPELINE};
use crate::guide::helpers::{MEDIUM_SHADING, key_value_table, labeled_bullet, labeled_paragraph};
use crate::ooxml::docx::writer::MutableDocument;
use crate::ooxml::error::Result;

pub(crate) fn emit(doc: &mut MutableDocument) -> Result<()> {
    doc.add_heading("Gemini Image Editing (NEW TECHNOLOGY)", 1)?;
    labeled_paragraph(
        doc,
        "🚀 BREAKTHROUGH TECHNOLOGY",
        " — Powered by Google's Gemini 2.5 Flash/Pro Image model",
    );

    doc.add_heading("What is Gemini Image Editing?", 2)?;
    doc.add_paragraph_with_text(
        "Gemini replaces DALL-E for asset-based variations, offering superior accuracy and speed. \
         It uses advanced mask-based editing to transform product images while preserving the \
         product itself (including labels, text, and packaging) exactly.",
    );

    doc.add_heading("How It Works", 2)?;
    for (i, (title, description)) in GEMINI_PIPELINE.iter().enumerate() {
        doc.add_heading(&format!("{}. {}", i + 1, title), 3)?;
        doc.add_paragraph_with_text(description);
    }

    doc.add_heading("Creative Options", 2)?;
    key_value_table(
        doc,
        MEDIUM_SHADING,
        ("Option", "Choices"),
        GEMINI_OPTIONS,
        Some(RGBColor::WHITE),
    );

    doc.add_heading("Why Gemini Matters", 2)?;
    for (benefit, description) in GEMINI_BENEFITS {
        labeled_bullet(doc, &format!("{}: ", benefit), description);
    }
    Ok(())
}
