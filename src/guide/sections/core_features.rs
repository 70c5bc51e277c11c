use crate::guide::content::{CREDIT_COSTS, CREDIT_SOURCES};
use crate::guide::helpers::{LIGHT_GRID, bullets, key_value_table};
use crate::ooxml::docx::writer::MutableDocument;
use crate::ooxml::error::Result;

pub(crate) fn emit(doc: &mut MutableDocument) -> Result<()> {
    doc.add_heading("3. Core Features", 1)?;

    doc.add_heading("Credit System", 2)?;
    doc.add_paragraph_with_text("Voltic uses credits for AI-powered features:");
    key_value_table(doc, LIGHT_GRID, ("Feature", "Cost"), CREDIT_COSTS, None);

    doc.add_paragraph();
    doc.add_paragraph_with_text("How to Get Credits:");
    bullets(doc, CREDIT_SOURCES);
    Ok(())
}
