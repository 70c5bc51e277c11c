use crate::guide::content::TOC_ENTRIES;
use crate::guide::helpers::LIST_NUMBER;
use crate::ooxml::docx::writer::MutableDocument;
use crate::ooxml::error::Result;

pub(crate) fn emit(doc: &mut MutableDocument) -> Result<()> {
    doc.add_heading("Table of Contents", 1)?;
    doc.add_paragraph_with_text(
        "This guide covers all features and capabilities of the Voltic platform.",
    );
    doc.add_paragraph();

    for (title, description) in TOC_ENTRIES {
        let entry = doc.add_paragraph();
        entry.set_style(LIST_NUMBER);
        entry.add_run_with_text(title).bold(true);
        entry
            .add_run_with_text(&format!("\n   {}", description))
            .font_size_pt(10.0);
    }
    Ok(())
}
