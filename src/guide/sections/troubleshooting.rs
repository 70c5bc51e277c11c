use crate::guide::content::ISSUES;
use crate::guide::helpers::{HEADING_3, labeled_paragraph, numbered};
use crate::ooxml::docx::writer::MutableDocument;
use crate::ooxml::error::Result;

pub(crate) fn emit(doc: &mut MutableDocument) -> Result<()> {
    doc.add_heading("19. Troubleshooting", 1)?;

    for issue in ISSUES {
        doc.add_heading(issue.title, 2)?;
        labeled_paragraph(doc, "Cause: ", issue.cause);

        doc.add_paragraph();
        doc.add_styled_paragraph("Fix:", HEADING_3);
        numbered(doc, issue.fixes);

        doc.add_paragraph();
    }
    Ok(())
}
