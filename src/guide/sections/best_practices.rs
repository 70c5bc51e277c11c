use crate::guide::content::BEST_PRACTICES;
use crate::guide::helpers::bullets;
use crate::ooxml::docx::writer::MutableDocument;
use crate::ooxml::error::Result;

pub(crate) fn emit(doc: &mut MutableDocument) -> Result<()> {
    doc.add_heading("18. Best Practices", 1)?;

    for practices in BEST_PRACTICES {
        doc.add_heading(practices.feature, 2)?;

        doc.add_heading("Do's ✅", 3)?;
        bullets(doc, practices.dos);

        doc.add_heading("Don'ts ❌", 3)?;
        bullets(doc, practices.donts);
    }
    Ok(())
}
