use crate::guide::content::{AUDIENCES, CAPABILITIES};
use crate::guide::helpers::{labeled_bullet, labeled_paragraph};
use crate::ooxml::docx::writer::MutableDocument;
use crate::ooxml::error::Result;

pub(crate) fn emit(doc: &mut MutableDocument) -> Result<()> {
    doc.add_heading("1. Introduction", 1)?;

    doc.add_heading("What is Voltic?", 2)?;
    doc.add_paragraph_with_text(
        "Voltic is an all-in-one SaaS platform that unifies Meta (Facebook/Instagram) advertising analytics, \
         competitor intelligence, automated reporting, social comment monitoring, and AI-powered creative generation \
         into a single workspace.",
    );

    doc.add_paragraph();
    labeled_paragraph(
        doc,
        "Think of Voltic as: ",
        "Supermetrics + AdSpy + Jasper combined into one platform.",
    );

    doc.add_heading("Key Capabilities", 2)?;
    for (title, description) in CAPABILITIES {
        labeled_bullet(doc, &format!("{}: ", title), description);
    }

    doc.add_heading("Who is Voltic For?", 2)?;
    for (role, use_case) in AUDIENCES {
        labeled_bullet(doc, &format!("{}: ", role), use_case);
    }
    Ok(())
}
