use crate::guide::content::{META_STEPS, NAVIGATION_ITEMS, SIGNUP_STEPS, WORKSPACE_STEPS};
use crate::guide::helpers::{labeled_bullet, numbered};
use crate::ooxml::docx::writer::MutableDocument;
use crate::ooxml::error::Result;

pub(crate) fn emit(doc: &mut MutableDocument) -> Result<()> {
    doc.add_heading("2. Getting Started", 1)?;

    doc.add_heading("Account Setup", 2)?;

    doc.add_heading("1. Sign Up", 3)?;
    numbered(doc, SIGNUP_STEPS);

    doc.add_heading("2. Create Your Workspace", 3)?;
    numbered(doc, WORKSPACE_STEPS);

    doc.add_heading("3. Connect Meta Ad Accounts", 3)?;
    numbered(doc, META_STEPS);

    doc.add_heading("Navigation Overview", 2)?;
    doc.add_paragraph_with_text("Main Navigation (Left Sidebar):");
    for (item, description) in NAVIGATION_ITEMS {
        labeled_bullet(doc, &format!("{} — ", item), description);
    }
    Ok(())
}
