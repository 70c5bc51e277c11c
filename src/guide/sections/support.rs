use crate::common::RGBColor;
use crate::guide::GuideConfig;
use crate::guide::content::{Contact, SUPPORT_CONTACTS};
use crate::guide::helpers::{LIST_BULLET, add_hyperlink};
use crate::guide::sections::cover::GRAY;
use crate::ooxml::docx::writer::{MutableDocument, ParagraphAlignment};
use crate::ooxml::error::Result;

const RULE: RGBColor = RGBColor::new(200, 200, 200);
const FOOTNOTE: RGBColor = RGBColor::new(150, 150, 150);

pub(crate) fn emit(doc: &mut MutableDocument, config: &GuideConfig) -> Result<()> {
    doc.add_heading("Support & Contact", 1)?;

    doc.add_paragraph();
    for (label, contact) in SUPPORT_CONTACTS {
        let entry = doc.add_paragraph();
        entry.set_style(LIST_BULLET);
        entry.add_run_with_text(&format!("{}: ", label)).bold(true);
        match contact {
            Contact::Text(text) => {
                entry.add_run_with_text(text);
            },
            Contact::Link(text, url) => {
                add_hyperlink(entry, url, text);
            },
        }
    }

    doc.add_paragraph();
    doc.add_paragraph();

    let rule = doc.add_paragraph();
    rule.set_alignment(ParagraphAlignment::Center);
    rule.add_run_with_text("─────────────────────").color(RULE);

    doc.add_paragraph();

    let closing = doc.add_paragraph();
    closing.set_alignment(ParagraphAlignment::Center);
    closing
        .add_run_with_text(
            "For the most up-to-date documentation, visit your Voltic instance help center.",
        )
        .italic(true)
        .font_size_pt(10.0)
        .color(GRAY);

    doc.add_paragraph();

    let version = doc.add_paragraph();
    version.set_alignment(ParagraphAlignment::Center);
    version
        .add_run_with_text(&format!("{} | © Voltic Platform", config.version_label()))
        .font_size_pt(9.0)
        .color(FOOTNOTE);
    Ok(())
}
