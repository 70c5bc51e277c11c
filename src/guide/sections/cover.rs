use crate::common::RGBColor;
use crate::guide::GuideConfig;
use crate::ooxml::docx::writer::{MutableDocument, ParagraphAlignment};

pub(crate) const NAVY: RGBColor = RGBColor::new(0, 51, 102);
pub(crate) const CHARCOAL: RGBColor = RGBColor::new(68, 68, 68);
pub(crate) const GRAY: RGBColor = RGBColor::new(100, 100, 100);

pub(crate) fn emit(doc: &mut MutableDocument, config: &GuideConfig) {
    let title = doc.add_paragraph();
    title.set_alignment(ParagraphAlignment::Center);
    title
        .add_run_with_text("VOLTIC")
        .font_size_pt(44.0)
        .bold(true)
        .color(NAVY);

    let subtitle = doc.add_paragraph();
    subtitle.set_alignment(ParagraphAlignment::Center);
    subtitle
        .add_run_with_text("User Guide & Documentation")
        .font_size_pt(24.0)
        .color(CHARCOAL);

    doc.add_paragraph();

    let tagline = doc.add_paragraph();
    tagline.set_alignment(ParagraphAlignment::Center);
    tagline
        .add_run_with_text("Meta Advertising Intelligence & Creative Generation Platform")
        .font_size_pt(14.0)
        .italic(true)
        .color(GRAY);

    doc.add_paragraph_with_text(&"\n".repeat(8));

    let version = doc.add_paragraph();
    version.set_alignment(ParagraphAlignment::Center);
    version
        .add_run_with_text(config.version_label())
        .font_size_pt(11.0);
}
