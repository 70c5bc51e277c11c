use crate::guide::content::{
    BACKGROUND_STEP, GENERATOR_BEST_FOR, GENERATOR_INPUTS, GENERATOR_NOT_FOR, GENERATOR_TIPS,
    GUIDELINE_STEP, PREVIEW_STEP, REVIEW_STEP, SAVE_STEP, STYLING_CONTROLS, TEXT_EXAMPLES,
    TEXT_STEP, WorkflowStep,
};
use crate::guide::helpers::{
    HEADING_3, INTENSE_QUOTE, LIGHT_GRID, bullets, key_value_table, labeled_paragraph, numbered,
};
use crate::ooxml::docx::writer::MutableDocument;
use crate::ooxml::error::Result;

pub(crate) fn emit(doc: &mut MutableDocument) -> Result<()> {
    doc.add_heading("7. Ad Generator (NEW FEATURE)", 1)?;
    doc.add_styled_paragraph("Location: /ad-generator", INTENSE_QUOTE);
    labeled_paragraph(
        doc,
        "✨ BRAND NEW FEATURE",
        " — Create hundreds of ad variations in minutes by combining backgrounds with text.",
    );

    doc.add_heading("What is Ad Generator?", 2)?;
    doc.add_paragraph_with_text(
        "A batch text overlay composition tool that lets you create M×N ad variations by combining:",
    );
    bullets(doc, GENERATOR_INPUTS);

    doc.add_paragraph();
    let example = doc.add_paragraph();
    example.add_run_with_text("Example: ").bold(true);
    example.add_run_with_text("5 backgrounds × 10 text variants = ");
    example.add_run_with_text("50 ad previews ").bold(true);
    example.add_run_with_text("generated in ~20 seconds");

    doc.add_heading("When to Use Ad Generator", 2)?;
    doc.add_styled_paragraph("Best For:", HEADING_3);
    bullets(doc, GENERATOR_BEST_FOR);

    doc.add_paragraph();
    doc.add_styled_paragraph("Not Ideal For:", HEADING_3);
    bullets(doc, GENERATOR_NOT_FOR);

    doc.add_heading("7-Step Workflow", 2)?;
    workflow_step(doc, &GUIDELINE_STEP)?;
    workflow_step(doc, &BACKGROUND_STEP)?;
    workflow_step(doc, &TEXT_STEP)?;

    doc.add_paragraph();
    doc.add_paragraph().add_run_with_text("Examples:").bold(true);
    bullets(doc, TEXT_EXAMPLES);

    doc.add_heading("Step 4: Styling Controls", 3)?;
    key_value_table(doc, LIGHT_GRID, ("Control", "Options"), STYLING_CONTROLS, None);

    workflow_step(doc, &PREVIEW_STEP)?;
    doc.add_paragraph();
    labeled_paragraph(
        doc,
        "Time Estimate: ",
        "~20 seconds for 50 previews | ~40 seconds for 100 previews",
    );

    workflow_step(doc, &REVIEW_STEP)?;
    workflow_step(doc, &SAVE_STEP)?;

    doc.add_heading("Tips for Best Results", 2)?;
    for (category, tips) in GENERATOR_TIPS {
        doc.add_heading(category, 3)?;
        bullets(doc, tips);
    }
    Ok(())
}

fn workflow_step(doc: &mut MutableDocument, step: &WorkflowStep) -> Result<()> {
    doc.add_heading(step.title, 3)?;
    if let Some(summary) = step.summary {
        doc.add_paragraph_with_text(summary);
    }
    if step.bulleted {
        bullets(doc, step.actions);
    } else {
        numbered(doc, step.actions);
    }
    Ok(())
}
