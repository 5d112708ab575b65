//! Clean Minimalist — also the fallback for unknown template ids.

use crate::models::TemplateId;
use crate::render::context::RenderContext;
use crate::render::helpers::{
    contact_stack, education_section, education_stacked, entry_company_first, experience_section,
    label_heading, name_heading, skill_pills, skills_section, summary_section, tagline, PillStyle,
    FAINT_TEXT, INK, MUTED_TEXT, RULE,
};
use crate::render::registry::Layout;
use crate::render::tree::{Element, Section};

pub struct Minimalist;

impl Layout for Minimalist {
    fn id(&self) -> TemplateId {
        TemplateId::Minimalist
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        let header = Element::div()
            .section(Section::Header)
            .style("display", "flex")
            .style("justify-content", "space-between")
            .style("align-items", "flex-end")
            .style("border-bottom", format!("1px solid {RULE}"))
            .style("padding-bottom", "1rem")
            .style("margin-bottom", "3rem")
            .child(
                Element::div()
                    .child(
                        name_heading(ctx, 3.0)
                            .style("font-weight", "300")
                            .style("color", INK),
                    )
                    .child(tagline(ctx, 1.25, MUTED_TEXT).style("font-weight", "300")),
            )
            .maybe_child(contact_stack(ctx, false, MUTED_TEXT).map(|c| c.style("text-align", "right")));

        let main = Element::div()
            .style("grid-column", "span 8 / span 8")
            .maybe_child(summary_section(ctx, label_heading("Profile", FAINT_TEXT)))
            .maybe_child(experience_section(
                ctx,
                label_heading("Experience", FAINT_TEXT),
                entry_company_first,
            ));

        let side = Element::div()
            .style("grid-column", "span 4 / span 4")
            .style("border-left", "1px solid #f3f4f6")
            .style("padding-left", "2rem")
            .maybe_child(education_section(
                ctx,
                label_heading("Education", FAINT_TEXT),
                education_stacked,
            ))
            .maybe_child(skills_section(
                ctx,
                label_heading("Expertise", FAINT_TEXT),
                skill_pills(ctx, PillStyle::Outline),
            ));

        Element::div()
            .style("padding", "2.5rem")
            .child(header)
            .child(
                Element::div()
                    .style("display", "grid")
                    .style("grid-template-columns", "repeat(12, minmax(0, 1fr))")
                    .style("gap", "2rem")
                    .child(main)
                    .child(side),
            )
    }
}
