//! Grid and card based layouts.

use crate::models::{ExperienceEntry, TemplateId};
use crate::render::context::RenderContext;
use crate::render::helpers::{
    accent_heading, accent_tint, contact_stack, description, education_inline, education_section,
    education_stacked, entry_company_first, entry_role_first, experience_section, heading,
    label_heading, muted, scaled, skill_bullets, skill_inline, skill_pills, skills_section,
    summary_section, tagline, PillStyle, BODY_TEXT, INK, MUTED_TEXT, RULE,
};
use crate::render::registry::Layout;
use crate::render::tree::{Element, Section, Tag};

// ────────────────────────────────────────────────────────────────────────────
// Deconstructed
// ────────────────────────────────────────────────────────────────────────────

/// First name and surname stacked on separate lines, asymmetric grid.
pub struct Deconstructed;

impl Layout for Deconstructed {
    fn id(&self) -> TemplateId {
        TemplateId::Deconstructed
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        let accent = ctx.accent();
        let parts = ctx.name_parts();

        let mut name = Element::new(Tag::H1)
            .style("font-size", scaled(3.4))
            .style("font-weight", "900")
            .style("line-height", "0.95")
            .style("text-transform", "uppercase")
            .style("color", INK)
            .child(Element::div().text(parts.first));
        if !parts.rest.is_empty() {
            name = name.child(Element::div().style("color", accent).text(parts.rest));
        }

        let header = Element::new(Tag::Header)
            .section(Section::Header)
            .style("display", "grid")
            .style("grid-template-columns", "2fr 1fr")
            .style("align-items", "end")
            .style("gap", "2rem")
            .style("border-bottom", format!("8px solid {INK}"))
            .style("padding-bottom", "1.25rem")
            .style("margin-bottom", "2rem")
            .child(
                Element::div()
                    .child(name)
                    .child(tagline(ctx, 1.1, MUTED_TEXT).style("font-weight", "600")),
            )
            .maybe_child(contact_stack(ctx, false, BODY_TEXT));

        let offset_heading = |text: &str| {
            heading(Tag::H2, text)
                .style("font-size", scaled(0.8))
                .style("font-weight", "800")
                .style("text-transform", "uppercase")
                .style("letter-spacing", "0.2em")
                .style("color", INK)
                .style("writing-mode", "horizontal-tb")
                .style("margin-bottom", "0.75rem")
        };

        let left = Element::div()
            .maybe_child(summary_section(ctx, offset_heading("01 / Profile")))
            .maybe_child(skills_section(
                ctx,
                offset_heading("03 / Skills"),
                skill_bullets(ctx, 1),
            ))
            .maybe_child(education_section(
                ctx,
                offset_heading("04 / Education"),
                education_stacked,
            ));
        let right = Element::div().maybe_child(experience_section(
            ctx,
            offset_heading("02 / Experience"),
            entry_role_first,
        ));

        Element::div().style("padding", "2.75rem").child(header).child(
            Element::div()
                .style("display", "grid")
                .style("grid-template-columns", "1fr 2fr")
                .style("gap", "2.5rem")
                .child(left)
                .child(right),
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Urban Grid
// ────────────────────────────────────────────────────────────────────────────

pub struct Urban;

impl Layout for Urban {
    fn id(&self) -> TemplateId {
        TemplateId::Urban
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        let accent = ctx.accent();

        let header = Element::new(Tag::Header)
            .section(Section::Header)
            .style("display", "grid")
            .style("grid-template-columns", "repeat(3, minmax(0, 1fr))")
            .style("gap", "1.5rem")
            .style("border-top", format!("4px solid {accent}"))
            .style("border-bottom", format!("1px solid {RULE}"))
            .style("padding", "1.5rem 0")
            .style("margin-bottom", "2rem")
            .child(
                Element::div()
                    .style("grid-column", "span 2 / span 2")
                    .child(
                        name_block(ctx)
                            .style("text-transform", "uppercase")
                            .style("letter-spacing", "0.04em"),
                    )
                    .child(tagline(ctx, 1.0, MUTED_TEXT)),
            )
            .maybe_child(contact_stack(ctx, false, MUTED_TEXT));

        let cell = |content: Option<Element>| {
            content.map(|c| {
                Element::div()
                    .style("border-top", format!("1px solid {RULE}"))
                    .style("padding-top", "0.75rem")
                    .child(c)
            })
        };

        let grid = Element::div()
            .style("display", "grid")
            .style("grid-template-columns", "repeat(3, minmax(0, 1fr))")
            .style("gap", "1.75rem")
            .maybe_child(cell(summary_section(ctx, label_heading("Profile", accent))))
            .maybe_child(cell(skills_section(
                ctx,
                label_heading("Skills", accent),
                skill_pills(ctx, PillStyle::Outline),
            )))
            .maybe_child(cell(education_section(
                ctx,
                label_heading("Education", accent),
                education_stacked,
            )));

        let experience = experience_section(
            ctx,
            label_heading("Experience", accent),
            entry_company_first,
        )
        .map(|s| s.style("margin-top", "2rem"));

        Element::div()
            .style("padding", "2.5rem")
            .child(header)
            .child(grid)
            .maybe_child(experience)
    }
}

fn name_block(ctx: &RenderContext<'_>) -> Element {
    heading(Tag::H1, &ctx.info().full_name)
        .style("font-size", scaled(2.4))
        .style("font-weight", "800")
        .style("line-height", "1.05")
        .style("color", INK)
}

// ────────────────────────────────────────────────────────────────────────────
// Tignum Timeline
// ────────────────────────────────────────────────────────────────────────────

/// Experience drawn as a vertical timeline with dates in a left gutter.
pub struct Tignum;

impl Layout for Tignum {
    fn id(&self) -> TemplateId {
        TemplateId::Tignum
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        let accent = ctx.accent();

        let header = Element::new(Tag::Header)
            .section(Section::Header)
            .style("margin-bottom", "2rem")
            .child(name_block(ctx))
            .child(tagline(ctx, 1.1, MUTED_TEXT))
            .maybe_child(contact_stack(ctx, false, MUTED_TEXT).map(|c| {
                c.style("display", "flex")
                    .style("flex-wrap", "wrap")
                    .style("column-gap", "1.5rem")
                    .style("margin-top", "0.75rem")
            }));

        let timeline_entry = |entry: &ExperienceEntry| {
            Element::div()
                .style("display", "grid")
                .style("grid-template-columns", "7rem 1fr")
                .style("gap", "1.25rem")
                .child(
                    Element::div()
                        .style("text-align", "right")
                        .style("font-size", scaled(0.8))
                        .style("font-weight", "600")
                        .style("color", MUTED_TEXT)
                        .text(entry.date_range()),
                )
                .child(
                    Element::div()
                        .style("border-left", format!("2px solid {accent}"))
                        .style("padding-left", "1rem")
                        .child(
                            heading(Tag::H4, &entry.role)
                                .style("font-weight", "700")
                                .style("color", INK),
                        )
                        .child(muted(&entry.company, 0.9))
                        .maybe_child(description(&entry.description)),
                )
        };

        let timeline_heading = |text: &str| {
            accent_heading(ctx, Tag::H2, text)
                .style("font-size", scaled(1.15))
                .style("font-weight", "700")
                .style("margin-bottom", "1rem")
        };

        let education = education_section(ctx, timeline_heading("Education"), education_inline);
        let skills = skills_section(ctx, timeline_heading("Skills"), skill_inline(ctx, " · "));
        let lower = (education.is_some() || skills.is_some()).then(|| {
            Element::div()
                .style("display", "grid")
                .style("grid-template-columns", "repeat(2, minmax(0, 1fr))")
                .style("gap", "2rem")
                .maybe_child(education)
                .maybe_child(skills)
        });

        Element::div()
            .style("padding", "2.75rem 3rem")
            .child(header)
            .maybe_child(summary_section(ctx, timeline_heading("Summary")))
            .maybe_child(experience_section(
                ctx,
                timeline_heading("Career Timeline"),
                timeline_entry,
            ))
            .maybe_child(lower)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Quartz Cards
// ────────────────────────────────────────────────────────────────────────────

/// Every section on its own softly tinted card.
pub struct Quartz;

impl Layout for Quartz {
    fn id(&self) -> TemplateId {
        TemplateId::Quartz
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        let accent = ctx.accent();
        let card = |section: Option<Element>| {
            section.map(|s| {
                s.style("background-color", accent_tint(accent, 6))
                    .style("border", format!("1px solid {}", accent_tint(accent, 25)))
                    .style("border-radius", "0.75rem")
                    .style("padding", "1.25rem 1.5rem")
            })
        };
        let card_heading = |text: &str| {
            accent_heading(ctx, Tag::H3, text)
                .style("font-size", scaled(1.0))
                .style("font-weight", "700")
                .style("margin-bottom", "0.6rem")
        };

        let header = Element::new(Tag::Header)
            .section(Section::Header)
            .style("text-align", "center")
            .style("margin-bottom", "1.75rem")
            .child(name_block(ctx))
            .child(tagline(ctx, 1.05, MUTED_TEXT))
            .maybe_child(contact_stack(ctx, false, MUTED_TEXT).map(|c| {
                c.style("display", "flex")
                    .style("justify-content", "center")
                    .style("flex-wrap", "wrap")
                    .style("column-gap", "1.25rem")
                    .style("margin-top", "0.75rem")
            }));

        let education = card(education_section(ctx, card_heading("Education"), education_stacked));
        let skills = card(skills_section(
            ctx,
            card_heading("Skills"),
            skill_pills(ctx, PillStyle::Tinted),
        ));
        let columns = (education.is_some() || skills.is_some()).then(|| {
            Element::div()
                .style("display", "grid")
                .style("grid-template-columns", "repeat(2, minmax(0, 1fr))")
                .style("gap", "1.25rem")
                .maybe_child(education)
                .maybe_child(skills)
        });

        Element::div()
            .style("padding", "2.5rem")
            .style("display", "flex")
            .style("flex-direction", "column")
            .style("gap", "1.25rem")
            .child(header)
            .maybe_child(card(summary_section(ctx, card_heading("Profile"))))
            .maybe_child(card(experience_section(
                ctx,
                card_heading("Experience"),
                entry_role_first,
            )))
            .maybe_child(columns)
    }
}
