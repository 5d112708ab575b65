//! Single-column layouts in the conventional resume mould.

use crate::models::TemplateId;
use crate::render::context::RenderContext;
use crate::render::helpers::{
    accent_heading, contact_inline, education_inline, education_section, education_stacked,
    entry_company_first, entry_role_first, entry_role_with_dates, experience_section, heading,
    name_heading, paragraph, scaled, skill_bullets, skill_inline, skill_pills, skills_section,
    summary_section, tagline, PillStyle, INK, MUTED_TEXT, RULE,
};
use crate::render::registry::Layout;
use crate::render::tree::{Element, Section, Tag};

/// Uppercase heading over a hairline rule.
fn ruled_heading(text: &str, rule_color: &str) -> Element {
    heading(Tag::H3, text)
        .style("font-size", scaled(1.1))
        .style("font-weight", "700")
        .style("text-transform", "uppercase")
        .style("letter-spacing", "0.06em")
        .style("border-bottom", format!("1px solid {rule_color}"))
        .style("padding-bottom", "0.25rem")
        .style("margin-bottom", "0.85rem")
}

// ────────────────────────────────────────────────────────────────────────────
// Classic Professional
// ────────────────────────────────────────────────────────────────────────────

pub struct Classic;

impl Layout for Classic {
    fn id(&self) -> TemplateId {
        TemplateId::Classic
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        let accent = ctx.accent();

        let header = Element::new(Tag::Header)
            .section(Section::Header)
            .style("text-align", "center")
            .style("border-bottom", format!("2px solid {accent}"))
            .style("padding-bottom", "1.5rem")
            .style("margin-bottom", "2rem")
            .child(
                accent_heading(ctx, Tag::H1, &ctx.info().full_name)
                    .style("font-size", scaled(2.25))
                    .style("font-weight", "700")
                    .style("text-transform", "uppercase")
                    .style("letter-spacing", "0.04em")
                    .style("margin-bottom", "0.5rem"),
            )
            .maybe_child(contact_inline(ctx, " | ", MUTED_TEXT));

        let education = education_section(ctx, ruled_heading("Education", RULE), education_stacked)
            .map(|s| s.style("flex", "1"));
        let skills = skills_section(ctx, ruled_heading("Skills", RULE), skill_bullets(ctx, 2))
            .map(|s| s.style("flex", "1"));
        let footer = (education.is_some() || skills.is_some()).then(|| {
            Element::div()
                .style("display", "flex")
                .style("gap", "2rem")
                .maybe_child(education)
                .maybe_child(skills)
        });

        Element::div()
            .style("padding", "3rem")
            .child(header)
            .maybe_child(summary_section(
                ctx,
                ruled_heading("Professional Summary", RULE),
            ))
            .maybe_child(experience_section(
                ctx,
                ruled_heading("Experience", RULE),
                |e| entry_role_with_dates(e, MUTED_TEXT),
            ))
            .maybe_child(footer)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Executive Suite
// ────────────────────────────────────────────────────────────────────────────

pub struct Executive;

impl Layout for Executive {
    fn id(&self) -> TemplateId {
        TemplateId::Executive
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        let accent = ctx.accent();
        let section_heading = |text: &str| {
            accent_heading(ctx, Tag::H2, text)
                .style("font-size", scaled(1.05))
                .style("font-variant", "small-caps")
                .style("letter-spacing", "0.08em")
                .style("border-bottom", format!("1px solid {accent}"))
                .style("padding-bottom", "0.2rem")
                .style("margin-bottom", "0.9rem")
        };

        let header = Element::new(Tag::Header)
            .section(Section::Header)
            .style("margin-bottom", "2rem")
            .child(
                name_heading(ctx, 2.4)
                    .style("color", INK)
                    .style("text-transform", "uppercase")
                    .style("letter-spacing", "0.08em"),
            )
            .child(
                tagline(ctx, 1.0, MUTED_TEXT)
                    .style("text-transform", "uppercase")
                    .style("letter-spacing", "0.15em"),
            )
            .child(
                Element::div()
                    .style("width", "4rem")
                    .style("height", "4px")
                    .style("background-color", accent)
                    .style("margin", "1rem 0"),
            )
            .maybe_child(contact_inline(ctx, "  ·  ", MUTED_TEXT));

        Element::div()
            .style("padding", "3rem 3.5rem")
            .child(header)
            .maybe_child(summary_section(ctx, section_heading("Executive Profile")))
            .maybe_child(experience_section(
                ctx,
                section_heading("Leadership Experience"),
                |e| entry_role_with_dates(e, accent),
            ))
            .maybe_child(skills_section(
                ctx,
                section_heading("Core Competencies"),
                skill_inline(ctx, "  •  "),
            ))
            .maybe_child(education_section(
                ctx,
                section_heading("Education"),
                education_inline,
            ))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Academic CV
// ────────────────────────────────────────────────────────────────────────────

/// Education leads, as on a CV.
pub struct Academic;

impl Layout for Academic {
    fn id(&self) -> TemplateId {
        TemplateId::Academic
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        let accent = ctx.accent();
        let section_heading = |text: &str| {
            accent_heading(ctx, Tag::H2, text)
                .style("font-size", scaled(1.1))
                .style("font-variant", "small-caps")
                .style("border-bottom", format!("1px solid {INK}"))
                .style("margin-bottom", "0.75rem")
        };

        let header = Element::new(Tag::Header)
            .section(Section::Header)
            .style("text-align", "center")
            .style("margin-bottom", "1.75rem")
            .child(name_heading(ctx, 2.0).style("color", INK))
            .maybe_child(contact_inline(ctx, " · ", MUTED_TEXT).map(|c| c.style("margin-top", "0.5rem")));

        Element::div()
            .style("padding", "2.75rem 3rem")
            .style("line-height", "1.5")
            .child(header)
            .maybe_child(education_section(
                ctx,
                section_heading("Education"),
                |e| education_inline(e).style("border-left", format!("2px solid {accent}")).style("padding-left", "0.6rem"),
            ))
            .maybe_child(summary_section(ctx, section_heading("Research Profile")))
            .maybe_child(experience_section(
                ctx,
                section_heading("Appointments & Experience"),
                entry_role_first,
            ))
            .maybe_child(skills_section(
                ctx,
                section_heading("Skills & Methods"),
                skill_inline(ctx, "; "),
            ))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Ivy League
// ────────────────────────────────────────────────────────────────────────────

pub struct Ivy;

impl Layout for Ivy {
    fn id(&self) -> TemplateId {
        TemplateId::Ivy
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        let accent = ctx.accent();
        let centered_heading = |text: &str| {
            heading(Tag::H3, text)
                .style("text-align", "center")
                .style("text-transform", "uppercase")
                .style("letter-spacing", "0.2em")
                .style("font-size", scaled(0.9))
                .style("color", INK)
                .style("margin-bottom", "0.85rem")
        };

        let header = Element::new(Tag::Header)
            .section(Section::Header)
            .style("text-align", "center")
            .style("border-bottom", format!("3px double {accent}"))
            .style("padding-bottom", "1rem")
            .style("margin-bottom", "1.75rem")
            .child(
                accent_heading(ctx, Tag::H1, &ctx.info().full_name)
                    .style("font-size", scaled(2.2))
                    .style("font-weight", "600"),
            )
            .maybe_child(contact_inline(ctx, " • ", MUTED_TEXT).map(|c| c.style("margin-top", "0.4rem")));

        Element::div()
            .style("padding", "3rem")
            .child(header)
            .maybe_child(summary_section(ctx, centered_heading("Summary")))
            .maybe_child(experience_section(
                ctx,
                centered_heading("Experience"),
                entry_company_first,
            ))
            .maybe_child(education_section(
                ctx,
                centered_heading("Education"),
                education_inline,
            ))
            .maybe_child(skills_section(
                ctx,
                centered_heading("Skills"),
                skill_inline(ctx, ", ").style("text-align", "center"),
            ))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Noble Serif
// ────────────────────────────────────────────────────────────────────────────

pub struct Noble;

impl Layout for Noble {
    fn id(&self) -> TemplateId {
        TemplateId::Noble
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        let accent = ctx.accent();
        let flagged_heading = |text: &str| {
            heading(Tag::H2, text)
                .style("font-size", scaled(1.15))
                .style("font-weight", "600")
                .style("color", INK)
                .style("border-left", format!("3px solid {accent}"))
                .style("padding-left", "0.6rem")
                .style("margin-bottom", "0.9rem")
        };

        let header = Element::new(Tag::Header)
            .section(Section::Header)
            .style("margin-bottom", "2rem")
            .child(
                name_heading(ctx, 2.5)
                    .style("color", INK)
                    .style("font-weight", "400")
                    .style("letter-spacing", "0.02em"),
            )
            .child(tagline(ctx, 1.1, MUTED_TEXT).style("font-style", "italic"))
            .child(
                Element::div()
                    .style("height", "1px")
                    .style("background-color", accent)
                    .style("margin", "1rem 0 0.75rem"),
            )
            .maybe_child(contact_inline(ctx, "   ", MUTED_TEXT));

        let education = education_section(ctx, flagged_heading("Education"), education_stacked)
            .map(|s| {
                s.style("display", "grid")
                    .style("grid-template-columns", "1fr")
            });

        Element::div()
            .style("padding", "3.25rem 3.5rem")
            .child(header)
            .maybe_child(summary_section(ctx, flagged_heading("Profile")))
            .maybe_child(experience_section(
                ctx,
                flagged_heading("Experience"),
                entry_role_first,
            ))
            .maybe_child(education)
            .maybe_child(skills_section(
                ctx,
                flagged_heading("Skills"),
                skill_bullets(ctx, 3),
            ))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Cesta Centered
// ────────────────────────────────────────────────────────────────────────────

pub struct Cesta;

impl Layout for Cesta {
    fn id(&self) -> TemplateId {
        TemplateId::Cesta
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        let accent = ctx.accent();
        let centered_heading = |text: &str| {
            accent_heading(ctx, Tag::H2, text)
                .style("text-align", "center")
                .style("font-size", scaled(1.2))
                .style("font-weight", "600")
                .style("margin-bottom", "1rem")
        };

        let header = Element::new(Tag::Header)
            .section(Section::Header)
            .style("text-align", "center")
            .style("margin-bottom", "2.25rem")
            .child(name_heading(ctx, 2.4).style("color", INK))
            .child(
                Element::div()
                    .style("width", "3rem")
                    .style("height", "3px")
                    .style("background-color", accent)
                    .style("margin", "0.75rem auto"),
            )
            .child(tagline(ctx, 1.0, MUTED_TEXT))
            .maybe_child(contact_inline(ctx, "  •  ", MUTED_TEXT).map(|c| c.style("margin-top", "0.5rem")));

        let summary = ctx.has_summary().then(|| {
            Element::new(Tag::Section)
                .section(Section::Summary)
                .style("margin", "0 auto 2rem")
                .style("max-width", "85%")
                .child(
                    paragraph(&ctx.info().summary)
                        .style("text-align", "center")
                        .style("font-style", "italic"),
                )
        });

        Element::div()
            .style("padding", "3rem")
            .child(header)
            .maybe_child(summary)
            .maybe_child(experience_section(
                ctx,
                centered_heading("Experience"),
                entry_role_first,
            ))
            .maybe_child(education_section(
                ctx,
                centered_heading("Education"),
                |e| education_stacked(e).style("text-align", "center"),
            ))
            .maybe_child(skills_section(
                ctx,
                centered_heading("Skills"),
                skill_pills(ctx, PillStyle::Outline).style("justify-content", "center"),
            ))
    }
}
