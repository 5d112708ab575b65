//! Two-column layouts with a full-height side rail.

use crate::models::TemplateId;
use crate::render::context::RenderContext;
use crate::render::helpers::{
    accent_heading, accent_tint, contact_stack, education_on_color, education_section,
    education_stacked, entry_company_first, entry_role_first, entry_role_with_dates,
    experience_section, heading, label_heading, name_heading, paragraph, scaled, skill_bullets,
    skill_pills, skills_section, split_name_heading, summary_section, tagline, PillStyle,
    BODY_TEXT, INK, MUTED_TEXT, RULE,
};
use crate::render::registry::Layout;
use crate::render::tree::{Element, Section, Tag};

/// Heading used inside an accent-colored rail.
fn rail_heading(text: &str) -> Element {
    heading(Tag::H3, text)
        .style("font-size", scaled(1.15))
        .style("font-weight", "700")
        .style("border-bottom", "1px solid rgba(255, 255, 255, 0.4)")
        .style("padding-bottom", "0.25rem")
        .style("margin-bottom", "0.75rem")
}

// ────────────────────────────────────────────────────────────────────────────
// Modern Split
// ────────────────────────────────────────────────────────────────────────────

pub struct Modern;

impl Layout for Modern {
    fn id(&self) -> TemplateId {
        TemplateId::Modern
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        let accent = ctx.accent();

        let mut identity = Element::div()
            .section(Section::Header)
            .style("margin-bottom", "2rem")
            .child(
                name_heading(ctx, 1.9)
                    .style("text-transform", "uppercase")
                    .style("color", "white"),
            );
        if !ctx.info().location.trim().is_empty() {
            identity = identity.child(
                Element::new(Tag::P)
                    .style("opacity", "0.9")
                    .style("margin-top", "0.5rem")
                    .style("color", "white")
                    .text(&ctx.info().location),
            );
        }

        let rail = Element::new(Tag::Aside)
            .style("width", "33.333%")
            .style("padding", "2rem")
            .style("background-color", accent)
            .style("color", "white")
            .child(identity)
            .maybe_child(
                contact_stack(ctx, false, "white").map(|c| c.style("margin-bottom", "2rem")),
            )
            .maybe_child(education_section(
                ctx,
                rail_heading("Education"),
                education_on_color,
            ))
            .maybe_child(skills_section(
                ctx,
                rail_heading("Skills"),
                skill_pills(ctx, PillStyle::OnAccent),
            ));

        let main = Element::new(Tag::Main)
            .style("width", "66.667%")
            .style("padding", "2rem")
            .maybe_child(summary_section(
                ctx,
                accent_heading(ctx, Tag::H2, "Profile")
                    .style("font-size", scaled(1.5))
                    .style("margin-bottom", "1rem"),
            ))
            .maybe_child(experience_section(
                ctx,
                accent_heading(ctx, Tag::H2, "Experience")
                    .style("font-size", scaled(1.5))
                    .style("margin-bottom", "1.5rem"),
                |e| {
                    entry_role_first(e)
                        .style("border-left", format!("2px solid {accent}"))
                        .style("padding-left", "1rem")
                },
            ));

        Element::div()
            .style("display", "flex")
            .child(rail)
            .child(main)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Creative Portfolio
// ────────────────────────────────────────────────────────────────────────────

pub struct Creative;

impl Layout for Creative {
    fn id(&self) -> TemplateId {
        TemplateId::Creative
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        let accent = ctx.accent();

        let header = Element::new(Tag::Header)
            .section(Section::Header)
            .style("padding", "2.5rem 2.5rem 1.5rem")
            .child(split_name_heading(ctx, 2.6, accent, INK))
            .child(tagline(ctx, 1.15, MUTED_TEXT).style("letter-spacing", "0.05em"));

        let side = Element::new(Tag::Aside)
            .style("width", "36%")
            .style("padding", "1.5rem 1.5rem 2.5rem 2.5rem")
            .style("background-color", accent_tint(accent, 10))
            .style("border-top-right-radius", "2rem")
            .maybe_child(
                contact_stack(ctx, true, BODY_TEXT).map(|c| c.style("margin-bottom", "1.75rem")),
            )
            .maybe_child(skills_section(
                ctx,
                accent_heading(ctx, Tag::H3, "Toolbox").style("font-size", scaled(1.1)),
                skill_pills(ctx, PillStyle::Tinted),
            ))
            .maybe_child(education_section(
                ctx,
                accent_heading(ctx, Tag::H3, "Education").style("font-size", scaled(1.1)),
                education_stacked,
            ));

        let dot = |e: &crate::models::ExperienceEntry| {
            Element::div()
                .style("position", "relative")
                .style("padding-left", "1.1rem")
                .child(
                    Element::span()
                        .style("position", "absolute")
                        .style("left", "0")
                        .style("top", "0.45em")
                        .style("width", "0.5rem")
                        .style("height", "0.5rem")
                        .style("border-radius", "9999px")
                        .style("background-color", accent),
                )
                .child(entry_company_first(e))
        };

        let main = Element::new(Tag::Main)
            .style("width", "64%")
            .style("padding", "1.5rem 2.5rem 2.5rem 2rem")
            .maybe_child(summary_section(
                ctx,
                accent_heading(ctx, Tag::H2, "About Me").style("font-size", scaled(1.3)),
            ))
            .maybe_child(experience_section(
                ctx,
                accent_heading(ctx, Tag::H2, "Selected Work").style("font-size", scaled(1.3)),
                dot,
            ));

        Element::div().child(header).child(
            Element::div()
                .style("display", "flex")
                .child(side)
                .child(main),
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Glacial Sidebar
// ────────────────────────────────────────────────────────────────────────────

pub struct Glacial;

impl Layout for Glacial {
    fn id(&self) -> TemplateId {
        TemplateId::Glacial
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        let accent = ctx.accent();

        let rail = Element::new(Tag::Aside)
            .style("width", "30%")
            .style("padding", "2.5rem 1.75rem")
            .style("background-color", accent_tint(accent, 8))
            .style("border-right", format!("4px solid {accent}"))
            .child(
                Element::div()
                    .section(Section::Header)
                    .style("margin-bottom", "2rem")
                    .child(name_heading(ctx, 1.7).style("color", INK))
                    .child(tagline(ctx, 0.95, MUTED_TEXT)),
            )
            .maybe_child(
                contact_stack(ctx, true, BODY_TEXT).map(|c| c.style("margin-bottom", "2rem")),
            )
            .maybe_child(skills_section(
                ctx,
                label_heading("Skills", accent),
                skill_bullets(ctx, 1),
            ))
            .maybe_child(education_section(
                ctx,
                label_heading("Education", accent),
                education_stacked,
            ));

        let main = Element::new(Tag::Main)
            .style("width", "70%")
            .style("padding", "2.5rem 2.25rem")
            .maybe_child(summary_section(ctx, label_heading("Summary", accent)))
            .maybe_child(experience_section(
                ctx,
                label_heading("Experience", accent),
                |e| entry_role_with_dates(e, accent),
            ));

        Element::div()
            .style("display", "flex")
            .child(rail)
            .child(main)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pillar Right Rail
// ────────────────────────────────────────────────────────────────────────────

pub struct Pillar;

impl Layout for Pillar {
    fn id(&self) -> TemplateId {
        TemplateId::Pillar
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        let accent = ctx.accent();
        let rail_heading = |text: &str| {
            accent_heading(ctx, Tag::H3, text)
                .style("font-size", scaled(0.95))
                .style("text-transform", "uppercase")
                .style("letter-spacing", "0.08em")
                .style("margin-bottom", "0.6rem")
        };

        let main = Element::new(Tag::Main)
            .style("width", "68%")
            .style("padding", "0 2rem 2.5rem 2.5rem")
            .child(
                Element::new(Tag::Header)
                    .section(Section::Header)
                    .style("border-top", format!("6px solid {accent}"))
                    .style("padding-top", "2rem")
                    .style("margin-bottom", "2rem")
                    .child(name_heading(ctx, 2.3).style("color", INK))
                    .child(tagline(ctx, 1.05, MUTED_TEXT)),
            )
            .maybe_child(ctx.has_summary().then(|| {
                Element::new(Tag::Section)
                    .section(Section::Summary)
                    .style("margin-bottom", "1.75rem")
                    .child(paragraph(&ctx.info().summary).style("font-size", scaled(1.05)))
            }))
            .maybe_child(experience_section(
                ctx,
                heading(Tag::H2, "Experience")
                    .style("font-size", scaled(1.25))
                    .style("color", INK)
                    .style("border-bottom", format!("2px solid {accent}"))
                    .style("padding-bottom", "0.3rem")
                    .style("margin-bottom", "1rem"),
                entry_role_first,
            ));

        let rail = Element::new(Tag::Aside)
            .style("width", "32%")
            .style("padding", "2.5rem 2rem")
            .style("border-left", format!("1px solid {RULE}"))
            .maybe_child(contact_stack(ctx, true, MUTED_TEXT).map(|c| {
                c.style("margin-bottom", "2rem")
            }))
            .maybe_child(education_section(ctx, rail_heading("Education"), education_stacked))
            .maybe_child(skills_section(
                ctx,
                rail_heading("Skills"),
                skill_pills(ctx, PillStyle::Outline),
            ));

        Element::div()
            .style("display", "flex")
            .child(main)
            .child(rail)
    }
}
