//! Layouts that open with a full-width colored header band.

use crate::models::TemplateId;
use crate::render::context::RenderContext;
use crate::render::helpers::{
    accent_heading, accent_tint, contact_inline, contact_stack, education_inline,
    education_section, education_stacked, entry_company_first, entry_role_first,
    entry_role_with_dates, experience_section, heading, label_heading, name_heading, scaled,
    skill_bullets, skill_pills, skills_section, split_name_heading, summary_section, tagline,
    PillStyle, INK, MUTED_TEXT, RULE,
};
use crate::render::registry::Layout;
use crate::render::tree::{Element, Section, Tag};

// ────────────────────────────────────────────────────────────────────────────
// Corporate Banner
// ────────────────────────────────────────────────────────────────────────────

pub struct Corporate;

impl Layout for Corporate {
    fn id(&self) -> TemplateId {
        TemplateId::Corporate
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        let accent = ctx.accent();

        let band = Element::new(Tag::Header)
            .section(Section::Header)
            .style("background-color", accent)
            .style("color", "white")
            .style("padding", "2.25rem 3rem")
            .child(name_heading(ctx, 2.3).style("color", "white"))
            .child(
                tagline(ctx, 1.1, "rgba(255, 255, 255, 0.85)")
                    .style("text-transform", "uppercase")
                    .style("letter-spacing", "0.1em"),
            )
            .maybe_child(
                contact_inline(ctx, "  |  ", "white").map(|c| c.style("margin-top", "1rem")),
            );

        let section_heading = |text: &str| {
            accent_heading(ctx, Tag::H2, text)
                .style("font-size", scaled(1.2))
                .style("font-weight", "700")
                .style("border-bottom", format!("2px solid {RULE}"))
                .style("padding-bottom", "0.3rem")
                .style("margin-bottom", "1rem")
        };

        let left = Element::div()
            .style("flex", "2")
            .maybe_child(summary_section(ctx, section_heading("Summary")))
            .maybe_child(experience_section(
                ctx,
                section_heading("Experience"),
                entry_role_first,
            ));
        let right = Element::div()
            .style("flex", "1")
            .maybe_child(skills_section(
                ctx,
                section_heading("Skills"),
                skill_pills(ctx, PillStyle::Tinted),
            ))
            .maybe_child(education_section(
                ctx,
                section_heading("Education"),
                education_stacked,
            ));

        Element::div().child(band).child(
            Element::div()
                .style("display", "flex")
                .style("gap", "2rem")
                .style("padding", "2rem 3rem")
                .child(left)
                .child(right),
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Horizon Band
// ────────────────────────────────────────────────────────────────────────────

/// A thin tinted band with the name, contact strip below it.
pub struct Horizon;

impl Layout for Horizon {
    fn id(&self) -> TemplateId {
        TemplateId::Horizon
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        let accent = ctx.accent();

        let band = Element::new(Tag::Header)
            .section(Section::Header)
            .style("background-color", accent_tint(accent, 12))
            .style("border-bottom", format!("3px solid {accent}"))
            .style("padding", "2rem 3rem 1.5rem")
            .child(
                Element::div()
                    .style("display", "flex")
                    .style("justify-content", "space-between")
                    .style("align-items", "flex-end")
                    .child(
                        Element::div()
                            .child(name_heading(ctx, 2.2).style("color", INK))
                            .child(tagline(ctx, 1.05, MUTED_TEXT)),
                    )
                    .maybe_child(
                        contact_stack(ctx, false, MUTED_TEXT)
                            .map(|c| c.style("text-align", "right")),
                    ),
            );

        Element::div().child(band).child(
            Element::div()
                .style("padding", "2rem 3rem")
                .maybe_child(summary_section(ctx, label_heading("About", accent)))
                .maybe_child(experience_section(
                    ctx,
                    label_heading("Experience", accent),
                    |e| entry_role_with_dates(e, accent),
                ))
                .maybe_child(education_section(
                    ctx,
                    label_heading("Education", accent),
                    education_inline,
                ))
                .maybe_child(skills_section(
                    ctx,
                    label_heading("Skills", accent),
                    skill_pills(ctx, PillStyle::Outline),
                )),
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Vanguard Bold
// ────────────────────────────────────────────────────────────────────────────

/// Oversized split name on a dark band, first name in the accent.
pub struct Vanguard;

impl Layout for Vanguard {
    fn id(&self) -> TemplateId {
        TemplateId::Vanguard
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        let accent = ctx.accent();

        let band = Element::new(Tag::Header)
            .section(Section::Header)
            .style("background-color", INK)
            .style("color", "white")
            .style("padding", "2.5rem 3rem")
            .child(
                split_name_heading(ctx, 3.0, accent, "white")
                    .style("text-transform", "uppercase")
                    .style("letter-spacing", "-0.01em"),
            )
            .child(tagline(ctx, 1.1, "rgba(255, 255, 255, 0.75)"))
            .maybe_child(
                contact_inline(ctx, "  /  ", "rgba(255, 255, 255, 0.8)")
                    .map(|c| c.style("margin-top", "1.25rem")),
            );

        let section_heading = |text: &str| {
            heading(Tag::H2, text)
                .style("font-size", scaled(1.4))
                .style("font-weight", "800")
                .style("text-transform", "uppercase")
                .style("color", INK)
                .style("border-left", format!("6px solid {accent}"))
                .style("padding-left", "0.75rem")
                .style("margin-bottom", "1rem")
        };

        Element::div().child(band).child(
            Element::div()
                .style("padding", "2.25rem 3rem")
                .maybe_child(summary_section(ctx, section_heading("Profile")))
                .maybe_child(experience_section(
                    ctx,
                    section_heading("Experience"),
                    entry_role_first,
                ))
                .maybe_child(skills_section(
                    ctx,
                    section_heading("Skills"),
                    skill_pills(ctx, PillStyle::Filled),
                ))
                .maybe_child(education_section(
                    ctx,
                    section_heading("Education"),
                    education_inline,
                )),
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Slate Header
// ────────────────────────────────────────────────────────────────────────────

pub struct Slate;

impl Layout for Slate {
    fn id(&self) -> TemplateId {
        TemplateId::Slate
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        let accent = ctx.accent();
        let slate = "#334155";

        let band = Element::new(Tag::Header)
            .section(Section::Header)
            .style("background-color", slate)
            .style("color", "white")
            .style("padding", "2.25rem 3rem")
            .style("border-bottom", format!("5px solid {accent}"))
            .child(name_heading(ctx, 2.2).style("color", "white"))
            .child(tagline(ctx, 1.0, "#cbd5e1"))
            .maybe_child(
                contact_inline(ctx, "   ", "#e2e8f0").map(|c| c.style("margin-top", "0.9rem")),
            );

        let side = Element::new(Tag::Aside)
            .style("width", "32%")
            .maybe_child(education_section(
                ctx,
                label_heading("Education", slate),
                education_stacked,
            ))
            .maybe_child(skills_section(
                ctx,
                label_heading("Skills", slate),
                skill_bullets(ctx, 1),
            ));
        let main = Element::new(Tag::Main)
            .style("width", "68%")
            .maybe_child(summary_section(ctx, label_heading("Summary", accent)))
            .maybe_child(experience_section(
                ctx,
                label_heading("Experience", accent),
                entry_company_first,
            ));

        Element::div().child(band).child(
            Element::div()
                .style("display", "flex")
                .style("gap", "2.25rem")
                .style("padding", "2rem 3rem")
                .child(main)
                .child(side),
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Color Blocks
// ────────────────────────────────────────────────────────────────────────────

/// Each section heading sits on its own accent block.
pub struct Blocks;

impl Layout for Blocks {
    fn id(&self) -> TemplateId {
        TemplateId::Blocks
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Element {
        let accent = ctx.accent();
        let block_heading = |text: &str| {
            heading(Tag::H2, text)
                .style("display", "inline-block")
                .style("background-color", accent)
                .style("color", "white")
                .style("font-size", scaled(0.95))
                .style("font-weight", "700")
                .style("text-transform", "uppercase")
                .style("letter-spacing", "0.08em")
                .style("padding", "0.3rem 0.8rem")
                .style("margin-bottom", "0.9rem")
        };

        let band = Element::new(Tag::Header)
            .section(Section::Header)
            .style("display", "flex")
            .child(
                Element::div()
                    .style("width", "1.25rem")
                    .style("background-color", accent),
            )
            .child(
                Element::div()
                    .style("flex", "1")
                    .style("background-color", accent_tint(accent, 10))
                    .style("padding", "2rem 2.5rem")
                    .child(name_heading(ctx, 2.4).style("color", INK))
                    .child(tagline(ctx, 1.05, MUTED_TEXT))
                    .maybe_child(
                        contact_inline(ctx, "  ·  ", MUTED_TEXT)
                            .map(|c| c.style("margin-top", "0.75rem")),
                    ),
            );

        Element::div().child(band).child(
            Element::div()
                .style("padding", "2rem 3rem")
                .maybe_child(summary_section(ctx, block_heading("Profile")))
                .maybe_child(experience_section(
                    ctx,
                    block_heading("Experience"),
                    entry_role_first,
                ))
                .maybe_child(education_section(
                    ctx,
                    block_heading("Education"),
                    education_inline,
                ))
                .maybe_child(skills_section(
                    ctx,
                    block_heading("Skills"),
                    skill_pills(ctx, PillStyle::Tinted),
                )),
        )
    }
}
