//! Sub-layouts shared by several templates: headers, contact lines, section
//! wrappers, entry blocks and skill renderings.
//!
//! Section builders return `None` when the backing data is empty so layouts
//! can drop the whole section, heading included.

use super::context::RenderContext;
use super::tree::{Element, Node, Section, Tag};
use crate::models::{EducationEntry, ExperienceEntry, PersonalInfo, StyleConfiguration};

pub const PAGE_WIDTH: &str = "210mm";
/// One millimetre short of A4 so capture rounding never spills a blank page.
pub const PAGE_MIN_HEIGHT: &str = "296mm";

pub const INK: &str = "#111827";
pub const BODY_TEXT: &str = "#374151";
pub const MUTED_TEXT: &str = "#6b7280";
pub const FAINT_TEXT: &str = "#9ca3af";
pub const RULE: &str = "#e5e7eb";

/// A size relative to the inherited base font size.
pub fn scaled(factor: f32) -> String {
    format!("{factor}em")
}

/// A light wash of the accent color over white.
pub fn accent_tint(accent: &str, percent: u8) -> String {
    format!("color-mix(in srgb, {accent} {percent}%, white)")
}

/// Puts the page frame (size, background, base font) in front of the layout's
/// own root declarations so everything below inherits it.
pub fn page_frame(layout_root: Element, style: &StyleConfiguration) -> Element {
    let mut frame = vec![
        ("width", PAGE_WIDTH.to_string()),
        ("min-height", PAGE_MIN_HEIGHT.to_string()),
        ("background-color", "white".to_string()),
        ("font-family", style.font_family.css_stack().to_string()),
        ("font-size", format!("{}pt", style.font_size)),
        ("color", BODY_TEXT.to_string()),
        ("box-sizing", "border-box".to_string()),
        ("overflow-wrap", "break-word".to_string()),
    ];
    frame.extend(layout_root.styles);
    Element {
        styles: frame,
        ..layout_root
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Text primitives
// ────────────────────────────────────────────────────────────────────────────

pub fn heading(tag: Tag, text: &str) -> Element {
    Element::new(tag).text(text)
}

/// A heading colored with the accent.
pub fn accent_heading(ctx: &RenderContext<'_>, tag: Tag, text: &str) -> Element {
    heading(tag, text).style("color", ctx.accent())
}

/// Small uppercase tracked label, a common section heading style.
pub fn label_heading(text: &str, color: &str) -> Element {
    heading(Tag::H3, text).styles([
        ("text-transform", "uppercase".to_string()),
        ("letter-spacing", "0.12em".to_string()),
        ("font-size", scaled(0.75)),
        ("font-weight", "700".to_string()),
        ("color", color.to_string()),
        ("margin-bottom", "0.75rem".to_string()),
    ])
}

/// Multi-line body text. Never takes the accent color.
pub fn paragraph(text: &str) -> Element {
    Element::new(Tag::P)
        .style("white-space", "pre-line")
        .style("line-height", "1.6")
        .style("color", BODY_TEXT)
        .text(text)
}

pub fn muted(text: &str, factor: f32) -> Element {
    Element::span()
        .style("color", MUTED_TEXT)
        .style("font-size", scaled(factor))
        .text(text)
}

/// Entry description, omitted when blank.
pub fn description(text: &str) -> Option<Element> {
    if text.trim().is_empty() {
        None
    } else {
        Some(
            paragraph(text)
                .style("font-size", scaled(0.9))
                .style("margin-top", "0.4rem"),
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Name and header
// ────────────────────────────────────────────────────────────────────────────

pub fn name_heading(ctx: &RenderContext<'_>, size: f32) -> Element {
    heading(Tag::H1, &ctx.info().full_name).styles([
        ("font-size", scaled(size)),
        ("font-weight", "700".to_string()),
        ("line-height", "1.1".to_string()),
    ])
}

/// Name with the first token and the remainder styled separately.
///
/// A single-word name renders only the first span: no separator, no rest.
pub fn split_name_heading(
    ctx: &RenderContext<'_>,
    size: f32,
    first_color: &str,
    rest_color: &str,
) -> Element {
    let parts = ctx.name_parts();
    let mut h1 = Element::new(Tag::H1)
        .style("font-size", scaled(size))
        .style("font-weight", "800")
        .style("line-height", "1.05")
        .child(Element::span().style("color", first_color).text(parts.first));
    if !parts.rest.is_empty() {
        h1 = h1
            .text(" ")
            .child(Element::span().style("color", rest_color).text(parts.rest));
    }
    h1
}

pub fn tagline(ctx: &RenderContext<'_>, factor: f32, color: &str) -> Element {
    Element::new(Tag::P)
        .style("font-size", scaled(factor))
        .style("color", color)
        .style("margin-top", "0.35rem")
        .text(ctx.tagline())
}

// ────────────────────────────────────────────────────────────────────────────
// Contact details
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    Linkedin,
}

impl ContactKind {
    pub fn label(self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Phone => "Phone",
            ContactKind::Location => "Location",
            ContactKind::Linkedin => "LinkedIn",
        }
    }
}

/// Non-empty contact values in display order.
pub fn contact_items(info: &PersonalInfo) -> Vec<(ContactKind, &str)> {
    [
        (ContactKind::Email, info.email.as_str()),
        (ContactKind::Phone, info.phone.as_str()),
        (ContactKind::Location, info.location.as_str()),
        (ContactKind::Linkedin, info.linkedin.as_str()),
    ]
    .into_iter()
    .filter(|(_, v)| !v.trim().is_empty())
    .collect()
}

/// Contact values on one line joined by `separator`.
pub fn contact_inline(ctx: &RenderContext<'_>, separator: &str, color: &str) -> Option<Element> {
    let items = contact_items(ctx.info());
    if items.is_empty() {
        return None;
    }
    let line = items
        .iter()
        .map(|(_, v)| *v)
        .collect::<Vec<_>>()
        .join(separator);
    Some(
        Element::div()
            .section(Section::Contact)
            .style("font-size", scaled(0.9))
            .style("color", color)
            .text(line),
    )
}

/// Contact values one per line, optionally prefixed with their label.
pub fn contact_stack(ctx: &RenderContext<'_>, labelled: bool, color: &str) -> Option<Element> {
    let items = contact_items(ctx.info());
    if items.is_empty() {
        return None;
    }
    let rows = items.into_iter().map(|(kind, value)| {
        let row = Element::div().style("margin-bottom", "0.3rem");
        if labelled {
            row.child(
                Element::span()
                    .style("font-weight", "600")
                    .style("margin-right", "0.4rem")
                    .text(format!("{}:", kind.label())),
            )
            .text(value)
        } else {
            row.text(value)
        }
    });
    Some(
        Element::div()
            .section(Section::Contact)
            .style("font-size", scaled(0.85))
            .style("color", color)
            .children(rows),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

pub fn section_block(section: Section, heading: Element, body: impl Into<Node>) -> Element {
    Element::new(Tag::Section)
        .section(section)
        .style("margin-bottom", "1.5rem")
        .child(heading)
        .child(body)
}

pub fn summary_section(ctx: &RenderContext<'_>, heading: Element) -> Option<Element> {
    ctx.has_summary()
        .then(|| section_block(Section::Summary, heading, paragraph(&ctx.info().summary)))
}

pub fn experience_section(
    ctx: &RenderContext<'_>,
    heading: Element,
    entry: impl Fn(&ExperienceEntry) -> Element,
) -> Option<Element> {
    let entries = &ctx.document.experience;
    if entries.is_empty() {
        return None;
    }
    let list = Element::div()
        .style("display", "flex")
        .style("flex-direction", "column")
        .style("gap", "1.1rem")
        .children(entries.iter().map(entry));
    Some(section_block(Section::Experience, heading, list))
}

pub fn education_section(
    ctx: &RenderContext<'_>,
    heading: Element,
    entry: impl Fn(&EducationEntry) -> Element,
) -> Option<Element> {
    let entries = &ctx.document.education;
    if entries.is_empty() {
        return None;
    }
    let list = Element::div()
        .style("display", "flex")
        .style("flex-direction", "column")
        .style("gap", "0.75rem")
        .children(entries.iter().map(entry));
    Some(section_block(Section::Education, heading, list))
}

pub fn skills_section(ctx: &RenderContext<'_>, heading: Element, body: Element) -> Option<Element> {
    (!ctx.document.skills.is_empty()).then(|| section_block(Section::Skills, heading, body))
}

// ────────────────────────────────────────────────────────────────────────────
// Entry blocks
// ────────────────────────────────────────────────────────────────────────────

/// Role as the headline, company and dates underneath.
pub fn entry_role_first(entry: &ExperienceEntry) -> Element {
    Element::div()
        .child(
            heading(Tag::H4, &entry.role)
                .style("font-weight", "700")
                .style("font-size", scaled(1.1))
                .style("color", INK),
        )
        .child(
            Element::div()
                .style("display", "flex")
                .style("justify-content", "space-between")
                .style("font-size", scaled(0.9))
                .style("color", MUTED_TEXT)
                .child(Element::span().style("font-weight", "500").text(&entry.company))
                .child(Element::span().text(entry.date_range())),
        )
        .maybe_child(description(&entry.description))
}

/// Company as the headline, italic role and dates underneath.
pub fn entry_company_first(entry: &ExperienceEntry) -> Element {
    Element::div()
        .child(
            heading(Tag::H4, &entry.company)
                .style("font-weight", "700")
                .style("font-size", scaled(1.1))
                .style("color", INK),
        )
        .child(
            Element::div()
                .style("display", "flex")
                .style("justify-content", "space-between")
                .style("font-size", scaled(0.9))
                .style("color", MUTED_TEXT)
                .child(Element::span().style("font-style", "italic").text(&entry.role))
                .child(Element::span().text(entry.date_range())),
        )
        .maybe_child(description(&entry.description))
}

/// Role and dates on one baseline, company on its own line.
pub fn entry_role_with_dates(entry: &ExperienceEntry, date_color: &str) -> Element {
    Element::div()
        .child(
            Element::div()
                .style("display", "flex")
                .style("justify-content", "space-between")
                .style("align-items", "baseline")
                .child(
                    heading(Tag::H4, &entry.role)
                        .style("font-weight", "700")
                        .style("font-size", scaled(1.05))
                        .style("color", INK),
                )
                .child(
                    Element::span()
                        .style("font-size", scaled(0.85))
                        .style("font-weight", "600")
                        .style("color", date_color)
                        .text(entry.date_range()),
                ),
        )
        .child(
            Element::div()
                .style("font-weight", "500")
                .style("color", BODY_TEXT)
                .text(&entry.company),
        )
        .maybe_child(description(&entry.description))
}

pub fn education_stacked(entry: &EducationEntry) -> Element {
    Element::div()
        .child(
            Element::div()
                .style("font-weight", "600")
                .style("color", INK)
                .text(&entry.school),
        )
        .child(Element::div().style("font-size", scaled(0.9)).text(&entry.degree))
        .child(muted(&entry.year, 0.8))
}

/// Stacked entry that inherits its color, for dark or accent backgrounds.
pub fn education_on_color(entry: &EducationEntry) -> Element {
    Element::div()
        .child(Element::div().style("font-weight", "600").text(&entry.school))
        .child(Element::div().style("font-size", scaled(0.9)).text(&entry.degree))
        .child(
            Element::div()
                .style("font-size", scaled(0.8))
                .style("opacity", "0.75")
                .text(&entry.year),
        )
}

/// Degree and school on one line, year right-aligned.
pub fn education_inline(entry: &EducationEntry) -> Element {
    Element::div()
        .style("display", "flex")
        .style("justify-content", "space-between")
        .style("align-items", "baseline")
        .child(
            Element::div()
                .child(Element::span().style("font-weight", "600").text(&entry.degree))
                .maybe_child(
                    (!entry.degree.is_empty() && !entry.school.is_empty())
                        .then(|| Element::span().text(", ")),
                )
                .child(Element::span().text(&entry.school)),
        )
        .child(muted(&entry.year, 0.85))
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PillStyle {
    /// Thin grey outline, rounded.
    Outline,
    /// Solid accent background, white text.
    Filled,
    /// Accent wash background, dark text.
    Tinted,
    /// Translucent white, for pills sitting on an accent background.
    OnAccent,
}

pub fn skill_pills(ctx: &RenderContext<'_>, pill: PillStyle) -> Element {
    let accent = ctx.accent();
    let pills = ctx.document.skills.iter().map(|skill| {
        let base = Element::span()
            .style("display", "inline-block")
            .style("font-size", scaled(0.85))
            .style("padding", "0.2rem 0.6rem");
        let styled = match pill {
            PillStyle::Outline => base
                .style("border", format!("1px solid {RULE}"))
                .style("border-radius", "9999px")
                .style("color", MUTED_TEXT),
            PillStyle::Filled => base
                .style("background-color", accent)
                .style("border-radius", "0.25rem")
                .style("color", "white"),
            PillStyle::Tinted => base
                .style("background-color", accent_tint(accent, 15))
                .style("border-radius", "0.25rem")
                .style("color", INK),
            PillStyle::OnAccent => base
                .style("background-color", "rgba(255, 255, 255, 0.2)")
                .style("border-radius", "0.25rem")
                .style("color", "white"),
        };
        styled.text(skill)
    });
    Element::div()
        .style("display", "flex")
        .style("flex-wrap", "wrap")
        .style("gap", "0.4rem")
        .children(pills)
}

/// Bulleted list, split into `columns` grid columns.
pub fn skill_bullets(ctx: &RenderContext<'_>, columns: u8) -> Element {
    Element::new(Tag::Ul)
        .style("display", "grid")
        .style("grid-template-columns", format!("repeat({columns}, minmax(0, 1fr))"))
        .style("gap", "0.25rem 1rem")
        .style("padding-left", "1.1rem")
        .style("font-size", scaled(0.9))
        .children(
            ctx.document
                .skills
                .iter()
                .map(|skill| Element::new(Tag::Li).text(skill)),
        )
}

/// Skills as a single run of text.
pub fn skill_inline(ctx: &RenderContext<'_>, separator: &str) -> Element {
    Element::new(Tag::P)
        .style("line-height", "1.6")
        .style("color", BODY_TEXT)
        .text(ctx.document.skills.join(separator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ResumeDocument, StyleConfiguration};

    #[test]
    fn test_split_name_heading_single_word_has_no_trailing_space() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.full_name = "Madonna".to_string();
        let style = StyleConfiguration::default();
        let ctx = RenderContext::new(&doc, &style);

        let h1 = split_name_heading(&ctx, 2.0, "red", "black");
        assert_eq!(h1.text_content(), "Madonna");
        assert_eq!(h1.children.len(), 1);
    }

    #[test]
    fn test_split_name_heading_colors_first_name_only() {
        let doc = ResumeDocument::seed();
        let style = StyleConfiguration::default();
        let ctx = RenderContext::new(&doc, &style);

        let h1 = split_name_heading(&ctx, 2.0, "red", "black");
        assert_eq!(h1.text_content(), "Alex Anderson");
        match &h1.children[0] {
            Node::Element(first) => assert_eq!(first.style_value("color"), Some("red")),
            other => panic!("expected span, got {other:?}"),
        }
    }

    #[test]
    fn test_contact_items_skip_empty_values() {
        let info = PersonalInfo {
            email: "a@b.c".to_string(),
            location: "  ".to_string(),
            ..PersonalInfo::default()
        };
        assert_eq!(contact_items(&info), vec![(ContactKind::Email, "a@b.c")]);
    }

    #[test]
    fn test_empty_lists_produce_no_sections() {
        let doc = ResumeDocument::default();
        let style = StyleConfiguration::default();
        let ctx = RenderContext::new(&doc, &style);

        assert!(experience_section(&ctx, heading(Tag::H2, "Experience"), entry_role_first).is_none());
        assert!(education_section(&ctx, heading(Tag::H2, "Education"), education_stacked).is_none());
        assert!(skills_section(&ctx, heading(Tag::H2, "Skills"), skill_bullets(&ctx, 2)).is_none());
        assert!(summary_section(&ctx, heading(Tag::H2, "Profile")).is_none());
        assert!(contact_inline(&ctx, " | ", MUTED_TEXT).is_none());
    }

    #[test]
    fn test_page_frame_sets_size_and_font_first() {
        let style = StyleConfiguration {
            font_size: 12.5,
            ..StyleConfiguration::default()
        };
        let framed = page_frame(Element::div().style("display", "flex"), &style);
        assert_eq!(framed.style_value("width"), Some("210mm"));
        assert_eq!(framed.style_value("min-height"), Some("296mm"));
        assert_eq!(framed.style_value("font-size"), Some("12.5pt"));
        assert_eq!(framed.style_value("display"), Some("flex"));
    }

    #[test]
    fn test_description_omitted_when_blank() {
        assert!(description(" \n ").is_none());
        assert!(description("• Shipped it").is_some());
    }
}
