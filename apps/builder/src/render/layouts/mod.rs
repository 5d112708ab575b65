//! The twenty built-in layouts, grouped by page structure.

pub mod banner;
pub mod grid;
pub mod minimalist;
pub mod sidebar;
pub mod traditional;

use super::registry::Layout;

pub fn all() -> Vec<Box<dyn Layout>> {
    vec![
        Box::new(sidebar::Modern),
        Box::new(traditional::Classic),
        Box::new(minimalist::Minimalist),
        Box::new(sidebar::Creative),
        Box::new(traditional::Executive),
        Box::new(banner::Corporate),
        Box::new(grid::Deconstructed),
        Box::new(sidebar::Glacial),
        Box::new(grid::Tignum),
        Box::new(banner::Vanguard),
        Box::new(traditional::Academic),
        Box::new(traditional::Ivy),
        Box::new(grid::Quartz),
        Box::new(banner::Horizon),
        Box::new(sidebar::Pillar),
        Box::new(banner::Blocks),
        Box::new(traditional::Cesta),
        Box::new(grid::Urban),
        Box::new(banner::Slate),
        Box::new(traditional::Noble),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::models::style::ACCENT_PRESETS;
    use crate::models::{ExperienceEntry, ResumeDocument, StyleConfiguration, TemplateId};
    use crate::render::registry::render;
    use crate::render::tree::{Element, Node, Section, Tag, VisualDocument};

    fn style_for(template: TemplateId, accent: &str) -> StyleConfiguration {
        StyleConfiguration {
            template,
            accent_color: accent.to_string(),
            ..StyleConfiguration::default()
        }
    }

    /// Text runs drawn in `accent` (directly or inherited from an ancestor)
    /// that sit outside any heading. Experience date labels are accent markers
    /// and are skipped.
    fn accent_body_text(rendered: &VisualDocument, accent: &str, markers: &[String]) -> Vec<String> {
        fn visit<'a>(
            el: &'a Element,
            inherited: Option<&'a str>,
            in_heading: bool,
            accent: &str,
            markers: &[String],
            out: &mut Vec<String>,
        ) {
            let color = el.style_value("color").or(inherited);
            let in_heading = in_heading || el.tag.is_heading();
            for child in &el.children {
                match child {
                    Node::Element(child) => visit(child, color, in_heading, accent, markers, out),
                    Node::Text(text) => {
                        if !in_heading
                            && color == Some(accent)
                            && !text.trim().is_empty()
                            && !markers.contains(text)
                        {
                            out.push(text.clone());
                        }
                    }
                }
            }
        }

        let mut out = Vec::new();
        visit(&rendered.root, None, false, accent, markers, &mut out);
        out
    }

    #[test]
    fn test_every_layout_renders_a4_page() {
        let doc = ResumeDocument::seed();
        for template in TemplateId::ALL {
            let rendered = render(&doc, &style_for(template, "#2563eb"));
            assert_eq!(rendered.root.style_value("width"), Some("210mm"), "{template}");
            assert_eq!(rendered.root.style_value("min-height"), Some("296mm"), "{template}");
        }
    }

    #[test]
    fn test_seed_document_shows_every_section_in_every_layout() {
        let doc = ResumeDocument::seed();
        for template in TemplateId::ALL {
            let rendered = render(&doc, &style_for(template, "#0ea5e9"));
            for section in [
                Section::Header,
                Section::Contact,
                Section::Summary,
                Section::Experience,
                Section::Education,
                Section::Skills,
            ] {
                assert!(rendered.has_section(section), "{template} is missing {section:?}");
            }
        }
    }

    #[test]
    fn test_no_experience_means_no_experience_section() {
        let mut doc = ResumeDocument::seed();
        doc.experience.clear();
        for template in TemplateId::ALL {
            let rendered = render(&doc, &style_for(template, "#059669"));
            assert!(!rendered.has_section(Section::Experience), "{template}");
        }
    }

    #[test]
    fn test_empty_document_renders_only_the_header() {
        let doc = ResumeDocument::default();
        for template in TemplateId::ALL {
            let rendered = render(&doc, &style_for(template, "#7c3aed"));
            assert_eq!(rendered.sections(), vec![Section::Header], "{template}");
        }
    }

    #[test]
    fn test_no_empty_column_wrappers_without_education_or_skills() {
        let mut doc = ResumeDocument::seed();
        doc.education.clear();
        doc.skills.clear();
        for template in TemplateId::ALL {
            let rendered = render(&doc, &style_for(template, "#db2777"));
            let mut empty_wrappers = 0;
            rendered.root.walk(&mut |el| {
                let is_layout_box = matches!(el.style_value("display"), Some("grid" | "flex"));
                if is_layout_box && el.section.is_none() && el.children.is_empty() {
                    empty_wrappers += 1;
                }
            });
            assert_eq!(empty_wrappers, 0, "{template}");
        }
    }

    #[test]
    fn test_accent_never_colors_body_text() {
        let doc = ResumeDocument::seed();
        let date_labels: Vec<String> = doc.experience.iter().map(|e| e.date_range()).collect();
        for template in TemplateId::ALL {
            for accent in ACCENT_PRESETS {
                let rendered = render(&doc, &style_for(template, accent));
                let offending = accent_body_text(&rendered, accent, &date_labels);
                assert!(
                    offending.is_empty(),
                    "{template} puts {accent} on body text: {offending:?}"
                );
            }
        }
    }

    #[test]
    fn test_accent_check_sees_inherited_color() {
        let accent = "#2563eb";
        let page = VisualDocument::new(
            Element::div()
                .style("color", accent)
                .child(Element::new(Tag::H2).text("Experience"))
                .child(Element::span().text("Built pipelines")),
        );
        assert_eq!(accent_body_text(&page, accent, &[]), vec!["Built pipelines".to_string()]);
    }

    #[test]
    fn test_single_word_name_renders_once_without_stray_space() {
        let mut doc = ResumeDocument::seed();
        doc.personal_info.full_name = "Madonna".to_string();
        for template in TemplateId::ALL {
            let rendered = render(&doc, &style_for(template, "#1e293b"));
            let header = rendered
                .root
                .find_section(Section::Header)
                .map(|h| h.text_content())
                .unwrap_or_default();
            assert_eq!(header.matches("Madonna").count(), 1, "{template}: {header}");
            assert!(!header.contains("Madonna "), "{template}: {header}");
        }
    }

    #[test]
    fn test_blank_first_role_uses_fallback_tagline() {
        let mut doc = ResumeDocument::seed();
        doc.experience.insert(0, ExperienceEntry::blank());
        let rendered = render(&doc, &style_for(TemplateId::Minimalist, "#dc2626"));
        let header = rendered
            .root
            .find_section(Section::Header)
            .map(|h| h.text_content())
            .unwrap_or_default();
        assert!(header.contains("Professional"));
    }

    mod proptests {
        use proptest::prelude::*;

        use crate::models::{
            EducationEntry, EntryId, ExperienceEntry, FontFamily, PersonalInfo, ResumeDocument,
            StyleConfiguration, TemplateId,
        };
        use crate::render::registry::render;
        use crate::render::tree::Section;

        fn text() -> impl Strategy<Value = String> {
            prop_oneof![
                Just(String::new()),
                Just("   ".to_string()),
                "[A-Za-z<>&\" ]{1,24}",
                "[a-z]{1,8}( [a-z]{1,8}){0,3}",
            ]
        }

        fn experience() -> impl Strategy<Value = ExperienceEntry> {
            (text(), text(), text(), text(), text()).prop_map(
                |(company, role, start_date, end_date, description)| ExperienceEntry {
                    id: EntryId::generate(),
                    company,
                    role,
                    start_date,
                    end_date,
                    description,
                },
            )
        }

        fn education() -> impl Strategy<Value = EducationEntry> {
            (text(), text(), text()).prop_map(|(school, degree, year)| EducationEntry {
                id: EntryId::generate(),
                school,
                degree,
                year,
            })
        }

        fn document() -> impl Strategy<Value = ResumeDocument> {
            (
                (text(), text(), text(), text(), text(), text()),
                prop::collection::vec(experience(), 0..4),
                prop::collection::vec(education(), 0..3),
                prop::collection::vec("[A-Za-z+#]{1,10}", 0..8),
            )
                .prop_map(
                    |((full_name, email, phone, linkedin, location, summary), experience, education, skills)| {
                        ResumeDocument {
                            personal_info: PersonalInfo {
                                full_name,
                                email,
                                phone,
                                linkedin,
                                location,
                                summary,
                            },
                            experience,
                            education,
                            skills,
                        }
                    },
                )
        }

        fn style() -> impl Strategy<Value = StyleConfiguration> {
            (
                prop::sample::select(TemplateId::ALL.to_vec()),
                prop_oneof![Just("#0ea5e9".to_string()), Just("rebeccapurple".to_string())],
                prop::sample::select(vec![FontFamily::Sans, FontFamily::Serif, FontFamily::Poppins]),
                1.0f32..40.0,
            )
                .prop_map(|(template, accent_color, font_family, font_size)| StyleConfiguration {
                    template,
                    accent_color,
                    font_family,
                    font_size,
                })
        }

        proptest! {
            #[test]
            fn test_any_document_renders_in_any_layout(doc in document(), style in style()) {
                let rendered = render(&doc, &style);
                let font_size = format!("{}pt", style.font_size);
                prop_assert!(rendered.has_section(Section::Header));
                prop_assert_eq!(rendered.has_section(Section::Experience), !doc.experience.is_empty());
                prop_assert_eq!(rendered.has_section(Section::Education), !doc.education.is_empty());
                prop_assert_eq!(rendered.has_section(Section::Skills), !doc.skills.is_empty());
                prop_assert_eq!(rendered.root.style_value("font-size"), Some(font_size.as_str()));
            }
        }
    }
}
