//! Template registry: one [`Layout`] per [`TemplateId`].

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::warn;

use super::context::RenderContext;
use super::helpers::page_frame;
use super::layouts;
use super::tree::{Element, VisualDocument};
use crate::models::{ResumeDocument, StyleConfiguration, TemplateId};

/// A layout strategy. Implementations are pure and must not fail for any
/// document, including a fully empty one.
pub trait Layout: Send + Sync {
    fn id(&self) -> TemplateId;

    /// The page body. The registry adds the A4 frame and base font around it.
    fn render(&self, ctx: &RenderContext<'_>) -> Element;
}

pub struct TemplateRegistry {
    layouts: HashMap<TemplateId, Box<dyn Layout>>,
}

impl TemplateRegistry {
    pub fn empty() -> Self {
        Self {
            layouts: HashMap::new(),
        }
    }

    /// All twenty built-in layouts.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for layout in layouts::all() {
            registry.register(layout);
        }
        registry
    }

    /// Adds or replaces the layout for its id.
    pub fn register(&mut self, layout: Box<dyn Layout>) {
        self.layouts.insert(layout.id(), layout);
    }

    pub fn contains(&self, id: TemplateId) -> bool {
        self.layouts.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Renders with the layout registered for the style's template, or the
    /// fallback layout when that id has none.
    pub fn render(&self, document: &ResumeDocument, style: &StyleConfiguration) -> VisualDocument {
        let ctx = RenderContext::new(document, style);
        let body = match self.resolve(style.template) {
            Some(layout) => layout.render(&ctx),
            None => layouts::minimalist::Minimalist.render(&ctx),
        };
        VisualDocument::new(page_frame(body, style))
    }

    fn resolve(&self, id: TemplateId) -> Option<&dyn Layout> {
        if let Some(layout) = self.layouts.get(&id) {
            return Some(layout.as_ref());
        }
        warn!(
            "No layout registered for '{id}', using '{}'",
            TemplateId::FALLBACK
        );
        self.layouts.get(&TemplateId::FALLBACK).map(|l| l.as_ref())
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_registry() -> &'static TemplateRegistry {
    static REGISTRY: OnceLock<TemplateRegistry> = OnceLock::new();
    REGISTRY.get_or_init(TemplateRegistry::standard)
}

/// Renders a document with the built-in layouts.
pub fn render(document: &ResumeDocument, style: &StyleConfiguration) -> VisualDocument {
    standard_registry().render(document, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tree::Section;

    #[test]
    fn test_standard_registry_covers_every_template() {
        let registry = TemplateRegistry::standard();
        assert_eq!(registry.len(), 20);
        for id in TemplateId::ALL {
            assert!(registry.contains(id), "missing layout for {id}");
        }
    }

    #[test]
    fn test_unregistered_template_falls_back_to_minimalist() {
        let mut registry = TemplateRegistry::empty();
        registry.register(Box::new(layouts::minimalist::Minimalist));

        let doc = ResumeDocument::seed();
        let modern = StyleConfiguration::default();
        let minimalist = StyleConfiguration {
            template: TemplateId::Minimalist,
            ..StyleConfiguration::default()
        };
        assert_eq!(registry.render(&doc, &modern), registry.render(&doc, &minimalist));
    }

    #[test]
    fn test_empty_registry_still_renders() {
        let doc = ResumeDocument::seed();
        let rendered = TemplateRegistry::empty().render(&doc, &StyleConfiguration::default());
        assert!(rendered.has_section(Section::Experience));
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = ResumeDocument::seed();
        for template in TemplateId::ALL {
            let style = StyleConfiguration {
                template,
                ..StyleConfiguration::default()
            };
            assert_eq!(render(&doc, &style), render(&doc, &style));
        }
    }
}
