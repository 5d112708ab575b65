//! Template Renderer — pure mapping from (document, style) to an A4 visual tree.
//!
//! Dispatch is by [`TemplateId`](crate::models::TemplateId) through a
//! [`TemplateRegistry`]; every layout shares the helpers in [`helpers`].

pub mod context;
pub mod helpers;
pub mod html;
pub mod layouts;
pub mod registry;
pub mod tree;

pub use context::{NameParts, RenderContext, FALLBACK_TAGLINE};
pub use registry::{render, Layout, TemplateRegistry};
pub use tree::{Element, Node, Section, Tag, VisualDocument};
