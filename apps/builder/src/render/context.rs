use crate::models::{PersonalInfo, ResumeDocument, StyleConfiguration};

/// Tagline used when there is no first role to show under the name.
pub const FALLBACK_TAGLINE: &str = "Professional";

/// Everything a layout reads while rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub document: &'a ResumeDocument,
    pub style: &'a StyleConfiguration,
}

impl<'a> RenderContext<'a> {
    pub fn new(document: &'a ResumeDocument, style: &'a StyleConfiguration) -> Self {
        Self { document, style }
    }

    pub fn info(&self) -> &'a PersonalInfo {
        &self.document.personal_info
    }

    pub fn accent(&self) -> &'a str {
        &self.style.accent_color
    }

    /// Role of the first experience entry, or [`FALLBACK_TAGLINE`].
    pub fn tagline(&self) -> &'a str {
        self.document
            .experience
            .first()
            .map(|e| e.role.trim())
            .filter(|role| !role.is_empty())
            .unwrap_or(FALLBACK_TAGLINE)
    }

    pub fn name_parts(&self) -> NameParts {
        NameParts::split(&self.info().full_name)
    }

    pub fn has_summary(&self) -> bool {
        !self.info().summary.trim().is_empty()
    }
}

/// A full name split for layouts that style the first name on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub first: String,
    /// Every token after the first, joined by single spaces. Empty for
    /// single-word names.
    pub rest: String,
}

impl NameParts {
    pub fn split(full_name: &str) -> Self {
        let mut tokens = full_name.split_whitespace();
        let first = tokens.next().unwrap_or_default().to_string();
        let rest = tokens.collect::<Vec<_>>().join(" ");
        Self { first, rest }
    }
}
