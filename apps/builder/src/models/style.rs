//! Visual parameters chosen by the user, independent of resume content.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Accent swatches offered by the design panel. Any other color string is
/// accepted as a custom value.
pub const ACCENT_PRESETS: [&str; 9] = [
    "#0ea5e9", "#2563eb", "#7c3aed", "#db2777", "#dc2626", "#059669", "#1e293b", "#4b5563",
    "#000000",
];

pub const FONT_SIZE_MIN_PT: f32 = 8.0;
pub const FONT_SIZE_MAX_PT: f32 = 14.0;
pub const FONT_SIZE_STEP_PT: f32 = 0.5;
pub const DEFAULT_FONT_SIZE_PT: f32 = 10.5;
pub const DEFAULT_ACCENT: &str = "#0ea5e9";

// ────────────────────────────────────────────────────────────────────────────
// Template identifiers
// ────────────────────────────────────────────────────────────────────────────

/// The twenty layout identifiers.
///
/// Deserializing an unknown identifier does not fail: it resolves to
/// [`TemplateId::FALLBACK`] so that stale or hand-edited style data still renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TemplateId {
    Modern,
    Classic,
    Minimalist,
    Creative,
    Executive,
    Corporate,
    Deconstructed,
    Glacial,
    Tignum,
    Vanguard,
    Academic,
    Ivy,
    Quartz,
    Horizon,
    Pillar,
    Blocks,
    Cesta,
    Urban,
    Slate,
    Noble,
}

impl TemplateId {
    /// Layout used for identifiers nobody recognizes.
    pub const FALLBACK: TemplateId = TemplateId::Minimalist;

    pub const ALL: [TemplateId; 20] = [
        TemplateId::Modern,
        TemplateId::Classic,
        TemplateId::Minimalist,
        TemplateId::Creative,
        TemplateId::Executive,
        TemplateId::Corporate,
        TemplateId::Deconstructed,
        TemplateId::Glacial,
        TemplateId::Tignum,
        TemplateId::Vanguard,
        TemplateId::Academic,
        TemplateId::Ivy,
        TemplateId::Quartz,
        TemplateId::Horizon,
        TemplateId::Pillar,
        TemplateId::Blocks,
        TemplateId::Cesta,
        TemplateId::Urban,
        TemplateId::Slate,
        TemplateId::Noble,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Minimalist => "minimalist",
            TemplateId::Creative => "creative",
            TemplateId::Executive => "executive",
            TemplateId::Corporate => "corporate",
            TemplateId::Deconstructed => "deconstructed",
            TemplateId::Glacial => "glacial",
            TemplateId::Tignum => "tignum",
            TemplateId::Vanguard => "vanguard",
            TemplateId::Academic => "academic",
            TemplateId::Ivy => "ivy",
            TemplateId::Quartz => "quartz",
            TemplateId::Horizon => "horizon",
            TemplateId::Pillar => "pillar",
            TemplateId::Blocks => "blocks",
            TemplateId::Cesta => "cesta",
            TemplateId::Urban => "urban",
            TemplateId::Slate => "slate",
            TemplateId::Noble => "noble",
        }
    }

    /// Name shown in the template picker.
    pub fn display_name(self) -> &'static str {
        match self {
            TemplateId::Modern => "Modern Split",
            TemplateId::Classic => "Classic Professional",
            TemplateId::Minimalist => "Clean Minimalist",
            TemplateId::Creative => "Creative Portfolio",
            TemplateId::Executive => "Executive Suite",
            TemplateId::Corporate => "Corporate Banner",
            TemplateId::Deconstructed => "Deconstructed Grid",
            TemplateId::Glacial => "Glacial Sidebar",
            TemplateId::Tignum => "Tignum Timeline",
            TemplateId::Vanguard => "Vanguard Bold",
            TemplateId::Academic => "Academic CV",
            TemplateId::Ivy => "Ivy League",
            TemplateId::Quartz => "Quartz Cards",
            TemplateId::Horizon => "Horizon Band",
            TemplateId::Pillar => "Pillar Right Rail",
            TemplateId::Blocks => "Color Blocks",
            TemplateId::Cesta => "Cesta Centered",
            TemplateId::Urban => "Urban Mono",
            TemplateId::Slate => "Slate Dark Header",
            TemplateId::Noble => "Noble Serif",
        }
    }

    /// Resolves an identifier string, falling back instead of failing.
    pub fn parse_or_fallback(value: &str) -> Self {
        let wanted = value.trim().to_ascii_lowercase();
        match Self::ALL.iter().find(|id| id.as_str() == wanted) {
            Some(id) => *id,
            None => {
                warn!(
                    "Unknown template id '{value}', falling back to '{}'",
                    Self::FALLBACK.as_str()
                );
                Self::FALLBACK
            }
        }
    }
}

impl From<String> for TemplateId {
    fn from(value: String) -> Self {
        Self::parse_or_fallback(&value)
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fonts
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Sans,
    Serif,
    Poppins,
}

impl FontFamily {
    pub const ALL: [FontFamily; 3] = [FontFamily::Sans, FontFamily::Serif, FontFamily::Poppins];

    /// CSS `font-family` value applied at the document root.
    pub fn css_stack(self) -> &'static str {
        match self {
            FontFamily::Sans => "'Inter', sans-serif",
            FontFamily::Serif => "'Merriweather', serif",
            FontFamily::Poppins => "'Poppins', sans-serif",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FontFamily::Sans => "Inter (Sans)",
            FontFamily::Serif => "Merriweather (Serif)",
            FontFamily::Poppins => "Poppins (Modern)",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Style configuration
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfiguration {
    pub template: TemplateId,
    /// Any CSS color value. Passed through to the renderer untouched.
    pub accent_color: String,
    #[serde(default)]
    pub font_family: FontFamily,
    /// Base size in points. The renderer does not re-validate it.
    pub font_size: f32,
}

impl Default for StyleConfiguration {
    fn default() -> Self {
        Self {
            template: TemplateId::Modern,
            accent_color: DEFAULT_ACCENT.to_string(),
            font_family: FontFamily::Sans,
            font_size: DEFAULT_FONT_SIZE_PT,
        }
    }
}

/// Clamps a slider value to 8–14pt and snaps it to the nearest half point.
///
/// Only the editing UI uses this; the renderer takes whatever it is given.
pub fn clamp_font_size(value: f32) -> f32 {
    if !value.is_finite() {
        return DEFAULT_FONT_SIZE_PT;
    }
    let clamped = value.clamp(FONT_SIZE_MIN_PT, FONT_SIZE_MAX_PT);
    (clamped / FONT_SIZE_STEP_PT).round() * FONT_SIZE_STEP_PT
}
