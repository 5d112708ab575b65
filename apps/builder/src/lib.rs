//! Resume builder core.
//!
//! Holds the in-memory resume document and style, renders it through one of
//! twenty layouts into an A4 visual tree, exports that tree to PDF, and talks to
//! a generative-AI service for free-text intake and ATS scoring.

pub mod ats;
pub mod config;
pub mod editor;
pub mod errors;
pub mod export;
pub mod intake;
pub mod llm_client;
pub mod models;
pub mod render;
pub mod session;
pub mod telemetry;

pub use config::Config;
pub use errors::{AppError, Notice};
pub use models::{
    AtsEvaluation, EducationEntry, EntryId, ExperienceEntry, FontFamily, PersonalInfo,
    ResumeDocument, StyleConfiguration, TemplateId,
};
pub use session::Session;
