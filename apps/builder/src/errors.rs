use serde::Serialize;
use thiserror::Error;

use crate::export::ExportError;
use crate::llm_client::LlmError;

/// Application-level error type.
///
/// Every failure a user can see passes through [`AppError::to_notice`], which
/// logs the technical detail and returns the non-technical message to show.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad input caught before any external call. The message is user-facing.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("AI service credential is missing")]
    MissingCredential,

    #[error("LLM error: {0}")]
    Llm(LlmError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingCredential => AppError::MissingCredential,
            other => AppError::Llm(other),
        }
    }
}

/// Which feature area a notice belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Validation,
    Failure,
}

/// A dismissible, user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Validation,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }
}

pub const AI_FAILURE_MESSAGE: &str =
    "The AI service could not process this request. Please check your API key or try again.";
pub const MISSING_CREDENTIAL_MESSAGE: &str =
    "AI features are unavailable because no API key is configured.";
pub const EXPORT_FAILURE_MESSAGE: &str = "PDF export failed. Please try again.";
pub const INTERNAL_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

impl AppError {
    pub fn to_notice(&self) -> Notice {
        match self {
            AppError::Validation(msg) => Notice::validation(msg.clone()),
            AppError::MissingCredential => {
                tracing::warn!("AI request rejected: no credential configured");
                Notice::failure(MISSING_CREDENTIAL_MESSAGE)
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                Notice::failure(AI_FAILURE_MESSAGE)
            }
            AppError::Export(ExportError::AlreadyInProgress) => {
                Notice::validation("An export is already running.")
            }
            AppError::Export(e) => {
                tracing::error!("Export error: {e}");
                Notice::failure(EXPORT_FAILURE_MESSAGE)
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                Notice::failure(INTERNAL_FAILURE_MESSAGE)
            }
        }
    }
}
