//! ATS Evaluation — score a resume for applicant-tracking-system compatibility.
//!
//! The resume arrives as one of three [`AtsPayload`] cases. Scoring itself is
//! entirely the service's job: this module validates input, builds the rubric
//! prompt, and decodes `{ score, feedback }` without second-guessing the score.

use anyhow::Context;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use serde::Serialize;
use tracing::{error, info};

pub mod prompts;

use crate::errors::AppError;
use crate::llm_client::{GenerativeBackend, LlmError, LlmRequest, LlmTask};
use crate::models::{AtsEvaluation, ResumeDocument};

pub const PDF_MEDIA_TYPE: &str = "application/pdf";

pub const EMPTY_TEXT_MESSAGE: &str = "Please paste your resume text before analysing.";
pub const NO_FILE_MESSAGE: &str = "Please upload a PDF resume before analysing.";
pub const MULTIPLE_FILES_MESSAGE: &str = "Please upload a single PDF file.";
pub const NOT_PDF_MESSAGE: &str = "Only PDF files are supported.";
pub const EMPTY_FILE_MESSAGE: &str = "The selected file is empty.";

// ────────────────────────────────────────────────────────────────────────────
// Uploads
// ────────────────────────────────────────────────────────────────────────────

/// A file as the host's upload widget hands it over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Bytes,
}

/// An accepted PDF, base64-encoded for transmission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeUpload {
    pub file_name: String,
    pub media_type: String,
    pub data_base64: String,
}

impl ResumeUpload {
    /// Accepts exactly one file with a PDF media type.
    pub fn from_files(files: &[UploadedFile]) -> Result<Self, AppError> {
        let file = match files {
            [] => return Err(AppError::Validation(NO_FILE_MESSAGE.to_string())),
            [file] => file,
            _ => return Err(AppError::Validation(MULTIPLE_FILES_MESSAGE.to_string())),
        };
        if !is_pdf_media_type(&file.media_type) {
            return Err(AppError::Validation(NOT_PDF_MESSAGE.to_string()));
        }
        if file.bytes.is_empty() {
            return Err(AppError::Validation(EMPTY_FILE_MESSAGE.to_string()));
        }
        Ok(Self {
            file_name: file.name.clone(),
            media_type: PDF_MEDIA_TYPE.to_string(),
            data_base64: STANDARD.encode(&file.bytes),
        })
    }
}

/// `application/pdf`, ignoring case and any parameters.
fn is_pdf_media_type(media_type: &str) -> bool {
    media_type
        .split(';')
        .next()
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(PDF_MEDIA_TYPE))
}

// ────────────────────────────────────────────────────────────────────────────
// Payload and request
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum AtsPayload {
    /// The resume being edited in the builder.
    Document(ResumeDocument),
    /// Resume text pasted by the user.
    Text(String),
    File(ResumeUpload),
}

impl AtsPayload {
    /// Input checks that must pass before the service is called.
    pub fn validate(&self) -> Result<(), AppError> {
        match self {
            AtsPayload::Document(_) => Ok(()),
            AtsPayload::Text(text) if text.trim().is_empty() => {
                Err(AppError::Validation(EMPTY_TEXT_MESSAGE.to_string()))
            }
            AtsPayload::Text(_) => Ok(()),
            AtsPayload::File(upload) if upload.data_base64.is_empty() => {
                Err(AppError::Validation(EMPTY_FILE_MESSAGE.to_string()))
            }
            AtsPayload::File(_) => Ok(()),
        }
    }
}

/// A job description that is blank counts as none.
pub fn normalize_job_description(job_description: Option<&str>) -> Option<&str> {
    job_description.map(str::trim).filter(|jd| !jd.is_empty())
}

pub fn build_request(
    payload: &AtsPayload,
    job_description: Option<&str>,
) -> Result<LlmRequest, AppError> {
    let job_description = normalize_job_description(job_description);
    let request = LlmRequest::new(LlmTask::Ats, prompts::evaluation_schema());

    let request = match payload {
        AtsPayload::Document(document) => {
            let json = serde_json::to_string_pretty(document)
                .context("Failed to serialize resume document for ATS evaluation")?;
            request
                .text(prompts::ats_prompt("below as JSON", job_description))
                .text(format!("Resume JSON:\n{json}"))
        }
        AtsPayload::Text(text) => request
            .text(prompts::ats_prompt("below as plain text", job_description))
            .text(format!("Resume text:\n\"\"\"\n{text}\n\"\"\"")),
        AtsPayload::File(upload) => request
            .text(prompts::ats_prompt(
                "in the attached PDF document",
                job_description,
            ))
            .inline_data(&upload.media_type, &upload.data_base64),
    };
    Ok(request)
}

/// Scores the payload. The returned score is whatever the service produced.
pub async fn evaluate(
    payload: &AtsPayload,
    job_description: Option<&str>,
    llm: &dyn GenerativeBackend,
) -> Result<AtsEvaluation, AppError> {
    payload.validate()?;
    let request = build_request(payload, job_description)?;

    let value = llm.generate_json(&request).await.map_err(|e| {
        error!("ATS evaluation failed: {e}");
        AppError::from(e)
    })?;

    let evaluation: AtsEvaluation = serde_json::from_value(value).map_err(|e| {
        error!("ATS evaluation returned unexpected JSON: {e}");
        AppError::from(LlmError::Parse(e))
    })?;

    info!(
        "ATS evaluation: score={}, {} feedback items",
        evaluation.score,
        evaluation.feedback.len()
    );
    Ok(evaluation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{MockGenerativeBackend, Part};
    use serde_json::json;

    fn pdf(name: &str) -> UploadedFile {
        UploadedFile {
            name: name.to_string(),
            media_type: "application/pdf".to_string(),
            bytes: Bytes::from_static(b"%PDF"),
        }
    }

    #[test]
    fn test_single_pdf_is_accepted_and_encoded() {
        let upload = ResumeUpload::from_files(&[pdf("cv.pdf")]).unwrap();
        assert_eq!(upload.data_base64, "JVBERg==");
        assert_eq!(upload.media_type, "application/pdf");
        assert_eq!(upload.file_name, "cv.pdf");
    }

    #[test]
    fn test_upload_rejects_non_pdf_and_wrong_counts() {
        let docx = UploadedFile {
            media_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                .to_string(),
            ..pdf("cv.docx")
        };
        for files in [vec![], vec![pdf("a.pdf"), pdf("b.pdf")], vec![docx]] {
            let err = ResumeUpload::from_files(&files).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }

    #[test]
    fn test_media_type_parameters_are_ignored() {
        assert!(is_pdf_media_type("Application/PDF; charset=binary"));
        assert!(!is_pdf_media_type("application/pdfx"));
    }

    #[test]
    fn test_blank_job_description_counts_as_none() {
        assert_eq!(normalize_job_description(Some("  \n")), None);
        assert_eq!(normalize_job_description(Some(" Rust dev ")), Some("Rust dev"));
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected_without_calling_service() {
        let mut llm = MockGenerativeBackend::new();
        llm.expect_generate_json().never();

        let err = evaluate(&AtsPayload::Text("   ".to_string()), None, &llm)
            .await
            .unwrap_err();
        assert_eq!(err.to_notice().message, EMPTY_TEXT_MESSAGE);
    }

    #[tokio::test]
    async fn test_document_payload_is_sent_as_json_with_job_description() {
        let mut llm = MockGenerativeBackend::new();
        llm.expect_generate_json()
            .withf(|req| {
                let text = req.prompt_text();
                req.task == LlmTask::Ats
                    && text.contains("\"fullName\": \"Alex Anderson\"")
                    && text.contains("Platform engineer, Kubernetes")
                    && req.schema["properties"]["score"]["type"] == "INTEGER"
            })
            .times(1)
            .returning(|_| Ok(json!({"score": 72, "feedback": ["Add metrics", "Use keywords", "Trim summary"]})));

        let payload = AtsPayload::Document(ResumeDocument::seed());
        let evaluation = evaluate(&payload, Some("Platform engineer, Kubernetes"), &llm)
            .await
            .unwrap();
        assert_eq!(evaluation.score, 72);
        assert_eq!(evaluation.feedback.len(), 3);
    }

    #[tokio::test]
    async fn test_file_payload_is_sent_inline() {
        let mut llm = MockGenerativeBackend::new();
        llm.expect_generate_json()
            .withf(|req| {
                req.parts.iter().any(|p| {
                    matches!(p, Part::InlineData { mime_type, data }
                        if mime_type == "application/pdf" && data == "JVBERg==")
                })
            })
            .returning(|_| Ok(json!({"score": 55, "feedback": []})));

        let upload = ResumeUpload::from_files(&[pdf("cv.pdf")]).unwrap();
        let evaluation = evaluate(&AtsPayload::File(upload), None, &llm).await.unwrap();
        assert_eq!(evaluation.score, 55);
    }

    #[tokio::test]
    async fn test_out_of_range_score_is_passed_through() {
        let mut llm = MockGenerativeBackend::new();
        llm.expect_generate_json()
            .returning(|_| Ok(json!({"score": 140, "feedback": ["ok"]})));

        let evaluation = evaluate(&AtsPayload::Text("Resume".to_string()), None, &llm)
            .await
            .unwrap();
        assert_eq!(evaluation.score, 140);
        assert_eq!(evaluation.display_score(), 100);
    }

    #[tokio::test]
    async fn test_service_failure_maps_to_llm_error() {
        let mut llm = MockGenerativeBackend::new();
        llm.expect_generate_json().returning(|_| {
            Err(LlmError::Api {
                status: 503,
                message: "overloaded".to_string(),
            })
        });

        let err = evaluate(&AtsPayload::Text("Resume".to_string()), None, &llm)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(LlmError::Api { status: 503, .. })));
    }
}
