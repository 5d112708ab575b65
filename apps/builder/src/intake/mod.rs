//! AI Intake — free text → structured resume, via the generative backend.
//!
//! The model answers with the resume schema minus entry ids. Every returned
//! experience and education entry gets a fresh id here; only the top-level
//! parts the model populated end up in the [`PartialResume`].

use serde::Deserialize;
use tracing::{error, info};

pub mod merge;
pub mod prompts;

pub use merge::{apply_partial, PartialPersonalInfo, PartialResume};

use crate::errors::AppError;
use crate::llm_client::{GenerativeBackend, LlmError, LlmRequest, LlmTask};
use crate::models::{EducationEntry, EntryId, ExperienceEntry};

pub const EMPTY_TEXT_MESSAGE: &str = "Please paste some text about yourself first.";
pub const INTAKE_FAILURE_MESSAGE: &str =
    "Failed to generate resume. Please check your API key or try again.";

// ────────────────────────────────────────────────────────────────────────────
// Model output
// ────────────────────────────────────────────────────────────────────────────

// Strings may come back missing or null; both read as empty.

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ParsedExperience {
    company: Option<String>,
    role: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ParsedEducation {
    school: Option<String>,
    degree: Option<String>,
    year: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ParsedResume {
    personal_info: Option<PartialPersonalInfo>,
    experience: Option<Vec<ParsedExperience>>,
    education: Option<Vec<ParsedEducation>>,
    skills: Option<Vec<String>>,
}

impl From<ParsedExperience> for ExperienceEntry {
    fn from(p: ParsedExperience) -> Self {
        ExperienceEntry {
            id: EntryId::generate(),
            company: p.company.unwrap_or_default(),
            role: p.role.unwrap_or_default(),
            start_date: p.start_date.unwrap_or_default(),
            end_date: p.end_date.unwrap_or_default(),
            description: p.description.unwrap_or_default(),
        }
    }
}

impl From<ParsedEducation> for EducationEntry {
    fn from(p: ParsedEducation) -> Self {
        EducationEntry {
            id: EntryId::generate(),
            school: p.school.unwrap_or_default(),
            degree: p.degree.unwrap_or_default(),
            year: p.year.unwrap_or_default(),
        }
    }
}

impl From<ParsedResume> for PartialResume {
    fn from(p: ParsedResume) -> Self {
        PartialResume {
            personal_info: p.personal_info.filter(|info| !info.is_empty()),
            experience: p
                .experience
                .map(|list| list.into_iter().map(ExperienceEntry::from).collect()),
            education: p
                .education
                .map(|list| list.into_iter().map(EducationEntry::from).collect()),
            skills: p.skills,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Adapter
// ────────────────────────────────────────────────────────────────────────────

pub fn build_request(text: &str) -> LlmRequest {
    LlmRequest::new(LlmTask::Intake, prompts::resume_schema()).text(prompts::parse_resume_prompt(text))
}

/// Parses free text into a partial resume.
///
/// Blank input is rejected before any call. Any service or decoding failure
/// becomes one error; nothing is partially returned.
pub async fn parse_resume_text(
    text: &str,
    llm: &dyn GenerativeBackend,
) -> Result<PartialResume, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(EMPTY_TEXT_MESSAGE.to_string()));
    }

    let value = llm.generate_json(&build_request(text)).await.map_err(|e| {
        error!("Resume parsing failed: {e}");
        AppError::from(e)
    })?;

    let parsed: ParsedResume = serde_json::from_value(value).map_err(|e| {
        error!("Resume parsing returned unexpected JSON: {e}");
        AppError::from(LlmError::Parse(e))
    })?;

    let partial = PartialResume::from(parsed);
    info!(
        "Parsed resume: {} experience, {} education, {} skills",
        partial.experience.as_ref().map_or(0, Vec::len),
        partial.education.as_ref().map_or(0, Vec::len),
        partial.skills.as_ref().map_or(0, Vec::len),
    );
    Ok(partial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::MockGenerativeBackend;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_blank_text_never_calls_the_service() {
        let mut llm = MockGenerativeBackend::new();
        llm.expect_generate_json().never();

        let err = parse_resume_text("  \n\t ", &llm).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_request_embeds_text_and_schema() {
        let mut llm = MockGenerativeBackend::new();
        llm.expect_generate_json()
            .withf(|req| {
                req.task == LlmTask::Intake
                    && req.prompt_text().contains("\"Ten years of Rust\"")
                    && req.schema["properties"]["skills"]["type"] == "ARRAY"
                    && req.schema["properties"]["experience"]["items"]["properties"]
                        .get("id")
                        .is_none()
            })
            .times(1)
            .returning(|_| Ok(json!({})));

        let partial = parse_resume_text("Ten years of Rust", &llm).await.unwrap();
        assert_eq!(partial, PartialResume::default());
    }

    #[tokio::test]
    async fn test_entries_get_fresh_distinct_ids() {
        let mut llm = MockGenerativeBackend::new();
        llm.expect_generate_json().returning(|_| {
            Ok(json!({
                "personalInfo": {"fullName": "Jordan Lee", "email": null},
                "experience": [
                    {"company": "Acme", "role": "Engineer", "startDate": "Jan 2020", "endDate": "Present"},
                    {"company": "Initech", "role": null}
                ],
                "education": [{"school": "State U", "degree": "BSc", "year": "2018"}],
                "skills": ["Rust", "SQL"]
            }))
        });

        let partial = parse_resume_text("some text", &llm).await.unwrap();
        let info = partial.personal_info.unwrap();
        assert_eq!(info.full_name.as_deref(), Some("Jordan Lee"));
        assert_eq!(info.email, None);

        let experience = partial.experience.unwrap();
        assert_eq!(experience.len(), 2);
        assert_ne!(experience[0].id, experience[1].id);
        assert_eq!(experience[1].role, "");
        assert_eq!(experience[0].end_date, "Present");

        let education = partial.education.unwrap();
        assert_eq!(education[0].school, "State U");
        assert_eq!(partial.skills.unwrap(), vec!["Rust".to_string(), "SQL".to_string()]);
    }

    #[tokio::test]
    async fn test_service_failure_is_a_single_error() {
        let mut llm = MockGenerativeBackend::new();
        llm.expect_generate_json().returning(|_| Err(LlmError::EmptyContent));

        let err = parse_resume_text("some text", &llm).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(LlmError::EmptyContent)));
    }

    #[tokio::test]
    async fn test_missing_credential_surfaces_as_such() {
        let mut llm = MockGenerativeBackend::new();
        llm.expect_generate_json()
            .returning(|_| Err(LlmError::MissingCredential));

        let err = parse_resume_text("some text", &llm).await.unwrap_err();
        assert!(matches!(err, AppError::MissingCredential));
    }

    #[tokio::test]
    async fn test_malformed_json_shape_is_rejected() {
        let mut llm = MockGenerativeBackend::new();
        llm.expect_generate_json()
            .returning(|_| Ok(json!({"skills": "Rust, SQL"})));

        let err = parse_resume_text("some text", &llm).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(LlmError::Parse(_))));
    }
}
