use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::{json, Value};

use resume_builder::ats::UploadedFile;
use resume_builder::editor::{self, ExperienceField, PersonalField};
use resume_builder::export::{
    CaptureOptions, ExportError, ExportPipeline, PdfConverter, SettleStrategy,
};
use resume_builder::llm_client::{GenerativeBackend, LlmError, LlmRequest, LlmTask, Part};
use resume_builder::render::Section;
use resume_builder::session::AtsMode;
use resume_builder::{Session, TemplateId};

/// Answers each task with a canned value and records every request.
#[derive(Default)]
struct ScriptedBackend {
    intake: Option<Value>,
    ats: Option<Value>,
    requests: Mutex<Vec<LlmRequest>>,
}

impl ScriptedBackend {
    fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerativeBackend for ScriptedBackend {
    async fn generate_json(&self, request: &LlmRequest) -> Result<Value, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        let answer = match request.task {
            LlmTask::Intake => &self.intake,
            LlmTask::Ats => &self.ats,
        };
        answer.clone().ok_or(LlmError::EmptyContent)
    }
}

struct CountingConverter {
    calls: AtomicUsize,
}

#[async_trait]
impl PdfConverter for CountingConverter {
    async fn convert(&self, html: &str, options: &CaptureOptions) -> Result<Bytes, ExportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(options, &CaptureOptions::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        Ok(Bytes::from(format!("%PDF-1.4 {} bytes of html", html.len())))
    }
}

#[tokio::test]
async fn intake_then_edit_then_score() {
    let backend = ScriptedBackend {
        intake: Some(json!({
            "personalInfo": {"fullName": "Priya Raman", "email": "priya@example.com"},
            "experience": [
                {"company": "Northwind", "role": "Data Engineer", "startDate": "Mar 2019", "endDate": "Present", "description": "Built pipelines"}
            ],
            "education": [],
            "skills": ["Python", "Spark"]
        })),
        ats: Some(json!({"score": 77, "feedback": ["Quantify impact", "Add a summary", "List cloud tools"]})),
        ..ScriptedBackend::default()
    };

    let mut session = Session::new();
    session
        .run_intake("Priya Raman, data engineer at Northwind since 2019", &backend)
        .await;

    let doc = session.document();
    assert_eq!(doc.personal_info.full_name, "Priya Raman");
    assert_eq!(doc.personal_info.phone, "+1 (555) 123-4567");
    assert_eq!(doc.experience.len(), 1);
    assert_eq!(doc.education.len(), 1, "empty education list keeps the seed entry");
    assert_eq!(doc.skills, vec!["Python".to_string(), "Spark".to_string()]);

    let id = doc.experience[0].id.clone();
    session.edit(|d| editor::update_experience(d, &id, ExperienceField::Role, "Senior Data Engineer"));
    assert_eq!(session.document().experience[0].id, id);

    session.set_job_description("Senior data engineer, streaming");
    session.run_ats_evaluation(&backend).await;
    assert_eq!(session.ats().evaluation.as_ref().map(|e| e.score), Some(77));

    session.edit(|d| editor::update_personal_info(d, PersonalField::Summary, "Streaming specialist"));
    assert!(session.ats().evaluation.is_some(), "document edits keep the score");

    session.set_job_description("");
    assert!(session.ats().evaluation.is_none(), "clearing the job description clears the score");

    let requests = backend.requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests[1].prompt_text().contains("Senior Data Engineer"));
}

#[tokio::test]
async fn external_modes_check_input_before_calling() {
    let backend = ScriptedBackend {
        ats: Some(json!({"score": 40, "feedback": ["Use standard headings"]})),
        ..ScriptedBackend::default()
    };
    let mut session = Session::new();

    session.set_ats_mode(AtsMode::ExternalText);
    session.run_ats_evaluation(&backend).await;
    assert!(session.ats().notice.is_some());
    assert_eq!(backend.calls(), 0);

    session.set_ats_mode(AtsMode::ExternalFile);
    session.select_upload(&[UploadedFile {
        name: "resume.pdf".to_string(),
        media_type: "application/pdf".to_string(),
        bytes: Bytes::from_static(b"%PDF-1.7 fake"),
    }]);
    session.run_ats_evaluation(&backend).await;

    assert_eq!(backend.calls(), 1);
    assert_eq!(session.ats().evaluation.as_ref().map(|e| e.score), Some(40));
    let requests = backend.requests.lock().unwrap();
    assert!(requests[0]
        .parts
        .iter()
        .any(|p| matches!(p, Part::InlineData { mime_type, .. } if mime_type == "application/pdf")));
}

#[tokio::test]
async fn failed_intake_keeps_document_and_reports_once() {
    let backend = ScriptedBackend::default();
    let mut session = Session::new();
    let before = session.document().clone();

    session.run_intake("anything", &backend).await;

    assert_eq!(session.document(), &before);
    assert!(!session.intake().in_progress);
    assert!(session.intake().notice.is_some());
}

#[tokio::test(start_paused = true)]
async fn export_writes_named_pdf_for_every_template() {
    let dir = tempfile::tempdir().unwrap();
    let converter = Arc::new(CountingConverter {
        calls: AtomicUsize::new(0),
    });
    let pipeline = ExportPipeline::new(converter.clone(), dir.path())
        .with_settle(SettleStrategy::default());

    let mut session = Session::new();
    for template in TemplateId::ALL {
        session.set_template(template);
        session.run_export(&pipeline).await;
        assert!(session.export().notice.is_none(), "{template}");
    }

    assert_eq!(converter.calls.load(Ordering::SeqCst), TemplateId::ALL.len());
    assert!(dir.path().join("Alex_Anderson_Resume.pdf").exists());
}

#[test]
fn empty_sections_vanish_from_rendered_page() {
    let mut session = Session::new();
    session.edit(|d| {
        let mut next = d.clone();
        next.experience.clear();
        next.skills.clear();
        next
    });

    for template in TemplateId::ALL {
        session.set_template(template);
        let page = session.render_preview(0.5);
        assert!(!page.has_section(Section::Experience), "{template}");
        assert!(!page.has_section(Section::Skills), "{template}");
        assert!(page.has_section(Section::Education), "{template}");
        assert!(page.to_html_fragment().contains("scale(0.5)"));
        assert!(!page.unscaled().to_html_document().unwrap().contains("scale(0.5)"));
    }
}
