//! Session — the single owner of builder state.
//!
//! Holds the document, the style and per-feature state for intake, ATS and
//! export. Each feature has two-phase `begin_*` / `complete_*` methods so a
//! host can dispatch the asynchronous work itself and let features overlap;
//! the `run_*` methods drive a whole flow for hosts that don't need that.
//!
//! The ATS evaluation is cleared by changes to its own inputs (mode, external
//! text, upload, job description) but survives document edits.

use serde::Serialize;
use tracing::{debug, info};

use crate::ats::{self, AtsPayload, ResumeUpload, UploadedFile};
use crate::errors::{AppError, Notice, NoticeKind};
use crate::export::{ExportError, ExportPipeline, ExportedPdf};
use crate::intake::{self, PartialResume};
use crate::llm_client::GenerativeBackend;
use crate::models::style::clamp_font_size;
use crate::models::{AtsEvaluation, FontFamily, ResumeDocument, StyleConfiguration, TemplateId};
use crate::render::{self, VisualDocument};

/// What the ATS panel scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AtsMode {
    /// The document open in the builder.
    #[default]
    Builder,
    ExternalText,
    ExternalFile,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtsState {
    pub mode: AtsMode,
    pub external_text: String,
    pub upload: Option<ResumeUpload>,
    pub job_description: String,
    pub evaluation: Option<AtsEvaluation>,
    pub in_progress: bool,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureState {
    pub in_progress: bool,
    pub notice: Option<Notice>,
}

/// A dispatched ATS request, detached from the session while it runs.
#[derive(Debug, Clone, PartialEq)]
pub struct AtsRequest {
    pub payload: AtsPayload,
    pub job_description: Option<String>,
}

impl AtsRequest {
    pub async fn run(&self, llm: &dyn GenerativeBackend) -> Result<AtsEvaluation, AppError> {
        ats::evaluate(&self.payload, self.job_description.as_deref(), llm).await
    }
}

/// What the export pipeline needs, captured when the export starts.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportJob {
    pub page: VisualDocument,
    pub full_name: String,
}

impl ExportJob {
    pub async fn run(&self, pipeline: &ExportPipeline) -> Result<ExportedPdf, ExportError> {
        pipeline.export(&self.page, &self.full_name).await
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    document: ResumeDocument,
    style: StyleConfiguration,
    ats: AtsState,
    intake: FeatureState,
    export: FeatureState,
    last_export: Option<ExportedPdf>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session over the seed document and default style.
    pub fn new() -> Self {
        Self::with_document(ResumeDocument::seed(), StyleConfiguration::default())
    }

    pub fn with_document(document: ResumeDocument, style: StyleConfiguration) -> Self {
        Self {
            document,
            style,
            ats: AtsState::default(),
            intake: FeatureState::default(),
            export: FeatureState::default(),
            last_export: None,
        }
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    pub fn style(&self) -> &StyleConfiguration {
        &self.style
    }

    pub fn ats(&self) -> &AtsState {
        &self.ats
    }

    pub fn intake(&self) -> &FeatureState {
        &self.intake
    }

    pub fn export(&self) -> &FeatureState {
        &self.export
    }

    pub fn last_export(&self) -> Option<&ExportedPdf> {
        self.last_export.as_ref()
    }

    // ────────────────────────────────────────────────────────────────────────
    // Document and style
    // ────────────────────────────────────────────────────────────────────────

    /// Adopts a document produced by the form editor. Does not touch the ATS
    /// evaluation.
    pub fn adopt(&mut self, document: ResumeDocument) {
        self.document = document;
    }

    /// Applies an editor operation to the current document.
    pub fn edit(&mut self, op: impl FnOnce(&ResumeDocument) -> ResumeDocument) {
        let next = op(&self.document);
        self.adopt(next);
    }

    pub fn set_style(&mut self, style: StyleConfiguration) {
        self.style = style;
    }

    pub fn set_template(&mut self, template: TemplateId) {
        self.style.template = template;
    }

    pub fn set_accent_color(&mut self, color: impl Into<String>) {
        self.style.accent_color = color.into();
    }

    pub fn set_font_family(&mut self, family: FontFamily) {
        self.style.font_family = family;
    }

    /// Slider input: clamped to the editable range and snapped to half points.
    pub fn set_font_size(&mut self, size: f32) {
        self.style.font_size = clamp_font_size(size);
    }

    pub fn render(&self) -> VisualDocument {
        render::render(&self.document, &self.style)
    }

    pub fn render_preview(&self, scale: f32) -> VisualDocument {
        self.render().with_preview_scale(scale)
    }

    // ────────────────────────────────────────────────────────────────────────
    // AI intake
    // ────────────────────────────────────────────────────────────────────────

    /// Marks intake as running. `false` when one is already outstanding.
    pub fn begin_intake(&mut self) -> bool {
        if self.intake.in_progress {
            return false;
        }
        self.intake.in_progress = true;
        self.intake.notice = None;
        true
    }

    /// Merges a successful result; a failure leaves the document untouched.
    pub fn complete_intake(&mut self, result: Result<PartialResume, AppError>) {
        self.intake.in_progress = false;
        match result {
            Ok(partial) => {
                self.document = intake::apply_partial(&self.document, &partial);
                info!("Applied AI intake result");
            }
            Err(err) => {
                let mut notice = err.to_notice();
                if notice.kind == NoticeKind::Failure {
                    notice.message = intake::INTAKE_FAILURE_MESSAGE.to_string();
                }
                self.intake.notice = Some(notice);
            }
        }
    }

    pub async fn run_intake(&mut self, text: &str, llm: &dyn GenerativeBackend) {
        if !self.begin_intake() {
            return;
        }
        let result = intake::parse_resume_text(text, llm).await;
        self.complete_intake(result);
    }

    pub fn dismiss_intake_notice(&mut self) {
        self.intake.notice = None;
    }

    // ────────────────────────────────────────────────────────────────────────
    // ATS evaluation
    // ────────────────────────────────────────────────────────────────────────

    fn invalidate_evaluation(&mut self, reason: &str) {
        if self.ats.evaluation.take().is_some() {
            debug!("ATS evaluation cleared: {reason}");
        }
    }

    pub fn set_ats_mode(&mut self, mode: AtsMode) {
        if self.ats.mode != mode {
            self.ats.mode = mode;
            self.invalidate_evaluation("input mode changed");
        }
    }

    pub fn set_external_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.ats.external_text != text {
            self.ats.external_text = text;
            self.invalidate_evaluation("external text changed");
        }
    }

    /// Selects the file to score. A rejected selection clears the previous one
    /// and leaves a notice.
    pub fn select_upload(&mut self, files: &[UploadedFile]) {
        self.invalidate_evaluation("upload changed");
        match ResumeUpload::from_files(files) {
            Ok(upload) => {
                self.ats.upload = Some(upload);
                self.ats.notice = None;
            }
            Err(err) => {
                self.ats.upload = None;
                self.ats.notice = Some(err.to_notice());
            }
        }
    }

    pub fn clear_upload(&mut self) {
        if self.ats.upload.take().is_some() {
            self.invalidate_evaluation("upload removed");
        }
    }

    pub fn set_job_description(&mut self, job_description: impl Into<String>) {
        let job_description = job_description.into();
        if self.ats.job_description != job_description {
            self.ats.job_description = job_description;
            self.invalidate_evaluation("job description changed");
        }
    }

    fn ats_payload(&self) -> Result<AtsPayload, AppError> {
        let payload = match self.ats.mode {
            AtsMode::Builder => AtsPayload::Document(self.document.clone()),
            AtsMode::ExternalText => AtsPayload::Text(self.ats.external_text.clone()),
            AtsMode::ExternalFile => match &self.ats.upload {
                Some(upload) => AtsPayload::File(upload.clone()),
                None => return Err(AppError::Validation(ats::NO_FILE_MESSAGE.to_string())),
            },
        };
        payload.validate()?;
        Ok(payload)
    }

    /// Clears the previous result and marks the evaluation as running.
    ///
    /// Returns `None`, with a notice set, when the input fails its checks; no
    /// request should be sent then. Calling this again while a request is
    /// outstanding simply starts over.
    pub fn begin_ats_evaluation(&mut self) -> Option<AtsRequest> {
        self.ats.evaluation = None;
        self.ats.notice = None;
        match self.ats_payload() {
            Ok(payload) => {
                self.ats.in_progress = true;
                Some(AtsRequest {
                    payload,
                    job_description: ats::normalize_job_description(Some(
                        self.ats.job_description.as_str(),
                    ))
                    .map(str::to_string),
                })
            }
            Err(err) => {
                self.ats.in_progress = false;
                self.ats.notice = Some(err.to_notice());
                None
            }
        }
    }

    pub fn complete_ats_evaluation(&mut self, result: Result<AtsEvaluation, AppError>) {
        self.ats.in_progress = false;
        match result {
            Ok(evaluation) => self.ats.evaluation = Some(evaluation),
            Err(err) => self.ats.notice = Some(err.to_notice()),
        }
    }

    pub async fn run_ats_evaluation(&mut self, llm: &dyn GenerativeBackend) {
        let Some(request) = self.begin_ats_evaluation() else {
            return;
        };
        let result = request.run(llm).await;
        self.complete_ats_evaluation(result);
    }

    pub fn dismiss_ats_notice(&mut self) {
        self.ats.notice = None;
    }

    // ────────────────────────────────────────────────────────────────────────
    // Export
    // ────────────────────────────────────────────────────────────────────────

    /// Captures the current page for export. `None` while one is running.
    pub fn begin_export(&mut self) -> Option<ExportJob> {
        if self.export.in_progress {
            return None;
        }
        self.export.in_progress = true;
        self.export.notice = None;
        Some(ExportJob {
            page: self.render(),
            full_name: self.document.personal_info.full_name.clone(),
        })
    }

    pub fn complete_export(&mut self, result: Result<ExportedPdf, ExportError>) {
        self.export.in_progress = false;
        match result {
            Ok(exported) => self.last_export = Some(exported),
            Err(err) => self.export.notice = Some(AppError::from(err).to_notice()),
        }
    }

    pub async fn run_export(&mut self, pipeline: &ExportPipeline) {
        let Some(job) = self.begin_export() else {
            return;
        };
        let result = job.run(pipeline).await;
        self.complete_export(result);
    }

    pub fn dismiss_export_notice(&mut self) {
        self.export.notice = None;
    }
}
