//! Export Pipeline — rendered page → PDF file.
//!
//! The pipeline waits for the page to settle (web fonts, layout), serialises the
//! unscaled visual tree to HTML, hands it to a [`PdfConverter`] with the fixed
//! capture options, and writes the bytes under the output directory.
//!
//! At most one export runs at a time; the in-progress flag is released whether
//! the export succeeds or fails.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::config::Config;
use crate::render::VisualDocument;

pub mod converter;

pub use converter::{PdfConverter, WkhtmltopdfConverter, DEFAULT_CONVERTER_BINARY};

#[cfg(test)]
pub use converter::MockPdfConverter;

pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(800);
pub const DEFAULT_READY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("An export is already in progress")]
    AlreadyInProgress,

    #[error("Could not start converter '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Converter failed ({status}): {stderr}")]
    Converter { status: String, stderr: String },

    #[error("Converter produced no output")]
    EmptyOutput,

    #[error("Could not build the export document: {0}")]
    Render(#[from] askama::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Capture options
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    A4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
}

/// Fixed configuration handed to the converter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureOptions {
    pub margin_mm: f32,
    /// Lossy (JPEG) image quality in `0.0..=1.0`.
    pub image_quality: f32,
    /// Raster scale relative to CSS pixels.
    pub scale: f32,
    pub format: PageFormat,
    pub orientation: Orientation,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            margin_mm: 0.0,
            image_quality: 0.98,
            scale: 2.0,
            format: PageFormat::A4,
            orientation: Orientation::Portrait,
        }
    }
}

impl CaptureOptions {
    pub fn image_quality_percent(&self) -> u8 {
        (self.image_quality.clamp(0.0, 1.0) * 100.0).round() as u8
    }

    /// Rendering DPI for the raster scale (96 CSS px per inch).
    pub fn dpi(&self) -> u32 {
        (96.0 * self.scale).round().max(1.0) as u32
    }
}

/// `"Alex Anderson"` → `"Alex_Anderson_Resume.pdf"`. Every whitespace run,
/// leading and trailing ones included, becomes one underscore. Path separators
/// and other characters file systems reject become underscores too, so the
/// result is always a single file name.
pub fn export_filename(full_name: &str) -> String {
    let mut stem = String::with_capacity(full_name.len());
    let mut in_space = false;
    for c in full_name.chars() {
        if c.is_whitespace() {
            if !in_space {
                stem.push('_');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        stem.push(if is_path_hostile(c) { '_' } else { c });
    }
    format!("{stem}_Resume.pdf")
}

fn is_path_hostile(c: char) -> bool {
    matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') || c.is_control()
}

// ────────────────────────────────────────────────────────────────────────────
// Settle step
// ────────────────────────────────────────────────────────────────────────────

/// How the pipeline waits between the export trigger and capture.
#[derive(Debug, Clone)]
pub enum SettleStrategy {
    FixedDelay(Duration),
    /// Waits for the host to flip the flag to `true`, or for `timeout`.
    ReadySignal {
        ready: watch::Receiver<bool>,
        timeout: Duration,
    },
}

impl Default for SettleStrategy {
    fn default() -> Self {
        SettleStrategy::FixedDelay(DEFAULT_SETTLE_DELAY)
    }
}

impl SettleStrategy {
    pub fn ready_signal(ready: watch::Receiver<bool>) -> Self {
        SettleStrategy::ReadySignal {
            ready,
            timeout: DEFAULT_READY_TIMEOUT,
        }
    }

    pub async fn settle(&self) {
        match self {
            SettleStrategy::FixedDelay(delay) => tokio::time::sleep(*delay).await,
            SettleStrategy::ReadySignal { ready, timeout } => {
                let mut ready = ready.clone();
                match tokio::time::timeout(*timeout, ready.wait_for(|r| *r)).await {
                    Ok(Ok(_)) => {}
                    Ok(Err(_)) => warn!("Styles-ready signal dropped; capturing anyway"),
                    Err(_) => warn!(
                        "Styles not ready after {}ms; capturing anyway",
                        timeout.as_millis()
                    ),
                };
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedPdf {
    pub path: PathBuf,
    pub filename: String,
    pub size_bytes: usize,
}

pub struct ExportPipeline {
    converter: Arc<dyn PdfConverter>,
    settle: SettleStrategy,
    options: CaptureOptions,
    output_dir: PathBuf,
    in_progress: AtomicBool,
}

/// Clears the in-progress flag when the export finishes, however it finishes.
struct InProgressGuard<'a>(&'a AtomicBool);

impl Drop for InProgressGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ExportPipeline {
    pub fn new(converter: Arc<dyn PdfConverter>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            converter,
            settle: SettleStrategy::default(),
            options: CaptureOptions::default(),
            output_dir: output_dir.into(),
            in_progress: AtomicBool::new(false),
        }
    }

    /// wkhtmltopdf with the configured fixed settle delay.
    pub fn from_config(config: &Config) -> Self {
        let converter = Arc::new(WkhtmltopdfConverter::new(config.converter_binary.clone()));
        Self::new(converter, config.export_dir.clone())
            .with_settle(SettleStrategy::FixedDelay(config.export_settle_delay))
    }

    pub fn with_settle(mut self, settle: SettleStrategy) -> Self {
        self.settle = settle;
        self
    }

    pub fn options(&self) -> &CaptureOptions {
        &self.options
    }

    pub fn is_in_progress(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }

    fn begin(&self) -> Result<InProgressGuard<'_>, ExportError> {
        self.in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ExportError::AlreadyInProgress)?;
        Ok(InProgressGuard(&self.in_progress))
    }

    /// Settles, captures `page` at full size, converts and writes the PDF.
    pub async fn export(
        &self,
        page: &VisualDocument,
        full_name: &str,
    ) -> Result<ExportedPdf, ExportError> {
        let _guard = self.begin()?;
        let filename = export_filename(full_name);
        info!("Exporting {filename}");

        self.settle.settle().await;

        let html = page.unscaled().to_html_document()?;
        let bytes: Bytes = self.converter.convert(&html, &self.options).await?;
        if bytes.is_empty() {
            return Err(ExportError::EmptyOutput);
        }

        tokio::fs::create_dir_all(&self.output_dir).await?;
        let path = self.output_dir.join(&filename);
        tokio::fs::write(&path, &bytes).await?;

        info!("Exported {} ({} bytes)", path.display(), bytes.len());
        Ok(ExportedPdf {
            path,
            filename,
            size_bytes: bytes.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ResumeDocument, StyleConfiguration};
    use crate::render::render;
    use tokio::time::Instant;

    fn seed_page() -> VisualDocument {
        render(&ResumeDocument::seed(), &StyleConfiguration::default())
    }

    #[test]
    fn test_export_filename_replaces_whitespace_runs() {
        assert_eq!(export_filename("Alex Anderson"), "Alex_Anderson_Resume.pdf");
        assert_eq!(export_filename("Mary  Ann\tLee"), "Mary_Ann_Lee_Resume.pdf");
        assert_eq!(export_filename("Madonna"), "Madonna_Resume.pdf");
        assert_eq!(export_filename(" Alex "), "_Alex__Resume.pdf");
        assert_eq!(export_filename(""), "_Resume.pdf");
    }

    #[test]
    fn test_export_filename_neutralises_path_separators() {
        assert_eq!(export_filename("AC/DC"), "AC_DC_Resume.pdf");
        assert_eq!(export_filename("/etc/passwd"), "_etc_passwd_Resume.pdf");
        assert_eq!(export_filename("C:\\Users\\x"), "C__Users_x_Resume.pdf");
        assert_eq!(export_filename("a?b*c|d"), "a_b_c_d_Resume.pdf");
        for name in ["AC/DC", "/tmp/x", "..", "a\\b"] {
            let filename = export_filename(name);
            assert_eq!(
                std::path::Path::new(&filename).file_name().and_then(|f| f.to_str()),
                Some(filename.as_str()),
                "{name}"
            );
        }
    }

    #[test]
    fn test_default_capture_options() {
        let options = CaptureOptions::default();
        assert_eq!(options.margin_mm, 0.0);
        assert_eq!(options.image_quality_percent(), 98);
        assert_eq!(options.dpi(), 192);
        assert_eq!(options.format, PageFormat::A4);
        assert_eq!(options.orientation, Orientation::Portrait);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_delay_waits_full_duration() {
        let start = Instant::now();
        SettleStrategy::default().settle().await;
        assert!(start.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ready_signal_returns_once_ready() {
        let (tx, rx) = watch::channel(false);
        let settle = SettleStrategy::ready_signal(rx);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            let _ = tx.send(true);
        });

        let start = Instant::now();
        settle.settle().await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(50));
        assert!(elapsed < DEFAULT_READY_TIMEOUT);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ready_signal_falls_back_to_timeout() {
        let (_tx, rx) = watch::channel(false);
        let settle = SettleStrategy::ReadySignal {
            ready: rx,
            timeout: Duration::from_millis(300),
        };
        let start = Instant::now();
        settle.settle().await;
        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_export_writes_unscaled_page_with_fixed_options() {
        let dir = tempfile::tempdir().unwrap();
        let mut converter = MockPdfConverter::new();
        converter
            .expect_convert()
            .withf(|html, options| {
                !html.contains("transform: scale")
                    && html.contains("210mm")
                    && *options == CaptureOptions::default()
            })
            .times(1)
            .returning(|_, _| Ok(Bytes::from_static(b"%PDF-1.4 test")));

        let pipeline = ExportPipeline::new(Arc::new(converter), dir.path());
        let page = seed_page().with_preview_scale(0.6);
        let exported = pipeline.export(&page, "Alex Anderson").await.unwrap();

        assert_eq!(exported.filename, "Alex_Anderson_Resume.pdf");
        assert_eq!(exported.path, dir.path().join("Alex_Anderson_Resume.pdf"));
        assert_eq!(std::fs::read(&exported.path).unwrap(), b"%PDF-1.4 test");
        assert!(!pipeline.is_in_progress());
    }

    #[tokio::test(start_paused = true)]
    async fn test_export_stays_inside_output_dir_for_names_with_slashes() {
        let dir = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let mut converter = MockPdfConverter::new();
        converter
            .expect_convert()
            .times(2)
            .returning(|_, _| Ok(Bytes::from_static(b"%PDF")));
        let pipeline = ExportPipeline::new(Arc::new(converter), dir.path());

        let band = pipeline.export(&seed_page(), "AC/DC").await.unwrap();
        assert_eq!(band.path, dir.path().join("AC_DC_Resume.pdf"));
        assert!(band.path.exists());

        let absolute = format!("{}/x", elsewhere.path().display());
        let escaped = pipeline.export(&seed_page(), &absolute).await.unwrap();
        assert_eq!(escaped.path.parent(), Some(dir.path()));
        assert!(escaped.path.exists());
        assert_eq!(std::fs::read_dir(elsewhere.path()).unwrap().count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_export_releases_in_progress() {
        let dir = tempfile::tempdir().unwrap();
        let mut converter = MockPdfConverter::new();
        converter.expect_convert().returning(|_, _| {
            Err(ExportError::Converter {
                status: "exit status: 1".to_string(),
                stderr: "boom".to_string(),
            })
        });

        let pipeline = ExportPipeline::new(Arc::new(converter), dir.path());
        let err = pipeline.export(&seed_page(), "Alex").await.unwrap_err();
        assert!(matches!(err, ExportError::Converter { .. }));
        assert!(!pipeline.is_in_progress());
        assert!(!dir.path().join("Alex_Resume.pdf").exists());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_converter_output_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut converter = MockPdfConverter::new();
        converter
            .expect_convert()
            .returning(|_, _| Ok(Bytes::new()));

        let pipeline = ExportPipeline::new(Arc::new(converter), dir.path());
        let err = pipeline.export(&seed_page(), "Alex").await.unwrap_err();
        assert!(matches!(err, ExportError::EmptyOutput));
    }

    #[tokio::test]
    async fn test_second_export_is_rejected_while_one_runs() {
        let dir = tempfile::tempdir().unwrap();
        let mut converter = MockPdfConverter::new();
        converter.expect_convert().never();

        let pipeline = ExportPipeline::new(Arc::new(converter), dir.path());
        let _running = pipeline.begin().unwrap();
        assert!(pipeline.is_in_progress());

        let err = pipeline.export(&seed_page(), "Alex").await.unwrap_err();
        assert!(matches!(err, ExportError::AlreadyInProgress));
        assert!(pipeline.is_in_progress());
    }
}
