use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use super::{CaptureOptions, ExportError, Orientation, PageFormat};

pub const DEFAULT_CONVERTER_BINARY: &str = "wkhtmltopdf";

/// Turns a standalone HTML document into PDF bytes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PdfConverter: Send + Sync {
    async fn convert(&self, html: &str, options: &CaptureOptions) -> Result<Bytes, ExportError>;
}

/// Runs the `wkhtmltopdf` executable, HTML on stdin and PDF on stdout.
#[derive(Debug, Clone)]
pub struct WkhtmltopdfConverter {
    binary: PathBuf,
}

impl Default for WkhtmltopdfConverter {
    fn default() -> Self {
        Self::new(DEFAULT_CONVERTER_BINARY)
    }
}

impl WkhtmltopdfConverter {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn args(options: &CaptureOptions) -> Vec<String> {
        let page_size = match options.format {
            PageFormat::A4 => "A4",
        };
        let orientation = match options.orientation {
            Orientation::Portrait => "Portrait",
        };
        let margin = format!("{}mm", options.margin_mm);

        let mut args: Vec<String> = vec![
            "--quiet".into(),
            "--page-size".into(),
            page_size.into(),
            "--orientation".into(),
            orientation.into(),
        ];
        for side in ["--margin-top", "--margin-right", "--margin-bottom", "--margin-left"] {
            args.push(side.into());
            args.push(margin.clone());
        }
        args.extend([
            "--image-quality".into(),
            options.image_quality_percent().to_string(),
            "--dpi".into(),
            options.dpi().to_string(),
            "--enable-local-file-access".into(),
            "-".into(),
            "-".into(),
        ]);
        args
    }
}

#[async_trait]
impl PdfConverter for WkhtmltopdfConverter {
    async fn convert(&self, html: &str, options: &CaptureOptions) -> Result<Bytes, ExportError> {
        let args = Self::args(options);
        debug!("Running {} {}", self.binary.display(), args.join(" "));

        let mut child = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ExportError::Spawn {
                binary: self.binary.display().to_string(),
                source,
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| {
            ExportError::Io(std::io::Error::other("converter stdin was not captured"))
        })?;
        let input = html.as_bytes().to_vec();
        let feed = async move {
            stdin.write_all(&input).await?;
            stdin.shutdown().await
        };

        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        let output = output?;
        if !output.status.success() {
            return Err(ExportError::Converter {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        fed?;

        Ok(Bytes::from(output.stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_map_capture_options() {
        let args = WkhtmltopdfConverter::args(&CaptureOptions::default());
        let joined = args.join(" ");
        assert!(joined.contains("--page-size A4"));
        assert!(joined.contains("--orientation Portrait"));
        assert!(joined.contains("--margin-top 0mm"));
        assert!(joined.contains("--margin-left 0mm"));
        assert!(joined.contains("--image-quality 98"));
        assert!(joined.contains("--dpi 192"));
        assert!(joined.ends_with("- -"));
    }

    #[tokio::test]
    async fn test_missing_binary_reports_spawn_error() {
        let converter = WkhtmltopdfConverter::new("/nonexistent/wkhtmltopdf-missing");
        let err = converter
            .convert("<html></html>", &CaptureOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::Spawn { .. }));
    }
}
