//! Scoped temporary storage for uploaded resumes.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::analysis::models::AnalysisReport;
use crate::analysis::pipeline::ResumePipeline;

/// An uploaded PDF written to disk for the duration of one analysis.
/// The file is deleted when this value is dropped.
pub struct TempPdf {
    file: NamedTempFile,
}

impl TempPdf {
    /// Writes `bytes` to a fresh `.pdf` file inside `dir`.
    pub fn write_in(dir: &Path, bytes: &[u8]) -> std::io::Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(".pdf")
            .tempfile_in(dir)?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Stores `bytes` in a `TempPdf` under `dir`, runs the pipeline on it and
/// removes the file again before returning.
pub async fn analyze_upload(
    pipeline: &ResumePipeline,
    dir: &Path,
    bytes: &[u8],
) -> std::io::Result<AnalysisReport> {
    let pdf = TempPdf::write_in(dir, bytes)?;
    let report = pipeline.analyze(pdf.path()).await;
    drop(pdf);
    Ok(report)
}
