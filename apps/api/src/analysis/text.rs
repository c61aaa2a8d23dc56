//! PDF text extraction and normalization.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Bullet glyphs PDF extraction leaves behind. U+F0B7 is the Symbol-font
/// bullet exported by word processors into the private-use area.
const DECORATIVE_GLYPHS: [char; 4] = ['●', '\u{f0b7}', '•', '▪'];

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("The file was not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse PDF: {0}")]
    Parse(String),

    #[error("PDF parser aborted: {0}")]
    Aborted(String),
}

/// Reads every page of the PDF at `path` and returns the raw text, pages
/// concatenated in document order. Page boundaries are not preserved.
///
/// All failures come back as `ExtractError`, including panics inside the PDF
/// parser, which runs on the blocking pool.
pub async fn extract_pdf_text(path: &Path) -> Result<String, ExtractError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ExtractError::NotFound(path.to_path_buf()))
        }
        Err(source) => {
            return Err(ExtractError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| ExtractError::Aborted(e.to_string()))?
        .map_err(|e| ExtractError::Parse(e.to_string()))
}

/// Collapses whitespace runs to single spaces, trims the ends, and drops
/// decorative bullet glyphs and non-whitespace control characters.
///
/// Glyphs go first so that `normalize_text(normalize_text(x)) == normalize_text(x)`.
pub fn normalize_text(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !is_decorative(*c)).collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_decorative(c: char) -> bool {
    DECORATIVE_GLYPHS.contains(&c) || (c.is_control() && !c.is_whitespace())
}
