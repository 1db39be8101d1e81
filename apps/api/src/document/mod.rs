// Document rendering: classify generated resume text once, then render it as DOCX or PDF.
// Everything here is synchronous and CPU-bound; async callers run it inside spawn_blocking.

pub mod classifier;
pub mod flowing;
mod helvetica;
pub mod ooxml;
pub mod paginated;
mod winansi;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use classifier::{classify, ClassifiedLine};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error while writing document: {0}")]
    Io(#[from] std::io::Error),
}

/// Output format chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "application/pdf",
            DocumentFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

/// A finished document, owned by the caller. Never persisted.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub format: DocumentFormat,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Title shown at the top of both formats.
pub fn title_for(name: &str) -> String {
    format!("{}'s Resume", name.trim())
}

/// Download file name, e.g. `Jane Doe_resume.pdf`.
///
/// Characters outside printable ASCII, plus quotes and path separators, become `_` so the
/// result is safe inside a quoted `Content-Disposition` filename.
pub fn file_name_for(name: &str, format: DocumentFormat) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '"' | '\\' | '/' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect();
    let stem = if stem.is_empty() { "resume".to_string() } else { stem };
    format!("{stem}_resume.{}", format.extension())
}

/// Classifies `raw_text` and renders it in the requested format.
pub fn render_document(
    name: &str,
    raw_text: &str,
    format: DocumentFormat,
) -> Result<RenderedDocument, RenderError> {
    let lines = classify(raw_text);

    let bytes = match format {
        DocumentFormat::Docx => flowing::render_flowing(name, &lines)?,
        DocumentFormat::Pdf => paginated::render_paginated(name, &lines),
    };

    debug!(
        format = format.extension(),
        lines = lines.len(),
        bytes = bytes.len(),
        "Rendered resume document"
    );

    Ok(RenderedDocument {
        format,
        file_name: file_name_for(name, format),
        bytes,
    })
}
