//! PDF Text Extraction
//!
//! Thin wrapper around the `pdf-extract` crate: reads the document
//! bytes, extracts text page by page in document order, and joins the
//! pages with no separator. Pages that yield no text contribute
//! nothing to the result. Extraction quality for scanned or malformed
//! pages is whatever `pdf-extract` produces.

use crate::profile::loader::ProfileLoadError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Extract the full text of a PDF document.
///
/// Returns [`ProfileLoadError::Missing`] when the file does not exist,
/// [`ProfileLoadError::Io`] for any other read failure, and
/// [`ProfileLoadError::PdfExtract`] when the bytes could be read but
/// text extraction failed (corrupt or encrypted document).
pub fn try_load_pdf_text(path: &Path) -> Result<String, ProfileLoadError> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ProfileLoadError::Missing(path.display().to_string()),
        _ => ProfileLoadError::Io(format!("{}: {}", path.display(), e)),
    })?;

    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .map_err(|e| ProfileLoadError::PdfExtract(format!("{}: {}", path.display(), e)))?;

    Ok(concat_pages(pages))
}

/// Join page texts in document order with no separator.
///
/// Pages whose extraction yielded no text (empty or whitespace-only)
/// are skipped entirely, appending neither text nor placeholder.
pub fn concat_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = String>,
{
    pages
        .into_iter()
        .filter(|page| !page.trim().is_empty())
        .collect()
}
