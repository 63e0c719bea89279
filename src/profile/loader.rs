//! Startup Data Loader
//!
//! Runs once at process start: five fixed source locations, one read
//! attempt each, every failure collapsed to the documented fallback.
//! The five steps are fully independent - a missing resume never
//! affects the summary - and `load_profile` itself never fails.

use crate::profile::pdf;
use crate::profile::types::{
    TwinProfile, LINKEDIN_FALLBACK, RESUME_FALLBACK, STYLE_FALLBACK, SUMMARY_FALLBACK,
};
use log::{debug, info, warn};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================
// ERRORS
// ============================================================

#[derive(Error, Debug)]
pub enum ProfileLoadError {
    #[error("Source file not found: {0}")]
    Missing(String),

    #[error("Failed to read source: {0}")]
    Io(String),

    #[error("Facts are not a JSON object: {0}")]
    MalformedJson(String),

    #[error("PDF text extraction failed: {0}")]
    PdfExtract(String),
}

// ============================================================
// SOURCE LOCATIONS
// ============================================================

/// The five fixed source locations the loader reads from.
///
/// The relative `./data` layout is an implicit contract with
/// deployment; tests and the `TWIN_DATA_DIR` override build the same
/// layout from another base directory via [`ProfilePaths::from_dir`].
#[derive(Debug, Clone)]
pub struct ProfilePaths {
    pub linkedin_pdf: PathBuf,
    pub resume_pdf: PathBuf,
    pub summary_txt: PathBuf,
    pub style_txt: PathBuf,
    pub facts_json: PathBuf,
}

impl Default for ProfilePaths {
    fn default() -> Self {
        Self::from_dir("./data")
    }
}

impl ProfilePaths {
    /// Resolve the fixed file layout under the given base directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            linkedin_pdf: dir.join("linkedin.pdf"),
            resume_pdf: dir.join("resume.pdf"),
            summary_txt: dir.join("summary.txt"),
            style_txt: dir.join("style.txt"),
            facts_json: dir.join("facts.json"),
        }
    }
}

// ============================================================
// PER-SOURCE LOAD OPERATIONS
// ============================================================

/// Read a plain text source in full, decoded as UTF-8, verbatim.
pub fn try_load_text(path: &Path) -> Result<String, ProfileLoadError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ProfileLoadError::Missing(path.display().to_string()),
        _ => ProfileLoadError::Io(format!("{}: {}", path.display(), e)),
    })
}

/// Read and parse the facts source as a JSON object.
///
/// Content that is not valid JSON, or valid JSON that is not an
/// object, is reported as [`ProfileLoadError::MalformedJson`].
pub fn try_load_facts(path: &Path) -> Result<Map<String, Value>, ProfileLoadError> {
    let text = try_load_text(path)?;
    serde_json::from_str(&text)
        .map_err(|e| ProfileLoadError::MalformedJson(format!("{}: {}", path.display(), e)))
}

// ============================================================
// STARTUP LOADER
// ============================================================

/// Load the full twin profile, substituting fallbacks per source.
///
/// Each of the five sources is attempted exactly once, independently
/// of the others. Every error - not only the expected "file absent"
/// and "facts malformed" cases - is collapsed to the source's
/// fallback, so this function never fails and the returned profile is
/// always fully populated. Unexpected errors are logged at `warn` so
/// a deployment problem stays visible.
pub fn load_profile(paths: &ProfilePaths) -> TwinProfile {
    TwinProfile {
        linkedin: text_or_fallback(
            "linkedin",
            pdf::try_load_pdf_text(&paths.linkedin_pdf),
            LINKEDIN_FALLBACK,
        ),
        resume: text_or_fallback(
            "resume",
            pdf::try_load_pdf_text(&paths.resume_pdf),
            RESUME_FALLBACK,
        ),
        summary: text_or_fallback(
            "summary",
            try_load_text(&paths.summary_txt),
            SUMMARY_FALLBACK,
        ),
        style: text_or_fallback("style", try_load_text(&paths.style_txt), STYLE_FALLBACK),
        facts: facts_or_empty(try_load_facts(&paths.facts_json)),
    }
}

fn text_or_fallback(
    source: &str,
    result: Result<String, ProfileLoadError>,
    fallback: &str,
) -> String {
    match result {
        Ok(text) => {
            debug!("Loaded {} source ({} chars)", source, text.len());
            text
        }
        Err(err) => {
            log_fallback(source, &err);
            fallback.to_string()
        }
    }
}

fn facts_or_empty(result: Result<Map<String, Value>, ProfileLoadError>) -> Map<String, Value> {
    match result {
        Ok(facts) => {
            debug!("Loaded facts source ({} keys)", facts.len());
            facts
        }
        Err(err) => {
            log_fallback("facts", &err);
            Map::new()
        }
    }
}

fn log_fallback(source: &str, err: &ProfileLoadError) {
    match err {
        // Expected degradation: the file simply is not deployed, or
        // the facts file does not parse.
        ProfileLoadError::Missing(_) | ProfileLoadError::MalformedJson(_) => {
            info!("{} source unavailable, using fallback ({})", source, err);
        }
        ProfileLoadError::Io(_) | ProfileLoadError::PdfExtract(_) => {
            warn!("{} source failed unexpectedly, using fallback ({})", source, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn empty_dir() -> TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn test_all_sources_absent_yields_all_fallbacks() {
        let dir = empty_dir();
        let profile = load_profile(&ProfilePaths::from_dir(dir.path()));

        assert_eq!(profile.linkedin, LINKEDIN_FALLBACK);
        assert_eq!(profile.resume, RESUME_FALLBACK);
        assert_eq!(profile.summary, SUMMARY_FALLBACK);
        assert_eq!(profile.style, STYLE_FALLBACK);
        assert!(profile.facts.is_empty());
    }

    #[test]
    fn test_summary_loaded_verbatim() {
        let dir = empty_dir();
        fs::write(dir.path().join("summary.txt"), "Hello world").unwrap();

        let profile = load_profile(&ProfilePaths::from_dir(dir.path()));
        assert_eq!(profile.summary, "Hello world");
    }

    #[test]
    fn test_text_sources_not_trimmed() {
        let dir = empty_dir();
        fs::write(dir.path().join("style.txt"), "  keep whitespace \n").unwrap();

        let profile = load_profile(&ProfilePaths::from_dir(dir.path()));
        assert_eq!(profile.style, "  keep whitespace \n");
    }

    #[test]
    fn test_facts_round_trip() {
        let dir = empty_dir();
        fs::write(dir.path().join("facts.json"), r#"{"a": 1, "b": "x"}"#).unwrap();

        let profile = load_profile(&ProfilePaths::from_dir(dir.path()));
        assert_eq!(profile.facts.len(), 2);
        assert_eq!(profile.facts.get("a"), Some(&json!(1)));
        assert_eq!(profile.facts.get("b"), Some(&json!("x")));
    }

    #[test]
    fn test_invalid_facts_json_falls_back_to_empty_map() {
        let dir = empty_dir();
        fs::write(dir.path().join("facts.json"), "{not valid json").unwrap();

        let profile = load_profile(&ProfilePaths::from_dir(dir.path()));
        assert!(profile.facts.is_empty());
    }

    #[test]
    fn test_non_object_facts_json_falls_back_to_empty_map() {
        let dir = empty_dir();
        fs::write(dir.path().join("facts.json"), "[1, 2, 3]").unwrap();

        let profile = load_profile(&ProfilePaths::from_dir(dir.path()));
        assert!(profile.facts.is_empty());
    }

    #[test]
    fn test_sources_load_independently() {
        // Only summary and facts are deployed; the other three must
        // still resolve to their fallbacks without disturbing these.
        let dir = empty_dir();
        fs::write(dir.path().join("summary.txt"), "present").unwrap();
        fs::write(dir.path().join("facts.json"), r#"{"k": true}"#).unwrap();

        let profile = load_profile(&ProfilePaths::from_dir(dir.path()));
        assert_eq!(profile.summary, "present");
        assert_eq!(profile.facts.get("k"), Some(&json!(true)));
        assert_eq!(profile.linkedin, LINKEDIN_FALLBACK);
        assert_eq!(profile.resume, RESUME_FALLBACK);
        assert_eq!(profile.style, STYLE_FALLBACK);
    }

    #[test]
    fn test_corrupt_pdf_falls_back() {
        let dir = empty_dir();
        fs::write(dir.path().join("linkedin.pdf"), "not a pdf at all").unwrap();

        let profile = load_profile(&ProfilePaths::from_dir(dir.path()));
        assert_eq!(profile.linkedin, LINKEDIN_FALLBACK);
    }

    #[test]
    fn test_try_load_text_reports_missing() {
        let dir = empty_dir();
        let result = try_load_text(&dir.path().join("summary.txt"));
        assert!(matches!(result, Err(ProfileLoadError::Missing(_))));
    }

    #[test]
    fn test_try_load_facts_reports_malformed() {
        let dir = empty_dir();
        let path = dir.path().join("facts.json");
        fs::write(&path, "\"just a string\"").unwrap();

        let result = try_load_facts(&path);
        assert!(matches!(result, Err(ProfileLoadError::MalformedJson(_))));
    }

    #[test]
    fn test_default_paths_point_at_data_dir() {
        let paths = ProfilePaths::default();
        assert_eq!(paths.linkedin_pdf, PathBuf::from("./data/linkedin.pdf"));
        assert_eq!(paths.facts_json, PathBuf::from("./data/facts.json"));
    }
}
