//! Profile Types
//!
//! The in-memory profile the twin answers from, plus the fallback
//! values substituted when a source file cannot be loaded.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================
// FALLBACK VALUES
// ============================================================

/// Substituted when `linkedin.pdf` cannot be loaded
pub const LINKEDIN_FALLBACK: &str = "LinkedIn profile not available";

/// Substituted when `resume.pdf` cannot be loaded
pub const RESUME_FALLBACK: &str = "Resume not available";

/// Substituted when `summary.txt` cannot be loaded
pub const SUMMARY_FALLBACK: &str = "Summary not available";

/// Substituted when `style.txt` cannot be loaded
pub const STYLE_FALLBACK: &str = "Style guide not available";

// ============================================================
// TWIN PROFILE
// ============================================================

/// Everything loaded at startup about the person behind the twin.
///
/// Loaded once by [`crate::profile::loader::load_profile`] and not
/// mutated afterwards. Every field is always populated: sources that
/// fail to load are replaced by their fallback value, never left out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwinProfile {
    /// Text extracted from the LinkedIn profile PDF export
    pub linkedin: String,
    /// Text extracted from the resume PDF
    pub resume: String,
    /// Professional summary, verbatim file contents
    pub summary: String,
    /// Writing style guide, verbatim file contents
    pub style: String,
    /// Structured facts (arbitrary JSON values keyed by string)
    pub facts: Map<String, Value>,
}

impl TwinProfile {
    /// A profile where every source fell back to its default.
    pub fn fallback() -> Self {
        Self {
            linkedin: LINKEDIN_FALLBACK.to_string(),
            resume: RESUME_FALLBACK.to_string(),
            summary: SUMMARY_FALLBACK.to_string(),
            style: STYLE_FALLBACK.to_string(),
            facts: Map::new(),
        }
    }
}
