//! Digital Twin Backend
//!
//! Startup profile loading for the digital twin assistant:
//! - LinkedIn and resume text extracted from PDF exports
//! - Summary and style guide read from plain text
//! - Structured facts parsed from JSON
//!
//! Every source degrades to a documented static fallback, so the
//! loaded profile is always fully populated.

pub mod profile;

pub use profile::*;
