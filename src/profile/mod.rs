//! Profile Module - Startup Data Loading
//!
//! Loads the five profile sources the twin is built from, each one
//! independently and with a static fallback on failure:
//! - Types: the `TwinProfile` value and its fallback constants
//! - Loader: per-source load operations and the fallback policy
//! - Pdf: text extraction wrapper around the `pdf-extract` crate

pub mod loader;
pub mod pdf;
pub mod types;

pub use loader::*;
pub use pdf::*;
pub use types::*;
