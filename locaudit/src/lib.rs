#![forbid(unsafe_code)]
//! Localization completeness audit toolkit for Apple `.strings` resource trees.
//!
//! Parses `.strings` tables, discovers per-language `.lproj` directories, and
//! computes which keys each translation is missing relative to the base language.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use locaudit::{audit_tree, AuditOptions};
//!
//! let report = audit_tree(Path::new("Framework/Resources"), &AuditOptions::default())?;
//! if !report.is_complete() {
//!     for lang in &report.languages {
//!         println!("{}: {} missing", lang.code, lang.missing.len());
//!     }
//! }
//! # Ok::<(), locaudit::Error>(())
//! ```
//!
//! # Pieces
//!
//! - **`strings`**: parse and serialize Apple `.strings` files (comments,
//!   escapes, BOM-aware decoding)
//! - **`discover`**: enumerate `<code>.lproj` directories and locate files
//! - **`audit`**: set-difference completeness reports
//! - **`backup`**: timestamped safety copies before any rewrite

pub mod audit;
pub mod backup;
pub mod discover;
pub mod error;
pub mod strings;
pub mod traits;

// Re-export most used types for easy consumption
pub use crate::{
    audit::{AuditOptions, AuditReport, LanguageAudit, audit_tree, missing_keys},
    discover::{discover_languages, display_name, find_base_file, find_language_file},
    error::Error,
    strings::{Format, Pair, decode_file, escape_value, unescape_value},
};
