//! Completeness auditing: which keys each translation is missing relative to
//! the base language.
//!
//! Pure set difference over parsed tables; deterministic for identical input
//! files and independent of file ordering.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    discover::{discover_languages, display_name, find_base_file, find_language_file},
    error::Error,
    strings::Format,
    traits::Parser,
};

/// Keys present in the base table but absent from a target language table.
pub fn missing_keys(base: &BTreeSet<String>, lang: &BTreeSet<String>) -> BTreeSet<String> {
    base.difference(lang).cloned().collect()
}

/// Options controlling a tree audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditOptions {
    /// Base language code whose key set is authoritative.
    pub base_lang: String,
    /// Name of the `.strings` file inside each `.lproj` directory.
    pub filename: String,
    /// Explicit base file path, overriding the `<base_lang>.lproj` lookup.
    pub base_file: Option<PathBuf>,
    /// Restrict the audit to these language codes instead of auto-discovery.
    pub languages: Option<Vec<String>>,
}

impl Default for AuditOptions {
    fn default() -> Self {
        AuditOptions {
            base_lang: "en".to_string(),
            filename: "Localizable.strings".to_string(),
            base_file: None,
            languages: None,
        }
    }
}

/// Audit result for a single target language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageAudit {
    /// Language code (from the `.lproj` directory name or the caller).
    pub code: String,
    /// Human-readable language name.
    pub name: String,
    /// Whether the language file exists on disk. An absent file is reported
    /// as all base keys missing, not as an error.
    pub file_found: bool,
    /// Base keys absent from this language.
    pub missing: BTreeSet<String>,
}

/// Completeness report for a whole resource tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Base language code.
    pub base_language: String,
    /// Path of the base language file that was parsed.
    pub base_file: PathBuf,
    /// Base key → value mapping, used when rendering reports.
    pub base_values: BTreeMap<String, String>,
    /// Per-language results, ordered by language code.
    pub languages: Vec<LanguageAudit>,
}

impl AuditReport {
    /// True when no language is missing any key.
    pub fn is_complete(&self) -> bool {
        self.languages.iter().all(|lang| lang.missing.is_empty())
    }

    /// Union of missing keys across all languages.
    pub fn missing_union(&self) -> BTreeSet<String> {
        self.languages
            .iter()
            .flat_map(|lang| lang.missing.iter().cloned())
            .collect()
    }

    /// Number of keys in the base language.
    pub fn base_key_count(&self) -> usize {
        self.base_values.len()
    }
}

/// Parses the base language file, resolves the set of target languages, and
/// computes the missing-key set for each.
///
/// Fails on usage errors only: a missing base file, an empty base key set, or
/// no languages to check. Per-language findings, including an entirely absent
/// file, land in the report.
pub fn audit_tree(base_dir: &Path, options: &AuditOptions) -> Result<AuditReport, Error> {
    let base_file = match &options.base_file {
        Some(path) => {
            if !path.exists() {
                return Err(Error::MissingBaseFile(path.clone()));
            }
            path.clone()
        }
        None => find_base_file(base_dir, &options.base_lang, &options.filename).ok_or_else(
            || {
                Error::MissingBaseFile(
                    base_dir
                        .join(format!("{}.lproj", options.base_lang))
                        .join(&options.filename),
                )
            },
        )?,
    };

    let base_table = Format::read_from(&base_file)?;
    let base_values: BTreeMap<String, String> = base_table
        .key_map()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    if base_values.is_empty() {
        return Err(Error::EmptyBaseKeySet(base_file));
    }
    let base_keys: BTreeSet<String> = base_values.keys().cloned().collect();

    let targets: BTreeMap<String, String> = match &options.languages {
        Some(codes) => codes
            .iter()
            .map(|code| (code.clone(), display_name(code)))
            .collect(),
        None => discover_languages(base_dir, &options.base_lang),
    };
    if targets.is_empty() {
        return Err(Error::NoLanguages(base_dir.to_path_buf()));
    }

    let mut languages = Vec::with_capacity(targets.len());
    for (code, name) in targets {
        match find_language_file(base_dir, &code, &options.filename) {
            Some(lang_file) => {
                let lang_table = Format::read_from(&lang_file)?;
                languages.push(LanguageAudit {
                    missing: missing_keys(&base_keys, &lang_table.key_set()),
                    code,
                    name,
                    file_found: true,
                });
            }
            None => {
                // Entirely absent file: every base key is missing.
                languages.push(LanguageAudit {
                    missing: base_keys.clone(),
                    code,
                    name,
                    file_found: false,
                });
            }
        }
    }

    Ok(AuditReport {
        base_language: options.base_lang.clone(),
        base_file,
        base_values,
        languages,
    })
}
