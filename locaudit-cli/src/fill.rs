//! The `fill` subcommand: append missing keys to language files using the
//! base-language value as a placeholder.
//!
//! Placeholders carry a `/* Needs translation */` comment so translators can
//! grep for them; nothing already present in a target file is touched.

use std::path::PathBuf;

use locaudit::backup::{BACKUP_DIR_NAME, backup_file};
use locaudit::discover::{LPROJ_SUFFIX, find_language_file};
use locaudit::strings::{Format, Pair, decode_file};
use locaudit::traits::Parser;
use locaudit::{AuditOptions, audit_tree};

use crate::validation::validate_language_code;

#[derive(Debug, Clone)]
pub struct FillOptions {
    pub base_dir: PathBuf,
    pub base_lang: String,
    pub filename: String,
    pub languages: Option<Vec<String>>,
    pub dry_run: bool,
    pub backup: bool,
}

fn placeholder_pair(key: &str, base_value: &str, base_lang: &str) -> Pair {
    Pair {
        key: key.to_string(),
        value: base_value.to_string(),
        comment: Some(format!("/* Needs translation (copied from {}) */", base_lang)),
    }
}

pub fn run_fill_command(opts: FillOptions) -> Result<(), String> {
    if let Some(languages) = &opts.languages {
        for lang in languages {
            validate_language_code(lang)?;
        }
    }

    let audit_options = AuditOptions {
        base_lang: opts.base_lang.clone(),
        filename: opts.filename.clone(),
        base_file: None,
        languages: opts.languages.clone(),
    };
    let report = audit_tree(&opts.base_dir, &audit_options).map_err(|e| e.to_string())?;

    if report.is_complete() {
        println!("All languages are complete; nothing to fill.");
        return Ok(());
    }

    let mut filled_languages = 0usize;
    let mut filled_keys = 0usize;

    for lang in &report.languages {
        if lang.missing.is_empty() {
            continue;
        }

        let pairs: Vec<Pair> = lang
            .missing
            .iter()
            .map(|key| {
                let base_value = report.base_values.get(key).map(String::as_str).unwrap_or("");
                placeholder_pair(key, base_value, &report.base_language)
            })
            .collect();

        let target = find_language_file(&opts.base_dir, &lang.code, &opts.filename);

        if opts.dry_run {
            println!(
                "{} ({}): would add {} placeholder(s){}",
                lang.name,
                lang.code,
                pairs.len(),
                if target.is_none() { " (new file)" } else { "" }
            );
            continue;
        }

        match target {
            Some(path) => {
                if opts.backup {
                    let backup_dir = opts.base_dir.join(BACKUP_DIR_NAME);
                    if let Err(e) = backup_file(&path, &backup_dir, &lang.code) {
                        eprintln!("Warning: Failed to backup {}: {}", path.display(), e);
                    }
                }
                // BOM-aware read: fill must accept the same encodings as
                // check does. The appended file is written back as UTF-8.
                let mut content = decode_file(&path)
                    .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
                if !content.is_empty() && !content.ends_with('\n') {
                    content.push('\n');
                }
                for pair in &pairs {
                    content.push('\n');
                    content.push_str(&pair.to_string());
                    content.push('\n');
                }
                std::fs::write(&path, content)
                    .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
                println!(
                    "{} ({}): added {} placeholder(s) to {}",
                    lang.name,
                    lang.code,
                    pairs.len(),
                    path.display()
                );
            }
            None => {
                // No file at all: create the .lproj directory and a fresh table.
                let lproj = opts.base_dir.join(format!("{}{}", lang.code, LPROJ_SUFFIX));
                std::fs::create_dir_all(&lproj)
                    .map_err(|e| format!("Failed to create {}: {}", lproj.display(), e))?;
                let path = lproj.join(&opts.filename);
                let table = Format {
                    language: lang.code.clone(),
                    pairs: pairs.clone(),
                };
                table
                    .write_to(&path)
                    .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
                println!(
                    "{} ({}): created {} with {} placeholder(s)",
                    lang.name,
                    lang.code,
                    path.display(),
                    pairs.len()
                );
            }
        }

        filled_languages += 1;
        filled_keys += pairs.len();
    }

    if opts.dry_run {
        println!("Dry-run mode: no files were written");
    } else {
        println!(
            "Filled {} key(s) across {} language(s)",
            filled_keys, filled_languages
        );
    }
    Ok(())
}
