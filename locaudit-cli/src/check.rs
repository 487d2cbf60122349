//! The `check` subcommand: audit a resource tree and report missing keys.

use std::path::{Path, PathBuf};

use locaudit::backup::{BACKUP_DIR_NAME, backup_file};
use locaudit::discover::{LPROJ_SUFFIX, display_name, find_language_file};
use locaudit::{AuditOptions, AuditReport, audit_tree};
use serde_json::json;

use crate::validation::{validate_file_path, validate_language_code, validate_output_path};

#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub base_dir: PathBuf,
    pub base_file: Option<PathBuf>,
    pub base_lang: String,
    pub filename: String,
    pub languages: Option<Vec<String>>,
    pub report: Option<PathBuf>,
    pub no_report: bool,
    pub quiet: bool,
    pub backup: bool,
    pub json: bool,
}

/// Resolved tree layout: where the .lproj folders live and which language is
/// the base. An explicit `--base-file` wins and implies both.
fn resolve_layout(opts: &CheckOptions) -> Result<(PathBuf, String, Option<PathBuf>), String> {
    if let Some(base_file) = &opts.base_file {
        validate_file_path(base_file)?;
        let lproj = base_file
            .parent()
            .ok_or_else(|| format!("Cannot determine layout from: {}", base_file.display()))?;
        let base_dir = lproj
            .parent()
            .ok_or_else(|| format!("Cannot determine layout from: {}", base_file.display()))?
            .to_path_buf();
        let base_lang = lproj
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.strip_suffix(LPROJ_SUFFIX).unwrap_or(n).to_string())
            .unwrap_or_else(|| opts.base_lang.clone());
        Ok((base_dir, base_lang, Some(base_file.clone())))
    } else {
        Ok((opts.base_dir.clone(), opts.base_lang.clone(), None))
    }
}

fn run_backups(report: &AuditReport, base_dir: &Path, quiet: bool) {
    let backup_dir = base_dir.join(BACKUP_DIR_NAME);
    let mut targets: Vec<(PathBuf, String)> =
        vec![(report.base_file.clone(), report.base_language.clone())];
    for lang in &report.languages {
        if let Some(file) = find_language_file(
            base_dir,
            &lang.code,
            report
                .base_file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("Localizable.strings"),
        ) {
            targets.push((file, lang.code.clone()));
        }
    }

    let mut copied = 0usize;
    for (file, code) in &targets {
        match backup_file(file, &backup_dir, code) {
            Ok(backup_path) => {
                copied += 1;
                if !quiet {
                    println!("Backed up: {} -> {}", file.display(), backup_path.display());
                }
            }
            Err(e) => eprintln!("Warning: Failed to backup {}: {}", file.display(), e),
        }
    }
    if !quiet && copied > 0 {
        println!("\nCreated {} backup(s) in: {}\n", copied, backup_dir.display());
    }
}

fn print_human(report: &AuditReport) {
    for lang in &report.languages {
        if !lang.file_found {
            println!("\n{} ({}): ⚠ File not found", lang.name, lang.code);
        } else if lang.missing.is_empty() {
            println!("\n{} ({}): ✓ Complete", lang.name, lang.code);
        } else {
            println!("\n{} ({}): {} missing keys", lang.name, lang.code, lang.missing.len());
            for key in &lang.missing {
                println!("  - {}", key);
            }
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("Summary:");
    println!(
        "  Base language ({}): {} keys",
        report.base_language,
        report.base_key_count()
    );
    println!(
        "  Total missing keys across all languages: {}",
        report.missing_union().len()
    );
    for lang in &report.languages {
        if !lang.missing.is_empty() {
            println!("  {}: {} missing", lang.name, lang.missing.len());
        }
    }
}

fn render_json(report: &AuditReport) -> Result<String, String> {
    let languages: Vec<_> = report
        .languages
        .iter()
        .map(|lang| {
            json!({
                "code": lang.code,
                "name": lang.name,
                "file_found": lang.file_found,
                "missing_count": lang.missing.len(),
                "missing": lang.missing,
            })
        })
        .collect();

    let body = json!({
        "summary": {
            "base_language": report.base_language,
            "base_keys": report.base_key_count(),
            "total_missing": report.missing_union().len(),
            "complete": report.is_complete(),
        },
        "languages": languages,
    });

    serde_json::to_string_pretty(&body)
        .map_err(|e| format!("Failed to serialize report JSON: {}", e))
}

/// Renders the plain-text report file: header, totals, then one section per
/// incomplete language listing each missing key with its base value.
fn render_report_file(report: &AuditReport) -> String {
    let mut out = String::new();
    out.push_str("Missing Localization Keys Report\n");
    out.push_str(&"=".repeat(60));
    out.push_str("\n\n");
    out.push_str(&format!(
        "Base language: {} ({})\n",
        display_name(&report.base_language),
        report.base_language
    ));
    out.push_str(&format!(
        "Total keys in base language: {}\n",
        report.base_key_count()
    ));
    out.push_str(&format!(
        "Total missing keys across all languages: {}\n\n",
        report.missing_union().len()
    ));

    for lang in &report.languages {
        if lang.missing.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "\n{} ({}): {} missing\n",
            lang.name,
            lang.code,
            lang.missing.len()
        ));
        out.push_str(&"-".repeat(60));
        out.push('\n');
        for key in &lang.missing {
            let base_value = report.base_values.get(key).map(String::as_str).unwrap_or("");
            out.push_str(&format!("\nKey: \"{}\"\n", key));
            out.push_str(&format!(
                "Base ({}): \"{}\"\n",
                report.base_language, base_value
            ));
            out.push_str("Translation needed\n");
        }
    }

    out
}

pub fn run_check_command(opts: CheckOptions) -> Result<bool, String> {
    if let Some(languages) = &opts.languages {
        for lang in languages {
            validate_language_code(lang)?;
        }
    }
    if let Some(report_path) = &opts.report {
        validate_output_path(report_path)?;
    }

    let (base_dir, base_lang, base_file) = resolve_layout(&opts)?;

    if !opts.quiet {
        println!("Base directory: {}", base_dir.display());
        println!("Parsing base language file ({})...", base_lang);
    }

    let audit_options = AuditOptions {
        base_lang,
        filename: opts.filename.clone(),
        base_file,
        languages: opts.languages.clone(),
    };
    let report = audit_tree(&base_dir, &audit_options).map_err(|e| e.to_string())?;

    if !opts.quiet {
        println!("Found {} keys in base language file", report.base_key_count());
        println!("Checking {} language(s)...", report.languages.len());
    }

    if opts.backup {
        run_backups(&report, &base_dir, opts.quiet);
    }

    if opts.json {
        println!("{}", render_json(&report)?);
    } else if !opts.quiet {
        print_human(&report);
    }

    if !opts.no_report {
        let report_path = opts.report.clone().unwrap_or_else(|| {
            base_dir
                .parent()
                .unwrap_or(&base_dir)
                .join("localization_missing_keys_report.txt")
        });
        // The audit stands on its own; a failed report write is a warning.
        match std::fs::write(&report_path, render_report_file(&report)) {
            Ok(()) => {
                if !opts.quiet {
                    println!("\nReport written to: {}", report_path.display());
                }
            }
            Err(e) => eprintln!(
                "Warning: Failed to write report {}: {}",
                report_path.display(),
                e
            ),
        }
    }

    Ok(report.is_complete())
}
