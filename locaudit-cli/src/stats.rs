//! The `stats` subcommand: per-language completion percentages.

use std::path::PathBuf;

use locaudit::{AuditOptions, audit_tree};
use serde_json::json;

#[derive(Debug, Clone)]
pub struct StatsOptions {
    pub base_dir: PathBuf,
    pub base_lang: String,
    pub filename: String,
    pub json: bool,
}

fn completion_percent(translated: usize, total: usize) -> f64 {
    if total == 0 {
        100.0
    } else {
        (translated as f64) * 100.0 / (total as f64)
    }
}

pub fn run_stats_command(opts: StatsOptions) -> Result<(), String> {
    let audit_options = AuditOptions {
        base_lang: opts.base_lang.clone(),
        filename: opts.filename.clone(),
        base_file: None,
        languages: None,
    };
    let report = audit_tree(&opts.base_dir, &audit_options).map_err(|e| e.to_string())?;

    let total = report.base_key_count();

    if opts.json {
        let per_lang: Vec<_> = report
            .languages
            .iter()
            .map(|lang| {
                let translated = total - lang.missing.len();
                let percent = completion_percent(translated, total);
                json!({
                    "language": lang.code,
                    "name": lang.name,
                    "file_found": lang.file_found,
                    "total": total,
                    "translated": translated,
                    "missing": lang.missing.len(),
                    "completion_percent": (percent * 100.0).round() / 100.0,
                })
            })
            .collect();
        let body = json!({
            "summary": {
                "base_language": report.base_language,
                "base_keys": total,
                "languages": report.languages.len(),
            },
            "languages": per_lang,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&body)
                .map_err(|e| format!("Failed to serialize stats JSON: {}", e))?
        );
        return Ok(());
    }

    println!("=== Stats ===");
    println!("Base language: {} ({} keys)", report.base_language, total);
    println!("Languages: {}", report.languages.len());

    for lang in &report.languages {
        let translated = total - lang.missing.len();
        println!("\nLanguage: {} ({})", lang.code, lang.name);
        println!("  Translated: {}/{}", translated, total);
        println!(
            "  Completion: {:.2}%",
            completion_percent(translated, total)
        );
        if !lang.file_found {
            println!("  File: not found");
        }
    }

    Ok(())
}
