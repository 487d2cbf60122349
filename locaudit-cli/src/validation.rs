//! Input validation shared by the subcommands.

use std::path::Path;

use unic_langid::LanguageIdentifier;

/// Validate that a path exists and is a regular file.
pub fn validate_file_path(path: &Path) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("File does not exist: {}", path.display()));
    }
    if !path.is_file() {
        return Err(format!("Path is not a file: {}", path.display()));
    }
    Ok(())
}

/// Validate that a report/output path is writable, creating missing parent
/// directories.
pub fn validate_output_path(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Cannot create output directory: {}", e))?;
        }
    }
    Ok(())
}

/// Validate a language code as a BCP 47 identifier.
pub fn validate_language_code(lang: &str) -> Result<(), String> {
    if lang.is_empty() {
        return Err("Language code cannot be empty".to_string());
    }
    lang.parse::<LanguageIdentifier>()
        .map(|_| ())
        .map_err(|_| {
            format!(
                "Invalid language code: {}. Expected a BCP 47 identifier like 'es' or 'zh-Hans'",
                lang
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_language_code_accepts_common_codes() {
        for code in ["en", "es", "fr-CA", "zh-Hans", "de-CH"] {
            assert!(validate_language_code(code).is_ok(), "rejected {code}");
        }
    }

    #[test]
    fn test_validate_language_code_rejects_garbage() {
        assert!(validate_language_code("").is_err());
        assert!(validate_language_code("not a language").is_err());
    }

    #[test]
    fn test_validate_file_path_missing() {
        assert!(validate_file_path(Path::new("definitely/not/here.strings")).is_err());
    }
}
