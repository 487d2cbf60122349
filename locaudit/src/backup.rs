//! Timestamped safety copies of `.strings` files.
//!
//! Backups never modify the originals; a failed copy is the caller's to log
//! and must not abort an audit run.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Error;

/// Directory created under the resource tree to hold backups.
pub const BACKUP_DIR_NAME: &str = ".localization_backups";

/// Copies `file` into `backup_dir` as `<stem>_<lang>_<YYYYMMDD_HHMMSS><ext>`.
///
/// Creates `backup_dir` if needed and returns the backup path.
pub fn backup_file(file: &Path, backup_dir: &Path, lang: &str) -> Result<PathBuf, Error> {
    std::fs::create_dir_all(backup_dir)?;

    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::validation_error(format!("not a file path: {}", file.display())))?;
    let extension = file
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let backup_path = backup_dir.join(format!("{stem}_{lang}_{timestamp}{extension}"));

    std::fs::copy(file, &backup_path)?;
    Ok(backup_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_backup_copies_without_modifying_original() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("Localizable.strings");
        fs::write(&original, "\"App.a\" = \"A\";\n").unwrap();

        let backup_dir = dir.path().join(BACKUP_DIR_NAME);
        let backup = backup_file(&original, &backup_dir, "es").unwrap();

        assert!(backup.exists());
        let name = backup.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("Localizable_es_"));
        assert!(name.ends_with(".strings"));
        assert_eq!(
            fs::read_to_string(&original).unwrap(),
            fs::read_to_string(&backup).unwrap()
        );
        assert_eq!(fs::read_to_string(&original).unwrap(), "\"App.a\" = \"A\";\n");
    }

    #[test]
    fn test_backup_missing_source_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.strings");
        let result = backup_file(&missing, &dir.path().join("backups"), "fr");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
