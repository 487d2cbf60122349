//! Discovery of per-language `.lproj` directories and `.strings` files.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;

/// Directory suffix for per-language resource folders.
pub const LPROJ_SUFFIX: &str = ".lproj";

lazy_static! {
    static ref LANGUAGE_NAMES: HashMap<&'static str, &'static str> = HashMap::from([
        ("en", "English"),
        ("es", "Spanish"),
        ("fr", "French"),
        ("de", "German"),
        ("ja", "Japanese"),
        ("ko", "Korean"),
        ("zh-Hans", "Simplified Chinese"),
        ("zh-Hant", "Traditional Chinese"),
        ("pl", "Polish"),
        ("pt", "Portuguese"),
        ("it", "Italian"),
        ("ru", "Russian"),
        ("ar", "Arabic"),
        ("hi", "Hindi"),
        ("de-CH", "Swiss German"),
        ("fr-CA", "Canadian French"),
        ("es-MX", "Mexican Spanish"),
    ]);
}

/// Human-readable display name for a language code, falling back to the raw
/// code when unknown.
pub fn display_name(code: &str) -> String {
    LANGUAGE_NAMES
        .get(code)
        .map(|name| name.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Enumerates language codes by scanning `base_dir` for `<code>.lproj`
/// subdirectories, excluding the base language itself.
///
/// Returns a code → display name mapping. A missing `base_dir` yields an
/// empty mapping; the caller decides whether that is a usage error.
pub fn discover_languages(base_dir: &Path, base_lang: &str) -> BTreeMap<String, String> {
    let mut languages = BTreeMap::new();

    let Ok(entries) = std::fs::read_dir(base_dir) else {
        return languages;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(code) = name.strip_suffix(LPROJ_SUFFIX) else {
            continue;
        };
        if code == base_lang {
            continue;
        }
        languages.insert(code.to_string(), display_name(code));
    }

    languages
}

/// Locates the base language file: `<base_dir>/<base_lang>.lproj/<filename>`,
/// falling back to `<base_dir>/<filename>` for flat layouts.
pub fn find_base_file(base_dir: &Path, base_lang: &str, filename: &str) -> Option<PathBuf> {
    let base_file = base_dir
        .join(format!("{base_lang}{LPROJ_SUFFIX}"))
        .join(filename);
    if base_file.exists() {
        return Some(base_file);
    }

    let flat_file = base_dir.join(filename);
    if flat_file.exists() {
        return Some(flat_file);
    }

    None
}

/// Locates a target language file, if present on disk.
pub fn find_language_file(base_dir: &Path, code: &str, filename: &str) -> Option<PathBuf> {
    let lang_file = base_dir.join(format!("{code}{LPROJ_SUFFIX}")).join(filename);
    lang_file.exists().then_some(lang_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_display_name_known_and_unknown() {
        assert_eq!(display_name("es"), "Spanish");
        assert_eq!(display_name("zh-Hans"), "Simplified Chinese");
        assert_eq!(display_name("tlh"), "tlh");
    }

    #[test]
    fn test_discover_excludes_base_language() {
        let dir = tempfile::tempdir().unwrap();
        for code in ["en", "es", "fr"] {
            fs::create_dir(dir.path().join(format!("{code}.lproj"))).unwrap();
        }
        fs::create_dir(dir.path().join("notalang")).unwrap();
        fs::write(dir.path().join("de.lproj"), "a file, not a dir").unwrap();

        let languages = discover_languages(dir.path(), "en");
        assert_eq!(
            languages.keys().cloned().collect::<Vec<_>>(),
            vec!["es".to_string(), "fr".to_string()]
        );
        assert_eq!(languages.get("es"), Some(&"Spanish".to_string()));
    }

    #[test]
    fn test_discover_missing_dir_is_empty() {
        let languages = discover_languages(Path::new("does/not/exist"), "en");
        assert!(languages.is_empty());
    }

    #[test]
    fn test_find_base_file_prefers_lproj_then_flat() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("en.lproj")).unwrap();
        fs::write(dir.path().join("en.lproj/Localizable.strings"), "").unwrap();
        fs::write(dir.path().join("Localizable.strings"), "").unwrap();

        let found = find_base_file(dir.path(), "en", "Localizable.strings").unwrap();
        assert!(found.ends_with("en.lproj/Localizable.strings"));

        fs::remove_file(dir.path().join("en.lproj/Localizable.strings")).unwrap();
        let found = find_base_file(dir.path(), "en", "Localizable.strings").unwrap();
        assert_eq!(found, dir.path().join("Localizable.strings"));
    }

    #[test]
    fn test_find_language_file_absent() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_language_file(dir.path(), "fr", "Localizable.strings").is_none());
    }
}
