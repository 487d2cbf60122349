//! Support for the Apple `.strings` localization format.
//!
//! Parses `"key" = "value";` tables with optional preceding comments, and
//! serializes them back. Values are stored unescaped; escaping is applied on
//! write.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use indoc::indoc;
use lazy_static::lazy_static;
use regex::Regex;

use crate::{error::Error, traits::Parser};

lazy_static! {
    // "key" = "value"; with backslash escapes allowed inside both quoted parts.
    static ref PAIR_REGEX: Regex =
        Regex::new(r#"^"((?:[^"\\]|\\.)+)"\s*=\s*"((?:[^"\\]|\\.)*)"\s*;"#).unwrap();
}

/// Unescapes a `.strings` value: `\"`, `\n`, and `\\` become their literal
/// characters. Unknown escape sequences are kept verbatim.
pub fn unescape_value(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => result.push('"'),
            Some('n') => result.push('\n'),
            Some('\\') => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            // Trailing lone backslash, keep it.
            None => result.push('\\'),
        }
    }
    result
}

/// Escapes a value for embedding in a `.strings` file. Inverse of
/// [`unescape_value`] for values without pre-existing malformed escapes.
pub fn escape_value(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => result.push_str(r"\\"),
            '"' => result.push_str(r#"\""#),
            '\n' => result.push_str(r"\n"),
            _ => result.push(c),
        }
    }
    result
}

/// Represents one Apple `.strings` localization table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Format {
    /// Language code for this table, if known. The `.strings` format itself
    /// carries no language metadata; callers set this from the `.lproj`
    /// directory name.
    pub language: String,
    /// All key-value pairs (and optional comments), in file order.
    pub pairs: Vec<Pair>,
}

impl Format {
    /// Creates an empty table tagged with a language code.
    pub fn new(language: impl Into<String>) -> Self {
        Format {
            language: language.into(),
            pairs: Vec::new(),
        }
    }

    /// Reads a table from a path, returning an empty table when the file does
    /// not exist. Used by the audit path, where an absent translation file is
    /// a finding rather than an error.
    pub fn read_from_or_empty<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        if !path.as_ref().exists() {
            return Ok(Format::default());
        }
        Self::read_from(path)
    }

    /// Map view of the table. Duplicate keys collapse to the last occurrence.
    pub fn key_map(&self) -> BTreeMap<&str, &str> {
        self.pairs
            .iter()
            .map(|pair| (pair.key.as_str(), pair.value.as_str()))
            .collect()
    }

    /// Set of all keys in the table.
    pub fn key_set(&self) -> BTreeSet<String> {
        self.pairs.iter().map(|pair| pair.key.clone()).collect()
    }

    /// Looks up the (last-wins) value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|pair| pair.key == key)
            .map(|pair| pair.value.as_str())
    }
}

impl Parser for Format {
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        let mut pairs = Vec::new();
        let mut last_comment: Option<String> = None;

        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();

            if trimmed.is_empty() {
                continue;
            }
            if trimmed.starts_with("/*") || trimmed.starts_with("//") {
                last_comment = Some(trimmed.to_string());
                continue;
            }

            // Malformed lines (missing semicolon, unbalanced quotes) are
            // skipped, never raised. The format is human-curated.
            let Some(captures) = PAIR_REGEX.captures(trimmed) else {
                continue;
            };

            pairs.push(Pair {
                key: captures[1].to_string(),
                value: unescape_value(&captures[2]),
                comment: last_comment.take(),
            });
        }

        Ok(Format {
            language: String::new(),
            pairs,
        })
    }

    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut content = String::new();

        let header = format!(
            indoc! {r#"
            // Generated by locaudit.
            //
            // Language: {}
            //

            "#},
            if self.language.is_empty() {
                "unknown"
            } else {
                &self.language
            }
        );
        content.push_str(&header);

        for pair in &self.pairs {
            content.push_str(&pair.to_string());
            content.push('\n');
        }

        writer.write_all(content.as_bytes()).map_err(Error::Io)
    }

    /// Override default file reading for BOM-aware decoding; Apple tools
    /// historically wrote `.strings` files as UTF-16.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_str(&decode_file(path)?)
    }
}

/// Decodes a `.strings` file to UTF-8 text, honoring a BOM. Tools that edit
/// files in place go through this so they accept the same encodings as the
/// parser.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let file = File::open(path).map_err(Error::Io)?;
    let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .bom_override(true)
        .build(file);

    let mut decoded = String::new();
    decoder.read_to_string(&mut decoded).map_err(Error::Io)?;
    Ok(decoded)
}

/// A single key-value pair in a `.strings` file, possibly with an associated
/// comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    /// The key for this localization entry.
    pub key: String,
    /// The value, unescaped.
    pub value: String,
    /// Optional comment immediately preceding the key-value pair, comment
    /// marker included. Trailing comments on the pair's own line are not
    /// attached.
    pub comment: Option<String>,
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(comment) = &self.comment {
            writeln!(f, "{}", comment)?;
        }
        write!(f, "\"{}\" = \"{}\";", self.key, escape_value(&self.value))
    }
}
