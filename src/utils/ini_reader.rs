//! INI file reader
//!
//! A thin adapter over `configparser` that exposes a parsed document as
//! sections of key/value pairs. Section and key names keep their original
//! case; keys outside any section land in [`DEFAULT_SECTION`]. Values come
//! back as `configparser` returns them: surrounding quotes are not stripped.

use std::fs;
use std::path::Path;

use configparser::ini::Ini;

use crate::error::{PropertiesError, Result};

/// Section holding keys that appear before the first `[section]` header
pub const DEFAULT_SECTION: &str = "default";

/// Parsed INI document
pub struct IniReader {
    ini: Ini,
}

impl Default for IniReader {
    fn default() -> Self {
        Self::new()
    }
}

impl IniReader {
    pub fn new() -> Self {
        let mut ini = Ini::new_cs();
        ini.set_default_section(DEFAULT_SECTION);
        IniReader { ini }
    }

    /// Create a reader and parse a file into it
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = IniReader::new();
        reader.parse_file(path)?;
        Ok(reader)
    }

    /// Parse INI content, replacing anything parsed before
    ///
    /// Returns the parser's message on malformed input.
    pub fn parse(&mut self, content: &str) -> std::result::Result<(), String> {
        let mut ini = Ini::new_cs();
        ini.set_default_section(DEFAULT_SECTION);
        ini.read(content.to_string())?;
        self.ini = ini;
        Ok(())
    }

    /// Read and parse an INI file
    pub fn parse_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PropertiesError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(&content).map_err(|message| PropertiesError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Visit every `(section, key, value)` in the document
    pub fn for_each_item<F>(&self, mut f: F)
    where
        F: FnMut(&str, &str, &str),
    {
        for (section, items) in self.ini.get_map_ref() {
            for (key, value) in items {
                f(section, key, value.as_deref().unwrap_or(""));
            }
        }
    }

    /// Insert an item directly, bypassing the grammar checks of `parse`
    #[cfg(test)]
    pub(crate) fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.set(section, key, Some(value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(reader: &IniReader) -> Vec<String> {
        let mut seen = Vec::new();
        reader.for_each_item(|s, k, v| seen.push(format!("{}/{}={}", s, k, v)));
        seen.sort();
        seen
    }

    #[test]
    fn test_parse_sections() {
        let mut reader = IniReader::new();
        reader
            .parse("global = 1\n[Server]\nProtocol = http\n; comment\nflag\n")
            .unwrap();

        assert_eq!(
            collect(&reader),
            vec!["Server/Protocol=http", "Server/flag=", "default/global=1"]
        );
    }

    #[test]
    fn test_quotes_are_kept() {
        let mut reader = IniReader::new();
        reader.parse("[s]\nq = \"quoted\"\n").unwrap();
        assert_eq!(collect(&reader), vec!["s/q=\"quoted\""]);
    }

    #[test]
    fn test_empty_key_rejected() {
        let mut reader = IniReader::new();
        assert!(reader.parse("[s]\n= orphan\n").is_err());
    }

    #[test]
    fn test_for_each_item() {
        let mut reader = IniReader::new();
        reader.parse("[a]\nx = 1\n[b]\ny = 2\n").unwrap();
        assert_eq!(collect(&reader), vec!["a/x=1", "b/y=2"]);
    }

    #[test]
    fn test_missing_file() {
        let err = IniReader::from_file("/nonexistent/propstore.ini")
            .err()
            .unwrap();
        assert!(matches!(err, PropertiesError::SourceRead { .. }));
    }
}
