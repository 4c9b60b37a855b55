//! INI loader
//!
//! Every key of every section becomes one property. Effective keys are
//! lowercased as a whole, including a concatenated section name; values are
//! kept verbatim, so `q = "quoted"` loads with its quotes.

use std::path::PathBuf;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{PropertiesError, Result};
use crate::loader::Load;
use crate::models::Properties;
use crate::utils::ini_reader::IniReader;

pub const DEFAULT_SEPARATOR: &str = ".";

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

/// Options for [`load_ini`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IniOptions {
    pub filename: PathBuf,
    /// Prefix each key with its section name and [`IniOptions::separator`]
    #[serde(default)]
    pub concat_section_name: bool,
    /// Joins section and key; an empty separator means `.`
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl IniOptions {
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        IniOptions {
            filename: filename.into(),
            concat_section_name: false,
            separator: default_separator(),
        }
    }

    pub fn concat_section_name(mut self, concat: bool) -> Self {
        self.concat_section_name = concat;
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    fn effective_separator(&self) -> &str {
        if self.separator.is_empty() {
            DEFAULT_SEPARATOR
        } else {
            &self.separator
        }
    }

    fn effective_key(&self, section: &str, key: &str) -> String {
        if self.concat_section_name {
            format!("{}{}{}", section, self.effective_separator(), key).to_lowercase()
        } else {
            key.to_lowercase()
        }
    }
}

impl Load for IniOptions {
    fn load(&self) -> Result<Properties> {
        load_ini(self)
    }
}

/// Load an INI file into a new property store
pub fn load_ini(options: &IniOptions) -> Result<Properties> {
    debug!("Loading INI properties from {}", options.filename.display());
    let reader = IniReader::from_file(&options.filename)?;
    let props = collect_properties(&reader, options);
    info!(
        "Loaded {} properties from {}",
        props.size(),
        options.filename.display()
    );
    Ok(props)
}

/// Load INI content held in memory, normalising keys as [`load_ini`] does
///
/// `options.filename` is only used in error messages.
pub fn load_ini_str(content: &str, options: &IniOptions) -> Result<Properties> {
    let mut reader = IniReader::new();
    reader
        .parse(content)
        .map_err(|message| PropertiesError::Parse {
            path: options.filename.clone(),
            message,
        })?;
    Ok(collect_properties(&reader, options))
}

// `configparser` already rejects `= value` lines, so an empty key only
// reaches here from a reader populated some other way.
fn collect_properties(reader: &IniReader, options: &IniOptions) -> Properties {
    let mut props = Properties::new();
    reader.for_each_item(|section, key, value| {
        if key.is_empty() {
            warn!("Skipping property with empty name in section [{}]", section);
            return;
        }
        props.set_property(options.effective_key(section, key), value);
    });
    props
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_key() {
        let opts = IniOptions::new("app.ini");
        assert_eq!(opts.effective_key("Server", "Protocol"), "protocol");

        let opts = opts.concat_section_name(true);
        assert_eq!(opts.effective_key("Server", "Protocol"), "server.protocol");

        let opts = opts.separator("::");
        assert_eq!(opts.effective_key("Server", "Port"), "server::port");

        let opts = opts.separator("");
        assert_eq!(opts.effective_key("Server", "Port"), "server.port");
    }

    #[test]
    fn test_load_ini_str_keeps_value_case() {
        let opts = IniOptions::new("inline.ini").concat_section_name(true);
        let props = load_ini_str("[DB]\nUser = Admin\n", &opts).unwrap();
        assert_eq!(props.must_string("db.user"), "Admin");
    }

    #[test]
    fn test_collect_skips_empty_key() {
        let mut reader = IniReader::new();
        reader.set("s", "", "orphan");
        reader.set("s", "kept", "yes");

        let props = collect_properties(&reader, &IniOptions::new("inline.ini"));

        assert_eq!(props.size(), 1);
        assert_eq!(props.must_string("kept"), "yes");
        assert!(!props.has_property(""));
    }
}
