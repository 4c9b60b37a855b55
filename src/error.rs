use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the property store and its loaders
#[derive(Error, Debug)]
pub enum PropertiesError {
    #[error("Property not found: {key}")]
    NotFound { key: String },

    #[error("Cannot convert property `{key}` (value `{value}`) to {target}: {reason}")]
    Conversion {
        key: String,
        value: String,
        target: &'static str,
        reason: String,
    },

    #[error("I/O error reading {}: {}", .path.display(), .source)]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Parse error in {}: {}", .path.display(), .message)]
    Parse { path: PathBuf, message: String },
}

impl PropertiesError {
    pub fn not_found(key: &str) -> Self {
        PropertiesError::NotFound {
            key: key.to_string(),
        }
    }

    /// True for the one failure the defaulting accessors absorb
    pub fn is_not_found(&self) -> bool {
        matches!(self, PropertiesError::NotFound { .. })
    }

    pub fn is_conversion(&self) -> bool {
        matches!(self, PropertiesError::Conversion { .. })
    }
}

pub type Result<T> = std::result::Result<T, PropertiesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = PropertiesError::not_found("port");
        assert!(err.is_not_found());
        assert!(!err.is_conversion());
        assert_eq!(err.to_string(), "Property not found: port");

        let err = PropertiesError::Conversion {
            key: "port".to_string(),
            value: "abc".to_string(),
            target: "int",
            reason: "invalid digit found in string".to_string(),
        };
        assert!(err.is_conversion());
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("`abc`"));
    }
}
