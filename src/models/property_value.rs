use crate::error::{PropertiesError, Result};
use crate::utils::string::{parse_bool, parse_float, parse_int, parse_uint};

/// A type a stored string value can be converted into on demand
pub trait PropertyValue: Sized {
    /// Name used in conversion error messages
    const TYPE_NAME: &'static str;

    fn parse_value(raw: &str) -> std::result::Result<Self, String>;

    /// Parse `raw`, attributing any failure to `key`
    fn from_property(key: &str, raw: &str) -> Result<Self> {
        Self::parse_value(raw).map_err(|reason| PropertiesError::Conversion {
            key: key.to_string(),
            value: raw.to_string(),
            target: Self::TYPE_NAME,
            reason,
        })
    }
}

impl PropertyValue for String {
    const TYPE_NAME: &'static str = "string";

    fn parse_value(raw: &str) -> std::result::Result<Self, String> {
        Ok(raw.to_string())
    }
}

impl PropertyValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn parse_value(raw: &str) -> std::result::Result<Self, String> {
        parse_bool(raw)
    }
}

impl PropertyValue for i64 {
    const TYPE_NAME: &'static str = "int";

    fn parse_value(raw: &str) -> std::result::Result<Self, String> {
        parse_int(raw)
    }
}

impl PropertyValue for u64 {
    const TYPE_NAME: &'static str = "uint";

    fn parse_value(raw: &str) -> std::result::Result<Self, String> {
        parse_uint(raw)
    }
}

impl PropertyValue for f64 {
    const TYPE_NAME: &'static str = "float";

    fn parse_value(raw: &str) -> std::result::Result<Self, String> {
        parse_float(raw)
    }
}
