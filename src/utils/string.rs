//! String utility functions for parsing stored property values
//!
//! Every parser returns the failure reason as a plain string; callers wrap it
//! into a conversion error together with the key and raw value.

/// Parse a boolean token
///
/// # Arguments
///
/// * `s` - The raw value
///
/// # Returns
///
/// `true` for `1`, `t`, `T`, `TRUE`, `true`, `True`; `false` for `0`, `f`,
/// `F`, `FALSE`, `false`, `False`; an error for anything else
pub fn parse_bool(s: &str) -> Result<bool, String> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err("invalid boolean syntax".to_string()),
    }
}

/// Parse a base-10 signed integer, accepting an optional `+` or `-` sign
pub fn parse_int(s: &str) -> Result<i64, String> {
    s.parse::<i64>().map_err(|e| e.to_string())
}

/// Parse a base-10 unsigned integer
///
/// Unlike `u64::from_str`, a leading `+` is rejected: only digits are valid.
pub fn parse_uint(s: &str) -> Result<u64, String> {
    if s.starts_with('+') {
        return Err("invalid digit found in string".to_string());
    }
    s.parse::<u64>().map_err(|e| e.to_string())
}

/// Parse a decimal or exponential floating point number
///
/// # Arguments
///
/// * `s` - The raw value
///
/// # Returns
///
/// The parsed value. `inf`, `infinity` and `nan` are accepted in any case,
/// but a finite literal too large for `f64` is reported as out of range
/// instead of silently becoming infinity.
pub fn parse_float(s: &str) -> Result<f64, String> {
    let value = s.parse::<f64>().map_err(|e| e.to_string())?;
    if value.is_infinite() && !is_infinity_literal(s) {
        return Err("value out of range".to_string());
    }
    Ok(value)
}

fn is_infinity_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
