//! In-memory property store
//!
//! Values are always stored as strings. The typed accessors parse on demand
//! and never cache the parsed form. A store does no internal locking; share it
//! across threads only behind external synchronisation.

use std::collections::hash_map;
use std::collections::HashMap;

use crate::error::{PropertiesError, Result};
use crate::models::property_value::PropertyValue;

/// String keys mapped to string values, with typed accessors
///
/// Every typed accessor comes in three forms:
/// * `get_*` returns an error when the key is absent or the value does not parse
/// * `*` (e.g. [`Properties::int`]) falls back to a default only when the key is
///   absent; a value that does not parse is still an error
/// * `must_*` panics on any failure and is meant for call sites where a missing
///   or malformed property is a programming error, never for recoverable handling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    props: HashMap<String, String>,
}

impl Properties {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from alternating keys and values
    ///
    /// A trailing key without a value gets an empty string. Later duplicates
    /// overwrite earlier ones.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut props = HashMap::new();
        let mut iter = pairs.into_iter();
        while let Some(key) = iter.next() {
            let value = iter.next().map(Into::into).unwrap_or_default();
            props.insert(key.into(), value);
        }
        Properties { props }
    }

    /// Adopt an existing map without copying it
    pub fn from_map(props: HashMap<String, String>) -> Self {
        Properties { props }
    }

    /// Give the underlying map back to the caller
    pub fn into_inner(self) -> HashMap<String, String> {
        self.props
    }

    pub fn all(&self) -> &HashMap<String, String> {
        &self.props
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.props.iter()
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.props.insert(key.into(), value.into());
    }

    /// Get the raw value of a property
    pub fn get_property(&self, key: &str) -> Result<&str> {
        self.props
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| PropertiesError::not_found(key))
    }

    /// Get the raw value of a property, or `def` when it is absent
    pub fn property<'a>(&'a self, key: &str, def: &'a str) -> &'a str {
        self.props.get(key).map(String::as_str).unwrap_or(def)
    }

    pub fn has_property(&self, key: &str) -> bool {
        self.props.contains_key(key)
    }

    /// Get a property converted to `T`
    pub fn get_as<T: PropertyValue>(&self, key: &str) -> Result<T> {
        let raw = self.get_property(key)?;
        T::from_property(key, raw)
    }

    /// Get a property converted to `T`, falling back to `def` when absent
    pub fn get_or<T: PropertyValue>(&self, key: &str, def: T) -> Result<T> {
        match self.get_as(key) {
            Err(err) if err.is_not_found() => Ok(def),
            other => other,
        }
    }

    /// Get a property converted to `T`, panicking on any failure
    #[track_caller]
    pub fn must_as<T: PropertyValue>(&self, key: &str) -> T {
        match self.get_as(key) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn get_string(&self, key: &str) -> Result<String> {
        self.get_as(key)
    }

    #[track_caller]
    pub fn must_string(&self, key: &str) -> String {
        self.must_as(key)
    }

    pub fn string(&self, key: &str, def: &str) -> String {
        self.property(key, def).to_string()
    }

    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.get_as(key)
    }

    #[track_caller]
    pub fn must_bool(&self, key: &str) -> bool {
        self.must_as(key)
    }

    pub fn bool(&self, key: &str, def: bool) -> Result<bool> {
        self.get_or(key, def)
    }

    pub fn get_int(&self, key: &str) -> Result<i64> {
        self.get_as(key)
    }

    #[track_caller]
    pub fn must_int(&self, key: &str) -> i64 {
        self.must_as(key)
    }

    pub fn int(&self, key: &str, def: i64) -> Result<i64> {
        self.get_or(key, def)
    }

    pub fn get_float(&self, key: &str) -> Result<f64> {
        self.get_as(key)
    }

    #[track_caller]
    pub fn must_float(&self, key: &str) -> f64 {
        self.must_as(key)
    }

    pub fn float(&self, key: &str, def: f64) -> Result<f64> {
        self.get_or(key, def)
    }

    pub fn get_uint(&self, key: &str) -> Result<u64> {
        self.get_as(key)
    }

    #[track_caller]
    pub fn must_uint(&self, key: &str) -> u64 {
        self.must_as(key)
    }

    pub fn uint(&self, key: &str, def: u64) -> Result<u64> {
        self.get_or(key, def)
    }

    /// All keys, in no particular order
    pub fn keys(&self) -> Vec<String> {
        self.props.keys().cloned().collect()
    }

    /// Keys starting with `prefix`; an empty prefix matches every key
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.props
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect()
    }

    /// New store holding only the properties whose key starts with `prefix`
    pub fn get_with_prefix(&self, prefix: &str) -> Properties {
        self.props
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Remove a property, returning whether it existed
    pub fn remove_property(&mut self, key: &str) -> bool {
        self.props.remove(key).is_some()
    }

    /// True if every key is present; false for an empty key set
    pub fn contains<I, S>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen_any = false;
        for key in keys {
            if !self.has_property(key.as_ref()) {
                return false;
            }
            seen_any = true;
        }
        seen_any
    }

    /// True if at least one key is present; false for an empty key set
    pub fn contains_any<I, S>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter().any(|key| self.has_property(key.as_ref()))
    }

    pub fn size(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Merge `other` into a copy of this store
    ///
    /// Keys only in `other` are always added. Keys in both keep this store's
    /// value unless `overwrite_same_keys` is set. Neither input is modified.
    pub fn merge(&self, other: &Properties, overwrite_same_keys: bool) -> Properties {
        let mut merged = self.clone();
        for (k, v) in other.iter() {
            if overwrite_same_keys || !merged.has_property(k) {
                merged.set_property(k.clone(), v.clone());
            }
        }
        merged
    }

    /// New store with every key passed through `transform`
    ///
    /// Colliding output keys overwrite each other in unspecified order, so
    /// `transform` should be injective.
    pub fn rename_keys<F>(&self, mut transform: F) -> Properties
    where
        F: FnMut(&str) -> String,
    {
        self.props
            .iter()
            .map(|(k, v)| (transform(k), v.clone()))
            .collect()
    }
}

impl From<HashMap<String, String>> for Properties {
    fn from(props: HashMap<String, String>) -> Self {
        Properties::from_map(props)
    }
}

impl<K, V> FromIterator<(K, V)> for Properties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut props = Properties::new();
        props.extend(iter);
        props
    }
}

impl<K, V> Extend<(K, V)> for Properties
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.set_property(k, v);
        }
    }
}

impl IntoIterator for Properties {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.props.into_iter()
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = (&'a String, &'a String);
    type IntoIter = hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.props.iter()
    }
}
