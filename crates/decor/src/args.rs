//! A dynamic argument bag for targets whose arity is only known at call time.
//!
//! [`CallArgs`] keeps positional values in order and keyed values by name,
//! every value being a [`serde_json::Value`]. A target taking `CallArgs`
//! extracts what it needs with [`CallArgs::get`] and [`CallArgs::keyed`],
//! which report [`ArgsError`] on missing or mistyped arguments.

use crate::error::ArgsError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallArgs {
    #[serde(default)]
    positional: Vec<Value>,
    #[serde(default)]
    keyed: BTreeMap<String, Value>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// append a positional argument
    pub fn arg<V: Into<Value>>(mut self, value: V) -> Self {
        self.positional.push(value.into());
        self
    }

    /// set a keyed argument, replacing any previous value under the same key
    pub fn kwarg<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.keyed.insert(key.into(), value.into());
        self
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn keyed_values(&self) -> &BTreeMap<String, Value> {
        &self.keyed
    }

    pub fn len(&self) -> usize {
        self.positional.len() + self.keyed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyed.is_empty()
    }

    pub fn get<T: DeserializeOwned>(&self, index: usize) -> Result<T, ArgsError> {
        let value = self.positional.get(index).ok_or(ArgsError::MissingPositional { index })?;
        T::deserialize(value).map_err(|e| ArgsError::invalid_type(format!("#{index}"), e))
    }

    pub fn keyed<T: DeserializeOwned>(&self, key: &str) -> Result<T, ArgsError> {
        let value = self.keyed.get(key).ok_or_else(|| ArgsError::missing_keyed(key))?;
        T::deserialize(value).map_err(|e| ArgsError::invalid_type(key, e))
    }

    /// like [`CallArgs::keyed`], falling back to `default` when the key is absent
    pub fn keyed_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, ArgsError> {
        match self.keyed.get(key) {
            Some(value) => T::deserialize(value).map_err(|e| ArgsError::invalid_type(key, e)),
            None => Ok(default),
        }
    }

    /// every string value with its argument label, `#0` for positional, the key for keyed
    pub fn texts(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        let positional = self.positional.iter().enumerate().filter_map(|(i, v)| v.as_str().map(|s| (format!("#{i}"), s)));
        let keyed = self.keyed.iter().filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s)));
        positional.chain(keyed)
    }
}

/// renders like a call site: `(5, 7, name="Asha")`
impl fmt::Display for CallArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        let mut first = true;
        for value in &self.positional {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{value}")?;
        }
        for (key, value) in &self.keyed {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{key}={value}")?;
        }
        f.write_str(")")
    }
}
