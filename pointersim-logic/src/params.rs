//! Persisted parameter state
//!
//! Key/value settings the UI and logic synchronize through. The host
//! persists them with the scene; defaults are written once and never
//! overwrite values that are already present.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Translation along the right-left axis, in scene units
pub const TRANSLATE_RL: &str = "TranslateRL";

/// Translation along the anterior-posterior axis
pub const TRANSLATE_AP: &str = "TranslateAP";

/// Translation along the superior-inferior axis
pub const TRANSLATE_SI: &str = "TranslateSI";

/// Default value of each translation parameter
pub const DEFAULT_TRANSLATION: &str = "0.0";

/// String key/value parameter store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterState {
    values: BTreeMap<String, String>,
}

impl ParameterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value unconditionally
    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// Write a default: a no-op when the key already holds a value
    pub fn set_default(&mut self, key: &str, value: &str) {
        self.values
            .entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Parse a parameter as `f64`
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key)?.parse().ok()
    }

    /// Write the three translation defaults without clobbering existing values
    pub fn apply_translation_defaults(&mut self) {
        self.set_default(TRANSLATE_RL, DEFAULT_TRANSLATION);
        self.set_default(TRANSLATE_AP, DEFAULT_TRANSLATION);
        self.set_default(TRANSLATE_SI, DEFAULT_TRANSLATION);
    }

    /// The stored `(rl, ap, si)` translation, unparsable or absent values
    /// falling back to zero
    pub fn translation(&self) -> (f64, f64, f64) {
        (
            self.get_f64(TRANSLATE_RL).unwrap_or(0.0),
            self.get_f64(TRANSLATE_AP).unwrap_or(0.0),
            self.get_f64(TRANSLATE_SI).unwrap_or(0.0),
        )
    }
}
