//! Matcher settings
//!
//! Settings extend the built-in value-type registry and accessor denylist.
//! They are usually constructed in code, or loaded from TOML:
//!
//! ```toml
//! simple_types = ["my_crate::Money"]
//! ignored_accessors = ["get_cache"]
//! ```

use crate::errors::Result;
use crate::value::Reflect;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Accessors that expose identity or meta information rather than state
pub const DEFAULT_IGNORED_ACCESSORS: &[&str] = &[
    "getClass",
    "get_class",
    "type_id",
    "type_name",
    "getProtectionDomain",
    "getClassLoader",
    "getURLs",
    "hashCode",
    "hash_code",
    "toString",
    "to_string",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherSettings {
    /// Additional type names compared by plain equality
    pub simple_types: BTreeSet<String>,

    /// Accessor names skipped in addition to [`DEFAULT_IGNORED_ACCESSORS`]
    pub ignored_accessors: BTreeSet<String>,
}

impl MatcherSettings {
    /// Parse settings from a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Register `T` as a value type
    pub fn with_simple_type<T: Reflect>(self) -> Self {
        let name = T::type_ref().name;
        self.with_simple_type_name(name)
    }

    pub fn with_simple_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.simple_types.insert(type_name.into());
        self
    }

    pub fn with_ignored_accessor(mut self, name: impl Into<String>) -> Self {
        self.ignored_accessors.insert(name.into());
        self
    }

    pub fn is_simple_type(&self, type_name: &str) -> bool {
        self.simple_types.contains(type_name)
    }

    pub fn is_ignored(&self, accessor: &str) -> bool {
        DEFAULT_IGNORED_ACCESSORS.contains(&accessor) || self.ignored_accessors.contains(accessor)
    }
}
