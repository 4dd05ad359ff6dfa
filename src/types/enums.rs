//! Enumerant tables.
//!
//! The enum-spec parser produces an `EnumTable` whose values may still be
//! `use` references into other APIs. The resolver turns it into a
//! `ResolvedEnumTable`, which only holds literal values.

use indexmap::IndexMap;
use serde::Serialize;

/// Name of an API unit: an extension (`ARB_multitexture`) or a version
/// token (`VERSION_1_3`).
pub type ApiName = String;

/// Literal substituted for references the resolver cannot satisfy.
pub const UNRESOLVED_SENTINEL: &str = "NULL";

/// The value of an enumerant as written in the enum spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumValue {
    /// A numeral, stored exactly as written (`0x8513`, `2`).
    Literal(String),
    /// `use <api> <name>`: the value is whatever `<api>` defines for the same name.
    Reference(ApiName),
}

impl EnumValue {
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            EnumValue::Literal(value) => Some(value),
            EnumValue::Reference(_) => None,
        }
    }
}

/// Enumerants per API, both levels in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnumTable {
    apis: IndexMap<ApiName, IndexMap<String, EnumValue>>,
}

impl EnumTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `api` has a section, keeping its original position if it
    /// was already seen.
    pub fn open_section(&mut self, api: &str) {
        if !self.apis.contains_key(api) {
            self.apis.insert(api.to_string(), IndexMap::new());
        }
    }

    /// Define `name` in `api`. A repeated name keeps its first position and
    /// takes the new value.
    pub fn insert(&mut self, api: &str, name: impl Into<String>, value: EnumValue) {
        self.open_section(api);
        if let Some(section) = self.apis.get_mut(api) {
            section.insert(name.into(), value);
        }
    }

    pub fn get(&self, api: &str, name: &str) -> Option<&EnumValue> {
        self.apis.get(api)?.get(name)
    }

    pub fn section(&self, api: &str) -> Option<&IndexMap<String, EnumValue>> {
        self.apis.get(api)
    }

    /// Iterate over `(api, enumerants)` in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&ApiName, &IndexMap<String, EnumValue>)> {
        self.apis.iter()
    }

    pub fn api_names(&self) -> impl Iterator<Item = &str> {
        self.apis.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.apis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apis.is_empty()
    }

    /// Count of `Reference` entries still waiting for resolution.
    pub fn reference_count(&self) -> usize {
        self.apis
            .values()
            .flat_map(|section| section.values())
            .filter(|value| matches!(value, EnumValue::Reference(_)))
            .count()
    }
}

/// Enumerants per API after reference resolution. Every value is a literal
/// (or the `NULL` sentinel).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedEnumTable {
    apis: IndexMap<ApiName, IndexMap<String, String>>,
}

impl ResolvedEnumTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, api: &str, name: impl Into<String>, value: impl Into<String>) {
        self.apis
            .entry(api.to_string())
            .or_default()
            .insert(name.into(), value.into());
    }

    /// Register an API with no enumerants so it keeps its table position.
    pub fn open_section(&mut self, api: &str) {
        self.apis.entry(api.to_string()).or_default();
    }

    pub fn get(&self, api: &str, name: &str) -> Option<&str> {
        self.apis.get(api)?.get(name).map(|v| v.as_str())
    }

    pub fn section(&self, api: &str) -> Option<&IndexMap<String, String>> {
        self.apis.get(api)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ApiName, &IndexMap<String, String>)> {
        self.apis.iter()
    }

    pub fn api_names(&self) -> impl Iterator<Item = &str> {
        self.apis.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.apis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apis.is_empty()
    }
}

/// Whether `value` is a decimal or `0x`-prefixed hexadecimal numeral.
pub fn is_numeric_literal(value: &str) -> bool {
    if let Some(hex) = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        return !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut table = EnumTable::new();
        table.insert("VERSION_1_0", "GL_A", EnumValue::Literal("1".into()));
        table.insert("VERSION_1_0", "GL_B", EnumValue::Literal("2".into()));
        table.insert("VERSION_1_0", "GL_A", EnumValue::Literal("3".into()));

        let names: Vec<&String> = table.section("VERSION_1_0").unwrap().keys().collect();
        assert_eq!(names, ["GL_A", "GL_B"]);
        assert_eq!(
            table.get("VERSION_1_0", "GL_A"),
            Some(&EnumValue::Literal("3".into()))
        );
    }

    #[test]
    fn test_reopened_section_keeps_order() {
        let mut table = EnumTable::new();
        table.open_section("A");
        table.open_section("B");
        table.open_section("A");

        let apis: Vec<&str> = table.api_names().collect();
        assert_eq!(apis, ["A", "B"]);
    }

    #[test]
    fn test_reference_count() {
        let mut table = EnumTable::new();
        table.insert("A", "GL_X", EnumValue::Literal("0x1".into()));
        table.insert("B", "GL_X", EnumValue::Reference("A".into()));
        assert_eq!(table.reference_count(), 1);
    }

    #[test]
    fn test_numeric_literals() {
        assert!(is_numeric_literal("0x8513"));
        assert!(is_numeric_literal("0XFFFF"));
        assert!(is_numeric_literal("42"));
        assert!(!is_numeric_literal("0x"));
        assert!(!is_numeric_literal("ARB_foo"));
        assert!(!is_numeric_literal(""));
        assert!(!is_numeric_literal("0x12G"));
    }
}
