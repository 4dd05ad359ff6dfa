//! Function records.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::enums::ApiName;

/// Parameter list literal for functions that take no arguments.
pub const VOID_PARAMS: &str = "GLvoid";

/// One declared parameter, with its type already translated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    /// Target-language type, including `const`/`*` decoration. May be empty
    /// when the spec line carried no type token.
    pub ty: String,
    pub name: String,
}

impl Param {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ty.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.ty, self.name)
        }
    }
}

/// A function declared by the func spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuncRecord {
    pub return_type: String,
    /// Prefixed symbol name (`glCullFace`, `wglCreatePbufferARB`).
    pub name: String,
    pub params: Vec<Param>,
}

impl FuncRecord {
    pub fn new(return_type: impl Into<String>, name: impl Into<String>, params: Vec<Param>) -> Self {
        Self {
            return_type: return_type.into(),
            name: name.into(),
            params,
        }
    }

    /// Comma-joined parameter list, or `GLvoid` when there are none.
    pub fn params_text(&self) -> String {
        if self.params.is_empty() {
            return VOID_PARAMS.to_string();
        }
        self.params
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Functions per API in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FuncTable {
    apis: IndexMap<ApiName, Vec<FuncRecord>>,
}

impl FuncTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, api: &str, record: FuncRecord) {
        self.apis.entry(api.to_string()).or_default().push(record);
    }

    pub fn get(&self, api: &str) -> Option<&[FuncRecord]> {
        self.apis.get(api).map(|v| v.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ApiName, &Vec<FuncRecord>)> {
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

    /// Total number of records over all APIs.
    pub fn function_count(&self) -> usize {
        self.apis.values().map(|v| v.len()).sum()
    }
}
