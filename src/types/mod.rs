//! Core domain types for glex.
//!
//! This module contains the tables that flow through the pipeline:
//! - `EnumTable` / `ResolvedEnumTable` - enumerants per API, before and after `use` resolution
//! - `FuncTable` - function records per API
//! - `TypeMap` - spec type to C type translation
//! - the fixed vendor suffix set used by the resolver

mod enums;
mod funcs;
mod type_map;
pub mod vendor;

pub use enums::{
    is_numeric_literal, ApiName, EnumTable, EnumValue, ResolvedEnumTable, UNRESOLVED_SENTINEL,
};
pub use funcs::{FuncRecord, FuncTable, Param, VOID_PARAMS};
pub use type_map::TypeMap;
pub use vendor::{strip_vendor_suffix, VENDOR_SUFFIXES};
