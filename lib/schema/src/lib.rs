#![doc = include_str!("../README.md")]
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod consts;
mod document;
mod error;
mod id;

pub use document::*;
pub use error::*;
pub use id::*;

/// Untyped JSON value, as found in material `values` and technique `parameters`.
pub use serde_json::Value;
