#![doc = include_str!("../README.md")]
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod accessor;
pub mod convert;
mod error;
pub mod loader;
pub mod scene;

pub use accessor::{AccessorReader, AccessorType, ComponentType, Element};
pub use convert::Color;
pub use error::*;
pub use loader::{load, LoadOptions, LoadState, SceneLoader, TransformDefaults};
pub use scene::*;

pub use scenery_schema::{self as schema, Document, Id};
