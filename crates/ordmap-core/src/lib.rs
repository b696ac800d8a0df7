//! # ordmap-core
//!
//! Core types for ordmap, an insertion-ordered key-value map.
//!
//! [`OrderedMap`] keeps its keys in the order they were first inserted and exposes the
//! familiar associative-map surface: `set`, `get`, `has`, `delete`, `clear`, `size`, the
//! `keys`/`values`/`entries` views and the `for_each` traversal callbacks.

pub mod error;
#[cfg(feature = "indexmap")]
mod interop;
pub mod iter;
mod macros;
pub mod map;
mod serialize;

// Re-export main types at the crate root for convenience
pub use self::{
    error::{Error, Result},
    iter::{IntoIter, Iter},
    map::OrderedMap,
    serialize::DynamicMap,
};
