//! # ordmap
//!
//! An insertion-ordered key-value map.
//!
//! This crate provides the public API of ordmap, re-exporting all types from the
//! `ordmap-core` crate together with the [`ordmap!`] literal macro.
//!
//! ```
//! use ordmap::{OrderedMap, ordmap};
//!
//! let mut map: OrderedMap<&str, u32> = ordmap! { "one" => 1, "two" => 2 };
//! map.set("three", 3).set("one", 10);
//!
//! assert_eq!(map.keys(), ["one", "two", "three"]);
//! assert_eq!(map.values(), [&10, &2, &3]);
//! assert!(map.delete("two"));
//! assert_eq!(map.size(), 2);
//! ```

// Re-export ordmap_core so the `ordmap!` expansion resolves from downstream crates
#[doc(hidden)]
pub use ordmap_core;
// Re-export the modules for access to iterators and error types
pub use ordmap_core::{error, iter, map};
// Re-export all main types at the crate root for convenience
pub use ordmap_core::{DynamicMap, Error, IntoIter, Iter, OrderedMap, Result, ordmap};
