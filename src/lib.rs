#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod config;
mod error;

/// A HashMap implementation using separate chaining.
///
/// This module provides a `HashMap` that wraps the `HashTable` and provides
/// a standard key-value map interface with configurable hashers.
pub mod hash_map;

/// The raw chained hash table underlying [`HashMap`].
pub mod hash_table;

pub use config::Config;
pub use config::DEFAULT_INITIAL_CAPACITY;
pub use config::DEFAULT_LOAD_FACTOR;
pub use error::Error;
pub use hash_map::Entry;
pub use hash_map::HashMap;
#[cfg(any(feature = "foldhash", feature = "std"))]
pub use hash_map::DefaultHashBuilder;
#[cfg(any(feature = "foldhash", feature = "std"))]
pub use hash_map::DefaultHashMap;
pub use hash_table::HashTable;
