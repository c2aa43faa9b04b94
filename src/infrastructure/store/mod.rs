//! Message store implementations.
//!
//! - `inmemory`: reference implementation backed by a `Vec` under a mutex
//! - a document database binding would live here as a sibling module

pub mod inmemory;

pub use inmemory::InMemoryMessageStore;
