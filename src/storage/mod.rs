//! Record storage and sources

pub mod in_memory;

pub use in_memory::{RecordStore, StaticSource};
