pub mod kv;

pub use kv::{FileKeyValueStore, InMemoryKeyValueStore};
