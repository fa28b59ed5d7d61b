//! Core types and traits for the hashlink URL shortener.
//!
//! This crate derives short keys from URLs and stores the key to URL
//! association. The HTTP transport lives in `hashlink-gateway` and only
//! talks to the [`Store`] trait.

pub mod error;
pub mod generator;
pub mod key;
pub mod store;

pub use error::{CoreError, Result, StoreError};
pub use generator::{DigestKeyGenerator, KeyGenerator, DEFAULT_PREFIX_LEN};
pub use key::ShortKey;
pub use store::memory::{InMemoryStore, StoreSettings};
pub use store::Store;
