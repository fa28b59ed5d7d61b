pub mod memory;

use crate::error::Result;
use crate::key::ShortKey;
use async_trait::async_trait;

/// Storage for key to URL associations.
///
/// Keys are derived from the stored value, so saving the same value twice
/// yields the same key. Implementations must be safe to share across
/// request handlers.
#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// Stores `value` under its derived key and returns the key.
    ///
    /// An existing entry under the same key is overwritten.
    async fn save(&self, value: &str) -> Result<ShortKey>;

    /// Retrieves the value stored under `key`.
    /// Returns `Err(NotFound)` if the key does not exist.
    async fn load(&self, key: &str) -> Result<String>;
}
