use crate::error::{CoreError, Result, StoreError};
use crate::generator::{DigestKeyGenerator, KeyGenerator, DEFAULT_PREFIX_LEN};
use crate::key::ShortKey;
use crate::store::Store;
use async_trait::async_trait;
use dashmap::DashMap;
use typed_builder::TypedBuilder;

/// Configures an [`InMemoryStore`] backed by a [`DigestKeyGenerator`].
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct StoreSettings {
    /// Number of digest bytes kept for each key.
    #[builder(default = DEFAULT_PREFIX_LEN)]
    pub prefix_len: usize,
    /// Initial capacity of the underlying map.
    #[builder(default)]
    pub capacity: usize,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// In-memory implementation of the [`Store`] trait using DashMap.
///
/// DashMap shards its locks, so saves and loads touching different buckets
/// proceed in parallel while writes to the same bucket serialize. A reader
/// never observes a partially written entry.
///
/// Colliding keys are not detected: the last save wins.
#[derive(Debug)]
pub struct InMemoryStore<G = DigestKeyGenerator> {
    storage: DashMap<String, String>,
    generator: G,
}

impl InMemoryStore {
    /// Creates a store producing 16-character keys.
    pub fn new() -> Self {
        Self::with_generator(DigestKeyGenerator::default())
    }

    pub fn with_settings(settings: StoreSettings) -> std::result::Result<Self, CoreError> {
        let generator = DigestKeyGenerator::new(settings.prefix_len)?;
        Ok(Self {
            storage: DashMap::with_capacity(settings.capacity),
            generator,
        })
    }
}

impl<G: KeyGenerator> InMemoryStore<G> {
    /// Creates a store deriving keys with a custom generator.
    pub fn with_generator(generator: G) -> Self {
        Self {
            storage: DashMap::new(),
            generator,
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Number of distinct keys currently stored.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<G: KeyGenerator> Store for InMemoryStore<G> {
    async fn save(&self, value: &str) -> Result<ShortKey> {
        let key = self.generator.generate(value.as_bytes());
        self.storage.insert(key.as_str().to_owned(), value.to_owned());
        Ok(key)
    }

    async fn load(&self, key: &str) -> Result<String> {
        self.storage
            .get(key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::NotFound(key.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    /// Finds two distinct URLs whose keys collide under `generator`.
    fn colliding_pair(generator: &DigestKeyGenerator) -> (String, String) {
        let mut seen: HashMap<ShortKey, String> = HashMap::new();
        (0u32..)
            .map(|i| format!("https://example.com/{}", i))
            .find_map(|url| {
                let key = generator.generate(url.as_bytes());
                match seen.get(&key) {
                    Some(previous) => Some((previous.clone(), url)),
                    None => {
                        seen.insert(key, url);
                        None
                    }
                }
            })
            .unwrap()
    }

    #[tokio::test]
    async fn save_and_load() {
        let store = InMemoryStore::new();

        let key = store.save("https://example.com").await.unwrap();
        assert_eq!(key.as_str(), "100680ad546ce6a5");

        let value = store.load("100680ad546ce6a5").await.unwrap();
        assert_eq!(value, "https://example.com");
    }

    #[tokio::test]
    async fn load_nonexistent() {
        let store = InMemoryStore::new();

        let err = store.load("doesnotexist").await.unwrap_err();
        assert_eq!(err, StoreError::NotFound("doesnotexist".to_string()));
    }

    #[tokio::test]
    async fn load_empty_key() {
        let store = InMemoryStore::new();
        store.save("https://example.com").await.unwrap();

        let err = store.load("").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn save_is_idempotent() {
        let store = InMemoryStore::new();

        let first = store.save("https://example.com").await.unwrap();
        let second = store.save("https://example.com").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn save_accepts_empty_value() {
        let store = InMemoryStore::new();

        let key = store.save("").await.unwrap();
        assert_eq!(key.as_str(), "e3b0c44298fc1c14");
        assert_eq!(store.load(key.as_str()).await.unwrap(), "");
    }

    #[tokio::test]
    async fn last_write_wins_on_collision() {
        let store = InMemoryStore::with_settings(StoreSettings::builder().prefix_len(1).build())
            .unwrap();
        let (first, second) = colliding_pair(store.generator());

        let first_key = store.save(&first).await.unwrap();
        let second_key = store.save(&second).await.unwrap();
        assert_eq!(first_key, second_key);
        assert_eq!(store.load(first_key.as_str()).await.unwrap(), second);

        store.save(&first).await.unwrap();
        assert_eq!(store.load(first_key.as_str()).await.unwrap(), first);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn with_settings_preallocates() {
        let settings = StoreSettings::builder().prefix_len(4).capacity(64).build();
        let store = InMemoryStore::with_settings(settings).unwrap();
        assert!(store.is_empty());

        let key = store.save("https://example.com").await.unwrap();
        assert_eq!(key.as_str(), "100680ad");
        assert_eq!(store.load("100680ad").await.unwrap(), "https://example.com");
    }

    #[tokio::test]
    async fn with_settings_rejects_invalid_prefix() {
        let err = InMemoryStore::with_settings(StoreSettings::builder().prefix_len(0).build())
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidPrefixLength { len: 0, .. }));
    }

    #[tokio::test]
    async fn custom_generator() {
        struct Fixed;

        impl KeyGenerator for Fixed {
            fn generate(&self, _value: &[u8]) -> ShortKey {
                ShortKey::new_unchecked("fixed")
            }
        }

        let store = InMemoryStore::with_generator(Fixed);
        store.save("https://a.example").await.unwrap();
        store.save("https://b.example").await.unwrap();

        assert_eq!(store.load("fixed").await.unwrap(), "https://b.example");
    }

    #[tokio::test]
    async fn usable_as_trait_object() {
        let store: Arc<dyn Store> = Arc::new(InMemoryStore::default());

        let key = store.save("https://example.com").await.unwrap();
        assert_eq!(store.load(key.as_str()).await.unwrap(), "https://example.com");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_access() {
        let store = Arc::new(InMemoryStore::new());

        let mut saves = vec![];
        for i in 0..100u64 {
            let store = Arc::clone(&store);
            saves.push(tokio::spawn(async move {
                let url = format!("https://example{}.com", i);
                let key = store.save(&url).await.unwrap();
                (key, url)
            }));
        }

        let mut saved = vec![];
        for handle in saves {
            saved.push(handle.await.unwrap());
        }

        let mut loads = vec![];
        for (key, url) in saved {
            let store = Arc::clone(&store);
            loads.push(tokio::spawn(async move {
                let value = store.load(key.as_str()).await.unwrap();
                assert_eq!(value, url);
            }));
        }

        for handle in loads {
            handle.await.unwrap();
        }

        assert_eq!(store.len(), 100);
    }
}
