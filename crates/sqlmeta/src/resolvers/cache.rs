use sqlmeta_core::Result;

use dashmap::DashMap;
use std::hash::Hash;

/// Write-once memo table.
///
/// A value is computed outside of any lock. When two callers race on the same
/// key, both compute, the first insert is published and every caller returns
/// the published value. Failed computations are not stored.
pub(super) struct Cache<K, V> {
    entries: DashMap<K, V>,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub(super) fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub(super) fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    pub(super) fn get_or_try_insert_with(
        &self,
        key: K,
        f: impl FnOnce() -> Result<V>,
    ) -> Result<V> {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }

        let value = f()?;
        Ok(self.entries.entry(key).or_insert(value).value().clone())
    }

    #[cfg(test)]
    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }
}
