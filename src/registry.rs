use alloc::{collections::BTreeMap, string::String};

use crate::{key::Key, record::DependencyRecord};

/// One named set of dependency records.
pub(crate) struct Registry {
    name: String,
    entries: BTreeMap<Key, DependencyRecord>,
}

impl Registry {
    #[inline]
    #[must_use]
    pub(crate) const fn new(name: String) -> Self {
        Self {
            name,
            entries: BTreeMap::new(),
        }
    }

    #[inline]
    #[must_use]
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Inserts the record, returning the one it replaced
    #[inline]
    pub(crate) fn insert(&mut self, key: Key, record: DependencyRecord) -> Option<DependencyRecord> {
        self.entries.insert(key, record)
    }

    #[inline]
    #[must_use]
    pub(crate) fn get(&self, key: &Key) -> Option<&DependencyRecord> {
        self.entries.get(key)
    }

    #[inline]
    #[must_use]
    pub(crate) fn get_mut(&mut self, key: &Key) -> Option<&mut DependencyRecord> {
        self.entries.get_mut(key)
    }

    #[inline]
    #[must_use]
    pub(crate) fn contains(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    #[inline]
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
