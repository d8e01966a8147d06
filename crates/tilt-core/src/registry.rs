//! Element-to-attachment map behind the idempotent attach/detach entry points.

use crate::config::TiltOptions;
use crate::error::Result;
use fnv::FnvHashMap;
use std::hash::Hash;

/// Something the registry can reconfigure in place and tear down.
pub trait Attachment {
    fn configure(&mut self, options: &TiltOptions);
    fn teardown(&mut self);
}

pub struct Registry<K, V> {
    entries: FnvHashMap<K, V>,
}

impl<K, V> Default for Registry<K, V> {
    fn default() -> Self {
        Self {
            entries: FnvHashMap::default(),
        }
    }
}

impl<K: Eq + Hash, V: Attachment> Registry<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach under `key`, or update the existing attachment's options.
    ///
    /// Returns `true` when `create` ran and a new attachment was stored.
    pub fn attach<F>(&mut self, key: K, options: &TiltOptions, create: F) -> Result<bool>
    where
        F: FnOnce() -> Result<V>,
    {
        if let Some(existing) = self.entries.get_mut(&key) {
            existing.configure(options);
            return Ok(false);
        }
        let attachment = create()?;
        self.entries.insert(key, attachment);
        Ok(true)
    }

    /// Tear down and forget the attachment under `key`. Unknown keys are ignored.
    pub fn detach(&mut self, key: &K) -> bool {
        match self.entries.remove(key) {
            Some(mut attachment) => {
                attachment.teardown();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
