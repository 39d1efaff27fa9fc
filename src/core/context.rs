//! Per-scope context storage.
//!
//! Values are stored type-erased and keyed by [`KeyId`]; the typed
//! [`ContextKey`] guarantees that a lookup downcasts to the type it was
//! provided with.

use super::key::{ContextKey, KeyId};
use rustc_hash::FxHashMap;
use std::any::Any;

struct Entry {
    label: &'static str,
    value: Box<dyn Any>,
}

#[derive(Default)]
pub struct ContextMap {
    entries: FxHashMap<KeyId, Entry>,
}

impl ContextMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, returning the value it replaces.
    pub fn provide<T: 'static>(&mut self, key: &ContextKey<T>, value: T) -> Option<T> {
        let prev = self.entries.insert(
            key.id(),
            Entry {
                label: key.label(),
                value: Box::new(value),
            },
        )?;
        prev.value.downcast::<T>().ok().map(|v| *v)
    }

    pub fn get<T: 'static>(&self, key: &ContextKey<T>) -> Option<&T> {
        self.entries
            .get(&key.id())
            .and_then(|e| e.value.downcast_ref::<T>())
    }

    pub fn get_mut<T: 'static>(&mut self, key: &ContextKey<T>) -> Option<&mut T> {
        self.entries
            .get_mut(&key.id())
            .and_then(|e| e.value.downcast_mut::<T>())
    }

    pub fn contains<T: 'static>(&self, key: &ContextKey<T>) -> bool {
        self.entries.contains_key(&key.id())
    }

    pub fn remove<T: 'static>(&mut self, key: &ContextKey<T>) -> Option<T> {
        let entry = self.entries.remove(&key.id())?;
        entry.value.downcast::<T>().ok().map(|v| *v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels of the provided keys, for diagnostics.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.values().map(|e| e.label)
    }
}

impl std::fmt::Debug for ContextMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.labels()).finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/context.rs"]
mod tests;
