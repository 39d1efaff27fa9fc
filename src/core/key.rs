use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_KEY_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId(u64);

impl KeyId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// An opaque token naming one context channel.
///
/// Every call to [`ContextKey::new`] yields a fresh id, so two keys created with
/// the same label never resolve each other's values. Keys are meant to live in a
/// `static` and be created once per process.
pub struct ContextKey<T> {
    id: KeyId,
    label: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ContextKey<T> {
    pub fn new(label: &'static str) -> Self {
        Self {
            id: KeyId(NEXT_KEY_ID.fetch_add(1, Ordering::Relaxed)),
            label,
            _marker: PhantomData,
        }
    }

    pub fn id(&self) -> KeyId {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<T> fmt::Debug for ContextKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContextKey({}#{})", self.label, self.id.0)
    }
}

impl<T> PartialEq for ContextKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for ContextKey<T> {}

#[cfg(test)]
#[path = "../../tests/unit/core/key.rs"]
mod tests;
