//! Persistent, append-only config store.

use crate::config::ConfigEntry;
use std::{fmt, sync::Arc};

struct Node<C, R> {
    entry: ConfigEntry<C, R>,
    prev: Option<Arc<Node<C, R>>>,
    len: usize,
}

/// An immutable, structurally shared sequence of config entries.
///
/// Appending never mutates the receiver; it returns a new store whose tail
/// points at the receiver's entries. Stores derived from a common ancestor
/// share that ancestor's entries and can be read concurrently.
///
/// # Example
///
/// ```rust,ignore
/// let base = ConfigStore::new().push(Config::default_order(run).into());
/// let echo = base.push(Config::order("echo", echo).into());
///
/// assert_eq!(base.len(), 1);
/// assert_eq!(echo.len(), 2);
/// ```
pub struct ConfigStore<C, R> {
    head: Option<Arc<Node<C, R>>>,
}

impl<C, R> ConfigStore<C, R> {
    /// Create an empty store.
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.head.as_ref().map_or(0, |node| node.len)
    }

    /// Check if the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Return a new store with `entry` appended.
    pub fn push(&self, entry: ConfigEntry<C, R>) -> Self {
        let len = self.len() + 1;
        Self {
            head: Some(Arc::new(Node {
                entry,
                prev: self.head.clone(),
                len,
            })),
        }
    }

    /// Return a new store with every entry of `entries` appended, in order.
    pub fn extend(&self, entries: impl IntoIterator<Item = ConfigEntry<C, R>>) -> Self {
        entries
            .into_iter()
            .fold(self.clone(), |store, entry| store.push(entry))
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> Vec<&ConfigEntry<C, R>> {
        let mut entries = Vec::with_capacity(self.len());
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            entries.push(&current.entry);
            node = current.prev.as_deref();
        }
        entries.reverse();
        entries
    }

    /// Check whether both stores share the same entries in memory.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<C, R> Clone for ConfigStore<C, R> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

impl<C, R> Drop for ConfigStore<C, R> {
    // Unlink iteratively; the default drop recurses once per entry.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            next = Arc::into_inner(node).and_then(|mut node| node.prev.take());
        }
    }
}

impl<C, R> Default for ConfigStore<C, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, R> fmt::Debug for ConfigStore<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries()).finish()
    }
}
