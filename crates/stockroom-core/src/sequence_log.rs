//! # Sequence Log
//!
//! Append-only, newest-first singly-linked log.
//!
//! ```text
//! append(c) after a, b:
//!
//!   head ─► [c] ─► [b] ─► [a] ─► None
//!            ▲
//!            └── snapshot taken before append(d) keeps pointing here
//!
//!   appended = 3  →  next_id() = 4
//! ```
//!
//! Nodes are shared through `Arc`, so a [`Snapshot`] is just a cloned head
//! pointer: later appends add nodes in front of it and never change what it
//! yields. The `appended` counter only ever grows, which makes
//! [`SequenceLog::next_id`] usable as an id generator independent of how many
//! entries happen to be reachable.

use std::fmt;
use std::sync::Arc;

struct Node<T> {
    entry: T,
    next: Option<Arc<Node<T>>>,
}

pub struct SequenceLog<T> {
    head: Option<Arc<Node<T>>>,
    len: usize,
    appended: u64,
}

impl<T> SequenceLog<T> {
    pub fn new() -> Self {
        SequenceLog {
            head: None,
            len: 0,
            appended: 0,
        }
    }

    /// Places `entry` at the head. O(1).
    pub fn append(&mut self, entry: T) {
        let node = Node {
            entry,
            next: self.head.take(),
        };
        self.head = Some(Arc::new(node));
        self.len += 1;
        self.appended += 1;
    }

    /// Walks the log from the newest entry to the oldest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Frozen view of the log as it is right now.
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot {
            head: self.head.clone(),
            len: self.len,
        }
    }

    /// `appends ever made + 1`.
    pub fn next_id(&self) -> u64 {
        self.appended + 1
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.entry)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl<T> Default for SequenceLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SequenceLog<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceLog")
            .field("len", &self.len)
            .field("appended", &self.appended)
            .finish()
    }
}

impl<T> Drop for SequenceLog<T> {
    fn drop(&mut self) {
        unlink(self.head.take());
    }
}

impl<'a, T> IntoIterator for &'a SequenceLog<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owned, immutable view of a [`SequenceLog`] at one point in time.
pub struct Snapshot<T> {
    head: Option<Arc<Node<T>>>,
    len: usize,
}

impl<T> Snapshot<T> {
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Snapshot {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot").field("len", &self.len).finish()
    }
}

impl<T> Drop for Snapshot<T> {
    fn drop(&mut self) {
        unlink(self.head.take());
    }
}

/// Newest-first borrowing iterator over log entries.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.entry
        })
    }
}

// Drops the chain one node at a time instead of recursively. Stops at the
// first node still shared with another log or snapshot.
fn unlink<T>(mut next: Option<Arc<Node<T>>>) {
    while let Some(node) = next {
        match Arc::try_unwrap(node) {
            Ok(mut node) => next = node.next.take(),
            Err(_) => break,
        }
    }
}
