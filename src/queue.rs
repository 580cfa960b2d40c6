//! FIFO queue with amortized O(1) enqueue and dequeue.

use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::{debug, instrument};

/// A FIFO queue backed by a growable buffer with a lazily advancing front.
///
/// Dequeuing never shifts elements. The front index moves past vacated
/// slots, and the dead prefix is only reclaimed once the buffer exceeds
/// [`COMPACTION_THRESHOLD`](Queue::COMPACTION_THRESHOLD) slots and more
/// than half of them are dead. This keeps `dequeue` amortized O(1) while
/// `peek` and `len` stay O(1).
///
/// Equality and hashing see only the logical contents: two queues with
/// different physical histories but the same remaining elements compare
/// equal and hash identically.
#[derive(Clone)]
pub struct Queue<T> {
    /// Physical storage. Slots below `lower_bound` are vacated; every
    /// slot at or above it holds a value.
    buffer: Vec<Option<T>>,
    /// Index of the logical front within `buffer`.
    lower_bound: usize,
}

impl<T> Queue<T> {
    /// Buffer length above which a dequeue may reclaim the dead prefix.
    pub const COMPACTION_THRESHOLD: usize = 32;

    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            lower_bound: 0,
        }
    }

    /// Number of logically queued elements.
    pub fn len(&self) -> usize {
        self.buffer.len() - self.lower_bound
    }

    pub fn is_empty(&self) -> bool {
        self.lower_bound == self.buffer.len()
    }

    /// Logical contents, front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.buffer[self.lower_bound..]
            .iter()
            .filter_map(Option::as_ref)
    }

    /// Appends `element` to the tail.
    #[instrument(level = "trace", skip_all)]
    pub fn enqueue(&mut self, element: T) {
        self.buffer.push(Some(element));
    }

    /// Removes and returns the front element, or `None` when empty.
    ///
    /// Advances the front index instead of shifting the buffer; once the
    /// dead prefix outweighs the live suffix the storage is trimmed.
    #[instrument(level = "trace", skip_all)]
    pub fn dequeue(&mut self) -> Option<T> {
        let element = self.buffer.get_mut(self.lower_bound).and_then(Option::take)?;
        self.lower_bound += 1;

        if self.needs_compaction() {
            self.compact();
        }

        Some(element)
    }

    /// Returns the front element without removing it, or `None` when empty.
    pub fn peek(&self) -> Option<&T> {
        self.buffer.get(self.lower_bound).and_then(Option::as_ref)
    }

    fn needs_compaction(&self) -> bool {
        self.buffer.len() > Self::COMPACTION_THRESHOLD && self.lower_bound > self.buffer.len() / 2
    }

    fn compact(&mut self) {
        debug!(
            slots = self.buffer.len(),
            dead = self.lower_bound,
            "compacting queue buffer"
        );
        self.buffer = self.buffer.split_off(self.lower_bound);
        self.lower_bound = 0;
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            buffer: iter.into_iter().map(Some).collect(),
            lower_bound: 0,
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.buffer.extend(iter.into_iter().map(Some));
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: Hash> Hash for Queue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self.iter() {
            element.hash(state);
        }
    }
}
