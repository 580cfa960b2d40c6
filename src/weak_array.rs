//! Ordered collection of weak-reference slots.

use std::hash::{Hash, Hasher};
use std::ops::Range;
use std::rc::Rc;

use tracing::{debug, instrument};

use crate::weak_box::WeakBox;

/// An ordered, index-addressable collection that references its elements
/// without owning them.
///
/// Each slot holds a weak reference. A referent reclaimed elsewhere reads
/// as `None`; that is an ordinary state, not an error, and it can happen
/// between any two operations. The slot count only changes through
/// explicit insertion, removal, or [`remove_dropped`](WeakArray::remove_dropped).
///
/// Equality is slot-wise: two empty slots are equal, two live slots
/// compare their referents by value, and a live slot never equals an
/// empty one.
#[derive(Debug, Clone)]
pub struct WeakArray<T> {
    boxes: Vec<WeakBox<T>>,
}

impl<T> WeakArray<T> {
    pub fn new() -> Self {
        Self { boxes: Vec::new() }
    }

    /// Number of slots, live or not.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// The referent at `index`, if the slot exists and is still alive.
    pub fn get(&self, index: usize) -> Option<Rc<T>> {
        self.boxes.get(index).and_then(WeakBox::get)
    }

    /// Replaces the slot at `index` with a live or empty slot.
    ///
    /// Panics if `index` is out of range, like slice indexing.
    pub fn set(&mut self, index: usize, value: Option<&Rc<T>>) {
        self.boxes[index] = WeakBox::from(value);
    }

    /// Appends a live or empty slot.
    pub fn push(&mut self, value: Option<&Rc<T>>) {
        self.boxes.push(WeakBox::from(value));
    }

    /// Slot-wise upgrades, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = Option<Rc<T>>> + '_ {
        self.boxes.iter().map(WeakBox::get)
    }

    /// Removes every slot whose referent has been reclaimed, preserving
    /// the order of the remaining live slots.
    #[instrument(level = "trace", skip_all)]
    pub fn remove_dropped(&mut self) {
        let before = self.boxes.len();
        self.boxes.retain(|slot| slot.get().is_some());

        if self.boxes.len() != before {
            debug!(
                removed = before - self.boxes.len(),
                remaining = self.boxes.len(),
                "removed dead weak slots"
            );
        }
    }

    /// Splices `range` out and the replacement slots in.
    ///
    /// Slots outside `range` keep their identity and relative order; the
    /// slot count changes by the difference between the range length and
    /// the number of replacements.
    pub fn replace_range<'a, I>(&mut self, range: Range<usize>, replacements: I)
    where
        T: 'a,
        I: IntoIterator<Item = Option<&'a Rc<T>>>,
    {
        self.boxes
            .splice(range, replacements.into_iter().map(WeakBox::from));
    }
}

impl<T> Default for WeakArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> FromIterator<&'a Rc<T>> for WeakArray<T> {
    fn from_iter<I: IntoIterator<Item = &'a Rc<T>>>(iter: I) -> Self {
        Self {
            boxes: iter.into_iter().map(WeakBox::new).collect(),
        }
    }
}

impl<'a, T> FromIterator<Option<&'a Rc<T>>> for WeakArray<T> {
    fn from_iter<I: IntoIterator<Item = Option<&'a Rc<T>>>>(iter: I) -> Self {
        Self {
            boxes: iter.into_iter().map(WeakBox::from).collect(),
        }
    }
}

impl<T: PartialEq> PartialEq for WeakArray<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter()
            .zip(other.iter())
            .all(|(left, right)| match (left, right) {
                (None, None) => true,
                (Some(left), Some(right)) => left == right,
                _ => false,
            })
    }
}

impl<T: Eq> Eq for WeakArray<T> {}

impl<T: Hash> Hash for WeakArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for slot in self.iter() {
            slot.as_deref().hash(state);
        }
    }
}
