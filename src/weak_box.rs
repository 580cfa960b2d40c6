//! Single weak-reference slot.

use std::rc::{Rc, Weak};

/// A slot referencing a reference-counted value without owning it.
///
/// The slot never extends the referent's lifetime: once the last strong
/// reference elsewhere is dropped, [`get`](WeakBox::get) yields `None`.
/// An empty slot and a reclaimed slot read the same.
#[derive(Debug, Clone)]
pub struct WeakBox<T> {
    slot: Weak<T>,
}

impl<T> WeakBox<T> {
    pub fn new(value: &Rc<T>) -> Self {
        Self {
            slot: Rc::downgrade(value),
        }
    }

    /// A slot that was never live.
    pub fn empty() -> Self {
        Self { slot: Weak::new() }
    }

    /// The referent, if it is still alive.
    pub fn get(&self) -> Option<Rc<T>> {
        self.slot.upgrade()
    }
}

impl<T> Default for WeakBox<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<&Rc<T>>> for WeakBox<T> {
    fn from(value: Option<&Rc<T>>) -> Self {
        value.map_or_else(Self::empty, Self::new)
    }
}
