//! In-place mutation helpers for slices.

/// Batch in-place mutation over a slice, applied front to back.
pub trait MutateExt<T> {
    /// Applies `transform` to every element.
    fn mutate<F>(&mut self, transform: F)
    where
        F: FnMut(&mut T);

    /// Applies `transform` to the elements `predicate` selects.
    fn mutate_where<P, F>(&mut self, predicate: P, transform: F)
    where
        P: FnMut(&T) -> bool,
        F: FnMut(&mut T);

    /// Applies `transform` to the elements equal to `other`.
    fn mutate_if_eq<F>(&mut self, other: &T, transform: F)
    where
        T: PartialEq,
        F: FnMut(&mut T);

    /// Applies `transform` to the elements equal to any of `candidates`.
    fn mutate_if_eq_any<F>(&mut self, candidates: &[T], transform: F)
    where
        T: PartialEq,
        F: FnMut(&mut T);
}

impl<T> MutateExt<T> for [T] {
    fn mutate<F>(&mut self, mut transform: F)
    where
        F: FnMut(&mut T),
    {
        for element in self.iter_mut() {
            transform(element);
        }
    }

    fn mutate_where<P, F>(&mut self, mut predicate: P, mut transform: F)
    where
        P: FnMut(&T) -> bool,
        F: FnMut(&mut T),
    {
        for element in self.iter_mut() {
            if predicate(element) {
                transform(element);
            }
        }
    }

    fn mutate_if_eq<F>(&mut self, other: &T, transform: F)
    where
        T: PartialEq,
        F: FnMut(&mut T),
    {
        self.mutate_where(|element| element == other, transform);
    }

    fn mutate_if_eq_any<F>(&mut self, candidates: &[T], transform: F)
    where
        T: PartialEq,
        F: FnMut(&mut T),
    {
        self.mutate_where(|element| candidates.contains(element), transform);
    }
}
