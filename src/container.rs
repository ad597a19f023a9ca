//! Read-only views over the stores that checks run against.
//!
//! Containment checks are written once against two narrow traits instead
//! of once per backing store: [`Sequence`] for anything ordered and
//! indexable (slices, arrays, `Vec`, `VecDeque`), and [`MapView`] for
//! key/value stores (`HashMap`, `BTreeMap`). A view never mutates the
//! store behind it, and its size and iteration order are stable for the
//! duration of a single check.
//!
//! A store that might be absent is passed as `Option<&S>` at the check
//! entry points; the traits themselves only describe present stores.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;

/// Read-only positional view over an ordered store.
///
/// # Example
///
/// ```rust
/// use affirm::Sequence;
///
/// let values = vec![1, 2, 3];
/// assert_eq!(values.len(), 3);
/// assert_eq!(Sequence::get(&values, 1), Some(&2));
/// assert_eq!(values.elements().copied().collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub trait Sequence {
    /// The element type.
    type Item;

    /// Number of elements in the view.
    fn len(&self) -> usize;

    /// Element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Whether the view holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the elements in positional order.
    fn elements(&self) -> Elements<'_, Self> {
        Elements {
            sequence: self,
            index: 0,
        }
    }
}

/// Iterator over a [`Sequence`], driven by indexed access.
#[derive(Debug)]
pub struct Elements<'a, S: ?Sized> {
    sequence: &'a S,
    index: usize,
}

impl<'a, S: Sequence + ?Sized> Iterator for Elements<'a, S> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.sequence.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<S: Sequence + ?Sized> ExactSizeIterator for Elements<'_, S> {}

impl<T> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

/// Read-only view over a key/value store.
///
/// Iteration order must be stable while a check is running; beyond that
/// no ordering is assumed, so `HashMap` qualifies.
pub trait MapView {
    /// The key type.
    type Key;
    /// The value type.
    type Value;

    /// Number of entries in the view.
    fn len(&self) -> usize;

    /// Iterate all entries.
    fn entries(&self) -> Box<dyn Iterator<Item = (&Self::Key, &Self::Value)> + '_>;

    /// Whether the view holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the keys.
    fn keys(&self) -> Box<dyn Iterator<Item = &Self::Key> + '_> {
        Box::new(self.entries().map(|(key, _)| key))
    }

    /// Iterate the values.
    fn values(&self) -> Box<dyn Iterator<Item = &Self::Value> + '_> {
        Box::new(self.entries().map(|(_, value)| value))
    }
}

impl<K, V, S: BuildHasher> MapView for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

impl<K, V> MapView for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}
