use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use itertools::Itertools;

use super::{CapacityOverflow, Iter};
use crate::collections::hash::HashMap;
use crate::collections::traits::Set;
use crate::util::fmt::debug_with;

/// A set of unique values which relies on the values implementing [`Hash`], keeping them in the
/// order they were first added.
///
/// The set is a [`HashMap`] with `()` as the value for every key, so only the presence of a key
/// matters. Adding a value that is already present does nothing, as does deleting one that isn't,
/// so none of the set's core operations can fail. [`add`](UniqueValueSet::add),
/// [`delete`](UniqueValueSet::delete) and [`clear`](UniqueValueSet::clear) return the set itself
/// to allow calls to be chained.
///
/// It is a logic error for a value to be manipulated in a way that changes its hash while it is
/// in the set. Because of this, the set's API prevents mutable access to its elements.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `has` | `O(1)`* |
/// | `add` | `O(1)`* |
/// | `delete` | `O(1)`* |
/// | `size` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// \* On average, see [`HashMap`] for the details of collisions and growth.
///
/// # Example
/// ```
/// use unique_value_set::UniqueValueSet;
///
/// let mut set = UniqueValueSet::<i32>::from_iter([1, 2, 2, 3, 1]);
/// assert_eq!(set.size(), 3);
///
/// set.add(4).delete(&1).add(1);
/// assert!(set.has(&4));
/// assert_eq!(set.to_string(), "UniqueValueSet: {2, 3, 4, 1}");
/// ```
#[derive(Clone)]
pub struct UniqueValueSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    // The unit type is the sentinel: only the keys carry any meaning.
    pub(crate) inner: HashMap<T, (), B>,
}

impl<T: Hash + Eq, B: BuildHasher + Default> UniqueValueSet<T, B> {
    /// Creates a new, empty set with capacity 0 and the default value for `B`.
    pub fn new() -> UniqueValueSet<T, B> {
        UniqueValueSet {
            inner: HashMap::new(),
        }
    }

    /// Creates a new, empty set with the provided `cap`acity.
    pub fn with_cap(cap: usize) -> UniqueValueSet<T, B> {
        UniqueValueSet {
            inner: HashMap::with_cap(cap),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> UniqueValueSet<T, B> {
    pub fn with_hasher(hasher: B) -> UniqueValueSet<T, B> {
        UniqueValueSet {
            inner: HashMap::with_hasher(hasher),
        }
    }

    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> UniqueValueSet<T, B> {
        UniqueValueSet {
            inner: HashMap::with_cap_and_hasher(cap, hasher),
        }
    }

    /// Returns true if `value` is currently in the set.
    pub fn has<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(value)
    }

    /// Adds `value` to the set if it isn't already present, returning the set for chaining.
    pub fn add(&mut self, value: T) -> &mut Self {
        self.insert(value);
        self
    }

    /// Removes `value` from the set if it is present, returning the set for chaining. Deleting a
    /// value that isn't in the set does nothing.
    pub fn delete<Q>(&mut self, value: &Q) -> &mut Self
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove(value);
        self
    }

    /// Returns the number of distinct values in the set.
    pub const fn size(&self) -> usize {
        self.inner.len()
    }

    /// Removes every value from the set, returning the set for chaining. The allocated capacity is
    /// kept.
    pub fn clear(&mut self) -> &mut Self {
        self.inner.clear();
        self
    }

    pub const fn len(&self) -> usize {
        self.size()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Adds `value` to the set, returning true if it wasn't already present. An equal value that
    /// is already in the set is left in place.
    pub fn insert(&mut self, value: T) -> bool {
        // The map keeps the existing key, dropping the new one.
        self.inner.insert(value, ()).is_none()
    }

    /// Removes `value` from the set, returning the stored value if it was present.
    pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(value).map(|(v, _)| v)
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.has(value)
    }

    /// Ensures that `extra` more values can be added without reallocating.
    ///
    /// # Panics
    /// Panics if the required capacity overflows a `usize`.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        self.inner.try_reserve(extra)
    }

    /// Returns an iterator over all values in the set, as references, in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T> for UniqueValueSet<T, B> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn contains(&self, item: &T) -> bool {
        self.has(item)
    }

    fn len(&self) -> usize {
        self.size()
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        self.into_iter()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for UniqueValueSet<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for UniqueValueSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut set = UniqueValueSet::new();
        set.extend(value);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default, const N: usize> From<[T; N]> for UniqueValueSet<T, B> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for UniqueValueSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        // Duplicates may make this an overestimate, which only costs capacity.
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T: Hash + Eq + Copy + 'a, B: BuildHasher> Extend<&'a T> for UniqueValueSet<T, B> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for UniqueValueSet<T, B> {
    /// Two sets are equal if they contain the same values, regardless of order.
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().all(|item| other.has(item))
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for UniqueValueSet<T, B> {}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for UniqueValueSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueValueSet")
            .field("values", &debug_with(|f| f.debug_set().entries(self.iter()).finish()))
            .field("len", &self.size())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for UniqueValueSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "UniqueValueSet: {{{}}}", self.iter().format(", "))
    }
}
