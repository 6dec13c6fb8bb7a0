use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::{cmp, mem};

use super::{CapacityOverflow, IndexNoCap, IntoKeys, IntoValues, Iter, Keys, Values};
use crate::util::fmt::debug_with;
use crate::util::result::ResultExtension;

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 4;
const LOAD_FACTOR_DENOMINATOR: usize = 5;

/// A map of keys to values which relies on the keys implementing [`Hash`], and which remembers
/// the order that keys were first inserted in.
///
/// Entries live in a dense store in insertion order. The hash table itself is an array of
/// buckets using open addressing with linear probing, where each occupied bucket holds the
/// position of an entry in that store. Removing an entry leaves a tombstone behind in the store
/// (so removal is still `O(1)`) which is cleaned up the next time the map reallocates or the
/// tombstones start to outnumber the buckets.
///
/// A custom load factor is not supported at this point, with the default being 4/5.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `clear` | `O(n)` |
/// | `reserve` | `O(n)`***, `O(1)` |
///
/// \* In the event of a hash collision, these functions will take additional time, while a valid
/// / correct bucket is found.
///
/// \** If the HashMap doesn't have enough capacity for the new element, or has accumulated as
/// many tombstones as it has buckets, `insert` will take `O(n)`. \* applies as well.
///
/// \*** If the HashMap has enough capacity for the additional items already, `reserve` is `O(1)`.
#[derive(Clone)]
pub struct HashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) buckets: Box<[Bucket]>,
    pub(crate) entries: Vec<Entry<K, V>>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

/// A bucket in the hash table, holding the position of an entry if occupied.
pub(crate) type Bucket = Option<usize>;

/// A slot in the entry store, which is `None` once the entry has been removed.
pub(crate) type Entry<K, V> = Option<(K, V)>;

impl<K: Hash + Eq, V, B: BuildHasher + Default> HashMap<K, V, B> {
    /// Creates a new HashMap with capacity 0 and the default value for `B`. Memory will be
    /// allocated when the capacity changes.
    pub fn new() -> HashMap<K, V, B> {
        HashMap::with_hasher(B::default())
    }

    /// Creates a new HashMap with the provided `cap`acity, allowing insertions without
    /// reallocation. The default hasher will be used.
    pub fn with_cap(cap: usize) -> HashMap<K, V, B> {
        HashMap::with_cap_and_hasher(cap, B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Creates a new HashMap with capacity 0 and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashMap<K, V, B> {
        HashMap {
            buckets: Box::new([]),
            entries: Vec::new(),
            len: 0,
            hasher,
        }
    }

    /// Creates a new HashMap with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashMap<K, V, B> {
        HashMap {
            buckets: empty_buckets(cap),
            entries: Vec::with_capacity(cap),
            len: 0,
            hasher,
        }
    }

    /// Returns the length of the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current capacity of the HashMap, which is the number of buckets in its table.
    pub fn cap(&self) -> usize {
        self.buckets.len()
    }

    /// Inserts the provided `key`-`value` pair into the HashMap, increasing the capacity if
    /// required. If the key was already associated with a value, the previous value is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists. It also keeps
    /// its original position in the map's order.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.should_grow() {
            self.grow();
        } else if self.should_compact() {
            self.compact();
        }

        // We've just grown if necessary, so the capacity isn't 0.
        let index = self.find_index_for_key(&key).throw();

        // The bucket at index is either empty or refers to an equal key.
        match self.buckets[index] {
            Some(entry) => self.entries[entry]
                .as_mut()
                .map(|existing| mem::replace(&mut existing.1, value)),
            None => {
                self.buckets[index] = Some(self.entries.len());
                self.entries.push(Some((key, value)));
                self.len += 1;
                None
            },
        }
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // Q is a borrowed form of K, where equality and hashing carry over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let entry = self.find_entry_for_key(key)?;
        self.entries[entry].as_ref().map(|(k, v)| (k, v))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no values for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no values for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let entry = self.find_entry_for_key(key)?;
        self.entries[entry].as_mut().map(|(_, v)| v)
    }

    /// Removes the entry associated with `key`, returning it if it exists. The order of the
    /// remaining entries is unaffected.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index_for_key(key).ok()?;

        // If the bucket at index is empty, the map doesn't contain the key.
        let entry = self.buckets[index].take()?;
        let removed = self.entries[entry].take();
        self.len -= 1;

        self.close_gap(index);

        if self.len == 0 {
            // Nothing is live, so every remaining slot is a tombstone.
            self.entries.clear();
        }

        removed
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_entry_for_key(key).is_some()
    }

    /// Removes every entry from the HashMap, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.buckets.fill(None);
        self.entries.clear();
        self.len = 0;
    }

    /// Increases the capacity of the HashMap to ensure that len + `extra` entries will fit without
    /// exceeding the load factor.
    ///
    /// # Panics
    /// Panics if the required capacity overflows a `usize`. See
    /// [`try_reserve`](HashMap::try_reserve) for a non-panicking version.
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw()
    }

    /// Increases the capacity of the HashMap to ensure that len + `extra` entries will fit without
    /// exceeding the load factor, returning an error if the required capacity overflows a
    /// `usize`.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        let new_cap = self
            .len
            .checked_add(extra)
            .and_then(|required| required.checked_mul(LOAD_FACTOR_DENOMINATOR))
            .map(|scaled| scaled.div_ceil(LOAD_FACTOR_NUMERATOR))
            .ok_or(CapacityOverflow)?;

        if new_cap > self.cap() {
            self.realloc_with_cap(new_cap);
        }
        Ok(())
    }

    /// Returns an iterator over all key-value pairs in the HashMap, as references, in insertion
    /// order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }

    /// Returns an iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Determines whether the HashMap's length has reached the load capacity, meaning that it
    /// should grow before inserting new entries.
    pub(crate) fn should_grow(&self) -> bool {
        self.len >= self.cap() * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR
    }

    /// Determines whether the entry store holds as many tombstones as there are buckets.
    pub(crate) fn should_compact(&self) -> bool {
        self.entries.len() - self.len >= self.cap()
    }

    /// Grows the HashMap by the growth factor, ensuring that it can hold additional entries.
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap() * GROWTH_FACTOR, MIN_ALLOCATED_CAP);

        self.realloc_with_cap(new_cap)
    }

    /// Drops all tombstones from the entry store and rebuilds the table at the same capacity.
    pub(crate) fn compact(&mut self) {
        self.realloc_with_cap(self.cap())
    }

    /// Reallocates the table to have capacity equal to `new_cap`, if doing so wouldn't cause the
    /// map to overload. (There isn't a logical way for the map to shrink and drop entries, so this
    /// isn't allowed.) Tombstones are dropped from the entry store in the process.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        if new_cap * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR < self.len {
            return;
        }

        self.entries.retain(Option::is_some);
        self.buckets = empty_buckets(new_cap);

        for (position, entry) in self.entries.iter().enumerate() {
            if let Some((key, _)) = entry {
                // If the new capacity is 0, there are no entries and we can't enter this loop.
                let index = self.find_index_for_key(key).throw();
                self.buckets[index] = Some(position);
            }
        }
    }

    /// Moves later buckets from the probe run starting after `hole` back into it, so that every
    /// remaining key is still reachable from its ideal bucket without crossing an empty one.
    fn close_gap(&mut self, mut hole: usize) {
        let cap = self.cap();
        let mut next = (hole + 1) % cap;

        while let Some(entry) = self.buckets[next] {
            let ideal = self.ideal_index_of(entry);

            // A bucket whose ideal index lies between the hole and itself is still reachable.
            if !cyclic_between(hole, ideal, next) {
                self.buckets[hole] = self.buckets[next].take();
                hole = next;
            }
            next = (next + 1) % cap;
        }
    }

    /// Returns the ideal bucket index for the live entry at `position` in the entry store.
    fn ideal_index_of(&self, position: usize) -> usize {
        match &self.entries[position] {
            // The table has at least one occupied bucket, so its capacity isn't 0.
            Some((key, _)) => self.index_from_key(key).throw(),
            None => unreachable!("bucket refers to a removed entry"),
        }
    }

    /// Calculates the ideal index of a bucket for the provided `hashable` (or [`IndexNoCap`] if
    /// the HashMap has 0 capacity). This method doesn't consider hash collisions, see
    /// [`HashMap::find_index_for_key`] for that functionality.
    pub(crate) fn index_from_key<H: Hash + ?Sized>(&self, hashable: &H) -> Result<usize, IndexNoCap> {
        let key_hash = self.hasher.hash_one(hashable);
        key_hash
            .checked_rem(self.cap() as u64)
            .map(|i| i as usize)
            .ok_or(IndexNoCap)
    }

    /// Finds the first valid bucket index for the provided `key` (or [`IndexNoCap`] if the HashMap
    /// has 0 capacity). This is done by calculating the ideal index and then probing until a
    /// bucket is found that is empty or refers to an equal key.
    pub(crate) fn find_index_for_key<Q>(&self, key: &Q) -> Result<usize, IndexNoCap>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut index = self.index_from_key(key)?;

        // While there is an entry at the current index with an unequal key, move to the next
        // index (wrapping at the capacity). The load factor guarantees an empty bucket exists.
        while let Some(entry) = self.buckets[index]
            && self.entries[entry]
                .as_ref()
                .is_none_or(|(existing, _)| existing.borrow() != key)
        {
            index = (index + 1) % self.cap();
        }

        Ok(index)
    }

    /// Finds the position in the entry store of the entry for `key`, if there is one.
    pub(crate) fn find_entry_for_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index_for_key(key).ok()?;
        self.buckets[index]
    }
}

/// Allocates a table of `cap` empty buckets.
fn empty_buckets(cap: usize) -> Box<[Bucket]> {
    vec![None; cap].into_boxed_slice()
}

/// Determines whether `index` lies in the cyclic range `(start, end]`.
const fn cyclic_between(start: usize, index: usize, end: usize) -> bool {
    if start <= end {
        start < index && index <= end
    } else {
        start < index || index <= end
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for HashMap<K, V, B> {
    fn default() -> Self {
        HashMap::new()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(value: I) -> Self {
        let mut map = HashMap::new();
        map.extend(value);
        map
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashMap<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashMap")
            .field("entries", &debug_with(|f| f.debug_map().entries(self.iter()).finish()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}
