/// Read-only behaviour common to collections of unique values.
///
/// Implementors only need to provide membership, length and borrowed iteration; the relations
/// between two sets are derived from those.
pub trait Set<T> {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns true if `item` is an element of the set.
    fn contains(&self, item: &T) -> bool;

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all elements in the set, as references.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Returns true if every element of `self` is also in `other`. (`self ⊆ other`)
    fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|item| other.contains(item))
    }

    /// Returns true if every element of `other` is also in `self`. (`self ⊇ other`)
    fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns true if `self` and `other` have no elements in common. (`self ∩ other = ∅`)
    fn is_disjoint(&self, other: &Self) -> bool {
        // Only the smaller set needs to be walked.
        if self.len() <= other.len() {
            self.iter().all(|item| !other.contains(item))
        } else {
            other.iter().all(|item| !self.contains(item))
        }
    }
}
