#![cfg(test)]

use super::*;
use crate::collections::traits::Set;
use crate::util::hash::{BadHasherBuilder, ManualHash};

#[test]
fn test_add_then_has() {
    let mut set = UniqueValueSet::<&str>::new();
    for value in ["a", "b", "c"] {
        set.add(value);
        assert!(set.has(&value), "A value should be present after it is added.");
    }
    assert_eq!(set.size(), 3);
}

#[test]
fn test_delete_then_not_has() {
    let mut set = UniqueValueSet::<u32>::from([1, 2, 3]);

    set.delete(&2);
    assert!(!set.has(&2), "A deleted value shouldn't be present.");
    assert_eq!(set.size(), 2);

    set.delete(&7);
    assert!(!set.has(&7), "Deleting an absent value should leave it absent.");
    assert_eq!(set.size(), 2, "Deleting an absent value shouldn't change the size.");

    set.delete(&2);
    assert_eq!(set.size(), 2, "Deleting twice should be the same as deleting once.");
}

#[test]
fn test_add_is_idempotent() {
    let mut set = UniqueValueSet::<String>::new();
    set.add("x".to_string());
    let size = set.size();

    set.add("x".to_string());
    assert_eq!(set.size(), size, "Adding a present value shouldn't change the size.");
    assert!(!set.insert("x".to_string()));
    assert!(set.insert("y".to_string()));
}

#[test]
fn test_clear() {
    let mut set = UniqueValueSet::<u32>::from_iter(0..20);
    set.clear();

    assert_eq!(set.size(), 0);
    assert!(set.is_empty());
    assert!((0..20).all(|i| !set.has(&i)), "Nothing should survive a clear.");

    set.clear();
    assert_eq!(set.size(), 0, "Clearing an empty set should be a no-op.");
    assert_eq!(set.add(4).size(), 1, "A cleared set should still be usable.");
}

#[test]
fn test_construct_collapses_duplicates() {
    let set = UniqueValueSet::<u32>::from([1, 2, 2, 3, 1]);
    assert_eq!(set.size(), 3);
    assert!(set.has(&1) && set.has(&2) && set.has(&3));
    assert_eq!(
        set.iter().copied().collect::<Vec<_>>(),
        [1, 2, 3],
        "Duplicates should keep the position of their first occurrence."
    );

    let empty = UniqueValueSet::<u32>::from_iter([]);
    assert_eq!(empty.size(), 0);
    assert_eq!(UniqueValueSet::<u32>::default().size(), 0);
}

#[test]
fn test_single_value_scenario() {
    let mut set = UniqueValueSet::<i32>::from_iter([]);
    assert_eq!(set.size(), 0);

    set.add(5);
    assert_eq!(set.size(), 1);
    assert!(set.has(&5));

    set.add(5);
    assert_eq!(set.size(), 1);

    set.delete(&5);
    assert_eq!(set.size(), 0);
    assert!(!set.has(&5));
}

#[test]
fn test_chaining() {
    let mut set = UniqueValueSet::<char>::new();
    set.add('a').add('b').add('c').delete(&'b').add('d');
    assert_eq!(set.to_string(), "UniqueValueSet: {a, c, d}");

    assert_eq!(set.clear().add('z').size(), 1, "Clear should chain like add and delete.");
}

#[test]
fn test_display() {
    assert_eq!(
        UniqueValueSet::<u32>::from([1, 2, 3]).to_string(),
        "UniqueValueSet: {1, 2, 3}"
    );
    assert_eq!(UniqueValueSet::<u32>::new().to_string(), "UniqueValueSet: {}");
    assert_eq!(
        UniqueValueSet::<&str>::from(["one"]).to_string(),
        "UniqueValueSet: {one}"
    );

    let mut set = UniqueValueSet::<u32>::from([1, 2, 3]);
    set.delete(&2).add(2);
    assert_eq!(
        set.to_string(),
        "UniqueValueSet: {1, 3, 2}",
        "A deleted value should move to the end when added again."
    );
}

#[test]
fn test_display_unaffected_by_collisions() {
    let mut set = UniqueValueSet::with_hasher(BadHasherBuilder);
    for (hash, value) in [(0, "zero"), (0, "one"), (2, "two"), (0, "three"), (2, "four"), (1, "five")] {
        set.add(ManualHash::new(hash, value));
    }
    set.delete(&ManualHash::new(0, "zero")).delete(&ManualHash::new(2, "two"));

    assert_eq!(
        set.into_iter().map(|i| i.value()).collect::<Vec<_>>(),
        ["one", "three", "four", "five"],
        "Colliding values should keep their insertion order."
    );
}

#[test]
fn test_remove_returns_value() {
    let mut set = UniqueValueSet::<String>::from(["kept".to_string(), "taken".to_string()]);
    assert_eq!(set.remove("taken"), Some("taken".to_string()));
    assert_eq!(set.remove("taken"), None);
    assert!(set.contains("kept"));
}

#[test]
fn test_extend() {
    let mut set = UniqueValueSet::<u32>::from([1, 2]);
    set.extend([2, 3]);
    set.extend(&[3, 4]);
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
}

#[test]
fn test_equality_ignores_order() {
    let a = UniqueValueSet::<u32>::from([1, 2, 3]);
    let b = UniqueValueSet::<u32>::from([3, 1, 2]);
    let c = UniqueValueSet::<u32>::from([1, 2]);

    assert_eq!(a, b, "Sets with the same values should be equal whatever their order.");
    assert_ne!(a, c);
    assert_eq!(a.clone(), a);
}

#[test]
fn test_set_relations() {
    let small = UniqueValueSet::<u32>::from([1, 2]);
    let large = UniqueValueSet::<u32>::from([3, 2, 1]);
    let other = UniqueValueSet::<u32>::from([7, 8]);

    assert!(small.is_subset(&large));
    assert!(!large.is_subset(&small));
    assert!(large.is_superset(&small));
    assert!(small.is_disjoint(&other));
    assert!(!small.is_disjoint(&large));
    assert!(UniqueValueSet::<u32>::new().is_subset(&small), "The empty set is a subset of all sets.");
}

#[test]
fn test_reserve() {
    let mut set = UniqueValueSet::<u32>::with_cap(0);
    set.reserve(10);
    let cap = set.cap();
    set.extend(0..10);
    assert_eq!(set.cap(), cap, "Reserved values should fit without reallocating.");

    assert_eq!(set.try_reserve(usize::MAX), Err(CapacityOverflow));
}

#[test]
fn test_debug() {
    let set = UniqueValueSet::<u32, BadHasherBuilder>::from([1, 2]);
    assert_eq!(
        format!("{set:?}"),
        "UniqueValueSet { values: {1, 2}, len: 2, cap: 3 }"
    );
}
