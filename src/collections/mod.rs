//! Hash-based collection types and the traits they share.
//!
//! # Method
//! The set is a wrapper around the map, storing `()` against each element. The map owns all of
//! the interesting parts: hashing, probing, growth and keeping insertion order.

#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "traits")]
pub mod traits;
