//! A module containing [`UniqueValueSet`] and associated types.
//!
//! The other types provide owned and borrowed iteration over a set's elements, in the order they
//! were first added.
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the
//! elements in place would cause a logic error.
//!
//! [`UniqueValueSet`] is also re-exported under the parent module.

mod iter;
mod tests;
mod unique_value_set;

pub use iter::*;
pub use unique_value_set::*;

#[doc(inline)]
pub use super::map::CapacityOverflow;
