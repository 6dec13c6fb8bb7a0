//! A module containing [`HashMap`] and associated types.
//!
//! The other included types provide owned and borrowed iteration over entries, keys or values in
//! a map, always in insertion order.
//!
//! As a note, there is no mutable iterator over entries or keys because mutating the keys of a
//! HashMap in place would cause a logic error.
//!
//! [`HashMap`] is also re-exported under the parent module.

mod error;
mod hash_map;
mod iter;

pub use error::*;
pub use hash_map::*;
pub use iter::*;
