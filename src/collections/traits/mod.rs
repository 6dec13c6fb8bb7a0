//! Traits shared by this crate's collections.

pub mod set;

#[doc(inline)]
pub use set::Set;
