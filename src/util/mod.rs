#![warn(missing_docs)]

#[cfg(feature = "hash")]
pub mod fmt;
#[cfg(test)]
pub mod hash;
#[cfg(feature = "hash")]
pub mod result;
