//! A unique-value container, [`UniqueValueSet`], and the insertion-ordered hash map it is built
//! on.
//!
//! # Purpose
//! The set is deliberately small: membership test, insertion, deletion, size, clear and a
//! readable [`Display`](std::fmt::Display) form. Everything else in this crate exists to support
//! it properly rather than leaning on [`std::collections`].
//!
//! # Ordering
//! Elements are kept in the order they were first inserted. Deleting an element and adding it
//! again moves it to the end. This comes from the backing
//! [`HashMap`](collections::hash::HashMap), which keeps its entries in a dense, insertion-ordered
//! store and uses an open-addressing table only as an index into it.
//!
//! # Error Handling
//! None of the set's operations fail. Deleting an absent value or adding a present one is a
//! no-op. The few fallible operations (reserving capacity) report strongly typed, zero-sized
//! errors that implement [`Error`](std::error::Error), or panic with that error's message when
//! the method is documented to do so.
//!
//! # Concurrency
//! Nothing here synchronizes. The types are [`Send`] and [`Sync`] whenever their contents are, so
//! wrap a set in a [`Mutex`](std::sync::Mutex) if several threads need to mutate it.
//!
//! # Dependencies
//! This crate uses `derive_more` for its error types and `itertools` for joining elements when
//! formatting.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;

#[cfg(feature = "hash")]
#[doc(inline)]
pub use collections::hash::UniqueValueSet;
