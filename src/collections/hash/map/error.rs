use derive_more::{Display, Error};

/// A hash index was requested from a table that has no buckets yet.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("unable to calculate an index for a hash table with capacity 0")]
pub struct IndexNoCap;

/// The capacity required by a reservation can't be represented.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("capacity overflow")]
pub struct CapacityOverflow;
