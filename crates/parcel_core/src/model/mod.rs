//! Domain model for tracked shipments.
//!
//! # Responsibility
//! - Define the single persisted entity (`Parcel`) and its status vocabulary.
//!
//! # Invariants
//! - Status values outside the closed enum cannot be represented.
//! - Deletion is a hard delete; there are no tombstones.

pub mod parcel;
