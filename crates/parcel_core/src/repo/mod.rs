//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the parcel storage contract.
//! - Isolate SQLite query details from use-case orchestration.
//!
//! # Invariants
//! - Guarded mutations (address change, delete) are enforced here, not by callers.
//! - Repository APIs return semantic errors (`NotFound`, `NotRegistered`) in
//!   addition to DB transport errors.

pub mod parcel_store;
