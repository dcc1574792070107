//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into tracker-level flows.
//! - Keep front-ends decoupled from storage details.

pub mod parcel_service;
