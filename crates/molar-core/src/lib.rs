//! # molar-core
//!
//! Core types and error types for Molar.
//!
//! This crate provides the foundational types shared across all Molar crates:
//! - Entity structs mirroring the hosted backend rows (departments, quota
//!   tasks, batches, procedures)
//! - Status and role enums with state machine transitions
//! - Reference data (the caller's valid departments and tasks)
//! - In-place patching of cached lists from realtime change events
//! - Errors for unusable reference data and refused review steps

pub mod entities;
pub mod enums;
pub mod errors;
pub mod feed;
pub mod reference;
