//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the data access contract used by services.
//! - Keep storage layout details away from use-case orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Notification::validate()` before storing.
//! - Lookups for unknown ids return `None`; they are never errors.

pub mod notification_repo;
