//! Domain model for the notification center.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one notification shape for both list and calendar projections.
//!
//! # Invariants
//! - Every notification is identified by a stable `NotificationId`.
//! - Notifications are never deleted; only read/pin flags change.

pub mod catalog;
pub mod notification;
