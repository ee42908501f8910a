//! Read-only projections over the notification collection.
//!
//! # Responsibility
//! - Compute display order for list views.
//! - Compute day-level summaries for calendar views.
//! - Provide the version walkthrough cursor.
//!
//! # Invariants
//! - Projections are pure functions of their input; they never mutate it.
//! - Display order is always recomputed, never stored.

pub mod calendar;
pub mod list_order;
pub mod whats_new;
