//! List display order.
//!
//! Pinned notifications first, then newest first. The sort is stable, so
//! records with equal pin status and equal `created_at` keep their input order.

use crate::model::notification::Notification;
use std::cmp::Ordering;

/// Compares two notifications by list display order.
pub fn list_order(a: &Notification, b: &Notification) -> Ordering {
    b.is_pinned
        .cmp(&a.is_pinned)
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Returns a copy of `items` in list display order.
pub fn sort_for_list(items: &[Notification]) -> Vec<Notification> {
    let mut sorted = items.to_vec();
    sorted.sort_by(list_order);
    sorted
}
