//! Calendar projection.
//!
//! # Responsibility
//! - Group notifications by the calendar day of `created_at` in a given zone.
//! - Pick one representative notification per day.
//!
//! # Invariants
//! - Days without notifications have no entry.
//! - The representative is the first record seen for the day, replaced only
//!   when it is read and a later record is unread. Ties keep the earliest.

use crate::model::notification::{Notification, NotificationKind};
use chrono::{NaiveDate, TimeZone};
use std::collections::BTreeMap;

/// One calendar cell with at least one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Notification shown for this day; unread records are preferred.
    pub representative: Notification,
    /// Number of notifications created on this day.
    pub count: usize,
    /// Whether any notification on this day is a version release.
    pub has_version: bool,
}

impl CalendarDay {
    fn start(date: NaiveDate, first: &Notification) -> Self {
        Self {
            date,
            representative: first.clone(),
            count: 1,
            has_version: first.kind == NotificationKind::Version,
        }
    }

    fn observe(&mut self, item: &Notification) {
        self.count += 1;
        self.has_version |= item.kind == NotificationKind::Version;
        if self.representative.is_read && !item.is_read {
            self.representative = item.clone();
        }
    }
}

/// Groups notifications by local calendar day in `tz`.
///
/// Input order matters for representative selection; callers that mirror the
/// list view pass the list-sorted sequence.
pub fn group_by_day<Tz: TimeZone>(
    items: &[Notification],
    tz: &Tz,
) -> BTreeMap<NaiveDate, CalendarDay> {
    let mut days: BTreeMap<NaiveDate, CalendarDay> = BTreeMap::new();
    for item in items {
        let date = item.created_at.with_timezone(tz).date_naive();
        match days.get_mut(&date) {
            Some(day) => day.observe(item),
            None => {
                days.insert(date, CalendarDay::start(date, item));
            }
        }
    }
    days
}
