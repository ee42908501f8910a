//! Notification use-case service.
//!
//! # Responsibility
//! - Provide add/toggle/mark-all/select entry points for view callers.
//! - Expose read-only list and calendar projections of the current state.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Unknown ids are no-ops reported as `None`, never errors.
//! - Rejected adds leave the collection unchanged.
//! - Logs carry ids and counts only, never notification text.

use crate::model::notification::{NewNotification, Notification, NotificationId};
use crate::projection::calendar::{group_by_day, CalendarDay};
use crate::projection::list_order::sort_for_list;
use crate::projection::whats_new::version_notifications;
use crate::repo::notification_repo::{NotificationRepository, RepoResult};
use crate::seed::SeedError;
use chrono::{NaiveDate, TimeZone, Utc};
use log::{debug, info, warn};
use std::collections::BTreeMap;

/// Use-case service wrapper for notification operations.
pub struct NotificationService<R: NotificationRepository> {
    repo: R,
}

impl<R: NotificationRepository> NotificationService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a service and loads `seed` records as-is, preserving order.
    ///
    /// # Errors
    /// - `SeedError::Repo` when a record is invalid or repeats an id.
    pub fn with_seed(mut repo: R, seed: Vec<Notification>) -> Result<Self, SeedError> {
        let count = seed.len();
        for notification in seed {
            repo.insert_back(notification)?;
        }
        info!("event=seed_load module=service status=ok count={count}");
        Ok(Self { repo })
    }

    /// Adds one notification ahead of existing ones.
    ///
    /// # Contract
    /// - Title and short text are trimmed and must be non-blank.
    /// - Blank long text is stored as `None`.
    /// - The new record gets a fresh id, `created_at = now` and `is_read = false`.
    ///
    /// # Errors
    /// - `RepoError::Validation` when title or short text is blank; the
    ///   collection is left unchanged.
    pub fn add_notification(&mut self, input: NewNotification) -> RepoResult<Notification> {
        let normalized = match input.normalize() {
            Ok(normalized) => normalized,
            Err(err) => {
                warn!("event=notification_add module=service status=rejected reason={err}");
                return Err(err.into());
            }
        };

        let notification = normalized.into_notification(Utc::now());
        self.repo.insert_front(notification.clone())?;
        info!(
            "event=notification_add module=service status=ok id={} kind={} pinned={}",
            notification.id, notification.kind, notification.is_pinned
        );
        Ok(notification)
    }

    /// Flips `is_read`. Returns the new value, or `None` for unknown ids.
    pub fn toggle_read(&mut self, id: &NotificationId) -> Option<bool> {
        let current = self.lookup(id, "toggle_read")?.is_read;
        let updated = self.repo.set_read(id, !current);
        debug!("event=toggle_read module=service status=ok id={id} is_read={}", !current);
        updated
    }

    /// Flips `is_pinned`. Returns the new value, or `None` for unknown ids.
    pub fn toggle_pin(&mut self, id: &NotificationId) -> Option<bool> {
        let current = self.lookup(id, "toggle_pin")?.is_pinned;
        let updated = self.repo.set_pinned(id, !current);
        debug!("event=toggle_pin module=service status=ok id={id} is_pinned={}", !current);
        updated
    }

    /// Sets `is_read = true` on every notification, already-read ones included.
    pub fn mark_all_read(&mut self) -> usize {
        let count = self.repo.mark_all_read();
        info!("event=mark_all_read module=service status=ok count={count}");
        count
    }

    /// Selects a notification for detail display and marks it read.
    ///
    /// Unlike `toggle_read`, selection only ever sets the flag to `true`.
    pub fn select(&mut self, id: &NotificationId) -> Option<Notification> {
        let was_read = self.lookup(id, "select")?.is_read;
        if !was_read {
            self.repo.set_read(id, true);
            debug!("event=select module=service status=ok id={id} marked_read=true");
        }
        self.repo.get(id).cloned()
    }

    pub fn get(&self, id: &NotificationId) -> Option<&Notification> {
        self.repo.get(id)
    }

    /// Returns notifications in storage order (newest inserts first).
    pub fn notifications(&self) -> &[Notification] {
        self.repo.list()
    }

    /// Returns notifications in list display order.
    pub fn sorted(&self) -> Vec<Notification> {
        sort_for_list(self.repo.list())
    }

    /// Returns the calendar projection computed over list display order.
    pub fn calendar<Tz: TimeZone>(&self, tz: &Tz) -> BTreeMap<NaiveDate, CalendarDay> {
        group_by_day(&self.sorted(), tz)
    }

    /// Returns version notifications in list display order.
    pub fn version_notifications(&self) -> Vec<Notification> {
        version_notifications(self.repo.list())
    }

    pub fn unread_count(&self) -> usize {
        self.repo.list().iter().filter(|item| !item.is_read).count()
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    fn lookup(&self, id: &NotificationId, op: &str) -> Option<&Notification> {
        let found = self.repo.get(id);
        if found.is_none() {
            debug!("event={op} module=service status=noop reason=not_found id={id}");
        }
        found
    }
}
