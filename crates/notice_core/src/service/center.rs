//! Notification center session.
//!
//! # Responsibility
//! - Own the notification store, catalog and view state for one UI session.
//! - Route view events (select, calendar day click, view switch) into the
//!   store mutators.
//! - Produce read-only snapshots for rendering.
//!
//! # Invariants
//! - The selected id, when set, refers to a notification in the store.
//! - Opening a calendar day always lands in list mode with the day's
//!   representative selected and read.

use crate::model::notification::{Notification, NotificationId};
use crate::projection::calendar::{group_by_day, CalendarDay};
use crate::repo::notification_repo::{InMemoryNotificationRepository, NotificationRepository};
use crate::seed::{seed_notifications, SeedError};
use crate::service::catalog_service::CatalogService;
use crate::service::notification_service::NotificationService;
use chrono::{NaiveDate, TimeZone};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which projection the main pane shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    List,
    Calendar,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::List => Self::Calendar,
            Self::Calendar => Self::List,
        }
    }
}

/// Render-ready state of the center at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenterSnapshot {
    pub view_mode: ViewMode,
    /// Notifications in list display order.
    pub items: Vec<Notification>,
    /// Calendar cells keyed by local date; only days with notifications.
    pub calendar: BTreeMap<NaiveDate, CalendarDay>,
    pub unread_count: usize,
    pub total: usize,
    pub selected: Option<NotificationId>,
}

/// Single owned object the view layer holds and mutates through.
pub struct NotificationCenter<R: NotificationRepository = InMemoryNotificationRepository> {
    notifications: NotificationService<R>,
    catalog: CatalogService,
    view_mode: ViewMode,
    selected: Option<NotificationId>,
}

impl NotificationCenter<InMemoryNotificationRepository> {
    /// Builds an in-memory center from the built-in seed data.
    pub fn from_builtin_seed() -> Result<Self, SeedError> {
        Self::from_seed(seed_notifications()?)
    }

    /// Builds an in-memory center from caller-supplied seed records.
    pub fn from_seed(seed: Vec<Notification>) -> Result<Self, SeedError> {
        let service = NotificationService::with_seed(InMemoryNotificationRepository::new(), seed)?;
        Ok(Self::new(service, CatalogService::with_builtin_entries()))
    }
}

impl<R: NotificationRepository> NotificationCenter<R> {
    pub fn new(notifications: NotificationService<R>, catalog: CatalogService) -> Self {
        Self {
            notifications,
            catalog,
            view_mode: ViewMode::default(),
            selected: None,
        }
    }

    pub fn notifications(&self) -> &NotificationService<R> {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationService<R> {
        &mut self.notifications
    }

    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogService {
        &mut self.catalog
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Switches between list and calendar and returns the new mode.
    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggled();
        self.view_mode
    }

    /// Selects a notification and marks it read. Unknown ids leave the
    /// current selection untouched.
    pub fn select(&mut self, id: &NotificationId) -> Option<Notification> {
        let selected = self.notifications.select(id)?;
        self.selected = Some(selected.id.clone());
        Some(selected)
    }

    /// Currently selected notification, reflecting later flag changes.
    pub fn selected(&self) -> Option<&Notification> {
        self.selected
            .as_ref()
            .and_then(|id| self.notifications.get(id))
    }

    /// Opens the representative notification of `date` in list mode.
    ///
    /// Returns `None` and changes nothing when the day has no notifications.
    pub fn open_calendar_day<Tz: TimeZone>(
        &mut self,
        date: NaiveDate,
        tz: &Tz,
    ) -> Option<Notification> {
        let representative = self
            .notifications
            .calendar(tz)
            .remove(&date)?
            .representative;
        debug!(
            "event=open_calendar_day module=center status=ok date={date} id={}",
            representative.id
        );
        self.view_mode = ViewMode::List;
        self.select(&representative.id)
    }

    pub fn snapshot<Tz: TimeZone>(&self, tz: &Tz) -> CenterSnapshot {
        let items = self.notifications.sorted();
        let calendar = group_by_day(&items, tz);
        CenterSnapshot {
            view_mode: self.view_mode,
            total: items.len(),
            unread_count: self.notifications.unread_count(),
            items,
            calendar,
            selected: self.selected.clone(),
        }
    }
}
