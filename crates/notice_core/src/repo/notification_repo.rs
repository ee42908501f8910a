//! Notification repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the notification collection for the process lifetime.
//! - Expose flag mutations only; identity, text and `created_at` are
//!   write-once.
//!
//! # Invariants
//! - Ids are unique across the collection.
//! - Stored order is insertion order with newest inserts at the front; it is
//!   not display order.

use crate::model::notification::{Notification, NotificationId, NotificationValidationError};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for notification writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(NotificationValidationError),
    DuplicateId(NotificationId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "notification id already exists: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<NotificationValidationError> for RepoError {
    fn from(value: NotificationValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for notification storage.
pub trait NotificationRepository {
    /// Stores a new notification ahead of all existing ones.
    fn insert_front(&mut self, notification: Notification) -> RepoResult<()>;
    /// Stores a notification behind all existing ones (seed loading).
    fn insert_back(&mut self, notification: Notification) -> RepoResult<()>;
    fn get(&self, id: &NotificationId) -> Option<&Notification>;
    /// Returns all notifications in storage order.
    fn list(&self) -> &[Notification];
    /// Sets `is_read`; returns the new value or `None` for unknown ids.
    fn set_read(&mut self, id: &NotificationId, is_read: bool) -> Option<bool>;
    /// Sets `is_pinned`; returns the new value or `None` for unknown ids.
    fn set_pinned(&mut self, id: &NotificationId, is_pinned: bool) -> Option<bool>;
    /// Sets `is_read = true` on every record and returns how many were visited.
    fn mark_all_read(&mut self) -> usize;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-memory notification store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryNotificationRepository {
    items: Vec<Notification>,
    ids: HashSet<NotificationId>,
}

impl InMemoryNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn admit(&mut self, notification: &Notification) -> RepoResult<()> {
        notification.validate()?;
        if self.ids.contains(&notification.id) {
            return Err(RepoError::DuplicateId(notification.id.clone()));
        }
        self.ids.insert(notification.id.clone());
        Ok(())
    }

    fn find_mut(&mut self, id: &NotificationId) -> Option<&mut Notification> {
        self.items.iter_mut().find(|item| &item.id == id)
    }
}

impl NotificationRepository for InMemoryNotificationRepository {
    fn insert_front(&mut self, notification: Notification) -> RepoResult<()> {
        self.admit(&notification)?;
        self.items.insert(0, notification);
        Ok(())
    }

    fn insert_back(&mut self, notification: Notification) -> RepoResult<()> {
        self.admit(&notification)?;
        self.items.push(notification);
        Ok(())
    }

    fn get(&self, id: &NotificationId) -> Option<&Notification> {
        self.items.iter().find(|item| &item.id == id)
    }

    fn list(&self) -> &[Notification] {
        &self.items
    }

    fn set_read(&mut self, id: &NotificationId, is_read: bool) -> Option<bool> {
        let item = self.find_mut(id)?;
        item.is_read = is_read;
        Some(item.is_read)
    }

    fn set_pinned(&mut self, id: &NotificationId, is_pinned: bool) -> Option<bool> {
        let item = self.find_mut(id)?;
        item.is_pinned = is_pinned;
        Some(item.is_pinned)
    }

    fn mark_all_read(&mut self) -> usize {
        for item in &mut self.items {
            item.is_read = true;
        }
        self.items.len()
    }
}
