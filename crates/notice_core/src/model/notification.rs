//! Notification domain model.
//!
//! # Responsibility
//! - Define the canonical notification record shared by list/calendar views.
//! - Normalize and validate add-notification input before it reaches storage.
//!
//! # Invariants
//! - `id` is stable and never reused for another notification.
//! - `created_at` is assigned once and never changes.
//! - `title` and `short_text` are non-blank; `long_text` is never `Some("")`.
//! - `is_pinned` and `is_read` are independent flags.

use crate::model::catalog::ProjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one notification.
///
/// Opaque to callers. Freshly created notifications get UUID v4 text; seed
/// records may carry any non-blank string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(String);

impl NotificationId {
    /// Generates a fresh unique identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing identifier (seed/import paths).
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for NotificationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NotificationId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A defect was found or fixed.
    Bug,
    /// A system update was rolled out.
    Update,
    /// A new version was released.
    Version,
    /// Planned downtime or maintenance window.
    Maintenance,
    /// Security alert.
    Security,
    /// General information.
    Info,
}

impl NotificationKind {
    /// All built-in kinds in declaration order.
    pub const ALL: [NotificationKind; 6] = [
        Self::Bug,
        Self::Update,
        Self::Version,
        Self::Maintenance,
        Self::Security,
        Self::Info,
    ];

    /// Stable wire name (`bug|update|version|maintenance|security|info`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Update => "update",
            Self::Version => "version",
            Self::Maintenance => "maintenance",
            Self::Security => "security",
            Self::Info => "info",
        }
    }

    /// Human-readable label used by views.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bug => "Bug",
            Self::Update => "System update",
            Self::Version => "Version",
            Self::Maintenance => "Maintenance",
            Self::Security => "Security",
            Self::Info => "Info",
        }
    }

    /// Parses a wire name, case-insensitive and whitespace tolerant.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
    }
}

impl Display for NotificationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors for notification records and add input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationValidationError {
    /// Identifier is empty after trim.
    BlankId,
    /// Title is empty after trim.
    BlankTitle,
    /// Short text is empty after trim.
    BlankShortText,
    /// `long_text` is present but blank; absence must be `None`.
    BlankLongText,
}

impl Display for NotificationValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "notification id must not be blank"),
            Self::BlankTitle => write!(f, "notification title must not be blank"),
            Self::BlankShortText => write!(f, "notification short text must not be blank"),
            Self::BlankLongText => write!(f, "notification long text must be absent, not blank"),
        }
    }
}

impl Error for NotificationValidationError {}

/// Canonical notification record.
///
/// Serialized with camelCase field names and the kind under `type`, matching
/// the seed data format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "NotificationRecord")]
pub struct Notification {
    pub id: NotificationId,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Numeric project reference. Not checked against the project catalog.
    pub project: ProjectId,
    pub title: String,
    pub short_text: String,
    pub long_text: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_pinned: bool,
    pub is_read: bool,
}

impl Notification {
    /// Validates record-level invariants.
    ///
    /// # Errors
    /// - Returns the first violated invariant in field order.
    pub fn validate(&self) -> Result<(), NotificationValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(NotificationValidationError::BlankId);
        }
        if self.title.trim().is_empty() {
            return Err(NotificationValidationError::BlankTitle);
        }
        if self.short_text.trim().is_empty() {
            return Err(NotificationValidationError::BlankShortText);
        }
        if matches!(self.long_text.as_deref(), Some(text) if text.trim().is_empty()) {
            return Err(NotificationValidationError::BlankLongText);
        }
        Ok(())
    }
}

// Deserialization goes through this shape so seed records get the same text
// normalization as added ones and invalid records never enter the store.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NotificationRecord {
    id: NotificationId,
    #[serde(rename = "type")]
    kind: NotificationKind,
    project: ProjectId,
    title: String,
    short_text: String,
    #[serde(default)]
    long_text: Option<String>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    is_pinned: bool,
    #[serde(default)]
    is_read: bool,
}

impl TryFrom<NotificationRecord> for Notification {
    type Error = NotificationValidationError;

    fn try_from(value: NotificationRecord) -> Result<Self, Self::Error> {
        let notification = Notification {
            id: value.id,
            kind: value.kind,
            project: value.project,
            title: value.title.trim().to_string(),
            short_text: value.short_text.trim().to_string(),
            long_text: trim_optional(value.long_text),
            created_at: value.created_at,
            is_pinned: value.is_pinned,
            is_read: value.is_read,
        };
        notification.validate()?;
        Ok(notification)
    }
}

/// Input for the add-notification operation.
///
/// `is_read` is not part of the input: new notifications always start unread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub kind: NotificationKind,
    pub project: ProjectId,
    pub title: String,
    pub short_text: String,
    pub long_text: Option<String>,
    pub is_pinned: bool,
}

impl Default for NewNotification {
    fn default() -> Self {
        Self {
            kind: NotificationKind::Info,
            project: 1,
            title: String::new(),
            short_text: String::new(),
            long_text: None,
            is_pinned: false,
        }
    }
}

impl NewNotification {
    /// Trims text fields and maps a blank long text to `None`.
    ///
    /// # Errors
    /// - `BlankTitle` / `BlankShortText` when a required field is blank.
    pub fn normalize(self) -> Result<Self, NotificationValidationError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(NotificationValidationError::BlankTitle);
        }
        let short_text = self.short_text.trim().to_string();
        if short_text.is_empty() {
            return Err(NotificationValidationError::BlankShortText);
        }
        let long_text = trim_optional(self.long_text);

        Ok(Self {
            title,
            short_text,
            long_text,
            ..self
        })
    }

    /// Materializes a record with a fresh id, `created_at` and `is_read = false`.
    ///
    /// Callers must pass normalized input.
    pub(crate) fn into_notification(self, created_at: DateTime<Utc>) -> Notification {
        Notification {
            id: NotificationId::generate(),
            kind: self.kind,
            project: self.project,
            title: self.title,
            short_text: self.short_text,
            long_text: self.long_text,
            created_at,
            is_pinned: self.is_pinned,
            is_read: false,
        }
    }
}

fn trim_optional(text: Option<String>) -> Option<String> {
    text.map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
