//! Startup seed data.
//!
//! # Responsibility
//! - Provide the built-in notification dataset and catalog entries.
//! - Parse caller-supplied seed files in the same JSON shape.
//!
//! # Invariants
//! - Seed records pass `Notification::validate()` at parse time.
//! - Seed parsing never panics; malformed input surfaces as `SeedError`.

use crate::model::catalog::{NotificationTypeEntry, Project};
use crate::model::notification::{Notification, NotificationKind};
use crate::repo::notification_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const BUILTIN_NOTIFICATIONS_JSON: &str = include_str!("notifications.json");

/// Errors from loading seed data.
#[derive(Debug)]
pub enum SeedError {
    /// Seed file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// Seed JSON is malformed or a record fails validation.
    Parse(serde_json::Error),
    /// A parsed record was rejected by the store (duplicate id).
    Repo(RepoError),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read seed file `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid seed data: {err}"),
            Self::Repo(err) => write!(f, "seed record rejected: {err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<RepoError> for SeedError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Returns the built-in notification dataset.
pub fn seed_notifications() -> Result<Vec<Notification>, SeedError> {
    parse_seed(BUILTIN_NOTIFICATIONS_JSON)
}

/// Parses a JSON array of notification records.
pub fn parse_seed(json: &str) -> Result<Vec<Notification>, SeedError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a seed file.
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<Notification>, SeedError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&json)
}

/// Returns the built-in project list.
pub fn seed_projects() -> Vec<Project> {
    ["Sample project 1", "Sample project 2", "Sample project 3"]
        .into_iter()
        .zip(1..)
        .map(|(name, id)| Project {
            id,
            name: name.to_string(),
        })
        .collect()
}

/// Returns the built-in notification types, one per `NotificationKind`.
pub fn seed_notification_types() -> Vec<NotificationTypeEntry> {
    NotificationKind::ALL
        .into_iter()
        .map(|kind| NotificationTypeEntry {
            id: kind.as_str().to_string(),
            name: kind.label().to_string(),
        })
        .collect()
}
