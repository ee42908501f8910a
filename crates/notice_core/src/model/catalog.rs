//! Lookup catalog entries: projects and notification types.
//!
//! Both are append-only lists used to populate selection controls. They carry
//! no behavior beyond identity and display name.

use serde::{Deserialize, Serialize};

/// Numeric project identifier referenced by `Notification::project`.
pub type ProjectId = u32;

/// A project notifications can be filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
}

/// A named notification type entry.
///
/// `id` is a slug derived from the display name (lowercase, whitespace runs
/// replaced by `_`). The six built-in entries use the `NotificationKind` wire
/// names as ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationTypeEntry {
    pub id: String,
    pub name: String,
}
