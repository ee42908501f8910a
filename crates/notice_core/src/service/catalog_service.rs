//! Project and notification-type catalog service.
//!
//! # Responsibility
//! - Hold the append-only project and notification-type lists.
//! - Derive ids for new entries.
//!
//! # Invariants
//! - Names are trimmed and non-blank.
//! - New project id is the current maximum plus one (1 for an empty list);
//!   the list is left unchanged when that would overflow.
//! - Type ids are lowercase slugs and unique.

use crate::model::catalog::{NotificationTypeEntry, Project, ProjectId};
use crate::seed::{seed_notification_types, seed_projects};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Errors from catalog mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Name is empty after trim.
    BlankName,
    /// A notification type with the derived id already exists.
    DuplicateType(String),
    /// The largest project id is already in use; no next id exists.
    ProjectIdsExhausted,
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "name must not be blank"),
            Self::DuplicateType(id) => write!(f, "notification type already exists: `{id}`"),
            Self::ProjectIdsExhausted => write!(f, "no project id left after {}", ProjectId::MAX),
        }
    }
}

impl Error for CatalogError {}

/// Catalog of projects and notification types.
#[derive(Debug, Clone, Default)]
pub struct CatalogService {
    projects: Vec<Project>,
    notification_types: Vec<NotificationTypeEntry>,
}

impl CatalogService {
    pub fn new(projects: Vec<Project>, notification_types: Vec<NotificationTypeEntry>) -> Self {
        Self {
            projects,
            notification_types,
        }
    }

    /// Catalog populated with the built-in projects and types.
    pub fn with_builtin_entries() -> Self {
        Self::new(seed_projects(), seed_notification_types())
    }

    /// Appends a project and returns it.
    pub fn add_project(&mut self, name: &str) -> Result<Project, CatalogError> {
        let name = normalize_name(name)?;
        let id = match self.projects.iter().map(|project| project.id).max() {
            None => 1,
            Some(max) => max.checked_add(1).ok_or_else(|| {
                warn!("event=project_add module=catalog status=rejected reason=id_exhausted");
                CatalogError::ProjectIdsExhausted
            })?,
        };
        let project = Project { id, name };
        self.projects.push(project.clone());
        info!("event=project_add module=catalog status=ok id={id}");
        Ok(project)
    }

    /// Appends a notification type and returns it.
    pub fn add_notification_type(
        &mut self,
        name: &str,
    ) -> Result<NotificationTypeEntry, CatalogError> {
        let name = normalize_name(name)?;
        let id = type_slug(&name);
        if self.notification_types.iter().any(|entry| entry.id == id) {
            warn!("event=type_add module=catalog status=rejected reason=duplicate id={id}");
            return Err(CatalogError::DuplicateType(id));
        }
        let entry = NotificationTypeEntry { id, name };
        self.notification_types.push(entry.clone());
        info!("event=type_add module=catalog status=ok id={}", entry.id);
        Ok(entry)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn notification_types(&self) -> &[NotificationTypeEntry] {
        &self.notification_types
    }

    /// Display name for a project id; `None` when the id is unknown.
    pub fn project_name(&self, id: ProjectId) -> Option<&str> {
        self.projects
            .iter()
            .find(|project| project.id == id)
            .map(|project| project.name.as_str())
    }
}

fn normalize_name(name: &str) -> Result<String, CatalogError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::BlankName);
    }
    Ok(trimmed.to_string())
}

/// Lowercases `name` and replaces each whitespace run with `_`.
pub fn type_slug(name: &str) -> String {
    WHITESPACE_RE
        .replace_all(&name.to_lowercase(), "_")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::type_slug;

    #[test]
    fn slug_collapses_whitespace_runs() {
        assert_eq!(type_slug("Release  Notes\tDaily"), "release_notes_daily");
    }

    #[test]
    fn slug_keeps_non_ascii_letters() {
        assert_eq!(type_slug("Überblick Neu"), "überblick_neu");
    }
}
