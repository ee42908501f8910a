//! Core domain logic for the notification center.
//! This crate is the single source of truth for ordering and store invariants.

pub mod logging;
pub mod model;
pub mod projection;
pub mod repo;
pub mod seed;
pub mod service;

pub use logging::{
    default_log_level, init_logging, init_stderr_logging, logging_status, LogSink,
};
pub use model::catalog::{NotificationTypeEntry, Project, ProjectId};
pub use model::notification::{
    NewNotification, Notification, NotificationId, NotificationKind, NotificationValidationError,
};
pub use projection::calendar::{group_by_day, CalendarDay};
pub use projection::list_order::{list_order, sort_for_list};
pub use projection::whats_new::{version_notifications, WhatsNewCursor};
pub use repo::notification_repo::{
    InMemoryNotificationRepository, NotificationRepository, RepoError, RepoResult,
};
pub use seed::{load_seed_file, parse_seed, seed_notifications, SeedError};
pub use service::catalog_service::{type_slug, CatalogError, CatalogService};
pub use service::center::{CenterSnapshot, NotificationCenter, ViewMode};
pub use service::notification_service::NotificationService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
