//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep view layers decoupled from storage details.

pub mod catalog_service;
pub mod center;
pub mod notification_service;
