//! HTTP handlers, grouped by resource.

pub mod admin;
pub mod auth;
pub mod members;
pub mod notifications;
pub mod professions;
pub mod stats;
