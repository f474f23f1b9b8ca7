//! Domain logic for the directors' association membership platform.
//!
//! This crate has no database or HTTP dependencies so it can be used by the
//! API layer, repository tests, and any future CLI tooling:
//!
//! - [`error`] — the domain error taxonomy shared across all layers.
//! - [`membership`] — verification/payment status vocabulary and the
//!   approval-email transition rule.
//! - [`roles`] — well-known web role names.
//! - [`search`] — profession ranking and the directory free-text filter.
//! - [`collation`] — locale-aware Thai name ordering.
//! - [`debounce`] / [`epoch`] — input coalescing and stale-response
//!   discarding for interactive search consumers.

pub mod collation;
pub mod debounce;
pub mod epoch;
pub mod error;
pub mod membership;
pub mod roles;
pub mod search;
pub mod types;
