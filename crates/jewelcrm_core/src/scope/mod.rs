//! Notification access scoping.
//!
//! # Responsibility
//! - Hold the role-keyed policy table.
//! - Filter notification sequences per actor and report decisions.
//!
//! # Invariants
//! - Fail closed: missing identifiers exclude a notification.

pub mod filter;
pub mod observer;
pub mod policy;
