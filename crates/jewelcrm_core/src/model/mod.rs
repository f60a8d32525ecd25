//! Domain model for notification scoping.
//!
//! # Responsibility
//! - Define actors, notifications and collaborator snapshots consumed by core.
//! - Normalize identifiers so equality checks never depend on wire types.
//!
//! # Invariants
//! - Core holds no persistent copy of these values; they are rebuilt by
//!   collaborators on every state update.

pub mod actor;
pub mod id;
pub mod notification;
pub mod session;
