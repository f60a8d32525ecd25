//! Notification bell: unread badge, configuration and widget state.
//!
//! # Responsibility
//! - Compose scoping and counting with feed connectivity and panel state.
//! - Describe what the host renders; drawing stays with the host.

pub mod badge;
pub mod config;
pub mod controller;
