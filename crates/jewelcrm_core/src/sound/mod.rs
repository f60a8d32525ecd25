//! Notification alert sound.
//!
//! # Responsibility
//! - Synthesize the alert procedurally; no sound assets are bundled.
//! - Keep audio failures away from callers.
//!
//! # See also
//! - `bell` for the visual side of new-notification alerts.

pub mod output;
pub mod service;
pub mod tone;
