//! Notification access-control and delivery core for the jewellery CRM.
//! Decides which notifications an actor may see, drives the bell, and
//! synthesizes the alert sound.

pub mod bell;
pub mod logging;
pub mod model;
pub mod scope;
pub mod sound;

pub use bell::badge::{format_badge, unread, BADGE_MAX_LITERAL, BADGE_OVERFLOW_TEXT};
pub use bell::config::{BellConfig, BellSize, BellVariant};
pub use bell::controller::{BellController, BellIcon, BellState, BellView, BELL_ARIA_LABEL};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::actor::{Actor, Role};
pub use model::id::{EntityId, EntityIdError};
pub use model::notification::{Notification, NotificationStatus, NotificationType};
pub use model::session::{AuthSnapshot, NotificationFeed};
pub use scope::filter::{scope, scope_for_session, scope_owned, scope_with_observer};
pub use scope::observer::{LogScopeObserver, NoopScopeObserver, ScopeObserver, ScopeReport};
pub use scope::policy::{policy_for, PolicyEntry, RoleKey, ScopePolicy};
pub use sound::output::{
    AudioBackend, AudioError, AudioOutput, MemoryAudioBackend, RenderedTone,
    UnavailableAudioBackend,
};
pub use sound::service::{
    install_shared_sound, shared_sound, NotificationSound, PlayOutcome, SoundConfig,
    SoundInstallError,
};
pub use sound::tone::{ToneGenerator, ToneSpec};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
