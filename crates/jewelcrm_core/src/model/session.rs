//! Snapshots of collaborator outputs consumed on each render.
//!
//! # Invariants
//! - A malformed feed entry is dropped on decode; it never fails the
//!   whole feed.

use crate::model::actor::Actor;
use crate::model::notification::Notification;
use log::warn;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Auth collaborator output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthSnapshot {
    pub actor: Option<Actor>,
    pub is_authenticated: bool,
    pub is_hydrated: bool,
}

impl AuthSnapshot {
    /// Fully hydrated, authenticated session for `actor`.
    pub fn signed_in(actor: Actor) -> Self {
        Self {
            actor: Some(actor),
            is_authenticated: true,
            is_hydrated: true,
        }
    }

    /// Session with no actor.
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Returns the actor only when the session is authenticated and hydrated.
    pub fn active_actor(&self) -> Option<&Actor> {
        if !self.is_authenticated || !self.is_hydrated {
            return None;
        }
        self.actor.as_ref()
    }
}

/// Notification store collaborator output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationFeed {
    #[serde(deserialize_with = "deserialize_feed_entries")]
    pub notifications: Vec<Notification>,
    pub is_loading: bool,
    pub is_connected: bool,
    pub error: Option<String>,
}

impl NotificationFeed {
    /// Connected, idle feed carrying `notifications`.
    pub fn connected(notifications: Vec<Notification>) -> Self {
        Self {
            notifications,
            is_loading: false,
            is_connected: true,
            error: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FeedEntry {
    Valid(Notification),
    Malformed(IgnoredAny),
}

fn deserialize_feed_entries<'de, D>(deserializer: D) -> Result<Vec<Notification>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<FeedEntry>::deserialize(deserializer)?;
    let mut notifications = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match entry {
            FeedEntry::Valid(notification) => notifications.push(notification),
            FeedEntry::Malformed(_) => {
                warn!("event=feed_decode module=model status=skipped index={index}");
            }
        }
    }
    Ok(notifications)
}
