//! Notification record consumed from the notification store.
//!
//! The core never mutates notifications; it only filters and counts them.
//! Wire fields follow the store's camelCase naming.

use crate::model::id::{deserialize_optional, EntityId};
use serde::{Deserialize, Serialize};

const TYPE_MARKETING_CAMPAIGN: &str = "marketing_campaign";
const TYPE_ANNOUNCEMENT: &str = "announcement";

/// Notification category.
///
/// Only the marketing-facing kinds drive access decisions; every other
/// kind is carried through as its raw wire value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationType {
    MarketingCampaign,
    Announcement,
    Other(String),
}

impl NotificationType {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            TYPE_MARKETING_CAMPAIGN => Self::MarketingCampaign,
            TYPE_ANNOUNCEMENT => Self::Announcement,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::MarketingCampaign => TYPE_MARKETING_CAMPAIGN,
            Self::Announcement => TYPE_ANNOUNCEMENT,
            Self::Other(value) => value.as_str(),
        }
    }

    /// Returns whether marketing staff may see this kind.
    pub fn is_marketing_facing(&self) -> bool {
        matches!(self, Self::MarketingCampaign | Self::Announcement)
    }
}

impl From<String> for NotificationType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<NotificationType> for String {
    fn from(value: NotificationType) -> Self {
        value.as_str().to_string()
    }
}

/// Read state as reported by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    Unread,
    Read,
}

/// One notification entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub tenant_id: Option<EntityId>,
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub store_id: Option<EntityId>,
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub user_id: Option<EntityId>,
    pub status: NotificationStatus,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Notification {
    /// Creates a notification with no tenant, store or user scoping.
    pub fn new(
        id: EntityId,
        kind: NotificationType,
        status: NotificationStatus,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            kind,
            tenant_id: None,
            store_id: None,
            user_id: None,
            status,
            created_at,
        }
    }

    pub fn with_tenant(mut self, tenant: EntityId) -> Self {
        self.tenant_id = Some(tenant);
        self
    }

    pub fn with_store(mut self, store: EntityId) -> Self {
        self.store_id = Some(store);
        self
    }

    pub fn with_user(mut self, user: EntityId) -> Self {
        self.user_id = Some(user);
        self
    }

    pub fn is_unread(&self) -> bool {
        self.status == NotificationStatus::Unread
    }
}
