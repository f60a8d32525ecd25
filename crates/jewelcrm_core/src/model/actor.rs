//! Authenticated actor model.
//!
//! # Responsibility
//! - Describe the user on whose behalf notification visibility is computed.
//! - Decode role strings supplied by the auth collaborator.
//!
//! # Invariants
//! - Role decoding is exact: unknown or differently-cased values map to
//!   `Role::Other` and therefore to the most restrictive policy.

use crate::model::id::{deserialize_optional, EntityId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const ROLE_BUSINESS_ADMIN: &str = "business_admin";
const ROLE_MANAGER: &str = "manager";
const ROLE_INHOUSE_SALES: &str = "inhouse_sales";
const ROLE_TELE_CALLING: &str = "tele_calling";
const ROLE_MARKETING: &str = "marketing";

/// CRM role of an actor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    BusinessAdmin,
    Manager,
    InhouseSales,
    TeleCalling,
    Marketing,
    /// Any role without a dedicated policy; keeps the raw wire value.
    Other(String),
}

impl Role {
    /// Decodes one wire role value.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            ROLE_BUSINESS_ADMIN => Self::BusinessAdmin,
            ROLE_MANAGER => Self::Manager,
            ROLE_INHOUSE_SALES => Self::InhouseSales,
            ROLE_TELE_CALLING => Self::TeleCalling,
            ROLE_MARKETING => Self::Marketing,
            other => Self::Other(other.to_string()),
        }
    }

    /// Stable wire string for this role.
    pub fn as_str(&self) -> &str {
        match self {
            Self::BusinessAdmin => ROLE_BUSINESS_ADMIN,
            Self::Manager => ROLE_MANAGER,
            Self::InhouseSales => ROLE_INHOUSE_SALES,
            Self::TeleCalling => ROLE_TELE_CALLING,
            Self::Marketing => ROLE_MARKETING,
            Self::Other(value) => value.as_str(),
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.as_str().to_string()
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated user as supplied by the auth collaborator.
///
/// Immutable for the duration of one render cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: EntityId,
    /// Diagnostic label only; never used for access decisions.
    #[serde(default)]
    pub username: Option<String>,
    pub role: Role,
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub tenant: Option<EntityId>,
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub store: Option<EntityId>,
}

impl Actor {
    /// Creates an actor without tenant or store affiliation.
    pub fn new(id: EntityId, role: Role) -> Self {
        Self {
            id,
            username: None,
            role,
            tenant: None,
            store: None,
        }
    }

    pub fn with_tenant(mut self, tenant: EntityId) -> Self {
        self.tenant = Some(tenant);
        self
    }

    pub fn with_store(mut self, store: EntityId) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }
}
