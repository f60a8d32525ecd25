//! Role-keyed scope policy table.
//!
//! # Responsibility
//! - Map every actor role to exactly one visibility predicate.
//! - Keep each predicate pure so it can be tested as a table entry.
//!
//! # Invariants
//! - Lookup never fails: roles without an entry resolve to the fallback
//!   (own notifications only).
//! - Identifier comparisons fail closed: an absent value on either side
//!   never matches.

use crate::model::actor::{Actor, Role};
use crate::model::id::EntityId;
use crate::model::notification::Notification;

/// Visibility predicate for one role.
pub type ScopePolicy = fn(&Actor, &Notification) -> bool;

/// Table key for roles with a dedicated policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleKey {
    BusinessAdmin,
    Manager,
    InhouseSales,
    TeleCalling,
    Marketing,
}

impl RoleKey {
    /// Returns the table key for `role`, or `None` for fallback roles.
    pub fn of(role: &Role) -> Option<Self> {
        match role {
            Role::BusinessAdmin => Some(Self::BusinessAdmin),
            Role::Manager => Some(Self::Manager),
            Role::InhouseSales => Some(Self::InhouseSales),
            Role::TeleCalling => Some(Self::TeleCalling),
            Role::Marketing => Some(Self::Marketing),
            Role::Other(_) => None,
        }
    }
}

/// One named row of the policy table.
#[derive(Debug, Clone, Copy)]
pub struct PolicyEntry {
    /// Stable policy name used in diagnostics.
    pub name: &'static str,
    pub policy: ScopePolicy,
}

impl PolicyEntry {
    pub fn allows(&self, actor: &Actor, notification: &Notification) -> bool {
        (self.policy)(actor, notification)
    }
}

const POLICY_TABLE: &[(RoleKey, PolicyEntry)] = &[
    (
        RoleKey::BusinessAdmin,
        PolicyEntry {
            name: "all",
            policy: allow_all,
        },
    ),
    (
        RoleKey::Manager,
        PolicyEntry {
            name: "tenant_store",
            policy: tenant_and_store,
        },
    ),
    (
        RoleKey::InhouseSales,
        PolicyEntry {
            name: "own",
            policy: own_only,
        },
    ),
    (
        RoleKey::TeleCalling,
        PolicyEntry {
            name: "own_or_tenant",
            policy: own_or_tenant,
        },
    ),
    (
        RoleKey::Marketing,
        PolicyEntry {
            name: "marketing_facing",
            policy: marketing_facing,
        },
    ),
];

static FALLBACK_POLICY: PolicyEntry = PolicyEntry {
    name: "fallback_own",
    policy: own_only,
};

/// Returns the keyed rows of the policy table.
pub fn policy_table() -> &'static [(RoleKey, PolicyEntry)] {
    POLICY_TABLE
}

/// Returns the policy applied to roles without a dedicated entry.
pub fn fallback_policy() -> &'static PolicyEntry {
    &FALLBACK_POLICY
}

/// Resolves the policy for `role`.
pub fn policy_for(role: &Role) -> &'static PolicyEntry {
    let Some(key) = RoleKey::of(role) else {
        return &FALLBACK_POLICY;
    };
    POLICY_TABLE
        .iter()
        .find(|(entry_key, _)| *entry_key == key)
        .map(|(_, entry)| entry)
        .unwrap_or(&FALLBACK_POLICY)
}

fn same_id(left: Option<&EntityId>, right: Option<&EntityId>) -> bool {
    matches!((left, right), (Some(left), Some(right)) if left == right)
}

fn allow_all(_actor: &Actor, _notification: &Notification) -> bool {
    true
}

fn tenant_and_store(actor: &Actor, notification: &Notification) -> bool {
    if !same_id(notification.tenant_id.as_ref(), actor.tenant.as_ref()) {
        return false;
    }
    match notification.store_id.as_ref() {
        // Tenant-wide notification.
        None => true,
        Some(store) => same_id(Some(store), actor.store.as_ref()),
    }
}

fn own_only(actor: &Actor, notification: &Notification) -> bool {
    same_id(notification.user_id.as_ref(), Some(&actor.id))
}

fn own_or_tenant(actor: &Actor, notification: &Notification) -> bool {
    own_only(actor, notification)
        || same_id(notification.tenant_id.as_ref(), actor.tenant.as_ref())
}

fn marketing_facing(_actor: &Actor, notification: &Notification) -> bool {
    notification.kind.is_marketing_facing()
}

#[cfg(test)]
mod tests {
    use super::{fallback_policy, policy_for, policy_table, RoleKey};
    use crate::model::actor::{Actor, Role};
    use crate::model::id::EntityId;
    use crate::model::notification::{Notification, NotificationStatus, NotificationType};

    fn id(value: &str) -> EntityId {
        EntityId::new(value).expect("valid id")
    }

    fn note(kind: &str) -> Notification {
        Notification::new(
            id("n1"),
            NotificationType::parse(kind),
            NotificationStatus::Unread,
            1_700_000_000_000,
        )
    }

    #[test]
    fn table_covers_every_dedicated_role_once() {
        let keys: Vec<RoleKey> = policy_table().iter().map(|(key, _)| *key).collect();
        for key in [
            RoleKey::BusinessAdmin,
            RoleKey::Manager,
            RoleKey::InhouseSales,
            RoleKey::TeleCalling,
            RoleKey::Marketing,
        ] {
            assert_eq!(keys.iter().filter(|entry| **entry == key).count(), 1);
        }
    }

    #[test]
    fn unknown_roles_resolve_to_fallback() {
        let entry = policy_for(&Role::Other("auditor".to_string()));
        assert_eq!(entry.name, fallback_policy().name);
    }

    #[test]
    fn manager_requires_actor_tenant() {
        let actor = Actor::new(id("u1"), Role::Manager);
        let notification = note("deal_update");
        assert!(!policy_for(&actor.role).allows(&actor, &notification));
    }

    #[test]
    fn manager_with_store_notification_requires_actor_store() {
        let actor = Actor::new(id("u1"), Role::Manager).with_tenant(id("t1"));
        let notification = note("deal_update")
            .with_tenant(id("t1"))
            .with_store(id("s1"));
        assert!(!policy_for(&actor.role).allows(&actor, &notification));

        let tenant_wide = note("deal_update").with_tenant(id("t1"));
        assert!(policy_for(&actor.role).allows(&actor, &tenant_wide));
    }

    #[test]
    fn tele_calling_matches_user_or_tenant() {
        let actor = Actor::new(id("u1"), Role::TeleCalling).with_tenant(id("t1"));
        let policy = policy_for(&actor.role);

        assert!(policy.allows(&actor, &note("call_back").with_user(id("u1"))));
        assert!(policy.allows(&actor, &note("call_back").with_tenant(id("t1"))));
        assert!(!policy.allows(
            &actor,
            &note("call_back").with_user(id("u2")).with_tenant(id("t2"))
        ));
        assert!(!policy.allows(&actor, &note("call_back")));
    }

    #[test]
    fn tele_calling_without_tenant_does_not_match_unscoped_notifications() {
        let actor = Actor::new(id("u1"), Role::TeleCalling);
        assert!(!policy_for(&actor.role).allows(&actor, &note("call_back")));
    }

    #[test]
    fn marketing_sees_only_marketing_facing_kinds() {
        let actor = Actor::new(id("u1"), Role::Marketing);
        let policy = policy_for(&actor.role);
        assert!(policy.allows(&actor, &note("marketing_campaign")));
        assert!(policy.allows(&actor, &note("announcement")));
        assert!(!policy.allows(&actor, &note("deal_update").with_user(id("u1"))));
    }

    #[test]
    fn fallback_matches_own_user_only() {
        let actor = Actor::new(id("7"), Role::Other("auditor".to_string()));
        let policy = policy_for(&actor.role);
        assert!(policy.allows(&actor, &note("task").with_user(EntityId::from(7_u64))));
        assert!(!policy.allows(&actor, &note("task").with_user(id("8"))));
        assert!(!policy.allows(&actor, &note("task")));
    }
}
