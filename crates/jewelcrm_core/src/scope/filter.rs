//! Access scope filter.
//!
//! # Responsibility
//! - Apply the current actor's policy to a candidate notification sequence.
//! - Report each evaluation through a `ScopeObserver`.
//!
//! # Invariants
//! - Output is an order-preserving subset of the input.
//! - No actor means no visible notifications.
//! - Identical input yields identical output; nothing is cached.

use crate::model::actor::Actor;
use crate::model::notification::Notification;
use crate::model::session::AuthSnapshot;
use crate::scope::observer::{LogScopeObserver, ScopeObserver, ScopeReport};
use crate::scope::policy::policy_for;

/// Returns the notifications visible to `actor`, logging the decision.
pub fn scope<'a>(
    actor: Option<&Actor>,
    notifications: &'a [Notification],
) -> Vec<&'a Notification> {
    scope_with_observer(actor, notifications, &LogScopeObserver)
}

/// Returns the notifications visible to `actor`, reporting to `observer`.
pub fn scope_with_observer<'a>(
    actor: Option<&Actor>,
    notifications: &'a [Notification],
    observer: &dyn ScopeObserver,
) -> Vec<&'a Notification> {
    let Some(actor) = actor else {
        observer.on_scope(&ScopeReport {
            role: None,
            policy: "none",
            total: notifications.len(),
            visible: 0,
        });
        return Vec::new();
    };

    let entry = policy_for(&actor.role);
    let visible: Vec<&Notification> = notifications
        .iter()
        .filter(|notification| entry.allows(actor, notification))
        .collect();

    observer.on_scope(&ScopeReport {
        role: Some(&actor.role),
        policy: entry.name,
        total: notifications.len(),
        visible: visible.len(),
    });
    visible
}

/// Scopes against a session snapshot.
///
/// Unauthenticated or non-hydrated sessions see nothing even when an actor
/// is present.
pub fn scope_for_session<'a>(
    auth: &AuthSnapshot,
    notifications: &'a [Notification],
    observer: &dyn ScopeObserver,
) -> Vec<&'a Notification> {
    scope_with_observer(auth.active_actor(), notifications, observer)
}

/// Owned variant of [`scope`] for callers that hand the subset elsewhere.
pub fn scope_owned(actor: Option<&Actor>, notifications: &[Notification]) -> Vec<Notification> {
    scope(actor, notifications).into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::{scope_for_session, scope_with_observer};
    use crate::model::actor::{Actor, Role};
    use crate::model::id::EntityId;
    use crate::model::notification::{Notification, NotificationStatus, NotificationType};
    use crate::model::session::AuthSnapshot;
    use crate::scope::observer::{NoopScopeObserver, ScopeObserver, ScopeReport};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingObserver {
        seen: RefCell<Vec<(bool, &'static str, usize, usize)>>,
    }

    impl ScopeObserver for RecordingObserver {
        fn on_scope(&self, report: &ScopeReport<'_>) {
            self.seen.borrow_mut().push((
                report.role.is_some(),
                report.policy,
                report.total,
                report.visible,
            ));
        }
    }

    fn id(value: &str) -> EntityId {
        EntityId::new(value).expect("valid id")
    }

    fn owned_by(notification_id: &str, user: &str) -> Notification {
        Notification::new(
            id(notification_id),
            NotificationType::parse("task_reminder"),
            NotificationStatus::Unread,
            0,
        )
        .with_user(id(user))
    }

    #[test]
    fn reports_policy_and_counts() {
        let observer = RecordingObserver::default();
        let actor = Actor::new(id("u1"), Role::InhouseSales);
        let notifications = vec![owned_by("n1", "u1"), owned_by("n2", "u2")];

        let visible = scope_with_observer(Some(&actor), &notifications, &observer);

        assert_eq!(visible.len(), 1);
        assert_eq!(observer.seen.into_inner(), vec![(true, "own", 2, 1)]);
    }

    #[test]
    fn no_actor_reports_none_policy() {
        let observer = RecordingObserver::default();
        let notifications = vec![owned_by("n1", "u1")];

        assert!(scope_with_observer(None, &notifications, &observer).is_empty());
        assert_eq!(observer.seen.into_inner(), vec![(false, "none", 1, 0)]);
    }

    #[test]
    fn non_hydrated_session_sees_nothing() {
        let actor = Actor::new(id("u1"), Role::BusinessAdmin);
        let mut auth = AuthSnapshot::signed_in(actor);
        auth.is_hydrated = false;
        let notifications = vec![owned_by("n1", "u1")];

        assert!(scope_for_session(&auth, &notifications, &NoopScopeObserver).is_empty());
    }
}
