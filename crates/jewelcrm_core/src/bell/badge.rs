//! Unread counter and badge text.

use crate::model::notification::Notification;

/// Largest count rendered literally on the badge.
pub const BADGE_MAX_LITERAL: usize = 99;
/// Badge text used above `BADGE_MAX_LITERAL`.
pub const BADGE_OVERFLOW_TEXT: &str = "99+";

/// Counts unread entries in an already-scoped subset.
pub fn unread<'a, I>(scoped: I) -> usize
where
    I: IntoIterator<Item = &'a Notification>,
{
    scoped
        .into_iter()
        .filter(|notification| notification.is_unread())
        .count()
}

/// Formats an unread count for the badge.
///
/// Returns `None` when there is nothing to show.
pub fn format_badge(count: usize) -> Option<String> {
    match count {
        0 => None,
        1..=BADGE_MAX_LITERAL => Some(count.to_string()),
        _ => Some(BADGE_OVERFLOW_TEXT.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_badge, unread};
    use crate::model::id::EntityId;
    use crate::model::notification::{Notification, NotificationStatus, NotificationType};

    fn with_status(index: u64, status: NotificationStatus) -> Notification {
        Notification::new(
            EntityId::from(index),
            NotificationType::parse("task_reminder"),
            status,
            0,
        )
    }

    #[test]
    fn badge_text_thresholds() {
        assert_eq!(format_badge(0), None);
        assert_eq!(format_badge(1).as_deref(), Some("1"));
        assert_eq!(format_badge(57).as_deref(), Some("57"));
        assert_eq!(format_badge(99).as_deref(), Some("99"));
        assert_eq!(format_badge(100).as_deref(), Some("99+"));
        assert_eq!(format_badge(250).as_deref(), Some("99+"));
    }

    #[test]
    fn counts_only_unread_entries() {
        let notifications = vec![
            with_status(1, NotificationStatus::Unread),
            with_status(2, NotificationStatus::Read),
            with_status(3, NotificationStatus::Unread),
        ];
        assert_eq!(unread(&notifications), 2);
        let first = EntityId::from(1_u64);
        assert_eq!(unread(notifications.iter().filter(|n| n.id != first)), 1);
        assert_eq!(unread(&[]), 0);
    }
}
