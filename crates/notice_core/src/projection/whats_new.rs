//! "What's new" walkthrough over version notifications.

use crate::model::notification::{Notification, NotificationKind};
use crate::projection::list_order::sort_for_list;

/// Returns version notifications in list display order.
pub fn version_notifications(items: &[Notification]) -> Vec<Notification> {
    let versions: Vec<Notification> = items
        .iter()
        .filter(|item| item.kind == NotificationKind::Version)
        .cloned()
        .collect();
    sort_for_list(&versions)
}

/// Bounded cursor over a fixed list of version notifications.
///
/// Navigation never moves past either end; at a boundary `next`/`previous`
/// return `false` and leave the position unchanged.
#[derive(Debug, Clone)]
pub struct WhatsNewCursor {
    items: Vec<Notification>,
    index: usize,
}

impl WhatsNewCursor {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items, index: 0 }
    }

    /// Current entry, or `None` when there are no version notifications.
    pub fn current(&self) -> Option<&Notification> {
        self.items.get(self.index)
    }

    pub fn next(&mut self) -> bool {
        if self.index + 1 < self.items.len() {
            self.index += 1;
            return true;
        }
        false
    }

    pub fn previous(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            return true;
        }
        false
    }

    /// One-based position and total, e.g. `(2, 3)`.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current().map(|_| (self.index + 1, self.items.len()))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{version_notifications, WhatsNewCursor};
    use crate::seed::seed_notifications;

    #[test]
    fn seed_has_one_version_notification() {
        let versions = version_notifications(&seed_notifications().unwrap());
        assert_eq!(versions.len(), 1);
        assert_eq!(versions[0].id.as_str(), "3");
    }

    #[test]
    fn cursor_is_bounded_at_both_ends() {
        let seed = seed_notifications().unwrap();
        let mut cursor = WhatsNewCursor::new(seed[..2].to_vec());

        assert!(!cursor.previous());
        assert_eq!(cursor.position(), Some((1, 2)));
        assert!(cursor.next());
        assert!(!cursor.next());
        assert_eq!(cursor.position(), Some((2, 2)));
        assert!(cursor.previous());
        assert_eq!(cursor.current().unwrap().id, seed[0].id);
    }

    #[test]
    fn empty_cursor_has_no_current() {
        let mut cursor = WhatsNewCursor::new(Vec::new());
        assert!(cursor.is_empty());
        assert!(cursor.current().is_none());
        assert!(!cursor.next());
        assert_eq!(cursor.position(), None);
    }
}
