//! Notification inbox.
//!
//! Independent of the record views: its own list, its own read flags.

use serde::Serialize;

use crate::models::Notification;

/// Inbox contents as rendered by the top-bar menu.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxView {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Inbox {
    notifications: Vec<Notification>,
    revision: u64,
}

impl Inbox {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self {
            notifications,
            revision: 0,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    /// Mark one notification read. Unknown ids are ignored.
    pub fn mark_read(&mut self, id: u64) -> bool {
        let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        if !notification.is_read {
            notification.is_read = true;
            self.revision += 1;
        }
        true
    }

    pub fn mark_all_read(&mut self) {
        let mut changed = false;
        for notification in self.notifications.iter_mut().filter(|n| !n.is_read) {
            notification.is_read = true;
            changed = true;
        }
        if changed {
            self.revision += 1;
        }
    }

    pub fn view(&self) -> InboxView {
        InboxView {
            notifications: self.notifications.clone(),
            unread_count: self.unread_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fixtures;

    #[test]
    fn test_unread_count() {
        let inbox = Inbox::new(fixtures::notifications());
        assert_eq!(inbox.unread_count(), 3);
    }

    #[test]
    fn test_mark_read() {
        let mut inbox = Inbox::new(fixtures::notifications());

        assert!(inbox.mark_read(1));
        assert_eq!(inbox.unread_count(), 2);
        assert_eq!(inbox.revision(), 1);

        // Already read: nothing changes.
        assert!(inbox.mark_read(1));
        assert_eq!(inbox.revision(), 1);

        assert!(!inbox.mark_read(99));
        assert_eq!(inbox.unread_count(), 2);
    }

    #[test]
    fn test_mark_all_read() {
        let mut inbox = Inbox::new(fixtures::notifications());
        inbox.mark_all_read();
        assert_eq!(inbox.unread_count(), 0);
        assert!(inbox.view().notifications.iter().all(|n| n.is_read));
        assert_eq!(inbox.revision(), 1);

        inbox.mark_all_read();
        assert_eq!(inbox.revision(), 1);
    }

    #[test]
    fn test_view_serialization() {
        let json = serde_json::to_value(Inbox::new(fixtures::notifications()).view()).unwrap();
        assert_eq!(json["unreadCount"], 3);
        assert_eq!(json["notifications"][0]["type"], "warning");
        assert_eq!(json["notifications"][2]["isRead"], true);
    }
}
