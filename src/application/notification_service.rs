// Notification service - The only mutable dashboard state
use crate::domain::notification::Notification;
use crate::errors::DashboardError;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Serialize)]
pub struct NotificationList {
    pub unread_count: usize,
    pub notifications: Arc<Vec<Notification>>,
}

/// Holds the notification list as an immutable snapshot.
///
/// Readers clone the `Arc`; writers build a new list and swap it in, so a
/// snapshot handed out earlier never changes underneath its holder.
#[derive(Clone)]
pub struct NotificationService {
    notifications: Arc<RwLock<Arc<Vec<Notification>>>>,
}

impl NotificationService {
    pub fn new(initial: Vec<Notification>) -> Self {
        Self {
            notifications: Arc::new(RwLock::new(Arc::new(initial))),
        }
    }

    pub async fn list(&self) -> NotificationList {
        let notifications = self.notifications.read().await.clone();
        NotificationList {
            unread_count: unread(&notifications),
            notifications,
        }
    }

    pub async fn unread_count(&self) -> usize {
        unread(&self.notifications.read().await)
    }

    pub async fn mark_read(&self, id: u32) -> Result<Notification, DashboardError> {
        let mut guard = self.notifications.write().await;
        let position = guard
            .iter()
            .position(|n| n.id == id)
            .ok_or(DashboardError::NotificationNotFound(id))?;

        let mut updated = (**guard).clone();
        updated[position].read = true;
        let notification = updated[position].clone();
        *guard = Arc::new(updated);

        tracing::debug!(id, "Notification marked as read");
        Ok(notification)
    }

    /// Returns how many notifications changed state.
    pub async fn mark_all_read(&self) -> usize {
        let mut guard = self.notifications.write().await;
        let changed = unread(&guard);
        if changed > 0 {
            let updated = guard
                .iter()
                .cloned()
                .map(|mut n| {
                    n.read = true;
                    n
                })
                .collect();
            *guard = Arc::new(updated);
        }

        tracing::debug!(changed, "Marked all notifications as read");
        changed
    }

    pub async fn delete(&self, id: u32) -> Result<Notification, DashboardError> {
        let mut guard = self.notifications.write().await;
        let removed = guard
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(DashboardError::NotificationNotFound(id))?;

        let remaining = guard.iter().filter(|n| n.id != id).cloned().collect();
        *guard = Arc::new(remaining);

        tracing::debug!(id, "Notification deleted");
        Ok(removed)
    }
}

fn unread(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::{NotificationKind, Priority};

    fn service() -> NotificationService {
        NotificationService::new(vec![
            Notification::new(1, NotificationKind::Success, "Goal", "Reached", "2 minutes ago", false, Priority::High),
            Notification::new(2, NotificationKind::Info, "Report", "Ready", "1 hour ago", true, Priority::Low),
            Notification::new(3, NotificationKind::Warning, "Load", "High", "8 hours ago", false, Priority::Medium),
        ])
    }

    #[tokio::test]
    async fn test_list_counts_unread() {
        let list = service().list().await;
        assert_eq!(list.notifications.len(), 3);
        assert_eq!(list.unread_count, 2);
    }

    #[tokio::test]
    async fn test_mark_read() {
        let service = service();
        let notification = service.mark_read(1).await.unwrap();
        assert!(notification.read);
        assert_eq!(service.unread_count().await, 1);

        // already read stays read
        service.mark_read(2).await.unwrap();
        assert_eq!(service.unread_count().await, 1);
    }

    #[tokio::test]
    async fn test_mark_read_unknown_id() {
        let err = service().mark_read(42).await.unwrap_err();
        assert!(matches!(err, DashboardError::NotificationNotFound(42)));
    }

    #[tokio::test]
    async fn test_mark_all_read() {
        let service = service();
        assert_eq!(service.mark_all_read().await, 2);
        assert_eq!(service.unread_count().await, 0);
        assert_eq!(service.mark_all_read().await, 0);
    }

    #[tokio::test]
    async fn test_delete() {
        let service = service();
        let removed = service.delete(3).await.unwrap();
        assert_eq!(removed.title, "Load");

        let list = service.list().await;
        assert_eq!(list.notifications.len(), 2);
        assert_eq!(list.unread_count, 1);
        assert!(matches!(
            service.delete(3).await,
            Err(DashboardError::NotificationNotFound(3))
        ));
    }

    #[tokio::test]
    async fn test_snapshots_are_not_mutated_by_writes() {
        let service = service();
        let before = service.list().await;
        service.mark_all_read().await;
        service.delete(1).await.unwrap();

        assert_eq!(before.notifications.len(), 3);
        assert_eq!(before.notifications.iter().filter(|n| !n.read).count(), 2);
    }
}
