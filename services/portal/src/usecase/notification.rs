use uuid::Uuid;

use campus_domain::pagination::PageRequest;

use crate::domain::repository::NotificationRepository;
use crate::domain::types::Notification;
use crate::error::PortalServiceError;

// ── ListNotifications ────────────────────────────────────────────────────────

pub struct ListNotificationsUseCase<N: NotificationRepository> {
    pub notifications: N,
}

impl<N: NotificationRepository> ListNotificationsUseCase<N> {
    pub async fn execute(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Vec<Notification>, PortalServiceError> {
        self.notifications.list_for_user(user_id, page.clamped()).await
    }
}

// ── MarkNotificationRead ─────────────────────────────────────────────────────

pub struct MarkNotificationReadUseCase<N: NotificationRepository> {
    pub notifications: N,
}

impl<N: NotificationRepository> MarkNotificationReadUseCase<N> {
    /// Marking is owner-gated: an id belonging to someone else reads the
    /// same as an unknown id.
    pub async fn execute(&self, id: Uuid, user_id: &str) -> Result<(), PortalServiceError> {
        if self.notifications.mark_read(id, user_id).await? {
            Ok(())
        } else {
            Err(PortalServiceError::NotificationNotFound)
        }
    }
}
