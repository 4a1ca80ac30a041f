use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Serialize;
use uuid::Uuid;

use campus_core::identity::CallerIdentity;
use campus_domain::pagination::PageRequest;

use crate::error::PortalServiceError;
use crate::state::AppState;
use crate::usecase::notification::{ListNotificationsUseCase, MarkNotificationReadUseCase};

// ── GET /users/@me/notifications ─────────────────────────────────────────────

#[derive(Serialize)]
pub struct NotificationResponse {
    pub id: String,
    pub message: String,
    pub is_read: bool,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub async fn get_notifications(
    identity: CallerIdentity,
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<NotificationResponse>>, PortalServiceError> {
    let usecase = ListNotificationsUseCase {
        notifications: state.notification_repo(),
    };
    let notifications = usecase.execute(&identity.user_id, page).await?;
    Ok(Json(
        notifications
            .into_iter()
            .map(|n| NotificationResponse {
                id: n.id.to_string(),
                message: n.message,
                is_read: n.is_read,
                created_at: n.created_at,
            })
            .collect(),
    ))
}

// ── PATCH /notifications/{id}/read ───────────────────────────────────────────

pub async fn mark_notification_read(
    identity: CallerIdentity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, PortalServiceError> {
    let usecase = MarkNotificationReadUseCase {
        notifications: state.notification_repo(),
    };
    usecase.execute(id, &identity.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
