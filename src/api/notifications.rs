//! Notification inbox endpoints.

use axum::extract::{Path, State};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::inbox::InboxView;
use crate::AppState;

/// GET /api/notifications - Inbox contents and unread count.
pub async fn list_notifications(State(state): State<AppState>) -> ApiResult<InboxView> {
    let inbox = state.inbox.read().await;
    success(inbox.view(), inbox.revision())
}

/// POST /api/notifications/{id}/read - Mark one notification read.
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<InboxView> {
    let mut inbox = state.inbox.write().await;

    if inbox.mark_read(id) {
        success(inbox.view(), inbox.revision())
    } else {
        error(
            AppError::NotFound(format!("Notification {} not found", id)),
            inbox.revision(),
        )
    }
}

/// POST /api/notifications/read-all - Mark every notification read.
pub async fn mark_all_notifications_read(State(state): State<AppState>) -> ApiResult<InboxView> {
    let mut inbox = state.inbox.write().await;
    inbox.mark_all_read();
    success(inbox.view(), inbox.revision())
}
