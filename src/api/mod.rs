//! REST API module.
//!
//! JSON surface consumed by the console's rendering layer.

mod notifications;
mod reports;
mod views;

pub use notifications::*;
pub use reports::*;
pub use views::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::{AppError, AppErrorWithRevision};

/// Success envelope: `{ success, data, revisionId }`.
///
/// `revision_id` is the revision of the view the data was read from; inbox
/// responses carry the inbox revision.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub revision_id: u64,
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Handler result: a data envelope or an error envelope, both stamped with a revision.
pub type ApiResult<T> = Result<ApiResponse<T>, AppErrorWithRevision>;

/// Wrap `data` read at `revision_id`.
pub fn success<T: Serialize>(data: T, revision_id: u64) -> ApiResult<T> {
    Ok(ApiResponse {
        success: true,
        data,
        revision_id,
    })
}

/// Reject with `error`; `revision_id` is the view revision left in place.
pub fn error<T: Serialize>(error: AppError, revision_id: u64) -> ApiResult<T> {
    Err(AppErrorWithRevision { error, revision_id })
}
