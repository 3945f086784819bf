//! Report-only endpoints.

use axum::extract::{Path, State};

use super::{error, success, ApiResult};
use crate::models::{Report, ReportMutation};
use crate::view::{RecordId, ViewHandle, ViewInput, ViewSnapshot};

async fn set_resolved(
    view: ViewHandle<Report>,
    id: RecordId,
    resolved: bool,
) -> ApiResult<ViewSnapshot<Report>> {
    let input = ViewInput::Mutate {
        id,
        mutation: ReportMutation::SetResolved(resolved),
    };

    match view.apply(input).await {
        Ok(snapshot) => {
            let revision_id = snapshot.revision;
            success(snapshot, revision_id)
        }
        Err(e) => {
            let revision_id = view.revision().await;
            error(e, revision_id)
        }
    }
}

/// POST /api/reports/{id}/resolve - Mark a report resolved.
pub async fn resolve_report(
    State(view): State<ViewHandle<Report>>,
    Path(id): Path<RecordId>,
) -> ApiResult<ViewSnapshot<Report>> {
    set_resolved(view, id, true).await
}

/// POST /api/reports/{id}/unresolve - Reopen a report.
pub async fn unresolve_report(
    State(view): State<ViewHandle<Report>>,
    Path(id): Path<RecordId>,
) -> ApiResult<ViewSnapshot<Report>> {
    set_resolved(view, id, false).await
}
