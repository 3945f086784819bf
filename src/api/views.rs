//! View endpoints shared by every record type.
//!
//! Handlers are generic over the record type; the router instantiates them once
//! for reports and once for open spaces.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Deserialize;

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::view::{Category, Record, RecordId, ViewHandle, ViewInput, ViewSnapshot};

/// Request body for changing the view query. Absent fields are left as they are.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateViewRequest<C> {
    #[serde(default)]
    pub category: Option<C>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page_size: Option<usize>,
    #[serde(default)]
    pub page: Option<usize>,
}

impl<C: Category> UpdateViewRequest<C> {
    /// Inputs in application order: category, search, page size, page.
    ///
    /// An explicit page is applied last so it survives the resets caused by the others.
    pub fn into_inputs<R: Record<Category = C>>(self) -> Vec<ViewInput<R>> {
        let mut inputs = Vec::new();
        if let Some(category) = self.category {
            inputs.push(ViewInput::Category(category));
        }
        if let Some(search) = self.search {
            inputs.push(ViewInput::Search(search));
        }
        if let Some(page_size) = self.page_size {
            inputs.push(ViewInput::PageSize(page_size));
        }
        if let Some(page) = self.page {
            inputs.push(ViewInput::Page(page));
        }
        inputs
    }
}

/// GET /api/{view} - Current snapshot.
pub async fn get_view<R: Record>(State(view): State<ViewHandle<R>>) -> ApiResult<ViewSnapshot<R>> {
    let snapshot = view.snapshot().await;
    let revision_id = snapshot.revision;
    success(snapshot, revision_id)
}

/// GET /api/{view}/{id} - A single record for the detail dialog.
pub async fn get_record<R: Record>(
    State(view): State<ViewHandle<R>>,
    Path(id): Path<RecordId>,
) -> ApiResult<R> {
    let (record, revision_id) = view.get(id).await;

    match record {
        Some(record) => success(record, revision_id),
        None => error(
            AppError::NotFound(format!("{} {} not found", R::KIND, id)),
            revision_id,
        ),
    }
}

/// PUT /api/{view}/view - Change category, search text or pagination.
pub async fn update_view<R: Record>(
    State(view): State<ViewHandle<R>>,
    payload: Result<Json<UpdateViewRequest<R::Category>>, JsonRejection>,
) -> ApiResult<ViewSnapshot<R>> {
    let revision_id = view.revision().await;

    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => {
            return error(AppError::BadRequest(rejection.body_text()), revision_id);
        }
    };

    match view.apply_all(request.into_inputs()).await {
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

/// POST /api/{view}/reload - Reload the collection in the background.
pub async fn reload_view<R: Record>(
    State(view): State<ViewHandle<R>>,
) -> ApiResult<ViewSnapshot<R>> {
    let snapshot = view.spawn_reload().await;
    let revision_id = snapshot.revision;
    success(snapshot, revision_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Report, ReportCategory};

    #[test]
    fn test_request_input_order() {
        let request: UpdateViewRequest<ReportCategory> =
            serde_json::from_value(serde_json::json!({
                "page": 2,
                "search": "park",
                "category": "pending",
                "pageSize": 5
            }))
            .unwrap();

        let inputs: Vec<ViewInput<Report>> = request.into_inputs();
        assert!(matches!(inputs[0], ViewInput::Category(ReportCategory::Pending)));
        assert!(matches!(&inputs[1], ViewInput::Search(s) if s.as_str() == "park"));
        assert!(matches!(inputs[2], ViewInput::PageSize(5)));
        assert!(matches!(inputs[3], ViewInput::Page(2)));
    }

    #[test]
    fn test_empty_request() {
        let request: UpdateViewRequest<ReportCategory> =
            serde_json::from_value(serde_json::json!({})).unwrap();
        let inputs: Vec<ViewInput<Report>> = request.into_inputs();
        assert!(inputs.is_empty());
    }
}
