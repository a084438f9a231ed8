use std::sync::Arc;

use axum::{extract::State, Json};

pub mod response;

use crate::ApiState;

use self::response::GetTagsResponse;

/// List all tags, split into models and categories
#[utoipa::path(
    get,
    path = "/tags",
    responses(
        (status = 200, description = "List all tags successfully", body = GetTagsResponse)
    )
)]
pub async fn get_tags(
    State(state): State<Arc<ApiState>>,
) -> Json<GetTagsResponse> {
    Json(GetTagsResponse::from(state.catalog.list_tags().await))
}
