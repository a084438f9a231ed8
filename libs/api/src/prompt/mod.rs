use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

pub mod request;
pub mod response;

use crate::response::ApiResponse;
use crate::{ApiError, ApiState};

use self::request::{GetPromptsParam, PostViewRequest};
use self::response::{
    GetPromptResponse, GetPromptsResponse, PostViewResponse, Prompt,
};

/// List prompts matching the gallery filters
#[utoipa::path(
    get,
    path = "/prompts",
    responses(
        (status = 200, description = "List prompts successfully", body = GetPromptsResponse)
    ),
    params(
        GetPromptsParam
    )
)]
pub async fn get_prompts(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<GetPromptsParam>,
) -> Json<GetPromptsResponse> {
    let (filters, page) = params.into_filters();

    let result = state.catalog.fetch_prompts(&filters, page).await;

    let next = result
        .has_more
        .then(|| filters.to_query_string(page.next()));

    Json(GetPromptsResponse::new(result, next))
}

/// Get a prompt
#[utoipa::path(
    get,
    path = "/prompts/:id",
    responses(
        (status = 200, description = "Get a prompt successfully", body = GetPromptResponse)
    ),
    params(
        ("id", description = "prompt id"),
    )
)]
pub async fn get_prompt(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Json<GetPromptResponse> {
    let prompt = state.catalog.get_prompt_by_id(&id).await;

    Json(GetPromptResponse {
        prompt: prompt.map(Prompt::from),
    })
}

/// Record that a session viewed a prompt
#[utoipa::path(
    post,
    path = "/prompts/:id/views",
    request_body = PostViewRequest,
    responses(
        (status = 200, description = "View handled", body = PostViewResponse),
        (status = 400, description = "Session id is missing")
    ),
    params(
        ("id", description = "prompt id"),
    )
)]
pub async fn post_view(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Json(body): Json<PostViewRequest>,
) -> ApiResponse<Json<PostViewResponse>> {
    let session_id = body.session_id.trim();
    if session_id.is_empty() {
        return Err(ApiError::ClientError(
            "sessionId must not be empty".to_string(),
        ));
    }

    let counted = state.catalog.record_view(&id, session_id).await;

    Ok(Json(PostViewResponse { counted }))
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use chrono::NaiveDate;
    use migration::{Migrator, MigratorTrait};
    use repository::active_models::{prelude::Prompt as PromptModel, prompt};
    use repository::{Catalog, Repository};
    use sea_orm::{
        ActiveValue, ConnectOptions, Database, DatabaseConnection, EntityTrait,
    };
    use serde_json::json;

    use super::*;

    async fn state_with_prompts(count: u32) -> Arc<ApiState> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(opt).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        for i in 0..count {
            insert_prompt(&db, i).await;
        }

        Arc::new(ApiState {
            catalog: Catalog::new(Repository::from_connection(db)),
        })
    }

    async fn insert_prompt(db: &DatabaseConnection, i: u32) {
        let created_at = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, i, 0)
            .unwrap();
        let model = prompt::ActiveModel {
            id: ActiveValue::Set(format!("p{i}")),
            title: ActiveValue::Set(format!("Prompt {i}")),
            prompt_text: ActiveValue::Set("a prompt".to_string()),
            thumbnail_url: ActiveValue::Set(None),
            media_url: ActiveValue::Set(None),
            media_type: ActiveValue::Set("image".to_string()),
            source_name: ActiveValue::Set(None),
            source_url: ActiveValue::Set(None),
            view_count: ActiveValue::Set(i64::from(i)),
            is_featured: ActiveValue::Set(false),
            additional_info: ActiveValue::Set(None),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(created_at),
        };

        PromptModel::insert(model)
            .exec_without_returning(db)
            .await
            .unwrap();
    }

    fn most_viewed(page: Option<&str>) -> GetPromptsParam {
        GetPromptsParam {
            sort: Some("most_viewed".to_string()),
            page: page.map(str::to_string),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn next_points_at_the_following_page_while_more_remain() {
        let state = state_with_prompts(13).await;

        let Json(first) =
            get_prompts(State(state.clone()), Query(most_viewed(None))).await;
        let first = serde_json::to_value(first).unwrap();

        assert_eq!(first["prompts"].as_array().unwrap().len(), 12);
        assert_eq!(first["total"], 13);
        assert_eq!(first["hasMore"], true);
        assert_eq!(first["next"], "sort=most_viewed&page=2");

        let Json(last) =
            get_prompts(State(state), Query(most_viewed(Some("2")))).await;
        let last = serde_json::to_value(last).unwrap();

        assert_eq!(last["prompts"].as_array().unwrap().len(), 1);
        assert_eq!(last["prompts"][0]["id"], "p0");
        assert_eq!(last["hasMore"], false);
        assert_eq!(last["next"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn missing_prompt_is_null() {
        let state = state_with_prompts(1).await;

        let Json(response) =
            get_prompt(State(state), Path("nope".to_string())).await;

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({ "prompt": null })
        );
    }

    #[tokio::test]
    async fn blank_session_id_is_a_bad_request() {
        let state = state_with_prompts(1).await;

        for session_id in ["", "   "] {
            let response = post_view(
                State(state.clone()),
                Path("p0".to_string()),
                Json(PostViewRequest {
                    session_id: session_id.to_string(),
                }),
            )
            .await
            .into_response();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }

        let Ok(Json(response)) = post_view(
            State(state),
            Path("p0".to_string()),
            Json(PostViewRequest {
                session_id: "session-a".to_string(),
            }),
        )
        .await
        else {
            panic!("a non-blank session id is accepted");
        };
        assert!(response.counted);
    }
}
