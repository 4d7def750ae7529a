use axum::{extract::State, http::StatusCode, Json};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use super::presentations::PresentationResponse;
use super::users::UserResponse;
use crate::error::{ApiError, ApiResult};
use afrovice_db::entities::{comment, presentation, user};
use afrovice_db::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub message: String,
    pub presentation_id: Option<i64>,
    pub user_id: Option<i64>,
}

/// Read contract for a comment, with its author and presentation embedded
/// one level deep when the comment has them.
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub message: String,
    pub presentation_id: Option<i64>,
    pub user_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
    pub user: Option<UserResponse>,
    pub presentation: Option<PresentationResponse>,
}

impl CommentResponse {
    pub fn from_parts(
        c: comment::Model,
        user: Option<user::Model>,
        presentation: Option<presentation::Model>,
    ) -> Self {
        Self {
            id: c.id,
            message: c.message,
            presentation_id: c.presentation_id,
            user_id: c.user_id,
            created_at: c.created_at,
            user: user.map(UserResponse::from),
            presentation: presentation.map(PresentationResponse::from),
        }
    }
}

/// Distinct non-null ids in first-seen order.
fn distinct_ids(ids: impl Iterator<Item = Option<i64>>) -> Vec<i64> {
    let mut seen = BTreeSet::new();
    ids.flatten().filter(|id| seen.insert(*id)).collect()
}

async fn users_by_id(
    db: &DatabaseConnection,
    ids: Vec<i64>,
) -> Result<HashMap<i64, user::Model>, DbErr> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let users = user::Entity::find()
        .filter(user::Column::Id.is_in(ids))
        .all(db)
        .await?;
    Ok(users.into_iter().map(|u| (u.id, u)).collect())
}

async fn presentations_by_id(
    db: &DatabaseConnection,
    ids: Vec<i64>,
) -> Result<HashMap<i64, presentation::Model>, DbErr> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let presentations = presentation::Entity::find()
        .filter(presentation::Column::Id.is_in(ids))
        .all(db)
        .await?;
    Ok(presentations.into_iter().map(|p| (p.id, p)).collect())
}

/// GET /comments
///
/// Associations are loaded with one batched query each rather than one
/// lookup per comment.
pub async fn list_comments(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let comments = comment::Entity::find()
        .order_by_asc(comment::Column::Id)
        .all(&state.db)
        .await?;

    let users = users_by_id(&state.db, distinct_ids(comments.iter().map(|c| c.user_id))).await?;
    let presentations = presentations_by_id(
        &state.db,
        distinct_ids(comments.iter().map(|c| c.presentation_id)),
    )
    .await?;

    let data = comments
        .into_iter()
        .map(|c| {
            let user = c.user_id.and_then(|id| users.get(&id).cloned());
            let presentation = c
                .presentation_id
                .and_then(|id| presentations.get(&id).cloned());
            CommentResponse::from_parts(c, user, presentation)
        })
        .collect();

    Ok(Json(data))
}

/// POST /comments
pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateCommentRequest>,
) -> ApiResult<(StatusCode, Json<CommentResponse>)> {
    let created = comment::ActiveModel {
        id: NotSet,
        created_at: Set(super::now()),
        message: Set(body.message),
        presentation_id: Set(body.presentation_id),
        user_id: Set(body.user_id),
    }
    .insert(&state.db)
    .await
    .map_err(|e| ApiError::from_write("Comment", e))?;

    let user = match created.user_id {
        Some(id) => user::Entity::find_by_id(id).one(&state.db).await?,
        None => None,
    };
    let presentation = match created.presentation_id {
        Some(id) => presentation::Entity::find_by_id(id).one(&state.db).await?,
        None => None,
    };

    Ok((
        StatusCode::CREATED,
        Json(CommentResponse::from_parts(created, user, presentation)),
    ))
}
