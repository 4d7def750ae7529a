use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use afrovice_db::entities::presentation;
use afrovice_db::AppState;

/// No ordering check between `date_start` and `date_end`.
#[derive(Debug, Deserialize)]
pub struct CreatePresentationRequest {
    pub event_id: i64,
    #[serde(deserialize_with = "super::wall_clock::deserialize")]
    pub date_start: NaiveDateTime,
    #[serde(default, deserialize_with = "super::wall_clock::deserialize_option")]
    pub date_end: Option<NaiveDateTime>,
    pub flyer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentationResponse {
    pub id: i64,
    pub event_id: i64,
    pub date_start: NaiveDateTime,
    pub date_end: Option<NaiveDateTime>,
    pub flyer: String,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl From<presentation::Model> for PresentationResponse {
    fn from(p: presentation::Model) -> Self {
        Self {
            id: p.id,
            event_id: p.event_id,
            date_start: p.date_start,
            date_end: p.date_end,
            flyer: p.flyer,
            created_at: p.created_at,
        }
    }
}

/// GET /presentations
pub async fn list_presentations(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<PresentationResponse>>> {
    let presentations = presentation::Entity::find()
        .order_by_asc(presentation::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(
        presentations
            .into_iter()
            .map(PresentationResponse::from)
            .collect(),
    ))
}

/// GET /presentations/:id
pub async fn get_presentation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<PresentationResponse>> {
    let presentation_model = presentation::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Presentation"))?;

    Ok(Json(PresentationResponse::from(presentation_model)))
}

/// POST /presentations
pub async fn create_presentation(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreatePresentationRequest>,
) -> ApiResult<(StatusCode, Json<PresentationResponse>)> {
    let created = presentation::ActiveModel {
        id: NotSet,
        created_at: Set(super::now()),
        event_id: Set(body.event_id),
        date_start: Set(body.date_start),
        date_end: Set(body.date_end),
        flyer: Set(body.flyer),
    }
    .insert(&state.db)
    .await
    .map_err(|e| ApiError::from_write("Presentation", e))?;

    Ok((StatusCode::CREATED, Json(PresentationResponse::from(created))))
}
