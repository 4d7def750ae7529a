use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use afrovice_db::entities::event;
use afrovice_db::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub price: i32,
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: i64,
    pub name: Option<String>,
    pub logo: Option<String>,
    pub price: i32,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl From<event::Model> for EventResponse {
    fn from(e: event::Model) -> Self {
        Self {
            id: e.id,
            name: e.name,
            logo: e.logo,
            price: e.price,
            created_at: e.created_at,
        }
    }
}

/// GET /events
pub async fn list_events(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<EventResponse>>> {
    let events = event::Entity::find()
        .order_by_asc(event::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(events.into_iter().map(EventResponse::from).collect()))
}

/// GET /events/:id
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<EventResponse>> {
    let event_model = event::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Event"))?;

    Ok(Json(EventResponse::from(event_model)))
}

/// POST /events
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateEventRequest>,
) -> ApiResult<(StatusCode, Json<EventResponse>)> {
    let created = event::ActiveModel {
        id: NotSet,
        created_at: Set(super::now()),
        name: Set(body.name),
        logo: Set(body.logo),
        price: Set(body.price),
    }
    .insert(&state.db)
    .await
    .map_err(|e| ApiError::from_write("Event", e))?;

    Ok((StatusCode::CREATED, Json(EventResponse::from(created))))
}
