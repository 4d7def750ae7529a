use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use afrovice_db::entities::presentation_artist;
use afrovice_db::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePresentationArtistRequest {
    pub presentation_id: i64,
    pub artist_id: i64,
    #[serde(deserialize_with = "super::wall_clock::deserialize")]
    pub schedule: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct PresentationArtistResponse {
    pub id: i64,
    pub presentation_id: i64,
    pub artist_id: i64,
    pub schedule: NaiveDateTime,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl From<presentation_artist::Model> for PresentationArtistResponse {
    fn from(m: presentation_artist::Model) -> Self {
        Self {
            id: m.id,
            presentation_id: m.presentation_id,
            artist_id: m.artist_id,
            schedule: m.schedule,
            created_at: m.created_at,
        }
    }
}

/// GET /presentation-artists
pub async fn list_presentation_artists(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<PresentationArtistResponse>>> {
    let slots = presentation_artist::Entity::find()
        .order_by_asc(presentation_artist::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(
        slots
            .into_iter()
            .map(PresentationArtistResponse::from)
            .collect(),
    ))
}

/// POST /presentation-artists
pub async fn create_presentation_artist(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreatePresentationArtistRequest>,
) -> ApiResult<(StatusCode, Json<PresentationArtistResponse>)> {
    let created = presentation_artist::ActiveModel {
        id: NotSet,
        created_at: Set(super::now()),
        presentation_id: Set(body.presentation_id),
        artist_id: Set(body.artist_id),
        schedule: Set(body.schedule),
    }
    .insert(&state.db)
    .await
    .map_err(|e| ApiError::from_write("Presentation artist", e))?;

    Ok((
        StatusCode::CREATED,
        Json(PresentationArtistResponse::from(created)),
    ))
}
