use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use afrovice_db::entities::artist;
use afrovice_db::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateArtistRequest {
    pub name: String,
    pub photo: String,
}

#[derive(Debug, Serialize)]
pub struct ArtistResponse {
    pub id: i64,
    pub name: String,
    pub photo: String,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl From<artist::Model> for ArtistResponse {
    fn from(a: artist::Model) -> Self {
        Self {
            id: a.id,
            name: a.name,
            photo: a.photo,
            created_at: a.created_at,
        }
    }
}

/// GET /artists
pub async fn list_artists(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ArtistResponse>>> {
    let artists = artist::Entity::find()
        .order_by_asc(artist::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(artists.into_iter().map(ArtistResponse::from).collect()))
}

/// GET /artists/:id
pub async fn get_artist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ArtistResponse>> {
    let artist_model = artist::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Artist"))?;

    Ok(Json(ArtistResponse::from(artist_model)))
}

/// POST /artists
pub async fn create_artist(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateArtistRequest>,
) -> ApiResult<(StatusCode, Json<ArtistResponse>)> {
    let created = artist::ActiveModel {
        id: NotSet,
        created_at: Set(super::now()),
        name: Set(body.name),
        photo: Set(body.photo),
    }
    .insert(&state.db)
    .await
    .map_err(|e| ApiError::from_write("Artist", e))?;

    Ok((StatusCode::CREATED, Json(ArtistResponse::from(created))))
}
