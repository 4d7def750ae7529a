use axum::{extract::State, http::StatusCode, Json};
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use afrovice_db::entities::artist_gender;
use afrovice_db::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateArtistGenderRequest {
    pub artist_id: i64,
    pub music_gender_id: i64,
}

#[derive(Debug, Serialize)]
pub struct ArtistGenderResponse {
    pub id: i64,
    pub artist_id: i64,
    pub music_gender_id: i64,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl From<artist_gender::Model> for ArtistGenderResponse {
    fn from(m: artist_gender::Model) -> Self {
        Self {
            id: m.id,
            artist_id: m.artist_id,
            music_gender_id: m.music_gender_id,
            created_at: m.created_at,
        }
    }
}

/// GET /artist-genders
pub async fn list_artist_genders(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ArtistGenderResponse>>> {
    let links = artist_gender::Entity::find()
        .order_by_asc(artist_gender::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(links.into_iter().map(ArtistGenderResponse::from).collect()))
}

/// POST /artist-genders
pub async fn create_artist_gender(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateArtistGenderRequest>,
) -> ApiResult<(StatusCode, Json<ArtistGenderResponse>)> {
    let created = artist_gender::ActiveModel {
        id: NotSet,
        created_at: Set(super::now()),
        artist_id: Set(body.artist_id),
        music_gender_id: Set(body.music_gender_id),
    }
    .insert(&state.db)
    .await
    .map_err(|e| ApiError::from_write("Artist gender", e))?;

    Ok((StatusCode::CREATED, Json(ArtistGenderResponse::from(created))))
}
