use axum::{extract::State, http::StatusCode, Json};
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use afrovice_db::entities::music_gender;
use afrovice_db::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateGenderRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct GenderResponse {
    pub id: i64,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl From<music_gender::Model> for GenderResponse {
    fn from(g: music_gender::Model) -> Self {
        Self {
            id: g.id,
            name: g.name,
            created_at: g.created_at,
        }
    }
}

/// GET /genders
pub async fn list_genders(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<GenderResponse>>> {
    let genders = music_gender::Entity::find()
        .order_by_asc(music_gender::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(genders.into_iter().map(GenderResponse::from).collect()))
}

/// POST /genders
pub async fn create_gender(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateGenderRequest>,
) -> ApiResult<(StatusCode, Json<GenderResponse>)> {
    let created = music_gender::ActiveModel {
        id: NotSet,
        created_at: Set(super::now()),
        name: Set(body.name),
    }
    .insert(&state.db)
    .await
    .map_err(|e| ApiError::from_write("Music gender", e))?;

    Ok((StatusCode::CREATED, Json(GenderResponse::from(created))))
}
