use axum::{extract::State, http::StatusCode, Json};
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use afrovice_db::entities::role;
use afrovice_db::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateRoleRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub id: i64,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl From<role::Model> for RoleResponse {
    fn from(r: role::Model) -> Self {
        Self {
            id: r.id,
            name: r.name,
            created_at: r.created_at,
        }
    }
}

/// GET /roles
pub async fn list_roles(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<RoleResponse>>> {
    let roles = role::Entity::find()
        .order_by_asc(role::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(roles.into_iter().map(RoleResponse::from).collect()))
}

/// POST /roles
pub async fn create_role(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateRoleRequest>,
) -> ApiResult<(StatusCode, Json<RoleResponse>)> {
    let created = role::ActiveModel {
        id: NotSet,
        created_at: Set(super::now()),
        name: Set(body.name),
    }
    .insert(&state.db)
    .await
    .map_err(|e| ApiError::from_write("Role", e))?;

    tracing::debug!(id = created.id, "role created");
    Ok((StatusCode::CREATED, Json(RoleResponse::from(created))))
}
