use axum::{extract::State, http::StatusCode, Json};
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use afrovice_db::entities::ticket;
use afrovice_db::AppState;

/// Duplicate submissions create duplicate tickets.
#[derive(Debug, Deserialize)]
pub struct CreateTicketRequest {
    pub user_id: i64,
    pub presentation_id: i64,
}

#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub id: i64,
    pub user_id: i64,
    pub presentation_id: i64,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl From<ticket::Model> for TicketResponse {
    fn from(t: ticket::Model) -> Self {
        Self {
            id: t.id,
            user_id: t.user_id,
            presentation_id: t.presentation_id,
            created_at: t.created_at,
        }
    }
}

/// GET /tickets
pub async fn list_tickets(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<TicketResponse>>> {
    let tickets = ticket::Entity::find()
        .order_by_asc(ticket::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(tickets.into_iter().map(TicketResponse::from).collect()))
}

/// POST /tickets
pub async fn create_ticket(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateTicketRequest>,
) -> ApiResult<(StatusCode, Json<TicketResponse>)> {
    let created = ticket::ActiveModel {
        id: NotSet,
        created_at: Set(super::now()),
        user_id: Set(body.user_id),
        presentation_id: Set(body.presentation_id),
    }
    .insert(&state.db)
    .await
    .map_err(|e| ApiError::from_write("Ticket", e))?;

    Ok((StatusCode::CREATED, Json(TicketResponse::from(created))))
}
