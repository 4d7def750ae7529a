use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use crate::password::hash_password;
use afrovice_db::entities::user;
use afrovice_db::AppState;

/// A syntactically valid email address with its domain lowercased. Rejected
/// values fail JSON deserialization, which axum reports as 422.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Email(String);

impl Email {
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Email {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        let valid = raw.len() <= 254
            && !raw.chars().any(char::is_whitespace)
            && match raw.split_once('@') {
                Some((local, domain)) => {
                    !local.is_empty()
                        && !domain.contains('@')
                        && domain.contains('.')
                        && !domain.starts_with('.')
                        && !domain.ends_with('.')
                        && !domain.contains("..")
                }
                None => false,
            };

        match raw.split_once('@') {
            Some((local, domain)) if valid => Ok(Self(format!(
                "{local}@{}",
                domain.to_lowercase()
            ))),
            _ => Err(format!("invalid email address: {raw}")),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: Email,
    pub password: String,
    pub role_id: i64,
    pub photo: Option<String>,
}

/// Read contract for a user. The stored password hash is never exposed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role_id: i64,
    pub photo: Option<String>,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl From<user::Model> for UserResponse {
    fn from(u: user::Model) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            role_id: u.role_id,
            photo: u.photo,
            created_at: u.created_at,
        }
    }
}

/// GET /users
pub async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = user::Entity::find()
        .order_by_asc(user::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/:id
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<UserResponse>> {
    let user_model = user::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(UserResponse::from(user_model)))
}

/// POST /users
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let password_hash =
        hash_password(&body.password).map_err(|e| ApiError::PasswordHash(e.to_string()))?;

    let created = user::ActiveModel {
        id: NotSet,
        created_at: Set(super::now()),
        name: Set(body.name),
        email: Set(body.email.into_inner()),
        password: Set(password_hash),
        role_id: Set(body.role_id),
        photo: Set(body.photo),
    }
    .insert(&state.db)
    .await
    .map_err(|e| ApiError::from_write("User", e))?;

    tracing::debug!(id = created.id, role_id = created.role_id, "user created");
    Ok((StatusCode::CREATED, Json(UserResponse::from(created))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{app, get, mock_db, post_json, send, user_model};
    use serde_json::json;

    #[test]
    fn test_email_accepts_plain_address() {
        let email = Email::try_from("a@b.com".to_string()).unwrap();
        assert_eq!(email.into_inner(), "a@b.com");
    }

    #[test]
    fn test_email_lowercases_domain_only() {
        let email = Email::try_from("Ada.L@Example.COM".to_string()).unwrap();
        assert_eq!(email.into_inner(), "Ada.L@example.com");
    }

    #[test]
    fn test_email_rejects_malformed() {
        for raw in [
            "",
            "ab.com",
            "@b.com",
            "a@",
            "a@b",
            "a@.com",
            "a@b.",
            "a@b..com",
            "a b@c.com",
            "a@b@c.com",
        ] {
            assert!(Email::try_from(raw.to_string()).is_err(), "{raw:?} accepted");
        }
    }

    #[test]
    fn test_email_rejects_overlong() {
        let raw = format!("{}@example.com", "a".repeat(250));
        assert!(Email::try_from(raw).is_err());
    }

    #[test]
    fn test_user_response_hides_password() {
        let resp = UserResponse::from(user_model());
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["role_id"], 1);
        assert!(json["photo"].is_null());
    }

    #[tokio::test]
    async fn test_create_user_returns_201() {
        let app = app(mock_db().append_query_results([vec![user_model()]]));

        let (status, body) = send(
            app,
            post_json(
                "/users",
                json!({ "name": "A", "email": "a@b.com", "password": "x", "role_id": 1 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 1);
        assert_eq!(body["role_id"], 1);
        assert_eq!(body["email"], "a@b.com");
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn test_create_user_invalid_email_is_422() {
        let (status, _) = send(
            app(mock_db()),
            post_json(
                "/users",
                json!({ "name": "A", "email": "not-an-email", "password": "x", "role_id": 1 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_create_user_non_integer_role_is_422() {
        let (status, _) = send(
            app(mock_db()),
            post_json(
                "/users",
                json!({ "name": "A", "email": "a@b.com", "password": "x", "role_id": "one" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_get_user_found() {
        let app = app(mock_db().append_query_results([vec![user_model()]]));

        let (status, body) = send(app, get("/users/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::to_value(UserResponse::from(user_model())).unwrap()
        );
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let app = app(mock_db().append_query_results([Vec::<user::Model>::new()]));

        let (status, body) = send(app, get("/users/999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");
    }

    #[tokio::test]
    async fn test_list_users() {
        let mut second = user_model();
        second.id = 2;
        second.photo = Some("https://cdn.example.com/b.png".into());
        let app = app(mock_db().append_query_results([vec![user_model(), second]]));

        let (status, body) = send(app, get("/users")).await;
        assert_eq!(status, StatusCode::OK);
        let users = body.as_array().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1]["photo"], "https://cdn.example.com/b.png");
    }
}
