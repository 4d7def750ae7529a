//! Helpers for driving the real router against a mocked Postgres connection.

use afrovice_db::entities::{presentation, user};
use afrovice_db::AppState;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use sea_orm::sqlx::error::{DatabaseError, ErrorKind};
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub fn mock_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

pub fn app(db: MockDatabase) -> Router {
    crate::routes::router(Arc::new(AppState {
        db: db.into_connection(),
    }))
}

/// A fixed creation stamp so serialized rows compare deterministically.
pub fn stamp() -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(2025, 3, 14, 18, 0, 0)
        .unwrap()
        .fixed_offset()
}

pub fn wall_clock(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 21)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send one request and decode the body as JSON (`Value::Null` when the
/// body is not JSON, e.g. axum's plain-text rejections).
pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub fn user_model() -> user::Model {
    user::Model {
        id: 1,
        created_at: stamp(),
        name: "A".into(),
        email: "a@b.com".into(),
        password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".into(),
        role_id: 1,
        photo: None,
    }
}

pub fn presentation_model() -> presentation::Model {
    presentation::Model {
        id: 1,
        created_at: stamp(),
        event_id: 1,
        date_start: wall_clock(20),
        date_end: Some(wall_clock(23)),
        flyer: "https://cdn.example.com/flyer.jpg".into(),
    }
}

/// A driver error carrying a Postgres SQLSTATE, shaped like what sqlx
/// returns for a failed `INSERT`.
#[derive(Debug)]
struct SqlState(&'static str);

impl fmt::Display for SqlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SQLSTATE {}", self.0)
    }
}

impl StdError for SqlState {}

impl DatabaseError for SqlState {
    fn message(&self) -> &str {
        "constraint violated"
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.0))
    }

    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> ErrorKind {
        match self.0 {
            "23505" => ErrorKind::UniqueViolation,
            "23503" => ErrorKind::ForeignKeyViolation,
            "23502" => ErrorKind::NotNullViolation,
            _ => ErrorKind::Other,
        }
    }
}

/// A query error as the pool reports it for the given SQLSTATE.
pub fn violation(code: &'static str) -> DbErr {
    DbErr::Query(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(
        Box::new(SqlState(code)),
    )))
}
