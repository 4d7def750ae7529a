use axum::Json;

pub const GREETING: &str = "Hello world from the AfroVice API";

/// GET /ping
pub async fn ping() -> Json<&'static str> {
    Json("pong")
}

/// GET /
pub async fn hello() -> Json<&'static str> {
    Json(GREETING)
}
