use afrovice_db::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api;

/// Every endpoint, without the HTTP middleware stack added in `main`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::health::hello))
        .route("/ping", get(api::health::ping))
        .route(
            "/roles",
            get(api::roles::list_roles).post(api::roles::create_role),
        )
        .route(
            "/users",
            get(api::users::list_users).post(api::users::create_user),
        )
        .route("/users/{id}", get(api::users::get_user))
        .route(
            "/genders",
            get(api::genders::list_genders).post(api::genders::create_gender),
        )
        .route(
            "/artists",
            get(api::artists::list_artists).post(api::artists::create_artist),
        )
        .route("/artists/{id}", get(api::artists::get_artist))
        .route(
            "/artist-genders",
            get(api::artist_genders::list_artist_genders)
                .post(api::artist_genders::create_artist_gender),
        )
        .route(
            "/events",
            get(api::events::list_events).post(api::events::create_event),
        )
        .route("/events/{id}", get(api::events::get_event))
        .route(
            "/presentations",
            get(api::presentations::list_presentations)
                .post(api::presentations::create_presentation),
        )
        .route(
            "/presentations/{id}",
            get(api::presentations::get_presentation),
        )
        .route(
            "/presentation-artists",
            get(api::presentation_artists::list_presentation_artists)
                .post(api::presentation_artists::create_presentation_artist),
        )
        .route(
            "/tickets",
            get(api::tickets::list_tickets).post(api::tickets::create_ticket),
        )
        .route(
            "/comments",
            get(api::comments::list_comments).post(api::comments::create_comment),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use crate::api::health::GREETING;
    use crate::test_support::{app, get, mock_db, post_json, send, stamp, user_model};
    use afrovice_db::entities::{role, user};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_ping() {
        let (status, body) = send(app(mock_db()), get("/ping")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("pong"));
    }

    #[tokio::test]
    async fn test_root_greeting() {
        let (status, body) = send(app(mock_db()), get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(GREETING));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, _) = send(app(mock_db()), get("/venues")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_no_delete_routes() {
        let req = Request::builder()
            .method(Method::DELETE)
            .uri("/users/1")
            .body(axum::body::Body::empty())
            .unwrap();
        let (status, _) = send(app(mock_db()), req).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/roles")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{\"name\":"))
            .unwrap();
        let (status, _) = send(app(mock_db()), req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_415() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/roles")
            .body(axum::body::Body::from(r#"{"name":"Admin"}"#))
            .unwrap();
        let (status, _) = send(app(mock_db()), req).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    /// Role then user creation, lookup of the user, and a miss.
    #[tokio::test]
    async fn test_role_and_user_scenario() {
        let admin = role::Model {
            id: 1,
            created_at: stamp(),
            name: "Admin".into(),
        };
        let db = mock_db()
            .append_query_results([vec![admin]])
            .append_query_results([vec![user_model()]])
            .append_query_results([vec![user_model()]])
            .append_query_results([Vec::<user::Model>::new()]);
        let app = app(db);

        let (status, role) = send(app.clone(), post_json("/roles", json!({ "name": "Admin" }))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(role["id"], 1);
        assert_eq!(role["name"], "Admin");

        let (status, created) = send(
            app.clone(),
            post_json(
                "/users",
                json!({ "name": "A", "email": "a@b.com", "password": "x", "role_id": 1 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["role_id"], 1);

        let (status, fetched) = send(app.clone(), get("/users/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, _) = send(app, get("/users/999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
