use axum::http::{header, HeaderValue};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod api;
mod config;
mod cors;
mod error;
mod password;
mod routes;
#[cfg(test)]
mod test_support;

use afrovice_db::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let server_config = config::ServerConfig::from_env();

    // Database connection
    let db_config = afrovice_db::DatabaseConfig::from_env();
    tracing::info!(host = %db_config.host, dbname = %db_config.dbname, "connecting to database...");
    let db = afrovice_db::connect(&db_config)
        .await
        .expect("failed to connect to database");

    // Run migrations
    tracing::info!("running database migrations...");
    afrovice_migration::Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");
    tracing::info!("migrations complete");

    let state = Arc::new(AppState { db });

    let cors = cors::OriginPolicy::from_origins(server_config.cors_origins)
        .expect("invalid CORS origin pattern")
        .into_layer();

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ));

    let addr = server_config.bind_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    tracing::info!(%addr, "server started");

    axum::serve(listener, app).await.expect("server error");
}
