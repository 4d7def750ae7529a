use axum::http::{request::Parts, HeaderValue, Method};
use regex::Regex;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Frontends allowed by default.
pub const DEFAULT_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "https://afrovice.maaango.com",
    "https://afrovice-api.maaango.com",
];

/// Preview deployments on the hosting provider.
pub const PREVIEW_ORIGIN_PATTERN: &str = r"^https://.*\.vercel\.app$";

/// Origin allow-list: exact matches plus one wildcard-subdomain pattern.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    exact: Vec<String>,
    pattern: Regex,
}

impl OriginPolicy {
    pub fn new(exact: Vec<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            exact,
            pattern: Regex::new(PREVIEW_ORIGIN_PATTERN)?,
        })
    }

    /// Build from `CORS_ORIGINS` when set, else the built-in list.
    pub fn from_origins(configured: Option<Vec<String>>) -> Result<Self, regex::Error> {
        let exact = configured
            .unwrap_or_else(|| DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect());
        Self::new(exact)
    }

    pub fn allows(&self, origin: &str) -> bool {
        self.exact.iter().any(|allowed| allowed == origin) || self.pattern.is_match(origin)
    }

    /// Credentials are allowed, so methods and headers cannot be wildcards;
    /// headers are mirrored from the preflight instead.
    pub fn into_layer(self) -> CorsLayer {
        tracing::info!(origins = ?self.exact, pattern = PREVIEW_ORIGIN_PATTERN, "CORS allow-list");
        let policy = Arc::new(self);

        CorsLayer::new()
            .allow_origin(AllowOrigin::predicate(
                move |origin: &HeaderValue, _parts: &Parts| {
                    origin.to_str().map(|o| policy.allows(o)).unwrap_or(false)
                },
            ))
            .allow_credentials(true)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers(AllowHeaders::mirror_request())
    }
}
