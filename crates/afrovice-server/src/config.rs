use std::env;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// HTTP-side settings. Database settings live in `afrovice_db::DatabaseConfig`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Exact origins replacing the built-in allow-list, from `CORS_ORIGINS`.
    pub cors_origins: Option<Vec<String>>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(%raw, "invalid BIND_ADDR, falling back to {DEFAULT_BIND_ADDR}");
                default_bind_addr()
            }),
            None => default_bind_addr(),
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty());

        Self {
            bind_addr,
            cors_origins,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert!(config.cors_origins.is_none());
    }

    #[test]
    fn test_bind_addr_override() {
        let config = ServerConfig::from_lookup(|key| {
            (key == "BIND_ADDR").then(|| "127.0.0.1:9000".to_string())
        });
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_bind_addr_falls_back() {
        let config =
            ServerConfig::from_lookup(|key| (key == "BIND_ADDR").then(|| "nowhere".to_string()));
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn test_cors_origins_split_and_trimmed() {
        let config = ServerConfig::from_lookup(|key| {
            (key == "CORS_ORIGINS")
                .then(|| " http://localhost:3000 ,https://tickets.example.com,, ".to_string())
        });
        assert_eq!(
            config.cors_origins,
            Some(vec![
                "http://localhost:3000".to_string(),
                "https://tickets.example.com".to_string()
            ])
        );
    }

    #[test]
    fn test_blank_cors_origins_ignored() {
        let config =
            ServerConfig::from_lookup(|key| (key == "CORS_ORIGINS").then(|| " , ".to_string()));
        assert!(config.cors_origins.is_none());
    }
}
