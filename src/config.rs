//! Application configuration resolved from environment variables.

use std::env;

/// Default MongoDB connection string used when `MONGO_URI` is unset.
const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";
/// Default MongoDB database name.
const DEFAULT_MONGO_DB: &str = "multiplayer_gaming";
/// Default Neo4j Bolt endpoint used when `NEO4J_URI` is unset.
const DEFAULT_NEO4J_URI: &str = "bolt://localhost:7687";
/// Default Neo4j user.
const DEFAULT_NEO4J_USER: &str = "neo4j";
/// Default Neo4j password.
const DEFAULT_NEO4J_PASSWORD: &str = "password";
/// Default HTTP listen port.
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// MongoDB connection URI.
    pub mongo_uri: String,
    /// MongoDB database holding the record collections.
    pub mongo_db: String,
    /// Neo4j Bolt URI.
    pub neo4j_uri: String,
    /// Neo4j user name.
    pub neo4j_user: String,
    /// Neo4j password.
    pub neo4j_password: String,
    /// TCP port the HTTP server binds to.
    pub port: u16,
}

impl AppConfig {
    /// Resolve the configuration from the environment, falling back to the
    /// defaults of a local development setup.
    pub fn from_env() -> Self {
        Self {
            mongo_uri: env::var("MONGO_URI").unwrap_or_else(|_| DEFAULT_MONGO_URI.into()),
            mongo_db: env::var("MONGO_DB").unwrap_or_else(|_| DEFAULT_MONGO_DB.into()),
            neo4j_uri: env::var("NEO4J_URI").unwrap_or_else(|_| DEFAULT_NEO4J_URI.into()),
            neo4j_user: env::var("NEO4J_USER").unwrap_or_else(|_| DEFAULT_NEO4J_USER.into()),
            neo4j_password: env::var("NEO4J_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_NEO4J_PASSWORD.into()),
            port: resolve_port(),
        }
    }
}

/// Pick the listen port from `PORT` or `SERVER_PORT`, ignoring unparsable values.
fn resolve_port() -> u16 {
    env::var("PORT")
        .or_else(|_| env::var("SERVER_PORT"))
        .ok()
        .and_then(|value| parse_port(&value))
        .unwrap_or(DEFAULT_PORT)
}

fn parse_port(value: &str) -> Option<u16> {
    value.trim().parse::<u16>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_port_accepts_plain_numbers() {
        assert_eq!(parse_port("8080"), Some(8080));
        assert_eq!(parse_port(" 3000 "), Some(3000));
    }

    #[test]
    fn parse_port_rejects_garbage() {
        assert_eq!(parse_port(""), None);
        assert_eq!(parse_port("eighty"), None);
        assert_eq!(parse_port("70000"), None);
    }
}
