use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub connection_string: Option<String>,
    pub max_connections: Option<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8081,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            connection_string: None,
            max_connections: Some(20),
        }
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| fallback.to_string())
}

impl AppConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Add default configuration
        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // Add config file if it exists
        config = config.add_source(config::File::with_name("config").required(false));

        // Add environment variables with prefix "BOOKAPP_"
        config = config.add_source(
            config::Environment::with_prefix("BOOKAPP")
                .separator("_")
                .prefix_separator("_"),
        );

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// Resolve the database URL: explicit connection string first, then
    /// DATABASE_URL, then a DSN composed from the individual DB_* variables
    /// with their documented defaults.
    pub fn database_url(&self) -> String {
        if let Some(connection_string) = &self.database.connection_string {
            return connection_string.clone();
        }

        if let Ok(url) = std::env::var("DATABASE_URL") {
            return url;
        }

        let user = env_or("DB_USER", "postgres");
        let password = env_or("DB_PASSWORD", "postgres");
        let host = env_or("DB_HOST", "localhost");
        let name = env_or("DB_NAME", "books");

        format!("postgres://{}:{}@{}:5432/{}", user, password, host, name)
    }

    /// Get the bounded pool size
    pub fn max_connections(&self) -> u32 {
        self.database.max_connections.unwrap_or(20)
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_fallbacks() {
        let config = AppConfig::default();
        assert_eq!(config.server_address(), "127.0.0.1:8081");
        assert_eq!(config.max_connections(), 20);
    }

    #[test]
    fn explicit_connection_string_wins() {
        let config = AppConfig {
            database: DatabaseConfig {
                connection_string: Some("postgres://u:p@db:5432/catalog".to_string()),
                max_connections: None,
            },
            ..AppConfig::default()
        };
        assert_eq!(config.database_url(), "postgres://u:p@db:5432/catalog");
    }
}
