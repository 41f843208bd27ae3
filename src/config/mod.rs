use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:8000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// PostgreSQL connection string
    pub database_url: String,

    /// Upper bound on pooled database connections
    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_db_max_connections() -> u32 {
    10
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let config: AppConfig = envy::from_iter(vec![(
            "DATABASE_URL".to_string(),
            "postgres://localhost/looklab".to_string(),
        )])
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8000");
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.database_url, "postgres://localhost/looklab");
    }

    #[test]
    fn test_database_url_required() {
        let result: Result<AppConfig, _> = envy::from_iter(vec![(
            "BIND_ADDR".to_string(),
            "127.0.0.1:9000".to_string(),
        )]);
        assert!(result.is_err());
    }
}
