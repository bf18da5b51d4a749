use sqlx::postgres::PgConnectOptions;

/// Pool size used when `DB_MAX_CONNECTIONS` is not set.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set in the environment or .env")]
    Missing(&'static str),
    #[error("{var} is not a valid number: {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Database connection settings, read once at startup.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub user: String,
    pub host: String,
    pub database: String,
    pub password: String,
    pub port: u16,
    pub max_connections: u32,
}

impl DbConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| lookup(var).ok_or(ConfigError::Missing(var));

        let port = required("DB_PORT")?;
        let port = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { var: "DB_PORT", value: port })?;

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                var: "DB_MAX_CONNECTIONS",
                value,
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            user: required("DB_USER")?,
            host: required("DB_HOST")?,
            database: required("DATABASE")?,
            password: required("DB_PASSWORD")?,
            port,
            max_connections,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_env() -> HashMap<String, String> {
        env(&[
            ("DB_USER", "lesson"),
            ("DB_HOST", "localhost"),
            ("DATABASE", "games"),
            ("DB_PASSWORD", "secret"),
            ("DB_PORT", "5432"),
        ])
    }

    #[test]
    fn reads_all_variables() {
        let vars = full_env();
        let config = DbConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.user, "lesson");
        assert_eq!(config.host, "localhost");
        assert_eq!(config.database, "games");
        assert_eq!(config.password, "secret");
        assert_eq!(config.port, 5432);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn missing_variable_is_reported_by_name() {
        let mut vars = full_env();
        vars.remove("DATABASE");

        let err = DbConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE"));
        assert!(err.to_string().contains("DATABASE"));
    }

    #[test]
    fn bad_port_is_rejected() {
        let mut vars = full_env();
        vars.insert("DB_PORT".into(), "fivefourthreetwo".into());

        let err = DbConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { var: "DB_PORT", .. }));
    }

    #[test]
    fn pool_size_override() {
        let mut vars = full_env();
        vars.insert("DB_MAX_CONNECTIONS".into(), "3".into());

        let config = DbConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.max_connections, 3);
    }

    #[test]
    fn connect_options_carry_settings() {
        let vars = full_env();
        let options = DbConfig::from_lookup(|k| vars.get(k).cloned())
            .unwrap()
            .connect_options();

        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_username(), "lesson");
        assert_eq!(options.get_database(), Some("games"));
    }
}
