use core_config::{ConfigError, Environment, FromEnv, env_optional, server::ServerConfig};
use database::PostgresConfig;

/// Application configuration, composed from the shared config pieces
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    /// `None` when `DATABASE_URL` is unset: storage falls back to memory
    pub database: Option<PostgresConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        let database = match env_optional("DATABASE_URL") {
            Some(_) => Some(PostgresConfig::from_env()?),
            None if environment.is_production() => {
                return Err(ConfigError::MissingEnvVar("DATABASE_URL".to_string()));
            }
            None => None,
        };

        Ok(Self {
            environment,
            server,
            database,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_without_database() {
        temp_env::with_vars(
            [
                ("APP_ENV", None::<&str>),
                ("DATABASE_URL", None),
                ("PORT", Some("3000")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.environment.is_development());
                assert!(config.database.is_none());
                assert_eq!(config.server.port, 3000);
            },
        );
    }

    #[test]
    fn test_database_url_selects_postgres() {
        temp_env::with_vars(
            [
                ("APP_ENV", None::<&str>),
                ("DATABASE_URL", Some("postgres://localhost/poupa")),
            ],
            || {
                let config = Config::from_env().unwrap();
                let database = config.database.unwrap();
                assert_eq!(database.url, "postgres://localhost/poupa");
            },
        );
    }

    #[test]
    fn test_production_requires_database() {
        temp_env::with_vars(
            [("APP_ENV", Some("production")), ("DATABASE_URL", None)],
            || {
                let err = Config::from_env().unwrap_err();
                assert_eq!(err, ConfigError::MissingEnvVar("DATABASE_URL".into()));
            },
        );
    }
}
