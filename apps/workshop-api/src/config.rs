use core_config::{
    AppInfo, ConfigError, FromEnv, app_info, cors::CorsConfig, env_optional, env_or_default,
    env_required, server::ServerConfig,
};
use std::str::FromStr;

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Where documents live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDb,
    /// Process-local maps; contents vanish on restart
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(Self::MongoDb),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::InvalidValue {
                key: "STORE_BACKEND".to_string(),
                details: format!("expected 'mongodb' or 'memory', got '{other}'"),
            }),
        }
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    /// Shared admin secret; `None` leaves admin routes answering 500
    pub admin_password: Option<String>,
    /// Namespace for this event's collections
    pub workspace_id: String,
    pub store: StoreBackend,
    /// Present exactly when `store` is [`StoreBackend::MongoDb`]
    pub mongodb: Option<MongoConfig>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let cors = CorsConfig::from_env()?;
        let workspace_id = env_required("WORKSPACE_ID")?;
        let store: StoreBackend = env_or_default("STORE_BACKEND", "mongodb").parse()?;

        let mongodb = match store {
            StoreBackend::MongoDb => {
                Some(MongoConfig::from_env()?.with_app_name(env!("CARGO_PKG_NAME")))
            }
            StoreBackend::Memory => None,
        };

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            cors,
            admin_password: env_optional("ADMIN_PASSWORD"),
            workspace_id,
            store,
            mongodb,
        })
    }
}

/// Loads the first of the usual `.env` locations that exists.
///
/// Variables already set in the process environment win. Returns the file
/// that was loaded so it can be logged once tracing is up.
pub fn load_dotenv() -> Option<&'static str> {
    [".env", "backend/.env", "../.env"]
        .into_iter()
        .find(|path| dotenvy::from_filename(path).is_ok())
}
