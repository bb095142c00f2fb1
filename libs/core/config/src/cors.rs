use crate::{ConfigError, FromEnv, env_or_default};

const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Cross-origin settings for the browser front end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_origins: origins.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::new([DEFAULT_ORIGIN])
    }
}

impl FromEnv for CorsConfig {
    /// Reads `CORS_ORIGIN` as a comma-separated list, defaulting to the
    /// local front-end dev server.
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env_or_default("CORS_ORIGIN", DEFAULT_ORIGIN);
        let allowed_origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if allowed_origins.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "CORS_ORIGIN".to_string(),
                details: "at least one origin is required".to_string(),
            });
        }

        Ok(Self { allowed_origins })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_default_origin() {
        temp_env::with_var_unset("CORS_ORIGIN", || {
            let config = CorsConfig::from_env().unwrap();
            assert_eq!(config.allowed_origins, vec!["http://localhost:3000"]);
        });
    }

    #[test]
    fn test_cors_comma_separated() {
        temp_env::with_var(
            "CORS_ORIGIN",
            Some("https://a.example.com, https://b.example.com,"),
            || {
                let config = CorsConfig::from_env().unwrap();
                assert_eq!(
                    config.allowed_origins,
                    vec!["https://a.example.com", "https://b.example.com"]
                );
            },
        );
    }

    #[test]
    fn test_cors_empty_is_rejected() {
        temp_env::with_var("CORS_ORIGIN", Some(" , "), || {
            assert!(CorsConfig::from_env().is_err());
        });
    }
}
