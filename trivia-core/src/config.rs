use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Centralized configuration for the trivia backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriviaConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
    pub quiz: QuizSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: SocketAddr,
    /// Allow any origin (the frontend is usually served from another port)
    pub cors_permissive: bool,
    /// Origins allowed when `cors_permissive` is false
    pub allowed_origins: Vec<String>,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            cors_permissive: true,
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSection {
    /// Fixed PRNG seed for reproducible quizzes; unset means thread RNG
    pub seed: Option<u64>,
}

impl TriviaConfig {
    /// Load config from `path`, or from ~/.trivia/config.toml when `path` is
    /// None. A missing default file yields defaults; a missing explicit file
    /// is an error. Environment overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse a TOML file without environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;

        toml::from_str(&content).context("Failed to parse config file (invalid TOML)")
    }

    /// Get config file path: ~/.trivia/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".trivia/config.toml")
    }

    /// `DATABASE_URL` and `TRIVIA_BIND` win over file values
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(url) = env::var("DATABASE_URL") {
            self.database.url = Some(url);
        }
        if let Ok(bind) = env::var("TRIVIA_BIND") {
            self.server.bind = bind
                .parse()
                .context(format!("TRIVIA_BIND is not a socket address: {}", bind))?;
        }
        Ok(())
    }

    /// Serialize back to TOML (used by `trivia config show`)
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults() {
        let config = TriviaConfig::default();
        assert_eq!(config.server.bind.port(), 5000);
        assert!(config.server.cors_permissive);
        assert_eq!(config.database.max_connections, 5);
        assert!(config.quiz.seed.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[database]
url = "postgres://localhost/trivia_test"

[quiz]
seed = 42
"#
        )
        .unwrap();

        let config = TriviaConfig::from_file(file.path()).unwrap();
        assert_eq!(
            config.database.url.as_deref(),
            Some("postgres://localhost/trivia_test")
        );
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.quiz.seed, Some(42));
        assert_eq!(config.server, ServerSection::default());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server\nbind = ").unwrap();
        let err = TriviaConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid TOML"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = TriviaConfig::from_file(Path::new("/nonexistent/trivia.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn toml_round_trip() {
        let config = TriviaConfig::default();
        let text = config.to_toml().unwrap();
        let parsed: TriviaConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
