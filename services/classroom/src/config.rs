use classroom_core::transcript::DEFAULT_SILENCE;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub log_level: Level,
    pub progress_path: PathBuf,
    /// Delay before each student response is delivered.
    pub response_pacing: Duration,
    /// Pause after which buffered speech is treated as a finished utterance.
    pub silence: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let progress_path = std::env::var("CLASSROOM_PROGRESS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./classroom-progress.json"));

        let response_pacing =
            millis_var("CLASSROOM_RESPONSE_PACING_MS", Duration::from_secs(2))?;
        let silence = millis_var("CLASSROOM_SILENCE_MS", DEFAULT_SILENCE)?;

        Ok(Self {
            log_level,
            progress_path,
            response_pacing,
            silence,
        })
    }
}

fn millis_var(name: &str, default: Duration) -> Result<Duration, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env_vars() {
        unsafe {
            env::remove_var("RUST_LOG");
            env::remove_var("CLASSROOM_PROGRESS_PATH");
            env::remove_var("CLASSROOM_RESPONSE_PACING_MS");
            env::remove_var("CLASSROOM_SILENCE_MS");
        }
    }

    #[test]
    fn test_config_error_display() {
        let invalid_value =
            ConfigError::InvalidValue("TEST_VAR".to_string(), "bad_value".to_string());
        assert_eq!(
            format!("{}", invalid_value),
            "Invalid value for environment variable TEST_VAR: bad_value"
        );
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        clear_env_vars();

        let config = Config::from_env().expect("Config should load successfully");

        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(
            config.progress_path,
            PathBuf::from("./classroom-progress.json")
        );
        assert_eq!(config.response_pacing, Duration::from_secs(2));
        assert_eq!(config.silence, DEFAULT_SILENCE);
        assert_eq!(config.silence, Duration::from_millis(1200));
    }

    #[test]
    #[serial]
    fn test_config_from_env_custom_values() {
        clear_env_vars();
        unsafe {
            env::set_var("RUST_LOG", "debug");
            env::set_var("CLASSROOM_PROGRESS_PATH", "/tmp/progress.json");
            env::set_var("CLASSROOM_RESPONSE_PACING_MS", "500");
            env::set_var("CLASSROOM_SILENCE_MS", " 800 ");
        }

        let config = Config::from_env().expect("Config should load successfully");

        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.progress_path, PathBuf::from("/tmp/progress.json"));
        assert_eq!(config.response_pacing, Duration::from_millis(500));
        assert_eq!(config.silence, Duration::from_millis(800));
        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_config_invalid_log_level() {
        clear_env_vars();
        unsafe {
            env::set_var("RUST_LOG", "not-a-level");
        }

        let err = Config::from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue(var, _) => assert_eq!(var, "RUST_LOG"),
        }
        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_config_invalid_pacing() {
        clear_env_vars();
        unsafe {
            env::set_var("CLASSROOM_RESPONSE_PACING_MS", "two seconds");
        }

        let err = Config::from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue(var, _) => assert_eq!(var, "CLASSROOM_RESPONSE_PACING_MS"),
        }
        clear_env_vars();
    }
}
