//! Configuration management for the contact list server.
//!
//! This module handles loading and validating configuration from environment
//! variables. Nothing here writes to stdout, which MCP uses for communication.

use crate::domain::Category;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact list server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of search results to return (default: 5)
    pub max_match_results: usize,

    /// Search confidence threshold (0-100, default: 30)
    pub match_confidence_threshold: u8,

    /// Category prefilled in the new-contact form (default: Personal)
    pub default_category: Category,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `MAX_MATCH_RESULTS`: Max search results (default: 5)
    /// - `MATCH_CONFIDENCE_THRESHOLD`: Min confidence score (default: 30)
    /// - `DEFAULT_CATEGORY`: Work, Family or Personal (default: Personal)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout; a missing .env is fine
        let _ = dotenvy::dotenv();

        let max_match_results = Self::parse_env_usize("MAX_MATCH_RESULTS", 5)?;
        if max_match_results == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_MATCH_RESULTS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let match_confidence_threshold = Self::parse_env_u8("MATCH_CONFIDENCE_THRESHOLD", 30)?;
        if match_confidence_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "MATCH_CONFIDENCE_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let default_category = match env::var("DEFAULT_CATEGORY") {
            Ok(val) => val.parse::<Category>().map_err(|e| ConfigError::InvalidValue {
                var: "DEFAULT_CATEGORY".to_string(),
                reason: e.to_string(),
            })?,
            Err(_) => Category::default(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            max_match_results,
            match_confidence_threshold,
            default_category,
            log_level,
        })
    }

    /// Filter directive for the log subscriber, read before the rest of the
    /// configuration so config errors can be logged.
    ///
    /// `RUST_LOG` takes precedence over `LOG_LEVEL`; the fallback is "error".
    pub fn log_directive() -> String {
        let _ = dotenvy::dotenv();
        env::var("RUST_LOG")
            .or_else(|_| env::var("LOG_LEVEL"))
            .unwrap_or_else(|_| "error".to_string())
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_match_results: 5,
            match_confidence_threshold: 30,
            default_category: Category::default(),
            log_level: "error".to_string(),
        }
    }
}
