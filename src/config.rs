use std::env;

use crate::constants::{API_KEY_ENV, API_URL_ENV, LINEAR_API_URL, TEAM_ID_ENV};
use crate::error::LinearResult;
use crate::linear_error;

/// Everything needed to build a [`crate::Linear`].
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub team_id: String,
    pub api_url: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>, team_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            team_id: team_id.into(),
            api_url: LINEAR_API_URL.to_string(),
        }
    }

    /// Read `LINEAR_API_KEY`, `LINEAR_TEAM_ID` and optionally `LINEAR_API_URL`.
    pub fn from_env() -> LinearResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> LinearResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = non_empty(API_KEY_ENV)
            .ok_or_else(|| linear_error!(ConfigError, "No API key found. Set the {} environment variable.", API_KEY_ENV))?;
        let team_id = non_empty(TEAM_ID_ENV)
            .ok_or_else(|| linear_error!(ConfigError, "No team found. Set the {} environment variable.", TEAM_ID_ENV))?;
        let api_url = non_empty(API_URL_ENV).unwrap_or_else(|| LINEAR_API_URL.to_string());

        Ok(Self {
            api_key,
            team_id,
            api_url,
        })
    }
}
