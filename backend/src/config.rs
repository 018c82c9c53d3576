//! Process-wide settings read from the environment at start-up.
//!
//! Repository settings have no defaults. When one is absent the server still
//! starts; every request that needs it answers `500` naming what is missing.
//! Empty values count as absent.

use log::warn;

use crate::error::ApiError;

pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
pub const GITHUB_REPO: &str = "GITHUB_REPO";
pub const GITHUB_BRANCH: &str = "GITHUB_BRANCH";
pub const DATA_PATH: &str = "DATA_PATH";
const GITHUB_API_URL: &str = "GITHUB_API_URL";
const GITHUB_RAW_URL: &str = "GITHUB_RAW_URL";
const HOST: &str = "HOST";
const PORT: &str = "PORT";

const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_RAW_URL: &str = "https://raw.githubusercontent.com";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: Option<String>,
    /// `owner/name` of the repository holding the data file and uploads.
    pub github_repo: Option<String>,
    pub github_branch: Option<String>,
    /// Path of the inventory JSON file inside the repository.
    pub data_path: Option<String>,
    pub api_url: String,
    pub raw_url: String,
    pub host: String,
    pub port: u16,
}

/// Repository coordinates every remote call needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryTarget {
    pub token: String,
    pub repo: String,
    pub branch: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match value(PORT) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid {}={:?}, using {}", PORT, raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Config {
            github_token: value(GITHUB_TOKEN),
            github_repo: value(GITHUB_REPO),
            github_branch: value(GITHUB_BRANCH),
            data_path: value(DATA_PATH),
            api_url: value(GITHUB_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            raw_url: value(GITHUB_RAW_URL).unwrap_or_else(|| DEFAULT_RAW_URL.to_string()),
            host: value(HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        }
    }

    /// Names of the unset variables among the repository settings, plus
    /// `DATA_PATH` when `with_data_path` is set.
    pub fn missing(&self, with_data_path: bool) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.github_token.is_none() {
            missing.push(GITHUB_TOKEN);
        }
        if self.github_repo.is_none() {
            missing.push(GITHUB_REPO);
        }
        if self.github_branch.is_none() {
            missing.push(GITHUB_BRANCH);
        }
        if with_data_path && self.data_path.is_none() {
            missing.push(DATA_PATH);
        }
        missing
    }

    /// Coordinates for the upload endpoint.
    pub fn repository(&self) -> Result<RepositoryTarget, ApiError> {
        match (&self.github_token, &self.github_repo, &self.github_branch) {
            (Some(token), Some(repo), Some(branch)) => Ok(RepositoryTarget {
                token: token.clone(),
                repo: repo.clone(),
                branch: branch.clone(),
            }),
            _ => Err(ApiError::MissingConfig(self.missing(false))),
        }
    }

    /// Coordinates and data file path for the inventory endpoint.
    pub fn inventory(&self) -> Result<(RepositoryTarget, String), ApiError> {
        let missing = self.missing(true);
        if !missing.is_empty() {
            return Err(ApiError::MissingConfig(missing));
        }
        let data_path = self.data_path.clone().unwrap_or_default();
        Ok((self.repository()?, data_path))
    }
}
