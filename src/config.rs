//! Configuration handling for compose-analyzer

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".composeanalyzer.json";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Which analyzers to run
    #[serde(default)]
    pub analyzers: AnalyzerConfig,

    /// Rule-specific configuration
    #[serde(default)]
    pub rules: RulesConfig,

    /// File patterns to exclude
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Minimum severity to report
    #[serde(default)]
    pub min_severity: MinSeverity,
}

/// Analyzer enable/disable configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerConfig {
    #[serde(default = "default_true")]
    pub accessibility: bool,
    #[serde(default = "default_true")]
    pub text_style: bool,
    #[serde(default = "default_true")]
    pub correctness: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            accessibility: true,
            text_style: true,
            correctness: true,
        }
    }
}

/// Rule-specific configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesConfig {
    /// Rules to enable (supports wildcards like "Raw*")
    #[serde(default)]
    pub enable: Vec<String>,

    /// Rules to disable (supports wildcards)
    #[serde(default)]
    pub disable: Vec<String>,

    /// Override severity for specific rules
    #[serde(default)]
    pub severity: HashMap<String, String>,
}

/// Minimum severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MinSeverity {
    Error,
    Warning,
    #[default]
    Info,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e.to_string()))?;

        serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e.to_string()))
    }

    /// Find and load configuration from the current directory or parents
    pub fn find_and_load(start_dir: &Path) -> Option<Self> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Check if a rule should be enabled
    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        // Explicit disable wins
        if self.matches_pattern(rule_id, &self.rules.disable) {
            return false;
        }

        // An empty enable list means all rules are on by default
        if self.rules.enable.is_empty() {
            return true;
        }

        self.matches_pattern(rule_id, &self.rules.enable)
    }

    /// Check if a file should be excluded
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        for pattern in &self.exclude {
            if let Ok(glob) = glob::Pattern::new(pattern) {
                if glob.matches(&path_str) {
                    return true;
                }
            }
        }
        false
    }

    /// Get overridden severity for a rule
    pub fn get_severity_override(&self, rule_id: &str) -> Option<&str> {
        self.rules.severity.get(rule_id).map(|s| s.as_str())
    }

    fn matches_pattern(&self, rule_id: &str, patterns: &[String]) -> bool {
        for pattern in patterns {
            if let Some(prefix) = pattern.strip_suffix('*') {
                if rule_id.starts_with(prefix) {
                    return true;
                }
            } else if pattern == rule_id {
                return true;
            }
        }
        false
    }
}

/// Configuration error
#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, String),
    ParseError(PathBuf, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadError(path, msg) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), msg)
            }
            Self::ParseError(path, msg) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
