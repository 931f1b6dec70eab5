use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{MatchConfig, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_fixed_reach_km")]
    pub fixed_location_reach_km: f64,
    #[serde(default = "default_mobile_radius_km")]
    pub default_mobile_travel_radius_km: f64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            fixed_location_reach_km: default_fixed_reach_km(),
            default_mobile_travel_radius_km: default_mobile_radius_km(),
        }
    }
}

fn default_max_results() -> usize { 6 }
fn default_fixed_reach_km() -> f64 { 15.0 }
fn default_mobile_radius_km() -> f64 { 10.0 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skill_weight")]
    pub skill: f64,
    #[serde(default = "default_distance_weight")]
    pub distance: f64,
    #[serde(default = "default_rating_weight")]
    pub rating: f64,
    #[serde(default = "default_verified_weight")]
    pub verified: f64,
    #[serde(default = "default_unverified_weight")]
    pub unverified: f64,
    #[serde(default = "default_available_weight")]
    pub available: f64,
    #[serde(default = "default_busy_weight")]
    pub busy: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skill: default_skill_weight(),
            distance: default_distance_weight(),
            rating: default_rating_weight(),
            verified: default_verified_weight(),
            unverified: default_unverified_weight(),
            available: default_available_weight(),
            busy: default_busy_weight(),
        }
    }
}

fn default_skill_weight() -> f64 { 40.0 }
fn default_distance_weight() -> f64 { 25.0 }
fn default_rating_weight() -> f64 { 20.0 }
fn default_verified_weight() -> f64 { 10.0 }
fn default_unverified_weight() -> f64 { 5.0 }
fn default_available_weight() -> f64 { 5.0 }
fn default_busy_weight() -> f64 { 2.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with VENDOR_MATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with VENDOR_MATCH_)
            // e.g., VENDOR_MATCH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("VENDOR_MATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("VENDOR_MATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Matching tunables as a matcher-ready config
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            max_results: self.matching.max_results,
            fixed_location_reach_km: self.matching.fixed_location_reach_km,
            default_mobile_travel_radius_km: self.matching.default_mobile_travel_radius_km,
            weights: ScoringWeights {
                skill: self.scoring.weights.skill,
                distance: self.scoring.weights.distance,
                rating: self.scoring.weights.rating,
                verified: self.scoring.weights.verified,
                unverified: self.scoring.weights.unverified,
                available: self.scoring.weights.available,
                busy: self.scoring.weights.busy,
            },
        }
    }
}
