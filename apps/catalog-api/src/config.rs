//! Configuration for Catalog API

use core_config::{app_info, env_or_default, server::ServerConfig, AppInfo, ConfigError, FromEnv};
use std::path::PathBuf;

pub use core_config::Environment;

/// Where the startup snapshot of each collection lives
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedConfig {
    pub products_path: PathBuf,
    pub categories_path: PathBuf,
}

impl FromEnv for SeedConfig {
    /// - PRODUCTS_FILE: defaults to data/products.json
    /// - CATEGORIES_FILE: defaults to data/categories.json
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            products_path: env_or_default("PRODUCTS_FILE", "data/products.json").into(),
            categories_path: env_or_default("CATEGORIES_FILE", "data/categories.json").into(),
        })
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub seed: SeedConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
            seed: SeedConfig::from_env()?,
        })
    }
}
