//! # vft-config
//!
//! Layered configuration loading for vft using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VFT_*` prefix, `__` as separator)
//! 2. Project-level `.vft/config.toml`
//! 3. User-level `~/.config/vft/config.toml`
//! 4. Built-in defaults
//!
//! `VFT_EXPANSION__INIT_POLICY=strict` maps to `expansion.init_policy`,
//! `VFT_RENDER__INDENT_WIDTH=2` to `render.indent_width`.
//!
//! ```no_run
//! use vft_config::VftConfig;
//!
//! let config = VftConfig::load_with_dotenv().expect("config");
//! println!("annotation: @{}", config.expansion.annotation_name());
//! ```

mod error;
mod expansion;
mod render;

pub use error::ConfigError;
pub use expansion::ExpansionConfig;
pub use render::{INDENT_WIDTH_RANGE, RenderConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".vft/config.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "VFT_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct VftConfig {
    #[serde(default)]
    pub expansion: ExpansionConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

impl VftConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; see [`VftConfig::load_with_dotenv`].
    ///
    /// # Errors
    /// Returns `ConfigError` if a source fails to parse or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load `.env` (current directory or an ancestor) and then [`VftConfig::load`].
    ///
    /// # Errors
    /// Same as [`VftConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // a missing .env is not an error
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extract and validate a config from any figment.
    ///
    /// # Errors
    /// Returns `ConfigError` on extraction failure or an invalid value.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.expansion.validate()?;
        self.render.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vft").join("config.toml"))
    }
}
