use super::defaults::{
    DEFAULT_CONFIG_PATH, DEFAULT_DOMAIN_MODE, DEFAULT_EVENT_CAPACITY, DEFAULT_PORT,
    DEFAULT_SCHEME,
};
use crate::sizing::{
    ClusterConfig, DomainMode, RedundancyScheme, DEFAULT_CHECKSUM_OVERHEAD_PCT,
    DEFAULT_LFS_OVERHEAD_PCT,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub config_path: String,
    /// Redundancy scheme used when a request omits it.
    pub scheme: RedundancyScheme,
    pub domain_mode: DomainMode,
    /// Global compression toggle used when a request omits it.
    pub compression_enabled: bool,
    /// Filesystem metadata overhead in percent (13.1 = 13.1%).
    pub lfs_overhead_pct: f64,
    /// Checksum overhead in percent.
    pub checksum_overhead_pct: f64,
    /// Broadcast channel size for SSE subscribers.
    pub event_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            scheme: DEFAULT_SCHEME,
            domain_mode: DEFAULT_DOMAIN_MODE,
            compression_enabled: true,
            lfs_overhead_pct: DEFAULT_LFS_OVERHEAD_PCT,
            checksum_overhead_pct: DEFAULT_CHECKSUM_OVERHEAD_PCT,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Load configuration, merging defaults with env overrides and config file values.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("ESA_SIZER_CONFIG_PATH") {
            config.config_path = path;
        }
        if let Ok(port) = std::env::var("ESA_SIZER_PORT") {
            config.port = port.parse().context("ESA_SIZER_PORT must be a valid port number")?;
        }

        let cfg_path = Path::new(&config.config_path);
        if cfg_path.exists() {
            let contents = fs::read_to_string(cfg_path)
                .with_context(|| format!("Failed to read config file: {}", config.config_path))?;
            config.parse_ini(&contents);
        }

        config.validate()?;
        Ok(config)
    }

    /// Baseline cluster inputs; requests override individual fields.
    pub fn cluster_defaults(&self) -> ClusterConfig {
        ClusterConfig {
            scheme: self.scheme,
            compression_enabled: self.compression_enabled,
            domain_mode: self.domain_mode,
            lfs_overhead_rate: self.lfs_overhead_pct / 100.0,
            checksum_rate: self.checksum_overhead_pct / 100.0,
            ..ClusterConfig::default()
        }
    }
}
