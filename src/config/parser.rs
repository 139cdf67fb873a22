use super::settings::AppConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

impl AppConfig {
    /// Parse the simple KEY="VALUE" config format.
    pub(crate) fn parse_ini(&mut self, contents: &str) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"');

                match key {
                    "PORT" => {
                        if let Ok(v) = value.parse() {
                            self.port = v;
                        }
                    }
                    "RAID_LEVEL" => {
                        if let Ok(v) = value.parse() {
                            self.scheme = v;
                        }
                    }
                    "DOMAIN_MODE" => {
                        if let Ok(v) = value.parse() {
                            self.domain_mode = v;
                        }
                    }
                    "COMPRESSION" => {
                        self.compression_enabled =
                            value == "yes" || value == "true" || value == "1";
                    }
                    "LFS_OVERHEAD_PCT" => {
                        if let Ok(v) = value.parse() {
                            self.lfs_overhead_pct = v;
                        }
                    }
                    "CHECKSUM_OVERHEAD_PCT" => {
                        if let Ok(v) = value.parse() {
                            self.checksum_overhead_pct = v;
                        }
                    }
                    "EVENT_CAPACITY" => {
                        if let Ok(v) = value.parse() {
                            self.event_capacity = v;
                        }
                    }
                    _ => {} // Ignore unknown keys
                }
            }
        }
    }

    /// Save current config back to the config file.
    pub fn save(&self) -> Result<()> {
        let contents = format!(
            r#"# ESA sizer configuration
# Auto-generated, edit via the settings API
PORT="{}"
RAID_LEVEL="{}"
DOMAIN_MODE="{}"
COMPRESSION="{}"
LFS_OVERHEAD_PCT="{}"
CHECKSUM_OVERHEAD_PCT="{}"
EVENT_CAPACITY="{}"
"#,
            self.port,
            self.scheme,
            self.domain_mode,
            if self.compression_enabled { "yes" } else { "no" },
            self.lfs_overhead_pct,
            self.checksum_overhead_pct,
            self.event_capacity,
        );

        if let Some(parent) = Path::new(&self.config_path).parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.config_path, contents)
            .with_context(|| format!("Failed to write config to {}", self.config_path))?;

        Ok(())
    }
}
