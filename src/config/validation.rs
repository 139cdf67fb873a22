use super::settings::AppConfig;
use crate::sizing::RedundancyScheme;
use anyhow::Result;

impl AppConfig {
    /// Validate configuration values are sane.
    pub(crate) fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.port > 0, "Port must be > 0");
        anyhow::ensure!(
            self.scheme != RedundancyScheme::Unknown,
            "scheme must be one of raid1, raid5, raid6"
        );
        anyhow::ensure!(
            (0.0..=100.0).contains(&self.lfs_overhead_pct),
            "lfs_overhead_pct must be between 0 and 100"
        );
        anyhow::ensure!(
            (0.0..=100.0).contains(&self.checksum_overhead_pct),
            "checksum_overhead_pct must be between 0 and 100"
        );
        anyhow::ensure!(self.event_capacity >= 1, "event_capacity must be >= 1");
        Ok(())
    }
}
