use crate::sizing::{DomainMode, RedundancyScheme};

/// Default path of the KEY="VALUE" configuration file.
pub(super) const DEFAULT_CONFIG_PATH: &str = "/etc/esa-sizer/esa-sizer.cfg";

/// Default port the daemon listens on (localhost only).
pub(super) const DEFAULT_PORT: u16 = 7092;

/// Redundancy scheme assumed when a request does not name one.
pub(super) const DEFAULT_SCHEME: RedundancyScheme = RedundancyScheme::Raid5;

/// Dedupe domain scaling mode assumed when a request does not name one.
pub(super) const DEFAULT_DOMAIN_MODE: DomainMode = DomainMode::Typical;

/// Capacity of the estimation event broadcast channel.
pub(super) const DEFAULT_EVENT_CAPACITY: usize = 256;
