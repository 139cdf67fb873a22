use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Default filesystem (LFS) metadata overhead, in percent of object + replica data.
pub const DEFAULT_LFS_OVERHEAD_PCT: f64 = 13.1;

/// Default end-to-end checksum overhead, in percent of post-dedupe data.
pub const DEFAULT_CHECKSUM_OVERHEAD_PCT: f64 = 2.0;

/// Redundancy (RAID / storage policy) scheme applied to every object in the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedundancyScheme {
    /// 1+1 mirroring, tolerates one failure.
    Raid1,
    /// Adaptive 2+1 / 4+1 erasure coding, tolerates one failure.
    Raid5,
    /// 4+2 erasure coding, tolerates two failures.
    Raid6,
    /// Anything the caller sent that we do not recognise. Resolves to the
    /// neutral scheme instead of failing.
    #[serde(other)]
    Unknown,
}

impl RedundancyScheme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Raid1 => "raid1",
            Self::Raid5 => "raid5",
            Self::Raid6 => "raid6",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RedundancyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RedundancyScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raid1" => Ok(Self::Raid1),
            "raid5" => Ok(Self::Raid5),
            "raid6" => Ok(Self::Raid6),
            _ => Err(format!("invalid redundancy scheme: {s}")),
        }
    }
}

/// Class of a declared workload; selects its compression and similarity profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkloadClass {
    FullCloneVdi,
    Unstructured,
    OltpSql,
    Encrypted,
    Backup,
    #[serde(other)]
    Unknown,
}

impl WorkloadClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullCloneVdi => "full_clone_vdi",
            Self::Unstructured => "unstructured",
            Self::OltpSql => "oltp_sql",
            Self::Encrypted => "encrypted",
            Self::Backup => "backup",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label used in breakdown tables.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullCloneVdi => "VDI Clones",
            Self::Unstructured => "Unstructured",
            Self::OltpSql => "OLTP/SQL",
            Self::Encrypted => "Encrypted",
            Self::Backup => "Backup",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for WorkloadClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requirements and cost of one redundancy scheme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemeSpec {
    /// Minimum host count the scheme can be placed on.
    pub min_hosts: u32,
    /// Raw capacity consumed per unit of data (always > 1.0 for real schemes).
    pub overhead: f64,
    pub description: String,
    /// Internal placement encoding, e.g. "4+2 Erasure Coding".
    pub encoding: String,
}

/// Compression and similarity characteristics of one workload class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkloadProfile {
    pub compression_min: f64,
    pub compression_max: f64,
    /// Factor actually applied by the estimator.
    pub compression_default: f64,
    /// Likelihood in [0, 1] that cold blocks of this class duplicate across the cluster.
    pub similarity: f64,
}

/// Supported platform envelope and advisory thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlatformLimits {
    /// Quorum floor.
    pub min_hosts: u32,
    pub max_hosts: u32,
    pub max_vms_per_host: u32,
    /// Average VM size used to turn logical TiB into a VM count.
    pub avg_vm_size_tib: f64,
    pub min_raw_tib_per_host: f64,
    /// Largest per-host raw capacity that has been tested; above this is a warning only.
    pub max_raw_tib_per_host: f64,
    pub lfs_overhead_pct: f64,
    pub checksum_overhead_pct: f64,
    /// Utilization (percent of usable raw) above which a warning is raised.
    pub utilization_warn_pct: f64,
    /// Overall reduction ratio above which the estimate is flagged for review.
    pub max_plausible_reduction: f64,
}

impl PlatformLimits {
    pub const fn standard() -> Self {
        Self {
            min_hosts: 3,
            max_hosts: 64,
            max_vms_per_host: 500,
            avg_vm_size_tib: 2.0,
            min_raw_tib_per_host: 1.6,
            max_raw_tib_per_host: 500.0,
            lfs_overhead_pct: DEFAULT_LFS_OVERHEAD_PCT,
            checksum_overhead_pct: DEFAULT_CHECKSUM_OVERHEAD_PCT,
            utilization_warn_pct: 85.0,
            max_plausible_reduction: 8.0,
        }
    }
}

impl Default for PlatformLimits {
    fn default() -> Self {
        Self::standard()
    }
}

/// Immutable reference data handed to the validator and the estimator.
///
/// Built once (usually via [`ReferenceTables::standard`]) and shared read-only.
/// Tests can construct alternate table sets through the public fields.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceTables {
    pub schemes: BTreeMap<RedundancyScheme, SchemeSpec>,
    pub profiles: BTreeMap<WorkloadClass, WorkloadProfile>,
    pub limits: PlatformLimits,
    #[serde(skip)]
    neutral_scheme: SchemeSpec,
    #[serde(skip)]
    neutral_profile: WorkloadProfile,
}

impl ReferenceTables {
    pub fn new(
        schemes: BTreeMap<RedundancyScheme, SchemeSpec>,
        profiles: BTreeMap<WorkloadClass, WorkloadProfile>,
        limits: PlatformLimits,
    ) -> Self {
        Self {
            schemes,
            profiles,
            limits,
            neutral_scheme: SchemeSpec {
                min_hosts: 0,
                overhead: 1.25,
                description: "Unknown RAID".to_string(),
                encoding: "Unknown".to_string(),
            },
            neutral_profile: WorkloadProfile {
                compression_min: 1.0,
                compression_max: 1.0,
                compression_default: 1.0,
                similarity: 0.0,
            },
        }
    }

    /// The ESA tables: three redundancy schemes, five workload classes.
    pub fn standard() -> Self {
        let scheme = |min_hosts, overhead, description: &str, encoding: &str| SchemeSpec {
            min_hosts,
            overhead,
            description: description.to_string(),
            encoding: encoding.to_string(),
        };
        let schemes = BTreeMap::from([
            (RedundancyScheme::Raid1, scheme(3, 2.0, "RAID-1 Mirror (FTT=1)", "1+1 Mirroring")),
            (
                RedundancyScheme::Raid5,
                scheme(3, 1.25, "RAID-5 Adaptive Erasure Coding (FTT=1)", "2+1 or 4+1 Adaptive"),
            ),
            (
                RedundancyScheme::Raid6,
                scheme(6, 1.5, "RAID-6 Erasure Coding (FTT=2)", "4+2 Erasure Coding"),
            ),
        ]);

        let profile = |min, max, default, similarity| WorkloadProfile {
            compression_min: min,
            compression_max: max,
            compression_default: default,
            similarity,
        };
        let profiles = BTreeMap::from([
            (WorkloadClass::FullCloneVdi, profile(2.0, 8.0, 4.0, 0.85)),
            (WorkloadClass::Unstructured, profile(1.2, 2.5, 1.6, 0.35)),
            (WorkloadClass::OltpSql, profile(1.0, 1.6, 1.2, 0.15)),
            (WorkloadClass::Encrypted, profile(1.0, 1.05, 1.0, 0.0)),
            (WorkloadClass::Backup, profile(1.5, 3.0, 2.0, 0.5)),
        ]);

        Self::new(schemes, profiles, PlatformLimits::standard())
    }

    /// Exact lookup; `None` for schemes missing from this table set.
    pub fn find_scheme(&self, scheme: RedundancyScheme) -> Option<&SchemeSpec> {
        self.schemes.get(&scheme)
    }

    /// Lookup that degrades to the neutral scheme (overhead 1.25, no host floor).
    pub fn scheme(&self, scheme: RedundancyScheme) -> &SchemeSpec {
        self.find_scheme(scheme).unwrap_or(&self.neutral_scheme)
    }

    /// Lookup that degrades to the neutral profile (no compression, no similarity).
    pub fn profile(&self, class: WorkloadClass) -> &WorkloadProfile {
        self.profiles.get(&class).unwrap_or(&self.neutral_profile)
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::standard()
    }
}
