mod estimator_props;
mod estimator_tests;
mod report_tests;

use crate::sizing::{ClusterConfig, DomainMode, RedundancyScheme, WorkloadClass, WorkloadItem};

/// Assert two floats agree to within `tol`.
fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!((actual - expected).abs() <= tol, "expected {expected}, got {actual} (tolerance {tol})");
}

/// Six-host RAID-5 cluster with 20 TiB per host and default rates.
fn six_host_raid5() -> ClusterConfig {
    ClusterConfig {
        hosts: 6,
        raw_tib_per_host: 20.0,
        scheme: RedundancyScheme::Raid5,
        compression_enabled: true,
        domain_mode: DomainMode::Typical,
        lfs_overhead_rate: 0.131,
        checksum_rate: 0.02,
    }
}

fn unstructured_100() -> WorkloadItem {
    WorkloadItem::new("w1", WorkloadClass::Unstructured, 100.0, 0.7, true)
}
