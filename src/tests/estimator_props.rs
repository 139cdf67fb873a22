//! Property tests over randomly generated clusters and workload sets.

use crate::sizing::{
    domain_scaling_factor, estimate, validate, ClusterConfig, DomainMode, RedundancyScheme,
    ReferenceTables, ValidationError, WorkloadClass, WorkloadItem,
};
use proptest::prelude::*;

fn scheme_strategy() -> impl Strategy<Value = RedundancyScheme> {
    prop_oneof![
        Just(RedundancyScheme::Raid1),
        Just(RedundancyScheme::Raid5),
        Just(RedundancyScheme::Raid6),
        Just(RedundancyScheme::Unknown),
    ]
}

fn mode_strategy() -> impl Strategy<Value = DomainMode> {
    prop_oneof![
        Just(DomainMode::Aggressive),
        Just(DomainMode::Typical),
        Just(DomainMode::Conservative),
    ]
}

fn class_strategy() -> impl Strategy<Value = WorkloadClass> {
    prop_oneof![
        Just(WorkloadClass::FullCloneVdi),
        Just(WorkloadClass::Unstructured),
        Just(WorkloadClass::OltpSql),
        Just(WorkloadClass::Encrypted),
        Just(WorkloadClass::Backup),
        Just(WorkloadClass::Unknown),
    ]
}

fn cluster_strategy() -> impl Strategy<Value = ClusterConfig> {
    (
        3u32..=64,
        1.6f64..500.0,
        scheme_strategy(),
        any::<bool>(),
        mode_strategy(),
        0.0f64..0.3,
        0.0f64..0.1,
    )
        .prop_map(|(hosts, raw, scheme, compression, mode, lfs, checksum)| ClusterConfig {
            hosts,
            raw_tib_per_host: raw,
            scheme,
            compression_enabled: compression,
            domain_mode: mode,
            lfs_overhead_rate: lfs,
            checksum_rate: checksum,
        })
}

fn workloads_strategy() -> impl Strategy<Value = Vec<WorkloadItem>> {
    prop::collection::vec(
        (class_strategy(), 0.1f64..1000.0, -0.5f64..1.5, any::<bool>()),
        1..8,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (class, logical, cold, compress))| {
                WorkloadItem::new(format!("w{i}"), class, logical, cold, compress)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Dedupe never saves more than the cold data, and never grows data.
    #[test]
    fn prop_savings_bounded_by_cold(
        config in cluster_strategy(),
        workloads in workloads_strategy(),
    ) {
        let tables = ReferenceTables::standard();
        let result = estimate(&tables, &config, &workloads)?;

        for w in &result.workloads {
            prop_assert!(w.dedupe_savings >= 0.0);
            prop_assert!(w.dedupe_savings <= w.cold);
            prop_assert!(w.compressed <= w.item.logical_tib);
        }
        prop_assert!(result.after_dedupe <= result.total_compressed);
        prop_assert!(result.total_compressed <= result.logical_total);
        prop_assert!(result.net_effective >= 0.0);
        prop_assert!(result.capacity_utilization >= 0.0);
    }

    /// Global compression off forces every factor to 1.0 whatever the item flags say.
    #[test]
    fn prop_compression_off_is_identity(
        config in cluster_strategy(),
        workloads in workloads_strategy(),
    ) {
        let tables = ReferenceTables::standard();
        let config = ClusterConfig { compression_enabled: false, ..config };
        let result = estimate(&tables, &config, &workloads)?;

        for w in &result.workloads {
            prop_assert_eq!(w.compression_factor, 1.0);
            prop_assert_eq!(w.compressed, w.item.logical_tib);
        }
    }

    /// Same snapshot, same answer, down to the bit.
    #[test]
    fn prop_estimate_deterministic(
        config in cluster_strategy(),
        workloads in workloads_strategy(),
    ) {
        let tables = ReferenceTables::standard();
        let first = estimate(&tables, &config, &workloads)?;
        let second = estimate(&tables, &config, &workloads)?;
        prop_assert_eq!(first.net_effective.to_bits(), second.net_effective.to_bits());
        prop_assert_eq!(first, second);
    }

    /// Over the supported host range the factor climbs toward its cap without reaching it.
    #[test]
    fn prop_scaling_non_decreasing(hosts in 0u32..=64, mode in mode_strategy()) {
        let (cap, _) = mode.curve();
        let here = domain_scaling_factor(hosts, mode);
        let next = domain_scaling_factor(hosts + 1, mode);
        prop_assert!(next >= here);
        prop_assert!(here < cap);
    }

    /// The scheme host-floor error appears exactly when hosts < min_hosts.
    #[test]
    fn prop_scheme_error_iff_below_minimum(
        hosts in 0u32..80,
        scheme in scheme_strategy(),
        workloads in workloads_strategy(),
    ) {
        let tables = ReferenceTables::standard();
        let config = ClusterConfig { hosts, scheme, ..ClusterConfig::default() };
        let report = validate(&tables, &config, &workloads);

        let flagged = report
            .errors
            .iter()
            .any(|e| matches!(e, ValidationError::SchemeNeedsMoreHosts { .. }));
        let expected = tables.find_scheme(scheme).is_some_and(|s| hosts < s.min_hosts);
        prop_assert_eq!(flagged, expected);
    }
}
