use super::{assert_close, six_host_raid5, unstructured_100};
use crate::sizing::{
    estimate, CapacityWarning, ClusterConfig, ComplianceNote, DomainMode, EstimateError, Note,
    RedundancyScheme, ReferenceTables, WorkloadClass, WorkloadItem,
};

#[test]
fn test_single_unstructured_workload() {
    let tables = ReferenceTables::standard();
    let result = estimate(&tables, &six_host_raid5(), &[unstructured_100()]).unwrap();

    assert_close(result.logical_total, 100.0, 1e-12);
    assert_close(result.total_compressed, 62.5, 1e-12);
    assert_close(result.domain_scaling, 0.468_070_380_5, 1e-9);

    let w = &result.workloads[0];
    assert_close(w.compression_factor, 1.6, 0.0);
    assert_close(w.cold, 43.75, 1e-12);
    assert_close(w.dedupe_probability, 0.163_824_633, 1e-9);
    assert_close(w.dedupe_savings, 4.300_396_621, 1e-8);
    assert_close(w.effective_factor, 100.0 / 58.199_603_379, 1e-8);

    assert_close(result.total_dedupe_savings, 4.300_396_621, 1e-8);
    assert_close(result.after_dedupe, 58.199_603_379, 1e-8);
    assert_close(result.replica_data, 58.199_603_379 * 0.25, 1e-8);
    assert_close(result.object_and_replica, 58.199_603_379 * 1.25, 1e-8);
    assert_close(result.lfs_overhead, 58.199_603_379 * 1.25 * 0.131, 1e-8);
    assert_close(result.checksum_overhead, 58.199_603_379 * 0.02, 1e-8);
    assert_close(result.net_effective, 68.893_780_500, 1e-8);

    assert_close(result.total_raw_capacity, 120.0, 1e-12);
    assert_close(result.usable_raw_capacity, 96.0, 1e-12);
    assert_close(result.capacity_utilization, 71.764_354_688, 1e-8);
    assert_close(result.overall_reduction, 100.0 / 68.893_780_500, 1e-8);
    assert_close(result.compression_only, 1.6, 1e-12);
    assert_close(result.dedupe_only, 62.5 / 58.199_603_379, 1e-8);

    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    assert_eq!(
        result.compliance,
        vec![
            ComplianceNote::StorageRequirementMet,
            ComplianceNote::HostCountSupported,
            ComplianceNote::AdaptiveErasureCodingSupported,
        ]
    );
    assert_eq!(result.scheme_encoding, "2+1 or 4+1 Adaptive");
}

#[test]
fn test_notes_render() {
    let tables = ReferenceTables::standard();
    let result = estimate(&tables, &six_host_raid5(), &[unstructured_100()]).unwrap();
    let notes: Vec<String> = result.notes.iter().map(ToString::to_string).collect();

    assert_eq!(notes.len(), 6);
    assert_eq!(notes[0], "ESA Architecture: 2+1 or 4+1 Adaptive with 25% overhead");
    assert_eq!(notes[4], "LFS overhead: 13.1% of object + replica data");
    assert_eq!(notes[5], "Domain scaling: 0.468 effectiveness (6 hosts, typical)");
    assert!(matches!(result.notes[1], Note::GlobalDedupeDomain));
}

#[test]
fn test_global_compression_off_ignores_item_flags() {
    let tables = ReferenceTables::standard();
    let config = ClusterConfig { compression_enabled: false, ..six_host_raid5() };
    let workloads = [
        WorkloadItem::new("vdi", WorkloadClass::FullCloneVdi, 40.0, 0.9, true),
        WorkloadItem::new("bak", WorkloadClass::Backup, 10.0, 0.2, false),
    ];
    let result = estimate(&tables, &config, &workloads).unwrap();

    for w in &result.workloads {
        assert_close(w.compression_factor, 1.0, 0.0);
        assert_close(w.compressed, w.item.logical_tib, 0.0);
    }
    assert_close(result.compression_only, 1.0, 1e-12);
}

#[test]
fn test_item_compression_opt_out() {
    let tables = ReferenceTables::standard();
    let item = WorkloadItem::new("w1", WorkloadClass::Unstructured, 100.0, 0.7, false);
    let result = estimate(&tables, &six_host_raid5(), &[item]).unwrap();
    let w = &result.workloads[0];

    assert_close(w.compression_factor, 1.0, 0.0);
    assert_close(w.compressed, 100.0, 0.0);
    // Uncompressed data dedupes at 0.75 efficiency.
    assert_close(w.dedupe_savings, 70.0 * 0.163_824_633_175 * 0.75, 1e-8);
}

#[test]
fn test_all_zero_workloads_fail_with_empty_dataset() {
    let tables = ReferenceTables::standard();
    let zeros: Vec<WorkloadItem> = (0..3)
        .map(|i| WorkloadItem::new(format!("w{i}"), WorkloadClass::OltpSql, 0.0, 0.4, true))
        .collect();

    let err = estimate(&tables, &six_host_raid5(), &zeros).unwrap_err();
    assert_eq!(err, EstimateError::EmptyDataset);
    assert_eq!(err.to_string(), "No workload data available");

    assert_eq!(estimate(&tables, &six_host_raid5(), &[]), Err(EstimateError::EmptyDataset));
}

#[test]
fn test_high_utilization_is_a_warning_only() {
    let tables = ReferenceTables::standard();
    // 80 TiB encrypted: no reduction, net 94.7 TiB of 96 TiB usable.
    let item = WorkloadItem::new("enc", WorkloadClass::Encrypted, 80.0, 0.5, true);
    let result = estimate(&tables, &six_host_raid5(), &[item]).unwrap();

    assert_close(result.net_effective, 94.7, 1e-9);
    assert_eq!(result.warnings.len(), 1);
    assert!(matches!(result.warnings[0], CapacityWarning::HighUtilization { .. }));
    assert_eq!(
        result.warnings[0].to_string(),
        "HIGH UTILIZATION: 98.6% of usable capacity (ESA recommends <85%)"
    );
    assert!(result.compliance.iter().all(|c| !c.to_string().contains("UTILIZATION")));
}

#[test]
fn test_capacity_violation() {
    let tables = ReferenceTables::standard();
    let config = ClusterConfig {
        hosts: 3,
        scheme: RedundancyScheme::Raid1,
        ..six_host_raid5()
    };
    let item = WorkloadItem::new("enc", WorkloadClass::Encrypted, 100.0, 0.0, true);
    let result = estimate(&tables, &config, &[item]).unwrap();

    // 100 + LFS on 200 TiB of object + replica + 2 TiB checksums.
    assert_close(result.net_effective, 128.2, 1e-9);
    assert_close(result.usable_raw_capacity, 30.0, 1e-12);
    assert!(matches!(result.warnings[0], CapacityWarning::CapacityViolation { .. }));
    assert!(matches!(result.warnings[1], CapacityWarning::HighUtilization { .. }));
    assert_eq!(
        result.warnings[0].to_string(),
        "CAPACITY VIOLATION: Net effective (128.2 TiB) exceeds usable raw (30.0 TiB)"
    );
    assert!(!result.compliance.contains(&ComplianceNote::AdaptiveErasureCodingSupported));
}

#[test]
fn test_aggressive_efficiency_flagged() {
    let tables = ReferenceTables::standard();
    let config = ClusterConfig {
        hosts: 64,
        raw_tib_per_host: 100.0,
        domain_mode: DomainMode::Aggressive,
        lfs_overhead_rate: 0.0,
        checksum_rate: 0.0,
        ..six_host_raid5()
    };
    let item = WorkloadItem::new("vdi", WorkloadClass::FullCloneVdi, 1000.0, 1.0, true);
    let result = estimate(&tables, &config, &[item]).unwrap();

    assert!(result.overall_reduction > 8.0);
    assert!(result
        .warnings
        .iter()
        .any(|w| matches!(w, CapacityWarning::AggressiveEfficiency { .. })));
}

#[test]
fn test_unknown_scheme_and_class_use_neutral_defaults() {
    let tables = ReferenceTables::standard();
    let config = ClusterConfig { scheme: RedundancyScheme::Unknown, ..six_host_raid5() };
    let item = WorkloadItem::new("x", WorkloadClass::Unknown, 50.0, 1.0, true);
    let result = estimate(&tables, &config, &[item]).unwrap();

    assert_close(result.raid_overhead, 1.25, 0.0);
    assert_eq!(result.scheme_description, "Unknown RAID");
    assert_eq!(result.scheme_encoding, "Unknown");
    assert_close(result.workloads[0].compression_factor, 1.0, 0.0);
    assert_close(result.workloads[0].dedupe_savings, 0.0, 0.0);
    assert!(!result.compliance.contains(&ComplianceNote::AdaptiveErasureCodingSupported));
}

#[test]
fn test_cold_pct_is_clamped() {
    let tables = ReferenceTables::standard();
    let workloads = [
        WorkloadItem::new("hi", WorkloadClass::Backup, 10.0, 1.7, true),
        WorkloadItem::new("lo", WorkloadClass::Backup, 10.0, -0.3, true),
    ];
    let result = estimate(&tables, &six_host_raid5(), &workloads).unwrap();

    assert_close(result.workloads[0].cold, result.workloads[0].compressed, 0.0);
    assert_close(result.workloads[1].cold, 0.0, 0.0);
    assert_close(result.workloads[1].dedupe_savings, 0.0, 0.0);
}

#[test]
fn test_checksum_ignores_replica_data() {
    let tables = ReferenceTables::standard();
    let mirror = ClusterConfig { scheme: RedundancyScheme::Raid1, ..six_host_raid5() };
    let ec = six_host_raid5();

    let a = estimate(&tables, &mirror, &[unstructured_100()]).unwrap();
    let b = estimate(&tables, &ec, &[unstructured_100()]).unwrap();

    assert_close(a.checksum_overhead, b.checksum_overhead, 1e-12);
    assert!(a.lfs_overhead > b.lfs_overhead);
}

#[test]
fn test_estimate_is_deterministic() {
    let tables = ReferenceTables::standard();
    let workloads = [
        WorkloadItem::new("vdi", WorkloadClass::FullCloneVdi, 80.0, 0.85, true),
        WorkloadItem::new("sql", WorkloadClass::OltpSql, 60.0, 0.4, true),
        unstructured_100(),
    ];
    let first = estimate(&tables, &six_host_raid5(), &workloads).unwrap();
    let second = estimate(&tables, &six_host_raid5(), &workloads).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.net_effective.to_bits(), second.net_effective.to_bits());
}
