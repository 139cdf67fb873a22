use super::{assert_close, six_host_raid5, unstructured_100};
use crate::sizing::{breakdown, estimate, waterfall, ReferenceTables, RowKind};

#[test]
fn test_breakdown_rows() {
    let tables = ReferenceTables::standard();
    let result = estimate(&tables, &six_host_raid5(), &[unstructured_100()]).unwrap();
    let rows = breakdown(&result, 6);

    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0].label, "Raw NVMe Capacity");
    assert_eq!(rows[0].detail, "All-flash NVMe across 6 ESA hosts");
    assert_eq!(rows[0].kind, RowKind::Capacity);
    assert_close(rows[0].value_tib, 120.0, 1e-12);

    assert_eq!(rows[1].detail, "After 2+1 or 4+1 Adaptive overhead");
    assert_eq!(rows[5].detail, "Local File System metadata (13.1%)");
    assert_eq!(rows[5].kind, RowKind::Overhead);

    let total = rows.last().unwrap();
    assert_eq!(total.kind, RowKind::Total);
    assert_close(total.value_tib, result.net_effective, 0.0);
    assert_eq!(total.detail, "Final ESA storage consumption (71.8% utilization)");
}

#[test]
fn test_waterfall_stages() {
    let tables = ReferenceTables::standard();
    let result = estimate(&tables, &six_host_raid5(), &[unstructured_100()]).unwrap();
    let stages = waterfall(&result);

    let labels: Vec<&str> = stages.iter().map(|s| s.label).collect();
    assert_eq!(
        labels,
        vec!["Raw NVMe", "Usable Raw", "Logical Data", "Compressed", "After Dedupe", "Net Effective"]
    );
    assert_close(stages[2].value_tib, 100.0, 1e-12);
    assert_close(stages[3].value_tib, 62.5, 1e-12);
    assert!(stages[4].value_tib < stages[3].value_tib);
}
