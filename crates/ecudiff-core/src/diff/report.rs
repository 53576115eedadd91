//! Report assembler.
//!
//! Walks base ECUs in id order, diffs each against its counterpart and
//! collects the non-empty results.

use crate::config::DiffOptions;
use crate::diff::engine;
use crate::diff::model::{DiffReport, ReportIdentity};
use crate::model::Snapshot;
use std::time::Instant;

/// Compare two snapshots
///
/// ECUs absent from `other` are skipped and contribute nothing.
pub fn compare(base: &Snapshot, other: &Snapshot, options: &DiffOptions) -> DiffReport {
    let started = Instant::now();
    crate::log_op_start!("compare", ecu_count = base.len());

    let mut ecus = Vec::new();
    for base_ecu in base.ecus() {
        let Some(other_ecu) = other.get(&base_ecu.id) else {
            tracing::debug!(
                component = module_path!(),
                ecu_id = %base_ecu.id,
                "ECU absent from other snapshot, skipping"
            );
            continue;
        };

        tracing::info!(
            component = module_path!(),
            ecu_id = %base_ecu.id,
            "Analyzing ECU {} - {}",
            base_ecu.id,
            base_ecu.name
        );
        ecus.extend(engine::diff_ecu(base_ecu, other_ecu, options));
    }

    let identity = ReportIdentity {
        base_digest: base.source_digest().map(str::to_string),
        other_digest: other.source_digest().map(str::to_string),
    };
    let report = DiffReport::new(identity, ecus);

    crate::log_op_end!(
        "compare",
        duration_ms = started.elapsed().as_millis() as u64,
        ecu_count = report.ecus.len(),
        table_count = report.table_count(),
        row_count = report.row_count()
    );
    report
}
