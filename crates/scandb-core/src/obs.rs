//! Scan counters for observability surfaces.
//!
//! The engine is single-threaded, so counters live in thread-local cells.
//! Query execution records every scan through `record_scan`; consumers
//! read a point-in-time snapshot via `metrics_report`.

use serde::Serialize;
use std::cell::Cell;

thread_local! {
    static SCANS: Cell<u64> = const { Cell::new(0) };
    static ROWS_SCANNED: Cell<u64> = const { Cell::new(0) };
}

///
/// MetricsReport
///
/// Point-in-time snapshot of scan activity since the last reset.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct MetricsReport {
    pub scans: u64,
    pub rows_scanned: u64,
}

/// Record one linear scan over `rows` rows.
pub(crate) fn record_scan(rows: u64) {
    SCANS.with(|cell| cell.set(cell.get() + 1));
    ROWS_SCANNED.with(|cell| cell.set(cell.get() + rows));
}

/// Snapshot the counters.
#[must_use]
pub fn metrics_report() -> MetricsReport {
    MetricsReport {
        scans: SCANS.with(Cell::get),
        rows_scanned: ROWS_SCANNED.with(Cell::get),
    }
}

/// Reset all counters to zero.
pub fn metrics_reset() {
    SCANS.with(|cell| cell.set(0));
    ROWS_SCANNED.with(|cell| cell.set(0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::Product, query::find_by_id, record::Collection};

    #[test]
    fn scans_accumulate_and_reset() {
        let products = Collection::new(Product::catalog()).expect("catalog ids are unique");

        metrics_reset();
        let _ = find_by_id(&products, 1);
        let _ = products.query().count();

        let report = metrics_report();
        assert_eq!(report.scans, 2);
        assert_eq!(report.rows_scanned, 20);

        metrics_reset();
        assert_eq!(metrics_report(), MetricsReport::default());
    }
}
