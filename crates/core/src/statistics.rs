//! # Statistics Aggregator
//!
//! Pure reducers from raw attendance marks and assignment results to the
//! summary records dashboards render. Records are only read, never changed,
//! and degenerate input (nothing to count, a zero maximum grade) produces
//! zeros or absent values instead of errors.

pub mod attendance;
pub mod results;

pub use attendance::{aggregate_attendance, AttendanceStatistics};
pub use results::{aggregate_results, ResultsStatistics};

/// `part / whole`, or 0 when there is nothing to divide by.
pub(crate) fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
