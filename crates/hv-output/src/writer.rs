//! The `TelemetryWriter` trait implemented by backend writers.

use crate::{HazardEventRow, OutputResult, TelemetryRow};

/// Sink for telemetry rows.
///
/// Errors are stored by [`TelemetryObserver`][crate::TelemetryObserver] and
/// retrieved with `take_error` after the run.
pub trait TelemetryWriter {
    /// Write a batch of telemetry rows.
    fn write_telemetry(&mut self, rows: &[TelemetryRow]) -> OutputResult<()>;

    /// Write one hazard event row.
    fn write_hazard_event(&mut self, row: &HazardEventRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
