//! `TelemetryObserver<W>` — bridges `SimObserver` to a `TelemetryWriter`.

use hv_core::SimClock;
use hv_hazard::HazardSignal;
use hv_sim::{AgentSnapshot, SimObserver};

use crate::row::{HazardEventRow, TelemetryRow};
use crate::writer::TelemetryWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes snapshots and hazard events to any
/// [`TelemetryWriter`].
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check with
/// [`take_error`][Self::take_error].
pub struct TelemetryObserver<W: TelemetryWriter> {
    writer:     W,
    rows:       u64,
    events:     u64,
    last_error: Option<OutputError>,
}

impl<W: TelemetryWriter> TelemetryObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows:       0,
            events:     0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Telemetry rows handed to the writer so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Hazard events handed to the writer so far.
    pub fn events_written(&self) -> u64 {
        self.events
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TelemetryWriter> SimObserver for TelemetryObserver<W> {
    fn on_hazard_signal(&mut self, signal: &HazardSignal) {
        let result = self.writer.write_hazard_event(&HazardEventRow::from(signal));
        self.events += 1;
        self.store_err(result);
    }

    fn on_snapshot(&mut self, snapshot: &AgentSnapshot) {
        let result = self.writer.write_telemetry(&[TelemetryRow::from(snapshot)]);
        self.rows += 1;
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _clock: &SimClock) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
