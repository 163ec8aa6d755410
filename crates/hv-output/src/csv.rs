//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_telemetry.csv`
//! - `hazard_events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TelemetryWriter;
use crate::{HazardEventRow, OutputResult, TelemetryRow};

pub const TELEMETRY_FILE: &str = "agent_telemetry.csv";
pub const HAZARD_FILE: &str = "hazard_events.csv";

const TELEMETRY_HEADER: [&str; 15] = [
    "agent_id", "frame", "time_ms", "x", "y", "z", "health", "carried", "station",
    "hazard_phase", "hazard_mode", "repair_mode", "harvest_state", "leaf", "beam_on",
];

const HAZARD_HEADER: [&str; 4] = ["time_ms", "phase", "alert", "warning"];

/// Writes telemetry to two CSV files.
pub struct CsvWriter {
    telemetry: Writer<File>,
    hazards:   Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the output directory if needed, open both files, and write
    /// the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut telemetry = Writer::from_path(dir.join(TELEMETRY_FILE))?;
        telemetry.write_record(TELEMETRY_HEADER)?;

        let mut hazards = Writer::from_path(dir.join(HAZARD_FILE))?;
        hazards.write_record(HAZARD_HEADER)?;

        Ok(Self {
            telemetry,
            hazards,
            finished: false,
        })
    }
}

impl TelemetryWriter for CsvWriter {
    fn write_telemetry(&mut self, rows: &[TelemetryRow]) -> OutputResult<()> {
        for row in rows {
            self.telemetry.write_record(&[
                row.agent_id.to_string(),
                row.frame.to_string(),
                row.time_ms.to_string(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.y),
                format!("{:.3}", row.z),
                format!("{:.3}", row.health),
                row.carried.to_string(),
                row.station.to_string(),
                row.hazard_phase.to_owned(),
                row.hazard_mode.to_owned(),
                row.repair_mode.to_owned(),
                row.harvest_state.to_owned(),
                row.leaf.to_owned(),
                (row.beam_on as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_hazard_event(&mut self, row: &HazardEventRow) -> OutputResult<()> {
        self.hazards.write_record([
            row.time_ms.to_string().as_str(),
            row.phase,
            row.alert,
            row.warning,
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.telemetry.flush()?;
        self.hazards.flush()?;
        Ok(())
    }
}
