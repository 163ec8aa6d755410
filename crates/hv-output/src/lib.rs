//! `hv-output` — telemetry writers for harvester runs.
//!
//! | Backend | Files created                                |
//! |---------|----------------------------------------------|
//! | CSV     | `agent_telemetry.csv`, `hazard_events.csv`   |
//!
//! Writers implement [`TelemetryWriter`] and are driven by
//! [`TelemetryObserver`], which implements `hv_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hv_output::{CsvWriter, TelemetryObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TelemetryObserver::new(writer);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TelemetryObserver;
pub use row::{HazardEventRow, TelemetryRow};
pub use writer::TelemetryWriter;
