//! `gd-output` — trajectory recording for geodrive simulations.
//!
//! | Type                   | Role                                              |
//! |------------------------|---------------------------------------------------|
//! | [`TrajectoryRow`]      | One sampled agent pose plus traversal state       |
//! | [`OutputWriter`]       | Backend trait                                     |
//! | [`CsvWriter`]          | Writes `trajectory.csv`                           |
//! | [`TrajectoryObserver`] | `gd_sim::SimObserver` that feeds a writer         |
//!
//! # Usage
//!
//! ```rust,ignore
//! use gd_output::{CsvWriter, TrajectoryObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TrajectoryObserver::new(writer, 10);
//! sim.run_frames(600, 16.0, &camera, &mut map, &mut obs);
//! sim.finish(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TrajectoryObserver;
pub use row::TrajectoryRow;
pub use writer::OutputWriter;
