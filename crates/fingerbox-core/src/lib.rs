//! # fingerbox core
//!
//! Types shared by every fingerbox crate: the error taxonomy raised when a
//! box description cannot be turned into geometry, and the measurement
//! system tag that travels with a box description.

pub mod error;
pub mod units;

pub use error::{BoxError, BoxResult};
pub use units::MeasurementSystem;
