//! Output rendering (concatenated bundle, JSON run report)

pub mod concat;
pub mod report;

pub use concat::{concatenate, ConcatOutcome};
pub use report::write_report;
