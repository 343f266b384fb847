//! Tessera analysis crate - disagreement records and offline reports.

mod log;
mod record;
mod report;

pub use log::{append_record, load_log, LoadedLog, LogError};
pub use record::{classify_severity, DirectionScore, Disagreement, DisagreementSeverity};
pub use report::{summarize, worst, DisagreementReport};
