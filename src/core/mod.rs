//! Reconciliation, eligibility and ranking engine.

pub mod assembler;
pub mod columns;
pub mod eligibility;
pub mod index;
pub mod logic;
pub mod parser;
pub mod ranking;
pub mod zones;

pub use index::{IngestOutcome, IngestStats, VenueIndex};
pub use logic::{Report, ReportLogic, ReportParams};
pub use parser::{ParseFailure, ParsedRow};
