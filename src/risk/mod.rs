//! Risk records and their qualitative classification
//!
//! Provides:
//! - Ordinal bands and the risk-band palette
//! - Likelihood / impact / risk score classifiers
//! - The `RiskRecord` carried through the pipeline

mod band;
mod classify;
mod record;

pub use band::*;
pub use classify::*;
pub use record::*;
