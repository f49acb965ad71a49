//! Risk matrix rendering
//!
//! - `layer`: aggregation of records into same-style point layers
//! - `chart`: plotters scatter chart with band ticks and legend

mod chart;
mod layer;

pub use chart::*;
pub use layer::*;
