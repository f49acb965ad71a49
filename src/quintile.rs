//! Equal-frequency binning of risk scores into quintiles
//!
//! Bin edges are the 0, 20, 40, 60, 80 and 100th percentiles of the
//! population, using linear interpolation between order statistics.
//! Intervals are right-closed, with the lowest edge belonging to the
//! first bin. Duplicate edges are kept as-is: a score equal to a repeated
//! edge goes to the lowest bin that edge closes, so an all-equal
//! population lands entirely in quintile 0.

use crate::error::{MatrixError, Result};
use crate::risk::RiskRecord;
use crate::sampler::MIN_POPULATION;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Opacity per quintile, lowest scores faintest
const QUINTILE_ALPHA: [f64; 5] = [0.30, 0.45, 0.55, 0.65, 0.75];

/// Equal-frequency bucket index, 0 (lowest scores) to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Quintile(u8);

impl Quintile {
    pub const ALL: [Quintile; 5] = [Quintile(0), Quintile(1), Quintile(2), Quintile(3), Quintile(4)];

    pub fn new(index: usize) -> Option<Self> {
        (index < 5).then(|| Quintile(index as u8))
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// Marker opacity for records in this quintile.
    pub fn alpha(&self) -> f64 {
        QUINTILE_ALPHA[self.index()]
    }
}

impl fmt::Display for Quintile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0 + 1)
    }
}

/// Percentile of sorted data with linear interpolation
fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }

    let idx = p * (sorted.len() - 1) as f64;
    let lower = idx.floor() as usize;
    let upper = idx.ceil() as usize;
    let frac = idx - lower as f64;

    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] + (sorted[upper] - sorted[lower]) * frac
    }
}

/// Quintile bin edges fitted to a population of scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuintileEdges {
    edges: [f64; 6],
}

impl QuintileEdges {
    /// Fit edges to a population of scores.
    pub fn fit(scores: &[f64]) -> Result<Self> {
        if scores.len() < MIN_POPULATION {
            return Err(MatrixError::PopulationTooSmall { size: scores.len() });
        }
        if let Some(index) = scores.iter().position(|s| !s.is_finite()) {
            return Err(MatrixError::NonFiniteScore { index });
        }

        let mut sorted = scores.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let mut edges = [0.0; 6];
        for (i, edge) in edges.iter_mut().enumerate() {
            *edge = percentile(&sorted, i as f64 / 5.0);
        }

        debug!("Quintile edges: {:?}", edges);
        Ok(Self { edges })
    }

    /// The six edges, lowest first.
    pub fn edges(&self) -> &[f64; 6] {
        &self.edges
    }

    /// Whether any two adjacent edges coincide, leaving an empty bin.
    pub fn has_duplicate_edges(&self) -> bool {
        self.edges.windows(2).any(|w| w[0] == w[1])
    }

    /// Bucket for a score.
    ///
    /// Scores outside the fitted range clamp to the first or last bin.
    pub fn bucket(&self, score: f64) -> Quintile {
        let above = self.edges[1..5].iter().filter(|&&e| e < score).count();
        Quintile(above as u8)
    }
}

/// Fits quintile edges over a population and tags every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuintileBinner;

impl QuintileBinner {
    pub fn new() -> Self {
        Self
    }

    /// Assign `risk_quintile` to every record and return the fitted edges.
    pub fn assign(&self, records: &mut [RiskRecord]) -> Result<QuintileEdges> {
        let scores: Vec<f64> = records.iter().map(|r| r.risk_score).collect();
        let edges = QuintileEdges::fit(&scores)?;

        for record in records.iter_mut() {
            record.risk_quintile = Some(edges.bucket(record.risk_score));
        }

        Ok(edges)
    }
}
