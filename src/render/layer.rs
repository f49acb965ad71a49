//! Grouping of plotted records into same-style layers

use crate::quintile::Quintile;
use crate::risk::{Band, RiskRecord, Rgb};
use std::collections::BTreeMap;

/// Points sharing one fill color and opacity
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub risk_band: Band,
    pub quintile: Quintile,
    /// `(impact_jitter, likelihood_jitter)` positions
    pub points: Vec<(f64, f64)>,
}

impl Layer {
    pub fn color(&self) -> Rgb {
        self.risk_band.color()
    }

    pub fn alpha(&self) -> f64 {
        self.quintile.alpha()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Group placed records by `(quintile, risk band)`.
///
/// Layers come back ordered by quintile then band so the most severe
/// shading is drawn last. Records without a position or quintile are left out.
pub fn build_layers(records: &[RiskRecord]) -> Vec<Layer> {
    let mut groups: BTreeMap<(Quintile, Band), Vec<(f64, f64)>> = BTreeMap::new();

    for record in records {
        if let (Some(position), Some(quintile)) = (record.position(), record.risk_quintile) {
            groups
                .entry((quintile, record.risk_band))
                .or_default()
                .push(position);
        }
    }

    groups
        .into_iter()
        .map(|((quintile, risk_band), points)| Layer {
            risk_band,
            quintile,
            points,
        })
        .collect()
}
