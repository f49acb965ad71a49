//! A single synthetic risk and the attributes derived for it by each stage.

use super::band::{Band, LikelihoodBand, Rgb};
use super::classify::{classify_impact, classify_likelihood, classify_risk};
use crate::quintile::Quintile;

/// Round to a fixed number of decimal places.
pub fn round_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// One entry of the synthetic risk register.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskRecord {
    /// Probability of occurrence, 4 decimal places
    pub likelihood: f64,
    /// Monetary impact, 2 decimal places
    pub impact: f64,
    /// likelihood x impact, 2 decimal places
    pub risk_score: f64,
    pub likelihood_band: LikelihoodBand,
    pub impact_band: Band,
    pub risk_band: Band,
    /// Set by the layout stage; `None` before layout and for negligible likelihoods
    pub likelihood_jitter: Option<f64>,
    /// Set by the layout stage
    pub impact_jitter: Option<f64>,
    /// Set by the quintile stage
    pub risk_quintile: Option<Quintile>,
}

impl RiskRecord {
    /// Build a classified record from already-rounded likelihood and impact.
    ///
    /// The risk score is derived from the rounded inputs.
    pub fn from_measures(likelihood: f64, impact: f64) -> Self {
        let risk_score = round_dp(likelihood * impact, 2);
        Self {
            likelihood,
            impact,
            risk_score,
            likelihood_band: classify_likelihood(likelihood),
            impact_band: classify_impact(impact),
            risk_band: classify_risk(risk_score),
            likelihood_jitter: None,
            impact_jitter: None,
            risk_quintile: None,
        }
    }

    /// Grid row of the likelihood band.
    pub fn likelihood_num(&self) -> Option<usize> {
        self.likelihood_band.index()
    }

    /// Grid column of the impact band.
    pub fn impact_num(&self) -> usize {
        self.impact_band.index()
    }

    /// Marker fill color, fixed by risk band.
    pub fn base_color(&self) -> Rgb {
        self.risk_band.color()
    }

    /// Marker opacity, fixed by risk quintile.
    pub fn alpha(&self) -> Option<f64> {
        self.risk_quintile.map(|q| q.alpha())
    }

    /// Plot position `(impact_jitter, likelihood_jitter)` once laid out.
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.impact_jitter?, self.likelihood_jitter?))
    }
}
