//! Fixed-interval band lookup for likelihood, impact and risk score.
//!
//! Intervals are closed and use discrete cut points over continuous input,
//! so values that land between two intervals (for example a likelihood of
//! 0.205) fall through to the catch-all branch.

use super::band::{Band, LikelihoodBand};

/// Classify a likelihood in [0, 1].
pub fn classify_likelihood(value: f64) -> LikelihoodBand {
    match value {
        v if (0.01..=0.2).contains(&v) => LikelihoodBand::Rated(Band::VeryLow),
        v if (0.21..=0.4).contains(&v) => LikelihoodBand::Rated(Band::Low),
        v if (0.41..=0.6).contains(&v) => LikelihoodBand::Rated(Band::Medium),
        v if (0.61..=0.8).contains(&v) => LikelihoodBand::Rated(Band::High),
        v if (0.81..=1.0).contains(&v) => LikelihoodBand::Rated(Band::VeryHigh),
        _ => LikelihoodBand::Negligible,
    }
}

/// Classify a monetary impact.
pub fn classify_impact(value: f64) -> Band {
    match value {
        v if (100_000.0..=1_000_000.0).contains(&v) => Band::VeryLow,
        v if (1_000_001.0..=2_500_000.0).contains(&v) => Band::Low,
        v if (2_500_001.0..=5_000_000.0).contains(&v) => Band::Medium,
        v if (5_000_001.0..=10_000_000.0).contains(&v) => Band::High,
        _ => Band::VeryHigh,
    }
}

/// Classify a composite risk score (likelihood x impact).
pub fn classify_risk(value: f64) -> Band {
    match value {
        v if (1.0..=500_000.0).contains(&v) => Band::VeryLow,
        v if (500_001.0..=1_000_000.0).contains(&v) => Band::Low,
        v if (1_000_001.0..=2_500_000.0).contains(&v) => Band::Medium,
        v if (2_500_001.0..=5_000_000.0).contains(&v) => Band::High,
        _ => Band::VeryHigh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rated(band: Band) -> LikelihoodBand {
        LikelihoodBand::Rated(band)
    }

    #[test]
    fn test_likelihood_boundaries() {
        assert_eq!(classify_likelihood(0.01), rated(Band::VeryLow));
        assert_eq!(classify_likelihood(0.2), rated(Band::VeryLow));
        assert_eq!(classify_likelihood(0.21), rated(Band::Low));
        assert_eq!(classify_likelihood(0.4), rated(Band::Low));
        assert_eq!(classify_likelihood(0.41), rated(Band::Medium));
        assert_eq!(classify_likelihood(0.6), rated(Band::Medium));
        assert_eq!(classify_likelihood(0.61), rated(Band::High));
        assert_eq!(classify_likelihood(0.8), rated(Band::High));
        assert_eq!(classify_likelihood(0.81), rated(Band::VeryHigh));
        assert_eq!(classify_likelihood(1.0), rated(Band::VeryHigh));
    }

    #[test]
    fn test_likelihood_gaps_are_negligible() {
        for v in [0.0, 0.0099, 0.2001, 0.205, 0.2099, 0.4050, 0.6001, 0.8099, 1.0001] {
            assert_eq!(classify_likelihood(v), LikelihoodBand::Negligible, "{}", v);
        }
    }

    #[test]
    fn test_impact_boundaries() {
        assert_eq!(classify_impact(100_000.0), Band::VeryLow);
        assert_eq!(classify_impact(1_000_000.0), Band::VeryLow);
        assert_eq!(classify_impact(1_000_001.0), Band::Low);
        assert_eq!(classify_impact(2_500_000.0), Band::Low);
        assert_eq!(classify_impact(2_500_001.0), Band::Medium);
        assert_eq!(classify_impact(5_000_000.0), Band::Medium);
        assert_eq!(classify_impact(5_000_001.0), Band::High);
        assert_eq!(classify_impact(10_000_000.0), Band::High);
        assert_eq!(classify_impact(10_000_000.01), Band::VeryHigh);
        assert_eq!(classify_impact(20_000_000.0), Band::VeryHigh);
    }

    #[test]
    fn test_impact_gap_falls_through_to_very_high() {
        assert_eq!(classify_impact(1_000_000.5), Band::VeryHigh);
    }

    #[test]
    fn test_risk_boundaries() {
        assert_eq!(classify_risk(1.0), Band::VeryLow);
        assert_eq!(classify_risk(500_000.0), Band::VeryLow);
        assert_eq!(classify_risk(500_001.0), Band::Low);
        assert_eq!(classify_risk(1_000_000.0), Band::Low);
        assert_eq!(classify_risk(1_000_001.0), Band::Medium);
        assert_eq!(classify_risk(2_500_000.0), Band::Medium);
        assert_eq!(classify_risk(2_500_001.0), Band::High);
        assert_eq!(classify_risk(5_000_000.0), Band::High);
        assert_eq!(classify_risk(5_000_000.01), Band::VeryHigh);
    }

    #[test]
    fn test_risk_below_one_falls_through() {
        // A zero likelihood yields a zero score, which the catch-all rates Very High.
        assert_eq!(classify_risk(0.0), Band::VeryHigh);
        assert_eq!(classify_risk(500_000.5), Band::VeryHigh);
    }
}
