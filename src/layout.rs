//! Grid placement with jitter
//!
//! Each record sits at its (impact, likelihood) band indices plus uniform
//! noise so that points sharing a cell do not overplot. Jitter is purely
//! visual and never feeds back into classification or shading.

use crate::risk::RiskRecord;
use rand::Rng;
use rand_distr::Uniform;
use tracing::debug;

/// Maximum displacement from the integer grid position
pub const JITTER_STRENGTH: f64 = 0.45;

/// Places records on the 5x5 grid
#[derive(Debug, Clone)]
pub struct LayoutMapper {
    noise: Uniform<f64>,
}

impl Default for LayoutMapper {
    fn default() -> Self {
        Self {
            noise: Uniform::new(-JITTER_STRENGTH, JITTER_STRENGTH),
        }
    }
}

impl LayoutMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jittered coordinate for an ordinal index.
    pub fn jitter(&self, index: usize, rng: &mut impl Rng) -> f64 {
        index as f64 + rng.sample(self.noise)
    }

    /// Set `impact_jitter` and `likelihood_jitter` on every record.
    ///
    /// All impact offsets are drawn first, then all likelihood offsets.
    /// Negligible likelihoods have no grid row and stay unplaced.
    pub fn place(&self, records: &mut [RiskRecord], rng: &mut impl Rng) {
        for record in records.iter_mut() {
            record.impact_jitter = Some(self.jitter(record.impact_num(), rng));
        }

        let mut unplaced = 0;
        for record in records.iter_mut() {
            record.likelihood_jitter = match record.likelihood_num() {
                Some(index) => Some(self.jitter(index, rng)),
                None => {
                    unplaced += 1;
                    None
                }
            };
        }

        debug!(
            "Placed {} records, {} with negligible likelihood left off the grid",
            records.len() - unplaced,
            unplaced
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_jitter_stays_within_strength() {
        let mapper = LayoutMapper::new();
        let mut rng = StdRng::seed_from_u64(1);
        for index in 0..5 {
            for _ in 0..2000 {
                let x = mapper.jitter(index, &mut rng);
                assert!((x - index as f64).abs() <= JITTER_STRENGTH);
            }
        }
    }

    #[test]
    fn test_place_skips_negligible_likelihood() {
        let mut records = vec![
            RiskRecord::from_measures(0.0, 500_000.0),
            RiskRecord::from_measures(0.7, 7_000_000.0),
        ];
        LayoutMapper::new().place(&mut records, &mut StdRng::seed_from_u64(3));

        assert!(records[0].impact_jitter.is_some());
        assert_eq!(records[0].likelihood_jitter, None);
        assert_eq!(records[0].position(), None);

        let (x, y) = records[1].position().unwrap();
        assert!((x - 3.0).abs() <= JITTER_STRENGTH);
        assert!((y - 3.0).abs() <= JITTER_STRENGTH);
    }

    #[test]
    fn test_jitter_does_not_touch_bands() {
        let mut records = vec![RiskRecord::from_measures(0.5, 2_000_000.0)];
        let before = records[0].clone();
        LayoutMapper::new().place(&mut records, &mut StdRng::seed_from_u64(9));

        assert_eq!(records[0].likelihood_band, before.likelihood_band);
        assert_eq!(records[0].impact_band, before.impact_band);
        assert_eq!(records[0].risk_band, before.risk_band);
        assert_eq!(records[0].risk_quintile, before.risk_quintile);
    }
}
