//! Qualitative risk bands and their fixed visual palette.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal qualitative band shared by likelihood, impact and risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Band {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Band {
    /// All bands in ordinal order.
    pub const ALL: [Band; 5] = [
        Band::VeryLow,
        Band::Low,
        Band::Medium,
        Band::High,
        Band::VeryHigh,
    ];

    /// Ordinal index used as the matrix grid coordinate (Very Low = 0).
    pub fn index(&self) -> usize {
        match self {
            Band::VeryLow => 0,
            Band::Low => 1,
            Band::Medium => 2,
            Band::High => 3,
            Band::VeryHigh => 4,
        }
    }

    /// Band at a given ordinal index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Band::VeryLow => "Very Low",
            Band::Low => "Low",
            Band::Medium => "Medium",
            Band::High => "High",
            Band::VeryHigh => "Very High",
        }
    }

    /// Base marker color for a record whose risk score falls in this band.
    pub fn color(&self) -> Rgb {
        match self {
            Band::VeryLow => Rgb::new(0x00, 0x80, 0x00),
            Band::Low => Rgb::new(0xAD, 0xFF, 0x2F),
            Band::Medium => Rgb::new(0xFF, 0xFF, 0x00),
            Band::High => Rgb::new(0xFF, 0xA5, 0x00),
            Band::VeryHigh => Rgb::new(0x8B, 0x00, 0x00),
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Likelihood classification, which unlike impact and risk has an
/// out-of-band outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LikelihoodBand {
    Rated(Band),
    Negligible,
}

impl LikelihoodBand {
    /// The rated band, or `None` for a negligible likelihood.
    pub fn band(&self) -> Option<Band> {
        match self {
            LikelihoodBand::Rated(band) => Some(*band),
            LikelihoodBand::Negligible => None,
        }
    }

    /// Ordinal index, undefined for negligible likelihoods.
    pub fn index(&self) -> Option<usize> {
        self.band().map(|b| b.index())
    }

    pub fn is_negligible(&self) -> bool {
        matches!(self, LikelihoodBand::Negligible)
    }

    pub fn label(&self) -> &'static str {
        match self {
            LikelihoodBand::Rated(band) => band.label(),
            LikelihoodBand::Negligible => "Negligible",
        }
    }
}

impl fmt::Display for LikelihoodBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hex notation, e.g. `#8B0000`.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_order() {
        for (i, band) in Band::ALL.iter().enumerate() {
            assert_eq!(band.index(), i);
            assert_eq!(Band::from_index(i), Some(*band));
        }
        assert_eq!(Band::from_index(5), None);
    }

    #[test]
    fn test_palette() {
        assert_eq!(Band::VeryLow.color().hex(), "#008000");
        assert_eq!(Band::Low.color().hex(), "#ADFF2F");
        assert_eq!(Band::Medium.color().hex(), "#FFFF00");
        assert_eq!(Band::High.color().hex(), "#FFA500");
        assert_eq!(Band::VeryHigh.color().hex(), "#8B0000");
    }

    #[test]
    fn test_negligible_has_no_index() {
        assert_eq!(LikelihoodBand::Negligible.index(), None);
        assert_eq!(LikelihoodBand::Rated(Band::High).index(), Some(3));
        assert_eq!(LikelihoodBand::Negligible.to_string(), "Negligible");
        assert_eq!(LikelihoodBand::Rated(Band::VeryLow).to_string(), "Very Low");
    }
}
