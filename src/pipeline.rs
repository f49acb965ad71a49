//! End-to-end risk matrix pipeline
//!
//! sample -> classify -> bucket -> lay out. Rendering is a separate step
//! driven by [`crate::render::render_population`].

use crate::error::Result;
use crate::layout::LayoutMapper;
use crate::quintile::{Quintile, QuintileBinner, QuintileEdges};
use crate::render::{build_layers, Layer};
use crate::risk::{Band, LikelihoodBand, RiskRecord};
use crate::sampler::Sampler;
use rand::Rng;
use std::collections::BTreeMap;
use std::fmt;
use tracing::info;

/// Pipeline stages bundled together
#[derive(Debug, Clone, Default)]
pub struct RiskMatrix {
    sampler: Sampler,
    binner: QuintileBinner,
    layout: LayoutMapper,
}

impl RiskMatrix {
    /// Pipeline for the standard population size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline for a custom population size (at least 5).
    pub fn with_size(size: usize) -> Result<Self> {
        Ok(Self {
            sampler: Sampler::new(size)?,
            ..Default::default()
        })
    }

    /// Sample a fresh population and run it through every stage.
    pub fn run(&self, rng: &mut impl Rng) -> Result<Population> {
        info!("Sampling {} synthetic risks", self.sampler.size());
        let records = self.sampler.sample(rng);
        self.process(records, rng)
    }

    /// Bucket and lay out an already-classified set of records.
    pub fn process(&self, mut records: Vec<RiskRecord>, rng: &mut impl Rng) -> Result<Population> {
        let edges = self.binner.assign(&mut records)?;
        self.layout.place(&mut records, rng);

        let population = Population { records, edges };
        info!(
            "Built population of {} records ({} plotted)",
            population.len(),
            population.plotted()
        );
        Ok(population)
    }
}

/// A fully processed population
#[derive(Debug, Clone)]
pub struct Population {
    records: Vec<RiskRecord>,
    edges: QuintileEdges,
}

impl Population {
    pub fn records(&self) -> &[RiskRecord] {
        &self.records
    }

    pub fn edges(&self) -> &QuintileEdges {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records with a grid position.
    pub fn plotted(&self) -> usize {
        self.records.iter().filter(|r| r.position().is_some()).count()
    }

    /// Records grouped by shared style, ready to draw.
    pub fn layers(&self) -> Vec<Layer> {
        build_layers(&self.records)
    }

    pub fn summary(&self) -> PopulationSummary {
        PopulationSummary::from_population(self)
    }
}

/// Band and quintile counts over a population
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationSummary {
    pub size: usize,
    pub likelihood_counts: BTreeMap<LikelihoodBand, usize>,
    pub impact_counts: BTreeMap<Band, usize>,
    pub risk_counts: BTreeMap<Band, usize>,
    pub quintile_counts: BTreeMap<Quintile, usize>,
    pub edges: [f64; 6],
    /// Records left off the chart (negligible likelihood)
    pub unplotted: usize,
}

impl PopulationSummary {
    pub fn from_population(population: &Population) -> Self {
        let mut likelihood_counts = BTreeMap::new();
        let mut impact_counts: BTreeMap<Band, usize> = Band::ALL.iter().map(|b| (*b, 0)).collect();
        let mut risk_counts = impact_counts.clone();
        let mut quintile_counts: BTreeMap<Quintile, usize> =
            Quintile::ALL.iter().map(|q| (*q, 0)).collect();

        for band in Band::ALL {
            likelihood_counts.insert(LikelihoodBand::Rated(band), 0);
        }
        likelihood_counts.insert(LikelihoodBand::Negligible, 0);

        for record in population.records() {
            *likelihood_counts.entry(record.likelihood_band).or_insert(0) += 1;
            *impact_counts.entry(record.impact_band).or_insert(0) += 1;
            *risk_counts.entry(record.risk_band).or_insert(0) += 1;
            if let Some(q) = record.risk_quintile {
                *quintile_counts.entry(q).or_insert(0) += 1;
            }
        }

        Self {
            size: population.len(),
            likelihood_counts,
            impact_counts,
            risk_counts,
            quintile_counts,
            edges: *population.edges().edges(),
            unplotted: population.len() - population.plotted(),
        }
    }

    pub fn print_summary(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for PopulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Population: {} records ({} not plotted)", self.size, self.unplotted)?;

        writeln!(f, "\n{:<12} {:>10} {:>10} {:>10}", "Band", "Likelihood", "Impact", "Risk")?;
        for band in Band::ALL {
            writeln!(
                f,
                "{:<12} {:>10} {:>10} {:>10}",
                band.label(),
                self.likelihood_counts.get(&LikelihoodBand::Rated(band)).unwrap_or(&0),
                self.impact_counts.get(&band).unwrap_or(&0),
                self.risk_counts.get(&band).unwrap_or(&0),
            )?;
        }
        writeln!(
            f,
            "{:<12} {:>10} {:>10} {:>10}",
            "Negligible",
            self.likelihood_counts.get(&LikelihoodBand::Negligible).unwrap_or(&0),
            "-",
            "-"
        )?;

        writeln!(f, "\n{:<4} {:>16} {:>16} {:>8} {:>6}", "Q", "From", "To", "Count", "Alpha")?;
        for q in Quintile::ALL {
            writeln!(
                f,
                "{:<4} {:>16.2} {:>16.2} {:>8} {:>6.2}",
                q.to_string(),
                self.edges[q.index()],
                self.edges[q.index() + 1],
                self.quintile_counts.get(&q).unwrap_or(&0),
                q.alpha()
            )?;
        }
        Ok(())
    }
}
