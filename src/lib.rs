//! Synthetic Risk Matrix
//!
//! Generates a synthetic risk register, classifies each risk's likelihood,
//! impact and composite score into qualitative bands, and renders a
//! jittered 5x5 risk matrix colored by risk band and shaded by
//! risk-score quintile.
//!
//! # Modules
//!
//! - `risk`: Bands, palette, classifiers and the `RiskRecord` type
//! - `sampler`: Uniform likelihood/impact generation
//! - `quintile`: Equal-frequency risk score binning and opacity
//! - `layout`: Jittered grid placement
//! - `render`: Layer aggregation and chart output
//! - `pipeline`: End-to-end orchestration and population summary
//! - `config`: Run and chart settings
//!
//! # Example
//!
//! ```no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use risk_matrix::{render_population, RenderConfig, RiskMatrix};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let population = RiskMatrix::new().run(&mut rng).unwrap();
//! population.summary().print_summary();
//! render_population(&population, &RenderConfig::default()).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod quintile;
pub mod render;
pub mod risk;
pub mod sampler;

pub use config::{load_config, AppConfig, RenderConfig};
pub use error::{MatrixError, Result};
pub use layout::{LayoutMapper, JITTER_STRENGTH};
pub use pipeline::{Population, PopulationSummary, RiskMatrix};
pub use quintile::{Quintile, QuintileBinner, QuintileEdges};
pub use render::{build_layers, render_population, render_svg_string, Layer};
pub use risk::{
    classify_impact, classify_likelihood, classify_risk, Band, LikelihoodBand, Rgb, RiskRecord,
};
pub use sampler::{Sampler, POPULATION_SIZE};
