//! Risk Matrix CLI
//!
//! Samples a synthetic risk register and renders it as a 5x5 risk matrix.
//!
//! Usage: cargo run --release -- --output risk_matrix.png --seed 42

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use risk_matrix::{load_config, render_population, PopulationSummary, RiskMatrix};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a synthetic 5x5 risk matrix")]
struct Args {
    /// Output image (.png or .svg)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed for a reproducible population
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with seed and render settings
    #[arg(short, long, default_value = "risk_matrix.toml")]
    config: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Write the effective settings to a TOML file
    #[arg(long)]
    save_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("risk_matrix=info".parse()?))
        .init();

    let args = Args::parse();

    let mut config = load_config(&args.config)?;
    if let Some(output) = args.output {
        config.render.output = output;
    }
    if let Some(width) = args.width {
        config.render.width = width;
    }
    if let Some(height) = args.height {
        config.render.height = height;
    }
    config.seed = args.seed.or(config.seed);
    let seed = config.seed;

    if let Some(path) = &args.save_config {
        config.save_to_file(path)?;
        println!("{}", format!("Saved settings to {}", path.display()).green());
    }

    println!("{}", "=== Synthetic Risk Matrix ===".bold());
    let mut rng = match seed {
        Some(seed) => {
            println!("Seed: {}", seed.to_string().cyan());
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let population = RiskMatrix::new().run(&mut rng)?;
    print_summary(&population.summary());

    render_population(&population, &config.render)?;
    println!(
        "\n{}",
        format!("Saved risk matrix to {}", config.render.output.display()).green()
    );

    Ok(())
}

fn print_summary(summary: &PopulationSummary) {
    println!("\n{}", "=== Population Summary ===".bold());
    summary.print_summary();

    if summary.unplotted > 0 {
        println!(
            "{}",
            format!(
                "  {} records with negligible likelihood are not plotted",
                summary.unplotted
            )
            .yellow()
        );
    }
}
