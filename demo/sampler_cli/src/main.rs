//! Sampler demo CLI.
//!
//! A stand-in for a host integration layer: parses arguments, seeds a
//! random state, draws from one of the bounded distributions and prints
//! an empirical histogram.
//!
//! # Commands
//!
//! - `sampler exponential --min 1 --max 10 --parameter 2.5`
//! - `sampler gaussian --min 1 --max 10 --parameter 2.5`
//! - `sampler zipfian --min 1 --max 10 --exponent 1.5`
//!
//! Pass `--seed` for a reproducible run; without it the state is seeded
//! from OS entropy.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use sampler_core::dist::{Exponential, Gaussian, Zipfian};
use sampler_core::rng::{seed_state, Rand48};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Bounded non-uniform integer sampling demo
#[derive(Parser)]
#[command(name = "sampler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of samples to draw
    #[arg(short = 'n', long, global = true, default_value = "10000")]
    count: u64,

    /// Deterministic seed (defaults to OS entropy)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw from the exponential distribution (mass near min)
    Exponential {
        /// Lower bound (inclusive)
        #[arg(long)]
        min: i64,

        /// Upper bound (inclusive)
        #[arg(long)]
        max: i64,

        /// Rate parameter, > 0; max keeps residual probability exp(-parameter)
        #[arg(short, long)]
        parameter: f64,
    },

    /// Draw from the Gaussian distribution (mass around the midpoint)
    Gaussian {
        /// Lower bound (inclusive)
        #[arg(long)]
        min: i64,

        /// Upper bound (inclusive)
        #[arg(long)]
        max: i64,

        /// Spread bound, >= 2.0; larger values tighten the bell
        #[arg(short, long)]
        parameter: f64,
    },

    /// Draw from the Zipfian distribution (rank 1 at min)
    Zipfian {
        /// Lower bound (inclusive)
        #[arg(long)]
        min: i64,

        /// Upper bound (inclusive)
        #[arg(long)]
        max: i64,

        /// Zipf exponent, in [1.001, 1000.0]
        #[arg(short, long)]
        exponent: f64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => {
            info!(seed, "seeding deterministically");
            Rand48::seed_from_u64(seed)
        }
        None => seed_state().context("seeding from OS entropy")?,
    };

    let counts = match cli.command {
        Commands::Exponential {
            min,
            max,
            parameter,
        } => {
            let dist = Exponential::new(min, max, parameter)?;
            info!(min, max, parameter, "sampling exponential");
            draw(cli.count, || dist.sample(&mut rng))
        }
        Commands::Gaussian {
            min,
            max,
            parameter,
        } => {
            let dist = Gaussian::new(min, max, parameter)?;
            info!(min, max, parameter, "sampling gaussian");
            draw(cli.count, || dist.sample(&mut rng))
        }
        Commands::Zipfian { min, max, exponent } => {
            let dist = Zipfian::new(min, max, exponent)?;
            info!(min, max, exponent, "sampling zipfian");
            draw(cli.count, || dist.sample(&mut rng))
        }
    };

    print_histogram(&counts, cli.count);
    Ok(())
}

/// Draws `count` samples and tallies them by value.
fn draw(count: u64, mut sample: impl FnMut() -> i64) -> BTreeMap<i64, u64> {
    let mut counts = BTreeMap::new();
    for _ in 0..count {
        *counts.entry(sample()).or_insert(0u64) += 1;
    }
    counts
}

/// Prints one bar per distinct value, capped at the 20 most frequent.
fn print_histogram(counts: &BTreeMap<i64, u64>, total: u64) {
    const BAR_WIDTH: u64 = 60;

    let mut rows: Vec<(&i64, &u64)> = counts.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
    rows.truncate(20);
    rows.sort_by_key(|(value, _)| **value);

    let peak = rows.iter().map(|(_, n)| **n).max().unwrap_or(1);
    for (value, n) in rows {
        let bar = "#".repeat((n * BAR_WIDTH / peak) as usize);
        let share = 100.0 * *n as f64 / total as f64;
        println!("{value:>12} {n:>8} ({share:5.2}%) {bar}");
    }
    if counts.len() > 20 {
        println!("... {} further distinct values omitted", counts.len() - 20);
    }
}
