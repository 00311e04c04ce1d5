//! Weasel CLI - run the locked weasel program and print one line per generation.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use rand::Rng;

use locked_weasel::{Evolver, WeaselConfig, algorithms::locked::LockedWeasel};

#[derive(Parser, Debug)]
#[command(name = "weasel")]
#[command(about = "Dawkins' weasel program where correct positions lock in place")]
struct Args {
    /// Path to a TOML config file (defaults are used when omitted)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Target string (overrides config)
    #[arg(short = 't', long)]
    target: Option<String>,

    /// Symbols available for initialization and mutation (overrides config)
    #[arg(short = 'a', long)]
    alphabet: Option<String>,

    /// Offspring per generation (overrides config)
    #[arg(short = 'n', long)]
    offspring: Option<usize>,

    /// Per-position mutation probability (overrides config)
    #[arg(short = 'm', long)]
    mutation_rate: Option<f64>,

    /// RNG seed for a reproducible run
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Stop with an error after this many generations
    #[arg(long)]
    max_generations: Option<u64>,

    /// Only print the final summary
    #[arg(short = 'q', long)]
    quiet: bool,
}

impl Args {
    fn apply(&self, config: &mut WeaselConfig) {
        if let Some(target) = &self.target {
            config.target = target.clone();
        }
        if let Some(alphabet) = &self.alphabet {
            config.alphabet = alphabet.clone();
        }
        if let Some(offspring) = self.offspring {
            config.offspring = offspring;
        }
        if let Some(rate) = self.mutation_rate {
            config.mutation_rate = rate;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.max_generations.is_some() {
            config.max_generations = self.max_generations;
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => WeaselConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => WeaselConfig::default(),
    };
    args.apply(&mut config);
    config.validate().context("invalid configuration")?;

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!("using seed {seed}");

    let mut weasel = LockedWeasel::new(&config, seed)?;
    let generations = weasel.run(config.max_generations, |report| {
        if !args.quiet {
            println!("{report}");
        }
    })?;

    println!(
        "Reached {:?} after {generations} generations (seed {seed})",
        weasel.target().to_string()
    );
    Ok(())
}
