//! findangular: pairwise angular-distance statistics for a star catalog.
//!
//! Reads a whitespace-delimited catalog (integer ID, right ascension in
//! degrees, declination in degrees per line), sweeps every unordered pair
//! across the requested number of worker threads, and prints the count,
//! mean, minimum, and maximum separation.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;

use angsep::{Catalog, Engine};

#[derive(Parser)]
#[command(name = "findangular")]
#[command(about = "Pairwise angular-distance statistics for a star catalog")]
#[command(version)]
struct Cli {
    /// Path to the catalog file (3 whitespace-delimited columns per line:
    /// id, ra, dec)
    catalog: PathBuf,

    /// Number of worker threads to use
    #[arg(short, long, default_value_t = 1)]
    threads: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let file = File::open(&cli.catalog)
        .with_context(|| format!("unable to open {}", cli.catalog.display()))?;
    let catalog = Catalog::from_reader(BufReader::new(file))
        .with_context(|| format!("unable to parse {}", cli.catalog.display()))?;
    println!("{} records read", catalog.len());

    info!("sweeping with {} worker thread(s)", cli.threads);
    let start = Instant::now();
    let stats = Engine::new(&catalog, cli.threads).run()?;
    info!("pair sweep finished in {:.3?}", start.elapsed());

    println!("Count = {}", stats.count);
    println!("Average distance found is {:.6}", stats.mean);
    println!("Minimum distance found is {:.6}", stats.min);
    println!("Maximum distance found is {:.6}", stats.max);
    Ok(())
}
