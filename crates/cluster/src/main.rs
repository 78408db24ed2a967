use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use cluster::{Cli, ClusterSimulation, SnapshotWriter, new_cluster};
use protodisk::FriedGrid;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.resolve().context("invalid configuration")?;

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!("run {} with seed {seed}", config.output.run_number);
    let mut rng = ChaChaRng::seed_from_u64(seed);

    let grid = FriedGrid::from_file(&config.disks.grid_path)
        .with_context(|| format!("failed to load FRIED grid {}", config.disks.grid_path.display()))?;
    info!("loaded {} grid rows", grid.len());

    let initial = new_cluster(&config, &mut rng)?;
    let snapshots = config.output.snapshots.then(|| config.run_directory());
    let summary_path = config.output.summary.clone();

    let mut simulation = ClusterSimulation::from_config(config, grid, initial)?;
    if let Some(directory) = snapshots {
        let writer = SnapshotWriter::new(&directory)
            .with_context(|| format!("failed to create {}", directory.display()))?;
        simulation = simulation.with_snapshots(writer);
    }

    let summary = simulation.run()?;
    println!("{summary}");

    if let Some(path) = summary_path {
        summary
            .write_json(&path)
            .with_context(|| format!("failed to write summary to {}", path.display()))?;
        info!("summary written to {}", path.display());
    }
    Ok(())
}
