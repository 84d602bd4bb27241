use std::path::PathBuf;

use clap::Parser;
use neo_impact_calculator::export::nearest::{render_table, write_csv};
use neo_impact_calculator::export::writer_for_path;

#[path = "common/mod.rs"]
mod common;

/// Rank catalog objects by their closest recorded approach to Earth.
#[derive(Parser, Debug)]
#[command(author, version, about = "Closest-approach ranking for NeoWs feeds")]
struct Cli {
    /// Number of objects to list
    #[arg(long, default_value_t = 5)]
    count: usize,

    /// NeoWs feed files or directories of `*.json` feeds (defaults to the built-in sample)
    #[arg(long = "feed")]
    feeds: Vec<PathBuf>,

    /// Write the ranking as CSV to this path (`-` for stdout) instead of printing a table
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    common::init_tracing();
    let cli = Cli::parse();

    let catalog = common::load_catalog(&cli.feeds)?;
    let ranking = catalog.nearest_approaches(cli.count);

    if let Some(path) = &cli.csv {
        let writer = writer_for_path(path)?;
        write_csv(writer, &ranking)?;
        return Ok(());
    }

    if ranking.is_empty() {
        println!("No asteroids with close approach data found in the dataset.");
        return Ok(());
    }

    println!("--- DATASET ANALYSIS: TOP {} NEAREST ASTEROIDS ---", ranking.len());
    print!("{}", render_table(&ranking));
    Ok(())
}
