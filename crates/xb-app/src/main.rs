use std::io::{self, BufWriter};

use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod config;
pub mod viewer;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config, puis appliquer les overrides CLI
    let config = cli.resolve_config()?;
    log::debug!("Configuration : {config:?}");

    // 4. Afficher chaque entrée, dans l'ordre
    let inputs = cli.inputs();
    let stdout = BufWriter::new(io::stdout().lock());
    let summary = viewer::Viewer::new(stdout, config).run(&inputs)?;

    if summary.failed > 0 {
        anyhow::bail!(
            "{} entrée(s) sur {} n'ont pas pu être affichées",
            summary.failed,
            inputs.len()
        );
    }
    Ok(())
}
