use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use xb_source::Input;

use crate::config::{ViewConfig, load_config};

/// xbmbraille — affiche des images XBM en caractères Braille.
#[allow(clippy::struct_excessive_bools)]
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fichiers XBM à afficher, dans l'ordre. `-` lit l'entrée standard.
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Inverser l'image : les points dessinent l'encre plutôt que le fond.
    #[arg(short, long, default_value_t = false)]
    pub negate: bool,

    /// Effacer le terminal avant chaque image.
    #[arg(short, long, default_value_t = false)]
    pub clear: bool,

    /// Afficher le nom de l'entrée avant chaque image.
    #[arg(short, long, default_value_t = false)]
    pub print_name: bool,

    /// Pause après chaque image (ex. `500ms`, `1.5s`).
    #[arg(short, long, value_name = "DURATION", value_parser = humantime::parse_duration)]
    pub delay: Option<Duration>,

    /// Fichier de configuration TOML (table `[view]`).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Merge the config file (if any) with the command-line flags.
    ///
    /// Flags can only switch features on; `--delay` replaces the configured
    /// delay.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    pub fn resolve_config(&self) -> Result<ViewConfig> {
        let mut config = match self.config.as_deref() {
            Some(path) => load_config(path)?,
            None => ViewConfig::default(),
        };
        config.negate |= self.negate;
        config.clear |= self.clear;
        config.print_name |= self.print_name;
        if let Some(delay) = self.delay {
            config.delay = delay;
        }
        Ok(config)
    }

    /// Inputs in command-line order.
    #[must_use]
    pub fn inputs(&self) -> Vec<Input> {
        self.inputs.iter().cloned().map(Input::from).collect()
    }
}
