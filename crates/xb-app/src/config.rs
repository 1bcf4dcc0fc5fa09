use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Options d'affichage du visualiseur.
///
/// Lues depuis une table TOML `[view]`, puis complétées par la ligne de
/// commande. Tout est désactivé par défaut.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewConfig {
    /// Dessiner l'encre plutôt que le fond.
    pub negate: bool,
    /// Effacer le terminal avant chaque image.
    pub clear: bool,
    /// Afficher le nom de l'entrée avant chaque image.
    pub print_name: bool,
    /// Pause après chaque image.
    pub delay: Duration,
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    view: Option<ViewSection>,
}

/// View section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ViewSection {
    negate: Option<bool>,
    clear: Option<bool>,
    print_name: Option<bool>,
    /// Same syntax as `--delay`: `"500ms"`, `"1.5s"`.
    delay: Option<String>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<ViewConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))
}

fn parse_config(content: &str) -> Result<ViewConfig> {
    let file: ConfigFile = toml::from_str(content)?;

    let mut config = ViewConfig::default();
    let Some(v) = file.view else {
        log::debug!("Pas de table [view], valeurs par défaut");
        return Ok(config);
    };
    if let Some(x) = v.negate {
        config.negate = x;
    }
    if let Some(x) = v.clear {
        config.clear = x;
    }
    if let Some(x) = v.print_name {
        config.print_name = x;
    }
    if let Some(x) = v.delay {
        config.delay = humantime::parse_duration(&x)
            .with_context(|| format!("Délai invalide « {x} »"))?;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_section_keeps_defaults() {
        let config = parse_config("[view]\nnegate = true\n").unwrap();
        assert!(config.negate);
        assert!(!config.clear);
        assert!(!config.print_name);
        assert_eq!(config.delay, Duration::ZERO);
    }

    #[test]
    fn missing_section_is_default() {
        assert_eq!(parse_config("").unwrap(), ViewConfig::default());
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(parse_config("[view]\nnegative = true\n").is_err());
        assert!(parse_config("[view]\ndelay_ms = 250\n").is_err());
    }

    #[test]
    fn delay_uses_duration_syntax() {
        let config = parse_config("[view]\ndelay = \"1.5s\"\n").unwrap();
        assert_eq!(config.delay, Duration::from_millis(1500));
        let err = parse_config("[view]\ndelay = \"500\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("Délai invalide"), "{err:#}");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[view]\nclear = true\nprint_name = true\ndelay = \"250ms\"").unwrap();
        let config = load_config(file.path()).unwrap();
        assert!(config.clear && config.print_name);
        assert_eq!(config.delay, Duration::from_millis(250));
    }

    #[test]
    fn missing_file_mentions_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("absent.toml"));
    }
}
