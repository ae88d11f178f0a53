use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::models::{BossId, SupplementalItem};

/// Optional overlay file. Absent file means pure compiled-in defaults.
pub const CONFIG_FILE: &str = "maple_drops.toml";

/// Boss pages scraped by default, in output order.
const DEFAULT_BOSSES: [&str; 13] = [
    "zakum-chaos",
    "hilla-hard",
    "pierre-chaos",
    "vonbon-chaos",
    "crimsonqueen-chaos",
    "vellum-chaos",
    "magnus-hard",
    "pinkbean-chaos",
    "cygnus-easy",
    "cygnus-normal",
    "papulatus-chaos",
    "lotus-normal",
    "damien-normal",
];

const NESO_IMAGE_URL: &str = "https://msu.io/marketplace/images/neso.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Truncate the target file and write a header row plus all records.
    Overwrite,
    /// Add rows to the target file without repeating the header.
    Append,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Overwrite => write!(f, "overwrite"),
            OutputMode::Append => write!(f, "append"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_bosses")]
    pub bosses: Vec<BossId>,
    #[serde(default = "default_supplemental_items")]
    pub supplemental_items: Vec<SupplementalItem>,
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    #[serde(default = "default_output_mode")]
    pub output_mode: OutputMode,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            bosses: default_bosses(),
            supplemental_items: default_supplemental_items(),
            output_path: default_output_path(),
            output_mode: default_output_mode(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load the overlay file when present; every field falls back to its
    /// compiled-in default, so a partial file overrides just what it names.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .with_context(|| format!("Failed to read {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }
}

fn default_base_url() -> String {
    "https://maplen.gg".to_string()
}

fn default_bosses() -> Vec<BossId> {
    DEFAULT_BOSSES.iter().map(|&slug| BossId::from(slug)).collect()
}

fn default_supplemental_items() -> Vec<SupplementalItem> {
    vec![
        SupplementalItem {
            item_name: "neso (big)".to_string(),
            image_url: NESO_IMAGE_URL.to_string(),
        },
        SupplementalItem {
            item_name: "neso (small)".to_string(),
            image_url: NESO_IMAGE_URL.to_string(),
        },
    ]
}

fn default_output_path() -> PathBuf {
    PathBuf::from("boss_items.csv")
}

fn default_output_mode() -> OutputMode {
    OutputMode::Overwrite
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn defaults_match_the_fixed_roster() {
        let config = Config::default();

        assert_eq!(config.bosses.len(), 13);
        assert_eq!(config.bosses[0], BossId::from("zakum-chaos"));
        assert_eq!(config.bosses[12], BossId::from("damien-normal"));
        assert_eq!(config.supplemental_items.len(), 2);
        assert_eq!(config.supplemental_items[0].item_name, "neso (big)");
        assert_eq!(config.supplemental_items[1].item_name, "neso (small)");
        assert_eq!(config.output_path, PathBuf::from("boss_items.csv"));
        assert_eq!(config.output_mode, OutputMode::Overwrite);
        assert_eq!(config.base_url, "https://maplen.gg");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.bosses.len(), 13);
        assert_eq!(config.output_mode, OutputMode::Overwrite);
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maple_drops.toml");
        fs::write(
            &path,
            "output_path = \"out/drops.csv\"\noutput_mode = \"append\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.output_path, PathBuf::from("out/drops.csv"));
        assert_eq!(config.output_mode, OutputMode::Append);
        // Everything else keeps its default.
        assert_eq!(config.bosses.len(), 13);
        assert_eq!(config.supplemental_items.len(), 2);
        assert_eq!(config.base_url, "https://maplen.gg");
    }

    #[test]
    fn full_surface_round_trips_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maple_drops.toml");
        fs::write(
            &path,
            r#"
base_url = "http://localhost:9000"
bosses = ["zakum-chaos", "hilla-hard"]
output_path = "drops.csv"
output_mode = "overwrite"
user_agent = "maple-drops-test"

[[supplemental_items]]
item_name = "mesos"
image_url = "https://example.com/mesos.png"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(
            config.bosses,
            vec![BossId::from("zakum-chaos"), BossId::from("hilla-hard")]
        );
        assert_eq!(config.supplemental_items.len(), 1);
        assert_eq!(config.supplemental_items[0].item_name, "mesos");
        assert_eq!(config.user_agent, "maple-drops-test");
    }
}
