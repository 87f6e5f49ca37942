use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Defaults for the mdstat probe.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MdstatConfig {
    /// Report location when `--file` is not given
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Defaults for the envstats probe.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EnvstatsConfig {
    /// Warning levels used when `-w` is not given
    #[serde(default)]
    pub warn: Option<String>,

    /// Critical levels used when `-c` is not given
    #[serde(default)]
    pub crit: Option<String>,

    /// Append performance data without `-p`
    #[serde(default)]
    pub perfdata: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub mdstat: MdstatConfig,

    #[serde(default)]
    pub envstats: EnvstatsConfig,
}

impl Config {
    /// Load configuration based on priority:
    /// 1. Explicit path (with tilde expansion)
    /// 2. HOSTPROBE_CONFIG environment variable (with tilde expansion)
    /// 3. User config directory
    ///
    /// A missing file resolves to defaults: probes run on hosts that
    /// were never configured.
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::load_from(&expand_tilde(path));
        }

        if let Ok(env_path) = std::env::var("HOSTPROBE_CONFIG") {
            return Self::load_from(&expand_tilde(&env_path));
        }

        if let Some(config_dir) = dirs::config_dir() {
            return Self::load_from(&config_dir.join("hostprobe").join("config.toml"));
        }

        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}
