//! Topology file: default shell and port map.
//!
//! ```yaml
//! shell: bash
//! ports:
//!   "1": eth0
//!   "2": eth1
//! ```
//!
//! The file can be YAML or JSON. The format comes from the file extension
//! unless the caller names one.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::directory::DeviceDirectory;
use crate::error::{Error, Result};

/// Serialization format of a topology file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Guess the format from a path's extension.
    pub fn detect_from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| Self::from_str(ext).ok())
    }
}

impl FromStr for ConfigFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            other => Err(Error::Config(format!("unsupported format `{}`", other))),
        }
    }
}

/// Node topology: which shell to use and how port labels map to devices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyConfig {
    /// Shell for the executor; the executor's default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,
    /// Port label to device map.
    #[serde(default)]
    pub ports: DeviceDirectory,
}

impl TopologyConfig {
    /// Load a topology file.
    ///
    /// `format` overrides detection from the extension.
    pub fn load(path: impl AsRef<Path>, format: Option<ConfigFormat>) -> Result<Self> {
        let path = path.as_ref();
        let format = resolve_format(path, format)?;
        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents, format)?;
        tracing::debug!(
            path = %path.display(),
            ports = config.ports.len(),
            shell = ?config.shell,
            "loaded topology"
        );
        Ok(config)
    }

    /// Parse a topology document.
    pub fn parse(contents: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Yaml => Ok(serde_yaml::from_str(contents)?),
            ConfigFormat::Json => Ok(serde_json::from_str(contents)?),
        }
    }

    /// Render the topology document.
    pub fn render(&self, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Yaml => Ok(serde_yaml::to_string(self)?),
            ConfigFormat::Json => {
                let mut text = serde_json::to_string_pretty(self)?;
                text.push('\n');
                Ok(text)
            }
        }
    }

    /// Write the topology back to disk.
    pub fn save(&self, path: impl AsRef<Path>, format: Option<ConfigFormat>) -> Result<()> {
        let path = path.as_ref();
        let format = resolve_format(path, format)?;
        fs::write(path, self.render(format)?)?;
        tracing::debug!(path = %path.display(), "saved topology");
        Ok(())
    }
}

fn resolve_format(path: &Path, format: Option<ConfigFormat>) -> Result<ConfigFormat> {
    format
        .or_else(|| ConfigFormat::detect_from_path(path))
        .ok_or_else(|| {
            Error::Config(format!(
                "unable to determine config format of {}",
                path.display()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert_eq!(
            ConfigFormat::detect_from_path(Path::new("topo.YML")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::detect_from_path(Path::new("topo.json")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(ConfigFormat::detect_from_path(Path::new("topo")), None);
        assert!(matches!("toml".parse::<ConfigFormat>(), Err(Error::Config(_))));
    }

    #[test]
    fn test_parse_yaml() {
        let config = TopologyConfig::parse(
            "shell: bash\nports:\n  \"1\": eth0\n  \"2\": eth1\n",
            ConfigFormat::Yaml,
        )
        .unwrap();
        assert_eq!(config.shell.as_deref(), Some("bash"));
        assert_eq!(config.ports.resolve("2").unwrap(), "eth1");
    }

    #[test]
    fn test_parse_json_without_shell() {
        let config = TopologyConfig::parse(r#"{"ports": {"1": "eth0"}}"#, ConfigFormat::Json).unwrap();
        assert_eq!(config.shell, None);
        assert_eq!(config.ports.len(), 1);
    }

    #[test]
    fn test_bad_document() {
        let err = TopologyConfig::parse("ports: [1, 2", ConfigFormat::Yaml).unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("topo.yaml");

        let mut config = TopologyConfig::default();
        config.ports.insert("1", "eth0");
        config.ports.insert("vlan10", "vlan10");
        config.save(&path, None).unwrap();

        let loaded = TopologyConfig::load(&path, None).unwrap();
        assert_eq!(loaded, config);

        let json_path = dir.path().join("topo.conf");
        assert!(config.save(&json_path, None).is_err());
        config.save(&json_path, Some(ConfigFormat::Json)).unwrap();
        assert_eq!(
            TopologyConfig::load(&json_path, Some(ConfigFormat::Json)).unwrap(),
            config
        );
    }
}
