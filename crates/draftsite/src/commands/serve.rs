//! Wizard server command.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use draftsite_server::{WizardServer, WizardServerConfig};
use serde::Deserialize;

/// Configuration file structure (draftsite.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    server: ServerSettings,
}

#[derive(Debug, Deserialize)]
struct ServerSettings {
    #[serde(default = "default_host")]
    host: String,

    #[serde(default = "default_generation_delay_ms")]
    generation_delay_ms: u64,

    #[serde(default = "default_minify")]
    minify: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            generation_delay_ms: default_generation_delay_ms(),
            minify: default_minify(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_generation_delay_ms() -> u64 {
    3000
}
fn default_minify() -> bool {
    true
}

/// Load configuration from draftsite.toml if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the wizard server.
pub async fn run(config_path: &Path, port: u16, open: bool) -> Result<()> {
    tracing::info!("Starting wizard server on port {}", port);

    let file_config = load_config(config_path)?;

    let config = WizardServerConfig {
        host: file_config.server.host,
        port,
        open,
        generation_delay: Duration::from_millis(file_config.server.generation_delay_ms),
        minify_css: file_config.server.minify,
    };

    WizardServer::new(config).start().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_file_uses_defaults() {
        let config = load_config(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.generation_delay_ms, 3000);
        assert!(config.server.minify);
    }

    #[test]
    fn partial_config_fills_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draftsite.toml");
        fs::write(&path, "[server]\ngeneration_delay_ms = 500\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.server.generation_delay_ms, 500);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draftsite.toml");
        fs::write(&path, "[server\n").unwrap();

        assert!(load_config(&path).is_err());
    }
}
