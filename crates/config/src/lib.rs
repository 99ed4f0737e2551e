pub mod schema;

pub use schema::{
    ChartConfig, HistoryConfig, ScalingConfig, SmoothingConfig, StyleConfig,
};

use std::path::{Path, PathBuf};
use trend_core::{ChartError, Result};

/// Load and validate configuration from a TOML file.  Returns
/// `ChartConfig::default()` if the file doesn't exist.
pub fn load(path: impl AsRef<Path>) -> Result<ChartConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(ChartConfig::default());
    }

    let raw = std::fs::read_to_string(path).map_err(|source| {
        tracing::error!("Cannot read config '{}': {source}", path.display());
        ChartError::Io { source }
    })?;

    parse(&raw)
}

/// Parse and validate configuration from TOML text.
pub fn parse(raw: &str) -> Result<ChartConfig> {
    let cfg: ChartConfig =
        toml::from_str(raw).map_err(|e| ChartError::Config(format!("TOML parse error: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("trend").join("trend.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = load("/nonexistent/trend/trend.toml").unwrap();
        assert_eq!(cfg, ChartConfig::default());
    }

    #[test]
    fn unreadable_path_is_io_error() {
        let dir = std::env::temp_dir();
        assert!(matches!(load(&dir), Err(ChartError::Io { .. })));
    }

    #[test]
    fn parse_rejects_invalid_values() {
        let err = parse("[smoothing]\nalpha = 2.0\n").unwrap_err();
        assert!(err.to_string().contains("alpha"));
    }

    #[test]
    fn parse_rejects_bad_toml() {
        assert!(matches!(parse("[smoothing"), Err(ChartError::Config(_))));
    }
}
