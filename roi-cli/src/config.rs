//! Loading the engine configuration file.

use std::path::Path;

use anyhow::{Context, Result};
use roi_core::EngineConfig;
use tracing::debug;

/// Reads `path` as TOML, or returns the defaults when no path is given.
pub fn load_engine_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config = EngineConfig::from_toml_str(&contents)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;

    debug!(?config, path = %path.display(), "engine config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn no_path_yields_defaults() {
        assert_eq!(load_engine_config(None).unwrap(), EngineConfig::default());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_engine_config(Some(Path::new("/nonexistent/roi.toml"))).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed to read config: /nonexistent/roi.toml"
        );
    }
}
