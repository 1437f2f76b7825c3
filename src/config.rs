//! Configuration file loading.
//!
//! Settings live in `config.toml` under the user config directory, or in a
//! file passed with `--config`. Every key is optional. Problems never abort
//! start-up: they are returned as warnings and defaults are used instead.

use directories::ProjectDirs;
use macrosheet_core::SessionOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    session: Option<SessionSection>,
    log: Option<LogSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SessionSection {
    prompt: Option<String>,
    banner: Option<bool>,
    prompts: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LogSection {
    filter: Option<String>,
}

/// Resolved settings.
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub session: SessionOptions,
    /// `tracing` filter directive from `[log] filter`.
    pub log_filter: Option<String>,
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        let mut config = Config::default();
        if let Some(session) = file.session {
            if let Some(prompt) = session.prompt {
                config.session.prompt = prompt;
            }
            if let Some(banner) = session.banner {
                config.session.banner = banner;
            }
            if let Some(prompts) = session.prompts {
                config.session.prompts = prompts;
            }
        }
        config.log_filter = file
            .log
            .and_then(|log| log.filter)
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty());
        config
    }
}

/// Parse config file contents.
pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    Ok(toml::from_str::<ConfigFile>(content)?.into())
}

/// Load the config from `config_file`, or from the user config directory
/// when none is given. Returns the config and any warnings.
pub fn load_config(config_file: Option<&PathBuf>) -> (Config, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let Some(path) = config_file.cloned().or_else(user_config_path) else {
        return (Config::default(), warnings);
    };

    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (Config::default(), warnings);
    }

    match read_config(&path) {
        Ok(config) => (config, warnings),
        Err(warning) => {
            warnings.push(warning);
            (Config::default(), warnings)
        }
    }
}

fn read_config(path: &Path) -> Result<Config, String> {
    let meta = std::fs::metadata(path)
        .map_err(|err| format!("Failed to read metadata for {}: {}", path.display(), err))?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        return Err(format!(
            "Refusing to read {}: file too large ({} bytes, max {})",
            path.display(),
            meta.len(),
            MAX_CONFIG_FILE_BYTES
        ));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {}", path.display(), err))?;
    parse_config(&content).map_err(|err| format!("Failed to parse {}: {}", path.display(), err))
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "macrosheet")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}
