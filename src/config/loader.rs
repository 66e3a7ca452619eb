use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::RoiConfig;
use crate::errors::RoiError;

pub const CONFIG_FILE_NAME: &str = ".leadgen-roi.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// A configuration together with where it came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedConfig {
    pub config: RoiConfig,
    /// `None` when no file was found and defaults are in effect.
    pub source: Option<PathBuf>,
}

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<RoiConfig, RoiError> {
    let config = toml::from_str::<RoiConfig>(contents)
        .map_err(|e| RoiError::config(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// Load a config file the user asked for explicitly. Any failure is an error.
pub fn load_config_from_path(path: &Path) -> Result<LoadedConfig, RoiError> {
    let contents = read_config_file(path).map_err(|e| RoiError::io(path, e))?;
    let config = parse_and_validate_config(&contents).map_err(|e| e.with_path(path))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(LoadedConfig {
        config,
        source: Some(path.to_path_buf()),
    })
}

/// Try loading a discovered config file; problems are logged, not fatal.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<LoadedConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(LoadedConfig {
                config,
                source: Some(config_path.to_path_buf()),
            })
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the nearest config file.
pub fn discover_config(start: &Path) -> LoadedConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            LoadedConfig::default()
        })
}

/// Load the config relevant to the current directory.
pub fn load_config() -> LoadedConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(&dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            LoadedConfig::default()
        }
    }
}
