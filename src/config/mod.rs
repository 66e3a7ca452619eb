mod core;
mod loader;

pub use self::core::{
    default_config_template, CalculationConfig, InputOverrides, OutputConfig, RoiConfig,
};

pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path,
    parse_and_validate_config, LoadedConfig, CONFIG_FILE_NAME,
};
