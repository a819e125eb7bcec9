//! Configuration constants and default value functions.

/// File name looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = ".overlay-lint.yaml";

/// Default extension probe order for base paths.
pub fn default_extensions() -> Vec<String> {
    ["", ".yml", ".yaml", ".YML", ".YAML"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn default_provenance_key() -> String {
    "debug_info".to_string()
}

pub fn default_component_key() -> String {
    "general".to_string()
}
