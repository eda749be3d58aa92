//! Configuration module for projkit
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PROJKIT_*)
//! 3. Project config (projkit.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{
    Config, IconConfig, LayoutConfig, PackageConfig, RasterizersConfig, RequirementEntry,
    SettingsConfig, ToolchainConfig, MAX_ICON_SIZE,
};
