//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::deps::DependencySpec;
use crate::error::{ProjkitError, ProjkitResult};
use crate::icon::PackMode;

use super::loader::{self, ConfigWarning};

/// Largest edge length an ICO directory entry can describe
pub const MAX_ICON_SIZE: u32 = 256;

/// Icon pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconConfig {
    /// Directory holding the source icon, relative to the project root
    #[serde(default = "default_icon_dir")]
    pub dir: PathBuf,

    /// Base file name shared by inputs, intermediates and the container
    #[serde(default = "default_icon_name")]
    pub name: String,

    #[serde(default = "default_icon_sizes")]
    pub sizes: Vec<u32>,

    #[serde(default)]
    pub pack: PackMode,

    #[serde(default)]
    pub rasterizers: RasterizersConfig,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            dir: default_icon_dir(),
            name: default_icon_name(),
            sizes: default_icon_sizes(),
            pack: PackMode::default(),
            rasterizers: RasterizersConfig::default(),
        }
    }
}

fn default_icon_dir() -> PathBuf {
    PathBuf::from("resources/icons")
}

fn default_icon_name() -> String {
    "app_icon".to_string()
}

fn default_icon_sizes() -> Vec<u32> {
    vec![16, 32, 48, 64, 128, 256]
}

/// Programs used for SVG rasterization, in preference order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RasterizersConfig {
    #[serde(default = "default_inkscape")]
    pub inkscape: PathBuf,

    #[serde(default = "default_rsvg_convert")]
    pub rsvg_convert: PathBuf,
}

impl Default for RasterizersConfig {
    fn default() -> Self {
        Self {
            inkscape: default_inkscape(),
            rsvg_convert: default_rsvg_convert(),
        }
    }
}

fn default_inkscape() -> PathBuf {
    PathBuf::from("inkscape")
}

fn default_rsvg_convert() -> PathBuf {
    PathBuf::from("rsvg-convert")
}

/// Identity of the consuming package
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    #[serde(default = "default_package_name")]
    pub name: String,

    #[serde(default = "default_package_version")]
    pub version: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: default_package_name(),
            version: default_package_version(),
        }
    }
}

fn default_package_name() -> String {
    "qt-template".to_string()
}

fn default_package_version() -> String {
    "1.0.1".to_string()
}

/// Build settings forwarded to the toolchain file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConfig {
    #[serde(default = "default_build_type")]
    pub build_type: String,

    #[serde(default = "default_arch")]
    pub arch: String,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            build_type: default_build_type(),
            arch: default_arch(),
        }
    }
}

fn default_build_type() -> String {
    "Release".to_string()
}

fn default_arch() -> String {
    std::env::consts::ARCH.to_string()
}

/// Output directories, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_build_dir")]
    pub build: PathBuf,

    #[serde(default = "default_generators_dir")]
    pub generators: PathBuf,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            build: default_build_dir(),
            generators: default_generators_dir(),
        }
    }
}

fn default_build_dir() -> PathBuf {
    PathBuf::from("build")
}

fn default_generators_dir() -> PathBuf {
    PathBuf::from("build/generators")
}

/// Toolchain generator options
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ToolchainConfig {
    /// Emit CMakeUserPresets.json next to the build directory
    #[serde(default)]
    pub user_presets: bool,
}

/// A build-only requirement entry (`[[tool_requires]]`, `[[test_requires]]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementEntry {
    pub name: String,
    pub version: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub icon: IconConfig,

    #[serde(default)]
    pub package: PackageConfig,

    #[serde(default)]
    pub settings: SettingsConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub toolchain: ToolchainConfig,

    #[serde(default = "default_requires")]
    pub requires: Vec<DependencySpec>,

    #[serde(default)]
    pub tool_requires: Vec<RequirementEntry>,

    #[serde(default)]
    pub test_requires: Vec<RequirementEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icon: IconConfig::default(),
            package: PackageConfig::default(),
            settings: SettingsConfig::default(),
            layout: LayoutConfig::default(),
            toolchain: ToolchainConfig::default(),
            requires: default_requires(),
            tool_requires: Vec::new(),
            test_requires: Vec::new(),
        }
    }
}

fn default_requires() -> Vec<DependencySpec> {
    vec![DependencySpec::new("fmt", "10.2.1")]
}

impl Config {
    /// File name looked up in the project root
    pub const FILE_NAME: &'static str = "projkit.toml";

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ProjkitResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ProjkitResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `projkit.toml` from the project root, or defaults if absent
    pub fn load_or_default(project_root: &Path) -> ProjkitResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (PROJKIT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Icon sizes, ascending and without duplicates
    pub fn icon_sizes(&self) -> Vec<u32> {
        let mut sizes = self.icon.sizes.clone();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    /// Check values serde cannot express
    pub fn validate(&self, file: &Path) -> ProjkitResult<()> {
        let invalid = |message: String| ProjkitError::InvalidConfig {
            file: file.to_path_buf(),
            message,
        };

        if self.icon.sizes.is_empty() {
            return Err(invalid("icon.sizes must not be empty".to_string()));
        }
        if let Some(size) = self
            .icon
            .sizes
            .iter()
            .find(|s| **s == 0 || **s > MAX_ICON_SIZE)
        {
            return Err(invalid(format!(
                "icon size {} is out of range (1..={})",
                size, MAX_ICON_SIZE
            )));
        }
        if self.icon.name.trim().is_empty() {
            return Err(invalid("icon.name must not be empty".to_string()));
        }

        let all_requirements = self
            .requires
            .iter()
            .map(|d| (d.name.as_str(), d.version.as_str()))
            .chain(
                self.tool_requires
                    .iter()
                    .chain(self.test_requires.iter())
                    .map(|r| (r.name.as_str(), r.version.as_str())),
            );
        for (name, version) in all_requirements {
            if name.trim().is_empty() || name.contains('/') {
                return Err(invalid(format!("invalid dependency name '{}'", name)));
            }
            if version.trim().is_empty() {
                return Err(invalid(format!("dependency '{}' has no version", name)));
            }
        }

        Ok(())
    }
}
