//! Dependency manifest
//!
//! The declarative replacement for a recipe's `requirements()` and
//! `build_requirements()` hooks: plain records loaded from `projkit.toml`.

use serde::{Deserialize, Serialize};

use crate::config::{Config, PackageConfig, SettingsConfig, ToolchainConfig};

/// A host dependency (`name/version`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySpec {
    pub name: String,
    pub version: String,
    /// Whether consumers of this package also see the dependency
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl DependencySpec {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            visible: true,
        }
    }

    /// Mark as not propagated to consumers
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// `name/version` reference string
    pub fn reference(&self) -> String {
        format!("{}/{}", self.name, self.version)
    }

    /// Leading numeric component of the version, used for compatibility checks
    pub fn major_version(&self) -> &str {
        self.version.split('.').next().unwrap_or(&self.version)
    }
}

/// What a build-only requirement is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildRequirementKind {
    /// Executed during the build (compilers, code generators, cmake)
    Tool,
    /// Linked only into test binaries
    Test,
}

impl BuildRequirementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tool => "tool",
            Self::Test => "test",
        }
    }
}

/// A dependency needed only to build, never shipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRequirement {
    pub name: String,
    pub version: String,
    pub kind: BuildRequirementKind,
}

impl BuildRequirement {
    pub fn reference(&self) -> String {
        format!("{}/{}", self.name, self.version)
    }
}

/// Everything the generators need from configuration
#[derive(Debug, Clone)]
pub struct Manifest {
    pub package: PackageConfig,
    pub settings: SettingsConfig,
    pub toolchain: ToolchainConfig,
    requires: Vec<DependencySpec>,
    build_requires: Vec<BuildRequirement>,
}

impl Manifest {
    pub fn from_config(config: &Config) -> Self {
        let tools = config.tool_requires.iter().map(|r| BuildRequirement {
            name: r.name.clone(),
            version: r.version.clone(),
            kind: BuildRequirementKind::Tool,
        });
        let tests = config.test_requires.iter().map(|r| BuildRequirement {
            name: r.name.clone(),
            version: r.version.clone(),
            kind: BuildRequirementKind::Test,
        });

        Self {
            package: config.package.clone(),
            settings: config.settings.clone(),
            toolchain: config.toolchain.clone(),
            requires: config.requires.clone(),
            build_requires: tools.chain(tests).collect(),
        }
    }

    /// Host dependencies, in declaration order
    pub fn declare_dependencies(&self) -> &[DependencySpec] {
        &self.requires
    }

    /// Tool requirements followed by test requirements
    pub fn declare_build_only_dependencies(&self) -> &[BuildRequirement] {
        &self.build_requires
    }

    /// Host dependencies exported to consumers
    pub fn visible_dependencies(&self) -> impl Iterator<Item = &DependencySpec> {
        self.requires.iter().filter(|d| d.visible)
    }
}
