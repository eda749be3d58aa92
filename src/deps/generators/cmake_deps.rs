//! Dependency discovery files
//!
//! For every host dependency emits, under the generators directory:
//! - `<name>-config.cmake` - imported `<name>::<name>` target and result variables
//! - `<name>-config-version.cmake` - same-major-version compatibility check

use crate::config::LayoutConfig;
use crate::deps::{DependencySpec, Manifest};

use super::{header, BuildFileGenerator, GeneratedFile};

/// CMake package-config generator
pub struct CMakeDepsGenerator;

impl CMakeDepsGenerator {
    pub fn new() -> Self {
        Self
    }

    fn file_stem(dep: &DependencySpec) -> String {
        dep.name.to_lowercase()
    }

    fn config_file(&self, dep: &DependencySpec) -> String {
        let name = &dep.name;
        let visible = if dep.visible { "ON" } else { "OFF" };

        let mut out = header("#", &dep.reference());
        out.push_str(&format!("set({}_FOUND TRUE)\n", name));
        out.push_str(&format!("set({}_VERSION \"{}\")\n", name, dep.version));
        out.push_str(&format!("set({}_VISIBLE {})\n", name, visible));
        out.push('\n');
        out.push_str(&format!("if(NOT TARGET {0}::{0})\n", name));
        out.push_str(&format!("    add_library({0}::{0} INTERFACE IMPORTED)\n", name));
        out.push_str("endif()\n");
        out
    }

    fn version_file(&self, dep: &DependencySpec) -> String {
        let mut out = header("#", &dep.reference());
        out.push_str(&format!("set(PACKAGE_VERSION \"{}\")\n", dep.version));
        out.push('\n');
        out.push_str("if(PACKAGE_VERSION VERSION_LESS PACKAGE_FIND_VERSION)\n");
        out.push_str("    set(PACKAGE_VERSION_COMPATIBLE FALSE)\n");
        out.push_str(&format!(
            "elseif(PACKAGE_FIND_VERSION_MAJOR STREQUAL \"{}\")\n",
            dep.major_version()
        ));
        out.push_str("    set(PACKAGE_VERSION_COMPATIBLE TRUE)\n");
        out.push_str("    if(PACKAGE_FIND_VERSION STREQUAL PACKAGE_VERSION)\n");
        out.push_str("        set(PACKAGE_VERSION_EXACT TRUE)\n");
        out.push_str("    endif()\n");
        out.push_str("else()\n");
        out.push_str("    set(PACKAGE_VERSION_COMPATIBLE FALSE)\n");
        out.push_str("endif()\n");
        out
    }
}

impl Default for CMakeDepsGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildFileGenerator for CMakeDepsGenerator {
    fn name(&self) -> &'static str {
        "cmake-deps"
    }

    fn generate(&self, manifest: &Manifest, layout: &LayoutConfig) -> Vec<GeneratedFile> {
        let mut files = Vec::new();
        for dep in manifest.declare_dependencies() {
            let stem = Self::file_stem(dep);
            files.push(GeneratedFile::new(
                layout.generators.join(format!("{}-config.cmake", stem)),
                self.config_file(dep),
            ));
            files.push(GeneratedFile::new(
                layout.generators.join(format!("{}-config-version.cmake", stem)),
                self.version_file(dep),
            ));
        }
        files
    }
}
