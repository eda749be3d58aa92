//! Deps command handlers
//!
//! `deps generate` writes build integration files; `deps list` shows what is
//! declared in projkit.toml (or the built-in defaults).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use projkit::config::Config;
use projkit::deps::{generate_build_files, Manifest};

use crate::ui::output::print_config_warnings;

fn load_config(project: &Path, json: bool) -> Result<Config> {
    let path = project.join(Config::FILE_NAME);
    let (config, warnings) =
        Config::load_or_default(project).with_context(|| format!("loading {}", path.display()))?;
    if !json {
        print_config_warnings(&path, &warnings);
    }
    Ok(config)
}

/// Execute `deps generate`
pub fn cmd_deps_generate(project: &Path, output_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let config = load_config(project, json)?;
    let manifest = Manifest::from_config(&config);
    let output_root = output_dir.unwrap_or_else(|| project.to_path_buf());

    let written = generate_build_files(&manifest, &config.layout, &output_root)
        .with_context(|| format!("generating build files under {}", output_root.display()))?;

    if json {
        let output = serde_json::json!({
            "event": "generate",
            "dependencies": manifest.declare_dependencies().len(),
            "files": written.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!(
            "Generated {} files for {} dependencies",
            written.len(),
            manifest.declare_dependencies().len()
        );
        for path in &written {
            println!("  - {}", path.display());
        }
    }

    Ok(())
}

/// Execute `deps list`
pub fn cmd_deps_list(project: &Path, json: bool) -> Result<()> {
    let config = load_config(project, json)?;
    let manifest = Manifest::from_config(&config);

    for dep in manifest.declare_dependencies() {
        if json {
            let output = serde_json::json!({
                "event": "dependency",
                "reference": dep.reference(),
                "visible": dep.visible,
            });
            println!("{}", serde_json::to_string(&output)?);
        } else if dep.visible {
            println!("{}", dep.reference());
        } else {
            println!("{} (not visible)", dep.reference());
        }
    }

    for req in manifest.declare_build_only_dependencies() {
        if json {
            let output = serde_json::json!({
                "event": "build_requirement",
                "reference": req.reference(),
                "kind": req.kind,
            });
            println!("{}", serde_json::to_string(&output)?);
        } else {
            println!("{} (build-only: {})", req.reference(), req.kind.as_str());
        }
    }

    Ok(())
}
