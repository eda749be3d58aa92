//! Icon command handler
//!
//! Converts `<icon.dir>/<icon.name>.{svg,png,jpg,jpeg}` into `<icon.name>.ico`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use projkit::config::Config;
use projkit::icon::{IconEvent, IconPipeline, PackMode, PipelineOutcome};

use crate::ui::output::print_config_warnings;

/// Execute the icon command
pub fn cmd_icon(
    project: &Path,
    dir: Option<PathBuf>,
    pack: Option<PackMode>,
    force: bool,
    json: bool,
) -> Result<()> {
    let (mut config, warnings) = Config::load_or_default(project)
        .with_context(|| format!("loading {}", project.join(Config::FILE_NAME).display()))?;
    if !json {
        print_config_warnings(&project.join(Config::FILE_NAME), &warnings);
    }

    // CLI flags beat config and environment
    if let Some(dir) = dir {
        config.icon.dir = dir;
    }
    if let Some(pack) = pack {
        config.icon.pack = pack;
    }

    let pipeline = IconPipeline::from_config(project, &config.icon).force(force);
    tracing::info!(
        dir = %pipeline.dir().display(),
        sizes = ?pipeline.sizes(),
        pack = %config.icon.pack,
        "running icon pipeline"
    );

    let outcome = pipeline.run(|event| {
        if json {
            println!("{}", event.to_json());
        } else {
            print_event(&event);
        }
    })?;

    if let PipelineOutcome::Created { removed, .. } = &outcome {
        tracing::debug!(removed = removed.len(), "icon pipeline finished");
    }

    Ok(())
}

fn print_event(event: &IconEvent) {
    match event {
        IconEvent::Converting { input, output, .. } => {
            println!("Converting {} to {}", input, output);
        }
        IconEvent::UpToDate { output } => {
            println!("ICO file already exists and is up-to-date: {}", output);
        }
        IconEvent::VariantCreated { path, .. } => {
            println!("Created {}", path);
        }
        IconEvent::ContainerCreated { path, sizes } => {
            let sizes: Vec<String> = sizes.iter().map(|s| format!("{0}x{0}", s)).collect();
            println!("Created ICO with sizes: {}", sizes.join(", "));
            println!("Created {}", path);
        }
        IconEvent::TemporaryRemoved { path } => {
            println!("Removed temporary file {}", path);
        }
    }
}
