//! Icon conversion pipeline
//!
//! `select input → freshness check → rasterize/resize each size → pack → cleanup`
//!
//! Strictly sequential. Any step failing aborts the run; intermediates
//! produced before the failure are removed best-effort.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{IconConfig, MAX_ICON_SIZE};
use crate::error::{ProjkitError, ProjkitResult};
use crate::fs::remove_files_best_effort;

use super::convert::convert_to_png;
use super::freshness::is_up_to_date;
use super::pack::{pack_icon, PackMode};
use super::rasterize::RasterizerChain;
use super::source::{select_input, SourceFormat};

/// Progress events, in the order they happen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum IconEvent {
    Converting {
        input: String,
        output: String,
        format: SourceFormat,
    },
    UpToDate {
        output: String,
    },
    VariantCreated {
        path: String,
        size: u32,
        via: String,
    },
    ContainerCreated {
        path: String,
        sizes: Vec<u32>,
    },
    TemporaryRemoved {
        path: String,
    },
}

impl IconEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// How a successful run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Container already newer than the source; nothing done
    UpToDate { output: PathBuf },
    /// Container (re)built
    Created {
        input: PathBuf,
        output: PathBuf,
        embedded_sizes: Vec<u32>,
        removed: Vec<PathBuf>,
    },
}

/// Converts `<dir>/<name>.{svg,png,jpg,jpeg}` into `<dir>/<name>.ico`
pub struct IconPipeline {
    dir: PathBuf,
    name: String,
    sizes: Vec<u32>,
    pack: PackMode,
    rasterizers: RasterizerChain,
    force: bool,
}

impl IconPipeline {
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        let defaults = IconConfig::default();
        Self {
            dir: dir.into(),
            name: name.into(),
            sizes: defaults.sizes,
            pack: defaults.pack,
            rasterizers: RasterizerChain::from_config(&defaults.rasterizers),
            force: false,
        }
    }

    /// Pipeline for `config`, with `config.dir` resolved against `project_root`
    pub fn from_config(project_root: &Path, config: &IconConfig) -> Self {
        Self::new(project_root.join(&config.dir), config.name.clone())
            .with_sizes(config.sizes.clone())
            .with_pack_mode(config.pack)
            .with_rasterizers(RasterizerChain::from_config(&config.rasterizers))
    }

    /// Target sizes; stored ascending and deduplicated
    pub fn with_sizes(mut self, mut sizes: Vec<u32>) -> Self {
        sizes.sort_unstable();
        sizes.dedup();
        self.sizes = sizes;
        self
    }

    pub fn with_pack_mode(mut self, pack: PackMode) -> Self {
        self.pack = pack;
        self
    }

    pub fn with_rasterizers(mut self, rasterizers: RasterizerChain) -> Self {
        self.rasterizers = rasterizers;
        self
    }

    /// Skip the freshness check
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.join(format!("{}.ico", self.name))
    }

    pub fn variant_path(&self, size: u32) -> PathBuf {
        self.dir.join(format!("{}_{}.png", self.name, size))
    }

    /// Run the pipeline, reporting progress through `on_event`
    pub fn run<F>(&self, mut on_event: F) -> ProjkitResult<PipelineOutcome>
    where
        F: FnMut(IconEvent),
    {
        if let Some(&size) = self.sizes.iter().find(|s| **s == 0 || **s > MAX_ICON_SIZE) {
            return Err(ProjkitError::InvalidSize { size });
        }

        let source = select_input(&self.dir, &self.name)?;
        let output = self.output_path();

        if !self.force && is_up_to_date(&source.path, &output)? {
            tracing::info!(path = %output.display(), "icon container up to date");
            on_event(IconEvent::UpToDate {
                output: output.display().to_string(),
            });
            return Ok(PipelineOutcome::UpToDate { output });
        }

        on_event(IconEvent::Converting {
            input: source.path.display().to_string(),
            output: output.display().to_string(),
            format: source.format,
        });

        let mut variants: Vec<PathBuf> = Vec::with_capacity(self.sizes.len());
        for &size in &self.sizes {
            let path = self.variant_path(size);
            match convert_to_png(&source, &path, size, &self.rasterizers) {
                Ok(via) => {
                    on_event(IconEvent::VariantCreated {
                        path: path.display().to_string(),
                        size,
                        via: via.to_string(),
                    });
                    variants.push(path);
                }
                Err(e) => {
                    tracing::error!(size, error = %e, "size variant failed, aborting");
                    if path.exists() {
                        variants.push(path);
                    }
                    self.discard(&variants);
                    return Err(e);
                }
            }
        }

        let embedded_sizes = match pack_icon(&variants, &output, self.pack) {
            Ok(sizes) => sizes,
            Err(e) => {
                self.discard(&variants);
                return Err(e);
            }
        };
        on_event(IconEvent::ContainerCreated {
            path: output.display().to_string(),
            sizes: embedded_sizes.clone(),
        });

        let removed: Vec<PathBuf> = remove_files_best_effort(variants.iter().map(PathBuf::as_path))
            .into_iter()
            .map(Path::to_path_buf)
            .collect();
        for path in &removed {
            on_event(IconEvent::TemporaryRemoved {
                path: path.display().to_string(),
            });
        }

        Ok(PipelineOutcome::Created {
            input: source.path,
            output,
            embedded_sizes,
            removed,
        })
    }

    fn discard(&self, variants: &[PathBuf]) {
        let removed = remove_files_best_effort(variants.iter().map(PathBuf::as_path));
        tracing::debug!(count = removed.len(), "removed intermediates after failure");
    }
}
