//! Application icon conversion
//!
//! Turns one source image (SVG, PNG or JPEG) into a multi-resolution ICO
//! container. See [`IconPipeline`] for the sequence of steps.

mod convert;
mod freshness;
mod pack;
mod pipeline;
pub mod rasterize;
mod source;

pub use convert::convert_to_png;
pub use freshness::is_up_to_date;
pub use pack::{pack_icon, select_variants, size_from_file_name, sort_variants, PackMode, SizeVariant};
pub use pipeline::{IconEvent, IconPipeline, PipelineOutcome};
pub use rasterize::{InkscapeRasterizer, RasterizeError, Rasterizer, RasterizerChain, RsvgConvertRasterizer};
pub use source::{candidates, select_input, Candidate, SourceFormat, SourceIcon};
