use std::path::PathBuf;

use clap::{Parser, Subcommand};
use projkit::PackMode;

/// projkit - application icon packing and build dependency generation
#[derive(Parser, Debug)]
#[command(name = "projkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output one JSON object per event
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root (where projkit.toml lives)
    #[arg(short, long, global = true, default_value = ".")]
    pub project: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert the application icon source into an ICO container
    Icon {
        /// Icon directory (overrides icon.dir), relative to the project root
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Which sizes to embed: all or largest
        #[arg(long)]
        pack: Option<PackMode>,

        /// Rebuild even if the container is up to date
        #[arg(short, long)]
        force: bool,
    },

    /// Declared dependencies and build file generation
    Deps {
        #[command(subcommand)]
        command: DepsCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum DepsCommands {
    /// Write dependency discovery files and the toolchain file
    Generate {
        /// Root for the build layout (defaults to the project root)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// List declared dependencies
    List,
}
