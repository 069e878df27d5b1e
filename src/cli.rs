// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coco")]
#[command(about = "Container companion: extract compose images and pull them concurrently")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract image references from a compose file
    ExtractImages {
        /// Path to the compose file (auto-discovered when omitted)
        compose_file: Option<PathBuf>,

        /// Output file for the extracted image list
        #[arg(default_value = "images.txt")]
        output_file: PathBuf,
    },

    /// Pull images concurrently with a live status table
    PullImages {
        /// File containing one image reference per line
        #[arg(default_value = "images.txt")]
        images_file: PathBuf,
    },
}
