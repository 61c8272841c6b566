use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "atlas")]
#[command(
    author,
    version,
    about = "A local map journal: pin memories to places on a world map"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the memories (overrides .atlas.yml and the user data dir)
    #[arg(long, global = true, env = "ATLAS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an .atlas.yml project in the current directory
    Init {
        /// Data directory, relative to the project root
        #[arg(long, default_value = ".atlas")]
        path: String,
    },

    /// Pin a new memory at a coordinate
    #[command(visible_alias = "pin")]
    Add {
        /// Latitude in decimal degrees (-90..90)
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees (-180..180)
        #[arg(allow_negative_numbers = true)]
        lng: f64,

        /// Title of the memory
        #[arg(short, long, default_value = "")]
        title: String,

        /// Date of the memory (YYYY-MM-DD)
        #[arg(short, long, default_value = "")]
        date: String,

        /// The story (use '-' to read from stdin)
        #[arg(short, long, default_value = "")]
        story: String,

        /// URL of a photo to show in the popup
        #[arg(short, long, default_value = "")]
        photo_url: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all memories in the order they were pinned
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a memory and its popup
    Show {
        /// Memory ID
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Print the popup HTML instead of the text view
        #[arg(long, conflicts_with = "json")]
        html: bool,
    },

    /// Delete a memory forever
    #[command(visible_alias = "rm")]
    Delete {
        /// Memory ID
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,

        /// Output as JSON (implies --force)
        #[arg(long)]
        json: bool,
    },

    /// Write the atlas as a standalone Leaflet web page
    Export {
        /// Output file
        #[arg(short, long, default_value = "atlas.html")]
        output: PathBuf,

        /// Open the page in the default browser afterwards
        #[arg(long)]
        open: bool,
    },

    /// Serve the atlas page read-only on localhost
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,
    },

    /// Open the interactive terminal map
    Tui,
}
