// Wed Oct 14 2026 - Alex

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "map2def")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Generate a module definition (.def) file from a linker map", long_about = None)]
pub struct Args {
    /// Linker map file with an "Address  Publics by Value" table
    pub map_file: PathBuf,

    /// Write the definition file here instead of next to the map file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    #[arg(short, long)]
    pub quiet: bool,

    /// Print exported and skipped line counts
    #[arg(long)]
    pub summary: bool,

    /// Print the counts as JSON on stdout
    #[arg(long)]
    pub json: bool,

    #[arg(long)]
    pub no_color: bool,
}
