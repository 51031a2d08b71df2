use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Packs the items of a JSON instance into containers from its catalog
/// and writes the solution (and SVG projections of every bin) to a folder.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Instance to pack: a catalog of containers and the items with their demand
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder that receives `sol_<instance>.json` and the per-bin SVGs, created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// Runner configuration, defaults are used when omitted
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
