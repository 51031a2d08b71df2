use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use cubepack::io::ext_repr::ExtInstance;
use log::{LevelFilter, info};
use serde::Serialize;
use svg::Document;

use crate::EPOCH;
use crate::config::CubepackConfig;

pub mod bin_to_svg;
pub mod cli;
pub mod output;
pub mod svg_util;

pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    let file = File::open(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse instance file: {}", path.display()))
}

pub fn read_config(path: &Path) -> Result<CubepackConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("incorrect config file format")
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!("solution written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("svg written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

/// Logs to stdout, every line prefixed with its level, the time since [`EPOCH`] and the thread it came from.
/// The packer and the runner log at `level_filter`, dependencies at `warn` at most.
pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let elapsed = EPOCH.elapsed();
            let secs = elapsed.as_secs();
            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}.{:0>3}] <{}>",
                record.level(),
                secs / 3600,
                (secs / 60) % 60,
                secs % 60,
                elapsed.subsec_millis(),
                std::thread::current().name().unwrap_or("-"),
            );
            out.finish(format_args!("{prefix:<31}{message}"))
        })
        .level(level_filter.min(LevelFilter::Warn))
        .level_for("cubepack", level_filter)
        .level_for("cubepack_cli", level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[MAIN] started at {}", jiff::Timestamp::now());
    Ok(())
}
