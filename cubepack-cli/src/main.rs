use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use cubepack::io::{export, import};
use cubepack::pack;
use cubepack_cli::config::CubepackConfig;
use cubepack_cli::io;
use cubepack_cli::io::bin_to_svg::bin_to_svg;
use cubepack_cli::io::cli::Cli;
use cubepack_cli::io::output::PackOutput;
use log::{error, info, warn};
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CubepackConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };

    info!("[MAIN] Successfully parsed CubepackConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_instance(&args.input_file)?;
    let instance = import::import(&ext_instance)?;
    info!(
        "[MAIN] instance '{}': {} containers, {} items ({} unique), {} total item volume",
        instance.name,
        instance.containers.len(),
        instance.total_item_qty(),
        instance.items.len(),
        instance.item_volume().separate_with_commas()
    );

    let start = Instant::now();
    let bins = match pack(&instance.containers, instance.expanded_items()) {
        Ok(bins) => bins,
        Err(e) => {
            error!("[MAIN] packing failed: {e}");
            return Err(e.into());
        }
    };
    let run_time = start.elapsed();

    let solution = export::export(&bins, run_time);
    info!(
        "[MAIN] packed {} items into {} bins, total container volume: {}, density: {:.3}%",
        solution.n_items,
        solution.bins.len(),
        bins.iter()
            .map(|b| b.volume())
            .sum::<u64>()
            .separate_with_commas(),
        solution.density * 100.0
    );
    for bin in &bins {
        info!("[MAIN] {bin}");
    }

    {
        let output = PackOutput {
            instance: ext_instance,
            solution,
            config,
        };
        let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, &solution_path)?;
    }

    if config.svg_export {
        for (i, bin) in bins.iter().enumerate() {
            let svg_path = args
                .solution_folder
                .join(format!("sol_{input_stem}_{i}.svg"));
            let svg = bin_to_svg(bin, config.svg_draw_options);
            io::write_svg(&svg, &svg_path)?;
        }
    }

    Ok(())
}
