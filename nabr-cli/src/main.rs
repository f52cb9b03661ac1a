use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use nabr::io::export;
use nabr::io::svg::plan_to_svg;
use nabr_cli::config::NabrConfig;
use nabr_cli::io;
use nabr_cli::io::cli::Cli;
use nabr_cli::io::output::FillOutput;
use nabr_cli::run::{SessionSink, run};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            NabrConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("[MAIN] Successfully parsed NabrConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file name")?
        .to_string();

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).context(format!(
            "could not create output folder: {}",
            args.output_folder.display()
        ))?;
    }

    let request = io::read_request(&args.input_file)?;
    let mut sink = SessionSink::default();
    let (plan, layout) = run(&request, &config, &mut sink)?;

    {
        let output = FillOutput {
            layout: export::export_packed_layout(&plan, &layout),
            request,
            warnings: sink.recorded.warnings.clone(),
            config: config.clone(),
        };
        let output_path = args.output_folder.join(format!("sol_{input_file_stem}.json"));
        io::write_json(&output, Path::new(&output_path))?;
    }

    if config.export_svg {
        let svg_path = args.output_folder.join(format!("sol_{input_file_stem}.svg"));
        let svg = plan_to_svg(&plan, Some(&layout), config.svg_draw_options, &input_file_stem);
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
