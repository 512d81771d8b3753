//! rastergeom - Geometry and resampling report for gridded rasters
//!
//! This is the main entry point for the rastergeom command-line tool.

use std::io::Write;
use std::time::Instant;
use tracing::{error, info};

use rastergeom::{
    init_tracing, log_error, log_operation_end, log_operation_start, log_timed_operation, Config,
    GeometryReport, Raster, Result,
};

fn main() -> Result<()> {
    // Load configuration
    let (config, raster_path) = Config::load()?;

    init_tracing(&config.log_level);
    info!("Starting rastergeom v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration
    config.validate().map_err(|e| {
        log_error(&e, "Invalid configuration");
        e
    })?;

    let start = Instant::now();
    let source = raster_path.display().to_string();
    log_operation_start("geometry_report", Some(source.as_str()));

    let result = run(&config, &raster_path);
    log_operation_end("geometry_report", start, result.is_ok());

    result.map_err(|e| {
        error!("Failed to report on {:?}", raster_path);
        log_error(&e, "geometry_report");
        e
    })
}

fn run(config: &Config, raster_path: &std::path::Path) -> Result<()> {
    let raster = Raster::from_file(raster_path)?;
    let options = config.report_options()?;

    let report = log_timed_operation("build_report", || GeometryReport::build(&raster, &options))?;

    let json = if config.output.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    match &config.output.path {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("Report written to {:?}", path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }

    Ok(())
}
