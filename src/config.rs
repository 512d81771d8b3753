//! Configuration management for rastergeom.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::downsample::Reduction;
use crate::error::{RasterError, Result};
use crate::geometry::BoundingBox;
use crate::report::ReportOptions;

/// Command-line arguments for rastergeom
#[derive(Parser, Debug)]
#[command(name = "rastergeom")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the JSON raster file to inspect
    pub raster_file: PathBuf,

    /// Downsample factor applied to the oriented array
    #[arg(short, long, env = "RASTERGEOM_FACTOR")]
    pub factor: Option<usize>,

    /// Downsample reduction (mean, sum, max, min, median, std, var)
    #[arg(long, env = "RASTERGEOM_HOW")]
    pub how: Option<String>,

    /// 1-based layer to select from a 3D raster
    #[arg(short, long, env = "RASTERGEOM_LAYER")]
    pub layer: Option<usize>,

    /// Crop to "xmin,ymin,xmax,ymax" before reporting
    #[arg(long, env = "RASTERGEOM_BBOX")]
    pub bbox: Option<String>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, env = "RASTERGEOM_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "RASTERGEOM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RASTERGEOM_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Downsampling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownsampleConfig {
    /// Block size; 1 disables downsampling
    #[serde(default = "default_factor")]
    pub factor: usize,

    /// Reduction applied to each block
    #[serde(default = "default_how")]
    pub how: String,
}

/// Raster selection configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RasterConfig {
    /// 1-based layer of a 3D raster
    #[serde(default)]
    pub layer: Option<usize>,

    /// Crop box as "xmin,ymin,xmax,ymax"
    #[serde(default)]
    pub bbox: Option<String>,
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output file (None = stdout)
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub downsample: DownsampleConfig,

    #[serde(default)]
    pub raster: RasterConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, PathBuf)> {
        Self::from_args(Args::parse())
    }

    /// Build configuration from already parsed arguments
    pub fn from_args(args: Args) -> Result<(Self, PathBuf)> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        if let Some(factor) = args.factor {
            config.downsample.factor = factor;
        }
        if let Some(how) = args.how {
            config.downsample.how = how;
        }
        if args.layer.is_some() {
            config.raster.layer = args.layer;
        }
        if args.bbox.is_some() {
            config.raster.bbox = args.bbox;
        }
        if args.output.is_some() {
            config.output.path = args.output;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }

        Ok((config, args.raster_file))
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.downsample = other.downsample;
        if other.raster.layer.is_some() {
            self.raster.layer = other.raster.layer;
        }
        if other.raster.bbox.is_some() {
            self.raster.bbox = other.raster.bbox;
        }
        if other.output.path.is_some() {
            self.output.path = other.output.path;
        }
        self.output.pretty = other.output.pretty;
        self.log_level = other.log_level;
    }

    /// Parsed reduction
    pub fn reduction(&self) -> Result<Reduction> {
        self.downsample.how.parse()
    }

    /// Parsed crop box
    pub fn crop(&self) -> Result<Option<BoundingBox>> {
        self.raster.bbox.as_deref().map(str::parse).transpose()
    }

    /// Options for building a geometry report
    pub fn report_options(&self) -> Result<ReportOptions> {
        Ok(ReportOptions {
            layer: self.raster.layer,
            crop: self.crop()?,
            factor: self.downsample.factor,
            how: self.reduction()?,
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.downsample.factor == 0 {
            return Err(RasterError::Config {
                message: "Downsample factor must be at least 1".to_string(),
            });
        }

        self.reduction()?;
        self.crop()?;

        if self.raster.layer == Some(0) {
            return Err(RasterError::Config {
                message: "Layer index is 1-based and cannot be 0".to_string(),
            });
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(RasterError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            downsample: DownsampleConfig::default(),
            raster: RasterConfig::default(),
            output: OutputConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for DownsampleConfig {
    fn default() -> Self {
        Self {
            factor: default_factor(),
            how: default_how(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            pretty: default_pretty(),
        }
    }
}

// Default value functions for serde
fn default_factor() -> usize {
    1
}

fn default_how() -> String {
    "mean".to_string()
}

fn default_pretty() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
