//! # Model Viewer Example
//!
//! Loads a Wavefront OBJ model and shows it under ambient light. A model that
//! cannot be loaded is reported in the log and the window stays empty.
//!
//! ## Usage:
//! ```bash
//! cargo run --example model_viewer -- --model path/to/model.obj --scale 4
//! ```

use std::path::PathBuf;

use clap::Parser;
use orrery::demos::{build_model_viewer, ModelViewerConfig};
use orrery::prelude::*;

#[derive(Parser)]
#[command(name = "model_viewer", about = "Display an OBJ model", version)]
struct Cli {
    /// Path to the .obj file to display
    #[arg(long, default_value = "assets/model.obj")]
    model: PathBuf,
    /// Uniform scale applied to the model
    #[arg(long, default_value_t = 4.0)]
    scale: f32,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let viewer = ModelViewerConfig {
        model: cli.model,
        scale: cli.scale,
        ..Default::default()
    };
    let config = AppConfig::default().with_title("Model Viewer");
    let scene = build_model_viewer(&viewer, config.aspect());
    orrery::run(config, scene)
}
