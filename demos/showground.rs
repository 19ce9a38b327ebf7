//! # Primitives Showground Example
//!
//! A spinning cube, a bouncing sphere and a rippling plane under a spot
//! light, with exponential fog fading distant surfaces.
//!
//! ## Usage:
//! ```bash
//! cargo run --example showground
//! ```

use orrery::demos::build_showground;
use orrery::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::default().with_title("Primitives Showground");
    let scene = build_showground(config.aspect());
    orrery::run(config, scene)
}
