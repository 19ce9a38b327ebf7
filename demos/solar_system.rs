//! # Solar System Example
//!
//! A self-lit star with eight planets on concentric orbits. Saturn carries a
//! tilted ring and Earth a moon on a nested orbit.
//!
//! ## Usage:
//! ```bash
//! cargo run --example solar_system
//! ```
//!
//! ## Controls:
//! - Drag to orbit, shift-drag to pan, wheel to zoom, Shift+C to reset
//! - Space pauses the animation clock, Escape quits

use orrery::demos::build_solar_system;
use orrery::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::default().with_title("Solar System");
    let scene = build_solar_system(config.aspect());
    orrery::run(config, scene)
}
