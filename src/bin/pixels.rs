//! Command line driver
//!
//! Plays the words given on the command line on the LED strip, e.g.
//!
//! ```text
//! PIXELS_SINK=spi:/dev/spidev0.0 pixels black rainbow 2 3*strobe off
//! ```
//!
//! `PIXELS_SINK` selects the output (`http://…`, `spi:<device>[@hz]` or
//! `memory`), `PIXELS_COUNT` the number of LEDs.

use std::env;
use std::sync::Arc;

use anyhow::Context;
use log::info;
use myrtio_pixel_engine::{Commands, Engine, EngineConfig, Interpreter, SinkConfig};

const SINK_VAR: &str = "PIXELS_SINK";
const COUNT_VAR: &str = "PIXELS_COUNT";
const DEFAULT_WORDS: &[&str] = &["white"];

fn config_from_env() -> anyhow::Result<EngineConfig> {
    let mut config = EngineConfig::default();
    if let Ok(sink) = env::var(SINK_VAR) {
        config.sink = sink
            .parse::<SinkConfig>()
            .with_context(|| format!("invalid {SINK_VAR}"))?;
    }
    if let Ok(count) = env::var(COUNT_VAR) {
        config.led_count = count
            .parse()
            .with_context(|| format!("invalid {COUNT_VAR}"))?;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = config_from_env()?;
    info!(
        "driving {} LEDs through {:?}",
        config.led_count, config.sink
    );

    let engine = Arc::new(Engine::new(&config).context("failed to open sink")?);
    let commands = Commands::new(Arc::clone(&engine));
    commands.start()?;

    let mut words: Vec<String> = env::args().skip(1).collect();
    if words.is_empty() {
        words = DEFAULT_WORDS.iter().map(|&word| word.to_owned()).collect();
    }

    let mut interpreter = Interpreter::new(commands.clone());
    interpreter.run(&words)?;

    commands.flush()?;
    commands.stop()?;
    Ok(())
}
