use clap::Parser;
use ripple_core::{RESOLUTION_DEFAULT, RESOLUTION_MAX, RESOLUTION_MIN};
use std::path::PathBuf;

/// Animated ripple surface coloured by recorded sensor data.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// Grid points per side (10..=100). Adjustable at runtime with the arrow keys.
    #[arg(short, long, default_value_t = RESOLUTION_DEFAULT, value_parser = parse_resolution)]
    pub resolution: u32,

    /// Sensor data file to play instead of the bundled recording.
    #[arg(short, long)]
    pub data: Option<PathBuf>,
}

pub fn parse_resolution(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .trim()
        .parse()
        .map_err(|_| format!("`{s}` is not a whole number"))?;
    if (RESOLUTION_MIN..=RESOLUTION_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "resolution must be between {RESOLUTION_MIN} and {RESOLUTION_MAX}"
        ))
    }
}
