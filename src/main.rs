use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

mod clock;
mod config;
mod core;
mod render;

use crate::core::driver::ClockDriver;

#[derive(Parser, Debug)]
#[command(name = "clockface", about = "Analog clock face renderer")]
struct Args {
    /// Surface width in pixels
    #[arg(long, default_value_t = 400)]
    width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = 400)]
    height: u32,

    /// TTF font used for numerals and labels
    #[arg(long, default_value = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf")]
    font: String,

    /// Output mode: png, raw
    #[arg(long, default_value = "png")]
    output: String,

    /// Output file path (for png mode)
    #[arg(long, default_value = "clock.png")]
    output_path: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!(
        "clockface v{} starting ({}x{})",
        env!("CARGO_PKG_VERSION"),
        args.width,
        args.height
    );

    let config = config::ClockConfig {
        width: args.width,
        height: args.height,
        font_path: args.font.clone().into(),
        output_mode: args.output.parse().unwrap_or_default(),
        output_path: args.output_path.clone().into(),
    };

    // Surface/context failures are logged once and abort before any
    // repaint is scheduled.
    let (mut driver, cancel) = match ClockDriver::new(config) {
        Ok(v) => v,
        Err(e) => {
            error!("{e:#}");
            return Ok(());
        }
    };

    // Ctrl-C stops the repaint loop through the cancel handle
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    driver.run().await?;

    info!("clockface shutdown");
    Ok(())
}
