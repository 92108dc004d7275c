//! wisp-preview — render mascot frames without display hardware.
//!
//! Writes numbered PPM images (or a JSON cell dump) so a pose or a few
//! seconds of animation can be inspected on a dev machine before
//! anything touches a panel.
//!
//! ```text
//! wisp-preview --mood upbeat --frames 24 --cell-size 6 --out /tmp/wisp
//! wisp-preview --mood subdued --rest --json
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use wisp_core::rest;
use wisp_core::types::{GRID_HEIGHT, GRID_WIDTH};
use wisp_core::Mood;
use wisp_display::{DisplayConfig, DisplayDriver, FrameBuffer};

#[derive(Parser, Debug)]
#[command(
    name = "wisp-preview",
    about = "Render mascot frames to PPM images or JSON without display hardware"
)]
struct Args {
    /// Mood to render (neutral, upbeat, subdued, contemplative,
    /// dormant). Unknown names fall back to neutral.
    #[arg(long, default_value = "neutral")]
    mood: String,

    /// Number of animation frames to render.
    #[arg(long, default_value_t = 24)]
    frames: u64,

    /// Pixels per grid cell.
    #[arg(long, default_value_t = 6)]
    cell_size: u32,

    /// Milliseconds of animation time per frame.
    #[arg(long, default_value_t = 83)]
    interval_ms: u64,

    /// Output directory for PPM frames.
    #[arg(long, default_value = "/tmp/wisp")]
    out: PathBuf,

    /// Render the fixed rest pose instead of animating.
    #[arg(long)]
    rest: bool,

    /// Render monochrome (as a 1-bit panel would).
    #[arg(long)]
    mono: bool,

    /// Dump frame cells as JSON to stdout instead of writing images.
    #[arg(long)]
    json: bool,

    /// Fixed blink-timing seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mood = Mood::from_name(&args.mood);

    if args.json {
        let cells = if args.rest {
            rest::rest_frame(mood)
        } else {
            wisp_core::Animator::new(mood).frame()
        };
        println!("{}", serde_json::to_string_pretty(&cells)?);
        return Ok(());
    }

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;

    let config = DisplayConfig {
        cell_size: args.cell_size,
        frame_interval_ms: args.interval_ms,
        animate: !args.rest,
        monochrome: args.mono,
        blink_seed: args.seed,
        ..DisplayConfig::default()
    };

    let width = GRID_WIDTH as u32 * args.cell_size;
    let height = GRID_HEIGHT as u32 * args.cell_size;
    let sink = FrameBuffer::new(width, height);
    let mut driver = DisplayDriver::new(sink, config, mood);

    let dt = args.interval_ms as f64 / 1000.0;
    let frames = if args.rest { 1 } else { args.frames };

    info!(%mood, frames, width, height, "rendering preview");

    for i in 0..frames {
        driver.step(dt)?;
        let path = args.out.join(format!("frame_{i:03}.ppm"));
        driver
            .sink()
            .write_ppm(&path)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    println!(
        "wrote {} frame(s) to {} ({}x{}, mood: {})",
        frames,
        args.out.display(),
        width,
        height,
        mood
    );
    Ok(())
}
