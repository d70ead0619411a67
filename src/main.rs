//! # Pong Main Entry Point
//!
//! Parses the command line, sets up logging and the macroquad window, and runs the game loop.

use clap::Parser;
use log::{error, info, LevelFilter};
use macroquad::input::prevent_quit;
use macroquad::window::Conf;
use pong::config::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use pong::{InputHandler, PongError, PongResult, SceneManager};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::str::FromStr;

/// Command line arguments for Pong.
#[derive(Parser, Debug)]
#[command(name = "pong")]
#[command(about = "A two-paddle ball game")]
#[command(version)]
struct Args {
    /// Seed for serve directions
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> PongResult<()> {
    initialize_logging(&args.log_level)?;
    info!("Starting Pong v{}", pong::VERSION);

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("Serve seed: {}", seed);

    prevent_quit();
    let mut scenes = SceneManager::new(InputHandler::new(), StdRng::seed_from_u64(seed))?;
    scenes.run().await
}

/// Initializes the logger. `RUST_LOG` takes precedence over `--log-level`.
fn initialize_logging(log_level: &str) -> PongResult<()> {
    let level = LevelFilter::from_str(log_level)
        .map_err(|_| PongError::InvalidArgument(format!("unknown log level '{}'", log_level)))?;

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .parse_default_env()
        .init();

    Ok(())
}
