use anyhow::Context;
use canvas_draw::{Config, MainScreen, export};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CANVAS_DRAW_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "canvas-draw")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Render primitive shapes onto a canvas and save the screen as PNG"
)]
struct Cli {
    /// Write the image to FILE instead of the configured output directory
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Read settings from FILE instead of ~/.config/canvas-draw/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Viewport width in pixels
    #[arg(long, value_name = "PX")]
    width: Option<i32>,

    /// Viewport height in pixels
    #[arg(long, value_name = "PX")]
    height: Option<i32>,

    /// Pixels per dp
    #[arg(long, value_name = "FACTOR")]
    density: Option<f64>,

    /// Print the laid-out canvases instead of rendering
    #[arg(long, action = ArgAction::SetTrue)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    config.apply_overrides(cli.width, cli.height, cli.density);

    let screen = MainScreen::new(&config)?;

    if cli.list {
        for (index, cell) in screen.cells().iter().enumerate() {
            let placement = cell.placement;
            println!(
                "{:>2} {:<22} x={:<5} y={:<5} {}x{}",
                index + 1,
                cell.name,
                placement.offset.x,
                placement.offset.y,
                placement.size.width,
                placement.size.height
            );
        }
        return Ok(());
    }

    let surface = screen.render()?;
    let path = export::resolve_output_path(cli.output.as_deref(), &config.output);
    let saved = export::save_png(&surface, &path)
        .with_context(|| format!("Failed to save image to {}", path.display()))?;

    log::info!("Canvas demo saved to {}", saved.display());
    println!("{}", saved.display());

    Ok(())
}
