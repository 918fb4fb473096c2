use anyhow::Context;
use clap::builder::TypedValueParser;
use clap::Parser;
use grid_life::{Grid, Pattern, RenderParams};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

// Constants
const GRID_WIDTH: usize = 40;
const GRID_HEIGHT: usize = 20;
const GENERATIONS: u64 = 50;
const FRAME_DELAY_MS: u64 = 100;

#[derive(Parser, Debug)]
#[command(name = "grid_life")]
#[command(about = "Conway's Game of Life in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, env = "LIFE_WIDTH", default_value_t = GRID_WIDTH, value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize))]
    width: usize,

    /// Grid height in cells
    #[arg(long, env = "LIFE_HEIGHT", default_value_t = GRID_HEIGHT, value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize))]
    height: usize,

    /// Join opposite edges (toroidal neighbor counting)
    #[arg(long, env = "LIFE_WRAP")]
    wrap: bool,

    /// Seed for the random fill, for reproducible runs
    #[arg(long, env = "LIFE_SEED")]
    seed: Option<u64>,

    /// Start from a named pattern instead of a random fill
    #[arg(long, env = "LIFE_PATTERN")]
    pattern: Option<Pattern>,

    /// Number of generations to run
    #[arg(long, env = "LIFE_GENERATIONS", default_value_t = GENERATIONS)]
    generations: u64,

    /// Pause between frames in milliseconds
    #[arg(long, env = "LIFE_DELAY_MS", default_value_t = FRAME_DELAY_MS)]
    delay_ms: u64,

    /// Glyph for live cells
    #[arg(long, default_value_t = grid_life::render::ALIVE_GLYPH)]
    alive_glyph: char,

    /// Glyph for dead cells
    #[arg(long, default_value_t = grid_life::render::DEAD_GLYPH)]
    dead_glyph: char,
}

fn write_frame(out: &mut impl Write, grid: &Grid, params: &RenderParams) -> io::Result<()> {
    write!(out, "{}", grid.render_with(params))?;
    writeln!(out, "Generation: {}  Alive: {}", grid.generation(), grid.count_alive())?;
    writeln!(out)?;
    out.flush()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    let mut grid = match cli.seed {
        Some(seed) => Grid::with_seed(cli.width, cli.height, cli.wrap, seed),
        None => Grid::new(cli.width, cli.height, cli.wrap),
    };

    match cli.pattern {
        Some(pattern) => {
            let (w, h) = pattern.size();
            if w > cli.width as i64 || h > cli.height as i64 {
                log::warn!("{} ({}x{}) does not fit in a {}x{} grid, it will be clipped",
                    pattern, w, h, cli.width, cli.height);
            }
            grid.place_pattern_centered(&pattern);
        }
        None => grid.randomize(),
    }

    let params = RenderParams {
        alive: cli.alive_glyph,
        dead: cli.dead_glyph,
        ..RenderParams::default()
    };
    let delay = Duration::from_millis(cli.delay_ms);

    log::info!("Running {} generations on a {}x{} grid", cli.generations, cli.width, cli.height);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_frame(&mut out, &grid, &params).context("failed to write frame")?;
    for _ in 0..cli.generations {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        grid.advance();
        write_frame(&mut out, &grid, &params).context("failed to write frame")?;

        if grid.count_alive() == 0 {
            log::info!("Population died out at generation {}", grid.generation());
            break;
        }
    }

    Ok(())
}
