//! Terminal falling-blocks runner (default binary).
//!
//! Parses the command line, optionally installs a file logger, then runs the
//! frame loop: poll input until the frame is due, advance the fall timer,
//! render the snapshot.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, Level};

use falling_blocks::core::{GameSnapshot, TickOutcome};
use falling_blocks::engine::{FramePacer, GameConfig, Session};
use falling_blocks::input::{action_for_event, should_quit};
use falling_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport, MAX_CELL_WIDTH};
use falling_blocks::types::{FALL_INTERVAL_MS, FRAME_RATE, GRID_HEIGHT, GRID_WIDTH};

#[derive(Parser, Debug)]
#[command(name = "falling-blocks", version, about = "Falling-block puzzle game for the terminal")]
struct Cli {
    #[arg(long, default_value_t = GRID_WIDTH, help = "Grid width in cells")]
    width: u8,

    #[arg(long, default_value_t = GRID_HEIGHT, help = "Grid height in cells")]
    height: u8,

    #[arg(
        long,
        value_name = "MS",
        default_value_t = FALL_INTERVAL_MS,
        help = "Milliseconds between automatic one-row descents"
    )]
    fall_interval_ms: u32,

    #[arg(long, default_value_t = FRAME_RATE, help = "Maximum frames per second")]
    fps: u32,

    #[arg(long, help = "Seed for the piece generator (random when omitted)")]
    seed: Option<u64>,

    #[arg(
        long,
        default_value_t = 2,
        value_parser = clap::value_parser!(u16).range(1..=MAX_CELL_WIDTH as i64),
        help = "Terminal columns per board cell"
    )]
    cell_width: u16,

    #[arg(long, help = "Stay on the game-over screen instead of exiting")]
    stay: bool,

    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath, help = "Write logs to this file")]
    log_file: Option<PathBuf>,

    #[arg(long, value_name = "LEVEL", default_value_t = Level::INFO, help = "Maximum log level (error, warn, info, debug, trace)")]
    log_level: Level,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            width: self.width,
            height: self.height,
            fall_interval: Duration::from_millis(self.fall_interval_ms as u64),
            frame_rate: self.fps,
            seed: self.seed,
            ..GameConfig::default()
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    // The terminal is in raw mode on the alternate screen; logs only go to a file.
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.config();
    let mut session = Session::from_config(&config).context("invalid configuration")?;
    info!(
        width = config.width,
        height = config.height,
        fall_interval_ms = config.fall_interval.as_millis() as u64,
        seed = ?config.seed,
        "starting game"
    );

    let view = GameView::new(cli.cell_width, 1);
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &view, &config, cli.stay);

    // Restore the terminal before reporting any error from the loop.
    let restored = term.exit();
    result?;
    restored
}

fn run(
    term: &mut TerminalRenderer,
    session: &mut Session,
    view: &GameView,
    config: &GameConfig,
    stay: bool,
) -> Result<()> {
    let pacer = FramePacer::new(config.frame_duration());
    let mut snap = GameSnapshot::new(config.width, config.height);
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_frame = Instant::now();
    let mut game_over_since: Option<Instant> = None;

    loop {
        let frame_start = Instant::now();

        // Render.
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if session.game_over() {
            let since = *game_over_since.get_or_insert(frame_start);
            if !stay && since.elapsed() >= config.game_over_pause {
                info!("exiting after game over");
                return Ok(());
            }
        } else {
            game_over_since = None;
        }

        // Input until the next frame is due.
        let mut timeout = pacer.remaining(frame_start.elapsed());
        while event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
                    info!("quit requested");
                    return Ok(());
                }
                Event::Resize(..) => term.invalidate(),
                ev => {
                    if let Some(action) = action_for_event(&ev) {
                        session.apply(action);
                    }
                }
            }
            timeout = pacer.remaining(frame_start.elapsed());
        }

        // Gravity.
        let now = Instant::now();
        let dt = now.duration_since(last_frame);
        last_frame = now;
        match session.advance(dt) {
            Some(TickOutcome::Locked { rows_cleared }) if rows_cleared > 0 => {
                info!(rows_cleared, "rows cleared");
            }
            Some(TickOutcome::ToppedOut { rows_cleared }) => {
                info!(rows_cleared, "topped out");
            }
            _ => {}
        }
    }
}
