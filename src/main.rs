//! blockfall runner (default binary).
//!
//! Crossterm for input, the framebuffer renderer for output, and a fixed
//! 60 FPS frame loop feeding wall-clock time into the gravity timer.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info, trace};

use blockfall::core::{GameConfig, GameSnapshot, GameState, TickOutcome};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::TARGET_FPS;

#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about = "Falling-block puzzle in the terminal")]
struct Cli {
    /// RNG seed for the piece sequence (default: derived from the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// TOML config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Milliseconds between gravity ticks
    #[arg(long)]
    gravity_ms: Option<u64>,

    /// Board width in cells
    #[arg(long)]
    width: Option<u16>,

    /// Board height in cells
    #[arg(long)]
    height: Option<u16>,

    /// Where tracing output goes
    #[arg(long, value_name = "PATH", default_value = "blockfall.log")]
    log_file: PathBuf,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(gravity_ms) = self.gravity_ms {
            config.gravity_ms = gravity_ms;
        }
        Ok(config)
    }

    fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

/// Restore terminal state - called on panic
fn restore_terminal() {
    use crossterm::{
        cursor::Show,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

fn init_logging(path: &Path) {
    // Logs must never reach the terminal the game is drawing on.
    let writer: Box<dyn Write + Send> = match std::fs::File::create(path) {
        Ok(file) => Box::new(file),
        Err(_) => Box::new(io::sink()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(Mutex::new(writer))
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config()?;
    let seed = cli.seed();

    init_logging(&cli.log_file);
    info!(
        seed,
        width = config.width,
        height = config.height,
        gravity_ms = config.gravity_ms,
        "starting"
    );

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    let game = GameState::with_config(config, seed).context("invalid game config")?;

    let mut term = TerminalRenderer::new();
    term.enter().context("entering raw mode")?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<()> {
    let view = GameView::default();
    let frame = Duration::from_secs(1) / TARGET_FPS;

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_update = Instant::now();

    loop {
        let frame_start = Instant::now();

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input until the frame budget runs out.
        while let Some(timeout) = frame.checked_sub(frame_start.elapsed()) {
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        info!(score = game.score(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let moved = game.apply_action(action);
                        trace!(action = action.as_str(), moved, "input");
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        let now = Instant::now();
        let elapsed = now - last_update;
        last_update = now;
        match game.update(elapsed) {
            Some(TickOutcome::Locked { lines_cleared }) if lines_cleared > 0 => {
                debug!(lines_cleared, score = game.score(), "lines cleared");
            }
            _ => {}
        }
    }
}
