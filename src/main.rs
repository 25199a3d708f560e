//! Terminal Columns runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `columns::term`.
//!
//! Environment:
//! - `COLUMNS_SEED`: fixed RNG seed (default: system clock)
//! - `COLUMNS_LOG`: write `tracing` output to this file, filtered by `RUST_LOG`

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use columns::core::{Session, SessionConfig, SessionSnapshot};
use columns::input::{should_quit, InputHandler};
use columns::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use columns::types::{GameAction, FRAME_MS};

fn main() -> Result<()> {
    init_logging()?;

    let seed = seed_from_env()?;
    let mut session = Session::new(SessionConfig::default().with_seed(seed))?;
    info!(seed, "starting session");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("COLUMNS_LOG") else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("creating log file {path:?}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn seed_from_env() -> Result<u32> {
    if let Ok(s) = std::env::var("COLUMNS_SEED") {
        return s
            .parse()
            .with_context(|| format!("COLUMNS_SEED must be a u32, got {s:?}"));
    }
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    Ok(nanos)
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    session.start();

    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut snap = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            info!("quit");
                            return Ok(());
                        }
                        if let Some(action) = input.handle_key_press(key) {
                            if action == GameAction::Restart {
                                input.reset();
                            }
                            session.apply_action(action);
                        }
                    }
                    KeyEventKind::Release => {
                        if input.handle_key_release(key) {
                            session.set_soft_drop(false);
                        }
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Advance by the real time that passed.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            if input.update(elapsed_ms) {
                session.set_soft_drop(false);
            }
            session.tick(elapsed_ms);
        }
    }
}
