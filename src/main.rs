//! Terminal Teeko runner (default binary).

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEvent};
use tracing::{error, info};

use teeko::cli::Cli;
use teeko::config::AppConfig;
use teeko::core::{GameSession, GameSnapshot, Report};
use teeko::input::{handle_key_event, is_press, should_quit};
use teeko::logging;
use teeko::term::{
    FrameBuffer, FrameGate, GameView, LedMatrix, Scene, StatusPanel, TerminalRenderer, Viewport,
};
use teeko::types::TICK_MS;

/// Redraw at least this often even when nothing changed.
const REFRESH_MS: u64 = 1_000;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve()?;
    logging::init(&config)?;
    info!(?config, "starting teeko");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!("exiting with error: {e:#}");
    }
    result
}

struct Front {
    matrix: LedMatrix,
    status: StatusPanel,
}

impl Front {
    fn show(&mut self, report: &Report) {
        report.present(&mut self.matrix, &mut self.status);
    }

    fn revision(&self) -> u64 {
        self.matrix.revision().wrapping_add(self.status.revision())
    }
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

/// Next key press, or `None` when the player asked to quit.
fn wait_for_key() -> Result<Option<KeyEvent>> {
    loop {
        if let Event::Key(key) = event::read()? {
            if !is_press(&key) {
                continue;
            }
            if should_quit(key) {
                return Ok(None);
            }
            return Ok(Some(key));
        }
    }
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_splash_into(viewport(), &mut fb);
    term.present(&mut fb)?;
    if wait_for_key()?.is_none() {
        return Ok(());
    }

    let mut session = GameSession::new(config.session_config()?);
    let mut front = Front {
        matrix: LedMatrix::new(),
        status: StatusPanel::new(),
    };
    front.show(&session.new_game());

    let mut snapshot = GameSnapshot::default();
    let mut gate = FrameGate::new(REFRESH_MS);
    let started = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let now_ms = started.elapsed().as_millis() as u64;
        if gate.should_draw(now_ms, front.revision()) {
            session.snapshot_into(&mut snapshot);
            let scene = Scene {
                matrix: &front.matrix,
                status: &front.status,
                snapshot: &snapshot,
            };
            view.render_into(&scene, viewport(), &mut fb);
            term.present(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_press(&key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if session.is_over() {
                        // Any key starts the next game.
                        front.show(&session.new_game());
                    } else if let Some(action) = handle_key_event(key) {
                        front.show(&session.apply_action(action));
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    gate.reset();
                }
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            front.show(&session.tick(elapsed.as_millis() as u32));
        }
    }
}
