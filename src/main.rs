//! Bonk Arena runner (default binary).
//!
//! Owns the terminal, polls crossterm events into the key-state table, and
//! runs one `World::tick` plus one diff-flushed render per frame.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};

use bonk_arena::clock::FrameClock;
use bonk_arena::config::RunConfig;
use bonk_arena::core::World;
use bonk_arena::input::{key_from_event, meta_action, InputHandler};
use bonk_arena::logging;
use bonk_arena::term::{FrameBuffer, GameView, HostStatus, TerminalRenderer, Viewport};
use bonk_arena::types::{MetaAction, FRAME_MS};

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    logging::init(config.log_path.as_deref())?;
    info!(
        "starting: seed={} enemies={} waves={}",
        config.seed, config.initial_enemies, config.waves
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("exiting with error: {:#}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let mut world = World::new(config.world_config());
    let mut view = GameView::new(config.units_per_px);
    let release_timeout = if term.reports_key_release() {
        None
    } else {
        Some(config.key_release_ms)
    };
    let mut input = InputHandler::new().with_key_release_timeout_ms(release_timeout);
    let mut clock = FrameClock::new();
    let mut status = HostStatus::default();

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);

    let start = Instant::now();
    let frame = Duration::from_millis(FRAME_MS);
    let mut next_frame = start;

    loop {
        // Drain input until the next frame is due.
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            let now_ms = start.elapsed().as_secs_f64() * 1000.0;
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release {
                        if let Some(action) = meta_action(key) {
                            if key.kind == KeyEventKind::Press {
                                debug!("meta action: {}", action.as_str());
                                match action {
                                    MetaAction::Quit => return Ok(()),
                                    MetaAction::Pause => {
                                        status.paused = !status.paused;
                                        input.reset();
                                        info!(
                                            "paused={} at t={:.0}ms",
                                            status.paused,
                                            clock.sim_ms()
                                        );
                                    }
                                    MetaAction::Restart => {
                                        world.restart();
                                        input.reset();
                                        clock.reset();
                                        status.paused = false;
                                    }
                                }
                            }
                            continue;
                        }
                    }

                    let Some(k) = key_from_event(key) else {
                        continue;
                    };
                    match key.kind {
                        KeyEventKind::Press | KeyEventKind::Repeat => {
                            if !status.paused {
                                input.handle_key_press(k, now_ms);
                            }
                        }
                        KeyEventKind::Release => input.handle_key_release(k),
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                }
                _ => {}
            }
        }

        next_frame += frame;
        let now = Instant::now();
        if next_frame < now {
            // Fell behind (e.g. a slow terminal); do not try to catch up.
            next_frame = now + frame;
        }

        let host_ms = start.elapsed().as_secs_f64() * 1000.0;
        let (dt, sim_ms) = clock.advance(host_ms, status.paused);
        if !status.paused {
            let frame_input = input.sample(host_ms);
            let report = world.tick(dt, sim_ms, &frame_input);
            if !report.is_quiet() {
                debug!("t={:.0}ms {:?}", sim_ms, report);
            }
        }

        view.render_into_with_status(&world, sim_ms, &status, viewport, &mut fb);
        term.draw_swap(&mut fb)?;
    }
}
