use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, interval, sleep_until};

use crate::config::AppConfig;
use crate::game::{Game, GameStatus, TICK_INTERVAL, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;

/// Interactive play in the terminal.
///
/// Owns the single [`Game`] and the only movement timer. A tick is armed
/// after a start or after the previous tick was applied, and only while
/// the game is running, so at most one tick is ever pending.
pub struct HumanMode {
    game: Game,
    renderer: Renderer,
    input_handler: InputHandler,
    frame_interval: Duration,
    next_tick: Option<Instant>,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            game: Game::new(&config.game),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            frame_interval: config.render.frame_interval(),
            next_tick: None,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut render_timer = interval(self.frame_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = wait_for_tick(self.next_tick) => {
                    self.apply_tick();
                }

                // Render frame
                _ = render_timer.tick() => {
                    let snapshot = self.game.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };

        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Steer(direction) => {
                self.game.request_direction(direction);
            }
            KeyAction::Start => {
                if self.game.start() {
                    self.next_tick = Some(Instant::now() + TICK_INTERVAL);
                }
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    /// Apply one tick, then arm the next one only if the game is still running
    fn apply_tick(&mut self) -> TickOutcome {
        self.next_tick = None;
        let outcome = self.game.on_tick();

        if self.game.status() == GameStatus::Running {
            self.next_tick = Some(Instant::now() + TICK_INTERVAL);
        }

        outcome
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Resolves at the deadline, or never when no tick is armed
async fn wait_for_tick(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}
