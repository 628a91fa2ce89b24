mod renderer;

use std::io::{Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    queue,
    terminal::{self, ClearType},
};

use crate::app::renderer::{GridCell, Renderer};
use crate::maze::Direction;
use crate::session::{Phase, Session, TickEffect};
use crate::solvers::Solver;

/// The terminal front end: owns the event loop that turns key presses into
/// session commands and poll timeouts into animation ticks. Everything runs
/// on one thread; the session never suspends mid-algorithm, so a tick or a
/// key press always sees a consistent maze.
pub struct App {
    /// Time between animation ticks; doubles as the input poll timeout.
    tick_rate: Duration,
}

impl Default for App {
    fn default() -> Self {
        App {
            tick_rate: Duration::from_millis(25),
        }
    }
}

impl App {
    /// Set a panic hook to restore terminal state on panic, so the terminal
    /// is not left in raw mode or the alternate screen.
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore errors, already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter the alternate screen.
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Leave the alternate screen and disable raw mode.
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Main event loop. Blocks until the user exits with Esc.
    pub fn run(&self, width: u8, height: u8, seed: Option<u64>) -> std::io::Result<()> {
        tracing::info!("[app] starting {}x{} session, seed {:?}", width, height, seed);
        let mut session = Session::new(width, height, seed);
        let mut renderer = Renderer::new();
        renderer.draw_frame(&session)?;

        loop {
            if event::poll(self.tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if !self.handle_key(key.code, &mut session, &mut renderer)? {
                            break;
                        }
                    }
                    Event::Resize(_, _) => renderer.draw_frame(&session)?,
                    _ => {}
                }
            } else {
                self.advance(&mut session, &mut renderer)?;
            }
        }
        tracing::info!("[app] exiting");
        Ok(())
    }

    /// Dispatch one key press. Returns false when the app should exit.
    fn handle_key(
        &self,
        code: KeyCode,
        session: &mut Session,
        renderer: &mut Renderer,
    ) -> std::io::Result<bool> {
        match code {
            KeyCode::Esc => return Ok(false),
            KeyCode::Char('r') => {
                session.regenerate();
                renderer.draw_frame(session)?;
            }
            // Starting a run from a solved board wipes the previous reveal,
            // so repaint the whole frame.
            KeyCode::Char('b') => {
                session.solve(Solver::Bfs);
                renderer.draw_frame(session)?;
            }
            KeyCode::Char('d') => {
                session.solve(Solver::Dfs);
                renderer.draw_frame(session)?;
            }
            KeyCode::Char('m') => {
                session.enter_manual();
                renderer.draw_frame(session)?;
            }
            KeyCode::Right => self.handle_move(Direction::Right, session, renderer)?,
            KeyCode::Left => self.handle_move(Direction::Left, session, renderer)?,
            KeyCode::Up => self.handle_move(Direction::Up, session, renderer)?,
            KeyCode::Down => self.handle_move(Direction::Down, session, renderer)?,
            _ => {}
        }
        Ok(true)
    }

    /// Step the walker and repaint the two affected cells. Walls and
    /// non-manual phases are silent no-ops.
    fn handle_move(
        &self,
        direction: Direction,
        session: &mut Session,
        renderer: &mut Renderer,
    ) -> std::io::Result<()> {
        let from = session.walker();
        let Some(to) = session.attempt_move(direction) else {
            return Ok(());
        };
        let maze = session.maze();
        let from_kind = if from == maze.start() {
            GridCell::Start
        } else {
            GridCell::Visited
        };
        renderer.paint_cell(maze, from, from_kind)?;
        let to_kind = if to == maze.start() {
            GridCell::Start
        } else {
            GridCell::Walker
        };
        renderer.paint_cell(maze, to, to_kind)?;
        Ok(())
    }

    /// Advance the animation one tick and paint whatever it revealed.
    fn advance(&self, session: &mut Session, renderer: &mut Renderer) -> std::io::Result<()> {
        match session.tick() {
            TickEffect::Visited(cell) => {
                let maze = session.maze();
                let kind = if cell == maze.start() {
                    GridCell::Start
                } else if cell == maze.target() {
                    GridCell::Goal
                } else if session.phase() == Phase::ManualSolving && cell == session.walker() {
                    GridCell::Walker
                } else {
                    GridCell::Visited
                };
                renderer.paint_cell(maze, cell, kind)?;
            }
            TickEffect::PathCell(cell) => {
                renderer.paint_cell(session.maze(), cell, GridCell::Route)?;
                if session.is_solved() {
                    renderer.draw_status(session)?;
                }
            }
            TickEffect::Idle => {}
        }
        Ok(())
    }
}
