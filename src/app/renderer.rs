use std::collections::HashSet;
use std::fmt;
use std::io::{Stdout, Write};

use crossterm::{
    QueueableCommand, cursor, queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::maze::{CellIx, Direction, Maze};
use crate::session::{Phase, Session};

/// One character cell of the rendered wall grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridCell {
    Wall,
    Empty,
    Visited,
    Route,
    Start,
    Goal,
    Walker,
}

impl GridCell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            GridCell::Wall => "⬜".with(Color::White),
            GridCell::Empty => "  ".with(Color::Reset),
            GridCell::Visited => "* ".with(Color::Cyan),
            GridCell::Route => "██".with(Color::Blue),
            GridCell::Start => "🟩".with(Color::Green),
            GridCell::Goal => "🟪".with(Color::Magenta),
            GridCell::Walker => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                GridCell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Paints the maze onto the terminal as a `(2w+1) x (2h+1)` wall grid:
/// odd/odd coordinates are cell interiors, even coordinates are wall
/// positions that render solid or open depending on the maze's edge state.
pub struct Renderer {
    stdout: Stdout,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            stdout: std::io::stdout(),
        }
    }

    fn grid_dims(maze: &Maze) -> (u16, u16) {
        (
            maze.width() as u16 * 2 + 1,
            maze.height() as u16 * 2 + 1,
        )
    }

    /// Check whether the terminal fits the wall grid plus two status rows.
    /// If not, replace the display with a resize hint.
    fn check_size(&mut self, maze: &Maze) -> std::io::Result<bool> {
        let (grid_width, grid_height) = Self::grid_dims(maze);
        let (term_width, term_height) = terminal::size()?;
        if term_width < grid_width * GridCell::CELL_WIDTH || term_height < grid_height + 2 {
            let msg = format!(
                "Terminal ({}x{}) is too small for a {}x{} maze ({}x{} characters). Please resize.\r\n",
                term_width,
                term_height,
                maze.width(),
                maze.height(),
                grid_width * GridCell::CELL_WIDTH,
                grid_height + 2,
            );
            queue!(
                self.stdout,
                terminal::Clear(ClearType::All),
                cursor::MoveTo(0, 0),
                style::PrintStyledContent(msg.with(Color::Yellow).attribute(Attribute::Bold)),
            )?;
            self.stdout.flush()?;
            return Ok(false);
        }
        Ok(true)
    }

    /// Repaint the whole frame: walls, revealed cells, endpoints, walker,
    /// and the status rows.
    pub fn draw_frame(&mut self, session: &Session) -> std::io::Result<()> {
        let maze = session.maze();
        if !self.check_size(maze)? {
            return Ok(());
        }
        let (grid_width, grid_height) = Self::grid_dims(maze);
        let visited: HashSet<CellIx> = session.drawn_visits().iter().copied().collect();
        let route: HashSet<CellIx> = session.drawn_path().iter().copied().collect();

        queue!(
            self.stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        for gy in 0..grid_height {
            for gx in 0..grid_width {
                let cell = Self::grid_cell_at(session, &visited, &route, gx, gy);
                self.stdout.queue(style::Print(cell))?;
            }
            self.stdout.queue(style::Print("\r\n"))?;
        }
        self.draw_status(session)
    }

    /// What to draw at one wall-grid coordinate.
    fn grid_cell_at(
        session: &Session,
        visited: &HashSet<CellIx>,
        route: &HashSet<CellIx>,
        gx: u16,
        gy: u16,
    ) -> GridCell {
        let maze = session.maze();
        match (gx % 2 == 0, gy % 2 == 0) {
            // Corner posts are always walls.
            (true, true) => GridCell::Wall,
            // Vertical wall column: open iff the cell to its left connects right.
            (true, false) => {
                if gx == 0 || gx == maze.width() as u16 * 2 {
                    return GridCell::Wall;
                }
                let ix = maze.index_of(((gx / 2 - 1) as u8, (gy / 2) as u8));
                if maze.is_open(ix, Direction::Right) {
                    GridCell::Empty
                } else {
                    GridCell::Wall
                }
            }
            // Horizontal wall row: open iff the cell above connects down.
            (false, true) => {
                if gy == 0 || gy == maze.height() as u16 * 2 {
                    return GridCell::Wall;
                }
                let ix = maze.index_of(((gx / 2) as u8, (gy / 2 - 1) as u8));
                if maze.is_open(ix, Direction::Down) {
                    GridCell::Empty
                } else {
                    GridCell::Wall
                }
            }
            // Cell interior.
            (false, false) => {
                let ix = maze.index_of(((gx / 2) as u8, (gy / 2) as u8));
                Self::cell_kind(session, visited, route, ix)
            }
        }
    }

    fn cell_kind(
        session: &Session,
        visited: &HashSet<CellIx>,
        route: &HashSet<CellIx>,
        ix: CellIx,
    ) -> GridCell {
        let maze = session.maze();
        if session.phase() == Phase::ManualSolving
            && ix == session.walker()
            && ix != maze.start()
        {
            GridCell::Walker
        } else if route.contains(&ix) {
            GridCell::Route
        } else if ix == maze.start() {
            GridCell::Start
        } else if ix == maze.target() {
            GridCell::Goal
        } else if visited.contains(&ix) {
            GridCell::Visited
        } else {
            GridCell::Empty
        }
    }

    /// Repaint a single maze cell in place.
    pub fn paint_cell(&mut self, maze: &Maze, ix: CellIx, kind: GridCell) -> std::io::Result<()> {
        let (x, y) = maze.cell(ix).coord;
        let (gx, gy) = (x as u16 * 2 + 1, y as u16 * 2 + 1);
        queue!(
            self.stdout,
            cursor::MoveTo(gx * GridCell::CELL_WIDTH, gy),
            style::Print(kind)
        )?;
        self.stdout.flush()
    }

    /// Redraw the status rows below the maze.
    pub fn draw_status(&mut self, session: &Session) -> std::io::Result<()> {
        let row = session.maze().height() as u16 * 2 + 1;
        queue!(
            self.stdout,
            cursor::MoveTo(0, row),
            terminal::Clear(ClearType::FromCursorDown),
            style::PrintStyledContent(
                "b: BFS  d: DFS  m: manual  r: new maze  Esc: quit".with(Color::DarkGrey)
            ),
        )?;
        let message = match session.phase() {
            Phase::Solved => Some(
                "The maze is solved."
                    .with(Color::Green)
                    .attribute(Attribute::Bold),
            ),
            Phase::ManualSolving => {
                Some("Manual mode: arrow keys to move.".with(Color::Yellow))
            }
            _ => None,
        };
        if let Some(message) = message {
            queue!(
                self.stdout,
                cursor::MoveTo(0, row + 1),
                style::PrintStyledContent(message)
            )?;
        }
        self.stdout.flush()
    }
}
