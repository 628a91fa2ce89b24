use std::collections::VecDeque;

use rand::rngs::StdRng;

use crate::generators::{Generator, generate_maze, get_rng};
use crate::maze::{CellIx, Direction, Maze};
use crate::solvers::{self, SearchResult, Solver};

/// What the session is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fresh maze, nothing animating. Generation runs synchronously inside
    /// construction and regeneration, so there is no generating phase to
    /// observe.
    Idle,
    /// A solver ran; the exploration and path reveals are animating.
    Solving(Solver),
    /// The user walks the maze with the arrow keys.
    ManualSolving,
    /// The path reveal reached the start cell.
    Solved,
}

/// What one tick made newly available to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEffect {
    /// A cell from the exploration reveal.
    Visited(CellIx),
    /// A cell from the solution-path reveal.
    PathCell(CellIx),
    /// Nothing left to animate.
    Idle,
}

/// One maze plus everything the renderer needs to animate it.
///
/// All state is owned here and mutated only through the command methods;
/// everything runs to completion synchronously, so any single-threaded
/// driver (the terminal app, a test) can call in directly. The animation
/// queues hold cells waiting to be revealed; `tick` moves one cell per call
/// into the drawn accumulators.
pub struct Session {
    maze: Maze,
    phase: Phase,
    rng: StdRng,
    /// Manual walker position.
    walker: CellIx,
    /// Cells the walker has stepped on, in first-visit order. The start cell
    /// is not part of the trail.
    walker_trail: Vec<CellIx>,
    /// Discovery-order queue feeding the visited accumulator.
    pending_visits: VecDeque<CellIx>,
    /// Target-first solution queue feeding the path accumulator.
    pending_path: VecDeque<CellIx>,
    drawn_visits: Vec<CellIx>,
    drawn_path: Vec<CellIx>,
}

impl Session {
    /// Build a session over a freshly carved maze. Omitting the seed uses
    /// OS entropy; a fixed seed makes the whole session deterministic.
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u8, height: u8, seed: Option<u64>) -> Self {
        let mut rng = get_rng(seed);
        let maze = Self::carve(width, height, &mut rng);
        Session {
            walker: maze.start(),
            maze,
            phase: Phase::Idle,
            rng,
            walker_trail: Vec::new(),
            pending_visits: VecDeque::new(),
            pending_path: VecDeque::new(),
            drawn_visits: Vec::new(),
            drawn_path: Vec::new(),
        }
    }

    fn carve(width: u8, height: u8, rng: &mut StdRng) -> Maze {
        let mut maze = Maze::dense(width, height);
        generate_maze(&mut maze, Generator::Kruskal, rng);
        maze
    }

    /// Discard the maze and all animation state and carve a fresh one.
    /// Ignored while an animation is still revealing, whatever the phase.
    pub fn regenerate(&mut self) {
        if self.is_animating() {
            tracing::debug!("[session] regenerate ignored mid-animation");
            return;
        }
        tracing::info!(
            "[session] regenerating {}x{} maze",
            self.maze.width(),
            self.maze.height()
        );
        self.maze = Self::carve(self.maze.width(), self.maze.height(), &mut self.rng);
        self.phase = Phase::Idle;
        self.reset_progress();
    }

    /// Clear the walker, its trail, and both animation queues and
    /// accumulators, leaving the maze and phase alone.
    fn reset_progress(&mut self) {
        self.walker = self.maze.start();
        self.walker_trail.clear();
        self.pending_visits.clear();
        self.pending_path.clear();
        self.drawn_visits.clear();
        self.drawn_path.clear();
    }

    /// Whether a new command (solve, manual mode) may start. A solve in
    /// progress and manual mode both win; a finished solve does not.
    fn accepts_commands(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Solved)
    }

    /// Run a full search and load the animation queues: the exploration
    /// reveal in visit order, then the solution path from the target back
    /// to the start. Any previous run's progress is discarded first.
    pub fn solve(&mut self, solver: Solver) {
        if !self.accepts_commands() {
            tracing::debug!("[session] solve ignored in phase {:?}", self.phase);
            return;
        }
        tracing::info!("[session] solving with {}", solver);
        self.reset_progress();
        let result = solvers::search(&self.maze, self.maze.start(), self.maze.target(), solver);
        assert!(result.found, "carved maze must connect start to target");
        self.pending_visits = result.visit_order.iter().copied().collect();
        self.load_solution_path(&result);
        self.phase = Phase::Solving(solver);
    }

    /// Queue the full solution path, target first, then the reconstructed
    /// walk back down to the start.
    fn load_solution_path(&mut self, result: &SearchResult) {
        self.pending_path.clear();
        self.pending_path.push_back(self.maze.target());
        self.pending_path.extend(solvers::reconstruct(
            &result.came_from,
            self.maze.target(),
            self.maze.start(),
        ));
    }

    /// Switch to manual solving, discarding any previous run's progress.
    /// No-op while a solve is in progress or manual mode is already active.
    pub fn enter_manual(&mut self) {
        if !self.accepts_commands() {
            tracing::debug!("[session] manual mode ignored in phase {:?}", self.phase);
            return;
        }
        tracing::info!("[session] entering manual mode");
        self.reset_progress();
        self.phase = Phase::ManualSolving;
    }

    /// Try to step the walker one cell. Succeeds only in manual mode and
    /// only through an open passage; walls, boundaries, and other phases are
    /// silent no-ops. Returns the new position on success.
    ///
    /// First arrival at the target triggers a full search so the correct
    /// path can be revealed afterwards; the walker's own trail is not
    /// path-like (it may backtrack), so it cannot serve as the answer.
    pub fn attempt_move(&mut self, direction: Direction) -> Option<CellIx> {
        if self.phase != Phase::ManualSolving {
            return None;
        }
        let next = self.maze.neighbor_through(self.walker, direction)?;
        self.walker = next;
        if self.walker_trail.contains(&next) {
            // Revisiting: position changes, the trail does not.
            return Some(next);
        }
        self.walker_trail.push(next);
        if next == self.maze.target() {
            tracing::info!("[session] walker reached the target");
            let result =
                solvers::search(&self.maze, self.maze.start(), self.maze.target(), Solver::Dfs);
            assert!(result.found, "carved maze must connect start to target");
            self.load_solution_path(&result);
        }
        Some(next)
    }

    /// Advance the animation one step: exploration cells reveal first, then
    /// the solution path; in manual mode the walker's trail is mirrored into
    /// the visited accumulator one cell per tick.
    pub fn tick(&mut self) -> TickEffect {
        if let Some(cell) = self.pending_visits.pop_front() {
            self.drawn_visits.push(cell);
            return TickEffect::Visited(cell);
        }
        if let Some(cell) = self.pending_path.pop_front() {
            self.drawn_path.push(cell);
            if self.is_solved() {
                self.phase = Phase::Solved;
            }
            return TickEffect::PathCell(cell);
        }
        if self.phase == Phase::ManualSolving && self.drawn_visits.len() < self.walker_trail.len()
        {
            let cell = self.walker_trail[self.drawn_visits.len()];
            self.drawn_visits.push(cell);
            return TickEffect::Visited(cell);
        }
        TickEffect::Idle
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current manual walker position.
    pub fn walker(&self) -> CellIx {
        self.walker
    }

    /// Exploration cells revealed so far, in discovery order.
    pub fn drawn_visits(&self) -> &[CellIx] {
        &self.drawn_visits
    }

    /// Solution-path cells revealed so far, target first.
    pub fn drawn_path(&self) -> &[CellIx] {
        &self.drawn_path
    }

    /// Whether either animation queue still holds cells.
    pub fn is_animating(&self) -> bool {
        !self.pending_visits.is_empty() || !self.pending_path.is_empty()
    }

    /// Solved once the path reveal has walked all the way back to the start.
    pub fn is_solved(&self) -> bool {
        self.drawn_path.last() == Some(&self.maze.start())
    }
}
