use std::collections::{HashMap, HashSet, VecDeque};

use crate::maze::{CellIx, Direction, Maze};

/// Fixed neighbor priority. Affects DFS branch order (and so the animated
/// exploration), not which path is found: the maze is a tree.
const NEIGHBOR_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::Up,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Bfs,
    Dfs,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
        }
    }
}

/// Outcome of one search run.
pub struct SearchResult {
    /// Which cell discovered each discovered cell.
    pub came_from: HashMap<CellIx, CellIx>,
    /// Cells in the order the search visited them.
    pub visit_order: Vec<CellIx>,
    /// Whether the target was reached. False only for a disconnected graph,
    /// which a correctly carved maze never produces; callers must check.
    pub found: bool,
}

/// Frontier search from `start` to `target` over open passages.
///
/// One worklist serves both modes: DFS pushes discovered cells at the front
/// (a stack), BFS at the back (a queue); both pop from the front.
pub fn search(maze: &Maze, start: CellIx, target: CellIx, solver: Solver) -> SearchResult {
    let mut came_from = HashMap::new();
    let mut visit_order = Vec::new();
    let mut seen: HashSet<CellIx> = HashSet::new();
    let mut worklist = VecDeque::from([start]);

    while let Some(next) = worklist.pop_front() {
        if seen.contains(&next) {
            continue;
        }
        seen.insert(next);
        visit_order.push(next);
        if next == target {
            return SearchResult {
                came_from,
                visit_order,
                found: true,
            };
        }
        for direction in NEIGHBOR_ORDER {
            let Some(neighbor) = maze.neighbor_through(next, direction) else {
                continue;
            };
            if seen.contains(&neighbor) {
                continue;
            }
            match solver {
                Solver::Dfs => worklist.push_front(neighbor),
                Solver::Bfs => worklist.push_back(neighbor),
            }
            // Recorded on first discovery only; repeat pushes keep the
            // original discoverer.
            came_from.entry(neighbor).or_insert(next);
        }
    }

    SearchResult {
        came_from,
        visit_order,
        found: false,
    }
}

/// Walk predecessor pointers backward from `target` until reaching `start`.
///
/// The returned sequence runs from the target's predecessor down to `start`
/// (appended last); the target itself is the caller's to prepend. Empty when
/// `target == start`. Panics on a cyclic or broken chain, which a search
/// over a carved maze never produces.
pub fn reconstruct(
    came_from: &HashMap<CellIx, CellIx>,
    target: CellIx,
    start: CellIx,
) -> Vec<CellIx> {
    let mut path = Vec::new();
    let mut seen = HashSet::from([target]);
    let mut current = target;
    while current != start {
        let previous = *came_from
            .get(&current)
            .unwrap_or_else(|| panic!("predecessor chain broken at cell {current}"));
        assert!(
            seen.insert(previous),
            "predecessor chain cycles at cell {previous}"
        );
        path.push(previous);
        current = previous;
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{get_rng, randomized_kruskal};

    fn carved(width: u8, height: u8, seed: u64) -> Maze {
        let mut maze = Maze::dense(width, height);
        randomized_kruskal(&mut maze, &mut get_rng(Some(seed)));
        maze
    }

    fn grid_adjacent(maze: &Maze, a: CellIx, b: CellIx) -> bool {
        let width = maze.width() as usize;
        let (lo, hi) = (a.min(b), a.max(b));
        hi - lo == width || (hi - lo == 1 && hi % width != 0)
    }

    #[test]
    fn bfs_and_dfs_find_the_same_path_length() {
        for seed in 0..6u64 {
            let maze = carved(6, 5, seed);
            let bfs = search(&maze, maze.start(), maze.target(), Solver::Bfs);
            let dfs = search(&maze, maze.start(), maze.target(), Solver::Dfs);
            assert!(bfs.found && dfs.found);
            let bfs_path = reconstruct(&bfs.came_from, maze.target(), maze.start());
            let dfs_path = reconstruct(&dfs.came_from, maze.target(), maze.start());
            // The maze is a tree: one simple path, so equal lengths. Only
            // the visit order may differ between the two modes.
            assert_eq!(bfs_path.len(), dfs_path.len());
        }
    }

    #[test]
    fn every_predecessor_step_crosses_an_open_edge() {
        let maze = carved(5, 5, 11);
        let result = search(&maze, maze.start(), maze.target(), Solver::Bfs);
        for (&cell, &from) in &result.came_from {
            assert!(grid_adjacent(&maze, cell, from));
            let open = NEIGHBOR_ORDER
                .iter()
                .any(|&d| maze.neighbor_through(from, d) == Some(cell));
            assert!(open, "cell {cell} was discovered through a wall");
        }
    }

    #[test]
    fn visit_order_starts_at_start_and_ends_at_target() {
        let maze = carved(4, 4, 2);
        for solver in [Solver::Bfs, Solver::Dfs] {
            let result = search(&maze, maze.start(), maze.target(), solver);
            assert_eq!(result.visit_order.first(), Some(&maze.start()));
            assert_eq!(result.visit_order.last(), Some(&maze.target()));
        }
    }

    #[test]
    fn reconstruct_is_idempotent() {
        let maze = carved(5, 4, 9);
        let result = search(&maze, maze.start(), maze.target(), Solver::Dfs);
        let first = reconstruct(&result.came_from, maze.target(), maze.start());
        let second = reconstruct(&result.came_from, maze.target(), maze.start());
        assert_eq!(first, second);
        assert_eq!(first.last(), Some(&maze.start()));
    }

    #[test]
    fn single_cell_maze_terminates_immediately() {
        let maze = carved(1, 1, 0);
        let result = search(&maze, maze.start(), maze.target(), Solver::Bfs);
        assert!(result.found);
        assert!(result.came_from.is_empty());
        assert_eq!(result.visit_order, vec![0]);
        // Start equals target: the reconstructed suffix is empty, so the
        // full path is just the one cell the caller prepends.
        assert!(reconstruct(&result.came_from, maze.target(), maze.start()).is_empty());
    }

    #[test]
    fn disconnected_graph_reports_not_found() {
        // A dense maze with the target walled off entirely.
        let mut maze = Maze::dense(2, 1);
        maze.remove_edge(0);
        let result = search(&maze, maze.start(), maze.target(), Solver::Bfs);
        assert!(!result.found);
        assert!(!result.came_from.contains_key(&maze.target()));
    }
}
