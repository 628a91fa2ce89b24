use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::generators::union_find::UnionFind;
use crate::maze::{EdgeIx, Maze};

/// Carve a perfect maze with Kruskal's algorithm: shuffle the dense edge
/// set uniformly, keep an edge iff it joins two components, and remove
/// everything not kept. The surviving edges form a spanning tree, so the
/// output is deterministic for a fixed seed and nothing else.
pub fn randomized_kruskal(maze: &mut Maze, rng: &mut StdRng) {
    let mut order: Vec<EdgeIx> = (0..maze.edges().len()).collect();
    order.shuffle(rng);
    carve(maze, &order);
}

/// Scan edges in the given order, keeping spanning-tree edges and removing
/// the rest. Split from the shuffle so tests can inject a fixed scan order.
pub(crate) fn carve(maze: &mut Maze, order: &[EdgeIx]) {
    let cell_count = maze.cell_count();
    let mut uf = UnionFind::new(cell_count);
    let mut kept = vec![false; maze.edges().len()];
    let mut kept_count = 0;

    for &e in order {
        // A spanning tree needs exactly cell_count - 1 edges; stop scanning
        // once the tree is complete.
        if kept_count == cell_count - 1 {
            break;
        }
        let edge = maze.edges()[e];
        let (root1, root2) = (uf.find(edge.cell1), uf.find(edge.cell2));
        if root1 == root2 {
            // Keeping this edge would close a cycle.
            continue;
        }
        kept[e] = true;
        kept_count += 1;
        uf.union(root1, root2);
    }

    for e in 0..kept.len() {
        if !kept[e] {
            maze.remove_edge(e);
        }
    }

    debug_assert_eq!(
        maze.open_edge_count(),
        cell_count - 1,
        "carved maze must be a spanning tree"
    );
    tracing::debug!(
        "[kruskal] carved {}x{} maze, kept {} of {} edges",
        maze.width(),
        maze.height(),
        kept_count,
        kept.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;
    use crate::maze::{CellIx, Direction};

    /// Count cells reachable from the start through open passages.
    fn reachable_cells(maze: &Maze) -> usize {
        let mut seen = vec![false; maze.cell_count()];
        let mut stack: Vec<CellIx> = vec![maze.start()];
        seen[maze.start()] = true;
        while let Some(cell) = stack.pop() {
            for direction in [
                Direction::Right,
                Direction::Down,
                Direction::Left,
                Direction::Up,
            ] {
                if let Some(next) = maze.neighbor_through(cell, direction) {
                    if !seen[next] {
                        seen[next] = true;
                        stack.push(next);
                    }
                }
            }
        }
        seen.iter().filter(|&&s| s).count()
    }

    #[test]
    fn carved_maze_is_a_spanning_tree() {
        for seed in 0..8u64 {
            for (width, height) in [(4u8, 4u8), (5, 2), (1, 6), (9, 1), (10, 7)] {
                let mut maze = Maze::dense(width, height);
                randomized_kruskal(&mut maze, &mut get_rng(Some(seed)));
                // n - 1 edges over n connected cells: a tree, hence acyclic.
                assert_eq!(maze.open_edge_count(), maze.cell_count() - 1);
                assert_eq!(reachable_cells(&maze), maze.cell_count());
            }
        }
    }

    #[test]
    fn one_by_one_maze_needs_no_edges() {
        let mut maze = Maze::dense(1, 1);
        randomized_kruskal(&mut maze, &mut get_rng(Some(0)));
        assert_eq!(maze.open_edge_count(), 0);
        assert_eq!(maze.start(), maze.target());
    }

    #[test]
    fn corridor_keeps_every_edge() {
        // A 1-wide grid is already a tree; the carve must keep all edges.
        let mut maze = Maze::dense(1, 5);
        randomized_kruskal(&mut maze, &mut get_rng(Some(3)));
        for i in 0..4 {
            assert!(maze.is_open(i, Direction::Down));
        }
    }

    #[test]
    fn two_by_two_carve_with_fixed_scan_order() {
        // Dense 2x2 arena order: e0 = 0-1, e1 = 2-3 (horizontal),
        // e2 = 0-2, e3 = 1-3 (vertical).
        let mut maze = Maze::dense(2, 2);
        assert_eq!(maze.edges().len(), 4);

        // Scan order [0-1, 0-2, 1-3, 2-3]: the first three edges join new
        // components; 2-3 would close the cycle and is discarded.
        carve(&mut maze, &[0, 2, 3, 1]);

        assert!(maze.cell(0).right.is_some()); // 0-1 open
        assert_eq!(maze.cell(0).bottom, maze.cell(2).top); // 0-2 open, both sides agree
        assert!(maze.cell(2).top.is_some());
        assert!(maze.cell(3).top.is_some()); // 1-3 open
        assert!(maze.cell(2).right.is_none()); // 2-3 removed
        assert!(maze.cell(3).left.is_none());
        assert_eq!(maze.open_edge_count(), 3);
    }
}
