use rand::{SeedableRng, rngs::StdRng};

mod kruskal;
mod union_find;

pub use kruskal::randomized_kruskal;

use crate::maze::Maze;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Generator {
    Kruskal,
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
        }
    }
}

/// Carve passages into a dense maze with the selected algorithm.
pub fn generate_maze(maze: &mut Maze, generator: Generator, rng: &mut StdRng) {
    tracing::info!(
        "[generate] {} over {}x{} grid",
        generator,
        maze.width(),
        maze.height()
    );
    match generator {
        Generator::Kruskal => randomized_kruskal(maze, rng),
    }
}
