use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Board, MoveSource, PlayerType};

/// A seat that plays a uniformly random legal column.
pub struct ComputerPlayer {
    rng: StdRng,
}

impl ComputerPlayer {
    pub fn new() -> Self {
        ComputerPlayer {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic player for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        ComputerPlayer {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for ComputerPlayer {
    fn poll_move(&mut self, board: &Board) -> Option<usize> {
        let columns = board.legal_columns();
        if columns.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..columns.len());
        Some(columns[idx])
    }

    fn kind(&self) -> PlayerType {
        PlayerType::Computer
    }
}
