//! Progress tracking for one puzzle being solved.
//!
//! The session counts moves and correctly placed pieces, runs a timer from
//! the first move until the last piece is placed, and reports completion.
//! Callers pass the current time in, so nothing here reads a clock.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::grid::{Cell, Grid};
use crate::layout::PieceGeometry;

/// What happened when a piece was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece is already in place, or not part of the puzzle, and did not move.
    Refused,
    /// The piece landed away from its home position.
    Missed,
    /// The piece snapped into its home position.
    Located,
    /// The piece snapped into place and it was the last one.
    Solved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    Stopped { elapsed: Duration },
    Running { since: Instant },
}

#[derive(Debug, Clone)]
pub struct PuzzleSession {
    /// Whether each piece sits in its home position.
    placed: Grid<bool>,
    located: usize,
    movements: u32,
    timer: Timer,
}

impl PuzzleSession {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            placed: Grid::new(rows, columns, false),
            located: 0,
            movements: 0,
            timer: Timer::Stopped {
                elapsed: Duration::ZERO,
            },
        }
    }

    pub fn total(&self) -> usize {
        self.placed.len()
    }

    pub fn located(&self) -> usize {
        self.located
    }

    pub fn movements(&self) -> u32 {
        self.movements
    }

    pub fn is_solved(&self) -> bool {
        self.located >= self.total()
    }

    pub fn is_located(&self, cell: Cell) -> bool {
        self.placed.get(cell).copied().unwrap_or(false)
    }

    pub fn is_timer_running(&self) -> bool {
        matches!(self.timer, Timer::Running { .. })
    }

    /// Whether the piece at `cell` may be picked up.
    fn is_movable(&self, cell: Cell) -> bool {
        matches!(self.placed.get(cell), Some(false))
    }

    /// Called when the player picks up the piece at `cell`.
    ///
    /// Returns `false` for a piece that is already in place; it stays put and
    /// the timer is left alone. Otherwise starts the timer if it is stopped.
    pub fn start_move(&mut self, cell: Cell, now: Instant) -> bool {
        if !self.is_movable(cell) {
            return false;
        }
        if let Timer::Stopped { .. } = self.timer {
            self.timer = Timer::Running { since: now };
        }
        true
    }

    /// Called when the player drops the piece at `cell` `(dx, dy)` away from
    /// its home position.
    pub fn finish_move(
        &mut self,
        cell: Cell,
        dx: i64,
        dy: i64,
        geometry: &PieceGeometry,
        now: Instant,
    ) -> MoveOutcome {
        if !self.is_movable(cell) {
            return MoveOutcome::Refused;
        }

        self.movements += 1;
        if !geometry.is_near_home(dx, dy) {
            return MoveOutcome::Missed;
        }

        self.placed[cell] = true;
        self.located += 1;
        debug!(row = cell.0, col = cell.1, located = self.located, total = self.total(), "piece located");

        if self.is_solved() {
            self.stop_timer(now);
            info!(
                movements = self.movements,
                elapsed = %format_elapsed(self.elapsed(now)),
                "puzzle solved"
            );
            MoveOutcome::Solved
        } else {
            MoveOutcome::Located
        }
    }

    /// Clears progress after the pieces are shuffled again.
    pub fn reset(&mut self) {
        self.placed = Grid::new(self.placed.rows(), self.placed.columns(), false);
        self.located = 0;
        self.movements = 0;
        self.timer = Timer::Stopped {
            elapsed: Duration::ZERO,
        };
    }

    /// Time spent on the puzzle as of `now`.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.timer {
            Timer::Stopped { elapsed } => elapsed,
            Timer::Running { since } => now.saturating_duration_since(since),
        }
    }

    fn stop_timer(&mut self, now: Instant) {
        let elapsed = self.elapsed(now);
        self.timer = Timer::Stopped { elapsed };
    }
}

/// Formats a duration as `HH:MM:SS`. Hours keep growing past 99.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
