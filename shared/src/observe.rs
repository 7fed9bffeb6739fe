//! Hooks for watching turn transitions without touching the simulation.

use std::time::Duration;

/// Summary of one `Grid::next` transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnStats {
    /// Turn number after the transition, starting at 1.
    pub turn: u64,
    pub moves: usize,
    pub births: usize,
    pub survivors: usize,
    pub deaths: usize,
    pub elapsed: Duration,
}

impl TurnStats {
    pub fn population(&self) -> usize {
        self.births + self.survivors
    }
}

pub trait TurnObserver {
    fn on_turn(&mut self, stats: &TurnStats);
}

/// Ignores every turn.
impl TurnObserver for () {
    fn on_turn(&mut self, _stats: &TurnStats) {}
}

/// Records every turn in order.
impl TurnObserver for Vec<TurnStats> {
    fn on_turn(&mut self, stats: &TurnStats) {
        self.push(stats.clone());
    }
}

impl<O: TurnObserver + ?Sized> TurnObserver for &mut O {
    fn on_turn(&mut self, stats: &TurnStats) {
        (**self).on_turn(stats);
    }
}
