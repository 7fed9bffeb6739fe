use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Instant;

use log::{debug, trace};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::cell::{Cell, PlayerId};
use crate::error::{GridError, Result};
use crate::observe::{TurnObserver, TurnStats};

/// Largest accepted board side. Keeps every shifted coordinate inside `i64`.
pub const MAX_SIZE: usize = i32::MAX as usize;

const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const BIRTH_NEIGHBORS: usize = 3;

/// A player's request to flip the cell at `(x, y)`.
///
/// Coordinates outside the board are wrapped onto it, the same way
/// neighbor coordinates are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub x: i64,
    pub y: i64,
    pub player: PlayerId,
}

impl Move {
    pub fn new(x: i64, y: i64, player: PlayerId) -> Self {
        Move { x, y, player }
    }
}

/// One live cell of an initial snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i64,
    pub y: i64,
    pub owner: Option<PlayerId>,
}

impl Placement {
    pub fn new(x: i64, y: i64, owner: Option<PlayerId>) -> Self {
        Placement { x, y, owner }
    }

    pub fn owned(x: i64, y: i64, player: PlayerId) -> Self {
        Placement::new(x, y, Some(player))
    }
}

/// Square toroidal board holding the live cells of a match.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    cells: HashSet<Cell>,
    turn: u64,
}

impl Grid {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        if size > MAX_SIZE {
            return Err(GridError::SizeTooLarge {
                size,
                max: MAX_SIZE,
            });
        }
        Ok(Grid {
            size,
            cells: HashSet::new(),
            turn: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of completed `next` calls.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cells.contains(&Cell::at(x, y))
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cells.get(&Cell::at(x, y))
    }

    /// Live cells in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Live cells per player. Unowned cells are left out.
    pub fn population_by_player(&self) -> BTreeMap<PlayerId, usize> {
        let mut tally = BTreeMap::new();
        for owner in self.cells.iter().filter_map(Cell::owner) {
            *tally.entry(owner).or_insert(0) += 1;
        }
        tally
    }

    /// Adds every placement as a live cell. A later placement on an
    /// already live coordinate replaces the earlier one.
    pub fn mount_snapshot<I>(&mut self, placements: I)
    where
        I: IntoIterator<Item = Placement>,
    {
        let before = self.cells.len();
        for placement in placements {
            let cell = Cell::new(self.wrap(placement.x), self.wrap(placement.y), placement.owner);
            self.cells.replace(cell);
        }
        debug!(
            "mounted snapshot: {} new cells, population {}",
            self.cells.len() - before,
            self.cells.len()
        );
    }

    /// Drops every live cell. The turn counter is kept.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Replaces the board with a random population. Each cell is alive with
    /// probability `density` and owned by one of `players`, picked uniformly.
    /// With no players the cells are unowned.
    pub fn randomize<R: Rng>(
        &mut self,
        players: &[PlayerId],
        density: f64,
        rng: &mut R,
    ) -> Result<()> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }

        let mut cells = HashSet::new();
        for y in 0..self.size {
            for x in 0..self.size {
                if rng.random_bool(density) {
                    cells.insert(Cell::new(x, y, players.choose(rng).copied()));
                }
            }
        }
        self.cells = cells;
        debug!("randomized board: population {}", self.cells.len());
        Ok(())
    }

    /// Applies `moves` and advances the board one generation.
    pub fn next(&mut self, moves: &[Move]) {
        self.next_observed(moves, &mut ());
    }

    /// Same as [`Grid::next`], reporting the transition to `observer`.
    pub fn next_observed<O>(&mut self, moves: &[Move], observer: &mut O)
    where
        O: TurnObserver + ?Sized,
    {
        let started = Instant::now();

        for mv in moves {
            self.toggle(mv);
        }

        let born = self.births();
        let survivors: Vec<Cell> = self
            .cells
            .iter()
            .filter(|cell| matches!(self.live_neighbors(cell.x(), cell.y()), 2 | 3))
            .copied()
            .collect();

        let births = born.len();
        let deaths = self.cells.len() - survivors.len();
        let survivor_count = survivors.len();

        let mut next = HashSet::with_capacity(births + survivor_count);
        next.extend(born);
        next.extend(survivors);
        self.cells = next;
        self.turn += 1;

        let stats = TurnStats {
            turn: self.turn,
            moves: moves.len(),
            births,
            survivors: survivor_count,
            deaths,
            elapsed: started.elapsed(),
        };
        debug!(
            "turn {}: {} moves, {} born, {} survived, {} died",
            stats.turn, stats.moves, stats.births, stats.survivors, stats.deaths
        );
        observer.on_turn(&stats);
    }

    fn toggle(&mut self, mv: &Move) {
        let cell = Cell::new(self.wrap(mv.x), self.wrap(mv.y), Some(mv.player));
        if self.cells.remove(&cell) {
            trace!("{} killed ({}, {})", mv.player, cell.x(), cell.y());
        } else {
            trace!("{} seeded ({}, {})", mv.player, cell.x(), cell.y());
            self.cells.insert(cell);
        }
    }

    /// Dead cells with exactly three live neighbors, owners resolved.
    fn births(&self) -> Vec<Cell> {
        let mut visited = HashSet::new();
        let mut born = Vec::new();

        for cell in &self.cells {
            for (x, y) in self.neighbors(cell.x(), cell.y()) {
                if self.is_alive(x, y) || !visited.insert((x, y)) {
                    continue;
                }
                let parents = self.live_neighbor_owners(x, y);
                if parents.len() == BIRTH_NEIGHBORS {
                    born.push(Cell::new(x, y, majority_owner(&parents)));
                }
            }
        }
        born
    }

    fn live_neighbors(&self, x: usize, y: usize) -> usize {
        self.neighbors(x, y)
            .filter(|&(nx, ny)| self.is_alive(nx, ny))
            .count()
    }

    fn live_neighbor_owners(&self, x: usize, y: usize) -> Vec<Option<PlayerId>> {
        self.neighbors(x, y)
            .filter_map(|(nx, ny)| self.cell(nx, ny).map(Cell::owner))
            .collect()
    }

    /// The 8 Moore neighbors of `(x, y)`, wrapped onto the board.
    fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dx, dy)| (self.wrap(x as i64 + dx), self.wrap(y as i64 + dy)))
    }

    fn wrap(&self, raw: i64) -> usize {
        raw.rem_euclid(self.size as i64) as usize
    }
}

/// Player owning most of `owners`; unowned entries do not vote.
/// Ties go to the highest player id, i.e. the latest joiner.
fn majority_owner(owners: &[Option<PlayerId>]) -> Option<PlayerId> {
    let mut votes: HashMap<PlayerId, usize> = HashMap::new();
    for &owner in owners.iter().flatten() {
        *votes.entry(owner).or_insert(0) += 1;
    }
    votes
        .into_iter()
        .max_by_key(|&(player, count)| (count, player))
        .map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u32) -> Option<PlayerId> {
        Some(PlayerId(id))
    }

    #[test]
    fn majority_wins() {
        assert_eq!(majority_owner(&[p(1), p(1), p(2)]), p(1));
        assert_eq!(majority_owner(&[p(2), p(1), p(2)]), p(2));
    }

    #[test]
    fn ties_go_to_highest_player_id() {
        assert_eq!(majority_owner(&[p(1), p(2), p(3)]), p(3));
        assert_eq!(majority_owner(&[p(3), p(1), p(2)]), p(3));
        assert_eq!(majority_owner(&[None, p(5), p(4)]), p(5));
    }

    #[test]
    fn unowned_neighbors_do_not_vote() {
        assert_eq!(majority_owner(&[None, None, p(2)]), p(2));
        assert_eq!(majority_owner(&[None, None, None]), None);
        assert_eq!(majority_owner(&[]), None);
    }

    #[test]
    fn wrap_handles_both_edges() {
        let grid = Grid::new(5).unwrap();
        assert_eq!(grid.wrap(-1), 4);
        assert_eq!(grid.wrap(5), 0);
        assert_eq!(grid.wrap(-6), 4);
        assert_eq!(grid.wrap(12), 2);
    }

    #[test]
    fn corner_neighbors_wrap_around() {
        let grid = Grid::new(4).unwrap();
        let mut neighbors: Vec<_> = grid.neighbors(0, 0).collect();
        neighbors.sort();
        assert_eq!(
            neighbors,
            vec![(0, 1), (0, 3), (1, 0), (1, 1), (1, 3), (3, 0), (3, 1), (3, 3)]
        );
    }

    #[test]
    fn rejects_bad_sizes() {
        assert_eq!(Grid::new(0).unwrap_err(), GridError::ZeroSize);
        assert!(matches!(
            Grid::new(MAX_SIZE + 1),
            Err(GridError::SizeTooLarge { .. })
        ));
    }
}
