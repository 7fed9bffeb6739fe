use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use turf::{Grid, Move, PlayerId, TurnObserver, TurnStats};

mod cli;

use cli::Cli;

/// Periodic turns-per-second report.
struct Throughput {
    interval: Duration,
    last_log: Instant,
    turns: u64,
    busy: Duration,
    total_busy: Duration,
}

impl Throughput {
    fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_log: Instant::now(),
            turns: 0,
            busy: Duration::ZERO,
            total_busy: Duration::ZERO,
        }
    }
}

impl TurnObserver for Throughput {
    fn on_turn(&mut self, stats: &TurnStats) {
        self.turns += 1;
        self.busy += stats.elapsed;
        self.total_busy += stats.elapsed;

        let elapsed = self.last_log.elapsed();
        if elapsed >= self.interval {
            let tps = self.turns as f64 / elapsed.as_secs_f64();
            let ms_per_turn = self.busy.as_secs_f64() * 1000.0 / self.turns as f64;
            log::info!(
                "turn {}: {:.1} turns/s, {:.3} ms/turn, population {}",
                stats.turn,
                tps,
                ms_per_turn,
                stats.population()
            );
            self.turns = 0;
            self.busy = Duration::ZERO;
            self.last_log = Instant::now();
        }
    }
}

/// A match between random players on one board.
struct Match {
    grid: Grid,
    players: Vec<PlayerId>,
    rng: StdRng,
    moves_per_player: usize,
    moves: Vec<Move>,
}

impl Match {
    fn new(cli: &Cli) -> anyhow::Result<Self> {
        let mut grid = Grid::new(cli.size).context("create grid")?;
        let players: Vec<PlayerId> = (1..=cli.players).map(PlayerId).collect();
        let mut rng = StdRng::seed_from_u64(cli.seed);
        grid.randomize(&players, cli.density, &mut rng).context("seed board")?;

        Ok(Self {
            grid,
            moves: Vec::with_capacity(players.len() * cli.moves_per_player),
            players,
            rng,
            moves_per_player: cli.moves_per_player,
        })
    }

    fn submit_moves(&mut self) {
        let size = self.grid.size() as i64;
        self.moves.clear();
        for &player in &self.players {
            for _ in 0..self.moves_per_player {
                let x = self.rng.random_range(0..size);
                let y = self.rng.random_range(0..size);
                self.moves.push(Move::new(x, y, player));
            }
        }
    }

    fn play_turn<O: TurnObserver>(&mut self, observer: &mut O) {
        self.submit_moves();
        self.grid.next_observed(&self.moves, observer);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let interval = Duration::try_from_secs_f64(cli.log_interval).context("invalid log interval")?;

    let mut game = Match::new(&cli)?;
    log::info!(
        "{} players on a {}x{} board, initial population {}",
        cli.players,
        cli.size,
        cli.size,
        game.grid.population()
    );

    let mut throughput = Throughput::new(interval);
    for _ in 0..cli.turns {
        game.play_turn(&mut throughput);
        if game.grid.is_empty() {
            log::warn!("board died out at turn {}", game.grid.turn());
            break;
        }
    }

    let turns = game.grid.turn().max(1);
    log::info!(
        "played {} turns, {:.3} ms/turn in the engine",
        game.grid.turn(),
        throughput.total_busy.as_secs_f64() * 1000.0 / turns as f64
    );
    let scores = game.grid.population_by_player();
    for player in &game.players {
        log::info!("{}: {} cells", player, scores.get(player).copied().unwrap_or(0));
    }
    Ok(())
}
