use clap::Parser;

pub const DEFAULT_SIZE: usize = 200;
pub const DEFAULT_PLAYERS: u32 = 4;
pub const DEFAULT_DENSITY: f64 = 0.3;
pub const DEFAULT_TURNS: u64 = 1_000;
pub const DEFAULT_MOVES_PER_PLAYER: usize = 3;
pub const DEFAULT_SEED: u64 = 0x5EED_1234_ABCD_EF01;

#[derive(Parser, Debug)]
#[command(name = "turf-headless")]
#[command(author, version, about = "Play a competitive Game of Life match without a display")]
pub struct Cli {
    /// Width and height of the square board
    #[arg(long, default_value_t = DEFAULT_SIZE, env = "TURF_SIZE")]
    pub size: usize,

    /// Number of competing players
    #[arg(short, long, default_value_t = DEFAULT_PLAYERS, env = "TURF_PLAYERS",
          value_parser = clap::value_parser!(u32).range(1..))]
    pub players: u32,

    /// Chance of each cell starting alive
    #[arg(long, default_value_t = DEFAULT_DENSITY, env = "TURF_DENSITY")]
    pub density: f64,

    /// Number of turns to play
    #[arg(short, long, default_value_t = DEFAULT_TURNS, env = "TURF_TURNS")]
    pub turns: u64,

    /// Random toggles each player submits per turn
    #[arg(long, default_value_t = DEFAULT_MOVES_PER_PLAYER, env = "TURF_MOVES")]
    pub moves_per_player: usize,

    /// Seed for the board and the players' moves
    #[arg(long, default_value_t = DEFAULT_SEED, env = "TURF_SEED")]
    pub seed: u64,

    /// Seconds between throughput reports
    #[arg(long, default_value_t = 1.0, env = "TURF_LOG_INTERVAL")]
    pub log_interval: f64,
}
