use clap::Parser;

use crate::game::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO};

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tic-tac-toe")]
#[command(about = "Two-player tic-tac-toe, enter moves as `row col`", long_about = None)]
#[command(version)]
pub struct Config {
    /// Name of the player who moves first with X
    #[arg(long, env = "TTT_PLAYER_ONE", default_value = DEFAULT_PLAYER_ONE)]
    pub player_one: String,

    /// Name of the player who moves second with O
    #[arg(long, env = "TTT_PLAYER_TWO", default_value = DEFAULT_PLAYER_TWO)]
    pub player_two: String,

    /// Log filter directive, logs are written to stderr
    #[arg(long, env = "TTT_LOG", default_value = "warn")]
    pub log_filter: String,
}
