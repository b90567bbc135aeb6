//! Command-line interface for tictactoe_arena.

use clap::{Parser, Subcommand};
use tictactoe_arena::{Difficulty, GameMode};

/// Tic-tac-toe arena - play in the terminal and keep score
#[derive(Parser, Debug)]
#[command(name = "tictactoe_arena")]
#[command(about = "Tic-tac-toe against a friend or the AI, with persistent statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Path to the statistics database (":memory:" for a throwaway session)
    #[arg(long, global = true)]
    pub db_path: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play rounds in the terminal
    Play {
        /// pvp or vsAI
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Name for X
        #[arg(long)]
        player_x: Option<String>,

        /// Name for O (ignored against the AI)
        #[arg(long)]
        player_o: Option<String>,

        /// Seed for the AI's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the statistics
    Stats,

    /// Zero the statistics
    ResetStats,
}
