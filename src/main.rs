//! Tictactoe Arena - terminal front-end
//!
//! Plays rounds on stdin/stdout and manages the persisted statistics.

#![warn(missing_docs)]

mod cli;

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use tictactoe_arena::{
    AppConfig, GameEvent, GameObserver, GameSession, MoveOutcome, Outcome, Player, Position,
    RoundConfig, SqliteStore, StatsAggregator, StatsReport, WinPattern,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    if let Some(db_path) = cli.db_path {
        config = config.with_db_path(db_path);
    }

    let store = SqliteStore::open(config.db_path())?;
    let stats = StatsAggregator::load_with_key(store, config.stats_key());

    match cli.command {
        Command::Play {
            mode,
            difficulty,
            player_x,
            player_o,
            seed,
        } => {
            let mut round = config.round().clone();
            if let Some(mode) = mode {
                round.mode = mode;
            }
            if let Some(difficulty) = difficulty {
                round.difficulty = difficulty;
            }
            if let Some(name) = player_x {
                round.player_x_name = name;
            }
            if let Some(name) = player_o {
                round.player_o_name = name;
            }
            play(&config, stats, round, seed).await
        }
        Command::Stats => show_stats(stats),
        Command::ResetStats => {
            let mut stats = stats;
            let report = stats.reset()?;
            println!("Statistics reset.\n{}", report);
            Ok(())
        }
    }
}

/// Prints outcomes and statistics as they happen.
struct ConsoleObserver;

impl GameObserver for ConsoleObserver {
    fn on_event(&mut self, event: &GameEvent) {
        if let GameEvent::AiThinking { .. } = event {
            println!("AI is thinking...");
        }
    }

    fn on_win(&mut self, _player: Player, pattern: WinPattern) {
        println!("Winning line: {}", pattern);
    }

    fn on_stats_updated(&mut self, report: &StatsReport) {
        println!("{}", report);
    }
}

/// Runs the interactive round loop until stdin closes or the player quits.
#[instrument(skip(config, stats))]
async fn play(
    config: &AppConfig,
    stats: StatsAggregator<SqliteStore>,
    round: RoundConfig,
    seed: Option<u64>,
) -> Result<()> {
    let ai_rng = match seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_os_rng(),
    };
    let mut delay_rng = rand::rng();

    let mut session = GameSession::new(stats).with_rng(ai_rng);
    session.subscribe(ConsoleObserver);
    session.start_round(round);
    info!("Interactive play started");

    println!("Cells are numbered 1-9. n = new round, s = stats, q = quit.");
    print_board(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        match input {
            "" => continue,
            "q" | "quit" => break,
            "n" | "new" => {
                session.new_round();
                print_board(&session);
                continue;
            }
            "s" | "stats" => {
                println!("{}", session.stats().report());
                continue;
            }
            _ => {}
        }

        let Some(pos) = Position::from_label_or_number(input) else {
            println!("Enter a cell number 1-9 or a label such as \"center\".");
            continue;
        };

        let mut outcome = session.submit_move(pos.to_index());
        while let Ok(MoveOutcome::AiPending(pending)) = outcome {
            let delay = config.ai_delay(&mut delay_rng);
            outcome = session.play_ai_turn(pending, delay).await;
        }
        if let Err(e) = outcome {
            println!("{}", e);
        }
        print_board(&session);
    }

    Ok(())
}

fn print_board(session: &GameSession<SqliteStore>) {
    let line = match session.state().outcome() {
        Some(Outcome::Win { pattern, .. }) => Some(*pattern),
        _ => None,
    };
    println!(
        "\n{}\n\n{}",
        session.board().display_with_line(line),
        session.status_line()
    );
}

/// Prints the statistics and when they were last written.
fn show_stats(mut stats: StatsAggregator<SqliteStore>) -> Result<()> {
    println!("{}", stats.report());
    println!("Database: {}", stats.store().db_path());
    let key = stats.key().to_string();
    if let Some(entry) = stats.store_mut().entry(&key)? {
        println!("Last updated: {}", entry.updated_at());
    }
    Ok(())
}
