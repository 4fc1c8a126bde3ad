//! Fourline CLI: play against the heuristic AI in a terminal, or run
//! AI-vs-AI demo games.
//!
//! ## Usage
//!
//! - `fourline play` — interactive game against the AI (default)
//! - `fourline demo` — advisor vs. random baseline, with a result tally

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fourline::ai::{Agent, MoveAdvisor, RandomAgent};
use fourline::config::AppConfig;
use fourline::error::MoveError;
use fourline::game::{Board, Cell, GameOutcome, GameState, Player};

#[derive(Parser)]
#[command(name = "fourline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file (defaults used if absent).
    #[arg(long, default_value = "fourline.toml")]
    config: PathBuf,

    /// Seed for the AI's random source, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the AI
    Play,
    /// Run advisor-vs-random demo games and print a tally
    Demo {
        /// Number of games to play
        #[arg(long, default_value_t = 20)]
        games: u32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    config.validate().context("invalid configuration")?;

    match cli.command {
        Some(Commands::Demo { games }) => run_demo(&config, cli.seed, games),
        Some(Commands::Play) | None => run_interactive(&config, cli.seed),
    }
}

fn make_advisor(config: &AppConfig, seed: Option<u64>) -> MoveAdvisor {
    match seed {
        Some(seed) => MoveAdvisor::seeded_with_config(seed, config.advisor),
        None => MoveAdvisor::with_config(config.advisor),
    }
}

fn run_interactive(config: &AppConfig, seed: Option<u64>) -> Result<()> {
    let human = Player::Red;
    let ai = Player::Orange;
    let starter = if rand::random_bool(0.5) { human } else { ai };

    let board = Board::with_size(config.board.rows, config.board.cols);
    let mut state = GameState::with_board(board, starter);
    let mut advisor = make_advisor(config, seed);

    println!("You are {} (R). The AI is {} (O).", human.name(), ai.name());
    println!("{} starts.\n", starter.name());

    let stdin = io::stdin();
    while !state.is_terminal() {
        render(&state);

        let column = if state.current_player() == human {
            prompt_column(&stdin, state.board().cols())?
        } else {
            let col = advisor.recommend(state.board(), ai, human);
            println!("AI plays column {col}");
            col
        };

        match state.apply_move_mut(column) {
            Ok(()) => {}
            Err(MoveError::ColumnFull(col)) => {
                println!("Column {col} is full, pick another.");
            }
            Err(err) => return Err(err.into()),
        }
    }

    render(&state);
    match state.outcome() {
        Some(GameOutcome::Winner { player, line }) => {
            println!("{} wins! Line: {:?}", player.name(), line);
            if let Some(report) = state.score_report() {
                // Score submission to a leaderboard is the caller's hook;
                // here we only surface the inputs.
                info!(
                    winner = report.winner.name(),
                    moves = report.moves,
                    score = report.score,
                    "game finished"
                );
                println!(
                    "Score: {} ({} tokens placed)",
                    report.score, report.moves
                );
            }
        }
        Some(GameOutcome::Draw) => println!("Board full, game drawn."),
        None => unreachable!("loop exits only on a terminal state"),
    }

    Ok(())
}

fn run_demo(config: &AppConfig, seed: Option<u64>, games: u32) -> Result<()> {
    let mut advisor_wins = 0;
    let mut random_wins = 0;
    let mut draws = 0;

    for game in 0..games {
        let mut advisor = make_advisor(config, seed.map(|s| s + u64::from(game)));
        let mut random = RandomAgent::new();

        // Alternate who starts.
        let advisor_side = if game % 2 == 0 {
            Player::Red
        } else {
            Player::Orange
        };
        let board = Board::with_size(config.board.rows, config.board.cols);
        let mut state = GameState::with_board(board, Player::Red);

        while !state.is_terminal() {
            let column = if state.current_player() == advisor_side {
                advisor.select_action(&state)
            } else {
                random.select_action(&state)
            };
            state.apply_move_mut(column)?;
        }

        match state.outcome() {
            Some(GameOutcome::Winner { player, .. }) if player == advisor_side => {
                advisor_wins += 1
            }
            Some(GameOutcome::Winner { .. }) => random_wins += 1,
            Some(GameOutcome::Draw) => draws += 1,
            None => unreachable!(),
        }
    }

    info!(advisor_wins, random_wins, draws, "demo finished");
    println!(
        "{} games: advisor {advisor_wins}, random {random_wins}, draws {draws}",
        games
    );
    Ok(())
}

fn render(state: &GameState) {
    let board = state.board();
    let mut out = String::new();
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            out.push(match board.get(row, col) {
                Cell::Empty => '.',
                Cell::Red => 'R',
                Cell::Orange => 'O',
            });
            out.push(' ');
        }
        out.push('\n');
    }
    for col in 0..board.cols() {
        out.push_str(&format!("{col} "));
    }
    println!("{out}\n");
}

fn prompt_column(stdin: &io::Stdin, cols: usize) -> Result<usize> {
    loop {
        print!("Your move (0-{}): ", cols - 1);
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = stdin
            .lock()
            .read_line(&mut line)
            .context("reading column input")?;
        if bytes == 0 {
            anyhow::bail!("stdin closed before the game finished");
        }
        match line.trim().parse::<usize>() {
            Ok(col) if col < cols => return Ok(col),
            _ => println!("Enter a column number between 0 and {}.", cols - 1),
        }
    }
}
