//! SQL Hangman - CLI
//!
//! Hangman over database terms with TUI and simple CLI modes, plus a solver
//! that can play rounds on its own.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use sql_hangman::{
    commands::{SolveConfig, run_benchmark, run_simple, solve_word},
    core::SecretWord,
    game::Game,
    output::{print_benchmark_result, print_solve_result, print_word_list},
    wordlists::{DATABASE_TERMS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "sql_hangman",
    about = "Hangman over database terminology",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default, 10 database terms) or path to file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed for reproducible words and hints
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Let the solver play a specific secret word
    Solve {
        /// The secret word to play against
        word: String,

        /// Show candidate counts for each turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play many random rounds with the solver
    Benchmark {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },

    /// Print the active word list
    Words,
}

/// Load the word list selected by the -w flag
fn load_words(wordlist: &str) -> Result<Vec<SecretWord>> {
    use sql_hangman::wordlists::loader::load_from_file;

    match wordlist {
        "builtin" => Ok(words_from_slice(DATABASE_TERMS)),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to load word list from '{path}'"))?;
            info!("Loaded {} words from {path}", words.len());
            Ok(words)
        }
    }
}

fn new_game(words: Vec<SecretWord>, seed: Option<u64>) -> Result<Game> {
    let game = match seed {
        Some(seed) => Game::with_seed(words, seed)?,
        None => Game::new(words)?,
    };
    Ok(game)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let words = load_words(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(words, cli.seed),
        Commands::Simple => run_simple_command(words, cli.seed),
        Commands::Solve { word, verbose } => run_solve_command(&word, verbose, &words),
        Commands::Benchmark { count } => run_benchmark_command(&words, count, cli.seed),
        Commands::Words => {
            print_word_list(&words);
            Ok(())
        }
    }
}

fn run_play_command(words: Vec<SecretWord>, seed: Option<u64>) -> Result<()> {
    use sql_hangman::interactive::{App, run_tui};

    let app = App::new(new_game(words, seed)?);
    run_tui(app)
}

fn run_simple_command(words: Vec<SecretWord>, seed: Option<u64>) -> Result<()> {
    let mut game = new_game(words, seed)?;
    let stdin = std::io::stdin();
    run_simple(&mut game, stdin.lock(), std::io::stdout())?;
    Ok(())
}

fn run_solve_command(word: &str, verbose: bool, words: &[SecretWord]) -> Result<()> {
    let config = SolveConfig::new(word.to_string());
    let result = solve_word(config, words).map_err(|e| anyhow::anyhow!("Invalid word: {e}"))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(words: &[SecretWord], count: usize, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    println!("Running benchmark on {count} random rounds (seed {seed})...");

    let result = run_benchmark(words, count, seed)?;
    print_benchmark_result(&result);
    Ok(())
}
