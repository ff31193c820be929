//! Word Weaver - CLI
//!
//! Word-ladder game with shortest-path hints.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_weaver::{
    commands::{find_path, list_neighbors, run_benchmark, run_play, sample_pairs},
    dictionary::WordIndex,
    game::{GameConfig, GameState},
    graph::NeighborStrategyKind,
    output::{print_benchmark_result, print_neighbors_result, print_path_result},
};

#[derive(Parser)]
#[command(
    name = "word_weaver",
    about = "Word-ladder game: change one letter at a time to reach the target word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a word list file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Neighbor generation: bucket (default) or scan
    #[arg(short, long, global = true, default_value = "bucket")]
    neighbors: String,

    /// Seed for reproducible word selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Use the fixed WAST -> WEST pair instead of random words
    #[arg(long, global = true)]
    fixed: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,

    /// Show the shortest ladder between two words
    Path {
        /// Word to start from
        start: String,

        /// Word to end at
        target: String,
    },

    /// List the words one letter away from a word
    Neighbors {
        /// Word to inspect
        word: String,
    },

    /// Solve random word pairs and report statistics
    Benchmark {
        /// Number of random pairs to solve
        #[arg(short = 'c', long, default_value = "200")]
        count: usize,
    },
}

/// Load the dictionary selected by the -d flag
///
/// An unreadable file is not fatal: the game runs on an empty dictionary and
/// the problem is reported.
fn load_dictionary(source: &str) -> WordIndex {
    if source == "embedded" {
        return WordIndex::embedded();
    }

    let (index, diagnostic) = WordIndex::load(source);
    if let Some(diagnostic) = diagnostic {
        eprintln!("{} {diagnostic}", "warning:".yellow().bold());
    }
    index
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let index = load_dictionary(&cli.dictionary);
    let strategy = NeighborStrategyKind::from_name(&cli.neighbors);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    info!(words = index.len(), ?strategy, "dictionary ready");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let config = GameConfig::new(!cli.fixed).with_neighbor_strategy(strategy);
            run_play_command(&index, config, &mut rng)
        }
        Commands::Path { start, target } => {
            let result = find_path(&index, strategy, &start, &target);
            print_path_result(&result);
            Ok(())
        }
        Commands::Neighbors { word } => {
            let result = list_neighbors(&index, strategy, &word)
                .map_err(|e| anyhow::anyhow!(e))
                .with_context(|| format!("looking up neighbors of '{word}'"))?;
            print_neighbors_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(&index, strategy, count, &mut rng);
            Ok(())
        }
    }
}

fn run_play_command(index: &WordIndex, config: GameConfig, rng: &mut StdRng) -> Result<()> {
    let mut game = GameState::new(index, config, rng);
    if let Some(diagnostic) = game.selection().diagnostic() {
        eprintln!("{} {diagnostic}", "warning:".yellow().bold());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let summary = run_play(&mut game, rng, stdin.lock(), &mut stdout)
        .context("interactive session failed")?;
    info!(games_won = summary.games_won, "session ended");
    Ok(())
}

fn run_benchmark_command(
    index: &WordIndex,
    strategy: NeighborStrategyKind,
    count: usize,
    rng: &mut StdRng,
) {
    let pairs = sample_pairs(index, count, rng);
    if pairs.is_empty() {
        println!("Dictionary has no two words of equal length; nothing to benchmark.");
        return;
    }

    println!("Solving {} random word pairs...", pairs.len());
    let result = run_benchmark(index, strategy, &pairs, true);
    print_benchmark_result(&result);
}
