//! Boggle Solver - CLI
//!
//! Solve boards from files or letters, roll random boards, query the
//! dictionary, or play in the TUI.

use anyhow::{Context, Result};
use boggle_solver::{
    commands::{
        SolveConfig, SolveMode, generate_boards, lookup_word, read_grid, run_benchmark,
        solve_grid,
    },
    core::random_board,
    dictionary::{MalformedPolicy, PrefixDictionary},
    interactive::{App, run_tui},
    output::{
        print_benchmark_result, print_board, print_load_report, print_lookup_result,
        print_solve_result,
    },
    solver::{Collection, Solver},
    wordlists::{BUILTIN_SOURCE, load_dictionary},
};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Largest board width accepted by `generate` and `benchmark`
const MAX_BOARD_SIZE: i64 = 64;

#[derive(Parser)]
#[command(
    name = "boggle",
    about = "Finds every dictionary word on a Boggle board",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'builtin' (default) or path to a word list, one word per line
    #[arg(short, long, global = true, default_value = BUILTIN_SOURCE)]
    dictionary: String,

    /// Fail on malformed dictionary lines instead of skipping them
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Solve a board
    Solve {
        /// Grid file, or '-' for stdin
        input: Option<String>,

        /// Board letters in row-major order, 'q' for the Qu tile
        #[arg(short, long, conflicts_with = "input")]
        letters: Option<String>,

        /// Board width for --letters (default: square root of the letter count)
        #[arg(short, long, requires = "letters")]
        size: Option<usize>,

        /// Search on a single thread
        #[arg(long, conflicts_with = "shared")]
        sequential: bool,

        /// Collect words into one shared set instead of merging per-task sets
        #[arg(long)]
        shared: bool,

        /// Worker threads (default: one per core)
        #[arg(short, long)]
        threads: Option<usize>,

        /// Show a progress bar while cells are searched
        #[arg(long)]
        progress: bool,

        /// Show verbose output with timing details
        #[arg(short, long)]
        verbose: bool,
    },

    /// Roll a random board
    Generate {
        /// Board width and height
        #[arg(
            short,
            long,
            default_value = "4",
            value_parser = clap::value_parser!(u16).range(1..=MAX_BOARD_SIZE)
        )]
        size: u16,

        /// Seed for a reproducible board
        #[arg(long)]
        seed: Option<u64>,

        /// Also solve the board
        #[arg(long)]
        solve: bool,
    },

    /// Look up a word or prefix in the dictionary
    Lookup {
        /// Word or prefix to look up
        word: String,

        /// Maximum completions to list
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Benchmark parallel against sequential solving
    Benchmark {
        /// Number of random boards
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Board width and height
        #[arg(
            short,
            long,
            default_value = "5",
            value_parser = clap::value_parser!(u16).range(1..=MAX_BOARD_SIZE)
        )]
        size: u16,

        /// Seed for a reproducible batch
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Where the dictionary comes from, loaded only by commands that need it
struct DictionarySource {
    source: String,
    strict: bool,
}

impl DictionarySource {
    /// Load the dictionary named by `-d`, reporting what was loaded
    fn load(&self) -> Result<PrefixDictionary> {
        let policy = if self.strict {
            MalformedPolicy::Reject
        } else {
            MalformedPolicy::Skip
        };
        let (dictionary, report) = load_dictionary(&self.source, policy)
            .with_context(|| format!("Failed to load dictionary '{}'", self.source))?;
        print_load_report(&self.source, &report);
        Ok(dictionary)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let dictionary = DictionarySource {
        source: cli.dictionary,
        strict: cli.strict,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let dictionary = dictionary.load()?;
            run_tui(App::new(Solver::new(&dictionary)))
        }
        Commands::Solve {
            input,
            letters,
            size,
            sequential,
            shared,
            threads,
            progress,
            verbose,
        } => {
            let mode = if sequential {
                SolveMode::Sequential
            } else if shared {
                SolveMode::Parallel(Collection::Shared)
            } else {
                SolveMode::Parallel(Collection::Merge)
            };
            let config = SolveConfig {
                mode,
                threads,
                progress,
            };
            let grid = read_grid(input.as_deref(), letters.as_deref(), size)?;
            let result = solve_grid(&config, grid, &dictionary.load()?)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Generate { size, seed, solve } => {
            run_generate_command(usize::from(size), seed, solve, &dictionary)
        }
        Commands::Lookup { word, limit } => {
            let result = lookup_word(&word, &dictionary.load()?, limit)?;
            print_lookup_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, size, seed } => {
            let dictionary = dictionary.load()?;
            println!("Running benchmark on {count} random {size}x{size} boards...");
            let boards = generate_boards(usize::from(size), count, seed)?;
            let result = run_benchmark(&dictionary, &boards, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_generate_command(
    size: usize,
    seed: Option<u64>,
    solve: bool,
    dictionary: &DictionarySource,
) -> Result<()> {
    let mut rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
    let grid = random_board(&mut rng, size).context("Invalid board size")?;

    if solve {
        let result = solve_grid(&SolveConfig::default(), grid, &dictionary.load()?)?;
        print_solve_result(&result, false);
    } else {
        print_board(&grid);
    }
    Ok(())
}
