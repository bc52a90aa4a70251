use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;

use wordgrid::errors::BoardError;
use wordgrid::grid::{self, Grid};
use wordgrid::solver;
use wordgrid::trie::{self, Trie};
use wordgrid::word_list::WordList;

/// Word-search grid solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The board letters in row-major order with no separators
    /// (e.g., "seratnegelwidspo" for a 4x4 board)
    board: String,

    /// Path to the word-list file (whitespace-separated lowercase words)
    #[arg(short, long)]
    word_list: String,

    /// Number of board rows
    #[arg(long, default_value_t = grid::DEFAULT_ROWS)]
    rows: usize,

    /// Number of board columns
    #[arg(long, default_value_t = grid::DEFAULT_COLS)]
    cols: usize,

    /// Minimum accepted word length (shorter dictionary words are ignored)
    #[arg(long, default_value_t = trie::DEFAULT_MIN_WORD_LEN)]
    min_len: usize,

    /// Maximum accepted word length (longer dictionary words are ignored)
    #[arg(long, default_value_t = trie::DEFAULT_MAX_WORD_LEN)]
    max_len: usize,
}

/// Entry point of the wordgrid CLI solver.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("WORDGRID_DEBUG").is_ok();
    wordgrid::log::init_logger(debug_enabled);

    log::info!("Starting wordgrid solver");

    if let Err(e) = try_main() {
        // Print the error to stderr, with detailed formatting if it's a BoardError
        if let Some(board_err) = e.downcast_ref::<BoardError>() {
            eprintln!("Error: {}", board_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the wordgrid CLI solver.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the word list from disk and build the dictionary trie.
/// 3. Decode the board string into a grid.
/// 4. Run the search and print each `word|path` line on stdout.
/// 5. Print performance metrics (timings, counts) on stderr.
///
/// Returns `Ok(())` on success or an error (e.g., malformed board string,
/// missing word-list file) which bubbles up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // 1. Load the word list from disk
    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    // 2. Build the dictionary index; the trie applies the length filter
    let mut dictionary = Trie::with_bounds(cli.min_len, cli.max_len)?;
    let accepted = word_list
        .words
        .iter()
        .filter(|w| dictionary.insert(w.as_str()))
        .count();
    log::debug!(
        "indexed {accepted}/{} words within length bounds [{}, {}]",
        word_list.words.len(),
        cli.min_len,
        cli.max_len
    );

    // 3. Decode the board
    let board = Grid::parse(&cli.board, cli.rows, cli.cols)?;

    // 4. Run the search
    let t_solve = Instant::now();
    let solutions = solver::solve(&board, &dictionary);
    let solve_secs = t_solve.elapsed().as_secs_f64();

    // One `word|r,c-r,c-...-` line per found word
    print!("{}", solutions.to_pipe_format());

    // 5. Print diagnostics (word-list size, timings, number of results) to stderr
    eprintln!(
        "Loaded {} words in {load_secs:.3}s; found {} on the {}x{} board in {solve_secs:.3}s.",
        word_list.words.len(),
        solutions.len(),
        board.rows(),
        board.cols()
    );

    Ok(())
}
