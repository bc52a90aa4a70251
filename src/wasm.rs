use crate::errors::BoardError;
use crate::grid::{Cell, Grid};
use crate::log::init_logger;
use crate::solver;
use crate::trie::Trie;
use crate::word_list::WordList;
use wasm_bindgen::prelude::*;

use std::collections::BTreeMap;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "B001", "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<BoardError> for WasmError {
    fn from(e: BoardError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.display_detailed(),
            help: e.help().map(|s| s.to_string()),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        // Format a comprehensive error message
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        // Create a JavaScript Error object with the formatted message
        js_sys::Error::new(&msg).into()
    }
}

/// Initialize wordgrid logging with the specified debug setting.
///
/// # Arguments
/// * `debug_enabled` - If true, use Debug log level; if false, use Info log level
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    // 1. Set up panic hook
    console_error_panic_hook::set_once();

    // 2. Initialize logging with the provided debug setting
    init_logger(debug_enabled);

    log::info!("WASM module initialized");
    if !debug_enabled {
        log::info!("Debug logging disabled");
    }
}

#[derive(serde::Serialize)]
struct WasmSolveResult {
    /// Found word -> ordered [row, col] coordinate path
    words: BTreeMap<String, Vec<Cell>>,
    count: usize,
}

/// Build the grid and dictionary from raw boundary inputs, then solve.
///
/// Shared by both solve entries; all validation failures surface as
/// `WasmError` for the JS side.
fn solve_from_inputs(
    board: &str,
    dict_text: &str,
    rows: usize,
    cols: usize,
    min_len: usize,
    max_len: usize,
) -> Result<solver::Solutions, WasmError> {
    let grid = Grid::parse(board, rows, cols)?;

    let word_list = WordList::parse_from_str(dict_text);
    let mut dictionary = Trie::with_bounds(min_len, max_len)?;
    for word in &word_list.words {
        dictionary.insert(word);
    }

    Ok(solver::solve(&grid, &dictionary))
}

/// JS entry: solve a board against a dictionary, returning a structured
/// result: `{ words: { "<word>": [[row, col], ...], ... }, count: N }`.
///
/// * `board` - flattened board string, `rows * cols` lowercase letters in
///   row-major order
/// * `dict_text` - whitespace-separated lowercase candidate words
#[wasm_bindgen]
pub fn solve_grid_wasm(
    board: &str,
    dict_text: &str,
    rows: usize,
    cols: usize,
    min_len: usize,
    max_len: usize,
) -> Result<JsValue, JsValue> {
    let solutions = solve_from_inputs(board, dict_text, rows, cols, min_len, max_len)
        .map_err(JsValue::from)?;

    let result = WasmSolveResult {
        count: solutions.len(),
        words: solutions
            .iter()
            .map(|(w, p)| (w.to_string(), p.to_vec()))
            .collect(),
    };

    serde_wasm_bindgen::to_value(&result).map_err(|e| {
        WasmError {
            code: "WASM001".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize result".to_string(),
            details: "The solver result could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}

/// JS entry matching the legacy text protocol: returns one line per found
/// word in the `<word>|<row>,<col>-...-` pipe format (trailing dash
/// included), exactly as the legacy puzzle page consumed it.
#[wasm_bindgen]
pub fn solve_grid_text(
    board: &str,
    dict_text: &str,
    rows: usize,
    cols: usize,
    min_len: usize,
    max_len: usize,
) -> Result<String, JsValue> {
    let solutions = solve_from_inputs(board, dict_text, rows, cols, min_len, max_len)
        .map_err(JsValue::from)?;
    Ok(solutions.to_pipe_format())
}

/// Generate a debug report for troubleshooting.
///
/// This function creates a formatted debug report that users can copy/paste
/// when reporting issues. It includes the error message, the board input,
/// configuration details, and environment information.
///
/// # Arguments
/// * `board` - The board string that was being solved
/// * `error_message` - The error message that was displayed
/// * `word_count` - Number of words in the supplied dictionary
///
/// # Returns
/// A formatted string containing all debug information
#[wasm_bindgen]
pub fn get_debug_info(board: &str, error_message: &str, word_count: usize) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // NB: writing to a String never fails (infallible operation)
    // we use `let _ =` to explicitly ignore the Result without panicking
    let _ = writeln!(&mut report, "=== WORDGRID DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    let _ = writeln!(&mut report, "Generated: {}", js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string()));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{error_message}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Board: {board}");
    let _ = writeln!(&mut report, "Word Count: {word_count}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {user_agent}");
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Instructions");
    let _ = writeln!(&mut report, "Please copy this entire report and paste it when reporting the issue.");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_from_inputs_basic() {
        let solutions = solve_from_inputs("catodggor", "cat dog cot go", 3, 3, 3, 8).unwrap();

        assert_eq!(solutions.get("cat"), Some(&[(0, 0), (0, 1), (0, 2)][..]));
        assert!(solutions.get("dog").is_some());
        assert!(solutions.get("cot").is_none()); // letters never adjacent in order
        assert!(solutions.get("go").is_none()); // filtered by min_len
    }

    #[test]
    fn test_solve_from_inputs_bad_board() {
        let err = solve_from_inputs("cat", "cat", 3, 3, 3, 8).unwrap_err();
        assert_eq!(err.code, "B001");
        assert!(!err.message.is_empty());
        assert!(err.help.is_some());
    }

    #[test]
    fn test_solve_from_inputs_bad_bounds() {
        let err = solve_from_inputs("catodggor", "cat", 3, 3, 9, 3).unwrap_err();
        assert_eq!(err.code, "B004");
    }

    #[test]
    #[cfg(target_arch = "wasm32")]
    fn test_get_debug_info_structure() {
        let report = get_debug_info("catodggor", "Error B001: board has 9 cells", 4);

        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "=== WORDGRID DEBUG REPORT ===");
        assert!(lines[1].starts_with("Version: "));
        assert!(lines[2].starts_with("Generated: ")); // Dynamic timestamp

        let input_idx = lines.iter().position(|&l| l == "## Input").unwrap();
        assert_eq!(lines[input_idx + 1], "Board: catodggor");
        assert_eq!(lines[input_idx + 2], "Word Count: 4");

        assert_eq!(lines[lines.len() - 1], "=== END DEBUG REPORT ===");
    }
}
