//! The depth-first backtracking searcher over the letter grid.
//!
//! From every cell of the board, the searcher walks outward through the 8
//! neighbor directions, advancing a pointer into the dictionary
//! [`Trie`](crate::trie::Trie) one letter at a time. A branch is cut the
//! moment the trie has no child for the next letter (prefix pruning), so the
//! search never spends time on paths that cannot spell an accepted word.
//!
//! # Search state
//!
//! One [`SearchContext`] is threaded by exclusive mutable reference through
//! the recursion: the word-in-progress, the coordinate path, the visited
//! mask, and the accumulating result map. Every mutation made on entry to a
//! cell is undone on exit from the same call, so sibling branches — and the
//! next starting cell — always see fully restored state. The same mask and
//! buffers are reused across all starting cells without re-allocation.
//!
//! # Recording policy
//!
//! Completing a word records `word -> path` but does not stop the walk;
//! longer words sharing the prefix are still explored. When the same word is
//! spellable along several paths, the **last** path encountered under the
//! fixed traversal order wins (each recording overwrites the previous one).
//! Traversal order is: starting cells in row-major order, then neighbors in
//! [`NEIGHBOR_OFFSETS`] order, which makes the surviving path deterministic.
//!
//! # Examples
//!
//! ```
//! use wordgrid::{grid::Grid, solver, trie::Trie};
//!
//! let grid = Grid::parse("catodggor", 3, 3)?;
//! let mut trie = Trie::new();
//! for word in ["cat", "dog", "cot"] {
//!     trie.insert(word);
//! }
//!
//! let solutions = solver::solve(&grid, &trie);
//! assert_eq!(solutions.get("cat"), Some(&[(0, 0), (0, 1), (0, 2)][..]));
//! assert!(solutions.get("cot").is_none()); // 'c', 'o', 't' are never chained
//! # Ok::<(), wordgrid::errors::BoardError>(())
//! ```

use crate::grid::{Cell, Grid};
use crate::trie::{Trie, TrieNode};
use log::{debug, info};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Neighbor offsets in exploration order: N, S, W, E, NW, NE, SW, SE.
///
/// The order only matters for the path tie-break (see the module docs); any
/// fixed order finds the same set of words.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0), // N
    (1, 0),  // S
    (0, -1), // W
    (0, 1),  // E
    (-1, -1), // NW
    (-1, 1), // NE
    (1, -1), // SW
    (1, 1),  // SE
];

/// The result of one solve call: every found word mapped to the one path
/// retained for it.
///
/// Iteration is in sorted word order, so output built from a `Solutions` is
/// deterministic. Each call to [`solve`] returns a freshly allocated value;
/// no state persists between invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solutions {
    found: BTreeMap<String, Vec<Cell>>,
}

impl Solutions {
    /// Number of distinct words found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.found.len()
    }

    /// True if no words were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    /// The retained path for `word`, if it was found.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&[Cell]> {
        self.found.get(word).map(Vec::as_slice)
    }

    /// Iterate over `(word, path)` pairs in sorted word order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Cell])> {
        self.found.iter().map(|(w, p)| (w.as_str(), p.as_slice()))
    }

    /// Render the legacy pipe format consumed by the existing puzzle UI:
    /// one line per word, `<word>|<row>,<col>-<row>,<col>-...-` — note the
    /// dangling `-` after the final coordinate, which the consumer relies
    /// on. Lines appear in sorted word order.
    #[must_use]
    pub fn to_pipe_format(&self) -> String {
        let mut out = String::new();
        for (word, path) in &self.found {
            out.push_str(word);
            out.push('|');
            for (row, col) in path {
                // NB: writing to a String never fails (infallible operation)
                let _ = write!(out, "{row},{col}-");
            }
            out.push('\n');
        }
        out
    }
}

impl<'a> IntoIterator for &'a Solutions {
    type Item = (&'a String, &'a Vec<Cell>);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Vec<Cell>>;

    fn into_iter(self) -> Self::IntoIter {
        self.found.iter()
    }
}

/// Mutable state for one solve call, passed by `&mut` through the
/// recursion. Invariant between any two recursive calls:
/// `word.len() == path.len() ==` number of `true` entries in `visited`,
/// and `path` lists exactly the cells currently marked visited, in visit
/// order.
struct SearchContext {
    word: String,
    path: Vec<Cell>,
    visited: Vec<bool>,
    found: BTreeMap<String, Vec<Cell>>,
}

/// One step of the depth-first walk: try to extend the current path onto
/// `(row, col)` (signed so that neighbor arithmetic can go off-board).
fn backtrack(grid: &Grid, row: isize, col: isize, node: &TrieNode, cx: &mut SearchContext) {
    // Entry guard: off the board, or already on the current path.
    if row < 0 || col < 0 {
        return;
    }
    let (row, col) = (row as usize, col as usize);
    if row >= grid.rows() || col >= grid.cols() {
        return;
    }
    let flat = grid.flat_index(row, col);
    if cx.visited[flat] {
        return;
    }

    // Prefix guard: no accepted word extends the path by this letter.
    // Pruned before marking the cell, so there is nothing to undo.
    let letter = grid.letter(row, col);
    let Some(next) = node.child(letter) else {
        return;
    };

    // Descend: this cell is now part of the path.
    cx.word.push(letter as char);
    cx.path.push((row, col));
    cx.visited[flat] = true;

    if next.is_word() {
        // Last writer wins: a later path for the same word replaces the
        // stored one. Recording does not stop the walk.
        cx.found.insert(cx.word.clone(), cx.path.clone());
    }

    for (dr, dc) in NEIGHBOR_OFFSETS {
        backtrack(grid, row as isize + dr, col as isize + dc, next, cx);
    }

    // Backtrack: restore the exact pre-call state for sibling branches.
    cx.word.pop();
    cx.path.pop();
    cx.visited[flat] = false;
}

/// Run the exhaustive search: every cell of `grid` in row-major order is a
/// starting point for a fresh walk from the trie root.
///
/// Total over well-formed inputs — recursion depth is bounded by the cell
/// count (no cell repeats on a path) and the trie is finite, so the search
/// always runs to completion.
#[must_use]
pub fn solve(grid: &Grid, trie: &Trie) -> Solutions {
    let mut cx = SearchContext {
        word: String::new(),
        path: Vec::new(),
        visited: vec![false; grid.rows() * grid.cols()],
        found: BTreeMap::new(),
    };

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            debug!("searching from start cell ({row},{col})");
            backtrack(grid, row as isize, col as isize, trie.root(), &mut cx);

            // Exhaustive backtracking must leave the shared state clean for
            // the next starting cell.
            debug_assert!(cx.word.is_empty() && cx.path.is_empty());
            debug_assert!(cx.visited.iter().all(|&v| !v));
        }
    }

    info!(
        "search complete: {} words found on {}x{} board",
        cx.found.len(),
        grid.rows(),
        grid.cols()
    );

    Solutions { found: cx.found }
}
