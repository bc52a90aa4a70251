//! `word_list` — Module to load and preprocess the candidate dictionary.
//!
//! This module is responsible for reading a dictionary (either from a file,
//! or from an in-memory string — the latter is important for
//! WebAssembly/browser builds, since direct file I/O isn't allowed there).
//!
//! The output is a `WordList` struct containing a flat `Vec<String>` of
//! lowercase words, ready to be inserted into the dictionary index. Length
//! filtering is NOT done here — that is the [`Trie`](crate::trie::Trie)'s
//! documented policy — but character-set validation is: the core search is
//! only defined over lowercase a-z, so this boundary normalizes case and
//! drops any token containing other characters.
//!
//! The parsing logic:
//! - The input is split on whitespace (any run of spaces, tabs, newlines).
//! - Each token is lowercased.
//! - Tokens containing characters outside a-z after lowercasing are skipped
//!   silently (hyphenated entries, abbreviations with periods, and so on).
//! - The final list is deduplicated and sorted.
//!
//! This module is designed to be **WASM-friendly** — no `std::fs` calls are
//! made unless we're on a native build. The public API provides:
//! - `parse_from_str(...)` — works everywhere, including WASM.
//! - `load_from_path(...)` — **native-only** convenience method to read from
//!   a file path.

/// Struct representing a processed, ready-to-index dictionary.
///
/// The `words` vector contains all valid words (normalized, deduplicated),
/// sorted alphabetically.
#[derive(Debug, Clone)]
pub struct WordList {
    /// List of lowercase words.
    /// Example: `["able", "acid", "acorn", ...]`
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a whitespace-separated dictionary from an in-memory string.
    ///
    /// This is **WASM-safe** because it doesn't touch the filesystem — you
    /// can pass the contents of a file fetched via JavaScript `fetch()`
    /// directly into this function.
    ///
    /// # Behavior
    /// 1. Splits the input on whitespace.
    /// 2. Lowercases each token.
    /// 3. Skips tokens containing anything outside a-z.
    /// 4. Deduplicates and sorts the surviving words.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut words: Vec<String> = contents
            .split_whitespace()
            .map(str::to_lowercase)
            .filter(|w| w.bytes().all(|b| b.is_ascii_lowercase()))
            .collect();

        // sort + dedup rather than a HashSet: we want a sorted Vec anyway,
        // and dedup() only removes adjacent duplicates.
        words.sort();
        words.dedup();

        WordList { words }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// This method is **not available** in WebAssembly builds, because
    /// browsers cannot read files from arbitrary paths.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }
}
