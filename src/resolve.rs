// src/resolve.rs

// Pure name matching against a table's keys. The confirm/next/re-enter
// conversation lives in cli.rs; this module only decides what matches.

use crate::params::MATCH_FRAGMENT_LEN;
use crate::stats::StatTable;

/// Outcome of one matching pass over an input.
#[derive(Clone, Debug, PartialEq)]
pub enum Match {
    /// Input equals a key, ignoring case. Carries the key's spelling.
    Exact(String),
    /// Keys containing any fragment of the input, deduplicated, in
    /// table key order.
    Candidates(Vec<String>),
    /// Nothing matched, or the input was too short to fragment.
    None,
}

pub fn match_name(table: &StatTable, input: &str) -> Match {
    let input = input.trim();
    if input.is_empty() {
        return Match::None;
    }

    for key in table.keys() {
        if key.eq_ignore_ascii_case(input) {
            return Match::Exact(key.to_string());
        }
    }

    let fragments = fragments(input);
    if fragments.is_empty() {
        return Match::None;
    }
    let mut candidates = Vec::new();
    for key in table.keys() {
        let key_lc = key.to_lowercase();
        if fragments.iter().any(|f| key_lc.contains(f.as_str())) {
            candidates.push(key.to_string());
        }
    }
    if candidates.is_empty() {
        Match::None
    } else {
        Match::Candidates(candidates)
    }
}

// Lowercased sliding windows, one per starting char. Windows are cut
// on chars, not bytes, so multi-byte input cannot split a code point.
fn fragments(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.to_lowercase().chars().collect();
    if chars.len() < MATCH_FRAGMENT_LEN {
        return Vec::new();
    }
    chars
        .windows(MATCH_FRAGMENT_LEN)
        .map(|w| w.iter().collect())
        .collect()
}
