//! Visual grouping of encoded text
//!
//! Separators are purely cosmetic: the decoder strips every one of them, so a
//! transcriber may add or drop spaces freely.

use super::{GROUP_SEPARATOR, GROUP_SIZE};

/// Insert a separator after every `GROUP_SIZE` characters
///
/// The last group may be shorter; no separator is emitted at either end.
#[must_use]
pub fn group(encoded: &str) -> String {
    let groups = encoded.len().div_ceil(GROUP_SIZE);
    let mut out = String::with_capacity(encoded.len() + groups.saturating_sub(1));

    for (i, c) in encoded.chars().enumerate() {
        if i > 0 && i % GROUP_SIZE == 0 {
            out.push(char::from(GROUP_SEPARATOR));
        }
        out.push(c);
    }

    out
}

/// Remove every separator from a line
#[must_use]
pub fn strip_separators(line: &[u8]) -> Vec<u8> {
    line.iter()
        .copied()
        .filter(|&b| b != GROUP_SEPARATOR)
        .collect()
}
