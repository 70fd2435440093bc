//! Line-oriented choice lists for combo-box population.

use std::io;
use std::path::Path;

/// Reads an ordered choice list from a text file: one choice per line,
/// trimmed, blank lines skipped.
pub fn read_choice_lines(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
