//! Input sources for the sort: seeded random generation and plain-text
//! parsing. Everything here resolves its own failures; the sort core never
//! sees raw text.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Failure to turn raw text into sortable integers.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// A token that is not a base-10 integer. `line` and `column` are
    /// 1-based and count tokens, not characters.
    #[error("token {token:?} at line {line}, column {column} is not an integer")]
    InvalidToken {
        token: String,
        line: usize,
        column: usize,
    },
}

/// Draws `len` uniform values in `[0, max_value]` from a seeded generator.
pub fn random(len: usize, max_value: i64, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(0..=max_value)).collect()
}

/// Parses line- and comma-delimited integers.
///
/// Blank tokens (empty lines, trailing commas, stray whitespace) are
/// skipped. Negative values parse fine here: rejecting them as sort keys
/// is the sort's job, not the parser's.
pub fn parse(text: &str) -> Result<Vec<i64>, ParseError> {
    let mut values = Vec::new();
    for (line_index, line) in text.lines().enumerate() {
        for (column_index, token) in line.split(',').enumerate() {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            match token.parse::<i64>() {
                Ok(value) => values.push(value),
                Err(_) => {
                    return Err(ParseError::InvalidToken {
                        token: token.to_string(),
                        line: line_index + 1,
                        column: column_index + 1,
                    });
                }
            }
        }
    }
    Ok(values)
}
