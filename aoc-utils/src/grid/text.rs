//! Rotation of raw, possibly ragged, text blocks.
//!
//! Unlike [`Grid`](super::Grid) these helpers accept rows of different lengths:
//! short rows are treated as padded on the right, padding turns into `' '` in the
//! rotated text and trailing spaces are trimmed from every output line.

/// Rotates ragged rows a quarter turn. The result is `max_row_len` rows of
/// `rows.len()` cells, `None` where the source row was too short.
pub fn rotate_ragged<T: Clone>(rows: &[Vec<T>], clockwise: bool) -> Vec<Vec<Option<T>>> {
    let height = rows.len();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);

    let mut rotated = vec![vec![None; height]; width];
    for (y, row) in rows.iter().enumerate() {
        for (x, value) in row.iter().enumerate() {
            let (i, j) = if clockwise {
                (x, height - y - 1)
            } else {
                (width - x - 1, y)
            };
            rotated[i][j] = Some(value.clone());
        }
    }
    rotated
}

/// Rotates a list of lines a quarter turn.
///
/// ```rust
/// use aoc_utils::grid::text::rotate_lines;
///
/// assert_eq!(rotate_lines(&["abc", "d"], true), vec!["da", " b", " c"]);
/// assert_eq!(rotate_lines(&["abc", "d"], false), vec!["c", "b", "ad"]);
/// ```
pub fn rotate_lines<S: AsRef<str>>(lines: &[S], clockwise: bool) -> Vec<String> {
    let rows: Vec<Vec<char>> = lines.iter().map(|line| line.as_ref().chars().collect()).collect();
    rotate_ragged(&rows, clockwise)
        .into_iter()
        .map(|row| {
            let line: String = row.into_iter().map(|c| c.unwrap_or(' ')).collect();
            line.trim_end().to_string()
        })
        .collect()
}

/// Rotates a newline separated block of text a quarter turn.
pub fn rotate_text(text: &str, clockwise: bool) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    rotate_lines(&lines, clockwise).join("\n")
}
