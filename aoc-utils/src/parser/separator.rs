//! Split policies for composite parsers.

use regex::Regex;

use crate::error::ParseError;

/// Separators tried, in order, when none is given explicitly. The first one that
/// occurs anywhere in the input wins.
pub const SEPARATORS: [&str; 8] = ["\n\n", "\n", " -> ", ", ", ",", " - ", " ", "-"];

/// Returns the highest priority separator present in `input`.
///
/// ```rust
/// use aoc_utils::parser::detect_separator;
///
/// assert_eq!(detect_separator("1,2\n3,4"), Some("\n"));
/// assert_eq!(detect_separator("a -> b"), Some(" -> "));
/// assert_eq!(detect_separator("42"), None);
/// ```
pub fn detect_separator(input: &str) -> Option<&'static str> {
    SEPARATORS.into_iter().find(|sep| input.contains(sep))
}

/// How a composite parser splits its input.
#[derive(Debug, Clone, Default)]
pub enum Separator {
    /// Use [`detect_separator`].
    #[default]
    Auto,
    Literal(String),
    Regex(Regex),
}

impl Separator {
    /// Separator matching a regular expression.
    pub fn regex(pattern: &str) -> Result<Self, ParseError> {
        Regex::new(pattern)
            .map(Separator::Regex)
            .map_err(|err| ParseError::InvalidPattern(err.to_string()))
    }

    /// Splits `input`. `Auto` falls back to `fallback` when no known separator
    /// occurs, and returns `None` if there is no fallback either.
    pub(crate) fn split<'a>(&self, input: &'a str, fallback: Option<&'static str>) -> Option<Vec<&'a str>> {
        match self {
            Separator::Auto => detect_separator(input)
                .or(fallback)
                .map(|sep| input.split(sep).collect()),
            Separator::Literal(sep) => Some(input.split(sep.as_str()).collect()),
            Separator::Regex(re) => Some(re.split(input).collect()),
        }
    }
}

impl From<&str> for Separator {
    fn from(sep: &str) -> Self {
        Separator::Literal(sep.to_string())
    }
}

impl From<String> for Separator {
    fn from(sep: String) -> Self {
        Separator::Literal(sep)
    }
}

impl From<Regex> for Separator {
    fn from(re: Regex) -> Self {
        Separator::Regex(re)
    }
}
