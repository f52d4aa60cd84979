//! Parsers looked up by type name.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::combinators::{arr, int, str, vec, vec3};
use super::separator::Separator;
use super::value::Value;
use super::Parser;
use crate::error::{ParseError, RegistrationError};

/// A shared parser producing dynamic [`Value`]s.
pub type DynParser = Rc<dyn Parser<Output = Value>>;

/// Builder for a [`ParserRegistry`]
///
/// Names must be unique; registering a name twice is an error rather than a
/// silent override.
///
/// # Example
///
/// ```rust
/// use aoc_utils::parser::{Parser, ParserRegistry, Value, one_of};
///
/// let registry = ParserRegistry::builder()
///     .with_builtins()
///     .register("dir", one_of(["U", "D", "L", "R"]))
///     .unwrap()
///     .build();
///
/// assert_eq!(registry.parse("dir[]", "U,L").unwrap(), Value::from(vec!["U", "L"]));
/// assert!(registry.parse("dir", "X").is_err());
/// ```
pub struct ParserRegistryBuilder {
    parsers: HashMap<String, DynParser>,
}

impl ParserRegistryBuilder {
    /// Create an empty builder, without even the builtin types
    pub fn new() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Register the builtin `int`, `str`, `vec` and `vec3` types
    ///
    /// Existing registrations under those names are replaced.
    pub fn with_builtins(mut self) -> Self {
        self.parsers.insert("int".into(), erase(int()));
        self.parsers.insert("str".into(), erase(str()));
        self.parsers.insert("vec".into(), erase(vec()));
        self.parsers.insert("vec3".into(), erase(vec3()));
        self
    }

    /// Register a parser under a type name
    ///
    /// # Arguments
    /// * `name` - The type name used in templates, e.g. `"dir"`
    /// * `parser` - Any parser whose output converts into a [`Value`]
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the parser registered, ready for chaining
    /// * `Err(RegistrationError)` - The name is taken or clashes with the `T[]` / `(A,B)` syntax
    pub fn register<P>(mut self, name: impl Into<String>, parser: P) -> Result<Self, RegistrationError>
    where
        P: Parser + 'static,
        P::Output: Into<Value>,
    {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(RegistrationError::InvalidName(name));
        }
        if self.parsers.contains_key(&name) {
            return Err(RegistrationError::DuplicateParser(name));
        }
        self.parsers.insert(name, erase(parser));
        Ok(self)
    }

    /// Finalize the builder into an immutable registry
    pub fn build(self) -> ParserRegistry {
        ParserRegistry {
            parsers: self.parsers,
        }
    }
}

impl Default for ParserRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable mapping from type names to parsers
///
/// Besides registered names, two composite forms are resolved recursively:
///
/// - `T[]`: a list of `T`, split like [`arr`](super::arr)
/// - `(A,B,..)`: a tuple, split like [`tuple`](super::tuple)
pub struct ParserRegistry {
    parsers: HashMap<String, DynParser>,
}

impl ParserRegistry {
    /// Start building a registry
    pub fn builder() -> ParserRegistryBuilder {
        ParserRegistryBuilder::new()
    }

    /// Whether `name` was registered (composite forms are not listed)
    pub fn contains(&self, name: &str) -> bool {
        self.parsers.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.parsers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Look up the parser for a type expression
    ///
    /// # Returns
    /// * `Ok(DynParser)` - A parser for the type
    /// * `Err(ParseError::UnknownType)` - The type, or one of its components, is not registered
    pub fn resolve(&self, type_name: &str) -> Result<DynParser, ParseError> {
        let type_name = type_name.trim();

        if let Some(item) = type_name.strip_suffix("[]") {
            let item = self.resolve(item)?;
            return Ok(Rc::new(arr(item).map(Value::List)));
        }

        if let Some(inner) = type_name
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let parsers = split_top_level(inner)
                .into_iter()
                .map(|part| self.resolve(part))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Rc::new(DynTuple { parsers }));
        }

        self.parsers
            .get(type_name)
            .cloned()
            .ok_or_else(|| ParseError::UnknownType(type_name.to_string()))
    }

    /// Parse `input` as `type_name`
    pub fn parse(&self, type_name: &str, input: &str) -> Result<Value, ParseError> {
        self.resolve(type_name)?.parse(input)
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("names", &self.names())
            .finish()
    }
}

fn erase<P>(parser: P) -> DynParser
where
    P: Parser + 'static,
    P::Output: Into<Value>,
{
    Rc::new(parser.map(|output: P::Output| -> Value { output.into() }))
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.ends_with("[]")
        && !name
            .chars()
            .any(|c| c.is_whitespace() || "(),|{}$".contains(c))
}

/// Splits on commas that are not nested inside parentheses.
fn split_top_level(types: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in types.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&types[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&types[start..]);
    parts
}

/// Tuple of dynamically resolved parsers.
struct DynTuple {
    parsers: Vec<DynParser>,
}

impl Parser for DynTuple {
    type Output = Value;

    fn parse(&self, input: &str) -> Result<Value, ParseError> {
        let parts = Separator::Auto.split(input, Some(",")).unwrap_or_default();
        if parts.len() != self.parsers.len() {
            return Err(ParseError::Arity {
                kind: "tuple",
                expected: self.parsers.len(),
                actual: parts.len(),
                input: input.to_string(),
            });
        }
        self.parsers
            .iter()
            .zip(parts)
            .map(|(parser, part)| parser.parse(part))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Tuple)
    }
}
