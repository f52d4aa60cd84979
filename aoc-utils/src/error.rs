//! Error types for the utility library

use std::num::ParseIntError;
use thiserror::Error;

/// Error type for text parsers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A template or registry lookup named a type nobody registered
    #[error("Unknown parser type \"{0}\"")]
    UnknownType(String),
    /// Input is not a base-10 integer
    #[error("Invalid integer \"{input}\": {source}")]
    InvalidInt {
        input: String,
        #[source]
        source: ParseIntError,
    },
    /// A vector literal has no recognizable separator
    #[error("Invalid {kind}: no separator found in \"{input}\"")]
    NoSeparator { kind: &'static str, input: String },
    /// Wrong number of components for a fixed-size parser
    #[error("Invalid {kind}: expected {expected} parts, found {actual} in \"{input}\"")]
    Arity {
        kind: &'static str,
        expected: usize,
        actual: usize,
        input: String,
    },
    /// Value is not one of the allowed enum values
    #[error("Invalid enum value \"{value}\", expected one of {allowed:?}")]
    InvalidEnum { value: String, allowed: Vec<String> },
    /// Template literal text could not be found in the input
    #[error("Expected \"{literal}\" in \"{input}\"")]
    MissingLiteral { literal: String, input: String },
    /// Template source could not be compiled
    #[error("Invalid template: {0}")]
    TemplateSyntax(String),
    /// A record has no field with that name
    #[error("Missing field \"{0}\"")]
    MissingField(String),
    /// A dynamic value had a different shape than requested
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// Invalid regular expression separator
    #[error("Invalid separator pattern: {0}")]
    InvalidPattern(String),
    /// Error raised by a user supplied mapping
    #[error("{0}")]
    Custom(String),
}

/// Error type for building dense grids
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A row is shorter or longer than the first row
    #[error("Row {row} has length {actual}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Error type for cycle detection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    /// The source ended before any key repeated
    #[error("No cycle detected after {observed} values")]
    NoCycle { observed: usize },
}

/// Error type for parser registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Attempted to register a parser under a name that already exists
    #[error("Duplicate parser registration for \"{0}\"")]
    DuplicateParser(String),
    /// Names must not collide with the array/tuple type syntax
    #[error("Invalid parser name \"{0}\"")]
    InvalidName(String),
}
