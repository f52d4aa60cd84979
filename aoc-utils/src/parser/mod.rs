//! Text parsing combinators
//!
//! Two layers share the same leaf parsers:
//!
//! - **Typed combinators** implement [`Parser`] with a concrete `Output`:
//!   [`int`], [`str()`], [`vec()`], [`vec3()`], [`arr`], [`tuple`], [`one_of`], plus
//!   [`Parser::map`] and [`Parser::try_map`] for conversions.
//! - **Templates** pull named fields out of a line with a fixed shape. A
//!   [`Template`] is compiled from `${name|type}` slots whose types are resolved by a
//!   [`ParserRegistry`], or assembled from [`named`] typed parsers with
//!   [`Template::builder`]. Both produce a [`Record`] of dynamic [`Value`]s.
//!
//! Composite parsers split their input with a [`Separator`]. The default,
//! [`Separator::Auto`], picks the first of [`SEPARATORS`] present in the input.
//!
//! # Example
//!
//! ```rust
//! use aoc_utils::parser::{Parser, ParserRegistry, Template, arr, int, vec};
//! use aoc_utils::vec::{Vec3, vec2, vec3};
//!
//! assert_eq!(vec().parse("3,4").unwrap(), vec2(3, 4));
//! assert_eq!(arr(int()).parse("1,2,3").unwrap(), vec![1, 2, 3]);
//!
//! let registry = ParserRegistry::builder().with_builtins().build();
//! let brick = Template::compile(&registry, "${start|vec3}~${end|vec3}").unwrap();
//! let record = brick.parse("1,0,1~1,2,1").unwrap();
//! assert_eq!(record.field::<Vec3>("start").unwrap(), vec3(1, 0, 1));
//! assert_eq!(record.field::<Vec3>("end").unwrap(), vec3(1, 2, 1));
//! ```

mod combinators;
mod registry;
mod separator;
mod template;
mod value;

use std::rc::Rc;

use crate::error::ParseError;

pub use combinators::{
    Arr, FromFn, Int, Named, OneOf, ParserTuple, Str, Tuple, Vec2Parser, Vec3Parser, arr,
    arr_sep, from_fn, int, named, one_of, str, tuple, tuple_sep, vec, vec3,
};
pub use registry::{DynParser, ParserRegistry, ParserRegistryBuilder};
pub use separator::{SEPARATORS, Separator, detect_separator};
pub use template::{Template, TemplateBuilder};
pub use value::{Record, Value};

/// Turns text into a value.
pub trait Parser {
    type Output;

    fn parse(&self, input: &str) -> Result<Self::Output, ParseError>;

    /// Converts the output with an infallible function.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map { parser: self, f }
    }

    /// Converts the output with a function that may reject it.
    ///
    /// ```rust
    /// use aoc_utils::error::ParseError;
    /// use aoc_utils::parser::{Parser, int};
    ///
    /// let digit = int().try_map(|n| {
    ///     u8::try_from(n)
    ///         .ok()
    ///         .filter(|d| *d < 10)
    ///         .ok_or_else(|| ParseError::Custom(format!("{n} is not a digit")))
    /// });
    /// assert_eq!(digit.parse("7").unwrap(), 7);
    /// assert!(digit.parse("12").is_err());
    /// ```
    fn try_map<U, F>(self, f: F) -> TryMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Result<U, ParseError>,
    {
        TryMap { parser: self, f }
    }
}

impl<P: Parser + ?Sized> Parser for &P {
    type Output = P::Output;

    fn parse(&self, input: &str) -> Result<P::Output, ParseError> {
        (**self).parse(input)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Output = P::Output;

    fn parse(&self, input: &str) -> Result<P::Output, ParseError> {
        (**self).parse(input)
    }
}

impl<P: Parser + ?Sized> Parser for Rc<P> {
    type Output = P::Output;

    fn parse(&self, input: &str) -> Result<P::Output, ParseError> {
        (**self).parse(input)
    }
}

/// See [`Parser::map`].
#[derive(Debug, Clone)]
pub struct Map<P, F> {
    parser: P,
    f: F,
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, input: &str) -> Result<U, ParseError> {
        self.parser.parse(input).map(&self.f)
    }
}

/// See [`Parser::try_map`].
#[derive(Debug, Clone)]
pub struct TryMap<P, F> {
    parser: P,
    f: F,
}

impl<P, F, U> Parser for TryMap<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Result<U, ParseError>,
{
    type Output = U;

    fn parse(&self, input: &str) -> Result<U, ParseError> {
        self.parser.parse(input).and_then(&self.f)
    }
}

#[cfg(test)]
mod tests;
