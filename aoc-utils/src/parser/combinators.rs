//! Leaf parsers and combinators.

use super::Parser;
use super::separator::Separator;
use crate::error::ParseError;
use crate::vec::{Vec2, Vec3, vec2};

fn parse_int(input: &str) -> Result<i64, ParseError> {
    let trimmed = input.trim();
    trimmed.parse().map_err(|source| ParseError::InvalidInt {
        input: trimmed.to_string(),
        source,
    })
}

/// Splits `input` into exactly `N` integers using the detected separator.
fn parse_ints<const N: usize>(kind: &'static str, input: &str) -> Result<[i64; N], ParseError> {
    let parts = Separator::Auto
        .split(input, None)
        .ok_or_else(|| ParseError::NoSeparator {
            kind,
            input: input.to_string(),
        })?;
    if parts.len() != N {
        return Err(ParseError::Arity {
            kind,
            expected: N,
            actual: parts.len(),
            input: input.to_string(),
        });
    }

    let mut values = [0; N];
    for (slot, part) in values.iter_mut().zip(parts) {
        *slot = parse_int(part)?;
    }
    Ok(values)
}

/// See [`int`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Int;

impl Parser for Int {
    type Output = i64;

    fn parse(&self, input: &str) -> Result<i64, ParseError> {
        parse_int(input)
    }
}

/// Base-10 signed integer, surrounding whitespace ignored.
pub fn int() -> Int {
    Int
}

/// See [`str()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Str;

impl Parser for Str {
    type Output = String;

    fn parse(&self, input: &str) -> Result<String, ParseError> {
        Ok(input.to_string())
    }
}

/// The input unchanged.
pub fn str() -> Str {
    Str
}

/// See [`vec()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Vec2Parser;

impl Parser for Vec2Parser {
    type Output = Vec2;

    fn parse(&self, input: &str) -> Result<Vec2, ParseError> {
        let [x, y] = parse_ints("vec", input)?;
        Ok(vec2(x, y))
    }
}

/// Two integers split by a detected separator, such as `"3,4"` or `"3 -> 4"`.
pub fn vec() -> Vec2Parser {
    Vec2Parser
}

/// See [`vec3()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Vec3Parser;

impl Parser for Vec3Parser {
    type Output = Vec3;

    fn parse(&self, input: &str) -> Result<Vec3, ParseError> {
        let [x, y, z] = parse_ints("vec3", input)?;
        Ok(Vec3 { x, y, z })
    }
}

/// Three integers split by a detected separator, such as `"1,0,1"`.
pub fn vec3() -> Vec3Parser {
    Vec3Parser
}

/// See [`arr`].
#[derive(Debug, Clone)]
pub struct Arr<P> {
    item: P,
    separator: Separator,
}

impl<P: Parser> Parser for Arr<P> {
    type Output = Vec<P::Output>;

    fn parse(&self, input: &str) -> Result<Self::Output, ParseError> {
        let parts = self.separator.split(input, Some(",")).unwrap_or_default();
        parts
            .into_iter()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| self.item.parse(part))
            .collect()
    }
}

/// A list of `item`, split on the detected separator (`","` if none is found).
/// Parts are trimmed and empty parts skipped.
///
/// `"-"` is a candidate separator, so a lone negative number such as `"-5"` splits
/// into `["", "5"]` and parses as `[5]`. Use [`arr_sep`] when the input may hold a
/// single negative value.
pub fn arr<P: Parser>(item: P) -> Arr<P> {
    arr_sep(item, Separator::Auto)
}

/// A list of `item` split on an explicit separator.
pub fn arr_sep<P: Parser>(item: P, separator: impl Into<Separator>) -> Arr<P> {
    Arr {
        item,
        separator: separator.into(),
    }
}

/// A tuple of parsers applied to consecutive parts of the input.
pub trait ParserTuple {
    type Output;

    /// Number of parts the input must split into.
    const ARITY: usize;

    /// Parses `parts`, which holds exactly [`Self::ARITY`] items.
    fn parse_parts(&self, parts: &[&str]) -> Result<Self::Output, ParseError>;
}

macro_rules! impl_parser_tuple {
    ($arity:literal; $($P:ident $idx:tt),+) => {
        impl<$($P: Parser),+> ParserTuple for ($($P,)+) {
            type Output = ($($P::Output,)+);

            const ARITY: usize = $arity;

            fn parse_parts(&self, parts: &[&str]) -> Result<Self::Output, ParseError> {
                Ok(($(self.$idx.parse(parts[$idx])?,)+))
            }
        }
    };
}

impl_parser_tuple!(2; A 0, B 1);
impl_parser_tuple!(3; A 0, B 1, C 2);
impl_parser_tuple!(4; A 0, B 1, C 2, D 3);
impl_parser_tuple!(5; A 0, B 1, C 2, D 3, E 4);

/// See [`tuple`].
#[derive(Debug, Clone)]
pub struct Tuple<T> {
    parsers: T,
    separator: Separator,
}

impl<T: ParserTuple> Parser for Tuple<T> {
    type Output = T::Output;

    fn parse(&self, input: &str) -> Result<Self::Output, ParseError> {
        let parts = self.separator.split(input, Some(",")).unwrap_or_default();
        if parts.len() != T::ARITY {
            return Err(ParseError::Arity {
                kind: "tuple",
                expected: T::ARITY,
                actual: parts.len(),
                input: input.to_string(),
            });
        }
        self.parsers.parse_parts(&parts)
    }
}

/// Heterogeneous tuple, one parser per part, split on the detected separator
/// (`","` if none is found). Parts are passed on untrimmed.
///
/// ```rust
/// use aoc_utils::parser::{Parser, int, str, tuple};
///
/// let (name, count) = tuple((str(), int())).parse("abc 5").unwrap();
/// assert_eq!((name.as_str(), count), ("abc", 5));
/// ```
pub fn tuple<T: ParserTuple>(parsers: T) -> Tuple<T> {
    tuple_sep(parsers, Separator::Auto)
}

/// Heterogeneous tuple split on an explicit separator.
pub fn tuple_sep<T: ParserTuple>(parsers: T, separator: impl Into<Separator>) -> Tuple<T> {
    Tuple {
        parsers,
        separator: separator.into(),
    }
}

/// See [`one_of`].
#[derive(Debug, Clone)]
pub struct OneOf {
    allowed: Vec<String>,
}

impl Parser for OneOf {
    type Output = String;

    fn parse(&self, input: &str) -> Result<String, ParseError> {
        if self.allowed.iter().any(|value| value == input) {
            Ok(input.to_string())
        } else {
            Err(ParseError::InvalidEnum {
                value: input.to_string(),
                allowed: self.allowed.clone(),
            })
        }
    }
}

/// Accepts exactly one of `allowed`.
pub fn one_of<S: Into<String>>(allowed: impl IntoIterator<Item = S>) -> OneOf {
    OneOf {
        allowed: allowed.into_iter().map(Into::into).collect(),
    }
}

/// A parser carrying a field name, used to build templates.
#[derive(Debug, Clone)]
pub struct Named<P> {
    name: String,
    parser: P,
}

impl<P> Named<P> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn into_parts(self) -> (String, P) {
        (self.name, self.parser)
    }
}

impl<P: Parser> Parser for Named<P> {
    type Output = P::Output;

    fn parse(&self, input: &str) -> Result<P::Output, ParseError> {
        self.parser.parse(input)
    }
}

/// Attaches a field name to `parser`.
pub fn named<P: Parser>(name: impl Into<String>, parser: P) -> Named<P> {
    Named {
        name: name.into(),
        parser,
    }
}

/// See [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

impl<F, O> Parser for FromFn<F>
where
    F: Fn(&str) -> Result<O, ParseError>,
{
    type Output = O;

    fn parse(&self, input: &str) -> Result<O, ParseError> {
        (self.0)(input)
    }
}

/// Wraps a plain function as a parser.
pub fn from_fn<F, O>(f: F) -> FromFn<F>
where
    F: Fn(&str) -> Result<O, ParseError>,
{
    FromFn(f)
}
