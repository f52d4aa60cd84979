//! Line templates with typed slots.

use std::fmt;
use std::rc::Rc;

use log::debug;

use super::Parser;
use super::combinators::Named;
use super::registry::{DynParser, ParserRegistry};
use super::value::{Record, Value};
use crate::error::ParseError;

struct Slot {
    name: String,
    parser: DynParser,
}

/// Literal text interleaved with named slots.
///
/// Parsing walks the input left to right: the leading literal must be a prefix,
/// and each slot spans from the end of the literal before it up to the next
/// occurrence of the literal after it (or to the end of the input when the
/// template ends with the slot). Text after the final literal is ignored.
pub struct Template {
    // Always one more literal than slots
    literals: Vec<String>,
    slots: Vec<Slot>,
}

impl Template {
    /// Compiles `${name|type}` slots, resolving each type in `registry`.
    ///
    /// ```rust
    /// use aoc_utils::parser::{Parser, ParserRegistry, Template};
    ///
    /// let registry = ParserRegistry::builder().with_builtins().build();
    /// let move_line = Template::compile(&registry, "move ${n|int} from ${from|int} to ${to|int}").unwrap();
    /// let record = move_line.parse("move 3 from 1 to 2").unwrap();
    /// assert_eq!(record.field::<i64>("n").unwrap(), 3);
    /// assert_eq!(record.field::<i64>("to").unwrap(), 2);
    /// ```
    pub fn compile(registry: &ParserRegistry, source: &str) -> Result<Self, ParseError> {
        let mut builder = Template::builder();
        let mut rest = source;

        while let Some(open) = rest.find("${") {
            builder = builder.literal(&rest[..open]);
            let after_open = &rest[open + 2..];
            let close = after_open
                .find('}')
                .ok_or_else(|| ParseError::TemplateSyntax(format!("unclosed slot in \"{source}\"")))?;
            let (name, type_name) = after_open[..close].split_once('|').ok_or_else(|| {
                ParseError::TemplateSyntax(format!(
                    "slot \"{}\" needs the form name|type",
                    &after_open[..close]
                ))
            })?;
            builder = builder.slot_dyn(name.trim(), registry.resolve(type_name)?);
            rest = &after_open[close + 1..];
        }

        let template = builder.literal(rest).build()?;
        debug!(
            "compiled template {source:?} with fields {:?}",
            template.field_names().collect::<Vec<_>>()
        );
        Ok(template)
    }

    /// Starts a template assembled from typed parsers.
    ///
    /// ```rust
    /// use aoc_utils::parser::{Parser, Template, arr, int, named, str};
    ///
    /// let template = Template::builder()
    ///     .slot(named("name", str()))
    ///     .literal(": ")
    ///     .slot(named("scores", arr(int())))
    ///     .build()
    ///     .unwrap();
    /// let record = template.parse("ada: 3 4 5").unwrap();
    /// assert_eq!(record.field::<String>("name").unwrap(), "ada");
    /// assert_eq!(record.field::<Vec<i64>>("scores").unwrap(), vec![3, 4, 5]);
    /// ```
    pub fn builder() -> TemplateBuilder {
        TemplateBuilder {
            literals: vec![String::new()],
            slots: Vec::new(),
        }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().map(|slot| slot.name.as_str())
    }

    fn expect_literal(literal: &str, input: &str, from: usize) -> Result<usize, ParseError> {
        input[from..]
            .find(literal)
            .map(|offset| from + offset)
            .ok_or_else(|| ParseError::MissingLiteral {
                literal: literal.to_string(),
                input: input.to_string(),
            })
    }
}

impl Parser for Template {
    type Output = Record;

    fn parse(&self, input: &str) -> Result<Record, ParseError> {
        let leading = &self.literals[0];
        if !input.starts_with(leading.as_str()) {
            return Err(ParseError::MissingLiteral {
                literal: leading.clone(),
                input: input.to_string(),
            });
        }

        let mut record = Record::new();
        let mut cursor = leading.len();
        for (slot, next) in self.slots.iter().zip(&self.literals[1..]) {
            let end = if next.is_empty() {
                input.len()
            } else {
                Template::expect_literal(next, input, cursor)?
            };
            record.insert(slot.name.as_str(), slot.parser.parse(&input[cursor..end])?);
            cursor = end + next.len();
        }
        Ok(record)
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("literals", &self.literals)
            .field("fields", &self.field_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`Template`], see [`Template::builder`].
pub struct TemplateBuilder {
    literals: Vec<String>,
    slots: Vec<Slot>,
}

impl TemplateBuilder {
    /// Appends literal text.
    pub fn literal(mut self, text: &str) -> Self {
        if let Some(last) = self.literals.last_mut() {
            last.push_str(text);
        }
        self
    }

    /// Appends a slot parsed by a named typed parser.
    pub fn slot<P>(self, named: Named<P>) -> Self
    where
        P: Parser + 'static,
        P::Output: Into<Value>,
    {
        let (name, parser) = named.into_parts();
        let parser: DynParser = Rc::new(parser.map(|output: P::Output| -> Value { output.into() }));
        self.slot_dyn(&name, parser)
    }

    fn slot_dyn(mut self, name: &str, parser: DynParser) -> Self {
        self.slots.push(Slot {
            name: name.to_string(),
            parser,
        });
        self.literals.push(String::new());
        self
    }

    /// Validates and finishes the template.
    ///
    /// Fails if two slots share a name, a slot name is empty, or two slots are
    /// adjacent with no literal between them (their boundary would be ambiguous).
    pub fn build(self) -> Result<Template, ParseError> {
        for (i, slot) in self.slots.iter().enumerate() {
            if slot.name.is_empty() {
                return Err(ParseError::TemplateSyntax("empty slot name".to_string()));
            }
            if self.slots[..i].iter().any(|other| other.name == slot.name) {
                return Err(ParseError::TemplateSyntax(format!(
                    "duplicate slot \"{}\"",
                    slot.name
                )));
            }
            // Literal between slot i and slot i + 1
            if i + 1 < self.slots.len() && self.literals[i + 1].is_empty() {
                return Err(ParseError::TemplateSyntax(format!(
                    "slots \"{}\" and \"{}\" need a literal between them",
                    slot.name,
                    self.slots[i + 1].name
                )));
            }
        }
        Ok(Template {
            literals: self.literals,
            slots: self.slots,
        })
    }
}
