//! Positional placeholder templates.
//!
//! Syntax, scanned left to right:
//!
//! - `%s` consumes the next argument
//! - `%%` is a literal `%`
//! - `%n` is a newline
//! - any other `%` sequence is copied through unchanged
//!
//! Argument counting is explicit: rendering with the wrong number of
//! arguments is a [`FormatError`], never a panic.

use std::fmt::{self, Write as _};

use crate::FormatError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Arg,
}

/// A parsed message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
    placeholders: usize,
}

impl Template {
    /// Parse a template. Parsing never fails; unknown sequences stay literal.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut placeholders = 0;
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }

            match chars.peek() {
                Some('s') => {
                    chars.next();
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Arg);
                    placeholders += 1;
                },
                Some('%') => {
                    chars.next();
                    literal.push('%');
                },
                Some('n') => {
                    chars.next();
                    literal.push('\n');
                },
                _ => literal.push('%'),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments, placeholders }
    }

    /// Number of `%s` placeholders.
    pub fn placeholder_count(&self) -> usize {
        self.placeholders
    }

    /// Substitute `args` into the placeholders in order.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::ArgumentCount` unless exactly one argument is
    /// supplied per placeholder.
    pub fn render(&self, args: &[&dyn fmt::Display]) -> Result<String, FormatError> {
        if args.len() != self.placeholders {
            return Err(FormatError::ArgumentCount { expected: self.placeholders, got: args.len() });
        }

        let mut out = String::new();
        let mut args = args.iter();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Arg => {
                    if let Some(arg) = args.next() {
                        // Writing to a String cannot fail
                        let _ = write!(out, "{arg}");
                    }
                },
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_in_order() {
        let template = Template::parse("%s joined %s");

        assert_eq!(template.placeholder_count(), 2);
        assert_eq!(template.render(&[&"Steve", &"Hub"]).unwrap(), "Steve joined Hub");
    }

    #[test]
    fn escapes_and_unknown_sequences() {
        let template = Template::parse("100%% done%n%d left, 50% off");

        assert_eq!(template.placeholder_count(), 0);
        assert_eq!(template.render(&[]).unwrap(), "100% done\n%d left, 50% off");
    }

    #[test]
    fn trailing_percent_is_literal() {
        assert_eq!(Template::parse("rate %").render(&[]).unwrap(), "rate %");
    }

    #[test]
    fn too_few_arguments() {
        let result = Template::parse("delete %s?").render(&[]);
        assert_eq!(result, Err(FormatError::ArgumentCount { expected: 1, got: 0 }));
    }

    #[test]
    fn too_many_arguments() {
        let result = Template::parse("Back").render(&[&"extra"]);
        assert_eq!(result, Err(FormatError::ArgumentCount { expected: 0, got: 1 }));
    }

    #[test]
    fn non_string_arguments() {
        let template = Template::parse("port %s");
        assert_eq!(template.render(&[&25565u16]).unwrap(), "port 25565");
    }
}
