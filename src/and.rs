use crate::cursor::Cursor;
use crate::error::{NoMatch, TextcombError};
use crate::outcome::ParseResult;
use crate::parser::Parser;
use std::sync::Arc;

/// Parser combinator that runs two parsers in series
///
/// The fragments of both are concatenated in order. If the second parser
/// fails, whatever the first one consumed is given back.
///
/// For more than two parsers use [`sequence`], which keeps the result flat
/// instead of nesting `and` nodes.
pub fn and(first: Parser, second: Parser) -> Parser {
    Parser::And(Arc::from(vec![first, second]))
}

/// Variadic form of [`and`]
///
/// Fails with [`TextcombError::InvalidArgument`] when given no parsers.
pub fn sequence(parsers: impl IntoIterator<Item = Parser>) -> Result<Parser, TextcombError> {
    let parsers: Vec<Parser> = parsers.into_iter().collect();
    if parsers.is_empty() {
        return Err(TextcombError::invalid_argument(
            "sequence needs at least one parser",
        ));
    }
    Ok(Parser::And(Arc::from(parsers)))
}

impl Parser {
    /// Method form of [`and`]
    pub fn and(self, other: Parser) -> Parser {
        and(self, other)
    }
}

pub(crate) fn parse_and(parsers: &[Parser], cursor: &mut Cursor) -> ParseResult {
    // A sequence never matches exhausted input
    if !cursor.has_next() {
        return Err(NoMatch);
    }

    let start = cursor.checkpoint();
    let mut fragments = Vec::new();

    for parser in parsers {
        match parser.parse(cursor) {
            Ok(matched) => fragments.extend(matched),
            Err(err) => {
                tracing::trace!(
                    from = cursor.position(),
                    to = start.position(),
                    "and: rewinding after failed step"
                );
                cursor.rewind(start);
                return Err(err);
            }
        }
    }

    Ok(fragments)
}
