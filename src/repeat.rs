use crate::cursor::Cursor;
use crate::outcome::ParseResult;
use crate::parser::Parser;
use std::sync::Arc;

/// Parser combinator that applies a parser exactly `count` times in a row
///
/// Succeeds with the fragments of every attempt, in order. If any attempt
/// fails, the input consumed by the earlier attempts is given back.
/// `repeat(p, 0)` always succeeds with no fragments and consumes nothing.
pub fn repeat(parser: Parser, count: usize) -> Parser {
    Parser::Repeat(Arc::new(parser), count)
}

impl Parser {
    /// Method form of [`repeat`]
    pub fn repeat(self, count: usize) -> Parser {
        repeat(self, count)
    }
}

pub(crate) fn parse_repeat(parser: &Parser, count: usize, cursor: &mut Cursor) -> ParseResult {
    let start = cursor.checkpoint();
    let mut fragments = Vec::new();

    for attempt in 0..count {
        match parser.parse(cursor) {
            Ok(matched) => fragments.extend(matched),
            Err(err) => {
                tracing::trace!(
                    attempt,
                    count,
                    from = cursor.position(),
                    to = start.position(),
                    "repeat: rewinding after short run"
                );
                cursor.rewind(start);
                return Err(err);
            }
        }
    }

    Ok(fragments)
}
