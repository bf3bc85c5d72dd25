use crate::cursor::Cursor;
use crate::outcome::ParseResult;
use crate::parser::Parser;
use std::sync::Arc;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// No rewinding happens here: a failed first branch has already left the
/// cursor where it started, so the second branch sees the same position.
pub fn or(first: Parser, second: Parser) -> Parser {
    Parser::Or(Arc::new(first), Arc::new(second))
}

impl Parser {
    /// Method form of [`or`]
    pub fn or(self, other: Parser) -> Parser {
        or(self, other)
    }
}

pub(crate) fn parse_or(first: &Parser, second: &Parser, cursor: &mut Cursor) -> ParseResult {
    match first.parse(cursor) {
        Ok(fragments) => Ok(fragments),
        Err(_) => second.parse(cursor),
    }
}
