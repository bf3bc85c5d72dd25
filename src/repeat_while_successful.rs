use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::outcome::ParseResult;
use crate::parser::Parser;
use std::sync::Arc;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Stops at the first failed attempt and returns the fragments of all the
/// successful ones. Zero matches is a failure.
///
/// An attempt that succeeds without consuming input ends the repetition and
/// is not counted, so wrapping a parser that can match the empty string
/// cannot loop forever.
pub fn repeat_while_successful(parser: Parser) -> Parser {
    Parser::RepeatWhileSuccessful(Arc::new(parser))
}

impl Parser {
    /// Method form of [`repeat_while_successful`]
    pub fn repeat_while_successful(self) -> Parser {
        repeat_while_successful(self)
    }
}

pub(crate) fn parse_repeat_while_successful(parser: &Parser, cursor: &mut Cursor) -> ParseResult {
    let mut fragments = Vec::new();
    let mut matches = 0usize;

    loop {
        let before = cursor.checkpoint();
        match parser.parse(cursor) {
            Ok(_) if cursor.checkpoint() == before => {
                tracing::debug!(
                    position = before.position(),
                    matches,
                    "repeat_while_successful: stopping on zero-width match"
                );
                break;
            }
            Ok(matched) => {
                fragments.extend(matched);
                matches += 1;
            }
            Err(_) => break,
        }
    }

    if matches == 0 {
        return Err(NoMatch);
    }

    Ok(fragments)
}
