use crate::cursor::Cursor;
use crate::outcome::ParseResult;
use crate::parser::{Continuation, Parser};
use std::sync::Arc;

/// Data-dependent sequencing
///
/// Runs `parser`, hands its fragments to `next` to build the parser for what
/// follows, and runs that from where the first one stopped. The result is
/// the second parser's result. If either step fails, the whole chain fails
/// and gives back everything it consumed.
///
/// `next` is called on every successful run of `parser`, so it should be a
/// pure function of the fragments.
pub fn chain<F>(parser: Parser, next: F) -> Parser
where
    F: Fn(&[String]) -> Parser + Send + Sync + 'static,
{
    let continuation: Continuation = Arc::new(next);
    Parser::Chain(Arc::new(parser), continuation)
}

impl Parser {
    /// Method form of [`chain`]
    pub fn chain<F>(self, next: F) -> Parser
    where
        F: Fn(&[String]) -> Parser + Send + Sync + 'static,
    {
        chain(self, next)
    }
}

pub(crate) fn parse_chain(
    parser: &Parser,
    continuation: &Continuation,
    cursor: &mut Cursor,
) -> ParseResult {
    let start = cursor.checkpoint();
    let matched = parser.parse(cursor)?;

    let next = continuation(matched.as_slice());
    match next.parse(cursor) {
        Ok(fragments) => Ok(fragments),
        Err(err) => {
            tracing::trace!(
                from = cursor.position(),
                to = start.position(),
                continuation = %next,
                "chain: rewinding after failed continuation"
            );
            cursor.rewind(start);
            Err(err)
        }
    }
}
