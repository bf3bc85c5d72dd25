use crate::and::sequence;
use crate::cursor::Cursor;
use crate::error::TextcombError;
use crate::outcome::ParseResult;
use crate::parser::Parser;
use std::sync::Arc;

/// Groups everything a parser matches into a single fragment
///
/// An outer [`and`](crate::and()) then sees the group as one piece, the same
/// as a single character match.
pub fn merge(parser: Parser) -> Parser {
    Parser::Merge(Arc::new(parser))
}

/// Runs the parsers in sequence and groups the match, i.e. `merge(sequence(parsers))`
///
/// Fails with [`TextcombError::InvalidArgument`] when given no parsers.
pub fn merge_all(parsers: impl IntoIterator<Item = Parser>) -> Result<Parser, TextcombError> {
    sequence(parsers).map(merge)
}

impl Parser {
    /// Method form of [`merge`]
    pub fn merged(self) -> Parser {
        merge(self)
    }
}

pub(crate) fn parse_merge(parser: &Parser, cursor: &mut Cursor) -> ParseResult {
    let start = cursor.checkpoint();
    match parser.parse(cursor) {
        Ok(fragments) => Ok(vec![fragments.concat()]),
        Err(err) => {
            cursor.rewind(start);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NoMatch, and, any_except, literal, repeat, repeat_while_successful};

    #[test]
    fn test_merge_collapses() {
        let parser = merge_all([literal('a'), literal('b')]).unwrap();
        let outcome = parser.run("abcd");
        assert_eq!(outcome.fragments(), Some(&["ab".to_string()][..]));
        assert_eq!(outcome.remainder(), "cd");
    }

    #[test]
    fn test_merge_single_fragment_unchanged() {
        let outcome = merge(literal('a')).run("ab");
        assert_eq!(outcome.fragments(), Some(&["a".to_string()][..]));
    }

    #[test]
    fn test_merge_failure_rewinds() {
        let mut cursor = Cursor::new("abd");
        let parser = merge_all([literal('a'), literal('b'), literal('c')]).unwrap();

        assert_eq!(parser.parse(&mut cursor), Err(NoMatch));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_merge_of_empty_success() {
        // Zero repetitions still produce exactly one (empty) fragment
        let outcome = merge(repeat(literal('a'), 0)).run("xyz");
        assert_eq!(outcome.fragments(), Some(&["".to_string()][..]));
        assert_eq!(outcome.remainder(), "xyz");
    }

    #[test]
    fn test_merge_nested_groups() {
        let word = merge(repeat_while_successful(any_except(' ')));
        let parser = and(word.clone(), and(literal(' '), word));
        let outcome = parser.run("hello world");
        assert_eq!(
            outcome.fragments(),
            Some(&["hello".to_string(), " ".to_string(), "world".to_string()][..])
        );
    }

    #[test]
    fn test_merge_all_rejects_empty() {
        assert!(matches!(
            merge_all(Vec::<Parser>::new()),
            Err(TextcombError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_merged_method() {
        let parser = literal('x').and(literal('y')).merged();
        assert_eq!(parser.to_string(), "merge(and(literal('x'), literal('y')))");
        assert_eq!(parser.run("xyz").fragments(), Some(&["xy".to_string()][..]));
    }
}
