use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult};
use crate::{and, chain, literal, merge, or, repeat, repeat_while_successful};
use std::fmt;
use std::sync::Arc;

/// Continuation used by [`chain`](crate::chain::chain): builds the next parser from what was matched
pub type Continuation = Arc<dyn Fn(&[String]) -> Parser + Send + Sync>;

/// A composable parsing strategy
///
/// Parsers are immutable trees built with the constructor functions in this
/// crate ([`literal`](crate::literal()), [`and`](crate::and()), [`or`](crate::or()), ...).
/// Running one never changes it, so a parser can be cloned cheaply, shared
/// between threads and run any number of times.
///
/// Every parser obeys one law: when it fails, the cursor is where it was
/// before the call.
#[derive(Clone)]
pub enum Parser {
    Literal(char),
    Any,
    AnyExcept(char),
    Or(Arc<Parser>, Arc<Parser>),
    And(Arc<[Parser]>),
    Merge(Arc<Parser>),
    Repeat(Arc<Parser>, usize),
    RepeatWhileSuccessful(Arc<Parser>),
    Chain(Arc<Parser>, Continuation),
    Fail,
}

impl Parser {
    /// Run this parser once against a complete input
    pub fn run(&self, input: &str) -> Outcome {
        let mut cursor = Cursor::new(input);
        let result = self.parse(&mut cursor);

        tracing::debug!(
            parser = %self,
            input_len = cursor.len(),
            success = result.is_ok(),
            consumed = cursor.position(),
            "parser run finished"
        );

        Outcome::new(result, cursor.remainder())
    }

    /// Attempt to parse from the cursor's current position
    ///
    /// Returns the matched fragments and leaves the cursor after them, or
    /// fails with the cursor untouched.
    pub fn parse(&self, cursor: &mut Cursor) -> ParseResult {
        match self {
            Parser::Literal(expected) => literal::parse_literal(*expected, cursor),
            Parser::Any => literal::parse_any(cursor),
            Parser::AnyExcept(excluded) => literal::parse_any_except(*excluded, cursor),
            Parser::Or(first, second) => or::parse_or(first, second, cursor),
            Parser::And(parsers) => and::parse_and(parsers, cursor),
            Parser::Merge(parser) => merge::parse_merge(parser, cursor),
            Parser::Repeat(parser, count) => repeat::parse_repeat(parser, *count, cursor),
            Parser::RepeatWhileSuccessful(parser) => {
                repeat_while_successful::parse_repeat_while_successful(parser, cursor)
            }
            Parser::Chain(parser, continuation) => {
                chain::parse_chain(parser, continuation, cursor)
            }
            Parser::Fail => Err(crate::NoMatch),
        }
    }

    /// Convenience for `parse` that also reports the fragments as one string
    pub fn parse_merged(&self, cursor: &mut Cursor) -> Result<String, crate::NoMatch> {
        self.parse(cursor).map(|fragments| fragments.concat())
    }
}

impl fmt::Display for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parser::Literal(c) => write!(f, "literal({c:?})"),
            Parser::Any => write!(f, "any()"),
            Parser::AnyExcept(c) => write!(f, "any_except({c:?})"),
            Parser::Or(first, second) => write!(f, "or({first}, {second})"),
            Parser::And(parsers) => {
                write!(f, "and(")?;
                for (i, parser) in parsers.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{parser}")?;
                }
                write!(f, ")")
            }
            Parser::Merge(parser) => write!(f, "merge({parser})"),
            Parser::Repeat(parser, count) => write!(f, "repeat({parser}, {count})"),
            Parser::RepeatWhileSuccessful(parser) => {
                write!(f, "repeat_while_successful({parser})")
            }
            Parser::Chain(parser, _) => write!(f, "chain({parser}, <fn>)"),
            Parser::Fail => write!(f, "fail()"),
        }
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parser({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        and, any, any_except, chain, fail, literal, merge, or, repeat, repeat_while_successful,
    };

    #[test]
    fn test_display_renders_tree() {
        let parser = and(literal('a'), or(repeat(any(), 2), merge(any_except('*'))));
        assert_eq!(
            parser.to_string(),
            "and(literal('a'), or(repeat(any(), 2), merge(any_except('*'))))"
        );
    }

    #[test]
    fn test_display_chain_and_fail() {
        let parser = chain(repeat_while_successful(literal('x')), |_| fail());
        assert_eq!(
            parser.to_string(),
            "chain(repeat_while_successful(literal('x')), <fn>)"
        );
        assert_eq!(format!("{:?}", fail()), "Parser(fail())");
    }

    #[test]
    fn test_run_reports_remainder() {
        let outcome = literal('a').run("abc");
        assert_eq!(outcome.fragments(), Some(&["a".to_string()][..]));
        assert_eq!(outcome.remainder(), "bc");
    }

    #[test]
    fn test_parse_continues_from_cursor() {
        let mut cursor = Cursor::new("abc");
        let parser = any();

        assert_eq!(parser.parse(&mut cursor), Ok(vec!["a".to_string()]));
        assert_eq!(parser.parse(&mut cursor), Ok(vec!["b".to_string()]));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_parse_merged() {
        let mut cursor = Cursor::new("abc");
        let parser = and(any(), any());
        assert_eq!(parser.parse_merged(&mut cursor), Ok("ab".to_string()));
    }

    #[test]
    fn test_clone_shares_tree() {
        let parser = repeat(literal('a'), 2);
        let copy = parser.clone();
        assert_eq!(parser.run("aa"), copy.run("aa"));
    }

    #[test]
    fn test_parser_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Parser>();
    }
}
