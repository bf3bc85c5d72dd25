use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::outcome::ParseResult;
use crate::parser::Parser;

/// Parser that matches one specific character
pub fn literal(expected: char) -> Parser {
    Parser::Literal(expected)
}

/// Parser that consumes and returns any single character
pub fn any() -> Parser {
    Parser::Any
}

/// Parser that consumes any single character other than `excluded`
pub fn any_except(excluded: char) -> Parser {
    Parser::AnyExcept(excluded)
}

pub(crate) fn parse_literal(expected: char, cursor: &mut Cursor) -> ParseResult {
    match cursor.peek() {
        Ok(c) if c == expected => {
            cursor.advance();
            Ok(vec![c.to_string()])
        }
        _ => Err(NoMatch),
    }
}

pub(crate) fn parse_any(cursor: &mut Cursor) -> ParseResult {
    let c = cursor.peek().map_err(|_| NoMatch)?;
    cursor.advance();
    Ok(vec![c.to_string()])
}

pub(crate) fn parse_any_except(excluded: char, cursor: &mut Cursor) -> ParseResult {
    match cursor.peek() {
        Ok(c) if c != excluded => {
            cursor.advance();
            Ok(vec![c.to_string()])
        }
        _ => Err(NoMatch),
    }
}
