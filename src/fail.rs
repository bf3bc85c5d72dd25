use crate::parser::Parser;

/// Parser that always fails without consuming input
///
/// Useful as the base case of a grammar assembled in a loop, e.g. folding
/// a list of alternatives with [`or`](crate::or()).
pub fn fail() -> Parser {
    Parser::Fail
}
