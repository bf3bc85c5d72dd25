use crate::error::NoMatch;

/// Ordered matched pieces of text, in match order
pub type Fragments = Vec<String>;

/// What a single parse step yields
pub type ParseResult = Result<Fragments, NoMatch>;

/// Result of running a parser over a whole input with [`Parser::run`](crate::Parser::run)
///
/// The remainder reflects the cursor's final position and is available whether
/// or not the parse succeeded. On failure it is always the full input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    result: ParseResult,
    remainder: String,
}

impl Outcome {
    pub fn new(result: ParseResult, remainder: String) -> Self {
        Outcome { result, remainder }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Matched fragments, or `None` if the parse failed
    pub fn fragments(&self) -> Option<&[String]> {
        self.result.as_deref().ok()
    }

    pub fn remainder(&self) -> &str {
        &self.remainder
    }

    pub fn result(&self) -> &ParseResult {
        &self.result
    }

    pub fn into_result(self) -> ParseResult {
        self.result
    }

    pub fn into_parts(self) -> (ParseResult, String) {
        (self.result, self.remainder)
    }
}
