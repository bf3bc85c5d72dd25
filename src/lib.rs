//! # TextComb - Character Parser Combinators
//!
//! Small building blocks (match a character, sequence, alternative,
//! repetition, grouping) that assemble into recursive-descent parsers over a
//! string, plus a `*bold*` to HTML converter built on top of them.
//!
//! A [`Parser`] is an immutable tree of combinators. [`Parser::run`] walks the
//! tree over one input with a single [`Cursor`] and returns an [`Outcome`]:
//! the matched fragments (or [`NoMatch`]) together with the unconsumed rest.
//!
//! - **No side effects on failure**: a parser that fails leaves the cursor
//!   where it found it, so alternatives and repetitions compose safely
//! - **Fragments**: primitives yield one fragment, sequences concatenate
//!   fragment lists, [`merge`](merge()) collapses a match into one fragment
//! - **No runaway repetition**: [`repeat_while_successful`](repeat_while_successful()) needs at least one
//!   match and never loops on a match that consumes nothing
//!
//! ```
//! use textcomb::{and, literal};
//!
//! let outcome = and(literal('a'), literal('b')).run("abcd");
//! assert_eq!(outcome.fragments(), Some(&["a".to_string(), "b".to_string()][..]));
//! assert_eq!(outcome.remainder(), "cd");
//! ```

pub mod and;
pub mod chain;
pub mod cursor;
pub mod error;
pub mod fail;
pub mod html;
pub mod literal;
pub mod merge;
pub mod or;
pub mod outcome;
pub mod parser;
pub mod repeat;
pub mod repeat_while_successful;

pub use and::{and, sequence};
pub use chain::chain;
pub use cursor::{Checkpoint, Cursor};
pub use error::{NoMatch, TextcombError};
pub use fail::fail;
pub use literal::{any, any_except, literal};
pub use merge::{merge, merge_all};
pub use or::or;
pub use outcome::{Fragments, Outcome, ParseResult};
pub use parser::{Continuation, Parser};
pub use repeat::repeat;
pub use repeat_while_successful::repeat_while_successful;
