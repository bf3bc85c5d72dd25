//! `*bold*` markers to HTML
//!
//! A small consumer of the combinators: text between a pair of `*` becomes
//! `<strong>..</strong>`, everything else passes through untouched. A `*`
//! without a closing partner stays a literal `*`.

use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::{and, any, any_except, literal, merge, or, repeat_while_successful};

const DELIMITER: char = '*';

fn text() -> Parser {
    repeat_while_successful(any_except(DELIMITER))
}

fn bold() -> Parser {
    merge(and(literal(DELIMITER), and(text(), literal(DELIMITER))))
}

fn document() -> Parser {
    repeat_while_successful(or(bold(), or(merge(text()), any())))
}

/// Plain text followed by one delimited run, e.g. `ABBB*ABC*`
///
/// Yields the plain characters one fragment each, then the delimited run
/// (delimiters included) as a single fragment.
pub fn delimited_parser() -> Parser {
    and(text(), bold())
}

/// Splits text into plain runs and delimited runs, one fragment each
///
/// Each step takes either a delimited run, or a plain run together with
/// the delimited run after it. Whatever cannot be split that way (plain
/// text with no closing run, an unpaired `*`) ends up in one trailing
/// fragment.
pub fn segment_parser() -> Parser {
    let pair = and(merge(text()), bold());
    let rest = merge(repeat_while_successful(any()));
    repeat_while_successful(or(bold(), or(pair, rest)))
}

/// Run [`segment_parser`] over `input`
pub fn split(input: &str) -> Outcome {
    segment_parser().run(input)
}

fn is_bold(fragment: &str) -> bool {
    fragment.len() >= 2 && fragment.starts_with(DELIMITER) && fragment.ends_with(DELIMITER)
}

/// Convert `*bold*` markers in `input` to `<strong>` tags
pub fn bold_to_html(input: &str) -> String {
    let outcome = document().run(input);
    let Some(fragments) = outcome.fragments() else {
        // Only empty input fails the document grammar
        return input.to_string();
    };

    let mut output = String::with_capacity(input.len());
    for fragment in fragments {
        if is_bold(fragment) {
            output.push_str("<strong>");
            output.push_str(&fragment[1..fragment.len() - 1]);
            output.push_str("</strong>");
        } else {
            output.push_str(fragment);
        }
    }
    output
}

/// Holds a source text and renders it as HTML
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlWriter {
    input: String,
}

impl HtmlWriter {
    pub fn new(input: impl Into<String>) -> Self {
        HtmlWriter {
            input: input.into(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> String {
        bold_to_html(&self.input)
    }
}
