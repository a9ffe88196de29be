use itertools::Itertools;
use log::{debug, trace, warn};

use crate::token::Token;

/// Kinds of block which stay open across lines.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Container {
    Div,
}

/// Turns source lines into tokens, one line at a time.
///
/// Lines which aren't recognized are skipped without complaint, as are closing braces with no
/// open container to close.
#[derive(Debug, Default)]
pub struct Tokenizer {
    /// The containers which have been opened but not yet closed, innermost last.
    open: Vec<Container>,
}

impl Tokenizer {
    pub fn new() -> Tokenizer {
        Default::default()
    }

    /// Returns the number of containers currently open.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Tokenizes a single line.
    pub fn line(&mut self, line: &str) -> Option<Token> {
        let content = quoted(line).unwrap_or("").to_owned();
        match tag_name(line).as_deref() {
            Some("h1") => Some(Token::Heading(content)),
            Some("p") => Some(Token::Paragraph(content)),
            Some("div") => {
                self.open.push(Container::Div);
                Some(Token::ContainerOpen(content))
            }
            // an opener is never also a close, so the brace check only happens here
            _ if line.contains('}') => match self.open.pop() {
                Some(Container::Div) => Some(Token::ContainerClose),
                None => {
                    trace!("ignoring unmatched close: {:?}", line);
                    None
                }
            },
            _ => {
                if !line.trim().is_empty() {
                    trace!("skipping line: {:?}", line);
                }
                None
            }
        }
    }
}

/// Tokenizes every line in order.
pub fn tokenize<I>(lines: I) -> Vec<Token>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut tokenizer = Tokenizer::new();
    let tokens = lines
        .into_iter()
        .filter_map(|line| tokenizer.line(line.as_ref()))
        .collect::<Vec<_>>();
    debug!("{} tokens: {}", tokens.len(), tokens.iter().format(", "));
    if tokenizer.depth() > 0 {
        warn!("{} container(s) left open at end of input", tokenizer.depth());
    }
    tokens
}

/// Returns the text before the first `(`, with all whitespace removed.
fn tag_name(line: &str) -> Option<String> {
    line.find('(')
        .map(|idx| line[..idx].chars().filter(|c| !c.is_whitespace()).collect())
}

/// Returns the text between the first pair of double quotes.
fn quoted(line: &str) -> Option<&str> {
    let start = line.find('"')? + 1;
    let len = line[start..].find('"')?;
    Some(&line[start..start + len])
}
