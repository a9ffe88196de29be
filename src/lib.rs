//! A transpiler from the line-oriented `.htmlf` markup to HTML.
//!
//! Source lines are first turned into [`Token`]s by [`parse::tokenize`], then rendered by
//! [`Document::write`] inside a fixed HTML shell.

extern crate failure;
#[macro_use]
extern crate failure_derive;

pub mod document;
pub mod errors;
pub mod input;
pub mod parse;
pub mod token;

pub use crate::document::{Document, Shell};
pub use crate::errors::{Error, ErrorKind, Result};
pub use crate::token::Token;

/// Input files must end with this.
pub const INPUT_EXTENSION: &str = ".htmlf";
/// Output is always written here, relative to the working directory.
pub const OUTPUT_FILE: &str = "index.html";
