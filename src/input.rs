use std::io::{BufRead, Lines};
use std::iter::Enumerate;

use failure::ResultExt;

use crate::errors::{ErrorKind, Result as EResult};

#[derive(Debug)]
pub struct Input<B> {
    lines: Enumerate<Lines<B>>,
}

impl<B> Input<B>
where
    B: BufRead,
{
    pub fn new(input: B) -> Input<B> {
        Input {
            lines: input.lines().enumerate(),
        }
    }

    /// Reads every remaining line of the input, without line terminators.
    ///
    /// Errors report the (1-based) number of the line that couldn't be read.
    pub fn read_lines(self) -> EResult<Vec<String>> {
        let mut buffer = Vec::new();
        for (line_number, line) in self.lines {
            let line = line.with_context(|e| ErrorKind::from_io(e, line_number + 1))?;
            buffer.push(line);
        }
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use std::io::BufReader;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lines() {
        let input_str = "h1(\"Title\")\r\np(\"Hello\")\n\n}\n".as_bytes();
        let input = Input::new(BufReader::new(input_str));
        assert_eq!(
            input.read_lines().unwrap(),
            vec!["h1(\"Title\")", "p(\"Hello\")", "", "}"]
        );
    }

    #[test]
    fn no_final_newline() {
        let input = Input::new("line 1\nline 2".as_bytes());
        assert_eq!(input.read_lines().unwrap(), vec!["line 1", "line 2"]);
    }

    #[test]
    fn empty() {
        let input = Input::new("".as_bytes());
        assert!(input.read_lines().unwrap().is_empty());
    }

    #[test]
    fn invalid_utf8() {
        let input_bytes: &[u8] = b"p(\"ok\")\np(\"\xff\")\n";
        let err = Input::new(input_bytes).read_lines().unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Unicode(2));
    }
}
