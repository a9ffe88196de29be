use std::fmt;
use std::io;
use std::result;

use failure::{Backtrace, Context, Fail};

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    inner: Context<ErrorKind>,
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.inner.get_context()
    }
}

impl Fail for Error {
    fn cause(&self) -> Option<&dyn Fail> {
        self.inner.cause()
    }

    fn backtrace(&self) -> Option<&Backtrace> {
        self.inner.backtrace()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Context::new(kind),
        }
    }
}

impl From<Context<ErrorKind>> for Error {
    fn from(inner: Context<ErrorKind>) -> Error {
        Error { inner }
    }
}

#[derive(Clone, Debug, Eq, Fail, PartialEq)]
pub enum ErrorKind {
    #[fail(display = "Input file must be a .htmlf file!")]
    Extension,
    #[fail(display = "Failed to open input file: {}", _0)]
    OpenInput(String),
    #[fail(display = "Failed to create/open output file: {}", _0)]
    CreateOutput(String),
    #[fail(display = "Invalid UTF-8 in line {}", _0)]
    Unicode(usize),
    #[fail(display = "An IO error occurred while reading line {}", _0)]
    Io(usize),
    #[fail(display = "An IO error occurred while writing the document head")]
    WriteIoHead,
    #[fail(display = "An IO error occurred while writing the document body")]
    WriteIo,
    #[fail(display = "An IO error occurred while writing the document tail")]
    WriteIoTail,
}

impl ErrorKind {
    pub fn from_io(err: &io::Error, line: usize) -> ErrorKind {
        match err.kind() {
            io::ErrorKind::InvalidData => ErrorKind::Unicode(line),
            _ => ErrorKind::Io(line),
        }
    }
}
