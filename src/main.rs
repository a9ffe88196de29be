//! Converts a `.htmlf` file into `index.html` in the current directory.
//!
//! Usage:
//!   htmlf `<input>.htmlf`

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::process;

use clap::error::ErrorKind as ClapErrorKind;
use clap::{Arg, Command};
use failure::{Fail, ResultExt};
use log::info;

use htmlf::errors::Result as EResult;
use htmlf::input::Input;
use htmlf::{parse, Document, ErrorKind, INPUT_EXTENSION, OUTPUT_FILE};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = Command::new("htmlf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts a .htmlf file into index.html")
        .arg(
            Arg::new("input")
                .help("Path to the .htmlf file")
                .required(true)
                .index(1),
        )
        .try_get_matches()
        .unwrap_or_else(|e| match e.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                process::exit(1);
            }
        });

    let path = matches
        .get_one::<String>("input")
        .map(String::as_str)
        .unwrap_or_default();
    if let Err(e) = run(path) {
        print_errors(e);
        process::exit(1);
    }
}

fn run(path: &str) -> EResult<()> {
    if !path.ends_with(INPUT_EXTENSION) {
        return Err(ErrorKind::Extension.into());
    }
    let input = File::open(path).context(ErrorKind::OpenInput(path.into()))?;
    let output = File::create(OUTPUT_FILE).context(ErrorKind::CreateOutput(OUTPUT_FILE.into()))?;

    let lines = Input::new(BufReader::new(input)).read_lines()?;
    info!("read {} lines from {}", lines.len(), path);
    let document = Document::new(parse::tokenize(lines));

    let mut w = BufWriter::new(output);
    document.write(&mut w)?;
    w.flush().context(ErrorKind::WriteIoTail)?;
    info!("wrote {}", OUTPUT_FILE);
    Ok(())
}

fn print_errors(e: impl Fail) {
    let fail: &dyn Fail = &e;
    for c in fail.iter_chain() {
        eprintln!("{}", c);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_path_is_an_extension_error() {
        let err = run("").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Extension);
    }

    #[test]
    fn short_path_is_an_extension_error() {
        let err = run("a").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Extension);
    }
}
