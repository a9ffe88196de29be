use std::io::{Result as IoResult, Write};

use failure::ResultExt;

use crate::errors::{ErrorKind, Result as EResult};
use crate::token::Token;

/// The fixed preamble and epilogue around the rendered body.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Shell {
    /// The contents of the `<title>` element.
    pub title: String,
    /// The global `lang` attribute for the document.
    pub lang: String,
}

impl Default for Shell {
    fn default() -> Shell {
        Shell {
            title: "Document".into(),
            lang: "en".into(),
        }
    }
}

impl Shell {
    fn write_head(&self, w: &mut impl Write) -> IoResult<()> {
        writeln!(w, "<!DOCTYPE html>")?;
        write!(w, "<html lang=\"")?;
        htmlescape::encode_attribute_w(&self.lang, w)?;
        writeln!(w, "\">")?;
        writeln!(w, "<head>")?;
        writeln!(w, "<meta charset=\"UTF-8\">")?;
        writeln!(
            w,
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        write!(w, "<title>")?;
        htmlescape::encode_minimal_w(&self.title, w)?;
        writeln!(w, "</title>")?;
        writeln!(w, "</head>")?;
        writeln!(w, "<body>")?;
        Ok(())
    }

    fn write_tail(&self, w: &mut impl Write) -> IoResult<()> {
        writeln!(w, "</body>")?;
        writeln!(w, "</html>")?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Document {
    /// The tokens making up the body, in output order.
    tokens: Vec<Token>,
    shell: Shell,
}

impl Document {
    pub fn new(tokens: Vec<Token>) -> Document {
        Document {
            tokens,
            ..Default::default()
        }
    }

    /// Replaces the default shell. The binary always uses the default; this is for library
    /// callers who want a different title or language.
    pub fn with_shell(self, shell: Shell) -> Document {
        Document { shell, ..self }
    }

    /// Writes the whole document, body wrapped in the shell.
    pub fn write(&self, w: &mut impl Write) -> EResult<()> {
        self.shell.write_head(w).context(ErrorKind::WriteIoHead)?;
        self.write_body(w).context(ErrorKind::WriteIo)?;
        self.shell.write_tail(w).context(ErrorKind::WriteIoTail)?;
        Ok(())
    }

    /// Writes one line per token. Content is written as-is, and open containers are left open.
    pub fn write_body(&self, w: &mut impl Write) -> IoResult<()> {
        for token in &self.tokens {
            match token {
                Token::Heading(c) => writeln!(w, "<h1>{}</h1>", c)?,
                Token::Paragraph(c) => writeln!(w, "<p>{}</p>", c)?,
                Token::ContainerOpen(c) => writeln!(w, "<div>{}", c)?,
                Token::ContainerClose => writeln!(w, "</div>")?,
            }
        }
        Ok(())
    }
}
