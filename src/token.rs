use std::fmt;

/// A single recognized directive.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token {
    /// `h1("...")`
    Heading(String),
    /// `p("...")`
    Paragraph(String),
    /// `div("...")`; stays open until a matching close.
    ContainerOpen(String),
    /// A line containing `}` while a container is open.
    ContainerClose,
}

impl Token {
    /// The quoted text carried by the token, which is empty for a close.
    pub fn content(&self) -> &str {
        match self {
            Token::Heading(c) | Token::Paragraph(c) | Token::ContainerOpen(c) => c,
            Token::ContainerClose => "",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tag = match self {
            Token::Heading(_) => "h1",
            Token::Paragraph(_) => "p",
            Token::ContainerOpen(_) => "div",
            Token::ContainerClose => return f.write_str("}"),
        };
        write!(f, "{}(\"{}\")", tag, self.content())
    }
}
