use std::fmt;

use grammar_core::{Coords, Location};
use serde::Serialize;

use crate::scanner::Scanner;

#[derive(Debug, Clone, Serialize, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    EndOfInput,
    Colon,
    Pipe,
    Semicolon,
    NonTerminal,
    Terminal,
    Error,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub location: Location,
    pub coords: Coords,
}

impl Token {
    /// Lexeme reported for the end of input, which has no text of its own.
    pub const EOF_LEXEME: &'static str = "<EOF>";

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} '{}'", self.coords, self.kind, self.lexeme)
    }
}

/// A scanner with exactly one pending token.
#[derive(Debug)]
pub struct Tokens<'src> {
    scanner: Scanner<'src>,
    lookahead: Token,
}

impl<'src> Tokens<'src> {
    pub fn new(mut scanner: Scanner<'src>) -> Self {
        let lookahead = scanner.next_token();
        Self { scanner, lookahead }
    }

    pub fn peek(&self) -> &Token {
        &self.lookahead
    }

    /// Hands out the lookahead and pulls the next one from the scanner.
    /// At the end of input the lookahead stays put.
    pub fn next_token(&mut self) -> Token {
        if self.lookahead.kind == TokenKind::EndOfInput {
            return self.lookahead.clone();
        }

        let next = self.scanner.next_token();
        std::mem::replace(&mut self.lookahead, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_advance() {
        let tokens = Tokens::new(Scanner::new("s : A ;"));
        assert_eq!(tokens.peek().kind(), TokenKind::NonTerminal);
        assert_eq!(tokens.peek().lexeme(), "s");
    }

    #[test]
    fn test_next_token_stays_at_end_of_input() {
        let mut tokens = Tokens::new(Scanner::new("s"));
        assert_eq!(tokens.next_token().lexeme(), "s");

        for _ in 0..3 {
            let token = tokens.next_token();
            assert_eq!(token.kind(), TokenKind::EndOfInput);
            assert_eq!(token.lexeme(), Token::EOF_LEXEME);
            assert_eq!(token.coords(), Coords::new(1, 2));
        }
        assert_eq!(tokens.peek().kind(), TokenKind::EndOfInput);
    }

    #[test]
    fn test_display_token() {
        let mut tokens = Tokens::new(Scanner::new("\n  rule"));
        assert_eq!(tokens.next_token().to_string(), "2:3 NonTerminal 'rule'");
        assert_eq!(tokens.next_token().to_string(), "2:7 EndOfInput '<EOF>'");
    }
}
