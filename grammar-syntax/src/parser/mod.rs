//! Recursive descent recognizer for grammar specifications:
//!
//! ```text
//! grammar            : EOF | ruleSet grammar ;
//! ruleSet            : NON_TERMINAL ':' rightHandSide restRightHandSides ;
//! restRightHandSides : ';' | '|' rightHandSide restRightHandSides ;
//! rightHandSide      : TERMINAL rightHandSide | NON_TERMINAL rightHandSide | ;
//! ```
//!
//! Every production is picked from the kind of the lookahead alone. The
//! right-recursive productions are written as loops.

use grammar_token::{Scanner, Token, TokenKind, Tokens};

use crate::error::{Error, Result};
use crate::symbol_table::SymbolTable;


/// Everything the recognizer counted on its way through a grammar.
#[derive(Debug, Clone)]
pub struct RecognizedGrammar {
    pub symbols: SymbolTable,
    pub non_terminals: usize,
    pub terminals: usize,
}

pub struct Recognizer<'src> {
    tokens: Tokens<'src>,
    symbols: SymbolTable,
    non_terminals: usize,
    terminals: usize,
}

impl<'src> Recognizer<'src> {
    pub fn new(content: &'src str) -> Self {
        let tokens = Tokens::new(Scanner::new(content));
        tracing::trace!(token = %tokens.peek(), "lookahead");

        // the start symbol is never named on a right-hand side, it counts as used
        let mut symbols = SymbolTable::new();
        symbols.mark_used(tokens.peek().lexeme());

        Self {
            tokens,
            symbols,
            non_terminals: 0,
            terminals: 0,
        }
    }

    pub fn recognize(mut self) -> Result<RecognizedGrammar> {
        self.grammar()?;

        tracing::debug!(
            rule_sets = self.symbols.definition_count(),
            non_terminals = self.non_terminals,
            terminals = self.terminals,
            "grammar recognized"
        );

        Ok(RecognizedGrammar {
            symbols: self.symbols,
            non_terminals: self.non_terminals,
            terminals: self.terminals,
        })
    }

    fn grammar(&mut self) -> Result<()> {
        while self.lookahead() != TokenKind::EndOfInput {
            self.rule_set()?;
        }

        self.expect(TokenKind::EndOfInput)?;
        Ok(())
    }

    fn rule_set(&mut self) -> Result<()> {
        if self.lookahead() != TokenKind::NonTerminal {
            return Err(self.syntax_error());
        }

        let token = self.tokens.peek();
        if let Err(first) = self.symbols.define(token.lexeme(), token.coords()) {
            return Err(Error::DuplicateDefinition {
                name: token.lexeme().to_string(),
                coords: token.coords(),
                first,
            });
        }

        self.expect(TokenKind::NonTerminal)?;
        self.non_terminals += 1;
        self.expect(TokenKind::Colon)?;
        self.right_hand_side();
        self.rest_right_hand_sides()
    }

    fn rest_right_hand_sides(&mut self) -> Result<()> {
        loop {
            match self.lookahead() {
                TokenKind::Semicolon => {
                    self.advance();
                    return Ok(());
                }
                TokenKind::Pipe => {
                    self.advance();
                    self.right_hand_side();
                }
                _ => return Err(self.syntax_error()),
            }
        }
    }

    fn right_hand_side(&mut self) {
        loop {
            match self.lookahead() {
                TokenKind::Terminal => self.terminals += 1,
                TokenKind::NonTerminal => {
                    self.non_terminals += 1;
                    self.symbols.mark_used(self.tokens.peek().lexeme());
                }
                // the empty alternative, whatever follows belongs to the caller
                _ => break,
            }

            self.advance();
        }
    }

    fn lookahead(&self) -> TokenKind {
        self.tokens.peek().kind()
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.lookahead() != kind {
            return Err(self.syntax_error());
        }

        Ok(self.advance())
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens.next_token();
        if token.kind() != TokenKind::EndOfInput {
            tracing::trace!(token = %self.tokens.peek(), "lookahead");
        }
        token
    }

    fn syntax_error(&self) -> Error {
        let token = self.tokens.peek();
        Error::Syntax {
            coords: token.coords(),
            lexeme: token.lexeme().to_string(),
        }
    }
}
