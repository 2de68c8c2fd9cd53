// Copyright (C) 2023-2026 The Grug Team.
// This file is part of the grug library.

// The grug library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The grug library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the grug library. If not, see <https://www.gnu.org/licenses/>.

//! Single-lookahead cursor over a pre-lexed token stream.

use grug_errors::{Result, SyntaxError};
use grug_span::{Position, SourceMap, Span};

use crate::tokenizer::{SpannedToken, Token};

/// Walks the flat [`SpannedToken`] stream produced by the tokenizer.
///
/// Holds no global state: one context is created per parse and threaded
/// through every `parse_*` call, per the per-operation-context design (no
/// singletons, no jump buffers).
pub struct ParserContext<'a> {
    tokens: Vec<SpannedToken>,
    pos: usize,
    map: SourceMap<'a>,
}

impl<'a> ParserContext<'a> {
    pub fn new(tokens: Vec<SpannedToken>, map: SourceMap<'a>) -> Self {
        debug_assert!(!tokens.is_empty(), "tokenizer always appends an Eof token");
        Self { tokens, pos: 0, map }
    }

    fn current(&self) -> &SpannedToken {
        &self.tokens[self.pos]
    }

    pub(crate) fn token(&self) -> &Token {
        &self.current().token
    }

    pub(crate) fn span(&self) -> Span {
        self.current().span
    }

    pub(crate) fn position(&self) -> Position {
        self.map.position(self.span().lo)
    }

    pub(crate) fn at_eof(&self) -> bool {
        matches!(self.token(), Token::Eof)
    }

    pub(crate) fn bump(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        self.token() == token
    }

    pub(crate) fn eat(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, token: Token) -> Result<()> {
        if self.eat(&token) {
            Ok(())
        } else {
            Err(SyntaxError::UnexpectedToken {
                expected: token.to_string(),
                found: self.token().to_string(),
                position: self.position(),
            }
            .into())
        }
    }

    /// Consumes the identifier under the cursor and returns its text, or
    /// errors with the position of the offending token.
    pub(crate) fn expect_ident(&mut self) -> Result<String> {
        if let Token::Ident(name) = self.token().clone() {
            self.bump();
            Ok(name)
        } else {
            Err(SyntaxError::UnexpectedToken {
                expected: "an identifier".to_string(),
                found: self.token().to_string(),
                position: self.position(),
            }
            .into())
        }
    }

    /// Consumes the `{` that opens an `if`/`else`/`while`/function body, or
    /// reports the dedicated "missing opening brace" syntax error rather
    /// than the generic unexpected-token one, since a block opener is
    /// common enough to deserve its own diagnostic.
    pub(crate) fn expect_brace(&mut self) -> Result<()> {
        if self.eat(&Token::LeftBrace) {
            Ok(())
        } else {
            Err(SyntaxError::MissingOpeningBrace { position: self.position() }.into())
        }
    }

    /// Consumes the single newline that terminates a statement or header
    /// line. Tolerates end-of-input in its place, since the very last
    /// construct in a file is not required to be followed by anything.
    /// Anything else still sitting on the line is trailing garbage rather
    /// than a simple token mismatch.
    pub(crate) fn expect_line_end(&mut self) -> Result<()> {
        if self.at_eof() || self.eat(&Token::Newline) {
            Ok(())
        } else {
            Err(SyntaxError::TrailingGarbage { position: self.position() }.into())
        }
    }
}
