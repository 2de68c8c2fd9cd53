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

//! Converts a source byte buffer into a flat token stream.
//!
//! Trivia — comments and newlines — are never discarded here; they are
//! surfaced as ordinary tokens (`Token::Comment`, `Token::Newline`) so the
//! parser can reattach them to the statement stream as `COMMENT`/
//! `EMPTY_LINE` nodes. Indentation itself carries no meaning and is
//! skipped like any other whitespace.

use grug_errors::{LexError, Result};
use grug_span::{SourceMap, Span};

use super::token::{SpannedToken, Token};

/// Tokenizes a complete `.grug` source file.
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>> {
    let map = SourceMap::new(source);
    let bytes = source.as_bytes();
    let len = bytes.len();
    let mut tokens = Vec::new();
    let mut idx = 0usize;

    while idx < len {
        let start = idx as u32;
        let c = source[idx..].chars().next().expect("idx is a char boundary");

        match c {
            '\n' => {
                idx += 1;
                tokens.push(spanned(Token::Newline, start, idx as u32));
            }
            ' ' | '\t' | '\r' => {
                idx += 1;
            }
            '#' => {
                idx += 1;
                let text_start = idx;
                while idx < len && bytes[idx] != b'\n' {
                    idx += 1;
                }
                let text = source[text_start..idx].to_string();
                tokens.push(spanned(Token::Comment(text), start, idx as u32));
            }
            '"' => {
                idx += 1;
                let text_start = idx;
                loop {
                    if idx >= len || bytes[idx] == b'\n' {
                        return Err(LexError::UnterminatedString { position: map.position(start) }.into());
                    }
                    if bytes[idx] == b'"' {
                        break;
                    }
                    idx += 1;
                }
                let text = source[text_start..idx].to_string();
                idx += 1; // closing quote
                tokens.push(spanned(Token::Str(text), start, idx as u32));
            }
            c if c.is_ascii_digit() => {
                let number_start = idx;
                while idx < len && bytes[idx].is_ascii_digit() {
                    idx += 1;
                }
                let mut is_float = false;
                if idx < len && bytes[idx] == b'.' && idx + 1 < len && bytes[idx + 1].is_ascii_digit() {
                    is_float = true;
                    idx += 1;
                    while idx < len && bytes[idx].is_ascii_digit() {
                        idx += 1;
                    }
                }
                let text = source[number_start..idx].to_string();
                let token = if is_float { Token::Float(text) } else { Token::Integer(text) };
                tokens.push(spanned(token, start, idx as u32));
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let word_start = idx;
                while idx < len && (bytes[idx].is_ascii_alphanumeric() || bytes[idx] == b'_') {
                    idx += 1;
                }
                let word = &source[word_start..idx];
                let token = Token::keyword_to_token(word).unwrap_or_else(|| Token::Ident(word.to_string()));
                tokens.push(spanned(token, start, idx as u32));
            }
            '(' => tokens.push(single(&mut idx, Token::LeftParen, start)),
            ')' => tokens.push(single(&mut idx, Token::RightParen, start)),
            '{' => tokens.push(single(&mut idx, Token::LeftBrace, start)),
            '}' => tokens.push(single(&mut idx, Token::RightBrace, start)),
            ':' => tokens.push(single(&mut idx, Token::Colon, start)),
            ',' => tokens.push(single(&mut idx, Token::Comma, start)),
            '+' => tokens.push(single(&mut idx, Token::Plus, start)),
            '*' => tokens.push(single(&mut idx, Token::Star, start)),
            '/' => tokens.push(single(&mut idx, Token::Slash, start)),
            '%' => tokens.push(single(&mut idx, Token::Percent, start)),
            '-' => tokens.push(single(&mut idx, Token::Minus, start)),
            '=' => {
                if peek_at(source, idx + 1) == Some('=') {
                    idx += 2;
                    tokens.push(spanned(Token::EqualEqual, start, idx as u32));
                } else {
                    idx += 1;
                    tokens.push(spanned(Token::Equal, start, idx as u32));
                }
            }
            '!' => {
                if peek_at(source, idx + 1) == Some('=') {
                    idx += 2;
                    tokens.push(spanned(Token::NotEqual, start, idx as u32));
                } else {
                    return Err(LexError::UnexpectedCharacter { character: c, position: map.position(start) }.into());
                }
            }
            '>' => {
                if peek_at(source, idx + 1) == Some('=') {
                    idx += 2;
                    tokens.push(spanned(Token::GreaterEqual, start, idx as u32));
                } else {
                    idx += 1;
                    tokens.push(spanned(Token::Greater, start, idx as u32));
                }
            }
            '<' => {
                if peek_at(source, idx + 1) == Some('=') {
                    idx += 2;
                    tokens.push(spanned(Token::LessEqual, start, idx as u32));
                } else {
                    idx += 1;
                    tokens.push(spanned(Token::Less, start, idx as u32));
                }
            }
            other => {
                return Err(LexError::UnexpectedCharacter { character: other, position: map.position(start) }.into());
            }
        }
    }

    tokens.push(spanned(Token::Eof, len as u32, len as u32));
    Ok(tokens)
}

fn peek_at(source: &str, idx: usize) -> Option<char> {
    source.get(idx..)?.chars().next()
}

fn spanned(token: Token, lo: u32, hi: u32) -> SpannedToken {
    SpannedToken { token, span: Span::new(lo, hi) }
}

fn single(idx: &mut usize, token: Token, start: u32) -> SpannedToken {
    *idx += 1;
    spanned(token, start, start + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[SpannedToken]) -> Vec<Token> {
        tokens.iter().map(|t| t.token.clone()).collect()
    }

    #[test]
    fn empty_function_header() {
        let tokens = tokenize("on_init() {\n}\n").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                Token::Ident("on_init".to_string()),
                Token::LeftParen,
                Token::RightParen,
                Token::LeftBrace,
                Token::Newline,
                Token::RightBrace,
                Token::Newline,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn integer_vs_float() {
        let tokens = tokenize("1 1.5\n").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                Token::Integer("1".to_string()),
                Token::Float("1.5".to_string()),
                Token::Newline,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn comment_text_excludes_hash_but_keeps_leading_space() {
        let tokens = tokenize("# hello\n").unwrap();
        assert_eq!(tokens[0].token, Token::Comment(" hello".to_string()));
    }

    #[test]
    fn keywords_are_not_identifiers() {
        let tokens = tokenize("if else while return break continue true false and or not\n").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                Token::If,
                Token::Else,
                Token::While,
                Token::Return,
                Token::Break,
                Token::Continue,
                Token::True,
                Token::False,
                Token::And,
                Token::Or,
                Token::Not,
                Token::Newline,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn two_char_operators_are_not_split() {
        let tokens = tokenize("== != >= <=\n").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                Token::EqualEqual,
                Token::NotEqual,
                Token::GreaterEqual,
                Token::LessEqual,
                Token::Newline,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn unterminated_string_is_an_error() {
        let err = tokenize("\"abc\n").unwrap_err();
        assert!(matches!(err, grug_errors::Error::Lexical(LexError::UnterminatedString { .. })));
    }

    #[test]
    fn unexpected_character_is_an_error() {
        let err = tokenize("@\n").unwrap_err();
        assert!(matches!(err, grug_errors::Error::Lexical(LexError::UnexpectedCharacter { character: '@', .. })));
    }

    #[test]
    fn bare_exclamation_point_is_an_error() {
        let err = tokenize("!\n").unwrap_err();
        assert!(matches!(err, grug_errors::Error::Lexical(LexError::UnexpectedCharacter { character: '!', .. })));
    }
}
