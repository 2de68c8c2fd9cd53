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

//! The token alphabet produced by the lexer.

use std::fmt;

/// A single lexical token, with trivia (`Comment`, `Newline`) surfaced
/// explicitly rather than being discarded, so the parser can reattach it
/// to the statement stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    // Keywords
    If,
    Else,
    While,
    Return,
    Break,
    Continue,
    True,
    False,
    And,
    Or,
    Not,

    // Punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Colon,
    Equal,
    Comma,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    EqualEqual,
    NotEqual,
    GreaterEqual,
    Greater,
    LessEqual,
    Less,

    // Literals
    Ident(String),
    Str(String),
    Integer(String),
    Float(String),

    // Trivia
    Comment(String),
    Newline,

    Eof,
}

/// Keyword strings in the order they're tried against a scanned
/// identifier; `eat_identifier` falls through to `Token::Ident` if none
/// match.
pub const KEYWORD_TOKENS: &[(&str, Token)] = &[
    ("if", Token::If),
    ("else", Token::Else),
    ("while", Token::While),
    ("return", Token::Return),
    ("break", Token::Break),
    ("continue", Token::Continue),
    ("true", Token::True),
    ("false", Token::False),
    ("and", Token::And),
    ("or", Token::Or),
    ("not", Token::Not),
];

impl Token {
    pub fn keyword_to_token(word: &str) -> Option<Token> {
        KEYWORD_TOKENS.iter().find(|(kw, _)| *kw == word).map(|(_, tok)| tok.clone())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::If => write!(f, "if"),
            Self::Else => write!(f, "else"),
            Self::While => write!(f, "while"),
            Self::Return => write!(f, "return"),
            Self::Break => write!(f, "break"),
            Self::Continue => write!(f, "continue"),
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::Not => write!(f, "not"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::LeftBrace => write!(f, "{{"),
            Self::RightBrace => write!(f, "}}"),
            Self::Colon => write!(f, ":"),
            Self::Equal => write!(f, "="),
            Self::Comma => write!(f, ","),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::EqualEqual => write!(f, "=="),
            Self::NotEqual => write!(f, "!="),
            Self::GreaterEqual => write!(f, ">="),
            Self::Greater => write!(f, ">"),
            Self::LessEqual => write!(f, "<="),
            Self::Less => write!(f, "<"),
            Self::Ident(name) => write!(f, "{name}"),
            Self::Str(text) => write!(f, "\"{text}\""),
            Self::Integer(text) => write!(f, "{text}"),
            Self::Float(text) => write!(f, "{text}"),
            Self::Comment(text) => write!(f, "#{text}"),
            Self::Newline => write!(f, "<newline>"),
            Self::Eof => write!(f, "<eof>"),
        }
    }
}

/// A [`Token`] paired with the [`grug_span::Span`] of source it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: grug_span::Span,
}

impl fmt::Display for SpannedToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.token)
    }
}
