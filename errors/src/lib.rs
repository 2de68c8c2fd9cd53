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

//! The error taxonomy shared by every grug crate.
//!
//! Every fallible operation in the dump/apply pipeline returns a
//! [`Result<T, Error>`]; nothing panics on malformed source text or
//! untrusted JSON input.

use std::path::PathBuf;

use grug_span::Position;
use thiserror::Error;

/// An unrecognized byte, or a string literal missing its closing quote.
#[derive(Error, Debug)]
pub enum LexError {
    #[error("{position}: unexpected character '{character}'")]
    UnexpectedCharacter { character: char, position: Position },

    #[error("{position}: unterminated string literal")]
    UnterminatedString { position: Position },
}

/// A malformed token sequence encountered by the recursive-descent parser.
#[derive(Error, Debug)]
pub enum SyntaxError {
    #[error("{position}: expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String, position: Position },

    #[error("{position}: expected '{{' to open a block")]
    MissingOpeningBrace { position: Position },

    #[error("{position}: trailing input after a complete global statement")]
    TrailingGarbage { position: Position },

    #[error("unexpected end of input while parsing {context}")]
    UnexpectedEof { context: String },
}

/// A violation of the canonical JSON schema (§6), surfaced during apply.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("{path}: missing required field \"{field}\"")]
    MissingField { path: String, field: String },

    #[error("{path}: unexpected field \"{field}\"")]
    UnexpectedField { path: String, field: String },

    #[error("{path}: expected field \"{expected}\" at this position, found \"{found}\"")]
    WrongFieldOrder { path: String, expected: String, found: String },

    #[error("{path}: field \"{field}\" has the wrong type, expected {expected}")]
    WrongType { path: String, field: String, expected: String },

    #[error("{path}: field \"{field}\" must not be an empty string")]
    EmptyString { path: String, field: String },

    #[error("{path}: unknown discriminant \"{discriminant}\"")]
    UnknownDiscriminant { path: String, discriminant: String },

    #[error("{path}: \"{field}\" is present but empty, which is not a valid encoding")]
    EmptyArray { path: String, field: String },

    #[error("{path}: {kind} is a dump-only expression and cannot be applied")]
    UnsupportedExpression { path: String, kind: &'static str },

    #[error("{path}: expected a JSON object")]
    ExpectedObject { path: String },

    #[error("{path}: expected a JSON array")]
    ExpectedArray { path: String },
}

/// The umbrella error type returned by every public grug operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error while {action} {path}: {source}")]
    Io { action: &'static str, path: PathBuf, #[source] source: std::io::Error },

    #[error(transparent)]
    Lexical(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { action, path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
