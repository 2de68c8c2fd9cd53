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

//! Recursive-descent parser over the token stream produced by
//! [`crate::tokenizer`].

mod context;
mod expression;
mod file;
mod statement;

pub use context::ParserContext;

use grug_ast::File;
use grug_errors::Result;
use grug_span::SourceMap;

/// Parses a complete `.grug` source file into its AST.
pub fn parse(source: &str) -> Result<File> {
    let tokens = crate::tokenizer::tokenize(source)?;
    let map = SourceMap::new(source);
    let mut context = ParserContext::new(tokens, map);
    context.parse_file()
}
