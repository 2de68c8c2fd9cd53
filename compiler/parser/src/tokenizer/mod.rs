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

//! Lexical analysis: source bytes in, a flat token stream out.

pub mod lexer;
pub mod token;

pub use lexer::tokenize;
pub use token::{SpannedToken, Token, KEYWORD_TOKENS};
