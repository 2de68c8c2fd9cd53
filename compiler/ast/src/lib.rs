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

//! The abstract syntax tree for the grug scripting language.
//!
//! Every type here derives `Serialize`/`Deserialize` with internally
//! tagged (`#[serde(tag = "type")]`) enums, so the canonical JSON field
//! order the applier depends on falls directly out of struct declaration
//! order rather than being maintained by hand in a second place.

pub mod argument;
pub mod expr;
pub mod global;
pub mod operator;
pub mod stmt;

pub use argument::Argument;
pub use expr::{
    BinaryExpression, CallExpression, Expression, LogicalExpression, NumberLiteral,
    ParenthesizedExpression, StringLiteral, UnaryExpression,
};
pub use global::{File, GlobalStatement, GlobalVariable, HelperFn, OnFn};
pub use operator::{BinaryOperator, LogicalOperator, UnaryOperator};
pub use stmt::{CommentStatement, IfStatement, ReturnStatement, Statement, VariableStatement, WhileStatement};
