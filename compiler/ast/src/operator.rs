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

//! Unary, binary, and logical operator tokens.
//!
//! The JSON discriminant strings (`"PLUS_TOKEN"`, `"NOT_TOKEN"`, …) are the
//! tokenizer's own token-kind names; the dumper/applier pair relies on them
//! matching exactly, so the `serde(rename)` list here is load-bearing, not
//! cosmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An operator that applies to a single operand: `-x`, `not x`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperator {
    #[serde(rename = "MINUS_TOKEN")]
    Minus,
    #[serde(rename = "NOT_TOKEN")]
    Not,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Minus => write!(f, "-"),
            Self::Not => write!(f, "not "),
        }
    }
}

/// An arithmetic or comparison operator joining two expressions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    #[serde(rename = "PLUS_TOKEN")]
    Plus,
    #[serde(rename = "MINUS_TOKEN")]
    Minus,
    #[serde(rename = "MULTIPLICATION_TOKEN")]
    Multiplication,
    #[serde(rename = "DIVISION_TOKEN")]
    Division,
    #[serde(rename = "REMAINDER_TOKEN")]
    Remainder,
    #[serde(rename = "EQUALS_TOKEN")]
    Equals,
    #[serde(rename = "NOT_EQUALS_TOKEN")]
    NotEquals,
    #[serde(rename = "GREATER_OR_EQUAL_TOKEN")]
    GreaterOrEqual,
    #[serde(rename = "GREATER_TOKEN")]
    Greater,
    #[serde(rename = "LESS_OR_EQUAL_TOKEN")]
    LessOrEqual,
    #[serde(rename = "LESS_TOKEN")]
    Less,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiplication => "*",
            Self::Division => "/",
            Self::Remainder => "%",
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::GreaterOrEqual => ">=",
            Self::Greater => ">",
            Self::LessOrEqual => "<=",
            Self::Less => "<",
        };
        write!(f, "{symbol}")
    }
}

/// A short-circuiting boolean operator: `and`, `or`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOperator {
    #[serde(rename = "AND_TOKEN")]
    And,
    #[serde(rename = "OR_TOKEN")]
    Or,
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_operator_round_trips_through_json() {
        let op = BinaryOperator::GreaterOrEqual;
        let json = serde_json::to_string(&op).unwrap();
        assert_eq!(json, "\"GREATER_OR_EQUAL_TOKEN\"");
        let back: BinaryOperator = serde_json::from_str(&json).unwrap();
        assert_eq!(back, op);
    }

    #[test]
    fn unary_not_display_has_trailing_space() {
        assert_eq!(UnaryOperator::Not.to_string(), "not ");
        assert_eq!(UnaryOperator::Minus.to_string(), "-");
    }
}
