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

//! The expression sum type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::operator::{BinaryOperator, LogicalOperator, UnaryOperator};

/// A bare string payload, shared by `STRING_EXPR`, `RESOURCE_EXPR`,
/// `ENTITY_EXPR`, and `IDENTIFIER_EXPR` — all four carry exactly one
/// field, `"str"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub str: String,
}

/// The string-form payload of `I32_EXPR`/`F32_EXPR`. Neither is
/// numerically reparsed; the lexed text is stored and dumped verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLiteral {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub expr: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryExpression {
    pub left_expr: Box<Expression>,
    pub operator: BinaryOperator,
    pub right_expr: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalExpression {
    pub left_expr: Box<Expression>,
    pub operator: LogicalOperator,
    pub right_expr: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExpression {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParenthesizedExpression {
    pub expr: Box<Expression>,
}

/// Every shape an expression can take, tagged by its JSON `"type"` string.
///
/// The tag and each variant's own fields are produced by `#[serde(tag =
/// "type")]` directly from declaration order, which is how canonical field
/// ordering (§6 of the schema) falls out of the type definition instead of
/// being hand-maintained alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    #[serde(rename = "TRUE_EXPR")]
    True,
    #[serde(rename = "FALSE_EXPR")]
    False,
    #[serde(rename = "STRING_EXPR")]
    String(StringLiteral),
    #[serde(rename = "RESOURCE_EXPR")]
    Resource(StringLiteral),
    #[serde(rename = "ENTITY_EXPR")]
    Entity(StringLiteral),
    #[serde(rename = "IDENTIFIER_EXPR")]
    Identifier(StringLiteral),
    #[serde(rename = "I32_EXPR")]
    I32(NumberLiteral),
    #[serde(rename = "F32_EXPR")]
    F32(NumberLiteral),
    #[serde(rename = "UNARY_EXPR")]
    Unary(UnaryExpression),
    #[serde(rename = "BINARY_EXPR")]
    Binary(BinaryExpression),
    #[serde(rename = "LOGICAL_EXPR")]
    Logical(LogicalExpression),
    #[serde(rename = "CALL_EXPR")]
    Call(CallExpression),
    #[serde(rename = "PARENTHESIZED_EXPR")]
    Parenthesized(ParenthesizedExpression),
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::String(lit) => write!(f, "\"{}\"", lit.str),
            Self::Resource(lit) => write!(f, "\"{}\"", lit.str),
            Self::Entity(lit) => write!(f, "\"{}\"", lit.str),
            Self::Identifier(lit) => write!(f, "{}", lit.str),
            Self::I32(lit) => write!(f, "{}", lit.value),
            Self::F32(lit) => write!(f, "{}", lit.value),
            Self::Unary(u) => write!(f, "{}{}", u.operator, u.expr),
            Self::Binary(b) => write!(f, "{} {} {}", b.left_expr, b.operator, b.right_expr),
            Self::Logical(l) => write!(f, "{} {} {}", l.left_expr, l.operator, l.right_expr),
            Self::Call(c) => {
                write!(f, "{}(", c.name)?;
                for (i, arg) in c.arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
            Self::Parenthesized(p) => write!(f, "({})", p.expr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::BinaryOperator;

    #[test]
    fn true_expr_dumps_with_only_the_type_field() {
        let json = serde_json::to_string(&Expression::True).unwrap();
        assert_eq!(json, r#"{"type":"TRUE_EXPR"}"#);
    }

    #[test]
    fn call_expr_elides_empty_arguments() {
        let expr = Expression::Call(CallExpression { name: "foo".to_string(), arguments: vec![] });
        let json = serde_json::to_string(&expr).unwrap();
        assert_eq!(json, r#"{"type":"CALL_EXPR","name":"foo"}"#);
    }

    #[test]
    fn binary_expr_field_order_matches_schema() {
        let expr = Expression::Binary(BinaryExpression {
            left_expr: Box::new(Expression::I32(NumberLiteral { value: "1".to_string() })),
            operator: BinaryOperator::Plus,
            right_expr: Box::new(Expression::I32(NumberLiteral { value: "2".to_string() })),
        });
        let json = serde_json::to_string(&expr).unwrap();
        assert_eq!(
            json,
            r#"{"type":"BINARY_EXPR","left_expr":{"type":"I32_EXPR","value":"1"},"operator":"PLUS_TOKEN","right_expr":{"type":"I32_EXPR","value":"2"}}"#
        );
    }
}
