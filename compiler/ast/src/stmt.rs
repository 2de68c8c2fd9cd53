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

//! The statement sum type (function-body level).

use serde::{Deserialize, Serialize};

use crate::expr::{CallExpression, Expression};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableStatement {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub variable_type: Option<String>,
    pub assignment: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfStatement {
    pub condition: Expression,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub if_statements: Vec<Statement>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub else_statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnStatement {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub expr: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhileStatement {
    pub condition: Expression,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentStatement {
    pub comment: String,
}

/// Every shape a body statement can take.
///
/// `IfStatement::else_statements` containing exactly one `IF_STATEMENT`
/// is the encoding of an `else if`; nothing in the type system enforces
/// this (it is a schema-level invariant checked on apply), since the list
/// of statements is intentionally just `Vec<Statement>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Statement {
    #[serde(rename = "VARIABLE_STATEMENT")]
    Variable(VariableStatement),
    #[serde(rename = "CALL_STATEMENT")]
    Call(CallExpression),
    #[serde(rename = "IF_STATEMENT")]
    If(IfStatement),
    #[serde(rename = "RETURN_STATEMENT")]
    Return(ReturnStatement),
    #[serde(rename = "WHILE_STATEMENT")]
    While(WhileStatement),
    #[serde(rename = "BREAK_STATEMENT")]
    Break,
    #[serde(rename = "CONTINUE_STATEMENT")]
    Continue,
    #[serde(rename = "COMMENT_STATEMENT")]
    Comment(CommentStatement),
    #[serde(rename = "EMPTY_LINE_STATEMENT")]
    EmptyLine,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_statement_inlines_call_expr_fields() {
        let stmt = Statement::Call(CallExpression { name: "foo".to_string(), arguments: vec![] });
        let json = serde_json::to_string(&stmt).unwrap();
        assert_eq!(json, r#"{"type":"CALL_STATEMENT","name":"foo"}"#);
    }

    #[test]
    fn while_statement_keeps_statements_even_when_empty() {
        let stmt = Statement::While(WhileStatement { condition: Expression::True, statements: vec![] });
        let json = serde_json::to_string(&stmt).unwrap();
        assert_eq!(json, r#"{"type":"WHILE_STATEMENT","condition":{"type":"TRUE_EXPR"},"statements":[]}"#);
    }

    #[test]
    fn if_statement_elides_empty_branches() {
        let stmt = Statement::If(IfStatement {
            condition: Expression::True,
            if_statements: vec![],
            else_statements: vec![],
        });
        let json = serde_json::to_string(&stmt).unwrap();
        assert_eq!(json, r#"{"type":"IF_STATEMENT","condition":{"type":"TRUE_EXPR"}}"#);
    }
}
