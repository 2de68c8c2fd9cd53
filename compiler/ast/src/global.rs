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

//! The global (top-level) statement sum type.

use serde::{Deserialize, Serialize};

use crate::argument::Argument;
use crate::expr::Expression;
use crate::stmt::{CommentStatement, Statement};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalVariable {
    pub name: String,
    pub variable_type: String,
    pub assignment: Expression,
}

/// An event handler: `on_tick(dt: f32) { … }`. Has no return type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnFn {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub arguments: Vec<Argument>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub statements: Vec<Statement>,
}

/// A user-defined function, optionally returning a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperFn {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub arguments: Vec<Argument>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub return_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub statements: Vec<Statement>,
}

/// Every shape a top-level construct can take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GlobalStatement {
    #[serde(rename = "GLOBAL_VARIABLE")]
    Variable(GlobalVariable),
    #[serde(rename = "GLOBAL_ON_FN")]
    OnFn(OnFn),
    #[serde(rename = "GLOBAL_HELPER_FN")]
    HelperFn(HelperFn),
    #[serde(rename = "GLOBAL_COMMENT")]
    Comment(CommentStatement),
    #[serde(rename = "GLOBAL_EMPTY_LINE")]
    EmptyLine,
}

/// The top-level shape of a dumped `.grug` file: an ordered list of
/// global statements.
pub type File = Vec<GlobalStatement>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_on_fn_elides_statements_field() {
        let global = GlobalStatement::OnFn(OnFn {
            name: "on_init".to_string(),
            arguments: vec![],
            statements: vec![],
        });
        let json = serde_json::to_string(&global).unwrap();
        assert_eq!(json, r#"{"type":"GLOBAL_ON_FN","name":"on_init"}"#);
    }

    #[test]
    fn helper_fn_elides_missing_return_type_and_empty_body() {
        let global = GlobalStatement::HelperFn(HelperFn {
            name: "square".to_string(),
            arguments: vec![Argument { name: "x".to_string(), type_name: "i32".to_string() }],
            return_type: None,
            statements: vec![],
        });
        let json = serde_json::to_string(&global).unwrap();
        assert_eq!(
            json,
            r#"{"type":"GLOBAL_HELPER_FN","name":"square","arguments":[{"name":"x","type":"i32"}]}"#
        );
    }
}
