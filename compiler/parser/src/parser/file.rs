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

//! Top-level (global) statement grammar.

use grug_ast::{CommentStatement, File, GlobalStatement, GlobalVariable, HelperFn, OnFn};
use grug_errors::Result;

use super::ParserContext;
use crate::tokenizer::Token;

/// Function names beginning with this prefix are event handlers
/// (`GLOBAL_ON_FN`) and may not declare a return type; every other named
/// function is a helper (`GLOBAL_HELPER_FN`).
const ON_FN_PREFIX: &str = "on_";

impl ParserContext<'_> {
    pub(crate) fn parse_file(&mut self) -> Result<File> {
        let mut globals = Vec::new();
        while !self.at_eof() {
            if self.eat(&Token::Newline) {
                globals.push(GlobalStatement::EmptyLine);
                continue;
            }
            if let Token::Comment(text) = self.token().clone() {
                self.bump();
                self.expect_line_end()?;
                globals.push(GlobalStatement::Comment(CommentStatement { comment: text }));
                continue;
            }
            globals.push(self.parse_global_statement()?);
        }
        Ok(globals)
    }

    fn parse_global_statement(&mut self) -> Result<GlobalStatement> {
        let name = self.expect_ident()?;

        if self.check(&Token::LeftParen) {
            return if name.starts_with(ON_FN_PREFIX) {
                self.parse_on_fn(name).map(GlobalStatement::OnFn)
            } else {
                self.parse_helper_fn(name).map(GlobalStatement::HelperFn)
            };
        }

        self.expect(Token::Colon)?;
        let variable_type = self.expect_ident()?;
        self.expect(Token::Equal)?;
        let assignment = self.parse_expression()?;
        self.expect_line_end()?;
        Ok(GlobalStatement::Variable(GlobalVariable { name, variable_type, assignment }))
    }

    fn parse_on_fn(&mut self, name: String) -> Result<OnFn> {
        let arguments = self.parse_parameters()?;
        self.expect_brace()?;
        self.expect_line_end()?;
        let statements = self.parse_body()?;
        self.expect(Token::RightBrace)?;
        self.expect_line_end()?;
        Ok(OnFn { name, arguments, statements })
    }

    fn parse_helper_fn(&mut self, name: String) -> Result<HelperFn> {
        let arguments = self.parse_parameters()?;
        let return_type = if self.check(&Token::LeftBrace) { None } else { Some(self.expect_ident()?) };
        self.expect_brace()?;
        self.expect_line_end()?;
        let statements = self.parse_body()?;
        self.expect(Token::RightBrace)?;
        self.expect_line_end()?;
        Ok(HelperFn { name, arguments, return_type, statements })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse;

    #[test]
    fn empty_on_fn_has_no_arguments_or_statements() {
        let file = parse("on_init() {\n}\n").unwrap();
        assert_eq!(file.len(), 1);
        match &file[0] {
            grug_ast::GlobalStatement::OnFn(f) => {
                assert_eq!(f.name, "on_init");
                assert!(f.arguments.is_empty());
                assert!(f.statements.is_empty());
            }
            other => panic!("expected an on-fn, got {other:?}"),
        }
    }

    #[test]
    fn helper_fn_with_return_type_and_parameters() {
        let file = parse("square(x: i32) i32 {\n    return x * x\n}\n").unwrap();
        match &file[0] {
            grug_ast::GlobalStatement::HelperFn(f) => {
                assert_eq!(f.name, "square");
                assert_eq!(f.arguments, vec![grug_ast::Argument { name: "x".to_string(), type_name: "i32".to_string() }]);
                assert_eq!(f.return_type.as_deref(), Some("i32"));
                assert_eq!(f.statements.len(), 1);
            }
            other => panic!("expected a helper fn, got {other:?}"),
        }
    }

    #[test]
    fn global_variable_requires_a_type() {
        let file = parse("counter: i32 = 0\n").unwrap();
        match &file[0] {
            grug_ast::GlobalStatement::Variable(v) => {
                assert_eq!(v.name, "counter");
                assert_eq!(v.variable_type, "i32");
            }
            other => panic!("expected a global variable, got {other:?}"),
        }
    }

    #[test]
    fn global_comments_and_blank_lines_round_trip_as_globals() {
        let file = parse("# header\n\ncounter: i32 = 0\n").unwrap();
        assert_eq!(
            file,
            vec![
                grug_ast::GlobalStatement::Comment(grug_ast::CommentStatement { comment: " header".to_string() }),
                grug_ast::GlobalStatement::EmptyLine,
                grug_ast::GlobalStatement::Variable(grug_ast::GlobalVariable {
                    name: "counter".to_string(),
                    variable_type: "i32".to_string(),
                    assignment: grug_ast::Expression::I32(grug_ast::NumberLiteral { value: "0".to_string() }),
                }),
            ]
        );
    }
}
