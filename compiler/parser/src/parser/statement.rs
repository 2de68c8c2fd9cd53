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

//! Function-body statement grammar: declarations, control flow, and the
//! trivia (comments, blank lines) interleaved between them.

use grug_ast::{
    Argument, CallExpression, CommentStatement, IfStatement, ReturnStatement, Statement, VariableStatement,
    WhileStatement,
};
use grug_errors::{Result, SyntaxError};

use super::ParserContext;
use crate::tokenizer::Token;

impl ParserContext<'_> {
    /// Parses statements until the cursor sits on the closing `}`, which it
    /// leaves unconsumed for the caller.
    pub(crate) fn parse_body(&mut self) -> Result<Vec<Statement>> {
        let mut statements = Vec::new();
        while !self.check(&Token::RightBrace) {
            if self.eat(&Token::Newline) {
                statements.push(Statement::EmptyLine);
                continue;
            }
            if let Token::Comment(text) = self.token().clone() {
                self.bump();
                self.expect_line_end()?;
                statements.push(Statement::Comment(CommentStatement { comment: text }));
                continue;
            }
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    fn parse_statement(&mut self) -> Result<Statement> {
        match self.token() {
            Token::If => Ok(Statement::If(self.parse_if_statement()?)),
            Token::While => Ok(Statement::While(self.parse_while_statement()?)),
            Token::Return => Ok(Statement::Return(self.parse_return_statement()?)),
            Token::Break => {
                self.bump();
                self.expect_line_end()?;
                Ok(Statement::Break)
            }
            Token::Continue => {
                self.bump();
                self.expect_line_end()?;
                Ok(Statement::Continue)
            }
            Token::Ident(_) => self.parse_variable_or_call_statement(),
            _ => Err(SyntaxError::UnexpectedToken {
                expected: "a statement".to_string(),
                found: self.token().to_string(),
                position: self.position(),
            }
            .into()),
        }
    }

    fn parse_variable_or_call_statement(&mut self) -> Result<Statement> {
        let name = self.expect_ident()?;

        if self.check(&Token::LeftParen) {
            let arguments = self.parse_call_arguments()?;
            self.expect_line_end()?;
            return Ok(Statement::Call(CallExpression { name, arguments }));
        }

        let variable_type = if self.eat(&Token::Colon) { Some(self.expect_ident()?) } else { None };
        self.expect(Token::Equal)?;
        let assignment = self.parse_expression()?;
        self.expect_line_end()?;
        Ok(Statement::Variable(VariableStatement { name, variable_type, assignment }))
    }

    /// Parses an `if`/`else`/`else if` chain. `else if` is represented by
    /// recursing into this same function with `cuddled = true`, since
    /// `} else if …` lives on a single source line: no newline separates
    /// the closing `}` of the prior branch from the `else` keyword.
    fn parse_if_statement(&mut self) -> Result<IfStatement> {
        self.expect(Token::If)?;
        let condition = self.parse_expression()?;
        self.expect_brace()?;
        self.expect_line_end()?;
        let if_statements = self.parse_body()?;
        self.expect(Token::RightBrace)?;

        if !self.eat(&Token::Else) {
            self.expect_line_end()?;
            return Ok(IfStatement { condition, if_statements, else_statements: Vec::new() });
        }

        if self.check(&Token::If) {
            let nested = self.parse_if_statement()?;
            return Ok(IfStatement { condition, if_statements, else_statements: vec![Statement::If(nested)] });
        }

        self.expect_brace()?;
        self.expect_line_end()?;
        let else_statements = self.parse_body()?;
        self.expect(Token::RightBrace)?;
        self.expect_line_end()?;
        Ok(IfStatement { condition, if_statements, else_statements })
    }

    fn parse_while_statement(&mut self) -> Result<WhileStatement> {
        self.expect(Token::While)?;
        let condition = self.parse_expression()?;
        self.expect_brace()?;
        self.expect_line_end()?;
        let statements = self.parse_body()?;
        self.expect(Token::RightBrace)?;
        self.expect_line_end()?;
        Ok(WhileStatement { condition, statements })
    }

    fn parse_return_statement(&mut self) -> Result<ReturnStatement> {
        self.expect(Token::Return)?;
        if self.at_eof() || self.check(&Token::Newline) {
            self.expect_line_end()?;
            return Ok(ReturnStatement { expr: None });
        }
        let expr = Some(self.parse_expression()?);
        self.expect_line_end()?;
        Ok(ReturnStatement { expr })
    }

    /// Parses an ordered `(name: type, …)` parameter list. Assumes the
    /// cursor sits on the opening `(`.
    pub(crate) fn parse_parameters(&mut self) -> Result<Vec<Argument>> {
        self.expect(Token::LeftParen)?;
        let mut arguments = Vec::new();
        if !self.check(&Token::RightParen) {
            loop {
                let name = self.expect_ident()?;
                self.expect(Token::Colon)?;
                let type_name = self.expect_ident()?;
                arguments.push(Argument { name, type_name });
                if !self.eat(&Token::Comma) {
                    break;
                }
            }
        }
        self.expect(Token::RightParen)?;
        Ok(arguments)
    }
}

#[cfg(test)]
mod tests {
    use grug_ast::GlobalStatement;

    use crate::parser::parse;

    fn on_fn_body(source: &str) -> Vec<grug_ast::Statement> {
        let file = parse(source).unwrap();
        match &file[0] {
            GlobalStatement::OnFn(f) => f.statements.clone(),
            other => panic!("expected an on-fn, got {other:?}"),
        }
    }

    #[test]
    fn else_if_chain_nests_as_a_single_if_statement() {
        let body = on_fn_body("on_tick() {\n    if a() {\n    } else if b() {\n    } else {\n    }\n}\n");
        assert_eq!(body.len(), 1);
        match &body[0] {
            grug_ast::Statement::If(outer) => {
                assert_eq!(outer.else_statements.len(), 1);
                assert!(matches!(outer.else_statements[0], grug_ast::Statement::If(_)));
            }
            other => panic!("expected an if statement, got {other:?}"),
        }
    }

    #[test]
    fn blank_lines_become_empty_line_statements() {
        let body = on_fn_body("on_tick() {\n    break\n\n    continue\n}\n");
        assert_eq!(
            body,
            vec![grug_ast::Statement::Break, grug_ast::Statement::EmptyLine, grug_ast::Statement::Continue]
        );
    }

    #[test]
    fn interior_comment_becomes_a_comment_statement() {
        let body = on_fn_body("on_tick() {\n    # hello\n}\n");
        assert_eq!(
            body,
            vec![grug_ast::Statement::Comment(grug_ast::CommentStatement { comment: " hello".to_string() })]
        );
    }

    #[test]
    fn while_missing_opening_brace_is_reported() {
        let err = parse("on_tick() {\n    while true\n        break\n}\n").unwrap_err();
        assert!(matches!(
            err,
            grug_errors::Error::Syntax(grug_errors::SyntaxError::MissingOpeningBrace { .. })
        ));
    }

    #[test]
    fn garbage_after_a_statement_is_reported() {
        let err = parse("on_tick() {\n    break garbage\n}\n").unwrap_err();
        assert!(matches!(
            err,
            grug_errors::Error::Syntax(grug_errors::SyntaxError::TrailingGarbage { .. })
        ));
    }
}
