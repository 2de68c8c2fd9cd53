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

//! Precedence-climbing expression parser.
//!
//! `logical_or` is the entry point; each tier below calls down to the next
//! tighter-binding tier before consuming its own operators, which is what
//! gives `1 + 2 * 3` the shape `BINARY(+, 1, BINARY(*, 2, 3))` rather than
//! the left-to-right reading.

use grug_ast::{
    BinaryExpression, BinaryOperator, CallExpression, Expression, LogicalExpression, LogicalOperator,
    NumberLiteral, ParenthesizedExpression, StringLiteral, UnaryExpression, UnaryOperator,
};
use grug_errors::{Result, SyntaxError};

use super::ParserContext;
use crate::tokenizer::Token;

impl ParserContext<'_> {
    pub(crate) fn parse_expression(&mut self) -> Result<Expression> {
        self.parse_logical_or()
    }

    fn parse_logical_or(&mut self) -> Result<Expression> {
        let mut left = self.parse_logical_and()?;
        while self.eat(&Token::Or) {
            let right = self.parse_logical_and()?;
            left = logical(left, LogicalOperator::Or, right);
        }
        Ok(left)
    }

    fn parse_logical_and(&mut self) -> Result<Expression> {
        let mut left = self.parse_equality()?;
        while self.eat(&Token::And) {
            let right = self.parse_equality()?;
            left = logical(left, LogicalOperator::And, right);
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expression> {
        let mut left = self.parse_comparison()?;
        loop {
            let operator = if self.eat(&Token::EqualEqual) {
                BinaryOperator::Equals
            } else if self.eat(&Token::NotEqual) {
                BinaryOperator::NotEquals
            } else {
                return Ok(left);
            };
            let right = self.parse_comparison()?;
            left = binary(left, operator, right);
        }
    }

    fn parse_comparison(&mut self) -> Result<Expression> {
        let mut left = self.parse_additive()?;
        loop {
            let operator = if self.eat(&Token::GreaterEqual) {
                BinaryOperator::GreaterOrEqual
            } else if self.eat(&Token::Greater) {
                BinaryOperator::Greater
            } else if self.eat(&Token::LessEqual) {
                BinaryOperator::LessOrEqual
            } else if self.eat(&Token::Less) {
                BinaryOperator::Less
            } else {
                return Ok(left);
            };
            let right = self.parse_additive()?;
            left = binary(left, operator, right);
        }
    }

    fn parse_additive(&mut self) -> Result<Expression> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let operator = if self.eat(&Token::Plus) {
                BinaryOperator::Plus
            } else if self.eat(&Token::Minus) {
                BinaryOperator::Minus
            } else {
                return Ok(left);
            };
            let right = self.parse_multiplicative()?;
            left = binary(left, operator, right);
        }
    }

    fn parse_multiplicative(&mut self) -> Result<Expression> {
        let mut left = self.parse_unary()?;
        loop {
            let operator = if self.eat(&Token::Star) {
                BinaryOperator::Multiplication
            } else if self.eat(&Token::Slash) {
                BinaryOperator::Division
            } else if self.eat(&Token::Percent) {
                BinaryOperator::Remainder
            } else {
                return Ok(left);
            };
            let right = self.parse_unary()?;
            left = binary(left, operator, right);
        }
    }

    fn parse_unary(&mut self) -> Result<Expression> {
        if self.eat(&Token::Minus) {
            let expr = self.parse_unary()?;
            return Ok(Expression::Unary(UnaryExpression { operator: UnaryOperator::Minus, expr: Box::new(expr) }));
        }
        if self.eat(&Token::Not) {
            let expr = self.parse_unary()?;
            return Ok(Expression::Unary(UnaryExpression { operator: UnaryOperator::Not, expr: Box::new(expr) }));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expression> {
        match self.token().clone() {
            Token::True => {
                self.bump();
                Ok(Expression::True)
            }
            Token::False => {
                self.bump();
                Ok(Expression::False)
            }
            Token::Str(text) => {
                self.bump();
                Ok(Expression::String(StringLiteral { str: text }))
            }
            Token::Integer(text) => {
                self.bump();
                Ok(Expression::I32(NumberLiteral { value: text }))
            }
            Token::Float(text) => {
                self.bump();
                Ok(Expression::F32(NumberLiteral { value: text }))
            }
            Token::Ident(name) => {
                self.bump();
                if self.check(&Token::LeftParen) {
                    let arguments = self.parse_call_arguments()?;
                    Ok(Expression::Call(CallExpression { name, arguments }))
                } else {
                    Ok(Expression::Identifier(StringLiteral { str: name }))
                }
            }
            Token::LeftParen => {
                self.bump();
                let inner = self.parse_expression()?;
                self.expect(Token::RightParen)?;
                Ok(Expression::Parenthesized(ParenthesizedExpression { expr: Box::new(inner) }))
            }
            _ => Err(SyntaxError::UnexpectedToken {
                expected: "an expression".to_string(),
                found: self.token().to_string(),
                position: self.position(),
            }
            .into()),
        }
    }

    /// Parses a parenthesized, comma-separated expression list. Assumes
    /// the cursor sits on the opening `(`.
    pub(crate) fn parse_call_arguments(&mut self) -> Result<Vec<Expression>> {
        self.expect(Token::LeftParen)?;
        let mut arguments = Vec::new();
        if !self.check(&Token::RightParen) {
            loop {
                arguments.push(self.parse_expression()?);
                if !self.eat(&Token::Comma) {
                    break;
                }
            }
        }
        self.expect(Token::RightParen)?;
        Ok(arguments)
    }
}

fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Expression {
    Expression::Binary(BinaryExpression { left_expr: Box::new(left), operator, right_expr: Box::new(right) })
}

fn logical(left: Expression, operator: LogicalOperator, right: Expression) -> Expression {
    Expression::Logical(LogicalExpression { left_expr: Box::new(left), operator, right_expr: Box::new(right) })
}

#[cfg(test)]
mod tests {
    use grug_ast::GlobalStatement;

    use crate::parser::parse;

    fn single_assignment_expr(source: &str) -> grug_ast::Expression {
        let file = parse(source).unwrap();
        match &file[0] {
            GlobalStatement::Variable(v) => v.assignment.clone(),
            other => panic!("expected a global variable, got {other:?}"),
        }
    }

    #[test]
    fn precedence_nests_multiplication_inside_addition() {
        let expr = single_assignment_expr("x: i32 = 1 + 2 * 3\n");
        match expr {
            grug_ast::Expression::Binary(b) => {
                assert_eq!(b.operator, grug_ast::BinaryOperator::Plus);
                match *b.right_expr {
                    grug_ast::Expression::Binary(inner) => {
                        assert_eq!(inner.operator, grug_ast::BinaryOperator::Multiplication)
                    }
                    other => panic!("expected nested multiplication, got {other:?}"),
                }
            }
            other => panic!("expected a binary expression, got {other:?}"),
        }
    }

    #[test]
    fn not_of_parenthesized_and() {
        let expr = single_assignment_expr("x: bool = not (a and b)\n");
        match expr {
            grug_ast::Expression::Unary(u) => {
                assert_eq!(u.operator, grug_ast::UnaryOperator::Not);
                match *u.expr {
                    grug_ast::Expression::Parenthesized(p) => match *p.expr {
                        grug_ast::Expression::Logical(l) => assert_eq!(l.operator, grug_ast::LogicalOperator::And),
                        other => panic!("expected logical and, got {other:?}"),
                    },
                    other => panic!("expected parenthesized expression, got {other:?}"),
                }
            }
            other => panic!("expected a unary expression, got {other:?}"),
        }
    }
}
