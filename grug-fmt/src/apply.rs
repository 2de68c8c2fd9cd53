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

//! JSON node tree → source text.
//!
//! Validation and emission happen in a single pass: every node is
//! checked against its schema exactly once, immediately before (or
//! while) its text is produced. There is no separate validate-then-emit
//! phase, matching the original's single-pass applier.

use std::fmt::Write as _;
use std::path::Path;

use grug_errors::{Error, Result, SchemaError};
use serde_json::Value;

use crate::schema::{
    as_array, check_field_order, discriminant, non_empty_array, optional_array, optional_str, required_str,
    required_text,
};

const INDENT: &str = "    ";

fn indent(level: usize) -> String {
    INDENT.repeat(level)
}

/// Reads a dumped JSON document from `json_path` and writes the source
/// text it encodes to `output_path`.
pub fn apply_file(json_path: &Path, output_path: &Path) -> Result<()> {
    let text = std::fs::read_to_string(json_path).map_err(|e| Error::io("reading", json_path, e))?;
    let value: Value = serde_json::from_str(&text)?;
    let rendered = render_file(&value)?;
    std::fs::write(output_path, rendered).map_err(|e| Error::io("writing", output_path, e))
}

/// Renders a complete file-level JSON array (`grug_ast::File`'s JSON
/// shape) to source text.
pub fn render_file(value: &Value) -> Result<String> {
    let globals = as_array(value, "$")?;
    let mut out = String::new();
    for (i, global) in globals.iter().enumerate() {
        emit_global(global, &format!("$[{i}]"), &mut out)?;
    }
    Ok(out)
}

fn emit_global(value: &Value, path: &str, out: &mut String) -> Result<()> {
    let (obj, kind) = discriminant(value, path)?;
    match kind {
        "GLOBAL_VARIABLE" => {
            check_field_order(obj, path, &[("name", true), ("variable_type", true), ("assignment", true)], true)?;
            let name = required_str(obj, path, "name")?;
            let variable_type = required_str(obj, path, "variable_type")?;
            let assignment = emit_required_expression(obj, path, "assignment")?;
            let _ = writeln!(out, "{name}: {variable_type} = {assignment}");
        }
        "GLOBAL_ON_FN" => {
            check_field_order(obj, path, &[("name", true), ("arguments", false), ("statements", false)], true)?;
            let name = required_str(obj, path, "name")?;
            let arguments = emit_parameters(optional_array(obj, path, "arguments")?, path)?;
            let _ = writeln!(out, "{name}({arguments}) {{");
            emit_body(optional_array(obj, path, "statements")?, &format!("{path}.statements"), 1, out)?;
            out.push_str("}\n");
        }
        "GLOBAL_HELPER_FN" => {
            check_field_order(
                obj,
                path,
                &[("name", true), ("arguments", false), ("return_type", false), ("statements", false)],
                true,
            )?;
            let name = required_str(obj, path, "name")?;
            let arguments = emit_parameters(optional_array(obj, path, "arguments")?, path)?;
            let return_type = optional_str(obj, path, "return_type")?;
            match return_type {
                Some(rt) => {
                    let _ = writeln!(out, "{name}({arguments}) {rt} {{");
                }
                None => {
                    let _ = writeln!(out, "{name}({arguments}) {{");
                }
            }
            emit_body(optional_array(obj, path, "statements")?, &format!("{path}.statements"), 1, out)?;
            out.push_str("}\n");
        }
        "GLOBAL_COMMENT" => {
            check_field_order(obj, path, &[("comment", true)], true)?;
            let comment = required_text(obj, path, "comment")?;
            let _ = writeln!(out, "#{comment}");
        }
        "GLOBAL_EMPTY_LINE" => {
            check_field_order(obj, path, &[], true)?;
            out.push('\n');
        }
        other => {
            return Err(SchemaError::UnknownDiscriminant { path: path.to_string(), discriminant: other.to_string() }.into());
        }
    }
    Ok(())
}

fn emit_parameters(arguments: &[Value], path: &str) -> Result<String> {
    let mut parts = Vec::with_capacity(arguments.len());
    for (i, arg) in arguments.iter().enumerate() {
        let arg_path = format!("{path}.arguments[{i}]");
        let obj = crate::schema::as_object(arg, &arg_path)?;
        check_field_order(obj, &arg_path, &[("name", true), ("type", true)], false)?;
        let name = required_str(obj, &arg_path, "name")?;
        let type_name = required_str(obj, &arg_path, "type")?;
        parts.push(format!("{name}: {type_name}"));
    }
    Ok(parts.join(", "))
}

fn emit_body(statements: &[Value], path: &str, level: usize, out: &mut String) -> Result<()> {
    for (i, stmt) in statements.iter().enumerate() {
        emit_statement(stmt, &format!("{path}[{i}]"), level, out)?;
    }
    Ok(())
}

fn emit_statement(value: &Value, path: &str, level: usize, out: &mut String) -> Result<()> {
    let (obj, kind) = discriminant(value, path)?;
    let pad = indent(level);
    match kind {
        "VARIABLE_STATEMENT" => {
            check_field_order(obj, path, &[("name", true), ("variable_type", false), ("assignment", true)], true)?;
            let name = required_str(obj, path, "name")?;
            let variable_type = optional_str(obj, path, "variable_type")?;
            let assignment = emit_required_expression(obj, path, "assignment")?;
            match variable_type {
                Some(t) => {
                    let _ = writeln!(out, "{pad}{name}: {t} = {assignment}");
                }
                None => {
                    let _ = writeln!(out, "{pad}{name} = {assignment}");
                }
            }
        }
        "CALL_STATEMENT" => {
            check_field_order(obj, path, &[("name", true), ("arguments", false)], true)?;
            let call = emit_call(obj, path)?;
            let _ = writeln!(out, "{pad}{call}");
        }
        "IF_STATEMENT" => emit_if_statement(obj, path, level, out, true)?,
        "RETURN_STATEMENT" => {
            check_field_order(obj, path, &[("expr", false)], true)?;
            match obj.get("expr") {
                Some(expr) => {
                    let rendered = emit_expression(expr, &format!("{path}.expr"))?;
                    let _ = writeln!(out, "{pad}return {rendered}");
                }
                None => {
                    let _ = writeln!(out, "{pad}return");
                }
            }
        }
        "WHILE_STATEMENT" => {
            check_field_order(obj, path, &[("condition", true), ("statements", false)], true)?;
            let condition = emit_required_expression(obj, path, "condition")?;
            let _ = writeln!(out, "{pad}while {condition} {{");
            emit_body(optional_array(obj, path, "statements")?, &format!("{path}.statements"), level + 1, out)?;
            let _ = writeln!(out, "{pad}}}");
        }
        "BREAK_STATEMENT" => {
            check_field_order(obj, path, &[], true)?;
            let _ = writeln!(out, "{pad}break");
        }
        "CONTINUE_STATEMENT" => {
            check_field_order(obj, path, &[], true)?;
            let _ = writeln!(out, "{pad}continue");
        }
        "COMMENT_STATEMENT" => {
            check_field_order(obj, path, &[("comment", true)], true)?;
            let comment = required_text(obj, path, "comment")?;
            let _ = writeln!(out, "{pad}#{comment}");
        }
        "EMPTY_LINE_STATEMENT" => {
            check_field_order(obj, path, &[], true)?;
            out.push('\n');
        }
        other => {
            return Err(SchemaError::UnknownDiscriminant { path: path.to_string(), discriminant: other.to_string() }.into());
        }
    }
    Ok(())
}

/// Emits an `if`/`else`/`else if` chain. `top_level` controls whether the
/// leading indentation and `if` keyword are written (`false` when
/// recursing into an `else if`, whose `if` follows ` else ` on the same
/// line rather than starting a fresh indented line).
fn emit_if_statement(obj: &serde_json::Map<String, Value>, path: &str, level: usize, out: &mut String, top_level: bool) -> Result<()> {
    check_field_order(obj, path, &[("condition", true), ("if_statements", false), ("else_statements", false)], true)?;
    let condition = emit_required_expression(obj, path, "condition")?;
    let pad = indent(level);

    if top_level {
        let _ = write!(out, "{pad}if {condition} {{\n");
    } else {
        let _ = write!(out, "if {condition} {{\n");
    }
    emit_body(optional_array(obj, path, "if_statements")?, &format!("{path}.if_statements"), level + 1, out)?;
    let _ = write!(out, "{pad}}}");

    let else_statements = non_empty_array(obj, path, "else_statements")?;
    if else_statements.is_empty() {
        out.push('\n');
        return Ok(());
    }

    if else_statements.len() == 1 {
        let only = &else_statements[0];
        let only_path = format!("{path}.else_statements[0]");
        if let Ok((else_obj, "IF_STATEMENT")) = discriminant(only, &only_path) {
            out.push_str(" else ");
            return emit_if_statement(else_obj, &only_path, level, out, false);
        }
    }

    out.push_str(" else {\n");
    emit_body(else_statements, &format!("{path}.else_statements"), level + 1, out)?;
    let _ = writeln!(out, "{pad}}}");
    Ok(())
}

fn emit_required_expression(obj: &serde_json::Map<String, Value>, path: &str, field: &str) -> Result<String> {
    let value = obj
        .get(field)
        .ok_or_else(|| SchemaError::MissingField { path: path.to_string(), field: field.to_string() })?;
    emit_expression(value, &format!("{path}.{field}"))
}

fn emit_call(obj: &serde_json::Map<String, Value>, path: &str) -> Result<String> {
    let name = required_str(obj, path, "name")?;
    let arguments = optional_array(obj, path, "arguments")?;
    let mut parts = Vec::with_capacity(arguments.len());
    for (i, arg) in arguments.iter().enumerate() {
        parts.push(emit_expression(arg, &format!("{path}.arguments[{i}]"))?);
    }
    Ok(format!("{name}({})", parts.join(", ")))
}

fn emit_expression(value: &Value, path: &str) -> Result<String> {
    let (obj, kind) = discriminant(value, path)?;
    match kind {
        "TRUE_EXPR" => {
            check_field_order(obj, path, &[], true)?;
            Ok("true".to_string())
        }
        "FALSE_EXPR" => {
            check_field_order(obj, path, &[], true)?;
            Ok("false".to_string())
        }
        "STRING_EXPR" => {
            check_field_order(obj, path, &[("str", true)], true)?;
            let text = required_text(obj, path, "str")?;
            Ok(format!("\"{text}\""))
        }
        "RESOURCE_EXPR" => Err(SchemaError::UnsupportedExpression { path: path.to_string(), kind: "RESOURCE_EXPR" }.into()),
        "ENTITY_EXPR" => Err(SchemaError::UnsupportedExpression { path: path.to_string(), kind: "ENTITY_EXPR" }.into()),
        "IDENTIFIER_EXPR" => {
            check_field_order(obj, path, &[("str", true)], true)?;
            required_str(obj, path, "str")
        }
        "I32_EXPR" | "F32_EXPR" => {
            check_field_order(obj, path, &[("value", true)], true)?;
            required_text(obj, path, "value")
        }
        "UNARY_EXPR" => {
            check_field_order(obj, path, &[("operator", true), ("expr", true)], true)?;
            let operator = required_str(obj, path, "operator")?;
            let expr = emit_required_expression(obj, path, "expr")?;
            let prefix = unary_prefix(&operator, path)?;
            Ok(format!("{prefix}{expr}"))
        }
        "BINARY_EXPR" => {
            check_field_order(obj, path, &[("left_expr", true), ("operator", true), ("right_expr", true)], true)?;
            let left = emit_required_expression(obj, path, "left_expr")?;
            let operator = required_str(obj, path, "operator")?;
            let right = emit_required_expression(obj, path, "right_expr")?;
            let symbol = binary_symbol(&operator, path)?;
            Ok(format!("{left} {symbol} {right}"))
        }
        "LOGICAL_EXPR" => {
            check_field_order(obj, path, &[("left_expr", true), ("operator", true), ("right_expr", true)], true)?;
            let left = emit_required_expression(obj, path, "left_expr")?;
            let operator = required_str(obj, path, "operator")?;
            let right = emit_required_expression(obj, path, "right_expr")?;
            let symbol = logical_symbol(&operator, path)?;
            Ok(format!("{left} {symbol} {right}"))
        }
        "CALL_EXPR" => {
            check_field_order(obj, path, &[("name", true), ("arguments", false)], true)?;
            emit_call(obj, path)
        }
        "PARENTHESIZED_EXPR" => {
            check_field_order(obj, path, &[("expr", true)], true)?;
            let inner = emit_required_expression(obj, path, "expr")?;
            Ok(format!("({inner})"))
        }
        other => Err(SchemaError::UnknownDiscriminant { path: path.to_string(), discriminant: other.to_string() }.into()),
    }
}

fn unary_prefix(operator: &str, path: &str) -> Result<&'static str> {
    match operator {
        "MINUS_TOKEN" => Ok("-"),
        "NOT_TOKEN" => Ok("not "),
        other => Err(SchemaError::UnknownDiscriminant { path: path.to_string(), discriminant: other.to_string() }.into()),
    }
}

fn binary_symbol(operator: &str, path: &str) -> Result<&'static str> {
    match operator {
        "PLUS_TOKEN" => Ok("+"),
        "MINUS_TOKEN" => Ok("-"),
        "MULTIPLICATION_TOKEN" => Ok("*"),
        "DIVISION_TOKEN" => Ok("/"),
        "REMAINDER_TOKEN" => Ok("%"),
        "EQUALS_TOKEN" => Ok("=="),
        "NOT_EQUALS_TOKEN" => Ok("!="),
        "GREATER_OR_EQUAL_TOKEN" => Ok(">="),
        "GREATER_TOKEN" => Ok(">"),
        "LESS_OR_EQUAL_TOKEN" => Ok("<="),
        "LESS_TOKEN" => Ok("<"),
        other => Err(SchemaError::UnknownDiscriminant { path: path.to_string(), discriminant: other.to_string() }.into()),
    }
}

fn logical_symbol(operator: &str, path: &str) -> Result<&'static str> {
    match operator {
        "AND_TOKEN" => Ok("and"),
        "OR_TOKEN" => Ok("or"),
        other => Err(SchemaError::UnknownDiscriminant { path: path.to_string(), discriminant: other.to_string() }.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_on_fn_renders_with_braces_even_without_statements_key() {
        let value: Value = serde_json::from_str(r#"[{"type":"GLOBAL_ON_FN","name":"on_init"}]"#).unwrap();
        assert_eq!(render_file(&value).unwrap(), "on_init() {\n}\n");
    }

    #[test]
    fn else_if_nests_without_extra_braces() {
        let json = r#"[{"type":"GLOBAL_ON_FN","name":"on_tick","statements":[
            {"type":"IF_STATEMENT","condition":{"type":"TRUE_EXPR"},
             "else_statements":[{"type":"IF_STATEMENT","condition":{"type":"FALSE_EXPR"}}]}
        ]}]"#;
        let value: Value = serde_json::from_str(json).unwrap();
        let rendered = render_file(&value).unwrap();
        assert_eq!(
            rendered,
            "on_tick() {\n    if true {\n    } else if false {\n    }\n}\n"
        );
    }

    #[test]
    fn type_field_out_of_order_is_rejected() {
        let value: Value = serde_json::from_str(r#"[{"name":"x","type":"GLOBAL_EMPTY_LINE"}]"#).unwrap();
        let err = render_file(&value).unwrap_err();
        assert!(matches!(err, grug_errors::Error::Schema(SchemaError::WrongFieldOrder { .. })));
    }

    #[test]
    fn unexpected_field_after_schema_is_rejected() {
        let value: Value = serde_json::from_str(r#"[{"type":"GLOBAL_EMPTY_LINE","extra":true}]"#).unwrap();
        let err = render_file(&value).unwrap_err();
        assert!(matches!(err, grug_errors::Error::Schema(SchemaError::UnexpectedField { .. })));
    }

    #[test]
    fn resource_expr_is_rejected_on_apply() {
        let value: Value = serde_json::from_str(
            r#"[{"type":"GLOBAL_VARIABLE","name":"x","variable_type":"string","assignment":{"type":"RESOURCE_EXPR","str":"a"}}]"#,
        )
        .unwrap();
        let err = render_file(&value).unwrap_err();
        assert!(matches!(err, grug_errors::Error::Schema(SchemaError::UnsupportedExpression { kind: "RESOURCE_EXPR", .. })));
    }
}
