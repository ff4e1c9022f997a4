// Template interpolation
// Substitutes `${{ expr }}` markers in string scalars, walking nested
// parameter structures. Container shape and non-string scalars pass
// through untouched, so rendering is idempotent once no markers remain.

use crate::expression::evaluator::{evaluate, ExpressionContext};

const OPEN: &str = "${{";
const CLOSE: &str = "}}";

/// Substitute every `${{ ... }}` occurrence in a string.
///
/// Each enclosed expression is evaluated and stringified; undefined and
/// null render as the empty string. An unterminated marker is left
/// verbatim.
pub fn render_str(input: &str, ctx: &ExpressionContext) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open_at) = rest.find(OPEN) {
        out.push_str(&rest[..open_at]);
        let after_open = &rest[open_at + OPEN.len()..];
        match after_open.find(CLOSE) {
            Some(close_at) => {
                let expr = after_open[..close_at].trim();
                if let Some(value) = evaluate(expr, ctx) {
                    out.push_str(&value.as_string());
                }
                rest = &after_open[close_at + CLOSE.len()..];
            }
            None => {
                out.push_str(&rest[open_at..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Render an arbitrary nested structure: every string scalar goes
/// through [`render_str`], everything else is passed through unchanged.
pub fn render(input: &serde_json::Value, ctx: &ExpressionContext) -> serde_json::Value {
    match input {
        serde_json::Value::String(s) => serde_json::Value::String(render_str(s, ctx)),
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(|v| render(v, ctx)).collect())
        }
        serde_json::Value::Object(map) => serde_json::Value::Object(
            map.iter().map(|(k, v)| (k.clone(), render(v, ctx))).collect(),
        ),
        other => other.clone(),
    }
}
