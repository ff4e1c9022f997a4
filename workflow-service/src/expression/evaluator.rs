// Expression evaluator
// Evaluates the small condition/interpolation sublanguage against a
// read-only snapshot of run state. Evaluation is total: malformed
// paths and missing bindings yield None, never an error.

use crate::expression::value::Value;

/// Snapshot of run state exposed to expressions.
///
/// Built by the execution engine before each evaluation; the evaluator
/// never sees, let alone mutates, the live run context. The four roots
/// mirror the lookup namespaces: `env`, `inputs`, `jobs`, `steps`.
#[derive(Debug, Clone, Default)]
pub struct ExpressionContext {
    /// Merged environment variables (object of strings)
    pub env: Value,
    /// Run inputs
    pub inputs: Value,
    /// Completed (and, for output bindings, in-progress) job results
    pub jobs: Value,
    /// Step results of the currently-running job
    pub steps: Value,
}

impl ExpressionContext {
    fn root(&self, segment: &str) -> Option<&Value> {
        match segment {
            "env" => Some(&self.env),
            "inputs" => Some(&self.inputs),
            "jobs" => Some(&self.jobs),
            "steps" => Some(&self.steps),
            _ => None,
        }
    }
}

/// Strip the optional `${{ ... }}` wrapper from a guard condition.
///
/// Conditions may be written either as a bare expression
/// (`if: inputs.deploy`) or in the template form
/// (`if: ${{ inputs.deploy }}`); both evaluate identically.
pub fn strip_template_delimiter(expr: &str) -> &str {
    let trimmed = expr.trim();
    if let Some(inner) = trimmed
        .strip_prefix("${{")
        .and_then(|rest| rest.strip_suffix("}}"))
    {
        inner.trim()
    } else {
        trimmed
    }
}

/// Evaluate an expression against a context snapshot.
///
/// Grammar, in match order:
/// - `a || b || c` fallback chain: first operand that is not undefined,
///   not null, and not the empty string wins (`false` and `0` do win)
/// - quoted string literal (single or double quotes, matching)
/// - numeric literal (digits with an optional single decimal point)
/// - dot-path lookup rooted at `env`, `inputs`, `jobs`, `steps`
///
/// Returns `None` for undefined: an exhausted fallback chain, a missing
/// key at any path segment, or an expression that fits no rule.
pub fn evaluate(expr: &str, ctx: &ExpressionContext) -> Option<Value> {
    let expr = expr.trim();
    if expr.is_empty() {
        return None;
    }

    // Fallback chain: short-circuit on the first usable operand
    let parts = split_fallback_chain(expr);
    if parts.len() > 1 {
        for part in parts {
            if let Some(value) = evaluate(part.trim(), ctx) {
                let falls_through =
                    matches!(&value, Value::Null) || matches!(&value, Value::String(s) if s.is_empty());
                if !falls_through {
                    return Some(value);
                }
            }
        }
        return None;
    }

    if let Some(literal) = parse_string_literal(expr) {
        return Some(Value::String(literal));
    }

    if let Some(number) = parse_number_literal(expr) {
        return Some(Value::Number(number));
    }

    // Dot-path lookup, short-circuiting on the first missing segment
    let mut segments = expr.split('.');
    let mut current = ctx.root(segments.next()?)?;
    for segment in segments {
        current = current.get(segment)?;
    }
    Some(current.clone())
}

/// Evaluate a guard condition: optional delimiter unwrap, then boolean
/// coercion. Undefined coerces to false.
pub fn evaluate_condition(expr: &str, ctx: &ExpressionContext) -> bool {
    let body = strip_template_delimiter(expr);
    match evaluate(body, ctx) {
        Some(value) => value.coerce_bool(),
        None => false,
    }
}

/// Split on top-level `||`, ignoring occurrences inside quoted string
/// literals. The sublanguage has no parentheses, so "top-level" only
/// means "outside quotes".
fn split_fallback_chain(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_string: Option<char> = None;
    let bytes = input.as_bytes();

    let mut i = 0;
    while i < bytes.len() {
        let ch = bytes[i] as char;
        match in_string {
            Some(quote) => {
                if ch == quote {
                    in_string = None;
                }
            }
            None => {
                if ch == '\'' || ch == '"' {
                    in_string = Some(ch);
                } else if ch == '|' && bytes.get(i + 1) == Some(&b'|') {
                    parts.push(&input[start..i]);
                    i += 2;
                    start = i;
                    continue;
                }
            }
        }
        i += 1;
    }
    parts.push(&input[start..]);
    parts
}

fn parse_string_literal(expr: &str) -> Option<String> {
    let mut chars = expr.chars();
    let first = chars.next()?;
    let last = chars.next_back()?;
    if (first == '\'' || first == '"') && last == first {
        Some(expr[1..expr.len() - 1].to_string())
    } else {
        None
    }
}

fn parse_number_literal(expr: &str) -> Option<f64> {
    let mut dot_seen = false;
    let bytes = expr.as_bytes();
    if bytes.is_empty() || !bytes[0].is_ascii_digit() || !bytes[bytes.len() - 1].is_ascii_digit() {
        return None;
    }
    for &b in bytes {
        if b == b'.' {
            if dot_seen {
                return None;
            }
            dot_seen = true;
        } else if !b.is_ascii_digit() {
            return None;
        }
    }
    expr.parse().ok()
}
