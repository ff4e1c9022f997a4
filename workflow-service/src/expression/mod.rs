// Expression Module
// The `${{ }}` condition/interpolation sublanguage: fallback chains,
// literals, and dot-path lookups over a run-state snapshot.

pub mod evaluator;
pub mod template;
pub mod value;

pub use evaluator::{evaluate, evaluate_condition, strip_template_delimiter, ExpressionContext};
pub use template::{render, render_str};
pub use value::Value;
