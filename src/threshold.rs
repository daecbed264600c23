use tracing::debug;

use crate::types::{Status, Thresholds};

/// Comparison operator of a single-bound threshold expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    GreaterOrEqual,
    LessOrEqual,
    Greater,
    Less,
    Equal,
}

impl Comparison {
    // Two-character operators come first so ">=" is not read as ">".
    const OPERATORS: [(&'static str, Comparison); 5] = [
        (">=", Comparison::GreaterOrEqual),
        ("<=", Comparison::LessOrEqual),
        (">", Comparison::Greater),
        ("<", Comparison::Less),
        ("=", Comparison::Equal),
    ];

    pub fn evaluate(&self, value: f64, threshold: f64) -> bool {
        match self {
            Comparison::GreaterOrEqual => value >= threshold,
            Comparison::LessOrEqual => value <= threshold,
            Comparison::Greater => value > threshold,
            Comparison::Less => value < threshold,
            Comparison::Equal => (value - threshold).abs() < f64::EPSILON,
        }
    }
}

/// A parsed threshold expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdExpr {
    Bound { op: Comparison, threshold: f64 },
    /// Inclusive on both ends.
    Range { low: f64, high: f64 },
}

impl ThresholdExpr {
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            ThresholdExpr::Bound { op, threshold } => op.evaluate(value, threshold),
            ThresholdExpr::Range { low, high } => low <= value && value <= high,
        }
    }
}

/// Parses an unsigned integer or decimal, ignoring a trailing `%` and
/// surrounding whitespace.
pub fn parse_threshold_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let raw = raw.strip_suffix('%').unwrap_or(raw).trim_end();
    if raw.is_empty() {
        return None;
    }
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !frac_part.map(all_digits).unwrap_or(true) {
        return None;
    }
    raw.parse::<f64>().ok()
}

/// Single-bound form: optional operator, then a number. `default_op`
/// applies when the operator is omitted.
pub fn parse_bound(raw: &str, default_op: Comparison) -> Option<ThresholdExpr> {
    let raw = raw.trim();
    let (op, rest) = Comparison::OPERATORS
        .iter()
        .find_map(|(token, op)| raw.strip_prefix(*token).map(|rest| (*op, rest)))
        .unwrap_or((default_op, raw));
    let threshold = parse_threshold_number(rest)?;
    Some(ThresholdExpr::Bound { op, threshold })
}

/// Range form `low-high`.
pub fn parse_range(raw: &str) -> Option<ThresholdExpr> {
    let (low, high) = raw.trim().split_once('-')?;
    Some(ThresholdExpr::Range {
        low: parse_threshold_number(low)?,
        high: parse_threshold_number(high)?,
    })
}

/// Parses the expression configured for `color`. Yellow accepts the range
/// form and defaults to `=`; green and red default to `>=`.
pub fn parse_threshold(raw: &str, color: Status) -> Option<ThresholdExpr> {
    match color {
        Status::Yellow => parse_range(raw).or_else(|| parse_bound(raw, Comparison::Equal)),
        Status::Green | Status::Red => parse_bound(raw, Comparison::GreaterOrEqual),
    }
}

fn rule_matches(raw: Option<&str>, color: Status, value: f64) -> bool {
    let Some(raw) = raw else { return false };
    match parse_threshold(raw, color) {
        Some(expr) => expr.matches(value),
        None => {
            debug!("ignoring unparseable {:?} threshold {:?}", color, raw);
            false
        }
    }
}

/// Classifies `value` against `thresholds`, checking green, then yellow,
/// then red. Anything that matches no rule, including non-finite values,
/// is yellow.
pub fn classify(value: f64, thresholds: &Thresholds) -> Status {
    if !value.is_finite() {
        return Status::Yellow;
    }
    let rules = [
        (Status::Green, thresholds.green.as_deref()),
        (Status::Yellow, thresholds.yellow.as_deref()),
        (Status::Red, thresholds.red.as_deref()),
    ];
    rules
        .into_iter()
        .find(|(color, raw)| rule_matches(*raw, *color, value))
        .map(|(color, _)| color)
        .unwrap_or(Status::Yellow)
}
