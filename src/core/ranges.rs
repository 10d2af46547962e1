use crate::core::strip_whitespace;
use crate::domain::model::RangeInput;
use crate::utils::error::{Result, UtilError};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

// 像 3-7 這種不含空白的範圍
static RANGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)-([0-9]+)$").unwrap());

/// Expands strings of the form `"1,2-4,9,11-12"` to `{1, 2, 3, 4, 9, 11, 12}`.
///
/// Whitespace anywhere in the string is ignored. Each comma-separated part is
/// either an inclusive `low-high` range of unsigned integers or a single
/// (optionally signed) integer. A range with `low > high` contributes nothing.
///
/// A number instead of a string yields a set holding only that number,
/// truncated toward zero.
///
/// # Errors
/// Returns [`UtilError::RangeParseError`] for a part that is neither form,
/// including an empty part, and for numbers outside the `i64` range.
pub fn expand_range_string(input: impl Into<RangeInput>) -> Result<BTreeSet<i64>> {
    match input.into() {
        RangeInput::Integer(value) => Ok(BTreeSet::from([value])),
        RangeInput::Float(value) => truncate(value).map(|value| BTreeSet::from([value])),
        RangeInput::Text(text) => expand_text(&text),
    }
}

fn truncate(value: f64) -> Result<i64> {
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, hence the exclusive upper bound
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        tracing::debug!("Refusing to truncate {} to an integer", value);
        return Err(UtilError::range_parse(
            value.to_string(),
            "number cannot be represented as an integer",
        ));
    }
    Ok(truncated as i64)
}

fn expand_text(text: &str) -> Result<BTreeSet<i64>> {
    let compact = strip_whitespace(text);

    let mut numbers = BTreeSet::new();
    for part in compact.split(',') {
        if let Some(caps) = RANGE_PATTERN.captures(part) {
            let low = parse_integer(part, &caps[1])?;
            let high = parse_integer(part, &caps[2])?;
            numbers.extend(low..=high);
        } else {
            numbers.insert(parse_integer(part, part)?);
        }
    }
    Ok(numbers)
}

fn parse_integer(part: &str, digits: &str) -> Result<i64> {
    digits.parse::<i64>().map_err(|e| {
        tracing::debug!("Invalid part '{}' in range expression: {}", part, e);
        UtilError::range_parse(part, e)
    })
}
