//! Coercion of raw HTML form values into column values.
//!
//! Browsers submit every field as text. The pet forms accept free-form
//! input for `age`, so anything that is not an integer is stored as `0`
//! rather than rejected.

/// Age stored when the submitted value cannot be parsed.
pub const DEFAULT_AGE: i64 = 0;

/// Parse a submitted age, falling back to [`DEFAULT_AGE`].
///
/// Surrounding whitespace is ignored. Empty input, non-numeric text,
/// fractional values and out-of-range numbers all yield the default.
pub fn parse_age(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(DEFAULT_AGE)
}

/// Same as [`parse_age`] but for a field that may be missing entirely.
pub fn parse_optional_age(raw: Option<&str>) -> i64 {
    raw.map_or(DEFAULT_AGE, parse_age)
}
