/// A failed field rule: which form field, and what to tell the user.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: &str) -> Self {
        Self { field, message: message.to_string() }
    }
}

/// Validate a required text field: non-empty once surrounding whitespace is trimmed.
pub fn validate_required(value: &str, field: &'static str, message: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::new(field, message));
    }
    None
}

/// Validate an integer field. See [`parse_int`] for the accepted syntax.
pub fn validate_int(value: &str, field: &'static str, message: &str) -> Option<FieldError> {
    match parse_int(value) {
        Some(_) => None,
        None => Some(FieldError::new(field, message)),
    }
}

/// Parse a base-10 integer: optional `+`/`-`, then `0` or digits without a
/// leading zero. No surrounding whitespace. The value must fit the 32-bit
/// `INT` columns it is stored in; anything wider is rejected here rather than
/// by the database.
pub fn parse_int(value: &str) -> Option<i64> {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    value.parse::<i32>().ok().map(i64::from)
}
