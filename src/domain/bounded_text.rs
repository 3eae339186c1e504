use unicode_segmentation::UnicodeSegmentation;

/// Trims `value` and checks that its grapheme count lies in `min..=max`.
pub(crate) fn parse_bounded(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("\"{}\" is not allowed to be empty", field));
    }

    let length = value.graphemes(true).count();
    if length < min {
        Err(format!(
            "\"{}\" length must be at least {} characters long",
            field, min
        ))
    } else if length > max {
        Err(format!(
            "\"{}\" length must be less than or equal to {} characters long",
            field, max
        ))
    } else {
        Ok(value.to_string())
    }
}
