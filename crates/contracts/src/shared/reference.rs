//! Next document reference from the last one used.

/// Increments the first run of digits in `last`, keeping its zero padding.
///
/// "001/2024" -> "002/2024", "SO-0009" -> "SO-0010", "99" -> "100".
/// An empty reference starts at "1"; a reference without digits gets "1" appended.
pub fn next_reference(last: &str) -> String {
    let last = last.trim();
    if last.is_empty() {
        return "1".to_string();
    }

    let Some(start) = last.find(|c: char| c.is_ascii_digit()) else {
        return format!("{}1", last);
    };
    let end = last[start..]
        .find(|c: char| !c.is_ascii_digit())
        .map(|offset| start + offset)
        .unwrap_or(last.len());

    let digits = &last[start..end];
    let incremented = increment_digits(digits);
    format!("{}{}{}", &last[..start], incremented, &last[end..])
}

/// Decimal increment on the digit string itself, so long runs never overflow.
fn increment_digits(digits: &str) -> String {
    let mut bytes: Vec<u8> = digits.bytes().collect();
    for byte in bytes.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }
    format!("1{}", String::from_utf8_lossy(&bytes))
}

/// Next reference after the highest-sorting one in `references`.
pub fn next_after<'a>(references: impl IntoIterator<Item = &'a str>) -> String {
    let last = references
        .into_iter()
        .filter(|r| !r.trim().is_empty())
        .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
        .unwrap_or("");
    next_reference(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_padding_and_suffix() {
        assert_eq!(next_reference("001/2024"), "002/2024");
        assert_eq!(next_reference("SO-0009"), "SO-0010");
        assert_eq!(next_reference("INV19X"), "INV20X");
    }

    #[test]
    fn test_carry_grows_run() {
        assert_eq!(next_reference("99"), "100");
        assert_eq!(next_reference("A999/2025"), "A1000/2025");
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(next_reference(""), "1");
        assert_eq!(next_reference("   "), "1");
        assert_eq!(next_reference("REF-"), "REF-1");
    }

    #[test]
    fn test_next_after_picks_highest() {
        let refs = ["009/2024", "010/2024", "", "002/2024"];
        assert_eq!(next_after(refs), "011/2024");
        assert_eq!(next_after(Vec::<&str>::new()), "1");
    }
}
