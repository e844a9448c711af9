//! Duration string parsing
//!
//! Accepts strings like `"5s"`, `"90m"`, or `"2h30m"`: one or more
//! integer-magnitude components, each with a unit suffix (`ms`, `s`, `m`,
//! `h`), summed left to right.

use std::time::Duration;

pub(crate) fn parse(input: &str) -> Result<Duration, String> {
    let s = input.trim();
    if s.is_empty() {
        return Err("empty duration".to_string());
    }

    let bytes = s.as_bytes();
    let mut total = Duration::ZERO;
    let mut i = 0;

    while i < bytes.len() {
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == start {
            return Err(format!("expected digits at '{}'", &s[i..]));
        }
        let magnitude: u64 = s[start..i]
            .parse()
            .map_err(|_| format!("magnitude '{}' out of range", &s[start..i]))?;

        let unit_start = i;
        while i < bytes.len() && !bytes[i].is_ascii_digit() {
            i += 1;
        }
        let component = match &s[unit_start..i] {
            "ms" => Some(Duration::from_millis(magnitude)),
            "s" => Some(Duration::from_secs(magnitude)),
            "m" => magnitude.checked_mul(60).map(Duration::from_secs),
            "h" => magnitude.checked_mul(3600).map(Duration::from_secs),
            "" => return Err(format!("missing unit after '{}'", &s[start..i])),
            unit => return Err(format!("unknown unit '{unit}'")),
        };

        total = component
            .and_then(|c| total.checked_add(c))
            .ok_or_else(|| "duration overflow".to_string())?;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seconds() {
        assert_eq!(parse("5s").unwrap(), Duration::from_secs(5));
    }

    #[test]
    fn test_parse_composite() {
        assert_eq!(parse("2h30m").unwrap(), Duration::from_secs(2 * 3600 + 30 * 60));
        assert_eq!(parse("1h30m").unwrap(), Duration::from_secs(90 * 60));
        assert_eq!(parse("1m30s").unwrap(), Duration::from_secs(90));
    }

    #[test]
    fn test_parse_millis() {
        assert_eq!(parse("250ms").unwrap(), Duration::from_millis(250));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse(" 10s ").unwrap(), Duration::from_secs(10));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("abc").is_err());
        assert!(parse("").is_err());
        assert!(parse("5x").is_err());
    }

    #[test]
    fn test_parse_rejects_missing_unit() {
        assert!(parse("5").is_err());
        assert!(parse("1h30").is_err());
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(parse("99999999999999999999s").is_err());
        assert!(parse("18446744073709551615h").is_err());
    }
}
