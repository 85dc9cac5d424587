//! Human readable duration parsing for configuration values
//!
//! Token lifetimes and cookie max-ages are configured as strings such as
//! `"15m"`, `"7d"` or `"2 hours"`. A bare number is a count of seconds.

use chrono::Duration;

use super::ConfigError;

/// Parses a duration string into a [`Duration`]
///
/// Accepted units: `ms`, `s`, `m`, `h`, `d`, `w`, `y` and their long forms
/// (`sec`, `seconds`, `min`, `minutes`, `hr`, `hours`, `days`, `weeks`, `years`).
///
/// # Arguments
///
/// * `key` - Name of the configuration value, used in error messages
/// * `value` - The raw duration string
pub fn parse_duration(key: &str, value: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidDuration {
        key: key.to_string(),
        value: value.to_string(),
    };

    let trimmed = value.trim();
    let split_at = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, unit) = trimmed.split_at(split_at);

    if digits.is_empty() {
        return Err(invalid());
    }
    let amount: i64 = digits.parse().map_err(|_| invalid())?;

    let duration = match unit.trim().to_ascii_lowercase().as_str() {
        "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => Duration::try_milliseconds(amount),
        "" | "s" | "sec" | "secs" | "second" | "seconds" => Duration::try_seconds(amount),
        "m" | "min" | "mins" | "minute" | "minutes" => Duration::try_minutes(amount),
        "h" | "hr" | "hrs" | "hour" | "hours" => Duration::try_hours(amount),
        "d" | "day" | "days" => Duration::try_days(amount),
        "w" | "week" | "weeks" => Duration::try_weeks(amount),
        "y" | "yr" | "yrs" | "year" | "years" => {
            amount.checked_mul(365).and_then(Duration::try_days)
        }
        _ => None,
    };

    duration.ok_or_else(invalid)
}

/// Parses a duration string that must be a whole number of seconds
///
/// Used for cookie `Max-Age`, which cannot carry fractions of a second.
pub fn parse_whole_seconds(key: &str, value: &str) -> Result<i64, ConfigError> {
    let duration = parse_duration(key, value)?;
    if duration.subsec_nanos() != 0 {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("{:?} is not a whole number of seconds", value),
        });
    }
    Ok(duration.num_seconds())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_units() {
        assert_eq!(parse_duration("k", "15m").unwrap(), Duration::minutes(15));
        assert_eq!(parse_duration("k", "7d").unwrap(), Duration::days(7));
        assert_eq!(parse_duration("k", "12h").unwrap(), Duration::hours(12));
        assert_eq!(parse_duration("k", "30s").unwrap(), Duration::seconds(30));
        assert_eq!(parse_duration("k", "1500ms").unwrap(), Duration::milliseconds(1500));
        assert_eq!(parse_duration("k", "2w").unwrap(), Duration::weeks(2));
        assert_eq!(parse_duration("k", "1y").unwrap(), Duration::days(365));
    }

    #[test]
    fn test_parse_long_units_with_whitespace() {
        assert_eq!(parse_duration("k", "2 days").unwrap(), Duration::days(2));
        assert_eq!(parse_duration("k", " 10 Hours ").unwrap(), Duration::hours(10));
        assert_eq!(parse_duration("k", "1 minute").unwrap(), Duration::minutes(1));
    }

    #[test]
    fn test_bare_number_is_seconds() {
        assert_eq!(parse_duration("k", "900").unwrap(), Duration::seconds(900));
        assert_eq!(parse_duration("k", "0").unwrap(), Duration::zero());
    }

    #[test]
    fn test_rejects_malformed_values() {
        for raw in ["", "m", "-5m", "1.5h", "10 fortnights", "abc"] {
            let err = parse_duration("ACCESS_TOKEN_EXPIRY_TIME", raw).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidDuration { ref key, .. } if key == "ACCESS_TOKEN_EXPIRY_TIME"),
                "expected InvalidDuration for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_rejects_overflow() {
        assert!(parse_duration("k", "99999999999999999999").is_err());
        assert!(parse_duration("k", "9223372036854775807y").is_err());
    }

    #[test]
    fn test_whole_seconds() {
        assert_eq!(parse_whole_seconds("k", "900").unwrap(), 900);
        assert_eq!(parse_whole_seconds("k", "15m").unwrap(), 900);
        assert_eq!(parse_whole_seconds("k", "2000ms").unwrap(), 2);
    }

    #[test]
    fn test_whole_seconds_rejects_fractions() {
        for raw in ["1500ms", "999ms", "1ms"] {
            let err = parse_whole_seconds("cookie_max_age", raw).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "cookie_max_age"),
                "expected InvalidValue for {:?}",
                raw
            );
        }
    }
}
