use crate::processing::types::{Activity, DayStepsRecord, TrackerError, TrainingRecord};
use std::time::Duration;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

/// Largest span accepted, matching a signed 64-bit nanosecond counter.
const MAX_DURATION_NANOS: u128 = i64::MAX as u128;

/// Parse a `<steps>,<duration>` package.
pub fn parse_day_steps(data: &str) -> Result<DayStepsRecord, TrackerError> {
    let fields = split_fields(data, 2)?;
    let steps = parse_steps(fields[0])?;
    let duration = parse_duration(fields[1])?;

    Ok(DayStepsRecord { steps, duration })
}

/// Parse a `<steps>,<activity>,<duration>` package.
///
/// The activity label is resolved last so that malformed steps or durations
/// are reported before an unknown training type.
pub fn parse_training(data: &str) -> Result<TrainingRecord, TrackerError> {
    let fields = split_fields(data, 3)?;
    let steps = parse_steps(fields[0])?;
    let duration = parse_duration(fields[2])?;
    let activity: Activity = fields[1].parse()?;

    Ok(TrainingRecord {
        steps,
        activity,
        duration,
    })
}

fn split_fields(data: &str, expected: usize) -> Result<Vec<&str>, TrackerError> {
    let fields: Vec<&str> = data.split(',').collect();
    if fields.len() != expected {
        return Err(TrackerError::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_steps(raw: &str) -> Result<u64, TrackerError> {
    let steps: i64 = raw
        .parse()
        .map_err(|source| TrackerError::NonNumericSteps {
            input: raw.to_string(),
            source,
        })?;

    if steps <= 0 {
        return Err(TrackerError::NonPositiveSteps(steps));
    }

    Ok(steps as u64)
}

/// Parse an elapsed-time string such as `"1h30m"`, `"1.5h"` or `"300ms"` and
/// require it to be strictly positive.
///
/// Accepts an optional sign followed by one or more `<number><unit>` pairs.
/// Units are `ns`, `us` (`µs`, `μs`), `ms`, `s`, `m` and `h`. A bare `"0"` is
/// the only unitless value.
pub fn parse_duration(raw: &str) -> Result<Duration, TrackerError> {
    let invalid = || TrackerError::InvalidDuration(raw.to_string());

    let (negative, mut rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    if rest == "0" {
        return Err(TrackerError::NonPositiveDuration(raw.to_string()));
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let int_len = leading_digits(rest);
        let (int_part, after_int) = rest.split_at(int_len);

        let (frac_part, after_number) = match after_int.strip_prefix('.') {
            Some(tail) => tail.split_at(leading_digits(tail)),
            None => ("", after_int),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }

        let unit_len = after_number
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_number.len());
        let (unit, tail) = after_number.split_at(unit_len);
        let scale = unit_nanos(unit).ok_or_else(invalid)?;

        let whole = if int_part.is_empty() {
            0
        } else {
            int_part.parse::<u128>().map_err(|_| invalid())?
        };
        total = whole
            .checked_mul(u128::from(scale))
            .and_then(|nanos| total.checked_add(nanos))
            .ok_or_else(invalid)?;

        if !frac_part.is_empty() {
            let fraction: f64 = format!("0.{frac_part}").parse().map_err(|_| invalid())?;
            total = total
                .checked_add((fraction * scale as f64) as u128)
                .ok_or_else(invalid)?;
        }

        if total > MAX_DURATION_NANOS {
            return Err(invalid());
        }
        rest = tail;
    }

    if negative || total == 0 {
        return Err(TrackerError::NonPositiveDuration(raw.to_string()));
    }

    Ok(Duration::from_nanos(total as u64))
}

fn leading_digits(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_accepts_compound_notation() {
        assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5400));
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::from_secs(5400));
        assert_eq!(parse_duration("+45m").unwrap(), Duration::from_secs(2700));
        assert_eq!(parse_duration(".5s").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("300ms").unwrap(), Duration::from_millis(300));
        assert_eq!(parse_duration("2µs").unwrap(), Duration::from_micros(2));
        assert_eq!(parse_duration("1h0m1s").unwrap(), Duration::from_secs(3601));
    }

    #[test]
    fn duration_rejects_malformed_input() {
        for raw in ["", "10", "1x", "h", ".h", "1h-5m", "-", "1 h"] {
            assert!(
                matches!(parse_duration(raw), Err(TrackerError::InvalidDuration(_))),
                "{raw:?} should be rejected as malformed"
            );
        }
    }

    #[test]
    fn duration_rejects_non_positive_spans() {
        for raw in ["0", "-0", "0s", "-1h", "-30m"] {
            assert!(
                matches!(parse_duration(raw), Err(TrackerError::NonPositiveDuration(_))),
                "{raw:?} should be rejected as non-positive"
            );
        }
    }

    #[test]
    fn duration_rejects_overflow() {
        for raw in [
            "9999999999h",
            "94522879700260684295381835.999h",
            "340282366920938463463374607431768211455ns",
            "340282366920938463463374607431768211455.9ns",
        ] {
            assert!(
                matches!(parse_duration(raw), Err(TrackerError::InvalidDuration(_))),
                "{raw:?} should be rejected as out of range"
            );
        }
    }

    #[test]
    fn steps_accept_explicit_plus_sign() {
        assert_eq!(parse_steps("+12").unwrap(), 12);
    }

    #[test]
    fn steps_are_not_trimmed() {
        assert!(matches!(
            parse_steps(" 12"),
            Err(TrackerError::NonNumericSteps { .. })
        ));
    }
}
