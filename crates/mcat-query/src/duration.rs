//! Numeric coercion for comparison operators.

/// Parses an operand as a whole number of minutes.
///
/// Accepts, in order: a plain integer with optional sign (`90`, `-5`), a run of `<n>h` and
/// `<n>m` groups (`1h30m`, `45m`, `2h`), or `<hours>:<minutes>` (`1:30`). Returns `None` for
/// anything else, including overflow.
pub fn parse_minutes(input: &str) -> Option<i64> {
    if let Ok(value) = input.parse::<i64>() {
        return Some(value);
    }

    match input.split_once(':') {
        Some((hours, minutes)) => parse_clock(hours, minutes),
        None => parse_units(input),
    }
}

/// Parses `<hours>:<minutes>`.
fn parse_clock(hours: &str, minutes: &str) -> Option<i64> {
    let hours: i64 = hours.parse().ok()?;
    let minutes: i64 = minutes.parse().ok()?;
    hours.checked_mul(60)?.checked_add(minutes)
}

/// Parses a non-empty run of `<n>h` / `<n>m` groups.
fn parse_units(input: &str) -> Option<i64> {
    if input.is_empty() {
        return None;
    }

    let mut total: i64 = 0;
    let mut rest = input;
    while !rest.is_empty() {
        let unit_at = rest.find(['h', 'm'])?;
        let (number, tail) = rest.split_at(unit_at);
        if number.is_empty() {
            return None;
        }
        let count: i64 = number.parse().ok()?;
        let factor = if tail.starts_with('h') { 60 } else { 1 };
        total = total.checked_add(count.checked_mul(factor)?)?;
        rest = &tail[1..];
    }
    Some(total)
}
