use std::str::FromStr;
use std::time::Duration;

/// Duration written as `1h`, `30m`, `1h15m30s` or plain seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanDuration(pub Duration);

fn unit_seconds(unit: char) -> Option<u64> {
    match unit {
        's' => Some(1),
        'm' => Some(60),
        'h' => Some(60 * 60),
        'd' => Some(24 * 60 * 60),
        _ => None,
    }
}

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let overflow = || format!("Duration too large: {}", s);
        let mut total: u64 = 0;
        let mut digits = String::new();
        let mut parts = 0;

        for c in s.chars() {
            if c.is_ascii_digit() {
                digits.push(c);
                continue;
            }
            if c.is_whitespace() && digits.is_empty() {
                continue;
            }
            if digits.is_empty() {
                return Err(format!("Expected a number before {:?}", c));
            }

            let factor = unit_seconds(c).ok_or_else(|| format!("Unknown duration unit: {:?}", c))?;
            let value: u64 = digits.parse().map_err(|_| overflow())?;
            total = value
                .checked_mul(factor)
                .and_then(|v| total.checked_add(v))
                .ok_or_else(overflow)?;
            digits.clear();
            parts += 1;
        }

        // a bare trailing number is seconds
        if !digits.is_empty() {
            let value: u64 = digits.parse().map_err(|_| overflow())?;
            total = total.checked_add(value).ok_or_else(overflow)?;
            parts += 1;
        }

        if parts == 0 {
            return Err("Duration must include a number".to_string());
        }
        Ok(HumanDuration(Duration::from_secs(total)))
    }
}
