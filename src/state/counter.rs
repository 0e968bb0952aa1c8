//! Stat counter ramp.
//!
//! A counter climbs linearly from 0 to its target over a fixed duration in
//! fixed ticks. The displayed value is floored and never passes the target;
//! the final frame shows the exact target.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Parse a leading integer the way `parseInt(text, 10)` does: optional
/// leading whitespace, optional sign, then decimal digits. Trailing text is
/// ignored; no digits means `None`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude = match rest[..digits_len].parse::<i64>() {
        Ok(value) => value,
        Err(_) => return None,
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// One rendered step of a counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    pub done: bool,
}

impl CounterFrame {
    pub fn label(self, suffix: &str) -> String {
        format!("{}{suffix}", self.value)
    }
}

#[derive(Clone, Debug)]
pub struct CounterRamp {
    target: i64,
    current: f64,
    increment: f64,
}

impl CounterRamp {
    #[allow(clippy::cast_precision_loss)]
    pub fn new(target: i64, duration_ms: u32, tick_ms: u32) -> Self {
        let steps = if tick_ms == 0 { 0.0 } else { f64::from(duration_ms) / f64::from(tick_ms) };
        let target_f = target as f64;
        let increment = if steps > 0.0 { target_f / steps } else { target_f };
        Self { target, current: 0.0, increment }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn tick(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current >= self.target as f64 {
            CounterFrame { value: self.target, done: true }
        } else {
            CounterFrame { value: (self.current.floor() as i64).min(self.target), done: false }
        }
    }
}
