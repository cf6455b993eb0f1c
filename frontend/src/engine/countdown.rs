use chrono::{DateTime, Duration, Utc};

use crate::error::SiteError;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Remaining time until the event, split into display units.
///
/// Fields always stay in range: `hours` in 0..=23, `minutes` and `seconds`
/// in 0..=59. `tick` floors at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Countdown {
    pub fn new(days: u32, hours: u32, minutes: u32, seconds: u32) -> Result<Self, SiteError> {
        let check = |unit: &'static str, value: u32, max: u32| {
            if value > max {
                Err(SiteError::DurationField { unit, value, max })
            } else {
                Ok(())
            }
        };
        check("hours", hours, 23)?;
        check("minutes", minutes, 59)?;
        check("seconds", seconds, 59)?;
        Ok(Self { days, hours, minutes, seconds })
    }

    /// Totals beyond the largest representable day count saturate to
    /// `u32::MAX` days, 23:59:59.
    pub fn from_total_seconds(total: u64) -> Self {
        let Ok(days) = u32::try_from(total / SECS_PER_DAY) else {
            return Self { days: u32::MAX, hours: 23, minutes: 59, seconds: 59 };
        };
        let rest = total % SECS_PER_DAY;
        Self {
            days,
            hours: (rest / SECS_PER_HOUR) as u32,
            minutes: (rest % SECS_PER_HOUR / SECS_PER_MINUTE) as u32,
            seconds: (rest % SECS_PER_MINUTE) as u32,
        }
    }

    /// Negative durations count as already elapsed.
    pub fn from_duration(duration: Duration) -> Self {
        Self::from_total_seconds(duration.num_seconds().max(0) as u64)
    }

    pub fn until(now: DateTime<Utc>, start: DateTime<Utc>) -> Self {
        Self::from_duration(start - now)
    }

    pub fn total_seconds(&self) -> u64 {
        self.days as u64 * SECS_PER_DAY
            + self.hours as u64 * SECS_PER_HOUR
            + self.minutes as u64 * SECS_PER_MINUTE
            + self.seconds as u64
    }

    pub fn is_elapsed(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// One second of wall-clock time. Borrows from the next larger unit
    /// that is non-zero; a zero countdown stays zero.
    pub fn tick(&mut self) {
        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = 59;
        } else if self.hours > 0 {
            self.hours -= 1;
            self.minutes = 59;
            self.seconds = 59;
        } else if self.days > 0 {
            self.days -= 1;
            self.hours = 23;
            self.minutes = 59;
            self.seconds = 59;
        }
    }

    pub fn ticked(mut self) -> Self {
        self.tick();
        self
    }

    pub fn units(&self) -> [(&'static str, u32); 4] {
        [
            ("days", self.days),
            ("hours", self.hours),
            ("minutes", self.minutes),
            ("seconds", self.seconds),
        ]
    }
}

pub fn pad2(value: u32) -> String {
    format!("{:02}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn launch() -> Countdown {
        Countdown::new(10, 12, 34, 56).unwrap()
    }

    #[test]
    fn test_seconds_borrow_from_minutes() {
        let mut countdown = launch();
        for _ in 0..57 {
            countdown.tick();
        }
        assert_eq!(countdown, Countdown::new(10, 12, 33, 59).unwrap());
    }

    #[test]
    fn test_borrow_cascades_through_days() {
        let mut countdown = Countdown::new(1, 0, 0, 0).unwrap();
        countdown.tick();
        assert_eq!(countdown, Countdown::new(0, 23, 59, 59).unwrap());
    }

    #[test]
    fn test_hours_borrow_resets_lower_units() {
        let countdown = Countdown::new(0, 2, 0, 0).unwrap().ticked();
        assert_eq!(countdown, Countdown::new(0, 1, 59, 59).unwrap());
    }

    #[test]
    fn test_tick_matches_total_seconds_arithmetic() {
        let start = launch();
        let mut countdown = start;
        for n in 1..=5_000u64 {
            countdown.tick();
            assert_eq!(countdown, Countdown::from_total_seconds(start.total_seconds() - n));
            assert!(countdown.hours <= 23 && countdown.minutes <= 59 && countdown.seconds <= 59);
        }
    }

    #[test]
    fn test_zero_is_a_floor() {
        let mut countdown = Countdown::new(0, 0, 0, 2).unwrap();
        for _ in 0..10 {
            countdown.tick();
        }
        assert!(countdown.is_elapsed());
        assert_eq!(countdown, Countdown::default());
    }

    #[test]
    fn test_new_rejects_out_of_range_fields() {
        assert!(matches!(
            Countdown::new(0, 24, 0, 0),
            Err(SiteError::DurationField { unit: "hours", value: 24, max: 23 })
        ));
        assert!(Countdown::new(0, 0, 60, 0).is_err());
        assert!(Countdown::new(0, 0, 0, 60).is_err());
        assert!(Countdown::new(365, 23, 59, 59).is_ok());
    }

    #[test]
    fn test_until_past_start_is_elapsed() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let start = Utc.with_ymd_and_hms(2025, 3, 2, 13, 1, 1).unwrap();
        assert_eq!(Countdown::until(now, start), Countdown::new(1, 1, 1, 1).unwrap());
        assert!(Countdown::until(start, now).is_elapsed());
    }

    #[test]
    fn test_oversized_total_saturates() {
        let max = Countdown { days: u32::MAX, hours: 23, minutes: 59, seconds: 59 };
        assert_eq!(Countdown::from_total_seconds(u64::MAX), max);
        assert_eq!(Countdown::from_total_seconds((u32::MAX as u64 + 1) * SECS_PER_DAY), max);
        assert_eq!(Countdown::from_total_seconds(max.total_seconds()), max);
    }

    #[test]
    fn test_units_are_in_display_order() {
        let labels: Vec<_> = launch().units().iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, ["days", "hours", "minutes", "seconds"]);
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(123), "123");
    }
}
