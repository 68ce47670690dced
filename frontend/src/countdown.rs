use chrono::{Local, LocalResult, NaiveDateTime, TimeZone, Utc};
use log::warn;

use crate::config;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Time left until launch. Goes negative once the launch has passed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Splits `delta_ms` into units. Each unit is floored, and the intermediate
    /// remainders keep the sign of `delta_ms`.
    pub fn from_delta(delta_ms: i64) -> Self {
        Self {
            days: delta_ms.div_euclid(MS_PER_DAY),
            hours: (delta_ms % MS_PER_DAY).div_euclid(MS_PER_HOUR),
            minutes: (delta_ms % MS_PER_HOUR).div_euclid(MS_PER_MINUTE),
            seconds: (delta_ms % MS_PER_MINUTE).div_euclid(MS_PER_SECOND),
        }
    }

    pub fn tiles(&self) -> [(&'static str, i64); 4] {
        [
            ("Days", self.days),
            ("Hrs", self.hours),
            ("Mins", self.minutes),
            ("Secs", self.seconds),
        ]
    }
}

/// Zero-pads to two characters; wider values are left as they are.
pub fn format_unit(value: i64) -> String {
    format!("{:0>2}", value)
}

pub trait Clock {
    fn now_millis(&self) -> i64;
}

#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Launch instant in epoch milliseconds, reading the configured date in `tz`.
pub fn launch_target_in<Tz: TimeZone>(tz: &Tz) -> Option<i64> {
    let naive = NaiveDateTime::parse_from_str(config::LAUNCH_DATE, config::LAUNCH_DATE_FORMAT).ok()?;
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.timestamp_millis()),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.timestamp_millis()),
        LocalResult::None => {
            warn!("Launch date falls in a timezone gap, reading it as UTC");
            Some(Utc.from_utc_datetime(&naive).timestamp_millis())
        }
    }
}

pub fn launch_target() -> Option<i64> {
    launch_target_in(&Local)
}

pub struct CountdownEngine<C> {
    target_ms: i64,
    clock: C,
}

impl<C: Clock> CountdownEngine<C> {
    pub fn new(target_ms: i64, clock: C) -> Self {
        Self { target_ms, clock }
    }

    pub fn remaining(&self) -> Countdown {
        Countdown::from_delta(self.target_ms - self.clock.now_millis())
    }
}
