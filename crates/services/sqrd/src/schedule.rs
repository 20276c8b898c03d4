//! Report timer.
//!
//! Report times come from a cron expression with a seconds column
//! (`sec min hour day month weekday`), evaluated in local time.

use std::{str::FromStr, time::Duration};

use chrono::{DateTime, TimeZone};
use cron::Schedule;

use crate::prelude::*;

/// When reports are due.
#[derive(Debug, Clone)]
pub struct ReportSchedule {
    expr: String,
    schedule: Schedule,
}

impl ReportSchedule {
    pub fn new(expr: &str) -> Result<Self> {
        let schedule = Schedule::from_str(expr).map_err(|err| Error::InvalidSchedule {
            expr: expr.to_string(),
            message: err.to_string(),
        })?;
        Ok(Self {
            expr: expr.to_string(),
            schedule,
        })
    }

    pub fn expr(&self) -> &str {
        &self.expr
    }

    /// First report time strictly after `after`.
    pub fn next_after<Tz: TimeZone>(&self, after: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        self.schedule.after(after).next()
    }

    /// The next `count` report times after `after`.
    pub fn upcoming<Tz: TimeZone>(&self, after: &DateTime<Tz>, count: usize) -> Vec<DateTime<Tz>> {
        self.schedule.after(after).take(count).collect()
    }
}

/// Time left from `now` until `at`, zero when `at` already passed.
pub fn until<Tz: TimeZone>(at: &DateTime<Tz>, now: &DateTime<Tz>) -> Duration {
    at.clone()
        .signed_duration_since(now.clone())
        .to_std()
        .unwrap_or(Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn at(hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, min, sec)
            .single()
            .expect("valid time")
    }

    #[test]
    fn default_schedule_fires_at_midnight_and_noon() -> Result<()> {
        let schedule = ReportSchedule::new("0 0 0,12 * * *")?;

        assert_eq!(schedule.next_after(&at(8, 30, 0)), Some(at(12, 0, 0)));
        assert_eq!(
            schedule.next_after(&at(12, 0, 0)),
            Some(Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap())
        );
        Ok(())
    }

    #[test]
    fn upcoming_lists_consecutive_times() -> Result<()> {
        let schedule = ReportSchedule::new("0 0 0,12 * * *")?;
        let times = schedule.upcoming(&at(1, 0, 0), 3);

        assert_eq!(times.len(), 3);
        assert_eq!(times[0], at(12, 0, 0));
        assert_eq!(times[1], Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap());
        assert_eq!(times[2], Utc.with_ymd_and_hms(2024, 5, 2, 12, 0, 0).unwrap());
        Ok(())
    }

    #[test]
    fn invalid_expression_is_rejected() {
        assert!(matches!(
            ReportSchedule::new("every noon"),
            Err(Error::InvalidSchedule { .. })
        ));
    }

    #[test]
    fn until_never_goes_negative() {
        assert_eq!(until(&at(12, 0, 0), &at(11, 59, 30)), Duration::from_secs(30));
        assert_eq!(until(&at(12, 0, 0), &at(12, 0, 1)), Duration::ZERO);
    }
}
