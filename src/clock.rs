use chrono::{Local, NaiveDate};

/// Source of the current calendar date used when settling loans.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The host's local date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
