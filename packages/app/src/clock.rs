//! Calendar source for rollover and today's quest lookup

use std::sync::Mutex;

use chrono::{Local, NaiveDate};
use strivex_algo::Day;

pub trait Clock: Send + Sync {
    /// Current calendar day in the local time zone
    fn today(&self) -> NaiveDate;

    fn weekday(&self) -> Day {
        Day::of(self.today())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a date; can be advanced for tests and scripted runs
#[derive(Debug)]
pub struct FixedClock {
    date: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Mutex::new(date),
        }
    }

    pub fn set(&self, date: NaiveDate) {
        if let Ok(mut guard) = self.date.lock() {
            *guard = date;
        }
    }

    pub fn advance_days(&self, days: u64) {
        if let Ok(mut guard) = self.date.lock() {
            if let Some(next) = guard.checked_add_days(chrono::Days::new(days)) {
                *guard = next;
            }
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        match self.date.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
