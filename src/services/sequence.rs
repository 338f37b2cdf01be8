use chrono::{Local, NaiveDate};
use std::sync::atomic::{AtomicU64, Ordering};

/// Generator for relay order ids: an 8-digit date prefix captured once at
/// startup, followed by a process-lifetime counter starting at 1. The
/// counter advances even when the gateway later rejects the order, so an id
/// is consumed per attempt, not per success. Ids are never persisted and
/// restart from 1 with each process.
pub struct OrderSequence {
    day: String,
    next: AtomicU64,
}

impl OrderSequence {
    pub fn new() -> Self {
        Self::starting_at(Local::now().date_naive(), 1)
    }

    pub fn starting_at(date: NaiveDate, first: u64) -> Self {
        Self {
            day: date.format("%Y%m%d").to_string(),
            next: AtomicU64::new(first),
        }
    }

    pub fn next_id(&self) -> String {
        let counter = self.next.fetch_add(1, Ordering::SeqCst);
        format!("{}{}", self.day, counter)
    }
}

impl Default for OrderSequence {
    fn default() -> Self {
        Self::new()
    }
}
