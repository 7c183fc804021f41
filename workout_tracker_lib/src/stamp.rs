use std::fmt;

use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};

/// Number of trailing millisecond digits kept in a generated id.
const ID_DIGITS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkoutId(String);

impl WorkoutId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of a record, fixed at the moment it is created.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStamp {
    pub id: WorkoutId,
    pub created_at: DateTime<FixedOffset>,
}

pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the user's local offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

pub trait Stamper {
    fn stamp(&mut self) -> RecordStamp;
}

/// Stamps records with the clock's time and an id taken from the last ten digits of
/// that time in milliseconds. Ids never repeat within one stamper.
#[derive(Debug, Default)]
pub struct SystemStamper<C: Clock = LocalClock> {
    clock: C,
    last_id: Option<u64>,
}

impl<C: Clock> SystemStamper<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last_id: None,
        }
    }

    fn next_id(&mut self, created_at: &DateTime<FixedOffset>) -> u64 {
        let millis = created_at.timestamp_millis().unsigned_abs();
        let mut id = millis % 10u64.pow(ID_DIGITS);

        // Two records in the same millisecond (or a clock stepping backwards)
        if let Some(last) = self.last_id {
            if id <= last {
                id = last + 1;
            }
        }

        self.last_id = Some(id);
        id
    }
}

impl<C: Clock> Stamper for SystemStamper<C> {
    fn stamp(&mut self) -> RecordStamp {
        let created_at = self.clock.now();
        let id = self.next_id(&created_at);

        RecordStamp {
            id: WorkoutId(format!("{:0width$}", id, width = ID_DIGITS as usize)),
            created_at,
        }
    }
}
