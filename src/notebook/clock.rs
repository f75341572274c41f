use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Clock abstracts the current time so note timestamps stay deterministic in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Real-time clock backed by the system local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl FixedClock {
    /// Interprets `naive` as local wall-clock time; falls back to the system clock
    /// when the wall time does not exist in the local zone.
    pub fn at(naive: NaiveDateTime) -> Self {
        let instant = Local
            .from_local_datetime(&naive)
            .earliest()
            .unwrap_or_else(Local::now);
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
