//! Injectable time source.
//!
//! The order actor judges edit and cancellation windows against this clock
//! rather than calling `Utc::now()` directly, so tests can place themselves
//! one second on either side of a deadline.

use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum Clock {
    /// Wall-clock time.
    System,
    /// A manually advanced instant, shared across clones.
    Manual(Arc<Mutex<DateTime<Utc>>>),
}

impl Clock {
    pub fn system() -> Self {
        Clock::System
    }

    pub fn manual(start: DateTime<Utc>) -> Self {
        Clock::Manual(Arc::new(Mutex::new(start)))
    }

    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Manual(instant) => *instant.lock().unwrap_or_else(|e| e.into_inner()),
        }
    }

    /// Moves a manual clock forward. No effect on the system clock.
    pub fn advance(&self, by: Duration) {
        if let Clock::Manual(instant) = self {
            let mut t = instant.lock().unwrap_or_else(|e| e.into_inner());
            *t += by;
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Clock::System
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances_across_clones() {
        let start = Utc::now();
        let clock = Clock::manual(start);
        let clone = clock.clone();

        clock.advance(Duration::minutes(31));
        assert_eq!(clone.now(), start + Duration::minutes(31));
    }
}
