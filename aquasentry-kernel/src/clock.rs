use chrono::{Local, NaiveDateTime};

/// Source d'heure murale locale injectée dans le simulateur
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Horloge réelle du processus (fuseau local)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Horloge figée : tests et démos reproductibles
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
