use eyre::Result;
use serde::Deserialize;
use time::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// Day counts separating the urgency tiers.
///
/// `days >= low_urgency_days` is low urgency, `days <= high_urgency_days` is high
/// urgency (due today or overdue by default), anything in between is medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub low_urgency_days: i64,
    pub high_urgency_days: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            low_urgency_days: 10,
            high_urgency_days: 0,
        }
    }
}

impl Thresholds {
    pub fn classify(&self, days: i64) -> Urgency {
        if days >= self.low_urgency_days {
            Urgency::Low
        } else if days > self.high_urgency_days {
            Urgency::Medium
        } else {
            Urgency::High
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.low_urgency_days <= self.high_urgency_days {
            eyre::bail!(
                "low_urgency_days ({}) must be greater than high_urgency_days ({})",
                self.low_urgency_days,
                self.high_urgency_days
            );
        }
        Ok(())
    }
}

/// Whole calendar days from `today` until `due`, negative once overdue.
pub fn days_until(today: Date, due: Date) -> i64 {
    (due - today).whole_days()
}
