//! The pet's state record and condition tiers.
//!
//! `PetState` is the single persisted entity of the engine. Its serde
//! layout is the external storage contract: six camelCase fields, dates
//! as `YYYY-MM-DD` strings, condition as a lowercase tag.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::narrate;

/// Days since the last visit at which the pet turns weak.
const WEAK_AFTER_DAYS: u64 = 3;

/// Days since the last visit at which the pet dies.
const DEAD_AFTER_DAYS: u64 = 7;

/// The pet's three-valued health tier.
///
/// The tier is recomputed each session purely from the number of days
/// elapsed since the last visit; it carries no memory of its own.
///
/// # Example
///
/// ```rust
/// use oosan::Condition;
///
/// assert_eq!(Condition::from_days_since_visit(0), Condition::Healthy);
/// assert_eq!(Condition::from_days_since_visit(3), Condition::Weak);
/// assert_eq!(Condition::from_days_since_visit(7), Condition::Dead);
/// assert!(Condition::Dead.is_terminal());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// Visited within the last two days.
    Healthy,
    /// Between three and six days without a visit.
    Weak,
    /// Seven or more days without a visit.
    Dead,
}

impl Condition {
    /// Classify from the number of days elapsed since the last visit.
    pub fn from_days_since_visit(days: u64) -> Self {
        if days >= DEAD_AFTER_DAYS {
            Self::Dead
        } else if days >= WEAK_AFTER_DAYS {
            Self::Weak
        } else {
            Self::Healthy
        }
    }

    /// Get the condition's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Weak => "weak",
            Self::Dead => "dead",
        }
    }

    /// Check if this is the terminal tier.
    ///
    /// No transform grows or narrates a dead pet; recovery only happens
    /// through the visit-date recomputation on a later pass.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Dead)
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The sole persisted record: one salamander's life so far.
///
/// All fields are owned values; the engine's transforms take the record
/// by value and return the evolved copy, so no hidden shared state
/// exists anywhere in the pipeline.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use oosan::{Condition, PetState};
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
/// let pet = PetState::new(today);
///
/// assert_eq!(pet.start_date, today);
/// assert_eq!(pet.last_visit_date, today);
/// assert_eq!(pet.last_growth_date, today);
/// assert_eq!(pet.size_factor, 1.0);
/// assert_eq!(pet.condition, Condition::Healthy);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetState {
    /// Date the pet was created; immutable thereafter.
    pub start_date: NaiveDate,
    /// Last date the application was opened.
    pub last_visit_date: NaiveDate,
    /// Last date growth was applied; advances at most once per day.
    pub last_growth_date: NaiveDate,
    /// Relative size, starting at 1.0 and never decreasing.
    pub size_factor: f64,
    /// Health tier derived from days since the last visit.
    pub condition: Condition,
    /// Most recently generated narrative line, display-only.
    pub latest_log: String,
}

impl PetState {
    /// Create the record for a pet hatched on `today`.
    ///
    /// All three dates start equal to the creation date and the log is
    /// seeded with the fixed first-day message.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            start_date: today,
            last_visit_date: today,
            last_growth_date: today,
            size_factor: 1.0,
            condition: Condition::Healthy,
            latest_log: narrate::FIRST_DAY.to_string(),
        }
    }
}
