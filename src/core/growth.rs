//! Daily growth: a small multiplicative size increase while healthy.

use chrono::NaiveDate;

use super::pet::{Condition, PetState};
use super::sample::Sampler;

/// Guaranteed minimum daily growth rate above 1.0.
const GROWTH_BASE: f64 = 0.001;

/// Width of the uniform jitter added on top of the base rate.
const GROWTH_JITTER: f64 = 0.002;

/// Apply at most one calendar day's growth.
///
/// If growth was already credited for `today` the record passes through
/// unchanged. Otherwise the growth date is stamped to `today`, and a
/// healthy pet grows by a factor drawn uniformly from `[1.001, 1.003)`;
/// a weak or dead pet keeps its size. `size_factor` never decreases.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use oosan::{grow, PetState, SequenceSampler};
///
/// let yesterday = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();
/// let today = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
/// let mut sampler = SequenceSampler::new([0.0]);
///
/// let pet = grow(PetState::new(yesterday), today, &mut sampler);
/// assert!((pet.size_factor - 1.001).abs() < 1e-12); // minimum rate
/// assert_eq!(pet.last_growth_date, today);
/// ```
pub fn grow(mut state: PetState, today: NaiveDate, sampler: &mut impl Sampler) -> PetState {
    if state.last_growth_date == today {
        return state;
    }
    state.last_growth_date = today;

    if state.condition == Condition::Healthy {
        let r = sampler.sample();
        state.size_factor *= 1.0 + GROWTH_BASE + r * GROWTH_JITTER;
    }
    state
}
