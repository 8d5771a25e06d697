//! Visit bookkeeping: reclassify the pet's condition from elapsed days.

use chrono::NaiveDate;

use super::calendar::days_between;
use super::pet::{Condition, PetState};

/// Record a visit on `today`.
///
/// The condition is recomputed purely from the number of days since the
/// last recorded visit; the prior condition value is never consulted, so
/// a weak pet visited again promptly returns to healthy. The visit date
/// is then stamped to `today` unconditionally.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use oosan::{record_visit, Condition, PetState};
///
/// let hatched = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
/// let today = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();
///
/// let pet = record_visit(PetState::new(hatched), today);
/// assert_eq!(pet.condition, Condition::Weak); // three days unattended
/// assert_eq!(pet.last_visit_date, today);
/// ```
pub fn record_visit(mut state: PetState, today: NaiveDate) -> PetState {
    let days_since_visit = days_between(state.last_visit_date, today);
    state.condition = Condition::from_days_since_visit(days_since_visit);
    state.last_visit_date = today;
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pet_last_visited(days_ago: i64, today: NaiveDate) -> PetState {
        let mut pet = PetState::new(today - Duration::days(days_ago + 10));
        pet.last_visit_date = today - Duration::days(days_ago);
        pet
    }

    #[test]
    fn recent_visit_stays_healthy() {
        let today = date(2026, 8, 5);
        for days_ago in 0..3 {
            let pet = record_visit(pet_last_visited(days_ago, today), today);
            assert_eq!(pet.condition, Condition::Healthy, "gap of {days_ago}");
        }
    }

    #[test]
    fn three_to_six_days_turns_weak() {
        let today = date(2026, 8, 5);
        for days_ago in 3..7 {
            let pet = record_visit(pet_last_visited(days_ago, today), today);
            assert_eq!(pet.condition, Condition::Weak, "gap of {days_ago}");
        }
    }

    #[test]
    fn seven_days_or_more_is_dead() {
        let today = date(2026, 8, 5);
        for days_ago in [7, 8, 30, 365] {
            let pet = record_visit(pet_last_visited(days_ago, today), today);
            assert_eq!(pet.condition, Condition::Dead, "gap of {days_ago}");
        }
    }

    #[test]
    fn visit_date_is_stamped_to_today() {
        let today = date(2026, 8, 5);
        let pet = record_visit(pet_last_visited(5, today), today);
        assert_eq!(pet.last_visit_date, today);
    }

    #[test]
    fn prior_condition_is_ignored() {
        // A pet marked weak but visited yesterday returns to healthy.
        let today = date(2026, 8, 5);
        let mut pet = pet_last_visited(1, today);
        pet.condition = Condition::Weak;
        let pet = record_visit(pet, today);
        assert_eq!(pet.condition, Condition::Healthy);

        // The literal threshold recomputation also applies to a dead pet
        // whose visit date was refreshed on a previous pass.
        let mut pet = pet_last_visited(0, today);
        pet.condition = Condition::Dead;
        let pet = record_visit(pet, today);
        assert_eq!(pet.condition, Condition::Healthy);
    }

    #[test]
    fn classification_ignores_date_direction() {
        // A future-dated visit field still classifies by magnitude.
        let today = date(2026, 8, 5);
        let mut pet = PetState::new(today);
        pet.last_visit_date = today + Duration::days(4);
        let pet = record_visit(pet, today);
        assert_eq!(pet.condition, Condition::Weak);
        assert_eq!(pet.last_visit_date, today);
    }
}
