//! Session orchestration: the imperative shell around the pure core.
//!
//! Each application activation runs one pass: load the persisted record
//! (substituting a fresh one when it is absent or unreadable), apply the
//! condition and growth transforms, refresh the narrative log on the
//! first activation of the calendar day, and persist the result.

mod clock;

pub use clock::{Clock, FixedClock, SystemClock};

use chrono::NaiveDate;

use crate::core::{self, PetState, Sampler};
use crate::store::PetStore;

/// Run one activation pass over an already-loaded record.
///
/// An absent record means this is the pet's first run; a fresh one is
/// created with `today` as its start date. The narrative log is
/// refreshed only when the stored visit date differs from `today`
/// (or on the creation pass), so repeated activations within one
/// calendar day change neither the log nor the size.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use oosan::{activate, Condition, SequenceSampler};
///
/// let mut sampler = SequenceSampler::new([0.5]);
/// let today = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
///
/// // First run: no persisted record yet.
/// let pet = activate(None, today, &mut sampler);
/// assert_eq!(pet.start_date, today);
/// assert_eq!(pet.size_factor, 1.0);
///
/// // A week of neglect is fatal.
/// let next_week = NaiveDate::from_ymd_opt(2026, 8, 12).unwrap();
/// let pet = activate(Some(pet), next_week, &mut sampler);
/// assert_eq!(pet.condition, Condition::Dead);
/// ```
pub fn activate(
    loaded: Option<PetState>,
    today: NaiveDate,
    sampler: &mut impl Sampler,
) -> PetState {
    let (state, first_visit_today) = match loaded {
        Some(state) => {
            let first = state.last_visit_date != today;
            (state, first)
        }
        None => (PetState::new(today), true),
    };

    let state = core::record_visit(state, today);
    let mut state = core::grow(state, today, sampler);

    if first_visit_today {
        state.latest_log = core::narrate(&state, sampler);
    }
    state
}

/// Owns the three collaborators and runs full activation passes.
///
/// The session is the only owner of the pet's record while a pass runs;
/// the transforms themselves never touch storage, the clock, or any
/// shared state.
pub struct Session<St, Ck, Sm> {
    store: St,
    clock: Ck,
    sampler: Sm,
}

impl<St: PetStore, Ck: Clock, Sm: Sampler> Session<St, Ck, Sm> {
    pub fn new(store: St, clock: Ck, sampler: Sm) -> Self {
        Self {
            store,
            clock,
            sampler,
        }
    }

    /// Load, transform, persist, and return the pet's state.
    ///
    /// A record that is absent or fails to load is replaced by a fresh
    /// one, and a failed save leaves the session running on the
    /// in-memory state. Neither failure interrupts the pass.
    pub fn activate(&mut self) -> PetState {
        let today = self.clock.today();
        let loaded = self.store.load().ok().flatten();
        let state = activate(loaded, today, &mut self.sampler);
        self.store.save(&state).ok();
        state
    }

    /// The persistence collaborator.
    pub fn store(&self) -> &St {
        &self.store
    }
}
