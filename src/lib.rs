//! Oosan: a virtual salamander pet driven by calendar time
//!
//! The pet's well-being evolves with real-world elapsed days: its
//! condition decays when visits stop, it grows a little on each day it
//! is visited while healthy, and every state change produces a short
//! narrative line. The crate follows a "pure core, imperative shell"
//! design: the core transforms are pure functions over one `PetState`
//! record plus a caller-supplied calendar date and randomness source,
//! while persistence and the clock are injected behind small traits.
//!
//! # Core Concepts
//!
//! - **PetState**: the single persisted record (dates, size, condition, log)
//! - **Transforms**: visit reclassification, daily growth, log narration
//! - **Collaborators**: `PetStore`, `Clock`, and `Sampler`, each
//!   swappable for a deterministic test double
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use oosan::{activate, Condition, SequenceSampler};
//!
//! let mut sampler = SequenceSampler::new([0.5]);
//! let today = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
//!
//! // First run: nothing persisted yet, so a pet hatches today.
//! let pet = activate(None, today, &mut sampler);
//! assert_eq!(pet.condition, Condition::Healthy);
//! assert_eq!(pet.size_factor, 1.0);
//!
//! // Visited the next day: still healthy, and a little bigger.
//! let tomorrow = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
//! let pet = activate(Some(pet), tomorrow, &mut sampler);
//! assert!(pet.size_factor > 1.0);
//!
//! // A week of neglect is fatal.
//! let later = NaiveDate::from_ymd_opt(2026, 8, 13).unwrap();
//! let pet = activate(Some(pet), later, &mut sampler);
//! assert!(pet.condition.is_terminal());
//! ```

pub mod core;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    days_between, grow, narrate, record_visit, Condition, PetState, RandomSampler, Sampler,
    SequenceSampler,
};
pub use crate::session::{activate, Clock, FixedClock, Session, SystemClock};
pub use crate::store::{JsonFileStore, MemoryStore, PetStore, StoreError};
