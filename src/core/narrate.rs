//! Narrative log lines for the pet's current condition.
//!
//! Message pools are fixed string constants and never overlap. Selection
//! within a pool maps one uniform sample to an index; the dead and
//! first-day messages are deterministic and consume no sample.

use super::calendar::days_between;
use super::pet::{Condition, PetState};
use super::sample::Sampler;

/// Fixed message for the pet's first day.
pub const FIRST_DAY: &str =
    "The salamander peers out from under its rock, meeting you for the first time.";

/// Fixed terminal message once the pet is dead.
pub const DEPARTED: &str = "The salamander is gone. Only a still shape remains under the rock.";

/// Subdued messages for a weak pet.
pub const SUBDUED: [&str; 3] = [
    "The salamander hides under its rock and barely stirs.",
    "It ignores its food and stares at nothing in particular.",
    "The salamander's skin looks dull. It has missed you.",
];

/// Thriving messages for a healthy pet past its first day.
pub const THRIVING: [&str; 5] = [
    "The salamander glides a slow lap around its tank, fins rippling.",
    "It snaps up its food the moment it touches the water.",
    "The salamander rests its chin on the gravel and watches you.",
    "It nudges the glass as you approach, curious as ever.",
    "The salamander stretches out, looking a little bigger than yesterday.",
];

/// Generate the narrative line for the pet's current state.
///
/// Dead pets always get the fixed terminal message, weak pets one of
/// three subdued lines, and healthy pets one of five thriving lines.
/// On the pet's first day the fixed first-day message takes priority
/// over the thriving pool.
pub fn narrate(state: &PetState, sampler: &mut impl Sampler) -> String {
    match state.condition {
        Condition::Dead => DEPARTED.to_string(),
        Condition::Weak => pick(&SUBDUED, sampler).to_string(),
        Condition::Healthy => {
            if days_between(state.start_date, state.last_visit_date) == 0 {
                FIRST_DAY.to_string()
            } else {
                pick(&THRIVING, sampler).to_string()
            }
        }
    }
}

/// Map one uniform sample to a pool entry.
/// Clamped so a sample of exactly 1.0 from a misbehaving source cannot
/// index past the end.
fn pick<'a>(pool: &[&'a str], sampler: &mut impl Sampler) -> &'a str {
    let index = ((sampler.sample() * pool.len() as f64) as usize).min(pool.len() - 1);
    pool[index]
}
