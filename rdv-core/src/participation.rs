//! Participant membership on an event.
//!
//! Purely local: the surface persists the updated sequence where it sees
//! fit; no network call happens here.

use crate::event::Event;
use crate::user::{Participant, User};

/// Whether `user` is recorded in the sequence, matching by user id or email.
pub fn is_participating(participants: &[Participant], user: &User) -> bool {
    participants.iter().any(|p| p.matches(user))
}

/// Toggle `user`'s membership in the event's participant sequence.
///
/// Leaving removes every entry matching the user by id or email (the
/// sequence may hold partial identities); joining appends one Participant
/// built from the user's identity fields. Returns whether the user
/// participates after the toggle.
pub fn toggle(event: &mut Event, user: &User) -> bool {
    if is_participating(&event.participants, user) {
        event.participants.retain(|p| !p.matches(user));
        false
    } else {
        event.participants.push(Participant::from_user(user));
        true
    }
}
