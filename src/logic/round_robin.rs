//! Round-robin scheduling (circle method).

use crate::models::TournamentError;
use serde::Serialize;

/// A position in the circle: a real participant or the padding bye for odd counts.
#[derive(Clone, Debug, Eq, PartialEq)]
enum Slot<T> {
    Participant(T),
    Bye,
}

/// Two participants meeting in a round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Pairing<T> {
    pub round: u32,
    pub home: T,
    pub away: T,
}

/// One round of the schedule.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Round<T> {
    /// 1-based.
    pub number: u32,
    pub pairings: Vec<Pairing<T>>,
    /// Participant drawn against the bye (odd participant counts only).
    pub idle: Option<T>,
}

/// Build a schedule where every participant meets every other exactly once.
///
/// 1. Pad with a bye if the count is odd (N' = N + N mod 2).
/// 2. `home` is the first half, `away` the second half reversed; round r pairs home[i] with
///    away[i].
/// 3. Between rounds home[0] stays put and every other slot moves one step around the circle:
///    away[0] -> home[1] -> ... -> home[last] -> away[last] -> ... -> away[0].
///
/// Produces N' - 1 rounds. Participants are not inspected, so the caller must pass distinct ones.
pub fn generate_round_robin<T: Clone>(
    participants: &[T],
) -> Result<Vec<Round<T>>, TournamentError> {
    if participants.len() < 2 {
        return Err(TournamentError::NotEnoughParticipants {
            supplied: participants.len(),
        });
    }

    let mut slots: Vec<Slot<T>> = participants
        .iter()
        .cloned()
        .map(Slot::Participant)
        .collect();
    if slots.len() % 2 == 1 {
        slots.push(Slot::Bye);
    }

    let total = slots.len();
    let half = total / 2;
    // slots[1..] form the moving circle.
    let ring = total - 1;

    let rounds = (0..ring)
        .map(|r| {
            let number = r as u32 + 1;
            // Circle position k after r rotations.
            let at = |k: usize| &slots[1 + (k + ring - r) % ring];

            let mut pairings = Vec::with_capacity(half);
            let mut idle = None;
            for i in 0..half {
                let home = if i == 0 { &slots[0] } else { at(i - 1) };
                let away = at(ring - 1 - i);
                match (home, away) {
                    (Slot::Participant(h), Slot::Participant(a)) => pairings.push(Pairing {
                        round: number,
                        home: h.clone(),
                        away: a.clone(),
                    }),
                    (Slot::Participant(p), Slot::Bye) | (Slot::Bye, Slot::Participant(p)) => {
                        idle = Some(p.clone());
                    }
                    (Slot::Bye, Slot::Bye) => {}
                }
            }

            Round {
                number,
                pairings,
                idle,
            }
        })
        .collect();

    Ok(rounds)
}
