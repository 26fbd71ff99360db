//! Onset alignment of two independently-timed parts.
//!
//! Voices in a score move asynchronously; harmonic checks only make
//! sense at moments where two parts attack together. [`align`] turns
//! two parts into the ordered sequence of events sharing an exact
//! rational onset. Onsets present in only one part (oblique motion, or
//! one voice resting) simply produce no pair.

use choralint_score::{Beat, Part, Pitch};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How to reduce a chord (several events at one onset) to a single
/// representative pitch during alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordReduction {
    /// Take the first event encountered at the onset.
    #[default]
    First,
    /// Take the highest pitch at the onset.
    Highest,
}

/// One pitched event as seen by the aligner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedNote {
    /// The event's pitch.
    pub pitch: Pitch,
    /// The event's measure number.
    pub measure: u32,
}

/// Two events attacking at the same onset, one from each part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedPair {
    /// The shared onset.
    pub onset: Beat,
    /// Representative from the first part.
    pub a: AlignedNote,
    /// Representative from the second part.
    pub b: AlignedNote,
}

/// Aligns two parts on exactly equal onsets.
///
/// Returns one pair per distinct onset present in both parts, in
/// ascending onset order (parts are onset-ordered by precondition).
/// Rests never pair; chords reduce to one representative per the given
/// strategy. Lookup is hash-indexed, so the cost is linear in the two
/// part lengths.
pub fn align(part_a: &Part, part_b: &Part, reduction: ChordReduction) -> Vec<AlignedPair> {
    let index_b = onset_representatives(part_b, reduction);

    let mut pairs = Vec::new();
    for rep_a in onset_order(part_a, reduction) {
        if let Some(rep_b) = index_b.get(&rep_a.0) {
            pairs.push(AlignedPair {
                onset: rep_a.0,
                a: rep_a.1,
                b: *rep_b,
            });
        }
    }
    pairs
}

/// One representative per onset, in part order.
fn onset_order(part: &Part, reduction: ChordReduction) -> Vec<(Beat, AlignedNote)> {
    let mut reps: Vec<(Beat, AlignedNote)> = Vec::new();
    for event in part.pitched_events() {
        let Some(pitch) = event.pitch else { continue };
        let note = AlignedNote {
            pitch,
            measure: event.measure,
        };
        match reps.last_mut() {
            Some((onset, rep)) if *onset == event.onset => {
                if reduction == ChordReduction::Highest && note.pitch > rep.pitch {
                    *rep = note;
                }
            }
            _ => reps.push((event.onset, note)),
        }
    }
    reps
}

/// One representative per onset, hash-indexed.
fn onset_representatives(part: &Part, reduction: ChordReduction) -> HashMap<Beat, AlignedNote> {
    let mut index: HashMap<Beat, AlignedNote> = HashMap::new();
    for event in part.pitched_events() {
        let Some(pitch) = event.pitch else { continue };
        let note = AlignedNote {
            pitch,
            measure: event.measure,
        };
        index
            .entry(event.onset)
            .and_modify(|rep| {
                if reduction == ChordReduction::Highest && note.pitch > rep.pitch {
                    *rep = note;
                }
            })
            .or_insert(note);
    }
    index
}
