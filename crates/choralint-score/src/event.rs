//! Rational beat positions and timed note events.

use crate::pitch::Pitch;
use num_rational::Rational32;
use serde::{Deserialize, Serialize};

/// A position or duration in quarter-note beats from the start of the
/// piece. Rational so that onset equality across parts is exact;
/// alignment never compares beats approximately.
pub type Beat = Rational32;

/// Convenience constructor for beat values (`beat(3, 2)` = a dotted quarter).
pub fn beat(numer: i32, denom: i32) -> Beat {
    Rational32::new(numer, denom)
}

/// One timed event in a part: a pitched note or a rest.
///
/// Immutable value. Rests carry no pitch but still occupy offset space,
/// which keeps onset alignment across parts correct while one voice is
/// silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEvent {
    /// Pitch of the event; `None` marks a rest.
    pub pitch: Option<Pitch>,
    /// Onset in quarter-note beats from the start of the piece.
    pub onset: Beat,
    /// Duration in quarter-note beats; always positive.
    pub duration: Beat,
    /// One-based measure number, non-decreasing within a part.
    pub measure: u32,
}

impl NoteEvent {
    /// Creates a pitched note event.
    pub fn note(pitch: Pitch, onset: Beat, duration: Beat, measure: u32) -> Self {
        Self {
            pitch: Some(pitch),
            onset,
            duration,
            measure,
        }
    }

    /// Creates a rest.
    pub fn rest(onset: Beat, duration: Beat, measure: u32) -> Self {
        Self {
            pitch: None,
            onset,
            duration,
            measure,
        }
    }

    /// True if this event is a rest.
    pub fn is_rest(&self) -> bool {
        self.pitch.is_none()
    }

    /// True if this event carries a pitch.
    pub fn is_pitched(&self) -> bool {
        self.pitch.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::Pitch;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_beat_equality_is_exact() {
        assert_eq!(beat(1, 2), beat(2, 4));
        assert_ne!(beat(1, 3), beat(33, 100));
    }

    #[test]
    fn test_rest_vs_note() {
        let rest = NoteEvent::rest(beat(0, 1), beat(1, 1), 1);
        assert!(rest.is_rest());
        assert!(!rest.is_pitched());

        let note = NoteEvent::note(Pitch::parse("C4").unwrap(), beat(1, 1), beat(1, 1), 1);
        assert!(note.is_pitched());
    }
}
