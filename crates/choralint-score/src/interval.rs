//! Spelled interval classification.
//!
//! An [`Interval`] keeps the raw signed semitone distance (for magnitude
//! checks such as the beyond-an-octave leap rule) alongside a simple
//! size and quality reduced to within one octave (for class checks such
//! as parallel perfect fifths). Quality is derived from the letter
//! distance and the semitone distance together, so `Ab4 -> B4` is an
//! augmented second while the enharmonic `Ab4 -> Cb5` is a minor third.

use crate::pitch::Pitch;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from interval classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntervalError {
    /// The spelling falls outside the simple quality range
    /// (doubly augmented/diminished or beyond).
    #[error("interval from {from} to {to} has no simple classification")]
    Unclassifiable {
        /// Starting pitch.
        from: Pitch,
        /// Ending pitch.
        to: Pitch,
    },
}

/// Quality of a simple interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Diminished,
    Minor,
    Major,
    Perfect,
    Augmented,
}

impl Quality {
    /// Conventional one-letter abbreviation (`d m M P A`).
    pub fn letter(self) -> char {
        match self {
            Quality::Diminished => 'd',
            Quality::Minor => 'm',
            Quality::Major => 'M',
            Quality::Perfect => 'P',
            Quality::Augmented => 'A',
        }
    }
}

/// A classified interval between two spelled pitches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Raw signed semitone distance (positive = ascending).
    pub semitones: i32,
    simple_number: i32,
    quality: Quality,
}

impl Interval {
    /// Classifies the interval from one pitch to another.
    ///
    /// Compound intervals reduce by whole octaves for the simple
    /// size/quality; an exact octave (or multiple) classifies as an 8,
    /// not a unison.
    pub fn between(from: &Pitch, to: &Pitch) -> Result<Interval, IntervalError> {
        let semitones = to.midi() - from.midi();
        let steps = (to.diatonic_index() - from.diatonic_index()).abs();
        let span = semitones.abs();

        let octaves = if steps == 0 { 0 } else { (steps - 1) / 7 };
        let simple_steps = steps - 7 * octaves;
        let simple_span = span - 12 * octaves;
        let number = simple_steps + 1;

        let quality = classify(number, simple_span).ok_or(IntervalError::Unclassifiable {
            from: *from,
            to: *to,
        })?;

        Ok(Interval {
            semitones,
            simple_number: number,
            quality,
        })
    }

    /// Simple size, 1..=8.
    pub fn number(&self) -> i32 {
        self.simple_number
    }

    /// Simple quality.
    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Conventional simple name, e.g. `"P5"`, `"A2"`, `"m7"`.
    pub fn simple_name(&self) -> String {
        format!("{}{}", self.quality.letter(), self.simple_number)
    }

    /// True for a perfect fifth (in any register).
    pub fn is_perfect_fifth(&self) -> bool {
        self.quality == Quality::Perfect && self.simple_number == 5
    }

    /// True for a perfect octave (or any whole-octave multiple).
    pub fn is_perfect_octave(&self) -> bool {
        self.quality == Quality::Perfect && self.simple_number == 8
    }

    /// True for an augmented second.
    pub fn is_augmented_second(&self) -> bool {
        self.quality == Quality::Augmented && self.simple_number == 2
    }

    /// True for a major or minor seventh.
    pub fn is_seventh(&self) -> bool {
        self.simple_number == 7 && matches!(self.quality, Quality::Major | Quality::Minor)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Quality for a simple size and its reduced semitone span, or `None`
/// outside the d..A range.
fn classify(number: i32, semitones: i32) -> Option<Quality> {
    let (base, perfect) = match number {
        1 => (0, true),
        2 => (1, false),
        3 => (3, false),
        4 => (5, true),
        5 => (7, true),
        6 => (8, false),
        7 => (10, false),
        8 => (12, true),
        _ => return None,
    };
    // `base` is the perfect span for perfect sizes, the minor span otherwise.
    if perfect {
        match semitones - base {
            -1 => Some(Quality::Diminished),
            0 => Some(Quality::Perfect),
            1 => Some(Quality::Augmented),
            _ => None,
        }
    } else {
        match semitones - base {
            -1 => Some(Quality::Diminished),
            0 => Some(Quality::Minor),
            1 => Some(Quality::Major),
            2 => Some(Quality::Augmented),
            _ => None,
        }
    }
}
