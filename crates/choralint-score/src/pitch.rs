//! Spelled pitch types: letter step, accidental, octave.
//!
//! Spelling is significant throughout choralint: `C#4` and `Db4` share a
//! MIDI number but are different pitches, and interval quality depends
//! on the letter distance as much as the semitone distance.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Letter name of a pitch (C D E F G A B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Step {
    /// Semitone offset of the natural letter within an octave (C = 0).
    pub fn semitones(self) -> i32 {
        match self {
            Step::C => 0,
            Step::D => 2,
            Step::E => 4,
            Step::F => 5,
            Step::G => 7,
            Step::A => 9,
            Step::B => 11,
        }
    }

    /// Diatonic degree of the letter within an octave (C = 0, B = 6).
    pub fn degree(self) -> i32 {
        match self {
            Step::C => 0,
            Step::D => 1,
            Step::E => 2,
            Step::F => 3,
            Step::G => 4,
            Step::A => 5,
            Step::B => 6,
        }
    }

    /// The letter character (`'C'` .. `'B'`).
    pub fn letter(self) -> char {
        match self {
            Step::C => 'C',
            Step::D => 'D',
            Step::E => 'E',
            Step::F => 'F',
            Step::G => 'G',
            Step::A => 'A',
            Step::B => 'B',
        }
    }

    /// Parses a letter character, case-insensitively.
    pub fn from_letter(c: char) -> Option<Step> {
        match c.to_ascii_uppercase() {
            'C' => Some(Step::C),
            'D' => Some(Step::D),
            'E' => Some(Step::E),
            'F' => Some(Step::F),
            'G' => Some(Step::G),
            'A' => Some(Step::A),
            'B' => Some(Step::B),
            _ => None,
        }
    }
}

/// Octave-independent pitch spelling: letter plus accidental.
///
/// Two pitch classes are equal iff letter and accidental both match;
/// this is the comparison used for leading-tone and tonic checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PitchClass {
    /// Letter name.
    pub step: Step,
    /// Accidental as a signed semitone offset (1 = sharp, -1 = flat).
    pub alter: i32,
}

impl PitchClass {
    /// Creates a pitch class from a letter and accidental.
    pub fn new(step: Step, alter: i32) -> Self {
        Self { step, alter }
    }

    /// Parses a spelled pitch-class name such as `"B"`, `"F#"`, or `"Bb"`.
    pub fn parse(s: &str) -> Option<PitchClass> {
        let mut chars = s.chars();
        let step = Step::from_letter(chars.next()?)?;
        let alter = parse_accidentals(chars.as_str())?;
        Some(PitchClass { step, alter })
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.step.letter(), accidental_string(self.alter))
    }
}

/// A spelled pitch: letter, accidental, and octave.
///
/// Equality is by spelling (letter + accidental + octave). Ordering is
/// by sounding height (MIDI number) with a diatonic tiebreak, so `B#4`
/// sorts below `C5` even though they share a MIDI number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pitch {
    /// Letter name.
    pub step: Step,
    /// Accidental as a signed semitone offset.
    pub alter: i32,
    /// Octave in scientific pitch notation (C4 = middle C).
    pub octave: i32,
}

impl Pitch {
    /// Creates a pitch from letter, accidental, and octave.
    pub fn new(step: Step, alter: i32, octave: i32) -> Self {
        Self {
            step,
            alter,
            octave,
        }
    }

    /// The octave-independent spelling of this pitch.
    pub fn pitch_class(&self) -> PitchClass {
        PitchClass::new(self.step, self.alter)
    }

    /// MIDI note number (C4 = 60).
    pub fn midi(&self) -> i32 {
        (self.octave + 1) * 12 + self.step.semitones() + self.alter
    }

    /// Letter steps above C0; the letter-distance measure used for
    /// interval classification.
    pub fn diatonic_index(&self) -> i32 {
        self.octave * 7 + self.step.degree()
    }

    /// Parses a spelled pitch name such as `"C4"`, `"F#3"`, or `"Bb-1"`.
    pub fn parse(s: &str) -> Option<Pitch> {
        let mut chars = s.chars();
        let step = Step::from_letter(chars.next()?)?;
        let rest = chars.as_str();
        let split = rest
            .find(|c: char| c.is_ascii_digit() || c == '-')
            .unwrap_or(rest.len());
        let alter = parse_accidentals(&rest[..split])?;
        let octave: i32 = rest[split..].parse().ok()?;
        Some(Pitch {
            step,
            alter,
            octave,
        })
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.step.letter(),
            accidental_string(self.alter),
            self.octave
        )
    }
}

impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pitch {
    fn cmp(&self, other: &Self) -> Ordering {
        // (midi, diatonic_index) determines the spelling, so this stays
        // consistent with the derived equality.
        self.midi()
            .cmp(&other.midi())
            .then(self.diatonic_index().cmp(&other.diatonic_index()))
    }
}

fn accidental_string(alter: i32) -> String {
    if alter >= 0 {
        "#".repeat(alter as usize)
    } else {
        "b".repeat(alter.unsigned_abs() as usize)
    }
}

fn parse_accidentals(s: &str) -> Option<i32> {
    let mut alter = 0i32;
    for c in s.chars() {
        match c {
            '#' => alter += 1,
            'b' => alter -= 1,
            _ => return None,
        }
    }
    Some(alter)
}
