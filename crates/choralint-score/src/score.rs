//! Parts, key estimates, and the score value.

use crate::error::ScoreError;
use crate::event::NoteEvent;
use crate::pitch::PitchClass;
use serde::{Deserialize, Serialize};

/// One voice or instrument line: an onset-ordered sequence of events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Display name from the source score, if any.
    pub name: Option<String>,
    /// Events in onset order.
    pub events: Vec<NoteEvent>,
}

impl Part {
    /// Creates an unnamed part.
    pub fn new(events: Vec<NoteEvent>) -> Self {
        Self { name: None, events }
    }

    /// Creates a named part.
    pub fn named(name: impl Into<String>, events: Vec<NoteEvent>) -> Self {
        Self {
            name: Some(name.into()),
            events,
        }
    }

    /// The display name, falling back to a positional `"Voice N"` label
    /// (`position` is the part's zero-based index within the score).
    pub fn display_name(&self, position: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Voice {}", position + 1),
        }
    }

    /// Iterates the pitched events, skipping rests.
    pub fn pitched_events(&self) -> impl Iterator<Item = &NoteEvent> {
        self.events.iter().filter(|e| e.is_pitched())
    }
}

/// An externally estimated key: tonic and leading-tone pitch classes.
///
/// Key estimation lives outside this workspace; the estimate is passed
/// in as a plain value so the leading-tone rule has no ambient
/// dependency and is trivially testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEstimate {
    /// Tonic pitch class.
    pub tonic: PitchClass,
    /// Leading-tone pitch class (a semitone below the tonic).
    pub leading_tone: PitchClass,
}

/// A parsed score: parts in declared top-to-bottom order, plus an
/// optional key estimate.
///
/// The part order is load-bearing: spacing and crossing checks treat
/// `parts[i]` as sounding above `parts[i + 1]`. Callers must supply the
/// order declared by the source score, not an order inferred from pitch
/// content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Parts, top voice first.
    pub parts: Vec<Part>,
    /// Key estimate, if estimation succeeded.
    pub key: Option<KeyEstimate>,
}

impl Score {
    /// Creates a score with no key estimate.
    pub fn new(parts: Vec<Part>) -> Self {
        Self { parts, key: None }
    }

    /// Attaches a key estimate.
    pub fn with_key(mut self, key: KeyEstimate) -> Self {
        self.key = Some(key);
        self
    }

    /// Deserializes a score from its JSON interchange form.
    pub fn from_json(json: &str) -> Result<Score, ScoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the score to its JSON interchange form.
    pub fn to_json(&self) -> Result<String, ScoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
