//! choralint score model
//!
//! This crate provides the typed score representation consumed by the
//! choralint rule engine: spelled pitches, interval classification,
//! rational-time note events, parts, and score-level validation.
//!
//! Scores arrive already parsed (MusicXML front-ends and key estimation
//! live outside this workspace); the JSON form of [`Score`] is the
//! interface boundary those collaborators hand their output through.
//!
//! # Example
//!
//! ```
//! use choralint_score::{beat, NoteEvent, Part, Pitch, Score};
//!
//! let soprano = Part::named(
//!     "Soprano",
//!     vec![
//!         NoteEvent::note(Pitch::parse("G4").unwrap(), beat(0, 1), beat(1, 1), 1),
//!         NoteEvent::note(Pitch::parse("A4").unwrap(), beat(1, 1), beat(1, 1), 1),
//!     ],
//! );
//! let score = Score::new(vec![soprano]);
//! assert_eq!(score.parts[0].pitched_events().count(), 2);
//! ```
//!
//! # Modules
//!
//! - [`pitch`]: letter/accidental/octave pitch spelling
//! - [`interval`]: spelled interval classification
//! - [`event`]: rational beat positions and note events
//! - [`score`]: parts, key estimates, and the score value
//! - [`validation`]: structural score validation
//! - [`error`]: top-level error type

pub mod error;
pub mod event;
pub mod interval;
pub mod pitch;
pub mod score;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::ScoreError;
pub use event::{beat, Beat, NoteEvent};
pub use interval::{Interval, IntervalError, Quality};
pub use pitch::{Pitch, PitchClass, Step};
pub use score::{KeyEstimate, Part, Score};
pub use validation::{validate_score, ValidationError, ValidationResult, ValidationWarning};
