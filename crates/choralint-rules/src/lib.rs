//! Voice-leading lint system for choralint.
//!
//! Runs classical four-part-writing checks over an immutable
//! [`Score`](choralint_score::Score): parallel perfect fifths and
//! octaves, awkward melodic leaps, unresolved leading tones, wide
//! upper-voice spacing, and voice crossing. Analysis is a pure function
//! of the score value; the same score always yields the same report.
//!
//! # Example
//!
//! ```
//! use choralint_rules::RuleRegistry;
//! use choralint_score::{beat, NoteEvent, Part, Pitch, Score};
//!
//! let note = |name: &str, onset: i32| {
//!     NoteEvent::note(Pitch::parse(name).unwrap(), beat(onset, 1), beat(1, 1), 1)
//! };
//! let score = Score::new(vec![
//!     Part::named("Soprano", vec![note("G4", 0), note("A4", 1)]),
//!     Part::named("Bass", vec![note("C4", 0), note("D4", 1)]),
//! ]);
//!
//! let registry = RuleRegistry::default_rules();
//! let outcome = registry.analyze(&score);
//! for (category, findings) in outcome.report.categories() {
//!     for finding in findings {
//!         eprintln!("[{}] m.{}: {}", category.label(), finding.measure, finding.message);
//!     }
//! }
//! ```

pub mod align;
pub mod registry;
pub mod report;
pub mod rules;

pub use align::{align, AlignedNote, AlignedPair, ChordReduction};
pub use registry::{AnalysisOutcome, Diagnostics, InactiveRule, RuleMetadata, RuleRegistry};
pub use report::{AnalysisReport, Category, Finding, ReportSummary, Severity};
pub use rules::{
    AnalysisContext, InactiveReason, RuleOutput, SkipReason, SkippedPair, VoiceLeadingRule,
};
