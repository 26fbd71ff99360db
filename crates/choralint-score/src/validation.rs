//! Structural score validation.
//!
//! The rule engine assumes the preconditions checked here (onset order,
//! positive durations, sane measure numbers). External parsers are
//! expected to hand over valid scores; `validate_score` lets callers
//! verify that before analysis instead of debugging misaligned output.

use crate::event::Beat;
use crate::score::Score;
use std::fmt;

/// Error codes for score validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Score has no parts
    NoParts,
    /// E002: Event duration is not positive
    NonPositiveDuration,
    /// E003: Onsets decrease within a part
    DecreasingOnset,
    /// E004: Measure number is zero
    ZeroMeasureNumber,
    /// E005: Measure numbers decrease within a part
    DecreasingMeasure,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::NoParts => "E001",
            ErrorCode::NonPositiveDuration => "E002",
            ErrorCode::DecreasingOnset => "E003",
            ErrorCode::ZeroMeasureNumber => "E004",
            ErrorCode::DecreasingMeasure => "E005",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for score validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Part has no display name
    MissingPartName,
    /// W002: Score has no key estimate (leading-tone checks inactive)
    MissingKeyEstimate,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::MissingPartName => "W001",
            WarningCode::MissingKeyEstimate => "W002",
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional path into the score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Path to the problematic value (e.g., `parts[2].events[5]`).
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// Path to the problematic value.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation warning with a path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Result of score validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    fn from_parts(errors: Vec<ValidationError>, warnings: Vec<ValidationWarning>) -> Self {
        Self {
            ok: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// Validates the structural preconditions the rule engine relies on.
pub fn validate_score(score: &Score) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if score.parts.is_empty() {
        errors.push(ValidationError::new(
            ErrorCode::NoParts,
            "score has no parts",
        ));
    }

    if score.key.is_none() {
        warnings.push(ValidationWarning::new(
            WarningCode::MissingKeyEstimate,
            "score has no key estimate; leading-tone resolution will not be checked",
        ));
    }

    for (p, part) in score.parts.iter().enumerate() {
        if part.name.is_none() {
            warnings.push(ValidationWarning::with_path(
                WarningCode::MissingPartName,
                format!("part {} has no name; reports will label it \"Voice {}\"", p, p + 1),
                format!("parts[{}]", p),
            ));
        }

        let mut prev_onset: Option<Beat> = None;
        let mut prev_measure: Option<u32> = None;
        for (e, event) in part.events.iter().enumerate() {
            let path = format!("parts[{}].events[{}]", p, e);

            if event.duration <= Beat::from_integer(0) {
                errors.push(ValidationError::with_path(
                    ErrorCode::NonPositiveDuration,
                    format!("duration {} is not positive", event.duration),
                    path.clone(),
                ));
            }

            if let Some(prev) = prev_onset {
                if event.onset < prev {
                    errors.push(ValidationError::with_path(
                        ErrorCode::DecreasingOnset,
                        format!("onset {} decreases after {}", event.onset, prev),
                        path.clone(),
                    ));
                }
            }
            prev_onset = Some(event.onset);

            if event.measure == 0 {
                errors.push(ValidationError::with_path(
                    ErrorCode::ZeroMeasureNumber,
                    "measure numbers are one-based",
                    path.clone(),
                ));
            }
            if let Some(prev) = prev_measure {
                if event.measure < prev {
                    errors.push(ValidationError::with_path(
                        ErrorCode::DecreasingMeasure,
                        format!("measure {} decreases after {}", event.measure, prev),
                        path,
                    ));
                }
            }
            prev_measure = Some(event.measure);
        }
    }

    ValidationResult::from_parts(errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{beat, NoteEvent};
    use crate::pitch::{Pitch, PitchClass};
    use crate::score::{KeyEstimate, Part, Score};
    use pretty_assertions::assert_eq;

    fn note(name: &str, onset: i32, measure: u32) -> NoteEvent {
        NoteEvent::note(
            Pitch::parse(name).unwrap(),
            beat(onset, 1),
            beat(1, 1),
            measure,
        )
    }

    #[test]
    fn test_valid_score_passes() {
        let score = Score::new(vec![Part::named(
            "Soprano",
            vec![note("C4", 0, 1), note("D4", 1, 1)],
        )])
        .with_key(KeyEstimate {
            tonic: PitchClass::parse("C").unwrap(),
            leading_tone: PitchClass::parse("B").unwrap(),
        });

        let result = validate_score(&score);
        assert!(result.ok);
        assert_eq!(result.errors, vec![]);
        assert_eq!(result.warnings, vec![]);
    }

    #[test]
    fn test_empty_score_fails() {
        let result = validate_score(&Score::new(vec![]));
        assert!(!result.ok);
        assert_eq!(result.errors[0].code, ErrorCode::NoParts);
    }

    #[test]
    fn test_decreasing_onset_reported_with_path() {
        let score = Score::new(vec![Part::named(
            "Alto",
            vec![note("C4", 2, 1), note("D4", 1, 1)],
        )]);
        let result = validate_score(&score);
        assert!(!result.ok);
        assert_eq!(result.errors[0].code, ErrorCode::DecreasingOnset);
        assert_eq!(result.errors[0].path.as_deref(), Some("parts[0].events[1]"));
    }

    #[test]
    fn test_missing_key_and_name_warn() {
        let score = Score::new(vec![Part::new(vec![note("C4", 0, 1)])]);
        let result = validate_score(&score);
        assert!(result.ok);
        let codes: Vec<_> = result.warnings.iter().map(|w| w.code).collect();
        assert_eq!(
            codes,
            vec![WarningCode::MissingKeyEstimate, WarningCode::MissingPartName]
        );
    }

    #[test]
    fn test_zero_duration_and_measure() {
        let bad = NoteEvent::note(Pitch::parse("C4").unwrap(), beat(0, 1), beat(0, 1), 0);
        let result = validate_score(&Score::new(vec![Part::named("Bass", vec![bad])]));
        let codes: Vec<_> = result.errors.iter().map(|e| e.code).collect();
        assert_eq!(
            codes,
            vec![ErrorCode::NonPositiveDuration, ErrorCode::ZeroMeasureNumber]
        );
    }
}
