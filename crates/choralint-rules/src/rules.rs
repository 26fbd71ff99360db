//! Rule trait and the voice-leading rule modules.

use crate::align::ChordReduction;
use crate::report::{Category, Finding, Severity};
use choralint_score::{IntervalError, Score};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod harmonic;
pub mod leading_tone;
pub mod melodic;
pub mod spacing;

#[cfg(test)]
mod tests;

pub use harmonic::{ParallelFifthsRule, ParallelOctavesRule};
pub use leading_tone::LeadingToneResolutionRule;
pub use melodic::MelodicLeapsRule;
pub use spacing::{SpacingRule, VoiceCrossingRule};

/// Configuration shared by every rule during one analysis pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisContext {
    /// How to reduce a chord to one representative when aligning a
    /// polyphonic onset against another part.
    pub chord_reduction: ChordReduction,
}

/// A voice-leading rule that can analyze a score and report findings.
pub trait VoiceLeadingRule: Send + Sync {
    /// Unique identifier (e.g., "harmony/parallel-fifths").
    fn id(&self) -> &'static str;

    /// Human-readable description.
    fn description(&self) -> &'static str;

    /// Report bucket this rule's findings belong to.
    fn category(&self) -> Category;

    /// Default severity for this rule's findings.
    fn default_severity(&self) -> Severity;

    /// Run the check over the immutable score.
    fn check(&self, score: &Score, ctx: &AnalysisContext) -> RuleOutput;
}

/// Why a consecutive pair of events could not be evaluated.
///
/// Skips are recorded instead of silently dropped so callers and tests
/// can see exactly what the engines passed over and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// The interval between two pitches has no simple classification.
    #[error("interval could not be classified: {0}")]
    Interval(#[from] IntervalError),
}

/// A consecutive pair an engine skipped, with its reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPair {
    /// Identifier of the rule that skipped the pair.
    pub rule_id: String,
    /// Measure number of the pair's first event.
    pub measure: u32,
    /// Display names of the part(s) involved.
    pub parts: Vec<String>,
    /// Why the pair was skipped.
    pub reason: SkipReason,
}

/// Why a rule produced no findings at all for this score.
///
/// Distinct from a clean result: the rule could not run, and callers
/// should surface that as an informational state rather than a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InactiveReason {
    /// The score carries no key estimate.
    MissingKeyEstimate,
    /// Fewer than two parts; nothing to compare.
    NotEnoughParts,
}

/// Everything one rule produced for one score.
#[derive(Debug, Default)]
pub struct RuleOutput {
    /// Findings, in emission order.
    pub findings: Vec<Finding>,
    /// Pairs the rule could not evaluate.
    pub skipped: Vec<SkippedPair>,
    /// Set when the rule could not run at all.
    pub inactive: Option<InactiveReason>,
}

impl RuleOutput {
    /// Creates an empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an output marking the rule as inactive.
    pub fn inactive(reason: InactiveReason) -> Self {
        Self {
            inactive: Some(reason),
            ..Self::default()
        }
    }
}

/// Returns all voice-leading rules, in category display order.
pub fn all_rules() -> Vec<Box<dyn VoiceLeadingRule>> {
    vec![
        // parallel-motion
        Box::new(ParallelFifthsRule),
        Box::new(ParallelOctavesRule),
        // leading-tone
        Box::new(LeadingToneResolutionRule),
        // melodic-leap
        Box::new(MelodicLeapsRule),
        // spacing, crossing
        Box::new(SpacingRule),
        Box::new(VoiceCrossingRule),
    ]
}
