//! Spacing and voice-crossing rules.
//!
//! Both operate on vertically adjacent part pairs in the score's
//! declared top-to-bottom order. That order is a documented
//! precondition: inferring register from pitch content would silently
//! misbehave on crossed voices, exactly the condition being detected.

use crate::align::align;
use crate::report::{Category, Finding, Severity};
use crate::rules::{AnalysisContext, InactiveReason, RuleOutput, VoiceLeadingRule};
use choralint_score::Score;

/// Gaps wider than this (in semitones) between adjacent upper voices
/// are flagged.
const MAX_UPPER_VOICE_GAP: i32 = 12;

/// Rule: spacing/voice-crossing
/// Detects a lower-declared voice sounding above its upper neighbor.
pub struct VoiceCrossingRule;

impl VoiceLeadingRule for VoiceCrossingRule {
    fn id(&self) -> &'static str {
        "spacing/voice-crossing"
    }

    fn description(&self) -> &'static str {
        "Lower voice sounding above an upper voice"
    }

    fn category(&self) -> Category {
        Category::Crossing
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, score: &Score, ctx: &AnalysisContext) -> RuleOutput {
        if score.parts.len() < 2 {
            return RuleOutput::inactive(InactiveReason::NotEnoughParts);
        }

        let mut out = RuleOutput::new();
        for i in 0..score.parts.len() - 1 {
            let upper_name = score.parts[i].display_name(i);
            let lower_name = score.parts[i + 1].display_name(i + 1);

            for pair in align(&score.parts[i], &score.parts[i + 1], ctx.chord_reduction) {
                let (upper, lower) = (pair.a, pair.b);
                if lower.pitch > upper.pitch {
                    out.findings.push(
                        Finding::new(
                            self.id(),
                            self.category(),
                            self.default_severity(),
                            upper.measure,
                            format!(
                                "{} ({}) sounds below {} ({})",
                                upper_name, upper.pitch, lower_name, lower.pitch
                            ),
                        )
                        .with_part(upper_name.clone())
                        .with_part(lower_name.clone()),
                    );
                }
            }
        }

        out
    }
}

/// Rule: spacing/wide-upper-voices
/// Detects adjacent upper voices more than an octave apart.
///
/// Only the first two adjacent gaps are checked (soprano-alto and
/// alto-tenor in a four-part texture); the bottom gap is exempt, since
/// wider spacing above the bass is idiomatic.
pub struct SpacingRule;

impl VoiceLeadingRule for SpacingRule {
    fn id(&self) -> &'static str {
        "spacing/wide-upper-voices"
    }

    fn description(&self) -> &'static str {
        "Adjacent upper voices more than an octave apart"
    }

    fn category(&self) -> Category {
        Category::Spacing
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, score: &Score, ctx: &AnalysisContext) -> RuleOutput {
        if score.parts.len() < 2 {
            return RuleOutput::inactive(InactiveReason::NotEnoughParts);
        }

        let mut out = RuleOutput::new();
        for i in 0..score.parts.len() - 1 {
            if i >= 2 {
                break;
            }
            let upper_name = score.parts[i].display_name(i);
            let lower_name = score.parts[i + 1].display_name(i + 1);

            for pair in align(&score.parts[i], &score.parts[i + 1], ctx.chord_reduction) {
                let (upper, lower) = (pair.a, pair.b);
                // Raw MIDI distance; spelling does not matter for spacing.
                let gap = upper.pitch.midi() - lower.pitch.midi();
                if gap > MAX_UPPER_VOICE_GAP {
                    out.findings.push(
                        Finding::new(
                            self.id(),
                            self.category(),
                            self.default_severity(),
                            upper.measure,
                            format!(
                                "{} and {} are {} semitones apart (more than an octave)",
                                upper_name, lower_name, gap
                            ),
                        )
                        .with_part(upper_name.clone())
                        .with_part(lower_name.clone())
                        .with_actual(gap.to_string())
                        .with_expected(format!("<= {}", MAX_UPPER_VOICE_GAP)),
                    );
                }
            }
        }

        out
    }
}
