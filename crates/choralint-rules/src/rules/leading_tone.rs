//! Leading-tone resolution rule.

use crate::report::{Category, Finding, Severity};
use crate::rules::{AnalysisContext, InactiveReason, RuleOutput, VoiceLeadingRule};
use choralint_score::Score;

/// Rule: harmony/unresolved-leading-tone
/// Detects leading tones that do not resolve up to the tonic.
///
/// Driven entirely by the score's [`KeyEstimate`]; without one the rule
/// is inactive and produces no findings (key estimation failing is not
/// an analysis error). The check is strict by design: an inner-voice
/// descending resolution is still flagged, at warning severity.
///
/// [`KeyEstimate`]: choralint_score::KeyEstimate
pub struct LeadingToneResolutionRule;

impl VoiceLeadingRule for LeadingToneResolutionRule {
    fn id(&self) -> &'static str {
        "harmony/unresolved-leading-tone"
    }

    fn description(&self) -> &'static str {
        "Leading tone moving somewhere other than the tonic"
    }

    fn category(&self) -> Category {
        Category::LeadingTone
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, score: &Score, _ctx: &AnalysisContext) -> RuleOutput {
        let Some(key) = score.key else {
            return RuleOutput::inactive(InactiveReason::MissingKeyEstimate);
        };

        let mut out = RuleOutput::new();
        for (position, part) in score.parts.iter().enumerate() {
            let name = part.display_name(position);
            let notes: Vec<_> = part.pitched_events().collect();

            for window in notes.windows(2) {
                let (n1, n2) = (window[0], window[1]);
                let (Some(p1), Some(p2)) = (n1.pitch, n2.pitch) else {
                    continue;
                };

                if p1.pitch_class() == key.leading_tone && p2.pitch_class() != key.tonic {
                    out.findings.push(
                        Finding::new(
                            self.id(),
                            self.category(),
                            self.default_severity(),
                            n1.measure,
                            format!(
                                "leading tone {} in {} should resolve to {}, moves to {}",
                                p1,
                                name,
                                key.tonic,
                                p2.pitch_class(),
                            ),
                        )
                        .with_part(name.clone())
                        .with_actual(p2.pitch_class().to_string())
                        .with_expected(key.tonic.to_string()),
                    );
                }
            }
        }

        out
    }
}
