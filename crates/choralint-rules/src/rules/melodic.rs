//! Melodic leap rule.

use crate::report::{Category, Finding, Severity};
use crate::rules::{AnalysisContext, RuleOutput, SkippedPair, VoiceLeadingRule};
use choralint_score::{Interval, Score};

/// Rule: melody/awkward-leaps
/// Detects forbidden and awkward melodic leaps within a single voice.
///
/// Three mutually exclusive categories, checked in priority order so a
/// single leap never reports twice: an augmented second (forbidden),
/// anything wider than an octave (excessive), and a major or minor
/// seventh (difficult). An exact octave leap is permitted.
pub struct MelodicLeapsRule;

impl VoiceLeadingRule for MelodicLeapsRule {
    fn id(&self) -> &'static str {
        "melody/awkward-leaps"
    }

    fn description(&self) -> &'static str {
        "Augmented-second, beyond-an-octave, or seventh melodic leap"
    }

    fn category(&self) -> Category {
        Category::MelodicLeap
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, score: &Score, _ctx: &AnalysisContext) -> RuleOutput {
        let mut out = RuleOutput::new();

        for (position, part) in score.parts.iter().enumerate() {
            let name = part.display_name(position);
            let notes: Vec<_> = part.pitched_events().collect();

            for window in notes.windows(2) {
                let (n1, n2) = (window[0], window[1]);
                let (Some(p1), Some(p2)) = (n1.pitch, n2.pitch) else {
                    continue;
                };

                let interval = match Interval::between(&p1, &p2) {
                    Ok(interval) => interval,
                    Err(e) => {
                        out.skipped.push(SkippedPair {
                            rule_id: self.id().to_string(),
                            measure: n1.measure,
                            parts: vec![name.clone()],
                            reason: e.into(),
                        });
                        continue;
                    }
                };

                let problem = if interval.is_augmented_second() {
                    Some("forbidden leap (augmented second)")
                } else if interval.semitones.abs() > 12 {
                    Some("excessive leap (beyond an octave)")
                } else if interval.is_seventh() {
                    Some("difficult leap (seventh)")
                } else {
                    None
                };

                if let Some(problem) = problem {
                    out.findings.push(
                        Finding::new(
                            self.id(),
                            self.category(),
                            self.default_severity(),
                            n1.measure,
                            format!("{} in {}: {} to {}", problem, name, p1, p2),
                        )
                        .with_part(name.clone()),
                    );
                }
            }
        }

        out
    }
}
