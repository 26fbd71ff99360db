//! Parallel perfect-interval rules.
//!
//! Classical voice leading forbids two voices moving in parallel
//! perfect fifths or octaves. Both rules scan every unordered part pair
//! at its shared onsets and compare the harmonic interval class across
//! consecutive simultaneities.

use crate::align::align;
use crate::report::{Category, Finding, Severity};
use crate::rules::{
    AnalysisContext, InactiveReason, RuleOutput, SkippedPair, VoiceLeadingRule,
};
use choralint_score::{Interval, Score};

/// Rule: harmony/parallel-fifths
/// Detects consecutive parallel perfect fifths between any two parts.
pub struct ParallelFifthsRule;

impl VoiceLeadingRule for ParallelFifthsRule {
    fn id(&self) -> &'static str {
        "harmony/parallel-fifths"
    }

    fn description(&self) -> &'static str {
        "Consecutive parallel perfect fifths between two voices"
    }

    fn category(&self) -> Category {
        Category::ParallelMotion
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, score: &Score, ctx: &AnalysisContext) -> RuleOutput {
        check_parallel_interval(score, ctx, self.id(), self.default_severity(), "P5", "fifths")
    }
}

/// Rule: harmony/parallel-octaves
/// Detects consecutive parallel perfect octaves between any two parts.
pub struct ParallelOctavesRule;

impl VoiceLeadingRule for ParallelOctavesRule {
    fn id(&self) -> &'static str {
        "harmony/parallel-octaves"
    }

    fn description(&self) -> &'static str {
        "Consecutive parallel perfect octaves between two voices"
    }

    fn category(&self) -> Category {
        Category::ParallelMotion
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, score: &Score, ctx: &AnalysisContext) -> RuleOutput {
        check_parallel_interval(
            score,
            ctx,
            self.id(),
            self.default_severity(),
            "P8",
            "octaves",
        )
    }
}

/// Shared scan for both parallel rules.
///
/// Flags a consecutive pair of simultaneities when the harmonic
/// interval class repeats as `target` and **both** voices change pitch;
/// a held common tone under a moving voice is similar motion, not a
/// parallel, and stays silent.
fn check_parallel_interval(
    score: &Score,
    ctx: &AnalysisContext,
    rule_id: &'static str,
    severity: Severity,
    target: &str,
    label: &str,
) -> RuleOutput {
    let mut out = RuleOutput::new();

    if score.parts.len() < 2 {
        return RuleOutput::inactive(InactiveReason::NotEnoughParts);
    }

    for i in 0..score.parts.len() {
        for j in (i + 1)..score.parts.len() {
            let name_i = score.parts[i].display_name(i);
            let name_j = score.parts[j].display_name(j);

            let pairs = align(&score.parts[i], &score.parts[j], ctx.chord_reduction);
            for window in pairs.windows(2) {
                let (cur, nxt) = (&window[0], &window[1]);

                let interval_cur = match Interval::between(&cur.b.pitch, &cur.a.pitch) {
                    Ok(interval) => interval,
                    Err(e) => {
                        out.skipped.push(SkippedPair {
                            rule_id: rule_id.to_string(),
                            measure: cur.a.measure,
                            parts: vec![name_i.clone(), name_j.clone()],
                            reason: e.into(),
                        });
                        continue;
                    }
                };
                let interval_nxt = match Interval::between(&nxt.b.pitch, &nxt.a.pitch) {
                    Ok(interval) => interval,
                    Err(e) => {
                        out.skipped.push(SkippedPair {
                            rule_id: rule_id.to_string(),
                            measure: nxt.a.measure,
                            parts: vec![name_i.clone(), name_j.clone()],
                            reason: e.into(),
                        });
                        continue;
                    }
                };

                let both_move = cur.a.pitch != nxt.a.pitch && cur.b.pitch != nxt.b.pitch;
                if interval_cur.simple_name() == target
                    && interval_nxt.simple_name() == target
                    && both_move
                {
                    out.findings.push(
                        Finding::new(
                            rule_id,
                            Category::ParallelMotion,
                            severity,
                            cur.a.measure,
                            format!("parallel perfect {} between {} and {}", label, name_i, name_j),
                        )
                        .with_part(name_i.clone())
                        .with_part(name_j.clone()),
                    );
                }
            }
        }
    }

    out
}
