//! Rule registry: runs the voice-leading rules over a score.

use crate::report::{AnalysisReport, Category, Severity};
use crate::rules::{self, AnalysisContext, InactiveReason, SkippedPair, VoiceLeadingRule};
use choralint_score::Score;
use std::collections::HashSet;

/// Registry of all available voice-leading rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn VoiceLeadingRule>>,
    disabled_rules: HashSet<String>,
    enabled_only: Option<HashSet<String>>,
}

impl RuleRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            disabled_rules: HashSet::new(),
            enabled_only: None,
        }
    }

    /// Creates a registry with all default rules registered, in
    /// category display order.
    pub fn default_rules() -> Self {
        let mut registry = Self::new();
        for rule in rules::all_rules() {
            registry.register(rule);
        }
        registry
    }

    /// Registers a new rule.
    pub fn register(&mut self, rule: Box<dyn VoiceLeadingRule>) {
        self.rules.push(rule);
    }

    /// Disables a rule by ID.
    pub fn disable_rule(&mut self, rule_id: &str) {
        self.disabled_rules.insert(rule_id.to_string());
    }

    /// Enables only the specified rules (disables all others).
    pub fn enable_only(&mut self, rule_ids: &[&str]) {
        self.enabled_only = Some(rule_ids.iter().map(|s| s.to_string()).collect());
    }

    /// Returns all registered rules.
    pub fn rules(&self) -> &[Box<dyn VoiceLeadingRule>] {
        &self.rules
    }

    /// Returns rule metadata for documentation/introspection.
    pub fn rule_metadata(&self) -> Vec<RuleMetadata> {
        self.rules
            .iter()
            .map(|r| RuleMetadata {
                id: r.id().to_string(),
                description: r.description().to_string(),
                category: r.category(),
                severity: r.default_severity(),
            })
            .collect()
    }

    /// Returns the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Checks if a rule is enabled.
    fn is_rule_enabled(&self, rule_id: &str) -> bool {
        if self.disabled_rules.contains(rule_id) {
            return false;
        }
        if let Some(ref enabled) = self.enabled_only {
            return enabled.contains(rule_id);
        }
        true
    }

    /// Runs all enabled rules over the score with default settings.
    pub fn analyze(&self, score: &Score) -> AnalysisOutcome {
        self.analyze_with(score, &AnalysisContext::default())
    }

    /// Runs all enabled rules over the score.
    ///
    /// The analysis is a pure function of the score value: no rule
    /// mutates the score or shares state with another, and the same
    /// input always yields an identical outcome. Rules that cannot run
    /// (too few parts, missing key estimate) and consecutive pairs that
    /// could not be evaluated are surfaced through [`Diagnostics`], so
    /// partial analyses are never mistaken for clean ones.
    pub fn analyze_with(&self, score: &Score, ctx: &AnalysisContext) -> AnalysisOutcome {
        let mut report = AnalysisReport::new();
        let mut diagnostics = Diagnostics::default();

        for rule in &self.rules {
            if !self.is_rule_enabled(rule.id()) {
                continue;
            }

            let output = rule.check(score, ctx);
            for finding in output.findings {
                report.add_finding(finding);
            }
            diagnostics.skipped.extend(output.skipped);
            if let Some(reason) = output.inactive {
                diagnostics.inactive.push(InactiveRule {
                    rule_id: rule.id().to_string(),
                    reason,
                });
            }
        }

        AnalysisOutcome {
            report,
            diagnostics,
        }
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::default_rules()
    }
}

/// Metadata about a rule for documentation/introspection.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RuleMetadata {
    /// Rule identifier.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Report bucket the rule's findings go to.
    pub category: Category,
    /// Default severity level.
    pub severity: Severity,
}

/// A rule that could not run for this score, with its reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InactiveRule {
    /// Rule identifier.
    pub rule_id: String,
    /// Why the rule did not run.
    pub reason: InactiveReason,
}

/// Side channel for everything that is not a finding: skipped pairs and
/// rules that could not run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    /// Consecutive pairs the engines could not evaluate.
    pub skipped: Vec<SkippedPair>,
    /// Rules that produced no findings because they could not run.
    pub inactive: Vec<InactiveRule>,
}

/// Report plus diagnostics for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// The category-bucketed findings.
    pub report: AnalysisReport,
    /// Skips and inactive rules.
    pub diagnostics: Diagnostics,
}
