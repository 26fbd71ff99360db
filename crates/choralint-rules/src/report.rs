//! Report types for structured analysis output.

use serde::{Deserialize, Serialize};

/// Severity level for findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Stylistic observations.
    Info,
    /// Breaks a convention; worth reviewing.
    Warning,
    /// Breaks a hard rule of the style.
    Error,
}

/// Category of a voice-leading finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Consecutive parallel perfect fifths or octaves.
    ParallelMotion,
    /// Leading tone not resolving to the tonic.
    LeadingTone,
    /// Forbidden or awkward melodic leap.
    MelodicLeap,
    /// Adjacent upper voices more than an octave apart.
    Spacing,
    /// Lower voice sounding above an upper voice.
    Crossing,
}

impl Category {
    /// Fixed display order of report buckets.
    pub const DISPLAY_ORDER: [Category; 5] = [
        Category::ParallelMotion,
        Category::LeadingTone,
        Category::MelodicLeap,
        Category::Spacing,
        Category::Crossing,
    ];

    /// Kebab-case label as used in serialized reports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::ParallelMotion => "parallel-motion",
            Category::LeadingTone => "leading-tone",
            Category::MelodicLeap => "melodic-leap",
            Category::Spacing => "spacing",
            Category::Crossing => "crossing",
        }
    }
}

/// A single voice-leading finding.
///
/// Pure output: never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Identifier of the rule that produced this finding
    /// (e.g., "harmony/parallel-fifths").
    pub rule_id: String,

    /// Report bucket this finding belongs to.
    pub category: Category,

    /// Severity level.
    pub severity: Severity,

    /// Measure number where the problem starts (one-based).
    pub measure: u32,

    /// Human-readable description of the problem.
    pub message: String,

    /// Display names of the part(s) involved, top voice first.
    pub parts: Vec<String>,

    /// Observed value, where the rule has one (e.g., the pitch a
    /// leading tone actually moved to).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,

    /// Expected value, where the rule has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
}

impl Finding {
    /// Creates a new finding with required fields.
    pub fn new(
        rule_id: impl Into<String>,
        category: Category,
        severity: Severity,
        measure: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            category,
            severity,
            measure,
            message: message.into(),
            parts: Vec::new(),
            actual: None,
            expected: None,
        }
    }

    /// Builder method to add an involved part name.
    pub fn with_part(mut self, part: impl Into<String>) -> Self {
        self.parts.push(part.into());
        self
    }

    /// Builder method to set the observed value.
    pub fn with_actual(mut self, value: impl Into<String>) -> Self {
        self.actual = Some(value.into());
        self
    }

    /// Builder method to set the expected value.
    pub fn with_expected(mut self, value: impl Into<String>) -> Self {
        self.expected = Some(value.into());
        self
    }
}

/// Per-category finding counts for an analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of parallel-motion findings.
    pub parallel_motion_count: usize,
    /// Number of leading-tone findings.
    pub leading_tone_count: usize,
    /// Number of melodic-leap findings.
    pub melodic_leap_count: usize,
    /// Number of spacing findings.
    pub spacing_count: usize,
    /// Number of crossing findings.
    pub crossing_count: usize,
}

impl ReportSummary {
    /// Total finding count across all categories.
    pub fn total(&self) -> usize {
        self.parallel_motion_count
            + self.leading_tone_count
            + self.melodic_leap_count
            + self.spacing_count
            + self.crossing_count
    }
}

/// Complete report for one analysis run, bucketed by category.
///
/// Buckets display in the fixed order of [`Category::DISPLAY_ORDER`];
/// within a bucket, findings keep the order their engine emitted them
/// in (measure-ascending per part pair).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// True if no findings at all were produced. A clean score is a
    /// distinguished positive outcome, not merely an empty list.
    pub clean: bool,
    /// Parallel perfect fifths and octaves.
    pub parallel_motion: Vec<Finding>,
    /// Unresolved leading tones.
    pub leading_tone: Vec<Finding>,
    /// Forbidden and awkward melodic leaps.
    pub melodic_leaps: Vec<Finding>,
    /// Excessive spacing between upper voices.
    pub spacing: Vec<Finding>,
    /// Voice crossings.
    pub crossing: Vec<Finding>,
    /// Summary statistics.
    pub summary: ReportSummary,
}

impl AnalysisReport {
    /// Creates a new empty (clean) report.
    pub fn new() -> Self {
        Self {
            clean: true,
            parallel_motion: Vec::new(),
            leading_tone: Vec::new(),
            melodic_leaps: Vec::new(),
            spacing: Vec::new(),
            crossing: Vec::new(),
            summary: ReportSummary::default(),
        }
    }

    /// Adds a finding to its category bucket and updates the summary.
    pub fn add_finding(&mut self, finding: Finding) {
        self.clean = false;
        match finding.category {
            Category::ParallelMotion => {
                self.summary.parallel_motion_count += 1;
                self.parallel_motion.push(finding);
            }
            Category::LeadingTone => {
                self.summary.leading_tone_count += 1;
                self.leading_tone.push(finding);
            }
            Category::MelodicLeap => {
                self.summary.melodic_leap_count += 1;
                self.melodic_leaps.push(finding);
            }
            Category::Spacing => {
                self.summary.spacing_count += 1;
                self.spacing.push(finding);
            }
            Category::Crossing => {
                self.summary.crossing_count += 1;
                self.crossing.push(finding);
            }
        }
    }

    /// Merges another report into this one, bucket by bucket.
    pub fn merge(&mut self, other: AnalysisReport) {
        for (_, findings) in other.into_categories() {
            for finding in findings {
                self.add_finding(finding);
            }
        }
    }

    /// The findings in one category bucket.
    pub fn findings_in(&self, category: Category) -> &[Finding] {
        match category {
            Category::ParallelMotion => &self.parallel_motion,
            Category::LeadingTone => &self.leading_tone,
            Category::MelodicLeap => &self.melodic_leaps,
            Category::Spacing => &self.spacing,
            Category::Crossing => &self.crossing,
        }
    }

    /// Iterates the buckets in display order.
    pub fn categories(&self) -> impl Iterator<Item = (Category, &[Finding])> {
        Category::DISPLAY_ORDER
            .iter()
            .map(|c| (*c, self.findings_in(*c)))
    }

    fn into_categories(self) -> impl Iterator<Item = (Category, Vec<Finding>)> {
        [
            (Category::ParallelMotion, self.parallel_motion),
            (Category::LeadingTone, self.leading_tone),
            (Category::MelodicLeap, self.melodic_leaps),
            (Category::Spacing, self.spacing),
            (Category::Crossing, self.crossing),
        ]
        .into_iter()
    }

    /// Returns the total finding count.
    pub fn total_findings(&self) -> usize {
        self.summary.total()
    }

    /// Returns true if any finding was produced.
    pub fn has_findings(&self) -> bool {
        !self.clean
    }
}

impl Default for AnalysisReport {
    fn default() -> Self {
        Self::new()
    }
}
