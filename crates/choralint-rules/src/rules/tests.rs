use super::*;
use crate::report::Category;
use choralint_score::{beat, KeyEstimate, NoteEvent, Part, Pitch, PitchClass, Score};
use pretty_assertions::assert_eq;

/// Builds a part from note names, one quarter note per beat.
fn line(name: &str, notes: &[&str]) -> Part {
    let events = notes
        .iter()
        .enumerate()
        .map(|(i, n)| {
            NoteEvent::note(
                Pitch::parse(n).unwrap(),
                beat(i as i32, 1),
                beat(1, 1),
                (i / 4 + 1) as u32,
            )
        })
        .collect();
    Part::named(name, events)
}

fn c_major_key() -> KeyEstimate {
    KeyEstimate {
        tonic: PitchClass::parse("C").unwrap(),
        leading_tone: PitchClass::parse("B").unwrap(),
    }
}

fn ctx() -> AnalysisContext {
    AnalysisContext::default()
}

// -------------------------------------------------------------------------
// parallel fifths / octaves
// -------------------------------------------------------------------------

#[test]
fn test_parallel_fifths_both_voices_moving() {
    let score = Score::new(vec![
        line("Soprano", &["G4", "A4"]),
        line("Bass", &["C4", "D4"]),
    ]);

    let out = ParallelFifthsRule.check(&score, &ctx());
    assert_eq!(out.findings.len(), 1);
    let finding = &out.findings[0];
    assert_eq!(finding.rule_id, "harmony/parallel-fifths");
    assert_eq!(finding.category, Category::ParallelMotion);
    assert_eq!(finding.measure, 1);
    assert_eq!(finding.parts, vec!["Soprano".to_string(), "Bass".to_string()]);
}

#[test]
fn test_stationary_voice_is_not_parallel() {
    // The fifth class repeats (C4-G4, then C3-G4 compound), but the
    // upper voice holds its tone: not a true parallel.
    let score = Score::new(vec![
        line("Soprano", &["G4", "G4"]),
        line("Bass", &["C4", "C3"]),
    ]);

    let out = ParallelFifthsRule.check(&score, &ctx());
    assert_eq!(out.findings, vec![]);
}

#[test]
fn test_repeated_fifth_is_not_parallel() {
    let score = Score::new(vec![
        line("Soprano", &["G4", "G4"]),
        line("Bass", &["C4", "C4"]),
    ]);

    let out = ParallelFifthsRule.check(&score, &ctx());
    assert_eq!(out.findings, vec![]);
}

#[test]
fn test_parallel_octaves_detected_across_registers() {
    // Two octaves apart still classifies as a perfect octave.
    let score = Score::new(vec![
        line("Soprano", &["C5", "D5"]),
        line("Bass", &["C3", "D3"]),
    ]);

    let out = ParallelOctavesRule.check(&score, &ctx());
    assert_eq!(out.findings.len(), 1);
    assert_eq!(out.findings[0].rule_id, "harmony/parallel-octaves");
}

#[test]
fn test_contrary_motion_between_fifths_still_flagged() {
    // P5 -> P5 with both voices moving is flagged even when the voices
    // move in opposite directions (antiparallel fifths).
    let score = Score::new(vec![
        line("Soprano", &["G4", "E5"]),
        line("Bass", &["C4", "A3"]),
    ]);

    let out = ParallelFifthsRule.check(&score, &ctx());
    assert_eq!(out.findings.len(), 1);
}

#[test]
fn test_diminished_fifth_not_flagged() {
    let score = Score::new(vec![
        line("Soprano", &["G4", "Ab4"]),
        line("Bass", &["C4", "D4"]),
    ]);

    // d5 at the second onset, so the class does not repeat.
    let out = ParallelFifthsRule.check(&score, &ctx());
    assert_eq!(out.findings, vec![]);
}

#[test]
fn test_single_part_is_inactive() {
    let score = Score::new(vec![line("Soprano", &["C4", "D4"])]);
    let out = ParallelFifthsRule.check(&score, &ctx());
    assert_eq!(out.inactive, Some(InactiveReason::NotEnoughParts));
    assert_eq!(out.findings, vec![]);
}

#[test]
fn test_unclassifiable_interval_is_skipped_with_reason() {
    // C4 against E##4 is a doubly augmented third: no simple class.
    let score = Score::new(vec![
        line("Soprano", &["E##4", "A4"]),
        line("Bass", &["C4", "D4"]),
    ]);

    let out = ParallelFifthsRule.check(&score, &ctx());
    assert_eq!(out.findings, vec![]);
    assert_eq!(out.skipped.len(), 1);
    let skip = &out.skipped[0];
    assert_eq!(skip.measure, 1);
    assert!(matches!(skip.reason, SkipReason::Interval(_)));
    // One bad pair never suppresses findings elsewhere.
    assert!(out.inactive.is_none());
}

// -------------------------------------------------------------------------
// melodic leaps
// -------------------------------------------------------------------------

#[test]
fn test_augmented_second_forbidden() {
    let score = Score::new(vec![line("Alto", &["Ab4", "B4"])]);
    let out = MelodicLeapsRule.check(&score, &ctx());
    assert_eq!(out.findings.len(), 1);
    assert!(out.findings[0].message.contains("augmented second"));
    assert_eq!(out.findings[0].parts, vec!["Alto".to_string()]);
}

#[test]
fn test_octave_leap_permitted() {
    let score = Score::new(vec![line("Tenor", &["C3", "C4"])]);
    let out = MelodicLeapsRule.check(&score, &ctx());
    assert_eq!(out.findings, vec![]);
}

#[test]
fn test_beyond_octave_flagged_once() {
    // 13 semitones: excessive, and only the excessive category fires.
    let score = Score::new(vec![line("Tenor", &["C3", "C#4"])]);
    let out = MelodicLeapsRule.check(&score, &ctx());
    assert_eq!(out.findings.len(), 1);
    assert!(out.findings[0].message.contains("beyond an octave"));
}

#[test]
fn test_seventh_leaps_difficult() {
    let major = Score::new(vec![line("Soprano", &["C4", "B4"])]);
    let out = MelodicLeapsRule.check(&major, &ctx());
    assert_eq!(out.findings.len(), 1);
    assert!(out.findings[0].message.contains("seventh"));

    let minor_descending = Score::new(vec![line("Soprano", &["C5", "D4"])]);
    let out = MelodicLeapsRule.check(&minor_descending, &ctx());
    assert_eq!(out.findings.len(), 1);
    assert!(out.findings[0].message.contains("seventh"));
}

#[test]
fn test_steps_and_small_leaps_clean() {
    let score = Score::new(vec![line("Soprano", &["C4", "D4", "F4", "A4", "C5"])]);
    let out = MelodicLeapsRule.check(&score, &ctx());
    assert_eq!(out.findings, vec![]);
}

#[test]
fn test_melodic_scan_crosses_rests() {
    // A rest between two notes does not end the melodic line.
    let events = vec![
        NoteEvent::note(Pitch::parse("C4").unwrap(), beat(0, 1), beat(1, 1), 1),
        NoteEvent::rest(beat(1, 1), beat(1, 1), 1),
        NoteEvent::note(Pitch::parse("B4").unwrap(), beat(2, 1), beat(1, 1), 1),
    ];
    let score = Score::new(vec![Part::named("Soprano", events)]);
    let out = MelodicLeapsRule.check(&score, &ctx());
    assert_eq!(out.findings.len(), 1);
}

// -------------------------------------------------------------------------
// leading tone
// -------------------------------------------------------------------------

#[test]
fn test_leading_tone_resolving_up_is_clean() {
    let score =
        Score::new(vec![line("Soprano", &["B4", "C5"])]).with_key(c_major_key());
    let out = LeadingToneResolutionRule.check(&score, &ctx());
    assert_eq!(out.findings, vec![]);
}

#[test]
fn test_unresolved_leading_tone_flagged() {
    let score =
        Score::new(vec![line("Soprano", &["B4", "A4"])]).with_key(c_major_key());
    let out = LeadingToneResolutionRule.check(&score, &ctx());
    assert_eq!(out.findings.len(), 1);
    let finding = &out.findings[0];
    assert_eq!(finding.expected.as_deref(), Some("C"));
    assert_eq!(finding.actual.as_deref(), Some("A"));
}

#[test]
fn test_tonic_in_any_octave_resolves() {
    // Pitch-class comparison: resolving down an octave still counts.
    let score =
        Score::new(vec![line("Bass", &["B2", "C3"])]).with_key(c_major_key());
    let out = LeadingToneResolutionRule.check(&score, &ctx());
    assert_eq!(out.findings, vec![]);
}

#[test]
fn test_flat_seven_is_not_the_leading_tone() {
    // Bb is a different pitch class from B; spelling matters.
    let score =
        Score::new(vec![line("Soprano", &["Bb4", "A4"])]).with_key(c_major_key());
    let out = LeadingToneResolutionRule.check(&score, &ctx());
    assert_eq!(out.findings, vec![]);
}

#[test]
fn test_missing_key_estimate_is_inactive() {
    let score = Score::new(vec![line("Soprano", &["B4", "A4"])]);
    let out = LeadingToneResolutionRule.check(&score, &ctx());
    assert_eq!(out.findings, vec![]);
    assert_eq!(out.inactive, Some(InactiveReason::MissingKeyEstimate));
}

// -------------------------------------------------------------------------
// spacing and crossing
// -------------------------------------------------------------------------

fn four_part(s: &[&str], a: &[&str], t: &[&str], b: &[&str]) -> Score {
    Score::new(vec![
        line("Soprano", s),
        line("Alto", a),
        line("Tenor", t),
        line("Bass", b),
    ])
}

#[test]
fn test_wide_soprano_alto_gap_flagged() {
    let score = four_part(&["C6"], &["C4"], &["G3"], &["C3"]);
    let out = SpacingRule.check(&score, &ctx());
    assert_eq!(out.findings.len(), 1);
    let finding = &out.findings[0];
    assert_eq!(
        finding.parts,
        vec!["Soprano".to_string(), "Alto".to_string()]
    );
    assert_eq!(finding.actual.as_deref(), Some("24"));
}

#[test]
fn test_tenor_bass_gap_exempt() {
    // Two octaves between tenor and bass is idiomatic.
    let score = four_part(&["C5"], &["G4"], &["E4"], &["E2"]);
    let out = SpacingRule.check(&score, &ctx());
    assert_eq!(out.findings, vec![]);
}

#[test]
fn test_exact_octave_spacing_allowed() {
    let score = four_part(&["C5"], &["C4"], &["G3"], &["C3"]);
    let out = SpacingRule.check(&score, &ctx());
    assert_eq!(out.findings, vec![]);
}

#[test]
fn test_voice_crossing_flagged() {
    let score = four_part(&["C4"], &["E4"], &["G3"], &["C3"]);
    let out = VoiceCrossingRule.check(&score, &ctx());
    assert_eq!(out.findings.len(), 1);
    let finding = &out.findings[0];
    assert_eq!(
        finding.parts,
        vec!["Soprano".to_string(), "Alto".to_string()]
    );
    assert!(finding.message.contains("sounds below"));
}

#[test]
fn test_unison_between_voices_is_not_crossing() {
    let score = four_part(&["C4"], &["C4"], &["G3"], &["C3"]);
    let out = VoiceCrossingRule.check(&score, &ctx());
    assert_eq!(out.findings, vec![]);
}

#[test]
fn test_crossing_checked_on_all_adjacent_pairs() {
    // Bass above tenor: the bottom pair is exempt from spacing but not
    // from crossing.
    let score = four_part(&["C5"], &["G4"], &["E3"], &["G3"]);
    let out = VoiceCrossingRule.check(&score, &ctx());
    assert_eq!(out.findings.len(), 1);
    assert_eq!(
        out.findings[0].parts,
        vec!["Tenor".to_string(), "Bass".to_string()]
    );
}

#[test]
fn test_spacing_rules_inactive_below_two_parts() {
    let score = Score::new(vec![line("Soprano", &["C4"])]);
    assert_eq!(
        SpacingRule.check(&score, &ctx()).inactive,
        Some(InactiveReason::NotEnoughParts)
    );
    assert_eq!(
        VoiceCrossingRule.check(&score, &ctx()).inactive,
        Some(InactiveReason::NotEnoughParts)
    );
}
