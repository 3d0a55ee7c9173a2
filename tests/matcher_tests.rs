use chandas::catalogue::{Catalogue, MeterClass, MeterEntry};
use chandas::matcher::{match_meter, Layout, MatchOutcome, MatchPolicy};
use chandas::trace::Trace;
use chandas::FinalSyllable;

mod common;

use common::{verse_of, weights, INDRAVAJRA_PADA, UPENDRAVAJRA_PADA};

fn run<'c>(catalogue: &'c Catalogue, padas: &[Vec<chandas::Weight>], policy: MatchPolicy) -> MatchOutcome<'c> {
    match_meter(catalogue, padas, &policy, &mut Trace::new())
}

fn identified(outcome: &MatchOutcome<'_>) -> (String, f64) {
    match outcome {
        MatchOutcome::Identified(c) => (c.meter.name().to_string(), c.score),
        other => panic!("expected a match, got {other:?}"),
    }
}

fn entry(name: &str, padas: &[&str], tolerant: bool) -> MeterEntry {
    MeterEntry {
        name: name.to_string(),
        padas: padas.iter().map(|p| p.to_string()).collect(),
        tolerant,
        description: String::new(),
    }
}

#[test]
fn exact_pattern_identifies_meter() {
    let outcome = run(Catalogue::builtin(), &verse_of(INDRAVAJRA_PADA), MatchPolicy::default());
    assert_eq!(identified(&outcome), ("Indravajrā".to_string(), 1.0));

    let outcome = run(Catalogue::builtin(), &verse_of(UPENDRAVAJRA_PADA), MatchPolicy::default());
    assert_eq!(identified(&outcome), ("Upendravajrā".to_string(), 1.0));
}

#[test]
fn mixed_vajra_padas_are_upajati() {
    let padas = vec![
        weights(INDRAVAJRA_PADA),
        weights(UPENDRAVAJRA_PADA),
        weights(INDRAVAJRA_PADA),
        weights(UPENDRAVAJRA_PADA),
    ];
    let outcome = run(Catalogue::builtin(), &padas, MatchPolicy::default());
    assert_eq!(identified(&outcome), ("Upajāti".to_string(), 1.0));
}

#[test]
fn higher_score_beats_declaration_order() {
    // Anuṣṭubh is declared first but scores 0.5 on an all-guru verse.
    let outcome = run(Catalogue::builtin(), &verse_of("GGGGGGGG"), MatchPolicy::default());
    assert_eq!(identified(&outcome), ("Vidyunmālā".to_string(), 1.0));
}

#[test]
fn ties_go_to_the_earlier_meter() {
    let catalogue = Catalogue::builtin()
        .with_extra(&[entry("First", &["GGGG"], true), entry("Second", &["GGGG"], true)])
        .unwrap();
    let outcome = run(&catalogue, &verse_of("GGGG"), MatchPolicy::default());
    assert_eq!(identified(&outcome).0, "First");
}

#[test]
fn tolerant_meter_accepts_partial_score() {
    // The 7th syllable should be laghu in the even pādas.
    let padas = verse_of("LLLLLGGL");
    let outcome = run(Catalogue::builtin(), &padas, MatchPolicy::default());
    match outcome {
        MatchOutcome::Identified(c) => {
            assert_eq!(c.meter.name(), "Anuṣṭubh");
            assert_eq!((c.matched, c.constrained), (10, 12));
            assert_eq!(c.mismatches.len(), 2);
            assert_eq!((c.mismatches[0].pada, c.mismatches[0].position), (2, 7));
        }
        other => panic!("expected Anuṣṭubh, got {other:?}"),
    }
}

#[test]
fn score_below_floor_is_not_accepted() {
    let policy = MatchPolicy {
        min_score: 0.75,
        ..MatchPolicy::default()
    };
    match run(Catalogue::builtin(), &verse_of("LLLLLLLL"), policy) {
        MatchOutcome::BelowFloor { best } => {
            assert_eq!(best.meter.name(), "Anuṣṭubh");
            assert_eq!(best.score, 0.5);
        }
        other => panic!("expected BelowFloor, got {other:?}"),
    }
}

#[test]
fn strict_meter_rejects_any_mismatch() {
    let catalogue = Catalogue::builtin().with_extra(&[entry("Quad", &["GGGG"], false)]).unwrap();
    let mut padas = verse_of("GGGG");
    padas[3] = weights("GGGL");
    match run(&catalogue, &padas, MatchPolicy::default()) {
        MatchOutcome::BelowFloor { best } => assert_eq!(best.meter.name(), "Quad"),
        other => panic!("expected BelowFloor, got {other:?}"),
    }
}

#[test]
fn count_mismatch_names_closest_meter() {
    let padas = vec![weights("LLLLLLL"), weights("LLLLLLLLL"), weights("LLLLLLLL"), weights("LLLLLLLL")];
    match run(Catalogue::builtin(), &padas, MatchPolicy::default()) {
        MatchOutcome::NoCountMatch { closest: Some(closest) } => {
            assert_eq!(closest.meter.name(), "Anuṣṭubh");
            assert_eq!(closest.distance, 2);
        }
        other => panic!("expected NoCountMatch, got {other:?}"),
    }
}

#[test]
fn half_verse_lines_split_into_padas() {
    let padas = vec![
        weights(&format!("{}{}", common::BG_2_47_PATTERNS[0], common::BG_2_47_PATTERNS[1])),
        weights(&format!("{}{}", common::BG_2_47_PATTERNS[2], common::BG_2_47_PATTERNS[3])),
    ];
    match run(Catalogue::builtin(), &padas, MatchPolicy::default()) {
        MatchOutcome::Identified(c) => {
            assert_eq!(c.meter.name(), "Anuṣṭubh");
            assert_eq!(c.layout, Layout::HalfVerseSplit);
            assert_eq!(c.score, 1.0);
        }
        other => panic!("expected Anuṣṭubh, got {other:?}"),
    }

    let no_split = MatchPolicy {
        split_half_verses: false,
        ..MatchPolicy::default()
    };
    assert!(matches!(
        run(Catalogue::builtin(), &padas, no_split),
        MatchOutcome::NoCountMatch { .. }
    ));
}

#[test]
fn split_pada_ends_follow_the_final_syllable_policy() {
    let line = weights(&format!("{}{}", "GGLGGLLGLGL", INDRAVAJRA_PADA));
    let padas = vec![line.clone(), line];

    match run(Catalogue::builtin(), &padas, MatchPolicy::default()) {
        MatchOutcome::Identified(c) => {
            assert_eq!(c.meter.name(), "Indravajrā");
            assert_eq!(c.layout, Layout::HalfVerseSplit);
            assert_eq!(c.score, 1.0);
        }
        other => panic!("expected Indravajrā, got {other:?}"),
    }

    let as_scanned = MatchPolicy {
        final_syllable: FinalSyllable::AsScanned,
        ..MatchPolicy::default()
    };
    match run(Catalogue::builtin(), &padas, as_scanned) {
        MatchOutcome::Identified(c) => {
            assert_eq!(c.meter.name(), "Indravajrā");
            let at: Vec<(usize, usize)> = c.mismatches.iter().map(|m| (m.pada, m.position)).collect();
            assert_eq!(at, vec![(1, 11), (3, 11)]);
        }
        other => panic!("expected Indravajrā, got {other:?}"),
    }
}

#[test]
fn split_step_precedes_the_count_filter() {
    let line = weights(&format!("{INDRAVAJRA_PADA}{INDRAVAJRA_PADA}"));
    let mut trace = Trace::new();
    match_meter(Catalogue::builtin(), &[line.clone(), line], &MatchPolicy::default(), &mut trace);
    assert_eq!(trace.steps()[0].step_name, "Half-Verse Split");
    assert!(trace.steps()[0].result.contains("Indravajrā"));
    assert_eq!(trace.steps()[1].step_name, "Syllable Count Filter");
}

#[test]
fn matcher_records_its_steps() {
    let mut trace = Trace::new();
    match_meter(Catalogue::builtin(), &verse_of(INDRAVAJRA_PADA), &MatchPolicy::default(), &mut trace);
    let names: Vec<&str> = trace.steps().iter().map(|s| s.step_name.as_str()).collect();
    assert_eq!(names, vec!["Syllable Count Filter", "Gaṇa Pattern Check"]);
    assert!(trace.steps()[1].result.contains("Indravajrā"));

    let mut trace = Trace::new();
    match_meter(Catalogue::builtin(), &[weights("GL")], &MatchPolicy::default(), &mut trace);
    assert_eq!(trace.steps().len(), 1);
}

// ============================================================================
// CATALOGUE
// ============================================================================

#[test]
fn builtin_catalogue_is_shared() {
    assert!(std::ptr::eq(Catalogue::builtin(), Catalogue::builtin()));
    assert_eq!(Catalogue::builtin().len(), 28);
}

#[test]
fn builtin_patterns_match_their_ganas() {
    let catalogue = Catalogue::builtin();
    let pattern = |name: &str| catalogue.find(name).unwrap().pattern_strings();
    assert_eq!(pattern("Mandākrāntā")[0], "GGGGLLLLLGGLGGLGG");
    assert_eq!(pattern("Vasantatilakā")[0], "GGLGLLLGLLGLGG");
    assert_eq!(pattern("Śārdūlavikrīḍita")[0], "GGGLLGLGLLLGGGLGGLG");
    assert_eq!(pattern("Anuṣṭubh"), vec!["xxxxLGGx", "xxxxLGLx", "xxxxLGGx", "xxxxLGLx"]);
    assert_eq!(pattern("Upajāti")[0], "xGLGGLLGLGG");
}

#[test]
fn find_accepts_ascii_aliases() {
    let catalogue = Catalogue::builtin();
    assert_eq!(catalogue.find("shardulavikridita").unwrap().name(), "Śārdūlavikrīḍita");
    assert_eq!(catalogue.find("Śālinī").unwrap().class(), MeterClass::Sama);
    assert!(catalogue.find("Gāyatrī").is_none());
}

#[test]
fn extra_meters_expand_their_patterns() {
    let catalogue = Catalogue::builtin()
        .with_extra(&[
            entry("Odd-Even", &["ssjg", "sbrlg"], true),
            entry("Literal", &["GG", "LL", "GL"], true),
        ])
        .unwrap();
    let odd_even = catalogue.find("Odd-Even").unwrap();
    assert_eq!(odd_even.class(), MeterClass::Ardhasama);
    assert_eq!(odd_even.syllable_counts(), vec![10, 11, 10, 11]);
    assert_eq!(catalogue.find("Literal").unwrap().syllable_counts(), vec![2, 2, 2]);
    // The built-in table is untouched.
    assert!(Catalogue::builtin().find("Odd-Even").is_none());
}

#[test]
fn malformed_extra_meters_are_rejected() {
    let builtin = Catalogue::builtin();
    assert!(builtin.with_extra(&[entry("Bad", &["ta qa"], true)]).is_err());
    assert!(builtin.with_extra(&[entry("Empty", &[], true)]).is_err());
    assert!(builtin.with_extra(&[entry("anushtubh", &["GGGG"], true)]).is_err());
}
