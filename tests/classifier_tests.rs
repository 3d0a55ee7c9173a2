use chandas::akshara::segment;
use chandas::weight::{classify, pattern_string, Scansion};
use chandas::{FinalSyllable, Weight, WeightRule};

mod common;

fn scan(pada: &str, policy: FinalSyllable) -> Vec<Scansion> {
    classify(&segment(pada).unwrap(), policy).unwrap()
}

fn pattern(pada: &str, policy: FinalSyllable) -> String {
    pattern_string(scan(pada, policy).into_iter().map(|s| s.weight))
}

#[test]
fn short_vowel_before_conjunct_is_guru() {
    let scansion = scan("अग्नि", FinalSyllable::AsScanned);
    assert_eq!(scansion[0].weight, Weight::Guru);
    assert_eq!(scansion[0].rule, WeightRule::Conjunct);
}

#[test]
fn short_vowel_before_single_consonant_is_laghu() {
    let scansion = scan("कमल", FinalSyllable::AsScanned);
    assert!(scansion.iter().all(|s| s.weight == Weight::Laghu));
    assert!(scansion.iter().all(|s| s.rule == WeightRule::Short));
}

#[test]
fn long_vowels_and_marks_are_guru() {
    let scansion = scan("रामः संस्कृतं", FinalSyllable::AsScanned);
    let rules: Vec<WeightRule> = scansion.iter().map(|s| s.rule).collect();
    assert_eq!(
        rules,
        vec![
            WeightRule::LongVowel,
            WeightRule::TrailingMark,
            WeightRule::TrailingMark,
            WeightRule::Short,
            WeightRule::TrailingMark,
        ]
    );
}

#[test]
fn conjunct_crosses_word_boundaries() {
    // त before स्थ across the space.
    assert_eq!(pattern("त स्थ", FinalSyllable::AsScanned), "GL");
}

#[test]
fn coda_counts_toward_the_conjunct() {
    // कक् absorbs the half क; the following अ has no onset.
    assert_eq!(pattern("कक् अ", FinalSyllable::AsScanned), "LL");
    assert_eq!(pattern("कक् त", FinalSyllable::AsScanned), "GL");
}

#[test]
fn candrabindu_adds_no_weight() {
    assert_eq!(pattern("हँस", FinalSyllable::AsScanned), "LL");
}

#[test]
fn final_syllable_counts_as_guru_by_default() {
    let scansion = scan("कमल", FinalSyllable::default());
    assert_eq!(scansion[2].weight, Weight::Guru);
    assert_eq!(scansion[2].rule, WeightRule::PadaFinal);
    assert_eq!(pattern("कमल", FinalSyllable::Guru), "LLG");
}

#[test]
fn final_syllable_as_scanned_keeps_its_length() {
    assert_eq!(pattern("कमल", FinalSyllable::AsScanned), "LLL");
    assert_eq!(pattern("मा फलेषु कदाचन", FinalSyllable::AsScanned), "GLGLLGLL");
    assert_eq!(pattern("मा फलेषु कदाचन", FinalSyllable::Guru), "GLGLLGLG");
}

#[test]
fn long_final_syllable_ignores_the_policy() {
    for policy in [FinalSyllable::Guru, FinalSyllable::AsScanned] {
        assert_eq!(scan("रामा", policy)[1].rule, WeightRule::LongVowel);
    }
}

#[test]
fn known_padas_scan_as_expected() {
    let padas = common::BG_2_47.lines().map(|l| l.trim_end_matches(['।', '॥', ' ']));
    for (pada, expected) in padas.zip(common::BG_2_47_PATTERNS) {
        assert_eq!(pattern(pada, FinalSyllable::Guru), expected, "{pada}");
    }
}

#[test]
fn one_weight_per_akshara() {
    for pada in ["कर्मण्येवाधिकारस्ते", "वाक्", "ऽ क ऽ", "समवेता युयुत्सवः"] {
        let aksharas = segment(pada).unwrap();
        assert_eq!(classify(&aksharas, FinalSyllable::Guru).unwrap().len(), aksharas.len());
    }
}

#[test]
fn final_syllable_parses_from_str() {
    assert_eq!("as-scanned".parse::<FinalSyllable>(), Ok(FinalSyllable::AsScanned));
    assert_eq!("guru".parse::<FinalSyllable>(), Ok(FinalSyllable::Guru));
    assert!("heavy".parse::<FinalSyllable>().is_err());
}
