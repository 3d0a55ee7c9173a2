use std::io::Write;

use chandas::{Analyzer, AnalyzerConfig, ChandasError, ErrorCategory, FinalSyllable};

mod common;

#[test]
fn empty_document_is_the_default() {
    assert_eq!(AnalyzerConfig::from_yaml_str("").unwrap(), AnalyzerConfig::default());
    let config = AnalyzerConfig::default();
    assert_eq!(config.final_syllable, FinalSyllable::Guru);
    assert_eq!(config.min_score, 0.5);
    assert!(config.split_half_verses);
}

#[test]
fn keys_override_defaults() {
    let config = AnalyzerConfig::from_yaml_str(
        "final_syllable: as-scanned\nmin_score: 0.75\nsplit_half_verses: false\n",
    )
    .unwrap();
    assert_eq!(config.final_syllable, FinalSyllable::AsScanned);
    assert_eq!(config.min_score, 0.75);
    assert!(!config.split_half_verses);
    assert!(config.extra_meters.is_empty());
}

#[test]
fn unknown_keys_are_rejected() {
    let err = AnalyzerConfig::from_yaml_str("min_scor: 0.5\n").unwrap_err();
    assert!(matches!(err, ChandasError::Yaml(_)));
}

#[test]
fn out_of_range_score_is_rejected() {
    let err = AnalyzerConfig::from_yaml_str("min_score: 1.5\n").unwrap_err();
    assert!(matches!(err, ChandasError::Config { .. }));
    assert_eq!(err.category(), ErrorCategory::Setup);

    let config = AnalyzerConfig {
        min_score: -0.1,
        ..AnalyzerConfig::default()
    };
    assert!(Analyzer::new(config).is_err());
}

#[test]
fn extra_meters_load_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "extra_meters:\n  - name: Catuṣpadī\n    padas: [\"GGGG\"]\n    description: four heavy syllables\n  - name: Half\n    padas: [\"ya ya\", \"GL\"]\n    tolerant: false\n"
    )
    .unwrap();

    let config = AnalyzerConfig::from_path(file.path()).unwrap();
    assert_eq!(config.extra_meters.len(), 2);
    assert!(config.extra_meters[0].tolerant);
    assert!(!config.extra_meters[1].tolerant);

    let analyzer = Analyzer::new(config).unwrap();
    let result = analyzer.identify("मामा मामा\nमामा मामा\nमामा मामा\nमामा मामा").unwrap();
    assert_eq!(result.chandas_name(), "Catuṣpadī");
    assert_eq!(analyzer.catalogue().find("Half").unwrap().syllable_counts(), vec![6, 2, 6, 2]);
}

#[test]
fn malformed_extra_meter_fails_analyzer_setup() {
    let config = AnalyzerConfig::from_yaml_str("extra_meters:\n  - name: Broken\n    padas: [\"qq\"]\n").unwrap();
    let err = Analyzer::new(config).unwrap_err();
    assert!(matches!(err, ChandasError::Catalogue { .. }));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = AnalyzerConfig::from_path("/nonexistent/chandas.yaml").unwrap_err();
    assert!(matches!(err, ChandasError::Io { .. }));
}

#[test]
fn disabling_half_split_leaves_two_lines_unidentified() {
    let config = AnalyzerConfig {
        split_half_verses: false,
        ..AnalyzerConfig::default()
    };
    let result = Analyzer::new(config).unwrap().identify(common::BG_2_47_HALVES).unwrap();
    assert!(!result.is_identified());
}
