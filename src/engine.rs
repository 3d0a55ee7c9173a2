//! Identification pipeline.
//!
//! Normalizer → Segmenter → Classifier → Matcher, with each stage appending
//! its step to the run's [`Trace`]. An [`Analyzer`] holds only immutable
//! state and can be shared freely between threads.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::akshara::{self, Akshara};
use crate::catalogue::Catalogue;
use crate::config::AnalyzerConfig;
use crate::errors::ChandasError;
use crate::gana;
use crate::matcher::{self, Candidate, Layout, MatchOutcome, MatchPolicy};
use crate::normalize::{self, Verse};
use crate::result::{AksharaReport, IdentificationResult, PadaAnalysis, UNIDENTIFIED};
use crate::trace::Trace;
use crate::weight::{self, Scansion, Weight};

/// Bhagavad Gītā 2.47, used when the CLI is given no input.
pub const DEMO_VERSE: &str = "कर्मण्येवाधिकारस्ते\nमा फलेषु कदाचन ।\nमा कर्मफलहेतुर्भूः\nमा ते सङ्गोऽस्त्वकर्मणि ॥";

#[derive(Debug, Clone)]
enum CatalogueRef {
    Builtin,
    Custom(Arc<Catalogue>),
}

/// A configured identification pipeline.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    catalogue: CatalogueRef,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            catalogue: CatalogueRef::Builtin,
        }
    }
}

/// One pāda after segmentation and classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedPada {
    pub text: String,
    pub aksharas: Vec<Akshara>,
    pub scansion: Vec<Scansion>,
}

impl ScannedPada {
    pub fn weights(&self) -> Vec<Weight> {
        self.scansion.iter().map(|s| s.weight).collect()
    }

    pub fn pattern(&self) -> String {
        weight::pattern_string(self.scansion.iter().map(|s| s.weight))
    }

    fn analysis(&self) -> PadaAnalysis {
        PadaAnalysis {
            text: self.text.clone(),
            syllable_count: self.aksharas.len(),
            pattern: self.pattern(),
            aksharas: self
                .aksharas
                .iter()
                .zip(&self.scansion)
                .map(|(a, s)| AksharaReport {
                    text: a.text().to_string(),
                    start: a.span().start,
                    end: a.span().end,
                    position: a.position(),
                    weight: s.weight,
                    rule: s.rule,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScannedVerse {
    pub index: usize,
    pub padas: Vec<ScannedPada>,
}

impl Analyzer {
    /// Builds an analyzer over the built-in catalogue plus
    /// `config.extra_meters`.
    pub fn new(config: AnalyzerConfig) -> Result<Self, ChandasError> {
        config.validate()?;
        let catalogue = if config.extra_meters.is_empty() {
            CatalogueRef::Builtin
        } else {
            let extended = Catalogue::builtin().with_extra(&config.extra_meters)?;
            CatalogueRef::Custom(Arc::new(extended))
        };
        Ok(Self { config, catalogue })
    }

    /// Builds an analyzer over `catalogue`; `config.extra_meters` are
    /// appended to it.
    pub fn with_catalogue(config: AnalyzerConfig, catalogue: Catalogue) -> Result<Self, ChandasError> {
        config.validate()?;
        let catalogue = catalogue.with_extra(&config.extra_meters)?;
        Ok(Self {
            config,
            catalogue: CatalogueRef::Custom(Arc::new(catalogue)),
        })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn catalogue(&self) -> &Catalogue {
        match &self.catalogue {
            CatalogueRef::Builtin => Catalogue::builtin(),
            CatalogueRef::Custom(catalogue) => catalogue.as_ref(),
        }
    }

    /// Identifies the meter of the first verse in `text`.
    ///
    /// Only [`ChandasError::EmptyInput`] is returned as an error; internal
    /// anomalies are logged and reported as an Unidentified result.
    pub fn identify(&self, text: &str) -> Result<IdentificationResult, ChandasError> {
        let verses = normalize::normalize(text)?;
        let ignored = verses.len() - 1;
        Ok(self.identify_verse(text, &verses[0], ignored))
    }

    /// Identifies every verse in `text`, in order.
    pub fn identify_all(&self, text: &str) -> Result<Vec<IdentificationResult>, ChandasError> {
        let verses = normalize::normalize(text)?;
        Ok(verses.iter().map(|v| self.identify_verse(text, v, 0)).collect())
    }

    /// Segments and classifies every verse without matching.
    pub fn scan(&self, text: &str) -> Result<Vec<ScannedVerse>, ChandasError> {
        let verses = normalize::normalize(text)?;
        verses
            .iter()
            .map(|verse| {
                Ok(ScannedVerse {
                    index: verse.index,
                    padas: self.scan_padas(verse)?,
                })
            })
            .collect()
    }

    fn scan_padas(&self, verse: &Verse) -> Result<Vec<ScannedPada>, ChandasError> {
        verse
            .padas
            .iter()
            .map(|pada| {
                let aksharas = akshara::segment(&pada.text)?;
                let scansion = weight::classify(&aksharas, self.config.final_syllable)?;
                Ok(ScannedPada {
                    text: pada.text.clone(),
                    aksharas,
                    scansion,
                })
            })
            .collect()
    }

    fn identify_verse(&self, input: &str, verse: &Verse, ignored: usize) -> IdentificationResult {
        let mut trace = Trace::new();

        let mut normalization = format!(
            "Split verse {} into pādas at line breaks and daṇḍas, dropping non-Devanagari characters",
            verse.index + 1
        );
        if ignored > 0 {
            normalization.push_str(&format!(
                "; {ignored} further verse{} ignored",
                if ignored == 1 { " was" } else { "s were" }
            ));
        }
        trace.record(
            "Text Normalization",
            normalization,
            format!("{} pādas: {}", verse.padas.len(), verse.pada_texts().join(" | ")),
        );

        let padas = match self.scan_padas(verse) {
            Ok(padas) => padas,
            Err(err) => {
                error!(input, error = %err, "analysis aborted by internal anomaly");
                return IdentificationResult::anomaly(&err, trace.into_steps());
            }
        };
        self.record_scan(&padas, &mut trace);

        let weights: Vec<Vec<Weight>> = padas.iter().map(ScannedPada::weights).collect();
        let policy = self.config.match_policy();
        let outcome = matcher::match_meter(self.catalogue(), &weights, &policy, &mut trace);
        let counts: Vec<usize> = weights.iter().map(Vec::len).collect();
        let (name, confidence, explanation) = explain(&outcome, &counts, &policy);

        trace.record(
            "Confidence",
            "Confidence is the fraction of constrained positions matched by the winning meter",
            format!("{confidence:.2}"),
        );

        IdentificationResult::new(
            name,
            confidence,
            padas.iter().map(ScannedPada::analysis).collect(),
            weights.iter().map(|w| gana::gana_signature(w)).collect(),
            explanation,
            trace.into_steps(),
        )
    }

    fn record_scan(&self, padas: &[ScannedPada], trace: &mut Trace) {
        let counts: Vec<usize> = padas.iter().map(|p| p.aksharas.len()).collect();
        let patterns: Vec<String> = padas.iter().map(ScannedPada::pattern).collect();
        debug!(?counts, ?patterns, "scanned verse");

        trace.record(
            "Akṣara Segmentation",
            format!("Segmented each pāda into akṣaras; counts {}", matcher::format_counts(&counts)),
            padas
                .iter()
                .map(|p| p.aksharas.iter().map(Akshara::text).collect::<Vec<_>>().join(" "))
                .collect::<Vec<_>>()
                .join(" | "),
        );

        let final_rule = match self.config.final_syllable {
            weight::FinalSyllable::Guru => "a pāda-final syllable counts as guru",
            weight::FinalSyllable::AsScanned => "a pāda-final syllable is scored as written",
        };
        trace.record(
            "Laghu/Guru Classification",
            format!("Weighted each akṣara by vowel length, anusvāra/visarga and following conjuncts; {final_rule}"),
            patterns.join(" | "),
        );
    }
}

fn explain(outcome: &MatchOutcome<'_>, counts: &[usize], policy: &MatchPolicy) -> (String, f64, String) {
    match outcome {
        MatchOutcome::Identified(candidate) => {
            let name = candidate.meter.name().to_string();
            (name, candidate.score, identified_explanation(candidate))
        }
        MatchOutcome::BelowFloor { best } => {
            warn!(meter = best.meter.name(), score = best.score, "best candidate below acceptance floor");
            let explanation = format!(
                "Syllable counts {} fit {}, but only {} of {} constrained positions agree (score {:.2}, below the floor of {:.2}).",
                matcher::format_counts(counts),
                best.meter.name(),
                best.matched,
                best.constrained,
                best.score,
                policy.min_score
            );
            (UNIDENTIFIED.to_string(), 0.0, explanation)
        }
        MatchOutcome::NoCountMatch { closest } => {
            warn!(?counts, "no meter with matching syllable counts");
            let explanation = match closest {
                Some(closest) => format!(
                    "No catalogued meter has {} syllables per pāda. The closest is {} with {}, off by {} syllable{}.",
                    matcher::format_counts(counts),
                    closest.meter.name(),
                    matcher::format_counts(&closest.meter.syllable_counts()),
                    closest.distance,
                    if closest.distance == 1 { "" } else { "s" }
                ),
                None => "The meter catalogue is empty.".to_string(),
            };
            (UNIDENTIFIED.to_string(), 0.0, explanation)
        }
    }
}

fn identified_explanation(candidate: &Candidate<'_>) -> String {
    let meter = candidate.meter;
    let layout = match candidate.layout {
        Layout::AsWritten => "",
        Layout::HalfVerseSplit => " once each half-verse line is split into two pādas",
    };
    let mut explanation = format!(
        "{} ({}). Syllable counts {} match exactly{}; {} of {} constrained positions agree.",
        meter.name(),
        meter.description(),
        matcher::format_counts(&meter.syllable_counts()),
        layout,
        candidate.matched,
        candidate.constrained
    );
    if !candidate.mismatches.is_empty() {
        let list: Vec<String> = candidate
            .mismatches
            .iter()
            .map(|m| format!("pāda {} position {} expected {} found {}", m.pada, m.position, m.expected, m.found))
            .collect();
        explanation.push_str(&format!(" Deviations: {}.", list.join("; ")));
    }
    explanation
}

/// Identifies `text` with the default configuration.
pub fn identify(text: &str) -> Result<IdentificationResult, ChandasError> {
    Analyzer::default().identify(text)
}
