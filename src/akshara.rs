//! Akṣara Segmenter
//!
//! Splits one cleaned pāda into its ordered syllables in a single
//! left-to-right pass. Each akṣara is
//!
//! ```text
//! consonant (virama consonant)*  [vowel sign]  [anusvāra | visarga]
//! independent-vowel              [anusvāra | visarga]
//! ```
//!
//! Characters that cannot take part in a syllable (spaces, avagraha, stray
//! marks) are skipped but still owned by a neighbouring akṣara's span, so the
//! spans always partition the pāda. A vowelless cluster (virama with no
//! following consonant) closes the preceding syllable as its coda. Only at the
//! end of a pāda, or with nothing before it, does it stand alone as a half
//! consonant.

use serde::Serialize;
use tracing::trace;

use crate::errors::ChandasError;
use crate::script::{self, CharClass, VowelLength};
use crate::span::Span;

/// The vowel at the core of an akṣara.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Nucleus {
    Short,
    Long,
    /// Half consonant: the cluster ended in a virama.
    Absent,
}

impl From<VowelLength> for Nucleus {
    fn from(length: VowelLength) -> Self {
        match length {
            VowelLength::Short => Nucleus::Short,
            VowelLength::Long => Nucleus::Long,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Anusvara,
    Visarga,
}

/// A syllabic unit. Immutable once produced by [`segment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Akshara {
    text: String,
    span: Span,
    position: usize,
    onset: usize,
    nucleus: Nucleus,
    coda: usize,
    mark: Option<Mark>,
    nasalized: bool,
}

impl Akshara {
    /// The syllable's graphemes, excluding skipped characters.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character range owned by this akṣara within its pāda.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Zero-based ordinal within the pāda.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Consonants before the nucleus; `0` for an independent vowel.
    pub fn onset(&self) -> usize {
        self.onset
    }

    pub fn nucleus(&self) -> Nucleus {
        self.nucleus
    }

    /// Vowelless consonants closing the syllable.
    pub fn coda(&self) -> usize {
        self.coda
    }

    pub fn mark(&self) -> Option<Mark> {
        self.mark
    }

    pub fn is_nasalized(&self) -> bool {
        self.nasalized
    }

    pub fn begins_with_conjunct(&self) -> bool {
        self.onset >= 2
    }
}

/// Segments a cleaned pāda into akṣaras.
///
/// The result is verified to partition `pada`; a failure is reported as
/// [`ChandasError::SegmentationAnomaly`].
pub fn segment(pada: &str) -> Result<Vec<Akshara>, ChandasError> {
    let chars: Vec<char> = pada.chars().collect();
    let aksharas = Segmenter::new(&chars).run();
    verify_partition(pada, chars.len(), &aksharas)?;
    trace!(pada, count = aksharas.len(), "segmented pāda");
    Ok(aksharas)
}

// ============================================================================
// SCANNER
// ============================================================================

struct Segmenter<'a> {
    chars: &'a [char],
    pos: usize,
    out: Vec<Akshara>,
    /// Start of skipped characters seen before the first akṣara.
    leading: Option<usize>,
}

struct Cluster {
    end: usize,
    consonants: usize,
    vowelless: bool,
}

impl<'a> Segmenter<'a> {
    fn new(chars: &'a [char]) -> Self {
        Self {
            chars,
            pos: 0,
            out: Vec::new(),
            leading: None,
        }
    }

    fn class_at(&self, pos: usize) -> Option<CharClass> {
        self.chars.get(pos).copied().map(script::classify)
    }

    fn run(mut self) -> Vec<Akshara> {
        while self.pos < self.chars.len() {
            match script::classify(self.chars[self.pos]) {
                CharClass::Consonant => self.consonant_syllable(),
                CharClass::IndependentVowel(length) => {
                    let start = self.pos;
                    self.pos += 1;
                    self.finish_vowel_syllable(start, 0, length.into());
                }
                _ => self.skip(),
            }
        }
        self.out
    }

    fn consonant_syllable(&mut self) {
        let start = self.pos;
        let cluster = self.scan_cluster(start);
        self.pos = cluster.end;

        if !cluster.vowelless {
            let nucleus = match self.class_at(self.pos) {
                Some(CharClass::VowelSign(length)) => {
                    self.pos += 1;
                    length.into()
                }
                _ => Nucleus::Short,
            };
            self.finish_vowel_syllable(start, cluster.consonants, nucleus);
            return;
        }

        let pada_final = !self.chars[self.pos..]
            .iter()
            .any(|&c| script::is_syllable_start(c));
        if !pada_final {
            if let Some(previous) = self.out.last_mut() {
                previous.text.extend(&self.chars[start..self.pos]);
                previous.span.end = self.pos;
                previous.coda += cluster.consonants;
                return;
            }
        }
        let akshara = self.make(start, cluster.consonants, Nucleus::Absent);
        self.out.push(akshara);
    }

    /// Consumes `consonant (virama joiner* consonant)*`, plus a trailing
    /// virama if the cluster ends without a vowel.
    fn scan_cluster(&self, start: usize) -> Cluster {
        let mut end = self.scan_consonant(start);
        let mut consonants = 1;
        while self.class_at(end) == Some(CharClass::Virama) {
            let after = self.skip_joiners(end + 1);
            if self.class_at(after) == Some(CharClass::Consonant) {
                end = self.scan_consonant(after);
                consonants += 1;
            } else {
                return Cluster {
                    end: after,
                    consonants,
                    vowelless: true,
                };
            }
        }
        Cluster {
            end,
            consonants,
            vowelless: false,
        }
    }

    fn scan_consonant(&self, pos: usize) -> usize {
        let mut end = pos + 1;
        while self.class_at(end) == Some(CharClass::Nukta) {
            end += 1;
        }
        end
    }

    fn skip_joiners(&self, mut pos: usize) -> usize {
        while self.class_at(pos) == Some(CharClass::Joiner) {
            pos += 1;
        }
        pos
    }

    fn finish_vowel_syllable(&mut self, start: usize, onset: usize, nucleus: Nucleus) {
        let mut akshara = self.make(start, onset, nucleus);
        while let Some(class) = self.class_at(self.pos) {
            match class {
                CharClass::Anusvara => {
                    akshara.mark.get_or_insert(Mark::Anusvara);
                }
                CharClass::Visarga => {
                    akshara.mark.get_or_insert(Mark::Visarga);
                }
                CharClass::Candrabindu => akshara.nasalized = true,
                CharClass::Accent => {}
                _ => break,
            }
            akshara.text.push(self.chars[self.pos]);
            self.pos += 1;
        }
        akshara.span.end = self.pos;
        self.out.push(akshara);
    }

    fn make(&mut self, start: usize, onset: usize, nucleus: Nucleus) -> Akshara {
        let span_start = self.leading.take().unwrap_or(start);
        Akshara {
            text: Span::new(start, self.pos).slice(self.chars),
            span: Span::new(span_start, self.pos),
            position: self.out.len(),
            onset,
            nucleus,
            coda: 0,
            mark: None,
            nasalized: false,
        }
    }

    fn skip(&mut self) {
        match self.out.last_mut() {
            Some(previous) => previous.span.end = self.pos + 1,
            None => {
                self.leading.get_or_insert(self.pos);
            }
        }
        self.pos += 1;
    }
}

// ============================================================================
// INVARIANT CHECK
// ============================================================================

fn verify_partition(pada: &str, len: usize, aksharas: &[Akshara]) -> Result<(), ChandasError> {
    if aksharas.is_empty() {
        if len == 0 {
            return Ok(());
        }
        return Err(ChandasError::segmentation_anomaly(
            pada,
            Span::new(0, len),
            "pāda contains no syllable",
        ));
    }

    let mut cursor = 0;
    for akshara in aksharas {
        if akshara.span.start != cursor {
            let (from, to) = if akshara.span.start > cursor {
                (cursor, akshara.span.start)
            } else {
                (akshara.span.start, cursor)
            };
            return Err(ChandasError::segmentation_anomaly(
                pada,
                Span::new(from, to),
                format!(
                    "akṣara {} starts at {} but the previous one ends at {}",
                    akshara.position, akshara.span.start, cursor
                ),
            ));
        }
        if akshara.span.is_empty() {
            return Err(ChandasError::segmentation_anomaly(
                pada,
                akshara.span,
                format!("akṣara {} is empty", akshara.position),
            ));
        }
        cursor = akshara.span.end;
    }

    if cursor != len {
        return Err(ChandasError::segmentation_anomaly(
            pada,
            Span::new(cursor, len),
            format!("characters {cursor}..{len} are not covered by any akṣara"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_check_reports_gaps() {
        let mut aksharas = segment("कम").unwrap();
        aksharas[1].span.start = 2;
        let err = verify_partition("कम", 2, &aksharas).unwrap_err();
        assert!(err.is_internal());
    }

    #[test]
    fn text_is_the_covered_characters_when_nothing_is_skipped() {
        let pada = "कर्मणि";
        let chars: Vec<char> = pada.chars().collect();
        for akshara in segment(pada).unwrap() {
            assert_eq!(akshara.text(), akshara.span().slice(&chars));
        }
    }

    #[test]
    fn partition_check_reports_uncovered_tail() {
        let aksharas = segment("क").unwrap();
        assert!(verify_partition("क ", 2, &aksharas).is_err());
    }
}
