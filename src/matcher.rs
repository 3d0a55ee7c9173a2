//! Meter Matcher
//!
//! Matching over the catalogue is two filters and a ranking:
//!
//! 1. syllable counts must agree exactly, pāda for pāda
//! 2. survivors are scored by the fraction of constrained positions the
//!    observed weights satisfy, then gated by the acceptance floor
//! 3. the highest score wins, earlier catalogue entries win ties
//!
//! A verse written as two half-verse lines can also be matched against a
//! four-pāda meter by splitting each line at the meter's pāda boundary.

use std::borrow::Cow;

use tracing::debug;

use crate::catalogue::{Catalogue, MeterDefinition};
use crate::gana::Constraint;
use crate::trace::Trace;
use crate::weight::{FinalSyllable, Weight};

/// Acceptance settings for one matching run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchPolicy {
    pub min_score: f64,
    pub split_half_verses: bool,
    /// Applied again at the pāda ends a half-verse split creates.
    pub final_syllable: FinalSyllable,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            min_score: 0.5,
            split_half_verses: true,
            final_syllable: FinalSyllable::Guru,
        }
    }
}

/// How the observed lines were laid onto a meter's pādas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    AsWritten,
    /// Two lines, each holding two pādas.
    HalfVerseSplit,
}

/// A constrained position the observed weight does not satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// 1-based pāda of the meter.
    pub pada: usize,
    /// 1-based position within that pāda.
    pub position: usize,
    pub expected: Constraint,
    pub found: Weight,
}

/// A meter whose syllable counts agree with the verse.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'c> {
    pub meter: &'c MeterDefinition,
    pub layout: Layout,
    pub matched: usize,
    pub constrained: usize,
    pub score: f64,
    pub mismatches: Vec<Mismatch>,
}

impl Candidate<'_> {
    fn accepted(&self, policy: &MatchPolicy) -> bool {
        if self.meter.tolerant() {
            self.score > 0.0 && self.score >= policy.min_score
        } else {
            self.mismatches.is_empty()
        }
    }
}

/// The meter whose counts come nearest to the observed ones.
#[derive(Debug, Clone, PartialEq)]
pub struct CountMismatch<'c> {
    pub meter: &'c MeterDefinition,
    /// Summed absolute per-pāda difference in syllables.
    pub distance: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome<'c> {
    Identified(Candidate<'c>),
    /// Counts matched but no candidate passed the floor; `best` is the
    /// highest-scoring one.
    BelowFloor { best: Candidate<'c> },
    NoCountMatch { closest: Option<CountMismatch<'c>> },
}

/// Matches per-pāda weight sequences against `catalogue`.
///
/// Records the "Syllable Count Filter" step, and the "Gaṇa Pattern Check" step
/// when at least one meter survives it. Two-line input under
/// `split_half_verses` is preceded by a "Half-Verse Split" step.
pub fn match_meter<'c>(
    catalogue: &'c Catalogue,
    padas: &[Vec<Weight>],
    policy: &MatchPolicy,
    trace: &mut Trace,
) -> MatchOutcome<'c> {
    let observed: Vec<usize> = padas.iter().map(Vec::len).collect();

    let candidates: Vec<Candidate<'c>> = catalogue
        .iter()
        .filter_map(|meter| {
            let (layout, arranged) = arrange(meter, padas, policy)?;
            Some(score(meter, &arranged, layout))
        })
        .collect();

    if policy.split_half_verses && padas.len() == 2 {
        record_split(padas, &candidates, policy, trace);
    }

    let count_description = format!(
        "Counted {} syllables per pāda, compared against the {} catalogued meters",
        format_counts(&observed),
        catalogue.len()
    );

    if candidates.is_empty() {
        let closest = closest_count(catalogue, &observed);
        let result = match &closest {
            Some(c) => format!(
                "No meter has {} syllables; closest is {} with {}",
                format_counts(&observed),
                c.meter.name(),
                format_counts(&c.meter.syllable_counts())
            ),
            None => "The catalogue is empty".to_string(),
        };
        trace.record("Syllable Count Filter", count_description, result);
        debug!(?observed, "no meter with matching syllable counts");
        return MatchOutcome::NoCountMatch { closest };
    }

    let split = candidates.iter().any(|c| c.layout == Layout::HalfVerseSplit);
    trace.record(
        "Syllable Count Filter",
        count_description,
        format!(
            "{} meter{} with matching counts{}: {}",
            candidates.len(),
            if candidates.len() == 1 { "" } else { "s" },
            if split { " (some via half-verse split)" } else { "" },
            candidates.iter().map(|c| c.meter.name()).collect::<Vec<_>>().join(", ")
        ),
    );

    for candidate in &candidates {
        debug!(
            meter = candidate.meter.name(),
            score = candidate.score,
            mismatches = candidate.mismatches.len(),
            "scored candidate"
        );
    }

    let check_description = candidates
        .iter()
        .map(|c| {
            format!(
                "{} ({}): {}/{} matched",
                c.meter.name(),
                describe_positions(c.meter),
                c.matched,
                c.constrained
            )
        })
        .collect::<Vec<_>>()
        .join("; ");

    let winner = best_of(candidates.iter().filter(|c| c.accepted(policy)));
    match winner {
        Some(winner) => {
            let result = if winner.mismatches.is_empty() {
                format!("All constrained positions matched {}", winner.meter.name())
            } else {
                format!(
                    "{} accepted with {} mismatched position{}",
                    winner.meter.name(),
                    winner.mismatches.len(),
                    if winner.mismatches.len() == 1 { "" } else { "s" }
                )
            };
            trace.record("Gaṇa Pattern Check", format!("Checked {check_description}"), result);
            MatchOutcome::Identified(winner.clone())
        }
        None => {
            // Non-empty, so a best candidate always exists.
            let best = best_of(candidates.iter()).cloned().unwrap_or_else(|| candidates[0].clone());
            trace.record(
                "Gaṇa Pattern Check",
                format!("Checked {check_description}"),
                format!(
                    "No candidate reached the acceptance floor of {:.2}; best was {} at {:.2}",
                    policy.min_score,
                    best.meter.name(),
                    best.score
                ),
            );
            MatchOutcome::BelowFloor { best }
        }
    }
}

/// Renders counts as `[8, 8, 8, 8]`.
pub fn format_counts(counts: &[usize]) -> String {
    format!("{counts:?}")
}

fn arrange<'p>(
    meter: &MeterDefinition,
    padas: &'p [Vec<Weight>],
    policy: &MatchPolicy,
) -> Option<(Layout, Cow<'p, [Vec<Weight>]>)> {
    let expected = meter.syllable_counts();
    if padas.len() == expected.len() && padas.iter().zip(&expected).all(|(p, &e)| p.len() == e) {
        return Some((Layout::AsWritten, Cow::Borrowed(padas)));
    }

    if !policy.split_half_verses || padas.len() != 2 || expected.len() != 4 {
        return None;
    }
    if padas[0].len() != expected[0] + expected[1] || padas[1].len() != expected[2] + expected[3] {
        return None;
    }
    let (p1, p2) = padas[0].split_at(expected[0]);
    let (p3, p4) = padas[1].split_at(expected[2]);
    let mut split = vec![p1.to_vec(), p2.to_vec(), p3.to_vec(), p4.to_vec()];

    // Each line was classified as one pāda, so the ends of pādas 1 and 3
    // were scored as mid-line syllables.
    if policy.final_syllable == FinalSyllable::Guru {
        for i in [0, 2] {
            if let Some(last) = split[i].last_mut() {
                *last = Weight::Guru;
            }
        }
    }
    Some((Layout::HalfVerseSplit, Cow::Owned(split)))
}

fn record_split(padas: &[Vec<Weight>], candidates: &[Candidate<'_>], policy: &MatchPolicy, trace: &mut Trace) {
    let split: Vec<&str> = candidates
        .iter()
        .filter(|c| c.layout == Layout::HalfVerseSplit)
        .map(|c| c.meter.name())
        .collect();

    let final_rule = match policy.final_syllable {
        FinalSyllable::Guru => "; the new pāda ends count as guru",
        FinalSyllable::AsScanned => "",
    };
    let result = if split.is_empty() {
        "No four-pāda meter fits these line lengths".to_string()
    } else {
        format!("Split for {}", split.join(", "))
    };
    trace.record(
        "Half-Verse Split",
        format!(
            "Two lines of {} and {} syllables; four-pāda meters were tried with each line read as two pādas{final_rule}",
            padas[0].len(),
            padas[1].len()
        ),
        result,
    );
}

fn score<'c>(meter: &'c MeterDefinition, padas: &[Vec<Weight>], layout: Layout) -> Candidate<'c> {
    let mut matched = 0;
    let mut constrained = 0;
    let mut mismatches = Vec::new();

    for (p, (constraints, weights)) in meter.padas().iter().zip(padas).enumerate() {
        for (i, (&expected, &found)) in constraints.iter().zip(weights).enumerate() {
            if !expected.is_constrained() {
                continue;
            }
            constrained += 1;
            if expected.admits(found) {
                matched += 1;
            } else {
                mismatches.push(Mismatch {
                    pada: p + 1,
                    position: i + 1,
                    expected,
                    found,
                });
            }
        }
    }

    let score = if constrained == 0 {
        1.0
    } else {
        matched as f64 / constrained as f64
    };
    Candidate {
        meter,
        layout,
        matched,
        constrained,
        score,
        mismatches,
    }
}

/// First candidate with the highest score.
fn best_of<'a, 'c>(candidates: impl Iterator<Item = &'a Candidate<'c>>) -> Option<&'a Candidate<'c>>
where
    'c: 'a,
{
    let mut best: Option<&Candidate<'c>> = None;
    for candidate in candidates {
        if best.map_or(true, |b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }
    best
}

fn closest_count<'c>(catalogue: &'c Catalogue, observed: &[usize]) -> Option<CountMismatch<'c>> {
    let mut closest: Option<CountMismatch<'c>> = None;
    for meter in catalogue.iter() {
        let distance = count_distance(&meter.syllable_counts(), observed);
        if closest.as_ref().map_or(true, |c| distance < c.distance) {
            closest = Some(CountMismatch { meter, distance });
        }
    }
    closest
}

fn count_distance(expected: &[usize], observed: &[usize]) -> usize {
    (0..expected.len().max(observed.len()))
        .map(|i| {
            let e = expected.get(i).copied().unwrap_or(0);
            let o = observed.get(i).copied().unwrap_or(0);
            e.abs_diff(o)
        })
        .sum()
}

fn describe_positions(meter: &MeterDefinition) -> String {
    let sets: Vec<Vec<usize>> = meter
        .padas()
        .iter()
        .map(|pada| {
            pada.iter()
                .enumerate()
                .filter(|(_, c)| c.is_constrained())
                .map(|(i, _)| i + 1)
                .collect()
        })
        .collect();

    let join = |set: &[usize]| set.iter().map(usize::to_string).collect::<Vec<_>>().join(",");
    let full = meter
        .padas()
        .iter()
        .zip(&sets)
        .all(|(pada, set)| pada.len() == set.len());

    if full {
        "every position".to_string()
    } else if sets.windows(2).all(|w| w[0] == w[1]) {
        format!("positions {}", sets.first().map(|s| join(s)).unwrap_or_default())
    } else {
        sets.iter()
            .enumerate()
            .map(|(i, set)| format!("pāda {}: {}", i + 1, join(set)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_padas_count_in_full() {
        assert_eq!(count_distance(&[8, 8, 8, 8], &[8, 8]), 16);
        assert_eq!(count_distance(&[8, 8, 8, 8], &[7, 9, 8, 8]), 2);
    }

    #[test]
    fn anushtubh_constrains_three_positions() {
        let meter = Catalogue::builtin().find("Anushtubh").unwrap();
        assert_eq!(describe_positions(meter), "positions 5,6,7");
        let indravajra = Catalogue::builtin().find("Indravajra").unwrap();
        assert_eq!(describe_positions(indravajra), "every position");
    }
}
