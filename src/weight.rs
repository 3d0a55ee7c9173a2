//! Laghu/Guru Classifier
//!
//! Assigns a prosodic weight to every akṣara of a pāda. Rules are tried in
//! order and the first that applies decides:
//!
//! 1. long vowel → guru
//! 2. anusvāra or visarga → guru
//! 3. short vowel followed by two or more consonants → guru
//! 4. pāda-final syllable under [`FinalSyllable::Guru`] → guru
//! 5. otherwise laghu
//!
//! The consonants counted by rule 3 are the akṣara's own coda plus the onset
//! of the next akṣara in the same pāda.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::akshara::{Akshara, Nucleus};
use crate::errors::ChandasError;

/// Prosodic weight of one akṣara.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    Laghu,
    Guru,
}

impl Weight {
    /// `'L'` or `'G'`.
    pub fn symbol(self) -> char {
        match self {
            Weight::Laghu => 'L',
            Weight::Guru => 'G',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'L' | 'l' => Some(Weight::Laghu),
            'G' | 'g' => Some(Weight::Guru),
            _ => None,
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Laghu => write!(f, "laghu"),
            Weight::Guru => write!(f, "guru"),
        }
    }
}

/// Which classification rule decided a weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightRule {
    LongVowel,
    TrailingMark,
    Conjunct,
    PadaFinal,
    Short,
}

impl WeightRule {
    pub fn describe(self) -> &'static str {
        match self {
            WeightRule::LongVowel => "long vowel",
            WeightRule::TrailingMark => "anusvāra/visarga",
            WeightRule::Conjunct => "followed by conjunct",
            WeightRule::PadaFinal => "pāda-final",
            WeightRule::Short => "short",
        }
    }
}

/// Treatment of a light syllable at the end of a pāda.
///
/// Classical prosody allows the last syllable of a pāda to count as heavy
/// regardless of its length; some traditions score it as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinalSyllable {
    #[default]
    Guru,
    AsScanned,
}

impl std::str::FromStr for FinalSyllable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guru" => Ok(FinalSyllable::Guru),
            "as-scanned" => Ok(FinalSyllable::AsScanned),
            other => Err(format!("expected 'guru' or 'as-scanned', found '{other}'")),
        }
    }
}

/// The weight of one akṣara together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Scansion {
    pub weight: Weight,
    pub rule: WeightRule,
}

/// Classifies every akṣara of one pāda.
///
/// Returns one [`Scansion`] per akṣara, in order.
pub fn classify(aksharas: &[Akshara], policy: FinalSyllable) -> Result<Vec<Scansion>, ChandasError> {
    let scansion: Vec<Scansion> = aksharas
        .iter()
        .enumerate()
        .map(|(i, akshara)| {
            let next = aksharas.get(i + 1);
            let rule = decide(akshara, next, policy);
            Scansion {
                weight: rule_weight(rule),
                rule,
            }
        })
        .collect();

    if scansion.len() != aksharas.len() {
        return Err(ChandasError::WeightCountMismatch {
            aksharas: aksharas.len(),
            weights: scansion.len(),
        });
    }
    Ok(scansion)
}

/// Renders weights as a `G`/`L` string.
pub fn pattern_string(weights: impl IntoIterator<Item = Weight>) -> String {
    weights.into_iter().map(Weight::symbol).collect()
}

fn decide(akshara: &Akshara, next: Option<&Akshara>, policy: FinalSyllable) -> WeightRule {
    if akshara.nucleus() == Nucleus::Long {
        return WeightRule::LongVowel;
    }
    if akshara.mark().is_some() {
        return WeightRule::TrailingMark;
    }
    if akshara.nucleus() == Nucleus::Short {
        let following = akshara.coda() + next.map_or(0, Akshara::onset);
        if following >= 2 {
            return WeightRule::Conjunct;
        }
    }
    if next.is_none() && policy == FinalSyllable::Guru {
        return WeightRule::PadaFinal;
    }
    WeightRule::Short
}

fn rule_weight(rule: WeightRule) -> Weight {
    match rule {
        WeightRule::Short => Weight::Laghu,
        _ => Weight::Guru,
    }
}
