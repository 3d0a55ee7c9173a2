//! # Chandas Meter Catalogue
//!
//! The catalogue is plain tagged data: every meter is one immutable
//! [`MeterDefinition`] record, matched by the data-driven rules in
//! [`crate::matcher`]. There is no per-meter behaviour.
//!
//! Catalogue Invariant: declaration order is the tie-break order. The
//! built-in table is constructed once, on first use, and never mutated;
//! catalogues with user meters are new values built from it.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::ChandasError;
use crate::gana::{self, Constraint, Gana};

/// Structural family of a meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeterClass {
    /// The śloka: eight syllables per pāda, only a few positions fixed.
    Sloka,
    /// Every pāda has the same pattern.
    Sama,
    /// Odd and even pādas differ.
    Ardhasama,
}

/// A single catalogue entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MeterDefinition {
    name: String,
    alias: Option<String>,
    description: String,
    class: MeterClass,
    padas: Vec<Vec<Constraint>>,
    tolerant: bool,
}

impl MeterDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn class(&self) -> MeterClass {
        self.class
    }

    /// Per-pāda position constraints.
    pub fn padas(&self) -> &[Vec<Constraint>] {
        &self.padas
    }

    /// Whether deviations in constrained positions earn partial credit.
    /// A strict meter is a candidate only when every constrained position
    /// matches.
    pub fn tolerant(&self) -> bool {
        self.tolerant
    }

    pub fn syllable_counts(&self) -> Vec<usize> {
        self.padas.iter().map(Vec::len).collect()
    }

    pub fn constrained_positions(&self) -> usize {
        self.padas
            .iter()
            .flatten()
            .filter(|c| c.is_constrained())
            .count()
    }

    /// Per-pāda patterns in `G`/`L`/`x` notation.
    pub fn pattern_strings(&self) -> Vec<String> {
        self.padas.iter().map(|p| gana::constraint_string(p)).collect()
    }

    fn answers_to(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self
                .alias
                .as_deref()
                .is_some_and(|alias| alias.eq_ignore_ascii_case(name))
    }
}

/// A user-supplied meter, as written in configuration.
///
/// `padas` holds one pattern (used for all four pādas), two patterns (odd and
/// even pādas), or one pattern per pāda.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MeterEntry {
    pub name: String,
    pub padas: Vec<String>,
    #[serde(default = "default_tolerant")]
    pub tolerant: bool,
    #[serde(default)]
    pub description: String,
}

fn default_tolerant() -> bool {
    true
}

impl MeterEntry {
    fn build(&self) -> Result<MeterDefinition, ChandasError> {
        if self.name.trim().is_empty() {
            return Err(ChandasError::catalogue("<unnamed>", "meter name is empty"));
        }
        let parsed: Vec<Vec<Constraint>> = self
            .padas
            .iter()
            .map(|p| gana::parse_pattern(p).map_err(|e| ChandasError::catalogue(&self.name, e)))
            .collect::<Result<_, _>>()?;

        let (padas, class) = match parsed.as_slice() {
            [] => return Err(ChandasError::catalogue(&self.name, "no pāda patterns given")),
            [one] => (vec![one.clone(); 4], MeterClass::Sama),
            [odd, even] => (
                vec![odd.clone(), even.clone(), odd.clone(), even.clone()],
                MeterClass::Ardhasama,
            ),
            many => (many.to_vec(), MeterClass::Sama),
        };

        Ok(MeterDefinition {
            name: self.name.clone(),
            alias: None,
            description: self.description.clone(),
            class,
            padas,
            tolerant: self.tolerant,
        })
    }
}

/// An ordered, immutable collection of meters.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogue {
    meters: Vec<MeterDefinition>,
}

static BUILTIN: Lazy<Catalogue> = Lazy::new(|| Catalogue {
    meters: BUILTIN_METERS.iter().map(BuiltinMeter::definition).collect(),
});

impl Catalogue {
    /// The process-wide built-in catalogue.
    pub fn builtin() -> &'static Catalogue {
        &BUILTIN
    }

    /// Returns a new catalogue: the meters of `self` followed by `entries`.
    pub fn with_extra(&self, entries: &[MeterEntry]) -> Result<Catalogue, ChandasError> {
        let mut meters = self.meters.clone();
        for entry in entries {
            let meter = entry.build()?;
            if meters.iter().any(|m| m.answers_to(&meter.name)) {
                return Err(ChandasError::catalogue(&meter.name, "a meter with this name already exists"));
            }
            meters.push(meter);
        }
        Ok(Catalogue { meters })
    }

    pub fn iter(&self) -> impl Iterator<Item = &MeterDefinition> {
        self.meters.iter()
    }

    pub fn len(&self) -> usize {
        self.meters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meters.is_empty()
    }

    /// Looks a meter up by name or ASCII alias, case-insensitively.
    pub fn find(&self, name: &str) -> Option<&MeterDefinition> {
        self.meters.iter().find(|m| m.answers_to(name))
    }
}

// ============================================================================
// BUILT-IN TABLE
// ============================================================================

enum Feet {
    Ganas(&'static [Gana]),
    Positions(&'static [Constraint]),
}

impl Feet {
    fn constraints(&self) -> Vec<Constraint> {
        match self {
            Feet::Ganas(ganas) => gana::expand(ganas),
            Feet::Positions(positions) => positions.to_vec(),
        }
    }
}

enum Shape {
    Same(Feet),
    OddEven(Feet, Feet),
}

struct BuiltinMeter {
    name: &'static str,
    alias: &'static str,
    description: &'static str,
    class: MeterClass,
    tolerant: bool,
    shape: Shape,
}

impl BuiltinMeter {
    fn definition(&self) -> MeterDefinition {
        let padas = match &self.shape {
            Shape::Same(feet) => vec![feet.constraints(); 4],
            Shape::OddEven(odd, even) => {
                let (odd, even) = (odd.constraints(), even.constraints());
                vec![odd.clone(), even.clone(), odd, even]
            }
        };
        MeterDefinition {
            name: self.name.to_string(),
            alias: Some(self.alias.to_string()),
            description: self.description.to_string(),
            class: self.class,
            padas,
            tolerant: self.tolerant,
        }
    }
}

use crate::gana::Constraint::{Any as X, Guru as G, Laghu as L};
use crate::gana::Gana::{Bha, Ga, Ja, La, Ma, Na, Ra, Sa, Ta, Ya};

const fn sama(
    name: &'static str,
    alias: &'static str,
    description: &'static str,
    ganas: &'static [Gana],
) -> BuiltinMeter {
    BuiltinMeter {
        name,
        alias,
        description,
        class: MeterClass::Sama,
        tolerant: true,
        shape: Shape::Same(Feet::Ganas(ganas)),
    }
}

const fn ardhasama(
    name: &'static str,
    alias: &'static str,
    description: &'static str,
    odd: &'static [Gana],
    even: &'static [Gana],
) -> BuiltinMeter {
    BuiltinMeter {
        name,
        alias,
        description,
        class: MeterClass::Ardhasama,
        tolerant: true,
        shape: Shape::OddEven(Feet::Ganas(odd), Feet::Ganas(even)),
    }
}

static BUILTIN_METERS: &[BuiltinMeter] = &[
    BuiltinMeter {
        name: "Anuṣṭubh",
        alias: "Anushtubh",
        description: "the śloka of the epics: eight syllables per pāda, the 5th light and the 6th heavy, the 7th heavy in odd and light in even pādas",
        class: MeterClass::Sloka,
        tolerant: true,
        shape: Shape::OddEven(
            Feet::Positions(&[X, X, X, X, L, G, G, X]),
            Feet::Positions(&[X, X, X, X, L, G, L, X]),
        ),
    },
    sama("Pramāṇikā", "Pramanika", "ja ra la ga, eight syllables", &[Ja, Ra, La, Ga]),
    sama("Samānikā", "Samanika", "ra ja ga la, eight syllables", &[Ra, Ja, Ga, La]),
    sama("Vidyunmālā", "Vidyunmala", "ma ma ga ga, eight heavy syllables", &[Ma, Ma, Ga, Ga]),
    sama("Indravajrā", "Indravajra", "ta ta ja ga ga, eleven syllables", &[Ta, Ta, Ja, Ga, Ga]),
    sama("Upendravajrā", "Upendravajra", "ja ta ja ga ga, eleven syllables", &[Ja, Ta, Ja, Ga, Ga]),
    BuiltinMeter {
        name: "Upajāti",
        alias: "Upajati",
        description: "a blend of Indravajrā and Upendravajrā pādas; only the first syllable varies",
        class: MeterClass::Sama,
        tolerant: false,
        shape: Shape::Same(Feet::Positions(&[X, G, L, G, G, L, L, G, L, G, G])),
    },
    sama("Rathoddhatā", "Rathoddhata", "ra na ra la ga, eleven syllables", &[Ra, Na, Ra, La, Ga]),
    sama("Svāgatā", "Svagata", "ra na bha ga ga, eleven syllables", &[Ra, Na, Bha, Ga, Ga]),
    sama("Śālinī", "Shalini", "ma ta ta ga ga, eleven syllables", &[Ma, Ta, Ta, Ga, Ga]),
    sama("Vaṃśastha", "Vamshastha", "ja ta ja ra, twelve syllables", &[Ja, Ta, Ja, Ra]),
    sama("Indravaṃśā", "Indravamsha", "ta ta ja ra, twelve syllables", &[Ta, Ta, Ja, Ra]),
    sama("Drutavilambita", "Drutavilambita", "na bha bha ra, twelve syllables", &[Na, Bha, Bha, Ra]),
    sama("Bhujaṅgaprayāta", "Bhujangaprayata", "four ya gaṇas, twelve syllables", &[Ya, Ya, Ya, Ya]),
    sama("Toṭaka", "Totaka", "four sa gaṇas, twelve syllables", &[Sa, Sa, Sa, Sa]),
    sama("Sragviṇī", "Sragvini", "four ra gaṇas, twelve syllables", &[Ra, Ra, Ra, Ra]),
    sama("Vasantatilakā", "Vasantatilaka", "ta bha ja ja ga ga, fourteen syllables", &[Ta, Bha, Ja, Ja, Ga, Ga]),
    sama("Mālinī", "Malini", "na na ma ya ya, fifteen syllables", &[Na, Na, Ma, Ya, Ya]),
    sama("Pañcacāmara", "Panchachamara", "ja ra ja ra ja ga, sixteen syllables", &[Ja, Ra, Ja, Ra, Ja, Ga]),
    sama("Mandākrāntā", "Mandakranta", "ma bha na ta ta ga ga, seventeen syllables", &[Ma, Bha, Na, Ta, Ta, Ga, Ga]),
    sama("Śikhariṇī", "Shikharini", "ya ma na sa bha la ga, seventeen syllables", &[Ya, Ma, Na, Sa, Bha, La, Ga]),
    sama("Pṛthvī", "Prthvi", "ja sa ja sa ya la ga, seventeen syllables", &[Ja, Sa, Ja, Sa, Ya, La, Ga]),
    sama("Hariṇī", "Harini", "na sa ma ra sa la ga, seventeen syllables", &[Na, Sa, Ma, Ra, Sa, La, Ga]),
    sama(
        "Śārdūlavikrīḍita",
        "Shardulavikridita",
        "ma sa ja sa ta ta ga, nineteen syllables",
        &[Ma, Sa, Ja, Sa, Ta, Ta, Ga],
    ),
    sama("Sragdharā", "Sragdhara", "ma ra bha na ya ya ya, twenty-one syllables", &[Ma, Ra, Bha, Na, Ya, Ya, Ya]),
    ardhasama(
        "Viyoginī",
        "Viyogini",
        "odd pādas sa sa ja ga, even pādas sa bha ra la ga",
        &[Sa, Sa, Ja, Ga],
        &[Sa, Bha, Ra, La, Ga],
    ),
    ardhasama(
        "Aupacchandasika",
        "Aupacchandasika",
        "odd pādas sa sa ja ga ga, even pādas sa bha ra la ga ga",
        &[Sa, Sa, Ja, Ga, Ga],
        &[Sa, Bha, Ra, La, Ga, Ga],
    ),
    ardhasama(
        "Puṣpitāgrā",
        "Pushpitagra",
        "odd pādas na na ra ya, even pādas na ja ja ra ga",
        &[Na, Na, Ra, Ya],
        &[Na, Ja, Ja, Ra, Ga],
    ),
];
