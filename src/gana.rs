//! Gaṇa feet and positional constraints.
//!
//! Classical meters are named by their gaṇas, the eight three-syllable feet
//! of the mnemonic *ya-mā-tā-rā-ja-bhā-na-sa-la-gāḥ*, plus the single
//! syllables `la` (laghu) and `ga` (guru). A meter definition is ultimately a
//! list of [`Constraint`]s, one per syllable position.

use std::fmt;

use crate::weight::Weight;

/// Requirement placed on a single syllable position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    Guru,
    Laghu,
    /// Unconstrained position.
    Any,
}

impl Constraint {
    pub fn admits(self, weight: Weight) -> bool {
        match self {
            Constraint::Guru => weight == Weight::Guru,
            Constraint::Laghu => weight == Weight::Laghu,
            Constraint::Any => true,
        }
    }

    pub fn is_constrained(self) -> bool {
        self != Constraint::Any
    }

    pub fn symbol(self) -> char {
        match self {
            Constraint::Guru => 'G',
            Constraint::Laghu => 'L',
            Constraint::Any => 'x',
        }
    }
}

impl From<Weight> for Constraint {
    fn from(weight: Weight) -> Self {
        match weight {
            Weight::Guru => Constraint::Guru,
            Weight::Laghu => Constraint::Laghu,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gana {
    Ya,
    Ma,
    Ta,
    Ra,
    Ja,
    Bha,
    Na,
    Sa,
    La,
    Ga,
}

impl Gana {
    const TRIPLES: [Gana; 8] = [
        Gana::Ya,
        Gana::Ma,
        Gana::Ta,
        Gana::Ra,
        Gana::Ja,
        Gana::Bha,
        Gana::Na,
        Gana::Sa,
    ];

    pub const fn weights(self) -> &'static [Weight] {
        use Weight::{Guru as G, Laghu as L};
        match self {
            Gana::Ya => &[L, G, G],
            Gana::Ma => &[G, G, G],
            Gana::Ta => &[G, G, L],
            Gana::Ra => &[G, L, G],
            Gana::Ja => &[L, G, L],
            Gana::Bha => &[G, L, L],
            Gana::Na => &[L, L, L],
            Gana::Sa => &[L, L, G],
            Gana::La => &[L],
            Gana::Ga => &[G],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Gana::Ya => "ya",
            Gana::Ma => "ma",
            Gana::Ta => "ta",
            Gana::Ra => "ra",
            Gana::Ja => "ja",
            Gana::Bha => "bha",
            Gana::Na => "na",
            Gana::Sa => "sa",
            Gana::La => "la",
            Gana::Ga => "ga",
        }
    }

    /// Accepts the full name (`bha`) or its initial (`b`), case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "y" | "ya" => Some(Gana::Ya),
            "m" | "ma" => Some(Gana::Ma),
            "t" | "ta" => Some(Gana::Ta),
            "r" | "ra" => Some(Gana::Ra),
            "j" | "ja" => Some(Gana::Ja),
            "b" | "bh" | "bha" => Some(Gana::Bha),
            "n" | "na" => Some(Gana::Na),
            "s" | "sa" => Some(Gana::Sa),
            "l" | "la" => Some(Gana::La),
            "g" | "ga" => Some(Gana::Ga),
            _ => None,
        }
    }

    fn from_triple(triple: &[Weight]) -> Option<Self> {
        Self::TRIPLES.into_iter().find(|g| g.weights() == triple)
    }
}

/// Expands a gaṇa sequence into per-position constraints.
pub fn expand(ganas: &[Gana]) -> Vec<Constraint> {
    ganas
        .iter()
        .flat_map(|g| g.weights().iter().copied().map(Constraint::from))
        .collect()
}

/// Parses a pāda pattern.
///
/// Two notations are accepted:
/// - positional: `G`, `L`, and `?`/`x`/`-` for an unconstrained position
///   (`"GGLGGLLGLGG"`); whitespace is ignored
/// - gaṇa: whitespace-separated names (`"ta ta ja ga ga"`) or a run of
///   initials (`"ttjgg"`)
pub fn parse_pattern(pattern: &str) -> Result<Vec<Constraint>, String> {
    let compact: String = pattern.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err("pattern is empty".to_string());
    }

    if compact.chars().all(|c| "GLgl?xX-".contains(c)) && compact.chars().any(|c| "GL?xX-".contains(c)) {
        return compact
            .chars()
            .map(|c| match c {
                'G' | 'g' => Ok(Constraint::Guru),
                'L' | 'l' => Ok(Constraint::Laghu),
                _ => Ok(Constraint::Any),
            })
            .collect();
    }

    let words: Vec<&str> = pattern.split_whitespace().collect();
    let ganas: Vec<Gana> = if words.len() > 1 {
        words
            .iter()
            .map(|w| Gana::from_name(w).ok_or_else(|| format!("unknown gaṇa '{w}'")))
            .collect::<Result<_, _>>()?
    } else if let Some(gana) = Gana::from_name(&compact) {
        vec![gana]
    } else {
        parse_initials(&compact)?
    };
    Ok(expand(&ganas))
}

fn parse_initials(run: &str) -> Result<Vec<Gana>, String> {
    let mut ganas = Vec::new();
    let mut rest = run;
    while let Some(c) = rest.chars().next() {
        let (token, len) = if rest.to_ascii_lowercase().starts_with("bh") {
            ("bh", 2)
        } else {
            (&rest[..c.len_utf8()], c.len_utf8())
        };
        let gana = Gana::from_name(token).ok_or_else(|| format!("unknown gaṇa '{token}'"))?;
        ganas.push(gana);
        rest = &rest[len..];
    }
    Ok(ganas)
}

/// Renders an observed weight sequence as gaṇa names, e.g. `ta ta ja ga ga`.
///
/// Full triples become gaṇas; a trailing remainder of one or two syllables is
/// spelled with `la`/`ga`.
pub fn gana_signature(weights: &[Weight]) -> String {
    let mut names: Vec<&str> = Vec::new();
    let mut chunks = weights.chunks_exact(3);
    for triple in chunks.by_ref() {
        if let Some(gana) = Gana::from_triple(triple) {
            names.push(gana.name());
        }
    }
    for weight in chunks.remainder() {
        names.push(match weight {
            Weight::Guru => Gana::Ga.name(),
            Weight::Laghu => Gana::La.name(),
        });
    }
    names.join(" ")
}

/// Renders constraints as a `G`/`L`/`x` string.
pub fn constraint_string(constraints: &[Constraint]) -> String {
    constraints.iter().map(|c| c.symbol()).collect()
}
