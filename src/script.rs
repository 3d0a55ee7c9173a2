//! Devanagari character classes.
//!
//! The segmenter and the normalizer never look at raw code points directly;
//! they ask this module what role a character plays in a syllable. The
//! tables cover the Devanagari block (U+0900–U+097F) plus the combining
//! ranges of Devanagari Extended and Vedic Extensions.

pub const VIRAMA: char = '\u{094D}';
pub const NUKTA: char = '\u{093C}';
pub const ANUSVARA: char = '\u{0902}';
pub const VISARGA: char = '\u{0903}';
pub const CANDRABINDU: char = '\u{0901}';
pub const INVERTED_CANDRABINDU: char = '\u{0900}';
pub const AVAGRAHA: char = '\u{093D}';
pub const DANDA: char = '\u{0964}';
pub const DOUBLE_DANDA: char = '\u{0965}';
pub const ZWNJ: char = '\u{200C}';
pub const ZWJ: char = '\u{200D}';

/// Inherent length of a vowel, independent vowel letter, or vowel sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelLength {
    Short,
    Long,
}

/// The role a single character plays inside an akṣara.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Consonant,
    IndependentVowel(VowelLength),
    VowelSign(VowelLength),
    Virama,
    Nukta,
    Anusvara,
    Visarga,
    /// Candrabindu nasalizes the vowel but does not add weight.
    Candrabindu,
    /// ZWJ / ZWNJ, only meaningful next to a virama.
    Joiner,
    /// Vedic accents and other combining marks with no prosodic effect.
    Accent,
    Danda,
    DoubleDanda,
    Digit,
    Whitespace,
    /// Script characters that are never part of a syllable (avagraha, om…).
    Sign,
    /// Anything outside the script.
    Foreign,
}

/// Classifies a character.
pub fn classify(c: char) -> CharClass {
    use CharClass::*;
    use VowelLength::{Long, Short};

    match c {
        INVERTED_CANDRABINDU | CANDRABINDU => Candrabindu,
        ANUSVARA => Anusvara,
        VISARGA => Visarga,
        NUKTA => Nukta,
        VIRAMA => Virama,
        DANDA => Danda,
        DOUBLE_DANDA => DoubleDanda,
        ZWJ | ZWNJ => Joiner,

        // Independent vowels
        '\u{0904}' | '\u{0905}' | '\u{0907}' | '\u{0909}' | '\u{090B}' | '\u{090C}'
        | '\u{090E}' | '\u{0912}' | '\u{0973}' | '\u{0976}' => IndependentVowel(Short),
        '\u{0906}' | '\u{0908}' | '\u{090A}' | '\u{090D}' | '\u{090F}' | '\u{0910}'
        | '\u{0911}' | '\u{0913}' | '\u{0914}' | '\u{0960}' | '\u{0961}' | '\u{0972}'
        | '\u{0974}' | '\u{0975}' | '\u{0977}' => IndependentVowel(Long),

        // Consonants, including precomposed nukta forms
        '\u{0915}'..='\u{0939}' | '\u{0958}'..='\u{095F}' | '\u{0978}'..='\u{097F}' => Consonant,

        // Dependent vowel signs
        '\u{093A}' | '\u{093F}' | '\u{0941}' | '\u{0943}' | '\u{0946}' | '\u{094A}'
        | '\u{0956}' | '\u{0962}' => VowelSign(Short),
        '\u{093B}' | '\u{093E}' | '\u{0940}' | '\u{0942}' | '\u{0944}' | '\u{0945}'
        | '\u{0947}' | '\u{0948}' | '\u{0949}' | '\u{094B}' | '\u{094C}' | '\u{094E}'
        | '\u{094F}' | '\u{0955}' | '\u{0957}' | '\u{0963}' => VowelSign(Long),

        '\u{0951}'..='\u{0954}' | '\u{A8E0}'..='\u{A8F1}' | '\u{1CD0}'..='\u{1CFF}' => Accent,

        '\u{0966}'..='\u{096F}' | '\u{0970}' => Digit,

        '\u{0900}'..='\u{097F}' | '\u{A8F2}'..='\u{A8FF}' => Sign,

        c if c.is_whitespace() => Whitespace,
        _ => Foreign,
    }
}

/// True for characters that may begin an akṣara.
pub fn is_syllable_start(c: char) -> bool {
    matches!(
        classify(c),
        CharClass::Consonant | CharClass::IndependentVowel(_)
    )
}

/// True for characters the normalizer keeps inside a pāda.
pub fn is_retained(c: char) -> bool {
    !matches!(
        classify(c),
        CharClass::Foreign | CharClass::Digit | CharClass::Danda | CharClass::DoubleDanda
    )
}
