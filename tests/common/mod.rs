//! Shared verse fixtures and helpers for the integration tests.

#![allow(dead_code)]

use chandas::Weight;

/// Bhagavad Gītā 2.47, one pāda per line.
pub const BG_2_47: &str = "कर्मण्येवाधिकारस्ते\nमा फलेषु कदाचन ।\nमा कर्मफलहेतुर्भूः\nमा ते सङ्गोऽस्त्वकर्मणि ॥";

/// The same verse written as two half-verse lines.
pub const BG_2_47_HALVES: &str = "कर्मण्येवाधिकारस्ते मा फलेषु कदाचन ।\nमा कर्मफलहेतुर्भूः मा ते सङ्गोऽस्त्वकर्मणि ॥";

pub const BG_2_47_PATTERNS: [&str; 4] = ["GGGGLGGG", "GLGLLGLG", "GGLLLGGG", "GGGGLGLG"];

/// Bhagavad Gītā 1.1.
pub const BG_1_1: &str = "धर्मक्षेत्रे कुरुक्षेत्रे\nसमवेता युयुत्सवः ।\nमामकाः पाण्डवाश्चैव\nकिमकुर्वत सञ्जय ॥";

/// Four pādas of 7, 9, 8 and 8 syllables.
pub const UNEVEN: &str = "कमलदलनय\nकमलदलनयनम\nकमलदलनयन\nकमलदलनयन";

pub const INDRAVAJRA_PADA: &str = "GGLGGLLGLGG";
pub const UPENDRAVAJRA_PADA: &str = "LGLGGLLGLGG";

/// Indravajrā in open syllables; the last one is short and is guru only by
/// position.
pub const INDRAVAJRA_TEXT: &str = "तातकतातककताकताक";
/// Upendravajrā, likewise ending in a short syllable.
pub const UPENDRAVAJRA_TEXT: &str = "कताकतातककताकताक";

/// Parses a `G`/`L` string into weights.
pub fn weights(pattern: &str) -> Vec<Weight> {
    pattern
        .chars()
        .map(|c| Weight::from_symbol(c).expect("pattern uses only G and L"))
        .collect()
}

/// Four pādas with the same pattern.
pub fn verse_of(pattern: &str) -> Vec<Vec<Weight>> {
    vec![weights(pattern); 4]
}
