//! Text Normalizer
//!
//! Turns raw user text into an ordered list of verses, each an ordered list of
//! cleaned pāda strings. This stage is a best-effort filter, not validation:
//! characters outside the script are dropped silently and only a completely
//! unusable input is an error.
//!
//! Boundaries:
//! - a line break or `।` ends a pāda
//! - `॥`, a doubled `।।`, or a blank line ends the pāda and the verse

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::errors::ChandasError;
use crate::script;
use crate::span::Span;

static BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<verse>॥|।[ \t]*।|\r?\n[ \t\r]*\n)|(?P<pada>।|\r\n|[\r\n\x{2028}\x{2029}])")
        .expect("boundary pattern is valid")
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// One cleaned metrical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadaText {
    /// Cleaned text: script characters only, single spaces, trimmed.
    pub text: String,
    /// Index of the verse this pāda belongs to.
    pub verse: usize,
    /// Position of this pāda within its verse.
    pub index: usize,
    /// Character range of the raw segment this pāda came from.
    pub source: Span,
}

/// An ordered group of pādas closed by a verse terminator (or end of input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    pub index: usize,
    pub padas: Vec<PadaText>,
}

impl Verse {
    pub fn pada_texts(&self) -> Vec<&str> {
        self.padas.iter().map(|p| p.text.as_str()).collect()
    }
}

/// Splits `input` into verses of cleaned pādas.
///
/// Fails with [`ChandasError::EmptyInput`] when no pāda containing a
/// syllable survives filtering.
pub fn normalize(input: &str) -> Result<Vec<Verse>, ChandasError> {
    let mut verses = Vec::new();
    let mut current: Vec<PadaText> = Vec::new();

    let mut segment_start = 0;
    for caps in BOUNDARY.captures_iter(input) {
        let Some(whole) = caps.get(0) else { continue };
        push_pada(&mut current, verses.len(), input, segment_start, whole.start());
        if caps.name("verse").is_some() {
            close_verse(&mut verses, &mut current);
        }
        segment_start = whole.end();
    }
    push_pada(&mut current, verses.len(), input, segment_start, input.len());
    close_verse(&mut verses, &mut current);

    if verses.is_empty() {
        return Err(ChandasError::empty_input(input));
    }

    debug!(
        verses = verses.len(),
        padas = verses.iter().map(|v| v.padas.len()).sum::<usize>(),
        "normalized input"
    );
    Ok(verses)
}

/// Cleans a single raw pāda. Returns `None` when nothing syllabic remains.
pub fn clean_pada(raw: &str) -> Option<String> {
    let filtered: String = raw.chars().filter(|&c| script::is_retained(c)).collect();
    let collapsed = WHITESPACE.replace_all(filtered.trim(), " ");
    if collapsed.chars().any(script::is_syllable_start) {
        Some(collapsed.into_owned())
    } else {
        None
    }
}

fn push_pada(current: &mut Vec<PadaText>, verse: usize, input: &str, start: usize, end: usize) {
    let raw = &input[start..end];
    if let Some(text) = clean_pada(raw) {
        let char_start = input[..start].chars().count();
        current.push(PadaText {
            text,
            verse,
            index: current.len(),
            source: Span::new(char_start, char_start + raw.chars().count()),
        });
    }
}

fn close_verse(verses: &mut Vec<Verse>, current: &mut Vec<PadaText>) {
    if current.is_empty() {
        return;
    }
    verses.push(Verse {
        index: verses.len(),
        padas: std::mem::take(current),
    });
}
