//! Chandas Error Handling
//!
//! Every failure mode of the pipeline is a variant of [`ChandasError`]. The
//! enum derives both `thiserror::Error` (for `Display`/`source`) and
//! `miette::Diagnostic` (for codes, labels and help text), so the CLI can
//! render rich reports while library callers just match on variants.
//!
//! Diagnostic codes follow `chandas::<phase>::<kind>`.

use std::sync::Arc;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::span::Span;

pub type SourceArc = Arc<NamedSource<String>>;

/// Coarse classification used by callers to map errors onto responses
/// (a request layer maps `User` to 4xx and `Internal` to 5xx).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The input itself is unusable.
    User,
    /// An engine invariant failed. Indicates a bug.
    Internal,
    /// Configuration, catalogue or file problems before analysis starts.
    Setup,
}

#[derive(Error, Diagnostic, Debug)]
pub enum ChandasError {
    #[error("no Devanagari pāda found in input")]
    #[diagnostic(
        code(chandas::normalize::empty_input),
        help("Provide at least one line of Devanagari verse; lines may end with । or ॥.")
    )]
    EmptyInput {
        #[source_code]
        src: SourceArc,
        #[label("nothing usable here")]
        span: SourceSpan,
    },

    #[error("segmentation anomaly: {detail}")]
    #[diagnostic(
        code(chandas::segment::anomaly),
        help("This is an internal engine error. Please report this as a bug.")
    )]
    SegmentationAnomaly {
        detail: String,
        #[source_code]
        src: SourceArc,
        #[label("akṣara spans break here")]
        span: SourceSpan,
    },

    #[error("weight count mismatch: {aksharas} akṣaras but {weights} weights")]
    #[diagnostic(
        code(chandas::classify::weight_count),
        help("This is an internal engine error. Please report this as a bug.")
    )]
    WeightCountMismatch { aksharas: usize, weights: usize },

    #[error("invalid configuration: {message}")]
    #[diagnostic(code(chandas::config::invalid))]
    Config { message: String },

    #[error("invalid meter '{meter}': {message}")]
    #[diagnostic(
        code(chandas::catalogue::invalid_pattern),
        help("Patterns use G, L and ? (e.g. \"GGLGGLLGLGG\") or gaṇa names (e.g. \"ta ta ja ga ga\").")
    )]
    Catalogue { meter: String, message: String },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(chandas::io::read))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed YAML")]
    #[diagnostic(code(chandas::config::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("malformed JSON")]
    #[diagnostic(code(chandas::wire::json))]
    Json(#[from] serde_json::Error),
}

impl ChandasError {
    /// `input` is the raw text as the caller submitted it.
    pub fn empty_input(input: &str) -> Self {
        ChandasError::EmptyInput {
            src: named_source("input", input),
            span: SourceSpan::from(0..input.len()),
        }
    }

    /// `pada` is the normalized pāda text; `span` is a character span into it.
    pub fn segmentation_anomaly(pada: &str, span: Span, detail: impl Into<String>) -> Self {
        ChandasError::SegmentationAnomaly {
            detail: detail.into(),
            src: named_source("pāda", pada),
            span: span.to_source_span(pada),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        ChandasError::Config {
            message: message.into(),
        }
    }

    pub fn catalogue(meter: impl Into<String>, message: impl Into<String>) -> Self {
        ChandasError::Catalogue {
            meter: meter.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        ChandasError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ChandasError::EmptyInput { .. } => ErrorCategory::User,
            ChandasError::SegmentationAnomaly { .. } | ChandasError::WeightCountMismatch { .. } => {
                ErrorCategory::Internal
            }
            ChandasError::Config { .. }
            | ChandasError::Catalogue { .. }
            | ChandasError::Io { .. }
            | ChandasError::Yaml(_)
            | ChandasError::Json(_) => ErrorCategory::Setup,
        }
    }

    pub fn is_internal(&self) -> bool {
        self.category() == ErrorCategory::Internal
    }
}

fn named_source(name: &str, content: &str) -> SourceArc {
    Arc::new(NamedSource::new(name, content.to_string()))
}

/// Prints a ChandasError with full miette diagnostics to stderr.
pub fn print_error(error: ChandasError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}
