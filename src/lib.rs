//! # Chandas
//!
//! Rule-based identification of classical Sanskrit meters in Devanagari
//! verse.
//!
//! ```text
//! text ─► normalize ─► akshara::segment ─► weight::classify ─► matcher ─► IdentificationResult
//! ```
//!
//! ```no_run
//! let result = chandas::identify("कर्मण्येवाधिकारस्ते\nमा फलेषु कदाचन ।\nमा कर्मफलहेतुर्भूः\nमा ते सङ्गोऽस्त्वकर्मणि ॥")?;
//! assert_eq!(result.chandas_name(), "Anuṣṭubh");
//! # Ok::<(), chandas::ChandasError>(())
//! ```

pub mod akshara;
pub mod catalogue;
pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod gana;
pub mod matcher;
pub mod normalize;
pub mod result;
pub mod script;
pub mod span;
pub mod trace;
pub mod weight;

pub use crate::catalogue::{Catalogue, MeterDefinition, MeterEntry};
pub use crate::config::AnalyzerConfig;
pub use crate::engine::{identify, Analyzer, ScannedPada, ScannedVerse, DEMO_VERSE};
pub use crate::errors::{ChandasError, ErrorCategory};
pub use crate::result::{IdentificationResult, IdentifyRequest, IdentifyResponse, UNIDENTIFIED};
pub use crate::span::Span;
pub use crate::weight::{FinalSyllable, Weight, WeightRule};
