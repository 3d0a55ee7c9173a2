//! Identification results and their JSON wire form.
//!
//! An [`IdentificationResult`] is built once at the end of a run and exposes
//! read-only accessors. [`IdentifyResponse`] is the flat,
//! request-layer-facing shape of the same data.

use serde::{Deserialize, Serialize};

use crate::errors::ChandasError;
use crate::trace::ProcessStep;
use crate::weight::{Weight, WeightRule};

/// Chandas name reported when no meter is accepted.
pub const UNIDENTIFIED: &str = "Unidentified";

/// One akṣara as reported to callers. Offsets are characters within the
/// normalized pāda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AksharaReport {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub position: usize,
    pub weight: Weight,
    pub rule: WeightRule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PadaAnalysis {
    pub text: String,
    pub syllable_count: usize,
    /// `G`/`L` string, one symbol per akṣara.
    pub pattern: String,
    pub aksharas: Vec<AksharaReport>,
}

impl PadaAnalysis {
    pub fn weights(&self) -> impl Iterator<Item = Weight> + '_ {
        self.aksharas.iter().map(|a| a.weight)
    }
}

/// The outcome of identifying one verse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentificationResult {
    chandas_name: String,
    confidence: f64,
    padas: Vec<PadaAnalysis>,
    gana_pattern: Vec<String>,
    explanation: String,
    process: Vec<ProcessStep>,
}

impl IdentificationResult {
    pub(crate) fn new(
        chandas_name: impl Into<String>,
        confidence: f64,
        padas: Vec<PadaAnalysis>,
        gana_pattern: Vec<String>,
        explanation: impl Into<String>,
        process: Vec<ProcessStep>,
    ) -> Self {
        Self {
            chandas_name: chandas_name.into(),
            confidence,
            padas,
            gana_pattern,
            explanation: explanation.into(),
            process,
        }
    }

    /// Result for a run aborted by an internal anomaly. The pāda analysis is
    /// dropped so no partial result escapes.
    pub(crate) fn anomaly(error: &ChandasError, process: Vec<ProcessStep>) -> Self {
        Self::new(
            UNIDENTIFIED,
            0.0,
            Vec::new(),
            Vec::new(),
            format!("Analysis stopped by an internal error ({error}); the verse could not be scanned reliably."),
            process,
        )
    }

    pub fn chandas_name(&self) -> &str {
        &self.chandas_name
    }

    pub fn is_identified(&self) -> bool {
        self.chandas_name != UNIDENTIFIED
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn padas(&self) -> &[PadaAnalysis] {
        &self.padas
    }

    pub fn syllable_counts(&self) -> Vec<usize> {
        self.padas.iter().map(|p| p.syllable_count).collect()
    }

    pub fn pada_patterns(&self) -> Vec<&str> {
        self.padas.iter().map(|p| p.pattern.as_str()).collect()
    }

    /// Observed weights of each pāda spelled as gaṇas.
    pub fn gana_pattern(&self) -> &[String] {
        &self.gana_pattern
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn process(&self) -> &[ProcessStep] {
        &self.process
    }

    pub fn to_response(&self) -> IdentifyResponse {
        let syllable_breakdown = self
            .padas
            .iter()
            .flat_map(|p| p.aksharas.iter())
            .enumerate()
            .map(|(i, a)| SyllableInfo {
                syllable: a.text.clone(),
                kind: a.weight,
                position: i + 1,
            })
            .collect();

        IdentifyResponse {
            chandas_name: self.chandas_name.clone(),
            syllable_breakdown,
            laghu_guru_pattern: self.padas.iter().map(|p| p.pattern.as_str()).collect(),
            explanation: self.explanation.clone(),
            confidence: self.confidence,
            identification_process: self.process.clone(),
            syllable_counts: self.syllable_counts(),
            pada_patterns: self.padas.iter().map(|p| p.pattern.clone()).collect(),
            gana_pattern: self.gana_pattern.clone(),
            padas: self.padas.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, ChandasError> {
        Ok(serde_json::to_string_pretty(&self.to_response())?)
    }
}

/// Request body: `{"text": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifyRequest {
    pub text: String,
}

impl IdentifyRequest {
    pub fn from_json(json: &str) -> Result<Self, ChandasError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableInfo {
    pub syllable: String,
    #[serde(rename = "type")]
    pub kind: Weight,
    /// 1-based over the whole verse.
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifyResponse {
    pub chandas_name: String,
    pub syllable_breakdown: Vec<SyllableInfo>,
    pub laghu_guru_pattern: String,
    pub explanation: String,
    pub confidence: f64,
    pub identification_process: Vec<ProcessStep>,
    pub syllable_counts: Vec<usize>,
    pub pada_patterns: Vec<String>,
    pub gana_pattern: Vec<String>,
    pub padas: Vec<PadaAnalysis>,
}
