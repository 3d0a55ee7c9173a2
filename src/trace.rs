//! Process-step recording.
//!
//! Each pipeline stage appends one [`ProcessStep`] as it runs, so the trace
//! always reflects the computation actually performed.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One recorded stage of an identification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    /// 1-based, in execution order.
    pub step_number: usize,
    pub step_name: String,
    pub description: String,
    pub result: String,
}

/// Accumulates process steps for a single run.
#[derive(Debug, Default, Clone)]
pub struct Trace {
    steps: Vec<ProcessStep>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        result: impl Into<String>,
    ) {
        let step = ProcessStep {
            step_number: self.steps.len() + 1,
            step_name: name.into(),
            description: description.into(),
            result: result.into(),
        };
        debug!(
            step = step.step_number,
            name = %step.step_name,
            result = %step.result,
            "process step"
        );
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[ProcessStep] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<ProcessStep> {
        self.steps
    }
}
