pub mod json;
pub mod md;

use crate::error::TriChoiceError;
use crate::types::assessment::Assessment;
use crate::types::case::Case;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// Everything a renderer needs: the case as entered plus the engine output.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub generated_at: DateTime<Utc>,
    pub case: Case,
    pub assessment: Assessment,
}

impl AssessmentReport {
    pub fn new(case: Case, assessment: Assessment) -> Self {
        AssessmentReport {
            generated_at: Utc::now(),
            case,
            assessment,
        }
    }
}

pub fn render(report: &AssessmentReport, format: OutputFormat) -> Result<String, TriChoiceError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(TriChoiceError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
