use crate::types::inputs::{AnatomicFlags, CaseBackground, ClinicalContext};
use serde::{Deserialize, Serialize};

/// One fully-specified case document, as read from a case file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub background: CaseBackground,
    pub context: ClinicalContext,
    pub anatomy: AnatomicFlags,
}
