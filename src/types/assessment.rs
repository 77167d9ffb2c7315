//! Engine output types: score, bucket, label, and rationale.

use serde::Serialize;

/// Highest reachable GLIDE total (five components, one point each).
pub const GLIDE_MAX: u8 = 5;

/// Likelihood of acute T-TEER success implied by the GLIDE total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeverityBucket {
    HighLikelihood,
    IntermediateLikelihood,
    LowLikelihood,
}

impl SeverityBucket {
    pub fn description(self) -> &'static str {
        match self {
            SeverityBucket::HighLikelihood => {
                "High likelihood of successful T-TEER (GLIDE 0-1)"
            }
            SeverityBucket::IntermediateLikelihood => {
                "Intermediate likelihood of T-TEER success (GLIDE 2-3)"
            }
            SeverityBucket::LowLikelihood => "Low likelihood of T-TEER success (GLIDE >=4)",
        }
    }
}

/// GLIDE total with its bucket. Derived only; never constructed from raw user
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlideScore {
    pub total: u8,
    pub bucket: SeverityBucket,
}

/// Suggested therapy direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TherapyLabel {
    RepairFavored,
    ReplacementFavored,
    Borderline,
}

impl TherapyLabel {
    pub fn heading(self) -> &'static str {
        match self {
            TherapyLabel::RepairFavored => "Repair favored (TriClip, T-TEER)",
            TherapyLabel::ReplacementFavored => "Replacement favored (TTVR)",
            TherapyLabel::Borderline => "Borderline: Heart Team review",
        }
    }

    /// Presentation hint for downstream UIs, decided here once rather than
    /// re-derived from label text.
    pub fn presentation_hint(self) -> PresentationHint {
        match self {
            TherapyLabel::RepairFavored => PresentationHint::Success,
            TherapyLabel::Borderline => PresentationHint::Warning,
            TherapyLabel::ReplacementFavored => PresentationHint::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresentationHint {
    Success,
    Warning,
    Error,
}

/// One rationale statement. Citations are reference IDs into
/// [`crate::references::CITATIONS`], not inline text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reason {
    pub text: String,
    pub citations: Vec<&'static str>,
}

impl Reason {
    pub fn new(text: impl Into<String>, citations: &[&'static str]) -> Self {
        Reason {
            text: text.into(),
            citations: citations.to_vec(),
        }
    }
}

/// Therapy direction plus ordered rationale. The first reason always states
/// the score-band rationale; later reasons are conditional add-ons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub label: TherapyLabel,
    pub hint: PresentationHint,
    pub reasons: Vec<Reason>,
}

/// Full engine output for one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub score: GlideScore,
    pub recommendation: Recommendation,
}
