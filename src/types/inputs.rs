//! Categorical input dimensions for a TriChoice case.
//!
//! Every dimension is a closed enumeration. Case files and `FromStr` use the
//! short machine tokens (the serde renames); `Display` gives the clinical
//! label used in rendered reports. Unknown tokens fail with
//! [`TriChoiceError::InvalidInput`] before any computation happens.

use crate::error::TriChoiceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn unknown(dimension: &str, token: &str) -> TriChoiceError {
    TriChoiceError::InvalidInput(format!("unknown {dimension} category: {token:?}"))
}

// ---------------------------------------------------------------------------
// Anatomic (GLIDE) dimensions: two categories each, one of them "unfavorable".
// ---------------------------------------------------------------------------

/// Septolateral coaptation gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoaptationGap {
    Favorable,
    Unfavorable,
}

impl CoaptationGap {
    pub fn is_unfavorable(self) -> bool {
        self == CoaptationGap::Unfavorable
    }
}

impl FromStr for CoaptationGap {
    type Err = TriChoiceError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "favorable" => Ok(CoaptationGap::Favorable),
            "unfavorable" => Ok(CoaptationGap::Unfavorable),
            other => Err(unknown("coaptation gap", other)),
        }
    }
}

impl fmt::Display for CoaptationGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CoaptationGap::Favorable => "Favorable (small/moderate)",
            CoaptationGap::Unfavorable => "Unfavorable (large)",
        })
    }
}

/// TR jet location relative to the grasping plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JetLocation {
    Central,
    Eccentric,
}

impl JetLocation {
    pub fn is_unfavorable(self) -> bool {
        self == JetLocation::Eccentric
    }
}

impl FromStr for JetLocation {
    type Err = TriChoiceError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "central" => Ok(JetLocation::Central),
            "eccentric" => Ok(JetLocation::Eccentric),
            other => Err(unknown("jet location", other)),
        }
    }
}

impl fmt::Display for JetLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JetLocation::Central => "Favorable (central)",
            JetLocation::Eccentric => "Unfavorable (commissural/off-axis/multiple)",
        })
    }
}

/// TEE image quality for the grasping view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageQuality {
    Good,
    Suboptimal,
}

impl ImageQuality {
    pub fn is_unfavorable(self) -> bool {
        self == ImageQuality::Suboptimal
    }
}

impl FromStr for ImageQuality {
    type Err = TriChoiceError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "good" => Ok(ImageQuality::Good),
            "suboptimal" => Ok(ImageQuality::Suboptimal),
            other => Err(unknown("image quality", other)),
        }
    }
}

impl fmt::Display for ImageQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ImageQuality::Good => "Good/Excellent",
            ImageQuality::Suboptimal => "Suboptimal/Shadowing",
        })
    }
}

/// Chordal structure density in the subvalvular apparatus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChordalDensity {
    Low,
    High,
}

impl ChordalDensity {
    pub fn is_unfavorable(self) -> bool {
        self == ChordalDensity::High
    }
}

impl FromStr for ChordalDensity {
    type Err = TriChoiceError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "low" => Ok(ChordalDensity::Low),
            "high" => Ok(ChordalDensity::High),
            other => Err(unknown("chordal density", other)),
        }
    }
}

impl fmt::Display for ChordalDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChordalDensity::Low => "Low/typical",
            ChordalDensity::High => "High/dense (tethered/subvalvular crowding)",
        })
    }
}

/// En-face TR morphology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnfaceMorphology {
    Focal,
    Diffuse,
}

impl EnfaceMorphology {
    pub fn is_unfavorable(self) -> bool {
        self == EnfaceMorphology::Diffuse
    }
}

impl FromStr for EnfaceMorphology {
    type Err = TriChoiceError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "focal" => Ok(EnfaceMorphology::Focal),
            "diffuse" => Ok(EnfaceMorphology::Diffuse),
            other => Err(unknown("en-face morphology", other)),
        }
    }
}

impl fmt::Display for EnfaceMorphology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EnfaceMorphology::Focal => "Focal/single",
            EnfaceMorphology::Diffuse => "Diffuse/multi-jet",
        })
    }
}

/// The five GLIDE components for one case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnatomicFlags {
    pub gap: CoaptationGap,
    pub location: JetLocation,
    pub image_quality: ImageQuality,
    pub chordal_density: ChordalDensity,
    pub enface_morphology: EnfaceMorphology,
}

// ---------------------------------------------------------------------------
// Clinical context: read by the recommendation engine, never by the score.
// ---------------------------------------------------------------------------

/// RV function on echo/CMR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RvFunction {
    #[serde(rename = "normal-mild")]
    NormalOrMild,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "severe")]
    Severe,
}

impl FromStr for RvFunction {
    type Err = TriChoiceError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "normal-mild" => Ok(RvFunction::NormalOrMild),
            "moderate" => Ok(RvFunction::Moderate),
            "severe" => Ok(RvFunction::Severe),
            other => Err(unknown("RV function", other)),
        }
    }
}

impl fmt::Display for RvFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RvFunction::NormalOrMild => "Normal/mildly impaired",
            RvFunction::Moderate => "Moderately impaired",
            RvFunction::Severe => "Severely impaired",
        })
    }
}

/// Pulmonary hypertension grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhStatus {
    #[serde(rename = "none-mild")]
    NoneOrMild,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "severe-precapillary")]
    SeverePrecapillary,
}

impl FromStr for PhStatus {
    type Err = TriChoiceError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "none-mild" => Ok(PhStatus::NoneOrMild),
            "moderate" => Ok(PhStatus::Moderate),
            "severe-precapillary" => Ok(PhStatus::SeverePrecapillary),
            other => Err(unknown("pulmonary hypertension status", other)),
        }
    }
}

impl fmt::Display for PhStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PhStatus::NoneOrMild => "None/mild",
            PhStatus::Moderate => "Moderate",
            PhStatus::SeverePrecapillary => "Severe/pre-capillary",
        })
    }
}

/// TR grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrSeverity {
    Severe,
    Massive,
    Torrential,
}

impl FromStr for TrSeverity {
    type Err = TriChoiceError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "severe" => Ok(TrSeverity::Severe),
            "massive" => Ok(TrSeverity::Massive),
            "torrential" => Ok(TrSeverity::Torrential),
            other => Err(unknown("TR severity", other)),
        }
    }
}

impl fmt::Display for TrSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TrSeverity::Severe => "Severe",
            TrSeverity::Massive => "Massive",
            TrSeverity::Torrential => "Torrential",
        })
    }
}

/// CIED lead crossing the tricuspid valve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStatus {
    #[serde(rename = "no")]
    No,
    #[serde(rename = "not-impinging")]
    NotImpinging,
    #[serde(rename = "impinging")]
    Impinging,
}

impl FromStr for LeadStatus {
    type Err = TriChoiceError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "no" => Ok(LeadStatus::No),
            "not-impinging" => Ok(LeadStatus::NotImpinging),
            "impinging" => Ok(LeadStatus::Impinging),
            other => Err(unknown("CIED lead status", other)),
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LeadStatus::No => "No",
            LeadStatus::NotImpinging => "Yes, not impinging",
            LeadStatus::Impinging => "Yes, impinging / causal",
        })
    }
}

/// The four context flags the recommendation engine reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalContext {
    pub rv_function: RvFunction,
    pub ph_status: PhStatus,
    pub tr_severity: TrSeverity,
    pub lead_status: LeadStatus,
}

// ---------------------------------------------------------------------------
// Background fields: carried through to the report, never read by the engine.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Etiology {
    #[serde(rename = "secondary")]
    Secondary,
    #[serde(rename = "primary")]
    Primary,
    #[serde(rename = "lead-related")]
    LeadRelated,
    #[serde(rename = "mixed")]
    Mixed,
}

impl FromStr for Etiology {
    type Err = TriChoiceError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "secondary" => Ok(Etiology::Secondary),
            "primary" => Ok(Etiology::Primary),
            "lead-related" => Ok(Etiology::LeadRelated),
            "mixed" => Ok(Etiology::Mixed),
            other => Err(unknown("TR etiology", other)),
        }
    }
}

impl fmt::Display for Etiology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Etiology::Secondary => "Secondary (functional)",
            Etiology::Primary => "Primary (degenerative)",
            Etiology::LeadRelated => "CIED lead-related",
            Etiology::Mixed => "Mixed/uncertain",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurgicalRisk {
    Intermediate,
    High,
    Prohibitive,
}

impl FromStr for SurgicalRisk {
    type Err = TriChoiceError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "intermediate" => Ok(SurgicalRisk::Intermediate),
            "high" => Ok(SurgicalRisk::High),
            "prohibitive" => Ok(SurgicalRisk::Prohibitive),
            other => Err(unknown("surgical risk", other)),
        }
    }
}

impl fmt::Display for SurgicalRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SurgicalRisk::Intermediate => "Intermediate",
            SurgicalRisk::High => "High",
            SurgicalRisk::Prohibitive => "Prohibitive",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrganDysfunction {
    Hepatic,
    Renal,
    Cachexia,
}

impl FromStr for OrganDysfunction {
    type Err = TriChoiceError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "hepatic" => Ok(OrganDysfunction::Hepatic),
            "renal" => Ok(OrganDysfunction::Renal),
            "cachexia" => Ok(OrganDysfunction::Cachexia),
            other => Err(unknown("end-organ dysfunction", other)),
        }
    }
}

impl fmt::Display for OrganDysfunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrganDysfunction::Hepatic => "Hepatic congestion/cirrhosis",
            OrganDysfunction::Renal => "Renal insufficiency/failure",
            OrganDysfunction::Cachexia => "Cachexia/malnutrition",
        })
    }
}

/// Narrative background for the report header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseBackground {
    pub etiology: Etiology,
    pub surgical_risk: SurgicalRisk,
    #[serde(default)]
    pub organ_dysfunction: Vec<OrganDysfunction>,
}
