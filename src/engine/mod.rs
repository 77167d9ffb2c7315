pub mod recommend;
pub mod score;

pub use recommend::recommend;
pub use score::compute_score;

use crate::error::Result;
use crate::types::assessment::Assessment;
use crate::types::inputs::{AnatomicFlags, ClinicalContext};

/// Score the anatomy, then derive the recommendation from the total and the
/// clinical context. The context never feeds the score.
pub fn assess(flags: &AnatomicFlags, context: &ClinicalContext) -> Result<Assessment> {
    let score = compute_score(flags);
    let recommendation = recommend(score.total, context)?;
    Ok(Assessment {
        score,
        recommendation,
    })
}
