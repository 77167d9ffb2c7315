use crate::types::assessment::{GlideScore, SeverityBucket};
use crate::types::inputs::AnatomicFlags;

/// Compute the GLIDE total and its likelihood bucket.
///
/// Each of the five components contributes exactly one point when it sits in
/// its unfavorable category; all components are equally weighted. Total with
/// valid enum inputs is a pure function and always lands in 0..=5.
pub fn compute_score(flags: &AnatomicFlags) -> GlideScore {
    let mut total: u8 = 0;
    if flags.gap.is_unfavorable() {
        total += 1;
    }
    if flags.location.is_unfavorable() {
        total += 1;
    }
    if flags.image_quality.is_unfavorable() {
        total += 1;
    }
    if flags.chordal_density.is_unfavorable() {
        total += 1;
    }
    if flags.enface_morphology.is_unfavorable() {
        total += 1;
    }

    let bucket = bucket_for(total);
    tracing::debug!(total, ?bucket, "computed GLIDE score");
    GlideScore { total, bucket }
}

/// Fixed, non-overlapping partition of the 0..=5 range.
fn bucket_for(total: u8) -> SeverityBucket {
    match total {
        0..=1 => SeverityBucket::HighLikelihood,
        2..=3 => SeverityBucket::IntermediateLikelihood,
        _ => SeverityBucket::LowLikelihood,
    }
}
