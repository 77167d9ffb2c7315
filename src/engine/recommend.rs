use crate::error::{Result, TriChoiceError};
use crate::references;
use crate::types::assessment::{Reason, Recommendation, TherapyLabel, GLIDE_MAX};
use crate::types::inputs::{ClinicalContext, LeadStatus, PhStatus, RvFunction, TrSeverity};

/// Map a GLIDE total plus clinical context to a therapy direction with
/// ordered rationale.
///
/// Exactly one of the three score bands applies per call. The band's
/// mandatory reason is always first; conditional reasons are appended in a
/// fixed order, each gated independently, so a band yields one to three
/// reasons. A total outside 0..=5 is a caller contract violation.
pub fn recommend(score: u8, context: &ClinicalContext) -> Result<Recommendation> {
    if score > GLIDE_MAX {
        return Err(TriChoiceError::InvalidInput(format!(
            "GLIDE score out of range: {score} (expected 0..={GLIDE_MAX})"
        )));
    }

    let severe_rv = context.rv_function == RvFunction::Severe;
    let severe_ph = context.ph_status == PhStatus::SeverePrecapillary;
    let torrential = context.tr_severity == TrSeverity::Torrential;
    let lead_impinging = context.lead_status == LeadStatus::Impinging;

    let label;
    let mut reasons = Vec::new();

    if score <= 1 {
        label = TherapyLabel::RepairFavored;
        reasons.push(Reason::new(
            "GLIDE 0-1 is associated with a high probability of acute T-TEER success.",
            &[references::GLIDE_DERIVATION],
        ));
        if severe_ph || severe_rv {
            reasons.push(Reason::new(
                "Severe PH or end-stage RV dysfunction may limit benefit; consider \
                 futility even if repair-leaning.",
                &[],
            ));
        }
        if lead_impinging {
            reasons.push(Reason::new(
                "CIED lead interaction requires a strategy (work-around vs lead management).",
                &[],
            ));
        }
    } else if score >= 4 {
        label = TherapyLabel::ReplacementFavored;
        reasons.push(Reason::new(
            "GLIDE >=4 predicts a low probability of T-TEER success; consider TTVR \
             if anatomy is suitable.",
            &[references::GLIDE_DERIVATION],
        ));
        if severe_rv {
            reasons.push(Reason::new(
                "Beware RV afterload mismatch and potential need for pacing after \
                 TTVR; assess RV tolerance carefully.",
                &[references::TRISCEND_II],
            ));
        }
        if lead_impinging {
            reasons.push(Reason::new(
                "Plan lead management before TTVR to avoid lead entrapment.",
                &[],
            ));
        }
    } else {
        label = TherapyLabel::Borderline;
        reasons.push(Reason::new(
            "GLIDE 2-3 gives intermediate T-TEER success; weigh RV function, PH, \
             TR extent, and lead status.",
            &[references::GLIDE_DERIVATION],
        ));
        // Only the severe grades gate these conditionals; moderate RV or PH
        // impairment triggers neither.
        if !(severe_rv || severe_ph) && !torrential {
            reasons.push(Reason::new(
                "With preserved RV function and non-severe PH, stepwise repair may \
                 be preferred for safety and incremental TR reduction.",
                &[references::TRILUMINATE],
            ));
        }
        if torrential || lead_impinging {
            reasons.push(Reason::new(
                "Torrential TR or anatomy/lead unfavorable for grasping favors \
                 replacement for more reliable elimination of TR.",
                &[references::TRISCEND_II],
            ));
        }
    }

    tracing::debug!(score, ?label, reason_count = reasons.len(), "selected score band");

    Ok(Recommendation {
        label,
        hint: label.presentation_hint(),
        reasons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::assessment::PresentationHint;

    fn context(
        rv_function: RvFunction,
        ph_status: PhStatus,
        tr_severity: TrSeverity,
        lead_status: LeadStatus,
    ) -> ClinicalContext {
        ClinicalContext {
            rv_function,
            ph_status,
            tr_severity,
            lead_status,
        }
    }

    fn benign_context() -> ClinicalContext {
        context(
            RvFunction::NormalOrMild,
            PhStatus::NoneOrMild,
            TrSeverity::Severe,
            LeadStatus::No,
        )
    }

    #[test]
    fn low_score_favors_repair_with_single_reason_in_benign_context() {
        for score in [0, 1] {
            let rec = recommend(score, &benign_context()).unwrap();
            assert_eq!(rec.label, TherapyLabel::RepairFavored);
            assert_eq!(rec.hint, PresentationHint::Success);
            assert_eq!(rec.reasons.len(), 1);
            assert!(rec.reasons[0].text.contains("GLIDE 0-1"));
        }
    }

    #[test]
    fn high_score_favors_replacement_with_mandatory_first_reason() {
        for score in [4, 5] {
            let rec = recommend(score, &benign_context()).unwrap();
            assert_eq!(rec.label, TherapyLabel::ReplacementFavored);
            assert_eq!(rec.hint, PresentationHint::Error);
            assert!(rec.reasons[0].text.contains("GLIDE >=4"));
        }
    }

    #[test]
    fn intermediate_score_is_borderline() {
        for score in [2, 3] {
            let rec = recommend(score, &benign_context()).unwrap();
            assert_eq!(rec.label, TherapyLabel::Borderline);
            assert_eq!(rec.hint, PresentationHint::Warning);
            assert!(rec.reasons[0].text.contains("GLIDE 2-3"));
        }
    }

    #[test]
    fn repair_band_appends_both_conditionals_when_gated_in() {
        // Severe PH plus an impinging lead at score 0: mandatory reason plus
        // both conditionals, in that order.
        let ctx = context(
            RvFunction::NormalOrMild,
            PhStatus::SeverePrecapillary,
            TrSeverity::Severe,
            LeadStatus::Impinging,
        );
        let rec = recommend(0, &ctx).unwrap();
        assert_eq!(rec.label, TherapyLabel::RepairFavored);
        assert_eq!(rec.reasons.len(), 3);
        assert!(rec.reasons[1].text.contains("futility"));
        assert!(rec.reasons[2].text.contains("lead"));
    }

    #[test]
    fn severe_rv_alone_also_triggers_repair_band_caution() {
        let ctx = context(
            RvFunction::Severe,
            PhStatus::NoneOrMild,
            TrSeverity::Severe,
            LeadStatus::No,
        );
        let rec = recommend(1, &ctx).unwrap();
        assert_eq!(rec.reasons.len(), 2);
        assert!(rec.reasons[1].text.contains("futility"));
    }

    #[test]
    fn replacement_band_appends_rv_and_lead_cautions_independently() {
        let rv_only = context(
            RvFunction::Severe,
            PhStatus::NoneOrMild,
            TrSeverity::Severe,
            LeadStatus::No,
        );
        let rec = recommend(5, &rv_only).unwrap();
        assert_eq!(rec.reasons.len(), 2);
        assert!(rec.reasons[1].text.contains("afterload"));

        let lead_only = context(
            RvFunction::NormalOrMild,
            PhStatus::NoneOrMild,
            TrSeverity::Severe,
            LeadStatus::Impinging,
        );
        let rec = recommend(4, &lead_only).unwrap();
        assert_eq!(rec.reasons.len(), 2);
        assert!(rec.reasons[1].text.contains("entrapment"));

        let both = context(
            RvFunction::Severe,
            PhStatus::NoneOrMild,
            TrSeverity::Severe,
            LeadStatus::Impinging,
        );
        let rec = recommend(4, &both).unwrap();
        assert_eq!(rec.reasons.len(), 3);
    }

    #[test]
    fn borderline_with_severe_rv_and_no_other_flags_has_single_reason() {
        // severe RV blocks the stepwise-repair conditional, and neither
        // torrential TR nor an impinging lead opens the replacement one.
        let ctx = context(
            RvFunction::Severe,
            PhStatus::NoneOrMild,
            TrSeverity::Severe,
            LeadStatus::No,
        );
        let rec = recommend(3, &ctx).unwrap();
        assert_eq!(rec.label, TherapyLabel::Borderline);
        assert_eq!(rec.reasons.len(), 1);
    }

    #[test]
    fn moderate_rv_or_ph_triggers_neither_borderline_conditional_gate() {
        // Moderate grades count as preserved for the stepwise-repair gate.
        let ctx = context(
            RvFunction::Moderate,
            PhStatus::Moderate,
            TrSeverity::Severe,
            LeadStatus::No,
        );
        let rec = recommend(2, &ctx).unwrap();
        assert_eq!(rec.reasons.len(), 2);
        assert!(rec.reasons[1].text.contains("stepwise repair"));
    }

    #[test]
    fn borderline_torrential_tr_favors_replacement_reason() {
        let ctx = context(
            RvFunction::NormalOrMild,
            PhStatus::NoneOrMild,
            TrSeverity::Torrential,
            LeadStatus::No,
        );
        let rec = recommend(2, &ctx).unwrap();
        // Torrential TR blocks the stepwise-repair conditional and opens the
        // replacement one.
        assert_eq!(rec.reasons.len(), 2);
        assert!(rec.reasons[1].text.contains("replacement"));
    }

    #[test]
    fn recommend_is_deterministic() {
        let ctx = context(
            RvFunction::Severe,
            PhStatus::SeverePrecapillary,
            TrSeverity::Torrential,
            LeadStatus::Impinging,
        );
        for score in 0..=5 {
            let first = recommend(score, &ctx).unwrap();
            let second = recommend(score, &ctx).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn out_of_range_score_is_invalid_input() {
        let err = recommend(6, &benign_context()).unwrap_err();
        assert!(matches!(err, TriChoiceError::InvalidInput(_)));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn mandatory_reason_cites_the_glide_derivation() {
        for score in 0..=5 {
            let rec = recommend(score, &benign_context()).unwrap();
            assert_eq!(rec.reasons[0].citations, vec![references::GLIDE_DERIVATION]);
        }
    }
}
