use crate::references;
use crate::report::AssessmentReport;

/// Render the educational Markdown report: background, GLIDE components,
/// therapy direction with numbered citation footnotes, and closing notes.
pub fn to_markdown(report: &AssessmentReport) -> String {
    let case = &report.case;
    let assessment = &report.assessment;

    // Footnote numbers follow first appearance across the reason list.
    let mut cited: Vec<&'static str> = Vec::new();
    for reason in &assessment.recommendation.reasons {
        for &id in &reason.citations {
            if !cited.contains(&id) {
                cited.push(id);
            }
        }
    }

    let mut output = String::new();
    output.push_str("# TriChoice - Educational Report (not for clinical use)\n\n");
    output.push_str(&format!(
        "Generated: {}\n\n",
        report.generated_at.to_rfc3339()
    ));

    output.push_str("## Clinical background\n\n");
    output.push_str(&format!("- Etiology: {}\n", case.background.etiology));
    output.push_str(&format!("- TR severity: {}\n", case.context.tr_severity));
    output.push_str(&format!("- RV function: {}\n", case.context.rv_function));
    output.push_str(&format!(
        "- Pulmonary hypertension: {}\n",
        case.context.ph_status
    ));
    output.push_str(&format!(
        "- CIED lead across TV: {}\n",
        case.context.lead_status
    ));
    output.push_str(&format!(
        "- Surgical risk: {}\n",
        case.background.surgical_risk
    ));
    let organs = if case.background.organ_dysfunction.is_empty() {
        "None".to_string()
    } else {
        case.background
            .organ_dysfunction
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    output.push_str(&format!("- End-organ dysfunction: {organs}\n\n"));

    output.push_str("## GLIDE score\n\n");
    output.push_str(&format!("- Gap: {}\n", case.anatomy.gap));
    output.push_str(&format!("- Location: {}\n", case.anatomy.location));
    output.push_str(&format!("- Image quality: {}\n", case.anatomy.image_quality));
    output.push_str(&format!(
        "- Chordal density: {}\n",
        case.anatomy.chordal_density
    ));
    output.push_str(&format!(
        "- En-face TR morphology: {}\n\n",
        case.anatomy.enface_morphology
    ));
    output.push_str(&format!(
        "**GLIDE total: {}** - {}\n\n",
        assessment.score.total,
        assessment.score.bucket.description()
    ));

    output.push_str("## Suggested therapy direction (educational)\n\n");
    output.push_str(&format!(
        "**{}**\n\n",
        assessment.recommendation.label.heading()
    ));
    for reason in &assessment.recommendation.reasons {
        let markers = reason
            .citations
            .iter()
            .map(|id| {
                let number = cited.iter().position(|c| c == id).unwrap_or(0) + 1;
                format!(" [{number}]")
            })
            .collect::<String>();
        output.push_str(&format!("- {}{}\n", reason.text, markers));
    }
    output.push('\n');

    if !cited.is_empty() {
        output.push_str("## References\n\n");
        for (index, id) in cited.iter().enumerate() {
            let text = references::lookup(id).map(|c| c.text).unwrap_or(*id);
            output.push_str(&format!("{}. {}\n", index + 1, text));
        }
        output.push('\n');
    }

    output.push_str("## Notes\n\n");
    output.push_str(
        "- GLIDE components (1 point each if unfavorable): gap, location, image \
         quality, chordal density, en-face TR morphology. Higher totals predict \
         lower chance of acute T-TEER success.\n",
    );
    output.push_str(
        "- Therapy choice should always be individualized by the Heart Team based \
         on imaging, anatomy, RV/PH status, and device IFU.\n",
    );
    output.push_str(
        "- This document is for education and planning discussion only, not \
         clinical decision support.\n",
    );

    output
}
