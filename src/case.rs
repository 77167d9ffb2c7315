use crate::error::{Result, TriChoiceError};
use crate::types::case::Case;
use std::path::Path;

/// Sample case document, also used by `trichoice template`.
pub const TEMPLATE: &str = r#"# TriChoice case file (educational; not clinical decision support)

[background]
etiology = "secondary"          # secondary | primary | lead-related | mixed
surgical_risk = "high"          # intermediate | high | prohibitive
organ_dysfunction = []          # any of: hepatic | renal | cachexia

[context]
rv_function = "normal-mild"     # normal-mild | moderate | severe
ph_status = "none-mild"         # none-mild | moderate | severe-precapillary
tr_severity = "severe"          # severe | massive | torrential
lead_status = "no"              # no | not-impinging | impinging

[anatomy]
gap = "favorable"               # favorable | unfavorable
location = "central"            # central | eccentric
image_quality = "good"          # good | suboptimal
chordal_density = "low"         # low | high
enface_morphology = "focal"     # focal | diffuse
"#;

pub fn load_case(path: &Path) -> Result<Case> {
    if !path.exists() {
        return Err(TriChoiceError::CaseNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| TriChoiceError::CaseParse(format!("{}: {}", path.display(), e)))
}

pub fn parse_case(content: &str) -> Result<Case> {
    toml::from_str(content).map_err(|e| TriChoiceError::CaseParse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::inputs::{LeadStatus, OrganDysfunction, RvFunction, SurgicalRisk};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn template_parses_into_a_case() {
        let case = parse_case(TEMPLATE).expect("template should parse");
        assert_eq!(case.background.surgical_risk, SurgicalRisk::High);
        assert!(case.background.organ_dysfunction.is_empty());
        assert_eq!(case.context.rv_function, RvFunction::NormalOrMild);
        assert_eq!(case.context.lead_status, LeadStatus::No);
    }

    #[test]
    fn organ_dysfunction_defaults_to_empty_when_omitted() {
        // Dropping just the key leaves the trailing comment as a valid
        // comment-only line.
        let content = TEMPLATE.replace("organ_dysfunction = []", "");
        let case = parse_case(&content).expect("case without organ list should parse");
        assert!(case.background.organ_dysfunction.is_empty());
    }

    #[test]
    fn organ_dysfunction_list_round_trips() {
        let content = TEMPLATE.replace(
            "organ_dysfunction = []",
            r#"organ_dysfunction = ["hepatic", "renal"]"#,
        );
        let case = parse_case(&content).expect("organ list should parse");
        assert_eq!(
            case.background.organ_dysfunction,
            vec![OrganDysfunction::Hepatic, OrganDysfunction::Renal]
        );
    }

    #[test]
    fn unknown_category_token_is_a_parse_error() {
        let content = TEMPLATE.replace(r#"gap = "favorable""#, r#"gap = "enormous""#);
        let err = parse_case(&content).unwrap_err();
        assert!(matches!(err, TriChoiceError::CaseParse(_)));
    }

    #[test]
    fn missing_section_is_a_parse_error() {
        let content = "[background]\netiology = \"secondary\"\nsurgical_risk = \"high\"\n";
        let err = parse_case(content).unwrap_err();
        assert!(matches!(err, TriChoiceError::CaseParse(_)));
    }

    #[test]
    fn load_case_reports_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_case(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, TriChoiceError::CaseNotFound(_)));
    }

    #[test]
    fn load_case_reads_a_written_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("case.toml");
        fs::write(&path, TEMPLATE).expect("case file should write");
        let case = load_case(&path).expect("case file should load");
        assert_eq!(case, parse_case(TEMPLATE).unwrap());
    }
}
