//! Extraction of the JSON report from raw model output.
//!
//! The model is instructed to answer with bare JSON, but fenced output
//! still shows up. A ```json fence wins over an anonymous one; with no
//! fence the whole response must parse. Parsing into [`RiskReport`]
//! also enforces the response schema before anything reaches a client.

use super::ScoringError;
use crate::models::RiskReport;

fn strip_fences(response: &str) -> &str {
    if let Some(start) = response.find("```json") {
        let rest = &response[start + 7..];
        match rest.find("```") {
            Some(end) => rest[..end].trim(),
            None => rest.trim(),
        }
    } else if let Some(start) = response.find("```") {
        let rest = &response[start + 3..];
        match rest.find("```") {
            Some(end) => rest[..end].trim(),
            None => rest.trim(),
        }
    } else {
        response.trim()
    }
}

pub fn parse_report(response: &str) -> Result<RiskReport, ScoringError> {
    let cleaned = strip_fences(response);
    serde_json::from_str(cleaned).map_err(|e| ScoringError::InvalidJson(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT_JSON: &str = r#"{
        "overallRiskScore": 45,
        "clinicalSummary": "Stable with moderate metabolic risk.",
        "domains": {
            "cardiac": {"score": 45, "status": "yellow", "concerns": [], "recommendations": []}
        },
        "priorityActions": [],
        "hospitalAdmissionProb": 10,
        "readmissionRisk30Day": 5,
        "treatmentResponseLikelihood": 80,
        "keyFindings": [],
        "milestones": []
    }"#;

    #[test]
    fn parses_bare_json() {
        let report = parse_report(REPORT_JSON).unwrap();
        assert_eq!(report.overall_risk_score, 45);
        assert_eq!(report.domains.len(), 1);
    }

    #[test]
    fn strips_json_fence_with_surrounding_prose() {
        let response = format!(
            "Here is the full assessment:\n```json\n{REPORT_JSON}\n```\nLet me know if you need more detail."
        );
        let report = parse_report(&response).unwrap();
        assert_eq!(report.overall_risk_score, 45);
    }

    #[test]
    fn strips_anonymous_fence() {
        let response = format!("```\n{REPORT_JSON}\n```");
        let report = parse_report(&response).unwrap();
        assert_eq!(report.treatment_response_likelihood, 80);
    }

    #[test]
    fn unclosed_fence_still_parses() {
        let response = format!("```json\n{REPORT_JSON}");
        assert!(parse_report(&response).is_ok());
    }

    #[test]
    fn prose_without_json_is_rejected() {
        let result = parse_report("The patient appears to be at moderate risk overall.");
        assert!(matches!(result, Err(ScoringError::InvalidJson(_))));
    }

    #[test]
    fn schema_violations_are_rejected() {
        let response = r#"{"overallRiskScore": 45, "domains": []}"#;
        let result = parse_report(response);
        assert!(matches!(result, Err(ScoringError::InvalidJson(_))));
    }

    #[test]
    fn error_text_names_the_model_output() {
        let error = parse_report("not json").unwrap_err();
        assert!(error
            .to_string()
            .starts_with("Invalid JSON response from AI:"));
    }
}
