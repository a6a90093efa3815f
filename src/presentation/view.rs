//! Render-ready projection of a risk report.
//!
//! [`ReportView`] resolves every display decision up front: tier bands,
//! status dots, urgency accents, action numbering and timeline
//! connectors. A renderer walks the sections in order and draws; it
//! never consults the raw report.

use crate::models::RiskReport;
use crate::presentation::tier::{status_color, RiskTier, Urgency, CRIMSON, EMERALD, ORANGE};

/// Headline banner: overall score, its tier, and the clinical summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBanner {
    pub score: u8,
    pub tier: RiskTier,
    pub summary: String,
}

/// One domain card. Card accents follow the score tier; the dot follows
/// the reported status independently.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainSection {
    /// Upper-cased for display.
    pub name: String,
    pub score: u8,
    pub tier: RiskTier,
    pub status_dot: &'static str,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
}

/// One recommended action, numbered 1-based in report order.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionItem {
    pub number: usize,
    pub action: String,
    pub urgency: Urgency,
    pub impact: String,
    pub timeframe: String,
}

/// Fixed-metadata probability tile. Labels and accents are constant;
/// only the value varies per report.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionTile {
    pub label: &'static str,
    pub caption: &'static str,
    pub accent: &'static str,
    pub value: u8,
}

/// One timeline milestone. `has_connector` is false only on the last
/// entry, where no line should be drawn to a next node.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub task: String,
    pub date: String,
    pub priority: Urgency,
    pub has_connector: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub banner: ScoreBanner,
    pub domains: Vec<DomainSection>,
    pub actions: Vec<ActionItem>,
    pub predictions: [PredictionTile; 3],
    pub key_findings: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
}

impl ReportView {
    pub fn new(report: &RiskReport) -> Self {
        let banner = ScoreBanner {
            score: report.overall_risk_score,
            tier: RiskTier::from_score(report.overall_risk_score),
            summary: report.clinical_summary.clone(),
        };

        let domains = report
            .domains
            .iter()
            .map(|(name, risk)| DomainSection {
                name: name.to_uppercase(),
                score: risk.score,
                tier: RiskTier::from_score(risk.score),
                status_dot: status_color(&risk.status),
                concerns: risk.concerns.clone(),
                recommendations: risk.recommendations.clone(),
            })
            .collect();

        let actions = report
            .priority_actions
            .iter()
            .enumerate()
            .map(|(idx, action)| ActionItem {
                number: idx + 1,
                action: action.action.clone(),
                urgency: Urgency::from(action.urgency.as_str()),
                impact: action.impact.clone(),
                timeframe: action.timeframe.clone(),
            })
            .collect();

        let predictions = [
            PredictionTile {
                label: "HOSPITAL ADMISSION RISK",
                caption: "Near-term probability",
                accent: ORANGE,
                value: report.hospital_admission_prob,
            },
            PredictionTile {
                label: "30-DAY READMISSION",
                caption: "Return probability",
                accent: CRIMSON,
                value: report.readmission_risk_30_day,
            },
            PredictionTile {
                label: "TREATMENT SUCCESS",
                caption: "Response likelihood",
                accent: EMERALD,
                value: report.treatment_response_likelihood,
            },
        ];

        let total = report.milestones.len();
        let timeline = report
            .milestones
            .iter()
            .enumerate()
            .map(|(idx, milestone)| TimelineEntry {
                task: milestone.task.clone(),
                date: milestone.date.clone(),
                priority: Urgency::from(milestone.priority.as_str()),
                has_connector: idx + 1 < total,
            })
            .collect();

        Self {
            banner,
            domains,
            actions,
            predictions,
            key_findings: report.key_findings.clone(),
            timeline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report::sample_report;
    use crate::presentation::tier::{AMBER, BLUE, RED};

    #[test]
    fn banner_reflects_overall_score() {
        let view = ReportView::new(&sample_report());
        assert_eq!(view.banner.score, 72);
        assert_eq!(view.banner.tier, RiskTier::High);
        assert!(view.banner.summary.contains("67-year-old"));
    }

    #[test]
    fn domains_keep_report_order_and_uppercase_names() {
        let view = ReportView::new(&sample_report());
        let names: Vec<&str> = view.domains.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["CARDIAC", "METABOLIC", "RENAL"]);
    }

    #[test]
    fn domain_card_splits_score_tier_from_status_dot() {
        let view = ReportView::new(&sample_report());
        let cardiac = &view.domains[0];
        assert_eq!(cardiac.tier, RiskTier::High);
        assert_eq!(cardiac.status_dot, RED);
        let metabolic = &view.domains[1];
        assert_eq!(metabolic.tier, RiskTier::Moderate);
        assert_eq!(metabolic.status_dot, AMBER);
        let renal = &view.domains[2];
        assert_eq!(renal.tier, RiskTier::Low);
        assert_eq!(renal.status_dot, EMERALD);
    }

    #[test]
    fn actions_number_from_one_in_order() {
        let view = ReportView::new(&sample_report());
        assert_eq!(view.actions[0].number, 1);
        assert_eq!(view.actions[0].urgency, Urgency::High);
        assert_eq!(view.actions[1].number, 2);
        assert_eq!(view.actions[1].urgency, Urgency::Medium);
    }

    #[test]
    fn prediction_tiles_carry_fixed_metadata() {
        let view = ReportView::new(&sample_report());
        let [admission, readmission, treatment] = &view.predictions;
        assert_eq!(admission.label, "HOSPITAL ADMISSION RISK");
        assert_eq!(admission.accent, ORANGE);
        assert_eq!(admission.value, 35);
        assert_eq!(readmission.label, "30-DAY READMISSION");
        assert_eq!(readmission.accent, CRIMSON);
        assert_eq!(readmission.value, 28);
        assert_eq!(treatment.label, "TREATMENT SUCCESS");
        assert_eq!(treatment.accent, EMERALD);
        assert_eq!(treatment.value, 70);
    }

    #[test]
    fn only_the_last_milestone_lacks_a_connector() {
        let view = ReportView::new(&sample_report());
        assert_eq!(view.timeline.len(), 2);
        assert!(view.timeline[0].has_connector);
        assert!(!view.timeline[1].has_connector);
    }

    #[test]
    fn unknown_milestone_priority_reads_low() {
        let mut report = sample_report();
        report.milestones[0].priority = "someday".to_string();
        let view = ReportView::new(&report);
        assert_eq!(view.timeline[0].priority, Urgency::Low);
        assert_eq!(view.timeline[0].priority.color(), BLUE);
    }
}
