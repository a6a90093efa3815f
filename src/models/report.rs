//! Multi-domain risk report returned by the scoring service.
//!
//! Wire shape is camelCase. Domain names are model-chosen and open-ended,
//! and their order is meaningful to the rendering layer, so `domains` is
//! an order-preserving map rather than a `HashMap`.
//!
//! `score`, `status`, `urgency` and `priority` arrive unvalidated; the
//! presentation layer maps them to closed vocabularies with total
//! fallbacks instead of rejecting a report over one odd string.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRisk {
    pub score: u8,
    pub status: String,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Domain name to risk assessment, in wire order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DomainMap(Vec<(String, DomainRisk)>);

impl DomainMap {
    pub fn iter(&self) -> std::slice::Iter<'_, (String, DomainRisk)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&DomainRisk> {
        self.0
            .iter()
            .find(|(domain, _)| domain == name)
            .map(|(_, risk)| risk)
    }
}

impl From<Vec<(String, DomainRisk)>> for DomainMap {
    fn from(entries: Vec<(String, DomainRisk)>) -> Self {
        Self(entries)
    }
}

impl<'a> IntoIterator for &'a DomainMap {
    type Item = &'a (String, DomainRisk);
    type IntoIter = std::slice::Iter<'a, (String, DomainRisk)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for DomainMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, risk) in &self.0 {
            map.serialize_entry(name, risk)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DomainMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DomainMapVisitor;

        impl<'de> Visitor<'de> for DomainMapVisitor {
            type Value = DomainMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of domain name to risk assessment")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry()? {
                    entries.push(entry);
                }
                Ok(DomainMap(entries))
            }
        }

        deserializer.deserialize_map(DomainMapVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityAction {
    pub action: String,
    pub urgency: String,
    pub impact: String,
    pub timeframe: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub task: String,
    pub date: String,
    pub priority: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    pub overall_risk_score: u8,
    #[serde(default)]
    pub risk_category: Option<String>,
    pub clinical_summary: String,
    pub domains: DomainMap,
    #[serde(default)]
    pub comorbidity_risk: Option<String>,
    pub priority_actions: Vec<PriorityAction>,
    pub hospital_admission_prob: u8,
    #[serde(rename = "readmissionRisk30Day")]
    pub readmission_risk_30_day: u8,
    pub treatment_response_likelihood: u8,
    pub key_findings: Vec<String>,
    pub milestones: Vec<Milestone>,
}

/// Response envelope for a scoring request. Exactly one of `analysis`
/// and `error` is populated depending on `success`; unknown siblings
/// (patient echo, timestamp) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    #[serde(default)]
    pub analysis: Option<RiskReport>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
pub(crate) fn sample_report() -> RiskReport {
    RiskReport {
        overall_risk_score: 72,
        risk_category: Some("High Risk".to_string()),
        clinical_summary: "67-year-old female with poorly controlled hypertension.".to_string(),
        domains: vec![
            (
                "cardiac".to_string(),
                DomainRisk {
                    score: 78,
                    status: "red".to_string(),
                    concerns: vec!["Stage 2 hypertension".to_string()],
                    recommendations: vec!["Cardiology referral within 1 week".to_string()],
                },
            ),
            (
                "metabolic".to_string(),
                DomainRisk {
                    score: 45,
                    status: "yellow".to_string(),
                    concerns: vec!["Elevated HbA1c".to_string()],
                    recommendations: vec!["Repeat HbA1c in 3 months".to_string()],
                },
            ),
            (
                "renal".to_string(),
                DomainRisk {
                    score: 20,
                    status: "green".to_string(),
                    concerns: vec![],
                    recommendations: vec!["Annual creatinine check".to_string()],
                },
            ),
        ]
        .into(),
        comorbidity_risk: Some("Hypertension with metabolic strain".to_string()),
        priority_actions: vec![
            PriorityAction {
                action: "Start antihypertensive therapy".to_string(),
                urgency: "high".to_string(),
                impact: "Reduces stroke risk".to_string(),
                timeframe: "Within 48 hours".to_string(),
            },
            PriorityAction {
                action: "Order lipid panel".to_string(),
                urgency: "medium".to_string(),
                impact: "Completes risk picture".to_string(),
                timeframe: "Within 2 weeks".to_string(),
            },
        ],
        hospital_admission_prob: 35,
        readmission_risk_30_day: 28,
        treatment_response_likelihood: 70,
        key_findings: vec!["Blood pressure 152/94 mmHg indicates stage 2 hypertension".to_string()],
        milestones: vec![
            Milestone {
                task: "Blood pressure recheck".to_string(),
                date: "Week 1".to_string(),
                priority: "high".to_string(),
            },
            Milestone {
                task: "Repeat labs".to_string(),
                date: "Month 3".to_string(),
                priority: "medium".to_string(),
            },
        ],
    }
}
