//! Prompt assembly for the risk analysis request.
//!
//! The user prompt carries every patient datum plus a worked example of
//! the exact JSON shape the model must return. Absent optional vitals
//! and labs are omitted from their sections rather than rendered as
//! nulls, so the model never reasons about placeholder values.

use crate::models::{PatientRecord, Vitals};

/// System message for every scoring exchange.
pub const SYSTEM_PROMPT: &str = "You are a clinical risk assessment AI. Always respond with valid JSON only. No markdown formatting. Base your analysis on the specific vital signs, lab values, and conditions provided.";

/// Worked response example, up to the fields that embed patient data.
const RESPONSE_SHAPE_HEAD: &str = r#"{
  "overallRiskScore": 75,
  "riskCategory": "High",
  "domains": {
    "cardiac": {
      "score": 80,
      "status": "red",
      "concerns": ["Elevated blood pressure indicates Stage 2 Hypertension", "Increased cardiovascular disease risk"],
      "recommendations": ["Initiate or intensify antihypertensive therapy", "Cardiology consultation within 2 weeks", "Daily home BP monitoring"]
    },
    "respiratory": {
      "score": 65,
      "status": "yellow",
      "concerns": ["SpO2 slightly below optimal range", "Possible hypoxemia risk"],
      "recommendations": ["Pulmonary function test", "Consider supplemental oxygen", "Monitor respiratory rate"]
    },
    "metabolic": {
      "score": 70,
      "status": "yellow",
      "concerns": ["HbA1c above target indicating poor glycemic control", "Dyslipidemia present"],
      "recommendations": ["Adjust diabetes medications", "Dietary counseling with nutritionist", "Increase exercise regimen"]
    },
    "renal": {
      "score": 60,
      "status": "yellow",
      "concerns": ["Elevated creatinine suggesting kidney dysfunction", "Reduced eGFR indicating CKD Stage 3"],
      "recommendations": ["Nephrology consultation", "Avoid nephrotoxic medications", "Monitor kidney function quarterly"]
    }
  },
  "comorbidityRisk": "This patient presents with multiple interacting chronic conditions that synergistically increase overall health risk. The combination of cardiovascular disease, metabolic syndrome, and renal impairment requires coordinated multi-system management to prevent acute decompensation.",
  "priorityActions": [
    {
      "action": "Optimize blood pressure control immediately",
      "urgency": "high",
      "impact": "Reducing BP to target range can decrease cardiovascular event risk by 30-40% and slow progression of kidney disease",
      "timeframe": "Within 1-2 weeks"
    },
    {
      "action": "Intensify diabetes management and achieve HbA1c target",
      "urgency": "high",
      "impact": "Preventing microvascular complications including retinopathy, nephropathy, and neuropathy. Each 1% reduction in HbA1c reduces complications by 25%",
      "timeframe": "Within 1 month"
    },
    {
      "action": "Schedule comprehensive cardiology evaluation",
      "urgency": "medium",
      "impact": "Assess for underlying coronary artery disease and optimize cardiac medications to prevent heart failure or MI",
      "timeframe": "Within 4-6 weeks"
    }
  ],
  "hospitalAdmissionProb": 35,
  "readmissionRisk30Day": 28,
  "treatmentResponseLikelihood": 70,
  "milestones": [
    {
      "task": "Recheck HbA1c and fasting glucose",
      "date": "3 months",
      "priority": "high"
    },
    {
      "task": "Repeat comprehensive metabolic panel and lipid panel",
      "date": "3 months",
      "priority": "high"
    },
    {
      "task": "Follow-up renal function tests (Creatinine, eGFR)",
      "date": "3 months",
      "priority": "high"
    },
    {
      "task": "Blood pressure recheck and medication adjustment",
      "date": "2 weeks",
      "priority": "high"
    },
    {
      "task": "Cardiology consultation appointment",
      "date": "4-6 weeks",
      "priority": "medium"
    }
  ]"#;

const RESPONSE_RULES: &str = r#"IMPORTANT:
- Score domains from 0-100 (0=no risk, 100=critical risk)
- Use "red" status for scores 60+, "yellow" for 30-59, "green" for <30
- Provide specific, actionable recommendations
- Base risk scores on actual vital signs and lab values provided
- Return ONLY valid JSON, no markdown, no explanations."#;

/// Renders the full analysis prompt for one patient.
pub fn build_analysis_prompt(patient: &PatientRecord) -> String {
    let conditions = if patient.conditions.is_empty() {
        "None reported".to_string()
    } else {
        patient.conditions.join(", ")
    };
    let medications = if patient.medications.is_empty() {
        "None".to_string()
    } else {
        patient.medications.join(", ")
    };
    let allergies = if patient.allergies.is_empty() {
        "None known".to_string()
    } else {
        patient.allergies.join(", ")
    };
    let labs = labs_block(patient);
    let vitals = vitals_block(&patient.vitals);
    let smoking = if patient.smoking {
        "Yes - Active smoker"
    } else {
        "Non-smoker"
    };
    let gender = patient.gender.as_str();
    let gender_lower = gender.to_lowercase();

    format!(
        r#"You are an expert clinical AI physician. Analyze this patient comprehensively and provide a detailed risk assessment.

PATIENT INFORMATION:
Name: {name}
Age: {age} years
Gender: {gender}

MEDICAL CONDITIONS:
{conditions}

VITAL SIGNS:
{vitals}

LABORATORY RESULTS:
{labs}

MEDICATIONS:
{medications}

SOCIAL HISTORY:
- Smoking: {smoking}
- Alcohol: {alcohol}
- Allergies: {allergies}

Provide a comprehensive risk assessment in VALID JSON format with this EXACT structure:
{RESPONSE_SHAPE_HEAD},
  "clinicalSummary": "This {age}-year-old {gender_lower} patient presents with significant multi-system health challenges requiring intensive disease management. Primary concerns include inadequately controlled hypertension, metabolic dysregulation, and early chronic kidney disease. Immediate intervention is necessary to prevent progression to end-stage complications.",
  "keyFindings": [
    "Blood pressure {systolic}/{diastolic} mmHg indicating Stage 2 Hypertension - immediate treatment adjustment required",
    "Multiple chronic conditions creating synergistic risk for adverse cardiovascular events",
    "Evidence of early organ damage requiring prompt specialist evaluation and coordinated care management"
  ]
}}

{RESPONSE_RULES}"#,
        name = patient.name,
        age = patient.age,
        alcohol = patient.alcohol.as_str(),
        systolic = patient.vitals.systolic_bp,
        diastolic = patient.vitals.diastolic_bp,
    )
}

fn vitals_block(vitals: &Vitals) -> String {
    let mut lines = vec![
        format!(
            "- Blood Pressure: {}/{} mmHg",
            vitals.systolic_bp, vitals.diastolic_bp
        ),
        format!("- Heart Rate: {} bpm", vitals.heart_rate),
    ];
    if let Some(spo2) = vitals.spo2 {
        lines.push(format!("- SpO2: {spo2}%"));
    }
    if let Some(temperature) = vitals.temperature {
        lines.push(format!("- Temperature: {temperature}°F"));
    }
    if let Some(weight) = vitals.weight {
        lines.push(format!("- Weight: {weight} lbs"));
    }
    if let Some(height) = vitals.height {
        lines.push(format!("- Height: {height} inches"));
    }
    if let (Some(weight), Some(height)) = (vitals.weight, vitals.height) {
        if height > 0 {
            let bmi = weight as f64 / (height as f64 * height as f64) * 703.0;
            lines.push(format!("- BMI: {bmi:.1} kg/m²"));
        }
    }
    lines.join("\n")
}

fn labs_block(patient: &PatientRecord) -> String {
    let labs = &patient.labs;
    let mut entries = Vec::new();
    if let Some(hba1c) = labs.hba1c {
        entries.push(format!("HbA1c: {hba1c}%"));
    }
    if let Some(ldl) = labs.ldl {
        entries.push(format!("LDL: {ldl} mg/dL"));
    }
    if let Some(hdl) = labs.hdl {
        entries.push(format!("HDL: {hdl} mg/dL"));
    }
    if let Some(creatinine) = labs.creatinine {
        entries.push(format!("Creatinine: {creatinine} mg/dL"));
    }
    if let Some(egfr) = labs.egfr {
        entries.push(format!("eGFR: {egfr} mL/min"));
    }
    if let Some(glucose) = labs.glucose {
        entries.push(format!("Glucose: {glucose} mg/dL"));
    }
    if entries.is_empty() {
        "No labs available".to_string()
    } else {
        entries.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlcoholUse, Gender, Labs, PatientRecord, Vitals};

    fn patient() -> PatientRecord {
        PatientRecord {
            name: "Maria Gonzalez".into(),
            age: 67,
            gender: Gender::Female,
            conditions: vec!["Hypertension".into(), "Type 2 Diabetes".into()],
            vitals: Vitals {
                systolic_bp: 152,
                diastolic_bp: 94,
                heart_rate: 88,
                temperature: Some(98.6),
                spo2: None,
                weight: Some(180),
                height: Some(70),
            },
            labs: Labs {
                hba1c: Some(8.2),
                ldl: None,
                hdl: None,
                creatinine: None,
                egfr: None,
                glucose: Some(145),
            },
            medications: vec!["Lisinopril 10mg".into()],
            allergies: vec![],
            smoking: true,
            alcohol: AlcoholUse::Occasional,
        }
    }

    #[test]
    fn carries_patient_details() {
        let prompt = build_analysis_prompt(&patient());
        assert!(prompt.contains("Name: Maria Gonzalez"));
        assert!(prompt.contains("Age: 67 years"));
        assert!(prompt.contains("Gender: Female"));
        assert!(prompt.contains("Hypertension, Type 2 Diabetes"));
        assert!(prompt.contains("- Blood Pressure: 152/94 mmHg"));
        assert!(prompt.contains("- Heart Rate: 88 bpm"));
        assert!(prompt.contains("Lisinopril 10mg"));
    }

    #[test]
    fn omits_absent_vitals() {
        let prompt = build_analysis_prompt(&patient());
        assert!(!prompt.contains("- SpO2:"));
        assert!(prompt.contains("- Temperature: 98.6°F"));

        let mut with_spo2 = patient();
        with_spo2.vitals.spo2 = Some(94);
        let prompt = build_analysis_prompt(&with_spo2);
        assert!(prompt.contains("- SpO2: 94%"));
    }

    #[test]
    fn bmi_needs_both_weight_and_height() {
        let prompt = build_analysis_prompt(&patient());
        assert!(prompt.contains("- BMI: 25.8 kg/m²"));

        let mut no_height = patient();
        no_height.vitals.height = None;
        let prompt = build_analysis_prompt(&no_height);
        assert!(!prompt.contains("- BMI:"));
    }

    #[test]
    fn labs_render_with_units_or_fall_back() {
        let prompt = build_analysis_prompt(&patient());
        assert!(prompt.contains("HbA1c: 8.2%"));
        assert!(prompt.contains("Glucose: 145 mg/dL"));
        assert!(!prompt.contains("LDL:"));

        let mut no_labs = patient();
        no_labs.labs = Labs {
            hba1c: None,
            ldl: None,
            hdl: None,
            creatinine: None,
            egfr: None,
            glucose: None,
        };
        let prompt = build_analysis_prompt(&no_labs);
        assert!(prompt.contains("No labs available"));
    }

    #[test]
    fn empty_lists_use_clinical_defaults() {
        let mut bare = patient();
        bare.conditions.clear();
        bare.medications.clear();
        let prompt = build_analysis_prompt(&bare);
        assert!(prompt.contains("None reported"));
        assert!(prompt.contains("MEDICATIONS:\nNone\n"));
        assert!(prompt.contains("Allergies: None known"));
    }

    #[test]
    fn social_history_reflects_flags() {
        let prompt = build_analysis_prompt(&patient());
        assert!(prompt.contains("- Smoking: Yes - Active smoker"));
        assert!(prompt.contains("- Alcohol: Occasional"));

        let mut non_smoker = patient();
        non_smoker.smoking = false;
        let prompt = build_analysis_prompt(&non_smoker);
        assert!(prompt.contains("- Smoking: Non-smoker"));
    }

    #[test]
    fn demands_the_exact_response_shape() {
        let prompt = build_analysis_prompt(&patient());
        assert!(prompt.contains("VALID JSON format with this EXACT structure"));
        assert!(prompt.contains("\"overallRiskScore\""));
        assert!(prompt.contains("\"readmissionRisk30Day\""));
        assert!(prompt.contains("\"milestones\""));
        assert!(prompt.contains("Return ONLY valid JSON, no markdown, no explanations."));
        assert!(prompt.contains("Use \"red\" status for scores 60+"));
    }

    #[test]
    fn example_summary_embeds_patient_demographics() {
        let prompt = build_analysis_prompt(&patient());
        assert!(prompt.contains("This 67-year-old female patient"));
        assert!(prompt.contains("Blood pressure 152/94 mmHg indicating Stage 2 Hypertension"));
    }

    #[test]
    fn system_prompt_pins_json_only_output() {
        assert!(SYSTEM_PROMPT.contains("valid JSON only"));
        assert!(SYSTEM_PROMPT.contains("No markdown"));
    }
}
