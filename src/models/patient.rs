//! Canonical patient record exchanged with the scoring service.
//!
//! Wire shape is snake_case throughout. Optional vitals and labs
//! serialize as explicit nulls so the service always sees every key,
//! which also means `skip_serializing_if` has no place here.

use serde::{Deserialize, Serialize};

use crate::form::PatientForm;
use crate::models::{AlcoholUse, Gender};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    pub systolic_bp: i32,
    pub diastolic_bp: i32,
    pub heart_rate: i32,
    pub temperature: Option<f64>,
    pub spo2: Option<i32>,
    pub weight: Option<i32>,
    pub height: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Labs {
    pub hba1c: Option<f64>,
    pub ldl: Option<i32>,
    pub hdl: Option<i32>,
    pub creatinine: Option<f64>,
    pub egfr: Option<i32>,
    pub glucose: Option<i32>,
}

impl Labs {
    /// True when no lab value is present at all.
    pub fn is_empty(&self) -> bool {
        self.hba1c.is_none()
            && self.ldl.is_none()
            && self.hdl.is_none()
            && self.creatinine.is_none()
            && self.egfr.is_none()
            && self.glucose.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub name: String,
    pub age: i32,
    pub gender: Gender,
    pub conditions: Vec<String>,
    pub vitals: Vitals,
    pub labs: Labs,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
    pub smoking: bool,
    pub alcohol: AlcoholUse,
}

impl PatientRecord {
    /// Builds the wire record from a completed form. Purely a projection:
    /// values are taken as coerced, the name is trimmed, and no further
    /// validation happens. Returns `None` while any gating field is
    /// absent, mirroring [`PatientForm::can_submit`].
    pub fn from_form(form: &PatientForm) -> Option<Self> {
        let name = form.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            age: form.age?,
            gender: form.gender.clone()?,
            conditions: form.conditions.clone(),
            vitals: Vitals {
                systolic_bp: form.systolic_bp?,
                diastolic_bp: form.diastolic_bp?,
                heart_rate: form.heart_rate?,
                temperature: form.temperature,
                spo2: form.spo2,
                weight: form.weight,
                height: form.height,
            },
            labs: Labs {
                hba1c: form.hba1c,
                ldl: form.ldl,
                hdl: form.hdl,
                creatinine: form.creatinine,
                egfr: form.egfr,
                glucose: form.glucose,
            },
            medications: form.medications.clone(),
            allergies: form.allergies.clone(),
            smoking: form.smoking,
            alcohol: form.alcohol.clone(),
        })
    }
}
