//! Typed intake form state.
//!
//! The form owns coerced values, not raw text: every text edit passes
//! through [`coerce`] at the binding boundary, so a numeric field is
//! always either a typed value or absent. Hosting surfaces address
//! fields through [`TextField`] and [`ListField`] instead of stringly
//! keyed lookups.

use crate::form::coerce;
use crate::models::{AlcoholUse, Gender};

/// Shown beside the submit control while any gating field is absent.
pub const REQUIRED_FIELDS_MESSAGE: &str =
    "Please fill in all required fields: Name, Age, Gender, Systolic BP, Diastolic BP, Heart Rate";

/// Text-entry fields, including the scratch inputs that feed the lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Age,
    SystolicBp,
    DiastolicBp,
    HeartRate,
    Temperature,
    Spo2,
    Weight,
    Height,
    Hba1c,
    Ldl,
    Hdl,
    Creatinine,
    Egfr,
    Glucose,
    NewCondition,
    NewMedication,
    NewAllergy,
}

/// The three free-text collections on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Conditions,
    Medications,
    Allergies,
}

/// All patient inputs for one analysis. `Default` is the blank form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientForm {
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub conditions: Vec<String>,
    pub systolic_bp: Option<i32>,
    pub diastolic_bp: Option<i32>,
    pub heart_rate: Option<i32>,
    pub temperature: Option<f64>,
    pub spo2: Option<i32>,
    pub weight: Option<i32>,
    pub height: Option<i32>,
    pub hba1c: Option<f64>,
    pub ldl: Option<i32>,
    pub hdl: Option<i32>,
    pub creatinine: Option<f64>,
    pub egfr: Option<i32>,
    pub glucose: Option<i32>,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
    pub smoking: bool,
    pub alcohol: AlcoholUse,
    new_condition: String,
    new_medication: String,
    new_allergy: String,
}

impl PatientForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one text edit. Numeric fields coerce immediately; clearing
    /// the input clears the value.
    pub fn set_text(&mut self, field: TextField, raw: &str) {
        match field {
            TextField::Name => self.name = raw.to_string(),
            TextField::Age => self.age = coerce::int_field(raw),
            TextField::SystolicBp => self.systolic_bp = coerce::int_field(raw),
            TextField::DiastolicBp => self.diastolic_bp = coerce::int_field(raw),
            TextField::HeartRate => self.heart_rate = coerce::int_field(raw),
            TextField::Temperature => self.temperature = coerce::decimal_field(raw),
            TextField::Spo2 => self.spo2 = coerce::int_field(raw),
            TextField::Weight => self.weight = coerce::int_field(raw),
            TextField::Height => self.height = coerce::int_field(raw),
            TextField::Hba1c => self.hba1c = coerce::decimal_field(raw),
            TextField::Ldl => self.ldl = coerce::int_field(raw),
            TextField::Hdl => self.hdl = coerce::int_field(raw),
            TextField::Creatinine => self.creatinine = coerce::decimal_field(raw),
            TextField::Egfr => self.egfr = coerce::int_field(raw),
            TextField::Glucose => self.glucose = coerce::int_field(raw),
            TextField::NewCondition => self.new_condition = raw.to_string(),
            TextField::NewMedication => self.new_medication = raw.to_string(),
            TextField::NewAllergy => self.new_allergy = raw.to_string(),
        }
    }

    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.gender = gender;
    }

    pub fn set_smoking(&mut self, smoking: bool) {
        self.smoking = smoking;
    }

    pub fn set_alcohol(&mut self, alcohol: AlcoholUse) {
        self.alcohol = alcohol;
    }

    pub fn items(&self, list: ListField) -> &[String] {
        match list {
            ListField::Conditions => &self.conditions,
            ListField::Medications => &self.medications,
            ListField::Allergies => &self.allergies,
        }
    }

    /// Current content of the scratch input feeding `list`.
    pub fn scratch(&self, list: ListField) -> &str {
        match list {
            ListField::Conditions => &self.new_condition,
            ListField::Medications => &self.new_medication,
            ListField::Allergies => &self.new_allergy,
        }
    }

    /// Moves the scratch input into its list, trimmed. Whitespace-only
    /// scratch is a no-op and the scratch is kept for further typing.
    pub fn append_item(&mut self, list: ListField) {
        let (items, scratch) = match list {
            ListField::Conditions => (&mut self.conditions, &mut self.new_condition),
            ListField::Medications => (&mut self.medications, &mut self.new_medication),
            ListField::Allergies => (&mut self.allergies, &mut self.new_allergy),
        };
        let trimmed = scratch.trim();
        if trimmed.is_empty() {
            return;
        }
        items.push(trimmed.to_string());
        scratch.clear();
    }

    /// Removes the item at `index`. Out-of-range indices are ignored.
    pub fn remove_item(&mut self, list: ListField, index: usize) {
        let items = match list {
            ListField::Conditions => &mut self.conditions,
            ListField::Medications => &mut self.medications,
            ListField::Allergies => &mut self.allergies,
        };
        if index < items.len() {
            items.remove(index);
        }
    }

    /// True once every gating field holds a value: name, age, gender and
    /// the three core vitals. Optional vitals and labs never gate.
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
            && self.age.is_some()
            && self.gender.is_some()
            && self.systolic_bp.is_some()
            && self.diastolic_bp.is_some()
            && self.heart_rate.is_some()
    }

    pub fn validation_message(&self) -> Option<&'static str> {
        if self.can_submit() {
            None
        } else {
            Some(REQUIRED_FIELDS_MESSAGE)
        }
    }
}
