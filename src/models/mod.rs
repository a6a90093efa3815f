//! Data model: the patient record sent for scoring and the risk
//! report that comes back.

pub mod enums;
pub mod patient;
pub mod report;

pub use enums::{AlcoholUse, Gender};
pub use patient::{Labs, PatientRecord, Vitals};
pub use report::{AnalysisResponse, DomainMap, DomainRisk, Milestone, PriorityAction, RiskReport};
