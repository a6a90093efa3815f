//! Patient intake form: typed state plus the text-to-value coercion
//! applied at the binding boundary.

pub mod coerce;
pub mod state;

pub use state::{ListField, PatientForm, TextField, REQUIRED_FIELDS_MESSAGE};
