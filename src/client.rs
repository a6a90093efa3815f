//! Blocking HTTP client for the analysis service.
//!
//! The service speaks its response envelope on error statuses as well,
//! so the client decodes the body before looking at the status code. A
//! failure is either transport (the call never completed, or the body
//! was not an envelope) or a rejection (the service answered
//! `success: false`); callers present the two differently.

use std::cell::Cell;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::models::{AnalysisResponse, PatientRecord, RiskReport};

#[derive(Error, Debug, Clone)]
pub enum ClientError {
    #[error("Cannot connect to analysis service at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Analysis service returned status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    Transport(String),

    #[error("Malformed response from analysis service: {0}")]
    Decode(String),

    #[error("{0}")]
    Rejected(String),
}

impl ClientError {
    /// True when the call itself failed, as opposed to the service
    /// completing the exchange and declining the analysis.
    pub fn is_transport(&self) -> bool {
        !matches!(self, ClientError::Rejected(_))
    }
}

/// Seam between the session and whatever produces risk reports.
pub trait RiskScorer {
    fn analyze(&self, patient: &PatientRecord) -> Result<RiskReport, ClientError>;
}

#[derive(Serialize)]
struct AnalyzeBody<'a> {
    patient: &'a PatientRecord,
}

pub struct AnalysisClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl AnalysisClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Client against the default local service address.
    pub fn default_local() -> Self {
        Self::new(config::DEFAULT_SERVICE_URL, config::REQUEST_TIMEOUT_SECS)
    }
}

impl RiskScorer for AnalysisClient {
    fn analyze(&self, patient: &PatientRecord) -> Result<RiskReport, ClientError> {
        let url = format!("{}{}", self.base_url, config::ANALYZE_PATH);

        let response = self
            .client
            .post(&url)
            .json(&AnalyzeBody { patient })
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    ClientError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    ClientError::Timeout(self.timeout_secs)
                } else {
                    ClientError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        decode_envelope(status, body)
    }
}

/// Decodes the service's response body. The envelope rides on error
/// statuses too, so the body is decoded first; the status only matters
/// when the body turns out not to be an envelope.
fn decode_envelope(status: reqwest::StatusCode, body: String) -> Result<RiskReport, ClientError> {
    let envelope: AnalysisResponse = match serde_json::from_str(&body) {
        Ok(envelope) => envelope,
        Err(e) if status.is_success() => return Err(ClientError::Decode(e.to_string())),
        Err(_) => {
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            })
        }
    };

    if !envelope.success {
        let detail = envelope
            .error
            .unwrap_or_else(|| "no error detail provided".to_string());
        return Err(ClientError::Rejected(detail));
    }

    envelope
        .analysis
        .ok_or_else(|| ClientError::Decode("success response carried no analysis".to_string()))
}

/// Mock scorer for tests: returns a fixed outcome and counts calls.
pub struct MockScorer {
    response: Result<RiskReport, ClientError>,
    calls: Cell<usize>,
}

impl MockScorer {
    pub fn new(report: RiskReport) -> Self {
        Self {
            response: Ok(report),
            calls: Cell::new(0),
        }
    }

    pub fn failing(error: ClientError) -> Self {
        Self {
            response: Err(error),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl RiskScorer for MockScorer {
    fn analyze(&self, _patient: &PatientRecord) -> Result<RiskReport, ClientError> {
        self.calls.set(self.calls.get() + 1);
        self.response.clone()
    }
}
