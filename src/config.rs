//! Application-wide constants.
//!
//! Everything here is a compile-time default; the binary reads environment
//! overrides (listen address, Groq credentials) at startup so embedders and
//! tests never depend on ambient state.

pub const APP_NAME: &str = "Acuity";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ═══════════════════════════════════════════════════════════════════════════
// Analysis service
// ═══════════════════════════════════════════════════════════════════════════

/// Address the analysis server binds to unless overridden.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";

/// Environment variable that overrides [`DEFAULT_LISTEN_ADDR`].
pub const LISTEN_ADDR_ENV: &str = "ACUITY_LISTEN_ADDR";

/// Base URL the embedded client targets when none is supplied.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5000";

/// Scoring endpoint, relative to the service base URL.
pub const ANALYZE_PATH: &str = "/api/analyze-manual";

/// Liveness endpoint, relative to the service base URL.
pub const HEALTH_PATH: &str = "/api/health";

/// Outbound request timeout shared by the analysis client and chat backend.
/// Model completions routinely take tens of seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 120;

// ═══════════════════════════════════════════════════════════════════════════
// Chat backend (Groq)
// ═══════════════════════════════════════════════════════════════════════════

pub const GROQ_API_BASE: &str = "https://api.groq.com";

/// Environment variable holding the Groq API key. When unset the server
/// still starts but rejects scoring requests.
pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";

pub const GROQ_MODEL: &str = "llama-3.3-70b-versatile";

/// Low temperature keeps the model close to the requested JSON schema.
pub const GROQ_TEMPERATURE: f64 = 0.3;

pub const GROQ_MAX_TOKENS: u32 = 3000;

/// Default `RUST_LOG`-style filter when the environment provides none.
pub fn default_log_filter() -> &'static str {
    "acuity=info,tower_http=warn"
}
