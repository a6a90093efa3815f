//! Total mappings from unvalidated report values to display vocabulary.
//!
//! Scores, statuses and urgencies come straight from the model. Every
//! mapping here has a fallback branch so an odd value degrades to a
//! sensible tier instead of failing the whole report.

// Accent palette shared across the report view.
pub const EMERALD: &str = "#10B981";
pub const AMBER: &str = "#FBBF24";
pub const RED: &str = "#EF4444";
pub const CRIMSON: &str = "#DC2626";
pub const ORANGE: &str = "#F59E0B";
pub const BLUE: &str = "#3B82F6";

pub const EMERALD_TINT: &str = "#D1FAE5";
pub const AMBER_TINT: &str = "#FEF3C7";
pub const RED_TINT: &str = "#FEE2E2";
pub const BLUE_TINT: &str = "#DBEAFE";

/// Three-tier banding of a 0-100 risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Bands a score: below 30 is low, 30 to 59 moderate, 60 and up high.
    pub fn from_score(score: u8) -> Self {
        if score < 30 {
            RiskTier::Low
        } else if score < 60 {
            RiskTier::Moderate
        } else {
            RiskTier::High
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            RiskTier::Low => EMERALD,
            RiskTier::Moderate => AMBER,
            RiskTier::High => RED,
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            RiskTier::Low => EMERALD_TINT,
            RiskTier::Moderate => AMBER_TINT,
            RiskTier::High => RED_TINT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "LOW RISK",
            RiskTier::Moderate => "MODERATE RISK",
            RiskTier::High => "HIGH RISK",
        }
    }
}

/// Urgency band for actions and timeline milestones. Anything the model
/// emits outside "high" and "medium" lands on `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl From<&str> for Urgency {
    fn from(value: &str) -> Self {
        match value {
            "high" => Urgency::High,
            "medium" => Urgency::Medium,
            _ => Urgency::Low,
        }
    }
}

impl Urgency {
    pub fn color(self) -> &'static str {
        match self {
            Urgency::High => CRIMSON,
            Urgency::Medium => ORANGE,
            Urgency::Low => BLUE,
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Urgency::High => RED_TINT,
            Urgency::Medium => AMBER_TINT,
            Urgency::Low => BLUE_TINT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::High => "high",
            Urgency::Medium => "medium",
            Urgency::Low => "low",
        }
    }
}

/// Dot color for a domain's traffic-light status. Unknown statuses read
/// as red so a malformed report never looks reassuring.
pub fn status_color(status: &str) -> &'static str {
    match status {
        "green" => EMERALD,
        "yellow" => AMBER,
        _ => RED,
    }
}
