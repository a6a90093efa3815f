//! Display mapping: risk tiers, status colors, and the render-ready
//! report view.

pub mod tier;
pub mod view;

pub use tier::{status_color, RiskTier, Urgency};
pub use view::{
    ActionItem, DomainSection, PredictionTile, ReportView, ScoreBanner, TimelineEntry,
};
