//! HTTP surface of the analysis service.
//!
//! Routes nest under `/api/` and share one [`ApiContext`]. The router
//! is composable; `analysis_router()` returns a `Router` that can be
//! mounted on any axum server instance.

pub mod error;
pub mod router;
pub mod types;

pub use error::ApiError;
pub use router::analysis_router;
pub use types::ApiContext;
