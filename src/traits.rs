use std::error::Error;

use async_trait::async_trait;

/// The boundary to the external classification service.
///
/// Implementors turn a free-text event description into a category label. \
/// The label is returned as the raw string the service answered with; mapping it into the closed
/// [`Category`](crate::category::Category) set (including the unknown-label fallback) is the
/// caller's job.
///
/// Errors from this trait are never fatal to event creation: the planner substitutes the default
/// category and moves on.
#[async_trait]
pub trait Classify {
    /// Ask the service which category this text belongs to.
    /// This call may be slow, or fail altogether (e.g. when the service is unreachable)
    async fn classify(&self, text: &str) -> Result<String, Box<dyn Error>>;
}
