use crate::domain::model::{LookupRecord, Outcome};
use crate::utils::error::Result;
use async_trait::async_trait;

/// One external postal-code service.
///
/// Implementations make exactly one request per call and hold no state that
/// another adapter could observe, so they can be raced freely.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Provenance label stamped on produced records.
    fn name(&self) -> &str;

    async fn lookup(&self, code: &str) -> Result<LookupRecord>;
}

pub trait Presenter {
    fn present<W: std::io::Write>(&self, outcome: &Outcome, out: &mut W) -> std::io::Result<()>;
}
