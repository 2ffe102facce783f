use async_trait::async_trait;
use rpp_domain::{ControllerLookup, DomainError, ReverseDnsName};

/// Looks up the RDE controller published under a reverse-DNS name.
///
/// `Ok(ControllerLookup::NotFound)` means the name simply has no `RDE:`
/// record; `Err` is reserved for malformed answers and other hard failures.
#[async_trait]
pub trait ControllerResolver: Send + Sync {
    async fn resolve(
        &self,
        reverse_name: &ReverseDnsName,
        capacity: usize,
    ) -> Result<ControllerLookup, DomainError>;
}
