use async_trait::async_trait;
use rpp_domain::{ControllerAddress, DomainError, PreferenceMessage};

#[async_trait]
pub trait PreferenceAdvertiser: Send + Sync {
    /// Sends `message` to `controller` without waiting for a reply.
    async fn advertise(
        &self,
        controller: &ControllerAddress,
        message: &PreferenceMessage,
    ) -> Result<(), DomainError>;
}
