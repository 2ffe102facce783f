use crate::ports::PreferenceAdvertiser;
use rpp_domain::{ControllerAddress, ControllerLookup, DomainError, PreferenceMessage, Prefix};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct AdvertisePreferencesUseCase {
    advertiser: Arc<dyn PreferenceAdvertiser>,
}

impl AdvertisePreferencesUseCase {
    pub fn new(advertiser: Arc<dyn PreferenceAdvertiser>) -> Self {
        Self { advertiser }
    }

    /// Advertises to the controller found for `prefix`.
    ///
    /// A lookup without a controller fails with
    /// [`DomainError::ControllerUnresolved`] before any connection is made.
    pub async fn execute(
        &self,
        prefix: &Prefix,
        lookup: &ControllerLookup,
        message: &PreferenceMessage,
    ) -> Result<ControllerAddress, DomainError> {
        let Some(controller) = lookup.found() else {
            warn!(prefix = %prefix, "Refusing to advertise without a resolved controller");
            return Err(DomainError::ControllerUnresolved(prefix.to_string()));
        };

        self.execute_with_controller(controller, message).await?;
        Ok(controller.clone())
    }

    /// Advertises to an explicitly chosen controller.
    pub async fn execute_with_controller(
        &self,
        controller: &ControllerAddress,
        message: &PreferenceMessage,
    ) -> Result<(), DomainError> {
        debug!(
            controller = %controller,
            ttl = message.ttl,
            local_prefixes = %message.local_prefixes,
            preferences = %message.preferences,
            "Advertising inbound preferences"
        );

        self.advertiser.advertise(controller, message).await?;

        info!(controller = %controller, "Preferences advertised");
        Ok(())
    }
}
