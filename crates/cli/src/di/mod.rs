use rpp_application::use_cases::{AdvertisePreferencesUseCase, ResolveControllerUseCase};
use rpp_domain::Config;
use rpp_infrastructure::controller::TcpPreferenceAdvertiser;
use rpp_infrastructure::dns::{DnsControllerResolver, NameserverSettings};
use std::sync::Arc;
use tracing::debug;

pub struct UseCases {
    pub resolve_controller: ResolveControllerUseCase,
    pub advertise_preferences: AdvertisePreferencesUseCase,
}

impl UseCases {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let settings = NameserverSettings::load(&config.resolver)?;
        debug!(
            nameservers = ?settings.nameservers,
            timeout_ms = settings.timeout.as_millis() as u64,
            attempts = settings.attempts,
            "Resolver configured"
        );

        let resolver = Arc::new(DnsControllerResolver::new(settings));
        let advertiser = Arc::new(TcpPreferenceAdvertiser::new(config.controller.port));

        Ok(Self {
            resolve_controller: ResolveControllerUseCase::new(resolver),
            advertise_preferences: AdvertisePreferencesUseCase::new(advertiser),
        })
    }
}
