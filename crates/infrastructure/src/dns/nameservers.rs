//! Stub resolver settings from the host system.
//!
//! Reads nameservers, `options timeout:` and `options attempts:` from
//! `resolv.conf`, with configured values taking precedence.

use rpp_domain::config::{parse_nameserver, ResolverConfig};
use rpp_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_PORT: u16 = 53;
const DEFAULT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_ATTEMPTS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameserverSettings {
    pub nameservers: Vec<SocketAddr>,
    pub timeout: Duration,
    pub attempts: u32,
}

impl Default for NameserverSettings {
    fn default() -> Self {
        Self {
            nameservers: vec![SocketAddr::new(
                IpAddr::V4(Ipv4Addr::LOCALHOST),
                DEFAULT_PORT,
            )],
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            attempts: DEFAULT_ATTEMPTS,
        }
    }
}

impl NameserverSettings {
    /// Parses `resolv.conf` content. A file without `nameserver` lines
    /// falls back to the local host, as the system stub resolver does.
    pub fn parse_resolv_conf(data: &[u8]) -> Result<Self, DomainError> {
        let parsed = resolv_conf::Config::parse(data).map_err(|e| {
            DomainError::QueryFailed(format!("Error parsing resolv.conf: {:?}", e))
        })?;

        let mut settings = Self::default();

        let nameservers: Vec<SocketAddr> = parsed
            .nameservers
            .iter()
            .map(|ip| SocketAddr::new(ip.into(), DEFAULT_PORT))
            .collect();
        if !nameservers.is_empty() {
            settings.nameservers = nameservers;
        }

        if parsed.timeout > 0 {
            settings.timeout = Duration::from_secs(u64::from(parsed.timeout));
        }
        if parsed.attempts > 0 {
            settings.attempts = parsed.attempts;
        }

        Ok(settings)
    }

    /// Builds settings from configuration, reading `resolv.conf` for
    /// everything the configuration leaves unset.
    pub fn load(config: &ResolverConfig) -> Result<Self, DomainError> {
        let mut settings = match std::fs::read(&config.resolv_conf) {
            Ok(data) => Self::parse_resolv_conf(&data)?,
            Err(e) => {
                warn!(
                    path = %config.resolv_conf,
                    error = %e,
                    "Cannot read resolver configuration, using defaults"
                );
                Self::default()
            }
        };

        if !config.nameservers.is_empty() {
            settings.nameservers = config
                .nameservers
                .iter()
                .map(|server| {
                    parse_nameserver(server).ok_or_else(|| {
                        DomainError::InvalidIpAddress(format!("nameserver '{}'", server))
                    })
                })
                .collect::<Result<_, _>>()?;
        }
        if let Some(secs) = config.timeout_secs {
            settings.timeout = Duration::from_secs(secs);
        }
        if let Some(attempts) = config.attempts {
            settings.attempts = attempts;
        }

        if settings.nameservers.is_empty() {
            return Err(DomainError::NoNameservers);
        }

        debug!(
            nameservers = ?settings.nameservers,
            timeout_secs = settings.timeout.as_secs(),
            attempts = settings.attempts,
            "Resolver settings loaded"
        );

        Ok(settings)
    }
}
