use thiserror::Error;

use crate::preference::AdvertiseStage;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Address too short: '{0}' (minimum 4 characters)")]
    AddressTooShort(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Capacity exceeded: {needed} bytes needed, {capacity} available")]
    CapacityExceeded { needed: usize, capacity: usize },

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Invalid TXT record: {0}")]
    InvalidTxtRecord(String),

    #[error("DNS query failed: {0}")]
    QueryFailed(String),

    #[error("No nameservers configured")]
    NoNameservers,

    #[error("No RDE controller resolved for {0}")]
    ControllerUnresolved(String),

    #[error("Cannot resolve controller address {address}: {reason}")]
    ControllerAddressUnresolvable { address: String, reason: String },

    #[error("socket() call failed: {0}")]
    SocketFailed(String),

    #[error("connection to the remote controller {server} failed: {reason}")]
    ConnectFailed { server: String, reason: String },

    #[error("failed to send routing prefs to {server} ({stage}): {reason}")]
    SendFailed {
        server: String,
        stage: AdvertiseStage,
        reason: String,
    },
}

impl DomainError {
    /// True for failures raised while building the reverse name.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::AddressTooShort(_)
                | DomainError::InvalidIpAddress(_)
                | DomainError::CapacityExceeded { .. }
        )
    }
}
