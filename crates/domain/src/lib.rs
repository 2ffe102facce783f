//! rpp Domain Layer
pub mod bounded_name;
pub mod config;
pub mod controller;
pub mod errors;
pub mod prefix;
pub mod preference;
pub mod reverse_name;

pub use bounded_name::{BoundedName, DEFAULT_NAME_CAPACITY, NAME_BUFFER_SIZE};
pub use config::{CliOverrides, Config, ConfigError};
pub use controller::{extract_controller, ControllerAddress, ControllerLookup, RDE_TAG};
pub use errors::DomainError;
pub use prefix::Prefix;
pub use preference::{
    AdvertiseStage, MessageSegment, PreferenceMessage, DEFAULT_CONTROLLER_PORT,
    DEFAULT_PREFERENCE_TTL, SETINPREF_COMMAND,
};
pub use reverse_name::{reverse, AddressFamily, ReverseDnsName};
