use serde::{Deserialize, Serialize};

use crate::preference::{DEFAULT_CONTROLLER_PORT, DEFAULT_PREFERENCE_TTL};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControllerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    /// TTL advertised with `SETINPREF`, in seconds.
    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            ttl: default_ttl(),
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_CONTROLLER_PORT
}

fn default_ttl() -> u32 {
    DEFAULT_PREFERENCE_TTL
}
