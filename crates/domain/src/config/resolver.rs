use serde::{Deserialize, Serialize};

/// Stub resolver settings used for the TXT lookup.
///
/// Unset fields fall back to the system resolver configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Nameservers as `IP` or `IP:PORT`; empty means read `resolv_conf`.
    #[serde(default)]
    pub nameservers: Vec<String>,

    #[serde(default = "default_resolv_conf")]
    pub resolv_conf: String,

    /// Per-try timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Rounds over the nameserver list.
    #[serde(default)]
    pub attempts: Option<u32>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            nameservers: Vec::new(),
            resolv_conf: default_resolv_conf(),
            timeout_secs: None,
            attempts: None,
        }
    }
}

fn default_resolv_conf() -> String {
    "/etc/resolv.conf".to_string()
}
