use std::borrow::Cow;
use std::fmt;

pub const SETINPREF_COMMAND: &str = "SETINPREF";
pub const DEFAULT_CONTROLLER_PORT: u16 = 4343;
pub const DEFAULT_PREFERENCE_TTL: u32 = 3600;

const FIELD_SEPARATOR: &[u8] = b"\t";
const LINE_TERMINATOR: &[u8] = b"\r\n";

/// The write stages of a `SETINPREF` message, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdvertiseStage {
    Header,
    LocalPrefixes,
    Separator,
    Preferences,
    Terminator,
}

impl AdvertiseStage {
    pub const ALL: [AdvertiseStage; 5] = [
        AdvertiseStage::Header,
        AdvertiseStage::LocalPrefixes,
        AdvertiseStage::Separator,
        AdvertiseStage::Preferences,
        AdvertiseStage::Terminator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdvertiseStage::Header => "header",
            AdvertiseStage::LocalPrefixes => "local prefixes",
            AdvertiseStage::Separator => "separator",
            AdvertiseStage::Preferences => "preferences",
            AdvertiseStage::Terminator => "terminator",
        }
    }
}

impl fmt::Display for AdvertiseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct MessageSegment<'a> {
    pub stage: AdvertiseStage,
    pub bytes: Cow<'a, [u8]>,
}

/// Inbound routing preferences pushed to a controller.
///
/// `local_prefixes` and `preferences` are space-separated lists (prefixes,
/// and `AS:weight` pairs) sent exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceMessage {
    pub ttl: u32,
    pub local_prefixes: String,
    pub preferences: String,
}

impl PreferenceMessage {
    pub fn new(ttl: u32, local_prefixes: impl Into<String>, preferences: impl Into<String>) -> Self {
        Self {
            ttl,
            local_prefixes: local_prefixes.into(),
            preferences: preferences.into(),
        }
    }

    /// The message split into its write stages.
    pub fn segments(&self) -> [MessageSegment<'_>; 5] {
        [
            MessageSegment {
                stage: AdvertiseStage::Header,
                bytes: Cow::Owned(format!("{} {}\t", SETINPREF_COMMAND, self.ttl).into_bytes()),
            },
            MessageSegment {
                stage: AdvertiseStage::LocalPrefixes,
                bytes: Cow::Borrowed(self.local_prefixes.as_bytes()),
            },
            MessageSegment {
                stage: AdvertiseStage::Separator,
                bytes: Cow::Borrowed(FIELD_SEPARATOR),
            },
            MessageSegment {
                stage: AdvertiseStage::Preferences,
                bytes: Cow::Borrowed(self.preferences.as_bytes()),
            },
            MessageSegment {
                stage: AdvertiseStage::Terminator,
                bytes: Cow::Borrowed(LINE_TERMINATOR),
            },
        ]
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.segments()
            .iter()
            .flat_map(|segment| segment.bytes.iter().copied())
            .collect()
    }
}
