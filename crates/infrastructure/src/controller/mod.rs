pub mod tcp_advertiser;

pub use tcp_advertiser::{send_segments, TcpPreferenceAdvertiser};
