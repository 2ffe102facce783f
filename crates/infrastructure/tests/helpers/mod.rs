mod controller_mock;
mod dns_server_mock;

pub use controller_mock::{closed_port, CapturingController};
pub use dns_server_mock::{MockDnsServer, MockRecord, MockReply};
