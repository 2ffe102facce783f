pub mod answer_parser;
pub mod controller_resolver;
pub mod message_builder;
pub mod nameservers;
pub mod transport;

pub use answer_parser::{read_header, AnswerRecords, ResponseView};
pub use controller_resolver::DnsControllerResolver;
pub use message_builder::MessageBuilder;
pub use nameservers::NameserverSettings;
